//! UI-facing descriptors that pair a setting with display text and a
//! widget kind.
//!
//! A rendering layer walks a list of [`SettingDescriptor`]s, picks a widget
//! from [`SettingsItem::kind`], and then reads and writes through the
//! matching concrete descriptor. The descriptors themselves hold no state
//! beyond their binding and text.

pub mod check_box;
pub mod choice;
pub mod input;
pub mod slider;

use serde::Serialize;
use std::fmt;

use crate::domain::{Binding, DomainError, ItemText, Setting, SettingKey, SettingPrimitive, SettingType, SettingValue};
use crate::ports::ConfigSnapshot;

pub use check_box::CheckBoxDescriptor;
pub use choice::ChoiceDescriptor;
pub use input::InputDescriptor;
pub use slider::{FloatSliderDescriptor, SliderDescriptor, SliderRange, SliderValue};

/// Which widget renders a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    CheckBox,
    Slider,
    FloatSlider,
    Input,
    SingleChoice,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::CheckBox => "check_box",
            ItemKind::Slider => "slider",
            ItemKind::FloatSlider => "float_slider",
            ItemKind::Input => "input",
            ItemKind::SingleChoice => "single_choice",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable summary handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorView {
    pub kind: ItemKind,
    pub key: String,
    pub setting_type: SettingType,
    pub title: String,
    pub description: String,
}

/// Behavior shared by every descriptor.
pub trait SettingsItem {
    /// Widget kind, fixed when the descriptor is built.
    fn kind(&self) -> ItemKind;

    fn text(&self) -> &ItemText;

    fn binding(&self) -> &dyn Binding;

    fn title(&self) -> &str {
        self.text().title()
    }

    fn description(&self) -> &str {
        self.text().description()
    }

    fn key(&self) -> &SettingKey {
        self.binding().key()
    }

    fn setting_type(&self) -> SettingType {
        self.binding().setting_type()
    }

    /// Whether the snapshot's active layer overrides this setting.
    fn is_overridden(&self, snapshot: &dyn ConfigSnapshot) -> bool {
        self.binding().is_overridden(snapshot)
    }

    /// Remove the active layer's override. Returns true if one was removed.
    fn clear(&self, snapshot: &mut dyn ConfigSnapshot) -> bool {
        self.binding().delete(snapshot)
    }

    /// Settings that are not runtime-editable are locked while a session runs.
    fn is_editable(&self, session_running: bool) -> bool {
        !session_running || self.binding().is_runtime_editable()
    }

    fn view(&self) -> DescriptorView {
        DescriptorView {
            kind: self.kind(),
            key: self.key().to_string(),
            setting_type: self.setting_type(),
            title: self.title().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Turn an optional, untyped binding into the typed setting a descriptor needs.
fn bind_setting<T: SettingPrimitive>(
    value: Option<SettingValue>,
    text: &ItemText,
    kind: ItemKind,
) -> Result<Setting<T>, DomainError> {
    let value = value.ok_or_else(|| DomainError::invalid_binding(text.title(), "no setting supplied"))?;
    value.typed::<T>().map_err(|other| {
        DomainError::invalid_binding(
            text.title(),
            format!(
                "{} needs a {} setting, {} is {}",
                kind,
                T::TYPE,
                other.key(),
                other.setting_type()
            ),
        )
    })
}

/// Any descriptor, for heterogeneous settings lists.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingDescriptor {
    CheckBox(CheckBoxDescriptor),
    Slider(SliderDescriptor),
    FloatSlider(FloatSliderDescriptor),
    Input(InputDescriptor),
    Choice(ChoiceDescriptor),
}

impl SettingDescriptor {
    fn item(&self) -> &dyn SettingsItem {
        match self {
            SettingDescriptor::CheckBox(d) => d,
            SettingDescriptor::Slider(d) => d,
            SettingDescriptor::FloatSlider(d) => d,
            SettingDescriptor::Input(d) => d,
            SettingDescriptor::Choice(d) => d,
        }
    }

    pub fn as_check_box(&self) -> Option<&CheckBoxDescriptor> {
        match self {
            SettingDescriptor::CheckBox(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&SliderDescriptor> {
        match self {
            SettingDescriptor::Slider(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_float_slider(&self) -> Option<&FloatSliderDescriptor> {
        match self {
            SettingDescriptor::FloatSlider(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&InputDescriptor> {
        match self {
            SettingDescriptor::Input(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&ChoiceDescriptor> {
        match self {
            SettingDescriptor::Choice(d) => Some(d),
            _ => None,
        }
    }
}

impl SettingsItem for SettingDescriptor {
    fn kind(&self) -> ItemKind {
        self.item().kind()
    }

    fn text(&self) -> &ItemText {
        self.item().text()
    }

    fn binding(&self) -> &dyn Binding {
        self.item().binding()
    }
}

impl From<CheckBoxDescriptor> for SettingDescriptor {
    fn from(d: CheckBoxDescriptor) -> Self {
        SettingDescriptor::CheckBox(d)
    }
}

impl From<SliderDescriptor> for SettingDescriptor {
    fn from(d: SliderDescriptor) -> Self {
        SettingDescriptor::Slider(d)
    }
}

impl From<FloatSliderDescriptor> for SettingDescriptor {
    fn from(d: FloatSliderDescriptor) -> Self {
        SettingDescriptor::FloatSlider(d)
    }
}

impl From<InputDescriptor> for SettingDescriptor {
    fn from(d: InputDescriptor) -> Self {
        SettingDescriptor::Input(d)
    }
}

impl From<ChoiceDescriptor> for SettingDescriptor {
    fn from(d: ChoiceDescriptor) -> Self {
        SettingDescriptor::Choice(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LayeredSnapshot;
    use crate::domain::{ChoiceOption, ChoiceValue};

    fn descriptors() -> Vec<SettingDescriptor> {
        vec![
            CheckBoxDescriptor::new(
                Setting::new(SettingKey::new("Core", "EnableX"), false),
                ItemText::literal("Enable X", ""),
            )
            .into(),
            SliderDescriptor::new(
                Setting::new(SettingKey::new("Core", "Volume"), 100),
                ItemText::literal("Volume", ""),
                SliderRange::new(0, 100, 1),
            )
            .into(),
            FloatSliderDescriptor::new(
                Setting::new(SettingKey::new("Core", "Overclock"), 1.0),
                ItemText::literal("Overclock", ""),
                SliderRange::new(0.0, 4.0, 0.01),
            )
            .into(),
            InputDescriptor::new(
                Setting::new(SettingKey::new("NetPlay", "Address"), "127.0.0.1".to_string()),
                ItemText::literal("Address", ""),
            )
            .into(),
            ChoiceDescriptor::new(
                Setting::new(SettingKey::new("NetPlay", "NetworkMode"), ChoiceValue::from("golf")),
                ItemText::literal("Network Mode", ""),
                vec![ChoiceOption::literal("Golf", "golf")],
            )
            .into(),
        ]
    }

    #[test]
    fn test_kind_per_variant() {
        let kinds: Vec<_> = descriptors().iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ItemKind::CheckBox,
                ItemKind::Slider,
                ItemKind::FloatSlider,
                ItemKind::Input,
                ItemKind::SingleChoice,
            ]
        );
    }

    #[test]
    fn test_kind_stable_across_edits() {
        let mut snapshot = LayeredSnapshot::global();
        let descriptor: SettingDescriptor = descriptors().remove(0);
        let before = descriptor.kind();

        let check_box = descriptor.as_check_box().unwrap();
        check_box.set_checked(&mut snapshot, true);
        assert!(check_box.is_checked(&snapshot).unwrap());
        descriptor.clear(&mut snapshot);

        assert_eq!(descriptor.kind(), before);
        assert_eq!(descriptor.kind(), ItemKind::CheckBox);
    }

    #[test]
    fn test_downcasts_match_kind() {
        for descriptor in descriptors() {
            let matched = match descriptor.kind() {
                ItemKind::CheckBox => descriptor.as_check_box().is_some(),
                ItemKind::Slider => descriptor.as_slider().is_some(),
                ItemKind::FloatSlider => descriptor.as_float_slider().is_some(),
                ItemKind::Input => descriptor.as_input().is_some(),
                ItemKind::SingleChoice => descriptor.as_choice().is_some(),
            };
            assert!(matched, "{} did not downcast", descriptor.kind());
        }
    }

    #[test]
    fn test_is_editable_while_running() {
        let locked = CheckBoxDescriptor::new(
            Setting::new(SettingKey::new("Core", "CPUThread"), true).runtime_editable(false),
            ItemText::literal("Dual Core", ""),
        );
        assert!(locked.is_editable(false));
        assert!(!locked.is_editable(true));

        let free = descriptors().remove(0);
        assert!(free.is_editable(true));
    }

    #[test]
    fn test_view_serializes_for_renderer() {
        let view = descriptors()[1].view();
        assert_eq!(view.key, "Core.Volume");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "slider");
        assert_eq!(json["setting_type"], "integer");
        assert_eq!(json["title"], "Volume");
    }

    #[test]
    fn test_bind_absent_is_invalid_binding() {
        let err = bind_setting::<bool>(None, &ItemText::literal("Enable X", ""), ItemKind::CheckBox)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidBinding { ref item, .. } if item == "Enable X"));
    }
}
