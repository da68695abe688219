use crate::descriptors::{bind_setting, ItemKind, SettingsItem};
use crate::domain::{Binding, DomainError, ItemText, Setting, SettingPrimitive, SettingValue};
use crate::ports::ConfigSnapshot;

/// Numeric types a slider can drive.
pub trait SliderValue: SettingPrimitive + PartialOrd + Copy {
    const KIND: ItemKind;
}

impl SliderValue for i32 {
    const KIND: ItemKind = ItemKind::Slider;
}

impl SliderValue for f32 {
    const KIND: ItemKind = ItemKind::FloatSlider;
}

/// Bounds and step the widget offers.
///
/// Writes through a descriptor are not clamped to the range; the widget
/// decides whether to call [`clamp`](Self::clamp) first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

impl<T: PartialOrd + Copy> SliderRange<T> {
    pub fn new(min: T, max: T, step: T) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// A numeric setting rendered as a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider<T: SliderValue> {
    setting: Setting<T>,
    text: ItemText,
    range: SliderRange<T>,
    units: String,
}

pub type SliderDescriptor = Slider<i32>;
pub type FloatSliderDescriptor = Slider<f32>;

impl<T: SliderValue> Slider<T> {
    pub fn new(setting: Setting<T>, text: ItemText, range: SliderRange<T>) -> Self {
        Self {
            setting,
            text,
            range,
            units: String::new(),
        }
    }

    /// Build from an untyped binding. Fails with `InvalidBinding` if it is
    /// absent or of another numeric type.
    pub fn bind(
        setting: Option<SettingValue>,
        text: ItemText,
        range: SliderRange<T>,
    ) -> Result<Self, DomainError> {
        let setting = bind_setting(setting, &text, T::KIND)?;
        Ok(Self::new(setting, text, range))
    }

    /// Unit suffix shown next to the value, e.g. `"%"` or `"ms"`.
    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn setting(&self) -> &Setting<T> {
        &self.setting
    }

    pub fn range(&self) -> SliderRange<T> {
        self.range
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn selected_value(&self, snapshot: &dyn ConfigSnapshot) -> Result<T, DomainError> {
        self.setting.read(snapshot)
    }

    pub fn set_selected_value(&self, snapshot: &mut dyn ConfigSnapshot, value: T) {
        self.setting.write(snapshot, value);
    }
}

impl<T: SliderValue> SettingsItem for Slider<T> {
    fn kind(&self) -> ItemKind {
        T::KIND
    }

    fn text(&self) -> &ItemText {
        &self.text
    }

    fn binding(&self) -> &dyn Binding {
        &self.setting
    }
}
