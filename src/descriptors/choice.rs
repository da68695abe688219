use tracing::debug;

use crate::descriptors::{bind_setting, ItemKind, SettingsItem};
use crate::domain::{Binding, ChoiceOption, ChoiceValue, DomainError, ItemText, Setting, SettingValue};
use crate::ports::ConfigSnapshot;

/// An enumerated setting rendered as a single-choice list.
///
/// Works for int-backed and string-backed choices alike; the stored value is
/// whatever the selected option's [`ChoiceValue`] is.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceDescriptor {
    setting: Setting<ChoiceValue>,
    text: ItemText,
    options: Vec<ChoiceOption>,
}

impl ChoiceDescriptor {
    pub fn new(setting: Setting<ChoiceValue>, text: ItemText, options: Vec<ChoiceOption>) -> Self {
        Self {
            setting,
            text,
            options,
        }
    }

    pub fn bind(
        setting: Option<SettingValue>,
        text: ItemText,
        options: Vec<ChoiceOption>,
    ) -> Result<Self, DomainError> {
        let setting = bind_setting(setting, &text, ItemKind::SingleChoice)?;
        Ok(Self::new(setting, text, options))
    }

    pub fn setting(&self) -> &Setting<ChoiceValue> {
        &self.setting
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    pub fn selected_value(&self, snapshot: &dyn ConfigSnapshot) -> Result<ChoiceValue, DomainError> {
        self.setting.read(snapshot)
    }

    pub fn set_selected_value(&self, snapshot: &mut dyn ConfigSnapshot, value: impl Into<ChoiceValue>) {
        self.setting.write(snapshot, value.into());
    }

    /// Position of the stored value among the options, if it is one of them.
    pub fn selected_index(&self, snapshot: &dyn ConfigSnapshot) -> Result<Option<usize>, DomainError> {
        let value = self.selected_value(snapshot)?;
        Ok(self.options.iter().position(|o| o.value == value))
    }

    /// Store the value of the option at `index`.
    ///
    /// Returns false and writes nothing when `index` is out of range.
    pub fn set_selected_index(&self, snapshot: &mut dyn ConfigSnapshot, index: usize) -> bool {
        match self.options.get(index) {
            Some(option) => {
                self.setting.write(snapshot, option.value.clone());
                true
            }
            None => {
                debug!(key = %self.setting.key(), index, options = self.options.len(), "Choice index out of range");
                false
            }
        }
    }

    /// Label of the selected option, if the stored value is one of them.
    pub fn selected_label(&self, snapshot: &dyn ConfigSnapshot) -> Result<Option<&str>, DomainError> {
        Ok(self
            .selected_index(snapshot)?
            .map(|i| self.options[i].label.as_str()))
    }
}

impl SettingsItem for ChoiceDescriptor {
    fn kind(&self) -> ItemKind {
        ItemKind::SingleChoice
    }

    fn text(&self) -> &ItemText {
        &self.text
    }

    fn binding(&self) -> &dyn Binding {
        &self.setting
    }
}
