use crate::descriptors::{bind_setting, ItemKind, SettingsItem};
use crate::domain::{Binding, DomainError, ItemText, Setting, SettingValue};
use crate::ports::ConfigSnapshot;

/// A string setting rendered as a free text field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDescriptor {
    setting: Setting<String>,
    text: ItemText,
}

impl InputDescriptor {
    pub fn new(setting: Setting<String>, text: ItemText) -> Self {
        Self { setting, text }
    }

    pub fn bind(setting: Option<SettingValue>, text: ItemText) -> Result<Self, DomainError> {
        let setting = bind_setting(setting, &text, ItemKind::Input)?;
        Ok(Self::new(setting, text))
    }

    pub fn setting(&self) -> &Setting<String> {
        &self.setting
    }

    pub fn value(&self, snapshot: &dyn ConfigSnapshot) -> Result<String, DomainError> {
        self.setting.read(snapshot)
    }

    pub fn set_value(&self, snapshot: &mut dyn ConfigSnapshot, value: impl Into<String>) {
        self.setting.write(snapshot, value.into());
    }
}

impl SettingsItem for InputDescriptor {
    fn kind(&self) -> ItemKind {
        ItemKind::Input
    }

    fn text(&self) -> &ItemText {
        &self.text
    }

    fn binding(&self) -> &dyn Binding {
        &self.setting
    }
}
