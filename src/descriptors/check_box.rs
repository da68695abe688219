use crate::descriptors::{bind_setting, ItemKind, SettingsItem};
use crate::domain::{Binding, DomainError, ItemText, Setting, SettingValue};
use crate::ports::ConfigSnapshot;

/// A boolean setting rendered as a check box.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckBoxDescriptor {
    setting: Setting<bool>,
    text: ItemText,
}

impl CheckBoxDescriptor {
    pub fn new(setting: Setting<bool>, text: ItemText) -> Self {
        Self { setting, text }
    }

    /// Build from an untyped binding. Fails with `InvalidBinding` if it is
    /// absent or not a boolean setting.
    pub fn bind(setting: Option<SettingValue>, text: ItemText) -> Result<Self, DomainError> {
        let setting = bind_setting(setting, &text, ItemKind::CheckBox)?;
        Ok(Self::new(setting, text))
    }

    pub fn setting(&self) -> &Setting<bool> {
        &self.setting
    }

    pub fn is_checked(&self, snapshot: &dyn ConfigSnapshot) -> Result<bool, DomainError> {
        self.setting.read(snapshot)
    }

    pub fn set_checked(&self, snapshot: &mut dyn ConfigSnapshot, checked: bool) {
        self.setting.write(snapshot, checked);
    }
}

impl SettingsItem for CheckBoxDescriptor {
    fn kind(&self) -> ItemKind {
        ItemKind::CheckBox
    }

    fn text(&self) -> &ItemText {
        &self.text
    }

    fn binding(&self) -> &dyn Binding {
        &self.setting
    }
}
