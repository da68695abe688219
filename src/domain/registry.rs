use std::collections::BTreeMap;

use crate::domain::{SettingKey, SettingValue};

/// The schema of known settings, keyed by [`SettingKey`].
///
/// Screens look bindings up here by key; a key that was never registered is
/// the absent-binding case the screen builder reports.
#[derive(Debug, Clone, Default)]
pub struct SettingRegistry {
    settings: BTreeMap<SettingKey, SettingValue>,
}

impl SettingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a setting, returning the one it replaced under the same key.
    pub fn register(&mut self, setting: impl Into<SettingValue>) -> Option<SettingValue> {
        let setting = setting.into();
        self.settings.insert(setting.key().clone(), setting)
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, setting: impl Into<SettingValue>) -> Self {
        self.register(setting);
        self
    }

    pub fn get(&self, key: &SettingKey) -> Option<SettingValue> {
        self.settings.get(key).cloned()
    }

    /// Look up by dotted key text. Malformed keys find nothing.
    pub fn find(&self, key: &str) -> Option<SettingValue> {
        SettingKey::parse(key).ok().and_then(|k| self.get(&k))
    }

    pub fn contains(&self, key: &SettingKey) -> bool {
        self.settings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = &SettingValue> {
        self.settings.values()
    }
}
