use tracing::debug;

use crate::domain::{ConfigValue, DomainError, SettingKey, SettingPrimitive, SettingType};
use crate::ports::{ConfigSnapshot, SnapshotExt};

/// Typed accessor for one setting.
///
/// A `Setting` owns no storage. It is bound to a key and delegates every
/// read and write to the snapshot passed in at call time, so the same
/// setting works against the global layer or a per-profile override.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting<T: SettingPrimitive> {
    key: SettingKey,
    default: Option<T>,
    runtime_editable: bool,
}

impl<T: SettingPrimitive> Setting<T> {
    /// Create a setting that falls back to `default` when nothing is stored.
    pub fn new(key: SettingKey, default: T) -> Self {
        Self {
            key,
            default: Some(default),
            runtime_editable: true,
        }
    }

    /// Create a setting whose default lives in the snapshot's base layer.
    ///
    /// Reading it from a snapshot that has no value anywhere fails with
    /// `MissingKey`.
    pub fn without_default(key: SettingKey) -> Self {
        Self {
            key,
            default: None,
            runtime_editable: true,
        }
    }

    /// Mark whether the value may change while a session is running.
    #[must_use]
    pub fn runtime_editable(mut self, editable: bool) -> Self {
        self.runtime_editable = editable;
        self
    }

    pub fn key(&self) -> &SettingKey {
        &self.key
    }

    pub fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    pub fn is_runtime_editable(&self) -> bool {
        self.runtime_editable
    }

    /// Current value in `snapshot`, or the default when nothing is stored.
    pub fn read(&self, snapshot: &dyn ConfigSnapshot) -> Result<T, DomainError> {
        if let Some(value) = snapshot.get_as::<T>(&self.key)? {
            return Ok(value);
        }

        match &self.default {
            Some(default) => {
                debug!(key = %self.key, "No stored value, using default");
                Ok(default.clone())
            }
            None => Err(DomainError::MissingKey(self.key.clone())),
        }
    }

    /// Store `value` in the snapshot's active layer. Nothing is validated
    /// and nothing is persisted here.
    pub fn write(&self, snapshot: &mut dyn ConfigSnapshot, value: T) {
        debug!(key = %self.key, layer = %snapshot.active_layer(), "Writing setting");
        snapshot.set_as(&self.key, value);
    }

    pub fn is_overridden(&self, snapshot: &dyn ConfigSnapshot) -> bool {
        snapshot.is_overridden(&self.key)
    }

    /// Drop the active layer's value so lower layers show through again.
    pub fn delete(&self, snapshot: &mut dyn ConfigSnapshot) -> bool {
        snapshot.delete(&self.key)
    }

    pub fn into_value(self) -> SettingValue {
        T::wrap(self)
    }

    fn default_config(&self) -> Option<ConfigValue> {
        self.default.clone().map(T::into_config)
    }

    fn read_config(&self, snapshot: &dyn ConfigSnapshot) -> Result<ConfigValue, DomainError> {
        self.read(snapshot).map(T::into_config)
    }

    fn write_config(
        &self,
        snapshot: &mut dyn ConfigSnapshot,
        value: ConfigValue,
    ) -> Result<(), DomainError> {
        let typed = T::from_config(&value).ok_or_else(|| DomainError::TypeMismatch {
            key: self.key.clone(),
            expected: T::TYPE,
            found: value.type_name().to_string(),
        })?;
        self.write(snapshot, typed);
        Ok(())
    }
}

/// Type-erased view of a setting, for code that only needs its identity
/// and layer state.
pub trait Binding {
    fn key(&self) -> &SettingKey;

    fn setting_type(&self) -> SettingType;

    fn is_runtime_editable(&self) -> bool;

    fn is_overridden(&self, snapshot: &dyn ConfigSnapshot) -> bool;

    fn delete(&self, snapshot: &mut dyn ConfigSnapshot) -> bool;
}

impl<T: SettingPrimitive> Binding for Setting<T> {
    fn key(&self) -> &SettingKey {
        &self.key
    }

    fn setting_type(&self) -> SettingType {
        T::TYPE
    }

    fn is_runtime_editable(&self) -> bool {
        self.runtime_editable
    }

    fn is_overridden(&self, snapshot: &dyn ConfigSnapshot) -> bool {
        Setting::is_overridden(self, snapshot)
    }

    fn delete(&self, snapshot: &mut dyn ConfigSnapshot) -> bool {
        Setting::delete(self, snapshot)
    }
}

/// A setting of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Boolean(Setting<bool>),
    Integer(Setting<i32>),
    Float(Setting<f32>),
    String(Setting<String>),
    Choice(Setting<crate::domain::ChoiceValue>),
}

impl SettingValue {
    pub fn binding(&self) -> &dyn Binding {
        match self {
            SettingValue::Boolean(s) => s,
            SettingValue::Integer(s) => s,
            SettingValue::Float(s) => s,
            SettingValue::String(s) => s,
            SettingValue::Choice(s) => s,
        }
    }

    pub fn key(&self) -> &SettingKey {
        self.binding().key()
    }

    pub fn setting_type(&self) -> SettingType {
        self.binding().setting_type()
    }

    pub fn is_runtime_editable(&self) -> bool {
        self.binding().is_runtime_editable()
    }

    /// The default in its stored representation, if the setting has one.
    pub fn default_config(&self) -> Option<ConfigValue> {
        match self {
            SettingValue::Boolean(s) => s.default_config(),
            SettingValue::Integer(s) => s.default_config(),
            SettingValue::Float(s) => s.default_config(),
            SettingValue::String(s) => s.default_config(),
            SettingValue::Choice(s) => s.default_config(),
        }
    }

    /// Read the current value in its stored representation.
    pub fn read_value(&self, snapshot: &dyn ConfigSnapshot) -> Result<ConfigValue, DomainError> {
        match self {
            SettingValue::Boolean(s) => s.read_config(snapshot),
            SettingValue::Integer(s) => s.read_config(snapshot),
            SettingValue::Float(s) => s.read_config(snapshot),
            SettingValue::String(s) => s.read_config(snapshot),
            SettingValue::Choice(s) => s.read_config(snapshot),
        }
    }

    /// Write a stored-representation value, rejecting one of the wrong type.
    pub fn write_value(
        &self,
        snapshot: &mut dyn ConfigSnapshot,
        value: ConfigValue,
    ) -> Result<(), DomainError> {
        match self {
            SettingValue::Boolean(s) => s.write_config(snapshot, value),
            SettingValue::Integer(s) => s.write_config(snapshot, value),
            SettingValue::Float(s) => s.write_config(snapshot, value),
            SettingValue::String(s) => s.write_config(snapshot, value),
            SettingValue::Choice(s) => s.write_config(snapshot, value),
        }
    }

    /// Recover the typed setting, or get the value back if `T` does not match.
    pub fn typed<T: SettingPrimitive>(self) -> Result<Setting<T>, SettingValue> {
        T::unwrap(self)
    }
}

impl<T: SettingPrimitive> From<Setting<T>> for SettingValue {
    fn from(setting: Setting<T>) -> Self {
        setting.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LayeredSnapshot;
    use crate::domain::ChoiceValue;

    fn key(name: &str) -> SettingKey {
        SettingKey::new("Core", name)
    }

    #[test]
    fn test_read_substitutes_default() {
        let snapshot = LayeredSnapshot::global();
        let setting = Setting::new(key("EnableX"), false);
        assert!(!setting.read(&snapshot).unwrap());
    }

    #[test]
    fn test_write_then_read() {
        let mut snapshot = LayeredSnapshot::global();
        let setting = Setting::new(key("EmulationSpeed"), 1.0f32);

        setting.write(&mut snapshot, 0.5);
        assert_eq!(setting.read(&snapshot).unwrap(), 0.5);

        for value in [f32::MIN, f32::MAX, f32::INFINITY, f32::NEG_INFINITY, f32::MIN_POSITIVE] {
            setting.write(&mut snapshot, value);
            assert_eq!(setting.read(&snapshot).unwrap(), value);
        }

        setting.write(&mut snapshot, -0.0);
        assert!(setting.read(&snapshot).unwrap().is_sign_negative());

        setting.write(&mut snapshot, f32::NAN);
        assert_eq!(setting.read(&snapshot).unwrap().to_bits(), f32::NAN.to_bits());
    }

    #[test]
    fn test_float_read_of_inexact_int_is_mismatch() {
        let mut snapshot = LayeredSnapshot::global();
        Setting::new(key("Ticks"), 0i32).write(&mut snapshot, 16_777_217);

        let setting = Setting::new(key("Ticks"), 0.0f32);
        assert!(matches!(
            setting.read(&snapshot),
            Err(DomainError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_read_without_default_is_missing_key() {
        let snapshot = LayeredSnapshot::global();
        let setting: Setting<String> = Setting::without_default(key("GFXBackend"));

        assert_eq!(
            setting.read(&snapshot),
            Err(DomainError::MissingKey(key("GFXBackend")))
        );
    }

    #[test]
    fn test_read_without_default_uses_base_layer() {
        let mut snapshot = LayeredSnapshot::global();
        snapshot.set_layer_value(
            crate::domain::LayerKind::Base,
            &key("GFXBackend"),
            ConfigValue::Text("Vulkan".to_string()),
        );
        let setting: Setting<String> = Setting::without_default(key("GFXBackend"));

        assert_eq!(setting.read(&snapshot).unwrap(), "Vulkan");
    }

    #[test]
    fn test_read_type_mismatch_propagates() {
        let mut snapshot = LayeredSnapshot::global();
        Setting::new(key("Volume"), String::new()).write(&mut snapshot, "max".into());

        let setting = Setting::new(key("Volume"), 100i32);
        assert!(matches!(
            setting.read(&snapshot),
            Err(DomainError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_override_and_delete() {
        let mut snapshot = LayeredSnapshot::for_profile("GALE01");
        let setting = Setting::new(key("CPUThread"), true);

        assert!(!setting.is_overridden(&snapshot));
        setting.write(&mut snapshot, false);
        assert!(setting.is_overridden(&snapshot));

        assert!(setting.delete(&mut snapshot));
        assert!(!setting.is_overridden(&snapshot));
        assert!(setting.read(&snapshot).unwrap());
        assert!(!setting.delete(&mut snapshot));
    }

    #[test]
    fn test_setting_value_dispatch() {
        let value: SettingValue = Setting::new(key("Region"), ChoiceValue::Integer(1))
            .runtime_editable(false)
            .into();

        assert_eq!(value.setting_type(), SettingType::Choice);
        assert_eq!(value.key(), &key("Region"));
        assert!(!value.is_runtime_editable());
    }

    #[test]
    fn test_setting_value_uncoupled_read_write() {
        let mut snapshot = LayeredSnapshot::global();
        let value: SettingValue = Setting::new(key("Overclock"), 1.0f32).into();

        value.write_value(&mut snapshot, ConfigValue::Int(2)).unwrap();
        assert_eq!(value.read_value(&snapshot).unwrap(), ConfigValue::Float(2.0));

        let err = value
            .write_value(&mut snapshot, ConfigValue::Bool(true))
            .unwrap_err();
        assert!(matches!(err, DomainError::TypeMismatch { expected: SettingType::Float, .. }));
    }

    #[test]
    fn test_typed_recovers_setting() {
        let value: SettingValue = Setting::new(key("EnableX"), false).into();
        let value = value.typed::<i32>().unwrap_err();
        let setting = value.typed::<bool>().unwrap();
        assert_eq!(setting.default_value(), Some(&false));
    }
}
