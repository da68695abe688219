use crate::domain::{ConfigValue, DomainError, LayerKind, SettingKey, SettingPrimitive};

/// Read/write view over the configuration layers for one editing session.
///
/// A snapshot resolves reads across all of its layers and sends writes to
/// its active layer. It never persists anything itself; committing the
/// changes is up to whoever owns the snapshot. Implementations are used from
/// a single thread and perform no locking.
pub trait ConfigSnapshot {
    /// Effective value for `key`, or `None` if no layer holds one.
    fn get(&self, key: &SettingKey) -> Option<ConfigValue>;

    /// Store `value` under `key` in the active layer.
    fn set(&mut self, key: &SettingKey, value: ConfigValue);

    /// Whether the active layer holds its own value for `key`.
    fn is_overridden(&self, key: &SettingKey) -> bool;

    /// Remove the active layer's value for `key`.
    ///
    /// Returns true if a value was removed.
    fn delete(&mut self, key: &SettingKey) -> bool;

    /// The layer that receives writes.
    fn active_layer(&self) -> LayerKind;
}

/// Typed accessors over any [`ConfigSnapshot`], including `dyn ConfigSnapshot`.
pub trait SnapshotExt: ConfigSnapshot {
    /// Read `key` as `T`.
    ///
    /// `Ok(None)` means nothing is stored; a stored value of another type is
    /// a `TypeMismatch`.
    fn get_as<T: SettingPrimitive>(&self, key: &SettingKey) -> Result<Option<T>, DomainError> {
        match self.get(key) {
            None => Ok(None),
            Some(stored) => T::from_config(&stored)
                .map(Some)
                .ok_or_else(|| DomainError::TypeMismatch {
                    key: key.clone(),
                    expected: T::TYPE,
                    found: stored.type_name().to_string(),
                }),
        }
    }

    fn set_as<T: SettingPrimitive>(&mut self, key: &SettingKey, value: T) {
        self.set(key, value.into_config());
    }
}

impl<S: ConfigSnapshot + ?Sized> SnapshotExt for S {}
