use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::domain::{ConfigValue, LayerKind, SettingKey, SettingRegistry};
use crate::ports::ConfigSnapshot;

type Layer = BTreeMap<SettingKey, ConfigValue>;

/// A per-item override layer, e.g. one game's profile.
#[derive(Debug, Clone)]
struct ProfileLayer {
    id: String,
    values: Layer,
}

/// In-memory snapshot over a base, a global and an optional profile layer.
///
/// Reads resolve Profile > Global > Base. Writes land in the topmost layer
/// present and are tracked as pending changes until the owner takes them
/// for persistence.
#[derive(Debug, Clone, Default)]
pub struct LayeredSnapshot {
    base: Layer,
    global: Layer,
    profile: Option<ProfileLayer>,
    dirty: BTreeSet<SettingKey>,
}

impl LayeredSnapshot {
    /// Snapshot whose writes go to the global layer.
    pub fn global() -> Self {
        Self::default()
    }

    /// Snapshot whose writes go to the profile layer for `profile_id`.
    pub fn for_profile(profile_id: impl Into<String>) -> Self {
        let id = profile_id.into();
        info!(profile = %id, "Opened profile snapshot");
        Self {
            profile: Some(ProfileLayer {
                id,
                values: Layer::new(),
            }),
            ..Self::default()
        }
    }

    /// Seed the base layer with every registered setting's default.
    #[must_use]
    pub fn with_defaults(mut self, registry: &SettingRegistry) -> Self {
        for setting in registry.iter() {
            if let Some(default) = setting.default_config() {
                self.base.insert(setting.key().clone(), default);
            }
        }
        debug!(count = self.base.len(), "Seeded base layer");
        self
    }

    pub fn profile_id(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.id.as_str())
    }

    /// Value held by one specific layer, ignoring the others.
    pub fn layer_value(&self, layer: LayerKind, key: &SettingKey) -> Option<&ConfigValue> {
        self.layer(layer).and_then(|values| values.get(key))
    }

    /// Load a value straight into `layer` without marking it as a change.
    ///
    /// Returns false if the snapshot has no such layer.
    pub fn set_layer_value(&mut self, layer: LayerKind, key: &SettingKey, value: ConfigValue) -> bool {
        match self.layer_mut(layer) {
            Some(values) => {
                values.insert(key.clone(), value);
                true
            }
            None => false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Drain pending changes of the active layer.
    ///
    /// A `None` value means the key was deleted from the layer.
    pub fn take_changes(&mut self) -> Vec<(SettingKey, Option<ConfigValue>)> {
        let dirty = std::mem::take(&mut self.dirty);
        let active = self.active_values();
        dirty
            .into_iter()
            .map(|key| {
                let value = active.get(&key).cloned();
                (key, value)
            })
            .collect()
    }

    fn layer(&self, layer: LayerKind) -> Option<&Layer> {
        match layer {
            LayerKind::Base => Some(&self.base),
            LayerKind::Global => Some(&self.global),
            LayerKind::Profile => self.profile.as_ref().map(|p| &p.values),
        }
    }

    fn layer_mut(&mut self, layer: LayerKind) -> Option<&mut Layer> {
        match layer {
            LayerKind::Base => Some(&mut self.base),
            LayerKind::Global => Some(&mut self.global),
            LayerKind::Profile => self.profile.as_mut().map(|p| &mut p.values),
        }
    }

    fn active_values(&self) -> &Layer {
        match &self.profile {
            Some(profile) => &profile.values,
            None => &self.global,
        }
    }

    fn active_values_mut(&mut self) -> &mut Layer {
        match &mut self.profile {
            Some(profile) => &mut profile.values,
            None => &mut self.global,
        }
    }
}

impl ConfigSnapshot for LayeredSnapshot {
    fn get(&self, key: &SettingKey) -> Option<ConfigValue> {
        self.profile
            .as_ref()
            .and_then(|p| p.values.get(key))
            .or_else(|| self.global.get(key))
            .or_else(|| self.base.get(key))
            .cloned()
    }

    fn set(&mut self, key: &SettingKey, value: ConfigValue) {
        self.active_values_mut().insert(key.clone(), value);
        self.dirty.insert(key.clone());
    }

    fn is_overridden(&self, key: &SettingKey) -> bool {
        self.active_values().contains_key(key)
    }

    fn delete(&mut self, key: &SettingKey) -> bool {
        let removed = self.active_values_mut().remove(key).is_some();
        if removed {
            self.dirty.insert(key.clone());
        }
        removed
    }

    fn active_layer(&self) -> LayerKind {
        if self.profile.is_some() {
            LayerKind::Profile
        } else {
            LayerKind::Global
        }
    }
}
