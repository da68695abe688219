//! Typed, storage-agnostic setting descriptors.
//!
//! A [`Setting`] is a typed accessor bound to a [`SettingKey`]; it reads and
//! writes through whatever [`ConfigSnapshot`] the caller supplies. A
//! descriptor pairs one setting with display text and a widget
//! [`ItemKind`], so a UI can render a heterogeneous list of
//! [`SettingDescriptor`]s without knowing how any of them is stored.

#![forbid(unsafe_code)]

pub mod adapters;
pub mod app;
pub mod descriptors;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use adapters::{LayeredSnapshot, StringTableResolver, TomlConfigStore};
pub use app::{ScreenBuilder, SettingsController, SettingsScreen, TextSource};
pub use descriptors::{
    CheckBoxDescriptor, ChoiceDescriptor, DescriptorView, FloatSliderDescriptor, InputDescriptor,
    ItemKind, SettingDescriptor, SettingsItem, SliderDescriptor, SliderRange,
};
pub use domain::{
    ChoiceOption, ChoiceValue, ConfigValue, DomainError, ItemText, LayerKind, Setting, SettingKey,
    SettingRegistry, SettingType, SettingValue, ViewConfig,
};
pub use ports::{ConfigSnapshot, ConfigStore, SnapshotExt, TextResolver};
