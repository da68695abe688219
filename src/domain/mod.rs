pub mod config;
pub mod error;
pub mod key;
pub mod registry;
pub mod setting;
pub mod text;
pub mod value;

pub use config::{LoggingConfig, TextConfig, ViewConfig};
pub use error::DomainError;
pub use key::{LayerKind, SettingKey};
pub use registry::SettingRegistry;
pub use setting::{Binding, Setting, SettingValue};
pub use text::{ChoiceOption, ItemText};
pub use value::{ChoiceValue, ConfigValue, SettingPrimitive, SettingType};
