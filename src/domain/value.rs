use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::setting::{Setting, SettingValue};

/// A value as the configuration store holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Text(String),
}

impl ConfigValue {
    /// Short name of the stored representation, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Float(v) => write!(f, "{}", v),
            ConfigValue::Text(v) => f.write_str(v),
        }
    }
}

/// Semantic type of a setting, independent of how it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Boolean,
    Integer,
    Float,
    String,
    Choice,
}

impl SettingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingType::Boolean => "boolean",
            SettingType::Integer => "integer",
            SettingType::Float => "float",
            SettingType::String => "string",
            SettingType::Choice => "choice",
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored value of an enumerated choice.
///
/// Choices are either int-backed (an enum index persisted as a number) or
/// string-backed (a token such as `"golf"` persisted verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Integer(i32),
    Text(String),
}

impl From<i32> for ChoiceValue {
    fn from(value: i32) -> Self {
        ChoiceValue::Integer(value)
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        ChoiceValue::Text(value.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        ChoiceValue::Text(value)
    }
}

/// Rust types a [`Setting`] can be typed over.
///
/// Each primitive knows its semantic type, how to convert to and from the
/// stored [`ConfigValue`], and how to move in and out of the [`SettingValue`]
/// sum type.
pub trait SettingPrimitive: Clone + PartialEq + fmt::Debug + Sized {
    const TYPE: SettingType;

    /// Convert a stored value. Returns `None` when the representation does not fit.
    fn from_config(value: &ConfigValue) -> Option<Self>;

    fn into_config(self) -> ConfigValue;

    fn wrap(setting: Setting<Self>) -> SettingValue;

    /// Take the typed setting back out, or hand the value back unchanged.
    fn unwrap(value: SettingValue) -> Result<Setting<Self>, SettingValue>;
}

impl SettingPrimitive for bool {
    const TYPE: SettingType = SettingType::Boolean;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn into_config(self) -> ConfigValue {
        ConfigValue::Bool(self)
    }

    fn wrap(setting: Setting<Self>) -> SettingValue {
        SettingValue::Boolean(setting)
    }

    fn unwrap(value: SettingValue) -> Result<Setting<Self>, SettingValue> {
        match value {
            SettingValue::Boolean(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl SettingPrimitive for i32 {
    const TYPE: SettingType = SettingType::Integer;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn into_config(self) -> ConfigValue {
        ConfigValue::Int(self)
    }

    fn wrap(setting: Setting<Self>) -> SettingValue {
        SettingValue::Integer(setting)
    }

    fn unwrap(value: SettingValue) -> Result<Setting<Self>, SettingValue> {
        match value {
            SettingValue::Integer(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl SettingPrimitive for f32 {
    const TYPE: SettingType = SettingType::Float;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Float(v) => Some(*v),
            // Hand-edited stores often drop the fraction. Only ints f32
            // holds exactly are accepted, anything above 2^24 may round.
            ConfigValue::Int(v) => {
                let f = *v as f32;
                (f as i64 == i64::from(*v)).then_some(f)
            }
            _ => None,
        }
    }

    fn into_config(self) -> ConfigValue {
        ConfigValue::Float(self)
    }

    fn wrap(setting: Setting<Self>) -> SettingValue {
        SettingValue::Float(setting)
    }

    fn unwrap(value: SettingValue) -> Result<Setting<Self>, SettingValue> {
        match value {
            SettingValue::Float(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl SettingPrimitive for String {
    const TYPE: SettingType = SettingType::String;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn into_config(self) -> ConfigValue {
        ConfigValue::Text(self)
    }

    fn wrap(setting: Setting<Self>) -> SettingValue {
        SettingValue::String(setting)
    }

    fn unwrap(value: SettingValue) -> Result<Setting<Self>, SettingValue> {
        match value {
            SettingValue::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl SettingPrimitive for ChoiceValue {
    const TYPE: SettingType = SettingType::Choice;

    fn from_config(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Int(v) => Some(ChoiceValue::Integer(*v)),
            ConfigValue::Text(v) => Some(ChoiceValue::Text(v.clone())),
            _ => None,
        }
    }

    fn into_config(self) -> ConfigValue {
        match self {
            ChoiceValue::Integer(v) => ConfigValue::Int(v),
            ChoiceValue::Text(v) => ConfigValue::Text(v),
        }
    }

    fn wrap(setting: Setting<Self>) -> SettingValue {
        SettingValue::Choice(setting)
    }

    fn unwrap(value: SettingValue) -> Result<Setting<Self>, SettingValue> {
        match value {
            SettingValue::Choice(s) => Ok(s),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_conversion() {
        assert_eq!(bool::from_config(&ConfigValue::Bool(true)), Some(true));
        assert_eq!(bool::from_config(&ConfigValue::Int(1)), None);
        assert_eq!(false.into_config(), ConfigValue::Bool(false));
    }

    #[test]
    fn test_float_accepts_int_storage() {
        assert_eq!(f32::from_config(&ConfigValue::Int(3)), Some(3.0));
        assert_eq!(f32::from_config(&ConfigValue::Float(0.25)), Some(0.25));
        assert_eq!(f32::from_config(&ConfigValue::Text("1.0".into())), None);
    }

    #[test]
    fn test_float_rejects_inexact_int_storage() {
        assert_eq!(f32::from_config(&ConfigValue::Int(16_777_216)), Some(16_777_216.0));
        assert_eq!(f32::from_config(&ConfigValue::Int(-16_777_216)), Some(-16_777_216.0));
        assert_eq!(f32::from_config(&ConfigValue::Int(16_777_217)), None);
        assert_eq!(f32::from_config(&ConfigValue::Int(i32::MAX)), None);
        assert_eq!(f32::from_config(&ConfigValue::Int(i32::MIN)), Some(-2_147_483_648.0));
    }

    #[test]
    fn test_integer_rejects_float_storage() {
        assert_eq!(i32::from_config(&ConfigValue::Float(2.0)), None);
    }

    #[test]
    fn test_choice_value_storage() {
        assert_eq!(
            ChoiceValue::from("golf").into_config(),
            ConfigValue::Text("golf".to_string())
        );
        assert_eq!(
            ChoiceValue::from_config(&ConfigValue::Int(2)),
            Some(ChoiceValue::Integer(2))
        );
        assert_eq!(ChoiceValue::from_config(&ConfigValue::Bool(true)), None);
    }

    #[test]
    fn test_config_value_type_name() {
        assert_eq!(ConfigValue::Text(String::new()).type_name(), "text");
        assert_eq!(ConfigValue::Float(1.5).to_string(), "1.5");
    }
}
