use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Stable identifier of one setting, e.g. `Core.EnableCheats`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SettingKey {
    section: String,
    name: String,
}

impl SettingKey {
    pub fn new(section: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            name: name.into(),
        }
    }

    /// Parse a dotted `Section.Name` key.
    ///
    /// Only the first dot separates the section, so `NetPlay.Highlight.Ball`
    /// has the name `Highlight.Ball`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.split_once('.') {
            Some((section, name)) if !section.is_empty() && !name.is_empty() => {
                Ok(Self::new(section, name))
            }
            _ => Err(DomainError::InvalidKey(s.to_string())),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.name)
    }
}

impl FromStr for SettingKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Storage layers a snapshot can expose, lowest precedence first.
///
/// Base holds schema defaults, Global the user-wide values and Profile the
/// per-item overrides (for example one game's profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Base,
    Global,
    Profile,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Base => "base",
            LayerKind::Global => "global",
            LayerKind::Profile => "profile",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
