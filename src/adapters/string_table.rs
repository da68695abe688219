use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::DomainError;
use crate::ports::TextResolver;

/// On-disk shape of a string table:
///
/// ```toml
/// [strings]
/// enable_cheats = "Enable Cheats"
/// ```
#[derive(Debug, Default, Deserialize)]
struct StringTableFile {
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// [`TextResolver`] backed by an id → text table.
///
/// The table can be swapped at runtime (e.g. on a language change) while
/// screens hold a shared reference to the resolver. Unknown ids resolve to
/// the id itself.
#[derive(Debug, Default)]
pub struct StringTableResolver {
    table: RwLock<HashMap<String, String>>,
}

impl StringTableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let table = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            table: RwLock::new(table),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DomainError> {
        let resolver = Self::new();
        resolver.replace_from_toml_str(content)?;
        Ok(resolver)
    }

    /// Parse a `[strings]` table without touching any resolver.
    pub fn parse_table(content: &str) -> Result<HashMap<String, String>, DomainError> {
        let file: StringTableFile = toml::from_str(content)?;
        Ok(file.strings)
    }

    /// Read and parse the string table stored at `path`.
    pub fn read_table(path: &Path) -> Result<HashMap<String, String>, DomainError> {
        let content = fs::read_to_string(path)?;
        let table = Self::parse_table(&content)?;
        info!(path = ?path, count = table.len(), "String table loaded");
        Ok(table)
    }

    /// Replace the whole table with the one parsed from `content`.
    pub fn replace_from_toml_str(&self, content: &str) -> Result<usize, DomainError> {
        Ok(self.replace_table(Self::parse_table(content)?))
    }

    /// Replace the whole table with the one stored at `path`.
    pub fn replace_from_file(&self, path: &Path) -> Result<usize, DomainError> {
        Ok(self.replace_table(Self::read_table(path)?))
    }

    /// Swap in a new table, returning its size.
    pub fn replace_table(&self, table: HashMap<String, String>) -> usize {
        let count = table.len();
        *self.table.write() = table;
        count
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }
}

impl TextResolver for StringTableResolver {
    fn resolve(&self, id: &str) -> String {
        match self.table.read().get(id) {
            Some(text) => text.clone(),
            None => {
                warn!(id = id, "Unknown text id, using id as text");
                id.to_string()
            }
        }
    }
}
