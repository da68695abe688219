pub mod config_store;
pub mod layered_snapshot;
pub mod string_table;

pub use config_store::TomlConfigStore;
pub use layered_snapshot::LayeredSnapshot;
pub use string_table::StringTableResolver;
