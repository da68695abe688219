pub mod config;
pub mod snapshot;
pub mod text;

pub use config::ConfigStore;
pub use snapshot::{ConfigSnapshot, SnapshotExt};
pub use text::TextResolver;
