pub mod controller;
pub mod screen;

pub use controller::SettingsController;
pub use screen::{ScreenBuilder, SettingsScreen, TextSource};
