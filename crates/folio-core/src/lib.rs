pub mod boundary;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod preferences;
pub mod viewport;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use preferences::{Preferences, ThemeMode};
