pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod scene;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod ui;
pub mod widgets;

pub use app::{App, Mode};
pub use event::{AppEvent, EventHandler, SubmitResult};
pub use input::{handle_key_event, Action};
pub use keymap::Keymap;
pub use theme::{Theme, ThemeContext};
