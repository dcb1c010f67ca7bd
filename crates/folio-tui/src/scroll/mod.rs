//! Smooth page scrolling and entrance easing
//!
//! - `easing`: pure easing curves mapping [0, 1] to [0, 1]
//! - `timing`: progress and interpolation helpers
//! - `config`: `ScrollConfig` helpers
//! - `page`: the page scroll context owned by the app
//!
//! Everything takes the current `Instant` so animations can be stepped in
//! tests without sleeping.

pub mod config;
pub mod easing;
pub mod timing;

mod page;

pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use page::PageScroll;
