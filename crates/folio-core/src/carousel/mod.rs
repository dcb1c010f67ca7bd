//! Timed rotation through a fixed list, with manual override and hover hold

mod controller;
mod state;

pub use controller::CarouselController;
pub use state::{AdvanceState, Direction};
