//! Button input handling
//!
//! Physical edges arrive timestamped from the firmware; the debouncer
//! decides which of them count as presses.

pub mod debounce;
pub mod events;

pub use debounce::Debouncer;
pub use events::{Button, ButtonEvent};
