//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod leds;
pub mod panel;
pub mod serial;

pub use leds::{IndicatorLeds, LedColor};
pub use panel::{PanelError, PixelPanel};
pub use serial::SerialLink;
