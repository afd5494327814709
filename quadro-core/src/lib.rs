//! Board-agnostic core logic for the Quadro serial console firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display panel, indicator LEDs, serial link)
//! - Button debouncing
//! - Indicator LED state
//! - Shared display surface (framebuffer + redraw suppression)
//! - Digit rendering for the 5x5 WS2812 matrix
//! - Console dispatcher tying the above together

#![no_std]
#![deny(unsafe_code)]

pub mod console;
pub mod display;
pub mod indicator;
pub mod input;
pub mod matrix;
pub mod traits;
