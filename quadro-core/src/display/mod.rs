//! Shared display surface
//!
//! A single 128x64 monochrome framebuffer with a last-rendered-text cache.
//! The surface has exactly one owner at runtime (the console task); nothing
//! reaches the device until [`Surface::flush`] pushes the full frame.

pub mod font;
pub mod surface;

pub use surface::{Surface, HEIGHT, PAGES, WIDTH};
