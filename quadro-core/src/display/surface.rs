//! Framebuffer with redraw suppression
//!
//! The surface owns the full monochrome frame in SSD1306 page layout and
//! tracks the last text it rendered. A status update that matches the
//! cached text skips the whole clear/draw/flush sequence, so repeated
//! identical events cause no visible flicker.

use heapless::String;

use super::font;
use crate::traits::{PanelError, PixelPanel};

/// Display width in pixels
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel-tall pages
pub const PAGES: usize = HEIGHT / 8;

/// Fixed anchor where status text is drawn
pub const ANCHOR_X: usize = 10;
pub const ANCHOR_Y: usize = 10;

/// Longest text the cache has to hold
const CACHE_LEN: usize = 24;

/// The shared display surface
///
/// Single-owner by design: the console task holds the only instance, so a
/// clear/draw/flush sequence can never interleave with another writer.
pub struct Surface {
    buf: [u8; WIDTH * PAGES],
    last_text: Option<String<CACHE_LEN>>,
}

impl Surface {
    pub const fn new() -> Self {
        Self {
            buf: [0; WIDTH * PAGES],
            last_text: None,
        }
    }

    /// Set every pixel to background
    pub fn clear(&mut self) {
        self.buf = [0; WIDTH * PAGES];
    }

    /// Composite text left-to-right starting at pixel (x, y)
    ///
    /// Unsupported characters render as blank glyphs; columns past the
    /// right edge and rows past the bottom are silently dropped.
    pub fn draw_text(&mut self, text: &str, x: usize, y: usize) {
        let mut cursor = x;
        for &byte in text.as_bytes() {
            self.draw_glyph(byte, cursor, y);
            cursor += font::GLYPH_ADVANCE;
            if cursor >= WIDTH {
                break;
            }
        }
    }

    /// Push the full frame to the device
    ///
    /// This is the only operation with an external effect; everything
    /// drawn since the last flush becomes visible at once.
    pub fn flush<P: PixelPanel>(&mut self, panel: &mut P) -> Result<(), PanelError> {
        for page in 0..PAGES {
            panel.write_pixel_row(page as u8, &self.buf[page * WIDTH..(page + 1) * WIDTH])?;
        }
        panel.send_frame()
    }

    /// Render `text` at the status anchor unless it is already shown
    ///
    /// Returns true if the frame was redrawn and flushed, false if the
    /// cached text matched and the device was left untouched.
    pub fn show<P: PixelPanel>(
        &mut self,
        text: &str,
        panel: &mut P,
    ) -> Result<bool, PanelError> {
        if self.last_text.as_deref() == Some(text) {
            return Ok(false);
        }

        self.clear();
        self.draw_text(text, ANCHOR_X, ANCHOR_Y);
        self.flush(panel)?;

        let mut cache = String::new();
        for c in text.chars() {
            if cache.push(c).is_err() {
                break;
            }
        }
        self.last_text = Some(cache);
        Ok(true)
    }

    /// Raw frame contents, for tests and diagnostics
    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    fn draw_glyph(&mut self, byte: u8, x: usize, y: usize) {
        let page = y / 8;
        if page >= PAGES {
            return;
        }
        let shift = y % 8;
        let glyph = font::glyph(byte);
        for (i, &col) in glyph.iter().enumerate() {
            let cx = x + i;
            if cx >= WIDTH {
                break;
            }
            let bits = (col as u16) << shift;
            self.buf[page * WIDTH + cx] |= bits as u8;
            if shift != 0 && page + 1 < PAGES {
                self.buf[(page + 1) * WIDTH + cx] |= (bits >> 8) as u8;
            }
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
