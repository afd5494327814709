//! Display panel trait for the monochrome OLED

/// Errors that can occur while talking to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Bus transfer failed (I2C NACK or similar)
    Bus,
    /// Row data did not match the panel geometry
    BadGeometry,
}

/// Trait for pushing a full frame to a page-addressed monochrome panel
///
/// The panel is a dumb consumer: the framebuffer and all text compositing
/// live in [`crate::display::Surface`]. A flush writes every page row in
/// order and then commits with `send_frame`, so partial updates are never
/// observable on the device.
pub trait PixelPanel {
    /// Stage one page row (`WIDTH` column bytes) of the frame
    ///
    /// - `page`: page index, 0 at the top
    /// - `row`: one byte per column, bit 0 is the top pixel of the page
    fn write_pixel_row(&mut self, page: u8, row: &[u8]) -> Result<(), PanelError>;

    /// Commit all staged rows to the device in a single transfer
    fn send_frame(&mut self) -> Result<(), PanelError>;
}
