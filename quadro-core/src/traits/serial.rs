//! Serial console trait

/// Byte-oriented serial channel used for the echo console
///
/// `read_input_byte` is non-blocking: the firmware awaits bytes on its
/// own and hands them to the dispatcher, while host tests feed queued
/// bytes through this method.
pub trait SerialLink {
    /// Fetch the next pending input byte, if any
    fn read_input_byte(&mut self) -> Option<u8>;

    /// Write one byte back to the console (echo path)
    fn write_byte(&mut self, byte: u8);
}
