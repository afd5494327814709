//! UART console link
//!
//! Wraps the buffered UART0 halves behind the core's [`SerialLink`]
//! trait: non-blocking reads for the poll loop, ring-buffered writes for
//! the echo path.

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io::{Read, ReadReady, Write};

use quadro_core::traits::SerialLink;

pub struct UartLink {
    tx: BufferedUartTx,
    rx: BufferedUartRx,
}

impl UartLink {
    pub fn new(tx: BufferedUartTx, rx: BufferedUartRx) -> Self {
        Self { tx, rx }
    }
}

impl SerialLink for UartLink {
    fn read_input_byte(&mut self) -> Option<u8> {
        match self.rx.read_ready() {
            Ok(true) => {
                let mut byte = [0u8; 1];
                match self.rx.read(&mut byte) {
                    Ok(n) if n > 0 => Some(byte[0]),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn write_byte(&mut self, byte: u8) {
        // Ring-buffered; drained by the UART interrupt
        let _ = self.tx.write_all(&[byte]);
    }
}
