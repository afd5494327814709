//! Console loop
//!
//! The single owner of the display surface, indicator state, UART link
//! and WS2812 output. Button edges arrive through the channel; serial
//! bytes are drained at a fixed poll interval. Each arm runs a full
//! dispatch to completion, so a clear/draw/flush sequence can never be
//! interleaved with another writer.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::{Duration, Ticker};
use smart_leds::RGB8;

use quadro_core::console::Console;
use quadro_core::matrix::{MatrixFrame, MATRIX_CELLS};
use quadro_core::traits::PixelPanel;

use crate::channels::BUTTON_EVENTS;
use crate::leds::BoardLeds;
use crate::serial::UartLink;

/// Serial poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 100;

/// Run the console forever
pub async fn console_loop<P: PixelPanel>(
    mut link: UartLink,
    mut leds: BoardLeds,
    mut panel: P,
    ws2812: &mut PioWs2812<'_, PIO0, 0, MATRIX_CELLS>,
) -> ! {
    info!("Console loop started");

    let mut console = Console::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        match select(BUTTON_EVENTS.receive(), ticker.next()).await {
            Either::First(event) => match console.on_button(event, &mut leds, &mut panel) {
                Ok(true) => debug!("Accepted edge on {:?}", event.button),
                Ok(false) => trace!("Bounced edge on {:?}", event.button),
                Err(e) => warn!("Display update failed: {:?}", e),
            },
            Either::Second(()) => match console.poll_serial(&mut link, &mut panel) {
                Ok(Some(frame)) => {
                    ws2812.write(&to_rgb8(&frame)).await;
                }
                Ok(None) => {}
                Err(e) => warn!("Display update failed: {:?}", e),
            },
        }
    }
}

fn to_rgb8(frame: &MatrixFrame) -> [RGB8; MATRIX_CELLS] {
    let mut out = [RGB8::default(); MATRIX_CELLS];
    for (cell, color) in out.iter_mut().zip(frame.iter()) {
        *cell = RGB8::new(color.r, color.g, color.b);
    }
    out
}
