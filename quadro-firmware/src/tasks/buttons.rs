//! Button edge-wait tasks
//!
//! One task instance per button. Each waits for a falling edge (buttons
//! are active-low with pull-ups), stamps it with the monotonic clock and
//! hands it to the console loop through the button channel. Debouncing
//! happens on the consumer side, so bounce bursts simply show up as
//! events the console drops.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use quadro_core::input::{Button, ButtonEvent};

use crate::channels::BUTTON_EVENTS;

/// Button edge task - one instance per physical button
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started for {:?}", button);

    loop {
        pin.wait_for_falling_edge().await;

        let event = ButtonEvent {
            button,
            at_us: Instant::now().as_micros(),
        };

        // Drop the edge if the console is backed up
        if BUTTON_EVENTS.try_send(event).is_err() {
            warn!("Button channel full, dropping edge for {:?}", button);
        }
    }
}
