//! Inter-task communication channels
//!
//! Button edges are produced in the edge-wait tasks and consumed only by
//! the console loop, which owns the display surface and indicator state.
//! Routing everything through this single-consumer channel is what keeps
//! clear/draw/flush sequences from interleaving.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use quadro_core::input::ButtonEvent;

/// Channel capacity for button edge events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Timestamped button edges, drained only by the console loop
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();
