//! Time-window button debouncing
//!
//! Contact bounce shows up as a burst of edges within a few milliseconds
//! of the real press. The debouncer keeps the last accepted timestamp per
//! button and rejects any edge that lands inside the window after it.

use super::events::Button;

/// Default debounce window in microseconds (200 ms)
pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

/// Per-button debounce state
///
/// Timestamps come from a monotonic microsecond clock supplied by the
/// caller. Edges for one button must be delivered in order; edges for
/// different buttons are independent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_us: u64,
    last_accepted: [Option<u64>; 2],
}

impl Debouncer {
    /// Create a debouncer with the default 200 ms window
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW_US)
    }

    /// Create a debouncer with a custom window
    pub const fn with_window(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted: [None; 2],
        }
    }

    /// Gate an edge at `now_us`
    ///
    /// Returns true and records `now_us` iff the edge falls strictly
    /// outside the window after the last accepted edge on the same
    /// button. The very first edge on a button is always accepted.
    pub fn accept(&mut self, button: Button, now_us: u64) -> bool {
        let slot = &mut self.last_accepted[Self::index(button)];
        match *slot {
            Some(last) if now_us.wrapping_sub(last) <= self.window_us => false,
            _ => {
                *slot = Some(now_us);
                true
            }
        }
    }

    fn index(button: Button) -> usize {
        match button {
            Button::A => 0,
            Button::B => 1,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
