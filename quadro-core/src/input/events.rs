//! Button identities and edge events

use crate::traits::LedColor;

/// The two push buttons on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
}

impl Button {
    /// The indicator channel this button toggles
    ///
    /// Button A drives the green LED, button B the blue one. The red
    /// channel has no button mapped to it.
    pub fn indicator(self) -> LedColor {
        match self {
            Button::A => LedColor::Green,
            Button::B => LedColor::Blue,
        }
    }
}

/// A falling edge on a button line, stamped with a monotonic clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    /// Microseconds since boot when the edge fired
    pub at_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_indicator_mapping() {
        assert_eq!(Button::A.indicator(), LedColor::Green);
        assert_eq!(Button::B.indicator(), LedColor::Blue);
    }
}
