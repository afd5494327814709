//! Indicator LED output trait

/// The three discrete indicator LED channels on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    Green,
    Blue,
    Red,
}

/// Trait for driving the physical indicator LEDs
///
/// Implementations map each channel to its GPIO line. Writes are
/// infallible at this level; a GPIO write cannot fail on the targets
/// this firmware runs on.
pub trait IndicatorLeds {
    /// Drive one LED channel to the given state
    fn set_led(&mut self, color: LedColor, on: bool);
}
