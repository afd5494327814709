//! Indicator LED outputs

use embassy_rp::gpio::{Level, Output};

use quadro_core::traits::{IndicatorLeds, LedColor};

/// The board's three indicator LED pins
///
/// Green=GPIO11, blue=GPIO12, red=GPIO13. The red pin is configured as
/// an output like the others but no button event drives it.
pub struct BoardLeds {
    green: Output<'static>,
    blue: Output<'static>,
    red: Output<'static>,
}

impl BoardLeds {
    pub fn new(green: Output<'static>, blue: Output<'static>, red: Output<'static>) -> Self {
        Self { green, blue, red }
    }
}

impl IndicatorLeds for BoardLeds {
    fn set_led(&mut self, color: LedColor, on: bool) {
        let level = if on { Level::High } else { Level::Low };
        match color {
            LedColor::Green => self.green.set_level(level),
            LedColor::Blue => self.blue.set_level(level),
            LedColor::Red => self.red.set_level(level),
        }
    }
}
