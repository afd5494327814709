//! Indicator LED state
//!
//! One boolean per LED channel plus the RGB triple used when the channel's
//! color is rendered on the matrix. State is mutated only on the console
//! dispatch path; the firmware reads it to drive the physical GPIOs.

use heapless::String;

use crate::matrix::Rgb;
use crate::traits::LedColor;

/// Maximum status text length ("LED Vermelho Desligado" is the longest)
pub const STATUS_LEN: usize = 24;

/// Status text for the OLED, bounded
pub type StatusText = String<STATUS_LEN>;

/// State of one indicator LED
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Indicator {
    on: bool,
    rgb: Rgb,
}

/// The board's three indicator LEDs
///
/// Green and blue are toggled by buttons A and B. Red is declared and
/// wired as an output but no input event drives it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorBank {
    green: Indicator,
    blue: Indicator,
    red: Indicator,
}

impl IndicatorBank {
    /// All indicators start off
    pub const fn new() -> Self {
        Self {
            green: Indicator { on: false, rgb: Rgb::GREEN },
            blue: Indicator { on: false, rgb: Rgb::BLUE },
            red: Indicator { on: false, rgb: Rgb::RED },
        }
    }

    /// Flip one channel and return its new state
    pub fn toggle(&mut self, color: LedColor) -> bool {
        let ind = self.slot_mut(color);
        ind.on = !ind.on;
        ind.on
    }

    /// Current state of one channel
    pub fn is_on(&self, color: LedColor) -> bool {
        self.slot(color).on
    }

    /// The RGB triple used when rendering this channel's color
    pub fn rgb(&self, color: LedColor) -> Rgb {
        self.slot(color).rgb
    }

    /// Portuguese channel name, as printed on the OLED
    pub fn name(color: LedColor) -> &'static str {
        match color {
            LedColor::Green => "Verde",
            LedColor::Blue => "Azul",
            LedColor::Red => "Vermelho",
        }
    }

    /// Format the status line for a channel state
    ///
    /// Produces e.g. "LED Verde Ligado". The buffer is sized for the
    /// longest combination, so the pushes cannot fail.
    pub fn status_text(color: LedColor, on: bool) -> StatusText {
        let mut text = StatusText::new();
        let _ = text.push_str("LED ");
        let _ = text.push_str(Self::name(color));
        let _ = text.push_str(if on { " Ligado" } else { " Desligado" });
        text
    }

    fn slot(&self, color: LedColor) -> &Indicator {
        match color {
            LedColor::Green => &self.green,
            LedColor::Blue => &self.blue,
            LedColor::Red => &self.red,
        }
    }

    fn slot_mut(&mut self, color: LedColor) -> &mut Indicator {
        match color {
            LedColor::Green => &mut self.green,
            LedColor::Blue => &mut self.blue,
            LedColor::Red => &mut self.red,
        }
    }
}

impl Default for IndicatorBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_start_off() {
        let bank = IndicatorBank::new();
        assert!(!bank.is_on(LedColor::Green));
        assert!(!bank.is_on(LedColor::Blue));
        assert!(!bank.is_on(LedColor::Red));
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut bank = IndicatorBank::new();
        assert!(bank.toggle(LedColor::Green));
        assert!(bank.is_on(LedColor::Green));
        assert!(!bank.toggle(LedColor::Green));
        assert!(!bank.is_on(LedColor::Green));
    }

    #[test]
    fn test_channels_are_independent() {
        let mut bank = IndicatorBank::new();
        bank.toggle(LedColor::Blue);
        assert!(bank.is_on(LedColor::Blue));
        assert!(!bank.is_on(LedColor::Green));
        assert!(!bank.is_on(LedColor::Red));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            IndicatorBank::status_text(LedColor::Green, true).as_str(),
            "LED Verde Ligado"
        );
        assert_eq!(
            IndicatorBank::status_text(LedColor::Blue, false).as_str(),
            "LED Azul Desligado"
        );
    }

    #[test]
    fn test_longest_status_fits() {
        let text = IndicatorBank::status_text(LedColor::Red, false);
        assert_eq!(text.as_str(), "LED Vermelho Desligado");
        assert!(text.len() <= STATUS_LEN);
    }
}
