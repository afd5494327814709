//! Console dispatcher
//!
//! Owns the debouncer, the indicator bank and the display surface, and is
//! the single place where input events turn into side effects. The firmware
//! drives it from one task, so every clear/draw/flush sequence runs to
//! completion before the next event is taken.

use crate::display::Surface;
use crate::indicator::IndicatorBank;
use crate::input::{ButtonEvent, Debouncer};
use crate::matrix::{self, Digit, MatrixFrame};
use crate::traits::{IndicatorLeds, LedColor, PanelError, PixelPanel, SerialLink};

/// Application state behind the serial console
pub struct Console {
    debouncer: Debouncer,
    indicators: IndicatorBank,
    surface: Surface,
}

impl Console {
    pub const fn new() -> Self {
        Self {
            debouncer: Debouncer::new(),
            indicators: IndicatorBank::new(),
            surface: Surface::new(),
        }
    }

    /// Console with a custom debounce window, for tests and bring-up
    pub const fn with_debounce_window(window_us: u64) -> Self {
        Self {
            debouncer: Debouncer::with_window(window_us),
            indicators: IndicatorBank::new(),
            surface: Surface::new(),
        }
    }

    /// Handle a button edge event
    ///
    /// Bounced edges are dropped silently. An accepted edge flips the
    /// button's indicator, drives the physical LED and shows the status
    /// line (skipping the redraw if the text is already on screen).
    /// Returns true if the edge was accepted.
    pub fn on_button<L, P>(
        &mut self,
        event: ButtonEvent,
        leds: &mut L,
        panel: &mut P,
    ) -> Result<bool, PanelError>
    where
        L: IndicatorLeds,
        P: PixelPanel,
    {
        if !self.debouncer.accept(event.button, event.at_us) {
            return Ok(false);
        }

        let color = event.button.indicator();
        let on = self.indicators.toggle(color);
        leds.set_led(color, on);

        let text = IndicatorBank::status_text(color, on);
        self.surface.show(&text, panel)?;
        Ok(true)
    }

    /// Handle one received serial byte
    ///
    /// The byte is echoed back verbatim, then rendered on the OLED. If it
    /// is an ASCII digit the returned frame carries the matrix rendering
    /// for the caller to push to the WS2812 chain; otherwise the matrix
    /// is left untouched.
    pub fn on_serial_byte<S, P>(
        &mut self,
        byte: u8,
        serial: &mut S,
        panel: &mut P,
    ) -> Result<Option<MatrixFrame>, PanelError>
    where
        S: SerialLink,
        P: PixelPanel,
    {
        serial.write_byte(byte);

        // Non-ASCII bytes map to the blank glyph slot before str conversion
        let shown = [if byte.is_ascii() { byte } else { 0x7F }];
        if let Ok(text) = core::str::from_utf8(&shown) {
            self.surface.show(text, panel)?;
        }

        Ok(Digit::from_ascii(byte)
            .map(|d| matrix::render(d, self.indicators.rgb(LedColor::Red))))
    }

    /// Drain all pending serial bytes
    ///
    /// Polling entry point matching the firmware's fixed-interval loop:
    /// every pending byte is dispatched through [`Self::on_serial_byte`],
    /// and the frame for the last digit seen (if any) is returned.
    pub fn poll_serial<S, P>(
        &mut self,
        serial: &mut S,
        panel: &mut P,
    ) -> Result<Option<MatrixFrame>, PanelError>
    where
        S: SerialLink,
        P: PixelPanel,
    {
        let mut frame = None;
        while let Some(byte) = serial.read_input_byte() {
            if let Some(rendered) = self.on_serial_byte(byte, serial, panel)? {
                frame = Some(rendered);
            }
        }
        Ok(frame)
    }

    pub fn indicators(&self) -> &IndicatorBank {
        &self.indicators
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{PAGES, WIDTH};
    use crate::input::Button;
    use crate::matrix::{Rgb, DIGIT_MASKS, MATRIX_CELLS};

    struct MockLeds {
        green: bool,
        blue: bool,
        red: bool,
        writes: usize,
    }

    impl MockLeds {
        fn new() -> Self {
            Self { green: false, blue: false, red: false, writes: 0 }
        }
    }

    impl IndicatorLeds for MockLeds {
        fn set_led(&mut self, color: LedColor, on: bool) {
            match color {
                LedColor::Green => self.green = on,
                LedColor::Blue => self.blue = on,
                LedColor::Red => self.red = on,
            }
            self.writes += 1;
        }
    }

    struct MockSerial {
        pending: heapless::Deque<u8, 16>,
        echoed: heapless::Vec<u8, 16>,
    }

    impl MockSerial {
        fn new() -> Self {
            Self {
                pending: heapless::Deque::new(),
                echoed: heapless::Vec::new(),
            }
        }

        fn queue(&mut self, bytes: &[u8]) {
            for &b in bytes {
                self.pending.push_back(b).unwrap();
            }
        }
    }

    impl SerialLink for MockSerial {
        fn read_input_byte(&mut self) -> Option<u8> {
            self.pending.pop_front()
        }

        fn write_byte(&mut self, byte: u8) {
            let _ = self.echoed.push(byte);
        }
    }

    struct MockPanel {
        frames_sent: usize,
        last_frame: [u8; WIDTH * PAGES],
    }

    impl MockPanel {
        fn new() -> Self {
            Self { frames_sent: 0, last_frame: [0; WIDTH * PAGES] }
        }
    }

    impl PixelPanel for MockPanel {
        fn write_pixel_row(&mut self, page: u8, row: &[u8]) -> Result<(), PanelError> {
            let start = page as usize * WIDTH;
            self.last_frame[start..start + WIDTH].copy_from_slice(row);
            Ok(())
        }

        fn send_frame(&mut self) -> Result<(), PanelError> {
            self.frames_sent += 1;
            Ok(())
        }
    }

    fn edge(button: Button, at_us: u64) -> ButtonEvent {
        ButtonEvent { button, at_us }
    }

    #[test]
    fn test_button_press_toggle_and_debounce_timeline() {
        // Spec scenario: edge at t=0 turns green on; an edge inside the
        // debounce window changes nothing; an edge past it turns green off.
        let mut console = Console::new();
        let mut leds = MockLeds::new();
        let mut panel = MockPanel::new();

        assert!(console.on_button(edge(Button::A, 0), &mut leds, &mut panel).unwrap());
        assert!(leds.green);
        assert!(console.indicators().is_on(LedColor::Green));
        assert_eq!(panel.frames_sent, 1);

        assert!(!console.on_button(edge(Button::A, 50_000), &mut leds, &mut panel).unwrap());
        assert!(leds.green);
        assert_eq!(panel.frames_sent, 1);

        assert!(console.on_button(edge(Button::A, 250_000), &mut leds, &mut panel).unwrap());
        assert!(!leds.green);
        assert!(!console.indicators().is_on(LedColor::Green));
        assert_eq!(panel.frames_sent, 2);
    }

    #[test]
    fn test_double_dispatch_is_self_inverse() {
        // With the debounce window at zero the same logical event twice
        // returns the indicator to its original state.
        let mut console = Console::with_debounce_window(0);
        let mut leds = MockLeds::new();
        let mut panel = MockPanel::new();

        assert!(console.on_button(edge(Button::B, 1), &mut leds, &mut panel).unwrap());
        assert!(console.on_button(edge(Button::B, 2), &mut leds, &mut panel).unwrap());
        assert!(!console.indicators().is_on(LedColor::Blue));
        assert!(!leds.blue);
        assert_eq!(leds.writes, 2);
    }

    #[test]
    fn test_button_b_drives_blue() {
        let mut console = Console::new();
        let mut leds = MockLeds::new();
        let mut panel = MockPanel::new();

        console.on_button(edge(Button::B, 0), &mut leds, &mut panel).unwrap();
        assert!(leds.blue);
        assert!(!leds.green);
        assert!(!leds.red);
    }

    #[test]
    fn test_red_is_never_driven() {
        let mut console = Console::with_debounce_window(0);
        let mut leds = MockLeds::new();
        let mut panel = MockPanel::new();

        for t in 0..10u64 {
            let button = if t % 2 == 0 { Button::A } else { Button::B };
            console.on_button(edge(button, t * 2 + 1), &mut leds, &mut panel).unwrap();
        }
        assert!(!leds.red);
        assert!(!console.indicators().is_on(LedColor::Red));
    }

    #[test]
    fn test_digit_byte_echoes_and_renders_matrix() {
        // Spec scenario: '7' is echoed, shown on the OLED, and the matrix
        // frame has exactly the cells of mask 7 set to red.
        let mut console = Console::new();
        let mut serial = MockSerial::new();
        let mut panel = MockPanel::new();

        let frame = console
            .on_serial_byte(b'7', &mut serial, &mut panel)
            .unwrap()
            .expect("digit byte must produce a matrix frame");

        assert_eq!(serial.echoed.as_slice(), b"7");
        assert_eq!(panel.frames_sent, 1);
        assert_eq!(frame.len(), MATRIX_CELLS);
        for (i, cell) in frame.iter().enumerate() {
            let expected = if DIGIT_MASKS[7][i] != 0 { Rgb::RED } else { Rgb::BLACK };
            assert_eq!(*cell, expected, "cell {}", i);
        }
    }

    #[test]
    fn test_non_digit_byte_echoes_without_matrix_update() {
        let mut console = Console::new();
        let mut serial = MockSerial::new();
        let mut panel = MockPanel::new();

        let frame = console.on_serial_byte(b'A', &mut serial, &mut panel).unwrap();
        assert_eq!(serial.echoed.as_slice(), b"A");
        assert_eq!(panel.frames_sent, 1);
        assert!(frame.is_none());
    }

    #[test]
    fn test_non_ascii_byte_is_echoed_and_blank_on_screen() {
        let mut console = Console::new();
        let mut serial = MockSerial::new();
        let mut panel = MockPanel::new();

        let frame = console.on_serial_byte(0xC3, &mut serial, &mut panel).unwrap();
        assert_eq!(serial.echoed.as_slice(), &[0xC3]);
        assert!(frame.is_none());
        // Blank glyph: flushed frame has no lit pixels
        assert!(panel.last_frame.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_repeated_byte_suppresses_redraw_but_still_echoes() {
        let mut console = Console::new();
        let mut serial = MockSerial::new();
        let mut panel = MockPanel::new();

        console.on_serial_byte(b'x', &mut serial, &mut panel).unwrap();
        console.on_serial_byte(b'x', &mut serial, &mut panel).unwrap();
        assert_eq!(serial.echoed.as_slice(), b"xx");
        assert_eq!(panel.frames_sent, 1);
    }

    #[test]
    fn test_poll_serial_drains_all_pending_bytes() {
        let mut console = Console::new();
        let mut serial = MockSerial::new();
        let mut panel = MockPanel::new();

        serial.queue(b"a7b");
        let frame = console
            .poll_serial(&mut serial, &mut panel)
            .unwrap()
            .expect("queued digit must surface a frame");

        assert_eq!(serial.echoed.as_slice(), b"a7b");
        assert!(serial.pending.is_empty());
        for (i, cell) in frame.iter().enumerate() {
            let expected = if DIGIT_MASKS[7][i] != 0 { Rgb::RED } else { Rgb::BLACK };
            assert_eq!(*cell, expected);
        }

        // Nothing pending: idle poll touches neither serial nor display
        let flushed_before = panel.frames_sent;
        assert!(console.poll_serial(&mut serial, &mut panel).unwrap().is_none());
        assert_eq!(panel.frames_sent, flushed_before);
    }

    #[test]
    fn test_status_and_echo_share_the_surface() {
        // Button status then a serial byte then the same button state
        // again: the cache tracks whatever was rendered last.
        let mut console = Console::with_debounce_window(0);
        let mut leds = MockLeds::new();
        let mut serial = MockSerial::new();
        let mut panel = MockPanel::new();

        console.on_button(edge(Button::A, 1), &mut leds, &mut panel).unwrap();
        assert_eq!(panel.frames_sent, 1);

        console.on_serial_byte(b'5', &mut serial, &mut panel).unwrap();
        assert_eq!(panel.frames_sent, 2);

        // Toggling back renders "Desligado", which differs from '5'
        console.on_button(edge(Button::A, 3), &mut leds, &mut panel).unwrap();
        assert_eq!(panel.frames_sent, 3);
    }
}
