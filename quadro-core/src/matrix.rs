//! Digit rendering for the 5x5 WS2812 matrix
//!
//! Each digit 0-9 has a fixed on/off mask over the 25 cells. Rendering is
//! a pure function of the digit and the mask table: every cell is either
//! set to the on-color or cleared, so no stale frame data survives.

/// Number of cells in the addressable matrix (5x5)
pub const MATRIX_CELLS: usize = 25;

/// One RGB color entry per matrix cell
pub type MatrixFrame = [Rgb; MATRIX_CELLS];

/// 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(32, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 32, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 32);
}

/// An ASCII digit validated into the 0..=9 range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Parse a serial byte as a digit, if it is one
    pub fn from_ascii(byte: u8) -> Option<Self> {
        byte.is_ascii_digit().then(|| Digit(byte - b'0'))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Per-digit cell masks, in physical cell index order
///
/// The matrix is indexed row-major with cell 0 at the top-left. Digits are
/// drawn 3 cells wide, centered in the 5 columns.
#[rustfmt::skip]
pub const DIGIT_MASKS: [[u8; MATRIX_CELLS]; 10] = [
    // 0
    [0, 1, 1, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 1, 1, 0],
    // 1
    [0, 0, 1, 0, 0,
     0, 1, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 1, 1, 1, 0],
    // 2
    [0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 1, 1, 1, 0,
     0, 1, 0, 0, 0,
     0, 1, 1, 1, 0],
    // 3
    [0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 1, 1, 1, 0],
    // 4
    [0, 1, 0, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 0, 0, 1, 0],
    // 5
    [0, 1, 1, 1, 0,
     0, 1, 0, 0, 0,
     0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 1, 1, 1, 0],
    // 6
    [0, 1, 1, 1, 0,
     0, 1, 0, 0, 0,
     0, 1, 1, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 1, 1, 0],
    // 7
    [0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0,
     0, 0, 1, 0, 0],
    // 8
    [0, 1, 1, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 1, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 1, 1, 0],
    // 9
    [0, 1, 1, 1, 0,
     0, 1, 0, 1, 0,
     0, 1, 1, 1, 0,
     0, 0, 0, 1, 0,
     0, 1, 1, 1, 0],
];

/// Render a digit to a full matrix frame
///
/// Cell `i` is `on_color` iff the digit's mask has a 1 at index `i`,
/// otherwise black. Every cell is written on every call.
pub fn render(digit: Digit, on_color: Rgb) -> MatrixFrame {
    let mask = &DIGIT_MASKS[digit.value() as usize];
    let mut frame = [Rgb::BLACK; MATRIX_CELLS];
    for (cell, &bit) in frame.iter_mut().zip(mask.iter()) {
        if bit != 0 {
            *cell = on_color;
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::from_ascii(b'0' + d).unwrap()
    }

    #[test]
    fn test_digit_from_ascii() {
        assert_eq!(Digit::from_ascii(b'0').map(Digit::value), Some(0));
        assert_eq!(Digit::from_ascii(b'9').map(Digit::value), Some(9));
        assert_eq!(Digit::from_ascii(b'A'), None);
        assert_eq!(Digit::from_ascii(b'/'), None);
        assert_eq!(Digit::from_ascii(b':'), None);
    }

    #[test]
    fn test_frame_matches_mask() {
        for d in 0..10 {
            let frame = render(digit(d), Rgb::RED);
            assert_eq!(frame.len(), MATRIX_CELLS);
            for (i, cell) in frame.iter().enumerate() {
                let expected = if DIGIT_MASKS[d as usize][i] != 0 {
                    Rgb::RED
                } else {
                    Rgb::BLACK
                };
                assert_eq!(*cell, expected, "digit {} cell {}", d, i);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for d in 0..10 {
            assert_eq!(render(digit(d), Rgb::RED), render(digit(d), Rgb::RED));
        }
    }

    #[test]
    fn test_digits_are_distinct() {
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(
                    render(digit(a), Rgb::RED),
                    render(digit(b), Rgb::RED),
                    "digits {} and {} render identically",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_render_overwrites_every_cell() {
        // Rendering 8 (densest) then 1 (sparsest) must leave no cells
        // from the previous frame lit.
        let eight = render(digit(8), Rgb::RED);
        let one = render(digit(1), Rgb::RED);
        let on_count = |f: &MatrixFrame| f.iter().filter(|c| **c != Rgb::BLACK).count();
        assert!(on_count(&eight) > on_count(&one));
        for (i, cell) in one.iter().enumerate() {
            if DIGIT_MASKS[1][i] == 0 {
                assert_eq!(*cell, Rgb::BLACK);
            }
        }
    }
}
