//! SSD1306 OLED panel driver
//!
//! 128x64 SSD1306 on I2C, address 0x3C. The driver is a dumb frame
//! consumer behind [`quadro_core::traits::PixelPanel`]: all compositing
//! happens in the core surface, and `send_frame` pushes the staged frame
//! to the device in one horizontal-addressing transfer.

use embedded_hal::i2c::I2c;

use quadro_core::display::{PAGES, WIDTH};
use quadro_core::traits::{PanelError, PixelPanel};

/// SSD1306 I2C address
pub const SSD1306_ADDR: u8 = 0x3C;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_ADDR_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
}

/// SSD1306 driver staging a full frame behind a data-control prefix
pub struct Ssd1306Panel<BUS> {
    bus: BUS,
    addr: u8,
    /// 0x40 data prefix followed by the frame, sent as one transfer
    frame: [u8; 1 + WIDTH * PAGES],
}

impl<BUS> Ssd1306Panel<BUS>
where
    BUS: I2c,
{
    pub fn new(bus: BUS) -> Self {
        let mut frame = [0u8; 1 + WIDTH * PAGES];
        frame[0] = 0x40;
        Self {
            bus,
            addr: SSD1306_ADDR,
            frame,
        }
    }

    /// Run the init sequence and blank the display
    pub fn init(&mut self) -> Result<(), PanelError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_ADDR_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(&[c])?;
        }

        self.send_frame()
    }

    fn command(&mut self, bytes: &[u8]) -> Result<(), PanelError> {
        let mut buf = [0u8; 4];
        if bytes.len() + 1 > buf.len() {
            return Err(PanelError::BadGeometry);
        }
        buf[1..=bytes.len()].copy_from_slice(bytes);
        self.bus
            .write(self.addr, &buf[..=bytes.len()])
            .map_err(|_| PanelError::Bus)
    }
}

impl<BUS> PixelPanel for Ssd1306Panel<BUS>
where
    BUS: I2c,
{
    fn write_pixel_row(&mut self, page: u8, row: &[u8]) -> Result<(), PanelError> {
        if page as usize >= PAGES || row.len() != WIDTH {
            return Err(PanelError::BadGeometry);
        }
        let start = 1 + page as usize * WIDTH;
        self.frame[start..start + WIDTH].copy_from_slice(row);
        Ok(())
    }

    fn send_frame(&mut self) -> Result<(), PanelError> {
        // Reset the addressing window, then one full-frame data transfer
        self.command(&[cmd::SET_COLUMN_ADDR, 0, (WIDTH - 1) as u8])?;
        self.command(&[cmd::SET_PAGE_ADDR, 0, (PAGES - 1) as u8])?;
        self.bus
            .write(self.addr, &self.frame)
            .map_err(|_| PanelError::Bus)
    }
}
