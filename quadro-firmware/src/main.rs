//! Quadro - BitDogLab serial console firmware
//!
//! Polls the UART console and echoes every byte, renders the last
//! received character on the SSD1306 OLED, toggles the green/blue
//! indicator LEDs from the two debounced push buttons, and draws typed
//! digits on the 5x5 WS2812 matrix.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c;
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use quadro_core::input::Button;

mod channels;
mod leds;
mod panel;
mod serial;
mod tasks;

use crate::leds::BoardLeds;
use crate::panel::Ssd1306Panel;
use crate::serial::UartLink;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Quadro firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // UART0 console on GPIO0/GPIO1, 115200 baud default
    let uart_config = UartConfig::default();
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let link = UartLink::new(tx, rx);
    info!("UART console initialized");

    // SSD1306 OLED on I2C1 (SDA=GPIO14, SCL=GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let bus = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut oled = Ssd1306Panel::new(bus);
    if let Err(e) = oled.init() {
        error!("Display init failed: {:?}", e);
    }
    info!("Display initialized");

    // Indicator LEDs; red is wired but has no button mapped to it
    let leds = BoardLeds::new(
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    );

    // Buttons, active-low with pull-ups
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // WS2812 matrix on GPIO7 via PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    info!("WS2812 matrix initialized");

    spawner.spawn(tasks::button_task(button_a, Button::A)).unwrap();
    spawner.spawn(tasks::button_task(button_b, Button::B)).unwrap();
    info!("Button tasks spawned, entering console loop");

    tasks::console_loop(link, leds, oled, &mut ws2812).await
}
