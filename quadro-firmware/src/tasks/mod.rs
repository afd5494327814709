//! Embassy async tasks and the console loop

pub mod buttons;
pub mod console;

pub use buttons::button_task;
pub use console::console_loop;
