/// Hardware abstraction for supported boards.
///
/// Each board module defines pin assignments and capabilities
/// selected at compile time via feature flags. Button order matches
/// [`crate::input::Button::ALL`].

#[cfg(feature = "board-devkit")]
mod hw {
    /// Push buttons, active low with internal pull-ups
    pub const BUTTON_PINS: [u8; 5] = [
        4,  // BB1 confirm
        5,  // LB2 secondary
        6,  // JSB joystick press
        7,  // LB1 reset settings
        15, // BB2 baud
    ];

    /// Baud indicator, R/G/B, active high
    pub const BAUD_LED_PINS: [u8; 3] = [1, 2, 42];
    /// Move indicator, R/G/B, active high
    pub const MOVE_LED_PINS: [u8; 3] = [41, 40, 39];

    // Operator terminal on UART1
    pub const UART_TX_PIN: u8 = 17;
    pub const UART_RX_PIN: u8 = 18;

    // ST7735S 128x128 on SPI2
    pub const DISPLAY_SCK_PIN: u8 = 12;
    pub const DISPLAY_MOSI_PIN: u8 = 11;
    pub const DISPLAY_CS_PIN: u8 = 10;
    pub const DISPLAY_DC_PIN: u8 = 9;
    pub const DISPLAY_RST_PIN: u8 = 8;
    pub const DISPLAY_BL_PIN: u8 = 13;
    pub const DISPLAY_WIDTH: u16 = 128;
    pub const DISPLAY_HEIGHT: u16 = 128;
    pub const DISPLAY_SPI_FREQ_MHZ: u32 = 26;

    pub const HAS_DISPLAY: bool = true;
    pub const BOARD_NAME: &str = "esp32s3_devkitc_lcd";
}

#[cfg(not(feature = "board-devkit"))]
mod hw {
    pub const HAS_DISPLAY: bool = false;
    pub const BOARD_NAME: &str = "unknown";
}

pub use hw::*;
