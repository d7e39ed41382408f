//! Rochambeau: multiplayer Rock-Paper-Scissors console
//!
//! Owns the board peripherals and drives the portable game engine from a
//! single 10 ms polling loop: sample buttons, move serial bytes, tick the
//! screen controller, then refresh the LEDs.

#![no_std]
#![no_main]

use esp_backtrace as _;

esp_bootloader_esp_idf::esp_app_desc!();

use embassy_time::{Duration, Instant, Ticker};
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};
use esp_hal::Blocking;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::ColorOrder;
use mipidsi::Builder;

use rochambeau::comm::{BaudRate, SerialLink, SerialPort};
use rochambeau::display::GraphicsSurface;
use rochambeau::fsm;
use rochambeau::game::GameSession;
use rochambeau::indicator::{Leds, Rgb};
use rochambeau::input::{Button, TapDetector};
use rochambeau::screens::Surface;
use rochambeau::{board, defaults};

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Board adapters ───────────────────────────────────────────────────

/// Operator terminal. Never blocks: both directions check the FIFO first.
struct UartPort<'d> {
    uart: Uart<'d, Blocking>,
}

impl UartPort<'_> {
    fn set_baud(&mut self, baud: BaudRate) {
        let config = UartConfig::default().with_baudrate(baud.bps());
        if let Err(e) = self.uart.apply_config(&config) {
            log::warn!("UART reconfigure to {} failed: {:?}", baud.bps(), e);
        }
    }
}

impl SerialPort for UartPort<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        if !self.uart.read_ready() {
            return None;
        }
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn write_byte(&mut self, byte: u8) -> bool {
        if !self.uart.write_ready() {
            return false;
        }
        matches!(self.uart.write(&[byte]), Ok(1))
    }
}

/// Three GPIOs driving one tri-colour LED
struct RgbLed<'d> {
    red: Output<'d>,
    green: Output<'d>,
    blue: Output<'d>,
}

impl RgbLed<'_> {
    fn show(&mut self, color: Rgb) {
        self.red.set_level(Level::from(color.red));
        self.green.set_level(Level::from(color.green));
        self.blue.set_level(Level::from(color.blue));
    }
}

struct BoardLeds<'d> {
    baud: RgbLed<'d>,
    mv: RgbLed<'d>,
}

impl Leds for BoardLeds<'_> {
    fn set_baud(&mut self, color: Rgb) {
        self.baud.show(color);
    }

    fn set_move(&mut self, color: Rgb) {
        self.mv.show(color);
    }
}

/// Buttons pull the pin to ground when pressed
fn button_pin(pin: impl esp_hal::gpio::InputPin + 'static) -> Input<'static> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Up))
}

fn led_pin(pin: impl esp_hal::gpio::OutputPin + 'static) -> Output<'static> {
    Output::new(pin, Level::Low, OutputConfig::default())
}

// ── Entry point ──────────────────────────────────────────────────────

#[esp_rtos::main]
async fn main(_spawner: embassy_executor::Spawner) {
    esp_println::logger::init_logger_from_env();

    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Start the RTOS, requires timer + software interrupt
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    log::info!("Rochambeau v{} starting on {}", VERSION, board::BOARD_NAME);

    // Buttons, in Button::ALL order (see board::BUTTON_PINS)
    let buttons = [
        button_pin(peripherals.GPIO4),
        button_pin(peripherals.GPIO5),
        button_pin(peripherals.GPIO6),
        button_pin(peripherals.GPIO7),
        button_pin(peripherals.GPIO15),
    ];
    for (button, pin) in Button::ALL.iter().zip(board::BUTTON_PINS) {
        log::info!("Button {} on GPIO{}", button.label(), pin);
    }

    let mut leds = BoardLeds {
        baud: RgbLed {
            red: led_pin(peripherals.GPIO1),
            green: led_pin(peripherals.GPIO2),
            blue: led_pin(peripherals.GPIO42),
        },
        mv: RgbLed {
            red: led_pin(peripherals.GPIO41),
            green: led_pin(peripherals.GPIO40),
            blue: led_pin(peripherals.GPIO39),
        },
    };
    log::info!(
        "LEDs: baud RGB GPIO{:?}, move RGB GPIO{:?}",
        board::BAUD_LED_PINS,
        board::MOVE_LED_PINS
    );

    let mut session = GameSession::new();

    let uart_config = UartConfig::default().with_baudrate(session.baud().bps());
    let uart = Uart::new(peripherals.UART1, uart_config)
        .unwrap()
        .with_tx(peripherals.GPIO17)
        .with_rx(peripherals.GPIO18);
    let mut port = UartPort { uart };
    log::info!(
        "UART1 terminal at {} baud (TX GPIO{}, RX GPIO{})",
        session.baud().bps(),
        board::UART_TX_PIN,
        board::UART_RX_PIN
    );

    // Turn on backlight
    let _bl = Output::new(peripherals.GPIO13, Level::High, OutputConfig::default());

    // Configure SPI bus (Mode 0)
    let spi_config = SpiConfig::default()
        .with_frequency(Rate::from_mhz(board::DISPLAY_SPI_FREQ_MHZ))
        .with_mode(Mode::_0);
    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO12)
        .with_mosi(peripherals.GPIO11);

    // Wrap SpiBus + CS into SpiDevice
    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();

    let dc = Output::new(peripherals.GPIO9, Level::Low, OutputConfig::default());
    let mut buffer = [0u8; 512];
    let di = SpiInterface::new(spi_device, dc, &mut buffer);

    let rst = Output::new(peripherals.GPIO8, Level::High, OutputConfig::default());
    let mut delay = Delay::new();
    let display = Builder::new(ST7735s, di)
        .display_size(board::DISPLAY_WIDTH, board::DISPLAY_HEIGHT)
        .color_order(ColorOrder::Bgr)
        .reset_pin(rst)
        .init(&mut delay)
        .unwrap();

    let mut surface = GraphicsSurface::new(display);
    surface.clear();
    log::info!(
        "Display initialized ({}x{})",
        board::DISPLAY_WIDTH,
        board::DISPLAY_HEIGHT
    );
    log::info!(
        "Display pins: SCK {}, MOSI {}, CS {}, DC {}, RST {}, BL {}",
        board::DISPLAY_SCK_PIN,
        board::DISPLAY_MOSI_PIN,
        board::DISPLAY_CS_PIN,
        board::DISPLAY_DC_PIN,
        board::DISPLAY_RST_PIN,
        board::DISPLAY_BL_PIN
    );

    let mut link = SerialLink::new();
    let mut detector = TapDetector::new();
    leds.apply(session.indicators());

    // ── Main loop ────────────────────────────────────────────────────
    let mut ticker = Ticker::every(Duration::from_millis(defaults::TICK_MS));
    loop {
        let pressed: [bool; Button::COUNT] = core::array::from_fn(|i| buttons[i].is_low());
        let taps = detector.update(pressed, Instant::now().as_millis());

        link.pump(&mut port);
        let outcome = fsm::tick(&mut session, taps, &mut link, &mut surface);
        if let Some(baud) = outcome.baud_changed {
            port.set_baud(baud);
        }
        leds.apply(session.indicators());

        ticker.next().await;
    }
}
