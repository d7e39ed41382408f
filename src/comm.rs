/// Serial terminal transport.
///
/// The operator types on a byte-oriented ASCII terminal and the device writes
/// prompts back. The game never touches the UART directly: it reads from and
/// writes to a [`SerialLink`], and the main loop calls [`SerialLink::pump`]
/// once per tick to move bytes between the link and the real port without
/// blocking.
use heapless::Deque;

use crate::defaults::NEWLINE;

/// Inbound bytes buffered between pumps. Bytes arriving while it is full
/// are dropped.
pub const RX_QUEUE_LEN: usize = 16;

/// Outbound bytes buffered between pumps. Large enough for the longest burst
/// written in one tick (round resolution followed by the next announcement).
pub const TX_QUEUE_LEN: usize = 512;

/// One of the four fixed serial speeds, cycled by the Baud button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaudRate {
    #[default]
    Baud9600,
    Baud19200,
    Baud38400,
    Baud57600,
}

impl BaudRate {
    pub const ALL: [BaudRate; 4] = [
        BaudRate::Baud9600,
        BaudRate::Baud19200,
        BaudRate::Baud38400,
        BaudRate::Baud57600,
    ];

    /// Bits per second for UART configuration
    pub const fn bps(self) -> u32 {
        match self {
            BaudRate::Baud9600 => 9600,
            BaudRate::Baud19200 => 19200,
            BaudRate::Baud38400 => 38400,
            BaudRate::Baud57600 => 57600,
        }
    }

    /// Next rate in the cycle, wrapping from 57600 back to 9600.
    pub const fn next(self) -> Self {
        match self {
            BaudRate::Baud9600 => BaudRate::Baud19200,
            BaudRate::Baud19200 => BaudRate::Baud38400,
            BaudRate::Baud38400 => BaudRate::Baud57600,
            BaudRate::Baud57600 => BaudRate::Baud9600,
        }
    }
}

/// Non-blocking byte port implemented by the board's UART.
///
/// Both methods are check-then-act: "nothing to read" and "no room to write"
/// are normal transient conditions, not errors.
pub trait SerialPort {
    /// Take one received byte if the receiver holds one.
    fn read_byte(&mut self) -> Option<u8>;

    /// Hand one byte to the transmitter. Returns false if it has no room.
    fn write_byte(&mut self, byte: u8) -> bool;
}

/// Two-queue model of the serial channel.
pub struct SerialLink {
    rx: Deque<u8, RX_QUEUE_LEN>,
    tx: Deque<u8, TX_QUEUE_LEN>,
}

impl SerialLink {
    pub const fn new() -> Self {
        Self {
            rx: Deque::new(),
            tx: Deque::new(),
        }
    }

    /// Drain everything the port has received into the inbound queue, then
    /// flush as much of the outbound queue as the port accepts.
    ///
    /// Inbound overflow is malformed input: the extra bytes are read off the
    /// port and dropped silently.
    pub fn pump<P: SerialPort>(&mut self, port: &mut P) {
        while let Some(byte) = port.read_byte() {
            let _ = self.rx.push_back(byte);
        }

        while let Some(&byte) = self.tx.front() {
            if !port.write_byte(byte) {
                break;
            }
            self.tx.pop_front();
        }
    }

    /// Take the oldest received byte.
    pub fn take_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    /// Whether a received byte is waiting.
    pub fn has_byte(&self) -> bool {
        !self.rx.is_empty()
    }

    /// Drop every byte typed before this point.
    pub fn discard_pending(&mut self) {
        self.rx.clear();
    }

    /// Queue text for transmission. Bytes that do not fit are dropped.
    pub fn send(&mut self, text: &str) {
        let mut dropped = 0usize;
        for byte in text.bytes() {
            if self.tx.push_back(byte).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::warn!("Serial TX queue full, dropped {} bytes", dropped);
        }
    }

    pub fn new_line(&mut self) {
        self.send(NEWLINE);
    }
}

impl Default for SerialLink {
    fn default() -> Self {
        Self::new()
    }
}
