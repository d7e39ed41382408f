//! Host-side doubles for the board capabilities.

use crate::comm::SerialPort;
use crate::screens::Surface;

/// Scripted UART: bytes fed in are read back one at a time, bytes written
/// are collected as text.
pub(crate) struct FakePort {
    input: Vec<u8>,
    pos: usize,
    output: String,
    tx_room: usize,
}

impl FakePort {
    pub(crate) fn new() -> Self {
        Self {
            input: Vec::new(),
            pos: 0,
            output: String::new(),
            tx_room: usize::MAX,
        }
    }

    pub(crate) fn with_input(bytes: &[u8]) -> Self {
        let mut port = Self::new();
        port.feed(bytes);
        port
    }

    /// Queue bytes as if the operator typed them.
    pub(crate) fn feed(&mut self, bytes: &[u8]) {
        self.input.extend_from_slice(bytes);
    }

    /// Bytes typed but not yet read
    pub(crate) fn unread(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Limit how many more bytes the transmitter accepts.
    pub(crate) fn set_tx_room(&mut self, room: usize) {
        self.tx_room = room;
    }

    pub(crate) fn output(&self) -> &str {
        &self.output
    }
}

impl SerialPort for FakePort {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.input.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    fn write_byte(&mut self, byte: u8) -> bool {
        if self.tx_room == 0 {
            return false;
        }
        self.tx_room = self.tx_room.saturating_sub(1);
        self.output.push(byte as char);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Clear,
    Text { x: i32, y: i32, text: String },
}

/// Display that remembers every draw call.
pub(crate) struct RecordingSurface {
    calls: Vec<Call>,
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub(crate) fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub(crate) fn clears(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Clear).count()
    }

    /// Calls made since the screen was last cleared
    fn visible(&self) -> &[Call] {
        match self.calls.iter().rposition(|c| *c == Call::Clear) {
            Some(i) => &self.calls[i + 1..],
            None => &self.calls,
        }
    }

    /// Latest text drawn at exactly (`x`, `y`) since the last clear.
    pub(crate) fn text_at(&self, x: i32, y: i32) -> Option<&str> {
        self.visible().iter().rev().find_map(|c| match c {
            Call::Text { x: cx, y: cy, text } if *cx == x && *cy == y => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text drawn since the last clear contains `needle`.
    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.visible().iter().any(|c| match c {
            Call::Text { text, .. } => text.contains(needle),
            Call::Clear => false,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn text(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(Call::Text {
            x,
            y,
            text: text.into(),
        });
    }
}
