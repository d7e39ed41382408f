/// Player names typed on the serial terminal.
///
/// Each name holds up to `NAME_LEN` ASCII letters or digits. Anything else is
/// dropped without complaint. Once a name is full, input for that slot stops
/// until the controller opens the next slot.
use core::fmt::Write;

use heapless::String;

use crate::defaults::NAME_LEN;

/// Fixed-capacity player name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerName {
    text: String<NAME_LEN>,
}

impl PlayerName {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.text.len() == NAME_LEN
    }

    /// Append one character. Returns false when the name is already full.
    pub fn push(&mut self, c: char) -> bool {
        self.text.push(c).is_ok()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Give an empty slot the placeholder `P<n>` (1-based).
    pub fn finalize(&mut self, slot: usize) {
        if self.text.is_empty() {
            let _ = write!(self.text, "P{}", slot + 1);
        }
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        let mut name = PlayerName::new();
        for c in s.bytes().filter_map(interpret_char) {
            if !name.push(c) {
                break;
            }
        }
        name
    }
}

/// Accept ASCII letters and digits unchanged; reject everything else.
pub fn interpret_char(byte: u8) -> Option<char> {
    if byte.is_ascii_alphanumeric() {
        Some(byte as char)
    } else {
        None
    }
}

/// Name-entry sub-state: which slot is being typed and whether input is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry {
    slot: usize,
    input_enabled: bool,
}

/// What happened to a byte offered to [`NameEntry::accept`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameInput {
    /// Input is closed for this slot; the byte was not consumed
    Closed,
    /// Not a letter or digit; dropped
    Ignored,
    /// Appended to the name; echo this character
    Accepted(char),
}

impl NameEntry {
    /// Start at the first slot with input open.
    pub const fn new() -> Self {
        Self {
            slot: 0,
            input_enabled: true,
        }
    }

    pub const fn slot(&self) -> usize {
        self.slot
    }

    pub const fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Offer one received byte to the active slot's name.
    pub fn accept(&mut self, name: &mut PlayerName, byte: u8) -> NameInput {
        if !self.input_enabled || name.is_full() {
            self.input_enabled = false;
            return NameInput::Closed;
        }

        let Some(c) = interpret_char(byte) else {
            return NameInput::Ignored;
        };

        name.push(c);
        log::debug!("Player {} name: {}", self.slot + 1, name.as_str());
        if name.is_full() {
            self.input_enabled = false;
        }
        NameInput::Accepted(c)
    }

    /// Move to the next slot and reopen input.
    pub fn advance(&mut self) {
        self.slot += 1;
        self.input_enabled = true;
    }
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}
