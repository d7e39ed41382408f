/// Settings editor: player and round counts.
///
/// Both values are bounded circular counters. Incrementing past the maximum
/// lands on the minimum, never on zero or any other out-of-range value.
use crate::defaults::{
    DEF_PLAYERS, DEF_ROUNDS, MAX_PLAYERS, MAX_ROUNDS, MIN_PLAYERS, MIN_ROUNDS, PLAYERS_POS,
    ROUNDS_POS,
};

/// A value in `[min, max]` that wraps to `min` after `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: u8,
    min: u8,
    max: u8,
    default: u8,
}

impl Counter {
    pub const fn new(min: u8, max: u8, default: u8) -> Self {
        Self {
            value: default,
            min,
            max,
            default,
        }
    }

    pub const fn get(&self) -> u8 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = if self.value >= self.max {
            self.min
        } else {
            self.value + 1
        };
    }

    pub fn reset(&mut self) {
        self.value = self.default;
    }
}

/// Which counter the increment button edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rounds,
    Players,
}

impl Field {
    pub const fn other(self) -> Self {
        match self {
            Field::Rounds => Field::Players,
            Field::Players => Field::Rounds,
        }
    }

    /// Screen row the field is drawn on, where the selection marker goes
    pub const fn row(self) -> i32 {
        match self {
            Field::Rounds => ROUNDS_POS,
            Field::Players => PLAYERS_POS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    players: Counter,
    rounds: Counter,
    selected: Field,
}

impl Settings {
    pub const fn new() -> Self {
        Self {
            players: Counter::new(MIN_PLAYERS, MAX_PLAYERS, DEF_PLAYERS),
            rounds: Counter::new(MIN_ROUNDS, MAX_ROUNDS, DEF_ROUNDS),
            selected: Field::Rounds,
        }
    }

    pub const fn players(&self) -> u8 {
        self.players.get()
    }

    pub const fn rounds(&self) -> u8 {
        self.rounds.get()
    }

    pub const fn selected(&self) -> Field {
        self.selected
    }

    /// Move the edit marker to the other field.
    pub fn toggle(&mut self) {
        self.selected = self.selected.other();
    }

    /// Increment whichever field is selected.
    pub fn increment(&mut self) {
        match self.selected {
            Field::Rounds => self.rounds.increment(),
            Field::Players => self.players.increment(),
        }
        log::info!(
            "Settings: {} players, {} rounds",
            self.players(),
            self.rounds()
        );
    }

    /// Restore default player and round counts. The selected field stays.
    pub fn reset(&mut self) {
        self.players.reset();
        self.rounds.reset();
        log::info!("Settings reset to defaults");
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::new();
        assert_eq!(s.players(), 2);
        assert_eq!(s.rounds(), 3);
        assert_eq!(s.selected(), Field::Rounds);
    }

    #[test]
    fn players_wrap_from_five_to_two() {
        let mut c = Counter::new(MIN_PLAYERS, MAX_PLAYERS, DEF_PLAYERS);
        let seen: heapless::Vec<u8, 8> = (0..5)
            .map(|_| {
                c.increment();
                c.get()
            })
            .collect();
        assert_eq!(seen.as_slice(), &[3, 4, 5, 2, 3]);
    }

    #[test]
    fn rounds_wrap_from_seven_to_one() {
        let mut s = Settings::new();
        for _ in 0..4 {
            s.increment();
        }
        assert_eq!(s.rounds(), 7);
        s.increment();
        assert_eq!(s.rounds(), 1);
    }

    #[test]
    fn counter_never_leaves_range() {
        let mut c = Counter::new(MIN_ROUNDS, MAX_ROUNDS, DEF_ROUNDS);
        for _ in 0..50 {
            c.increment();
            assert!((MIN_ROUNDS..=MAX_ROUNDS).contains(&c.get()));
        }
    }

    #[test]
    fn toggle_switches_target_field() {
        let mut s = Settings::new();
        s.toggle();
        assert_eq!(s.selected(), Field::Players);
        s.increment();
        assert_eq!(s.players(), 3);
        assert_eq!(s.rounds(), 3);

        s.toggle();
        assert_eq!(s.selected(), Field::Rounds);
        s.increment();
        assert_eq!(s.rounds(), 4);
    }

    #[test]
    fn reset_restores_counts_but_keeps_selection() {
        let mut s = Settings::new();
        s.increment();
        s.toggle();
        s.increment();
        s.reset();
        assert_eq!((s.players(), s.rounds()), (2, 3));
        assert_eq!(s.selected(), Field::Players);
    }

    #[test]
    fn field_rows_match_screen_layout() {
        assert_eq!(Field::Rounds.row(), ROUNDS_POS);
        assert_eq!(Field::Players.row(), PLAYERS_POS);
        assert_eq!(Field::Rounds.other().row(), PLAYERS_POS);
    }
}
