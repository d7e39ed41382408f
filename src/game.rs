/// The live game: one owned context threaded through every tick.
///
/// Built once at boot with default settings. Only [`crate::fsm::tick`]
/// mutates it; the screen renderers take it by shared reference.
use heapless::Vec;

use crate::comm::BaudRate;
use crate::defaults::MAX_PLAYERS;
use crate::fsm::{Screen, ScreenState};
use crate::indicator::{baud_color, IndicatorState, MoveFlash};
use crate::names::PlayerName;
use crate::round::Choice;
use crate::settings::Settings;

/// Capacity of every per-player array
pub const PLAYER_SLOTS: usize = MAX_PLAYERS as usize;

pub struct GameSession {
    pub(crate) screen: Screen,
    pub(crate) settings: Settings,
    pub(crate) names: [PlayerName; PLAYER_SLOTS],
    pub(crate) choices: [Choice; PLAYER_SLOTS],
    pub(crate) wins: [u8; PLAYER_SLOTS],
    /// Rounds completed so far
    pub(crate) round: u8,
    pub(crate) baud: BaudRate,
    pub(crate) flash: MoveFlash,
}

impl GameSession {
    /// Power-on state: title screen, 2 players, 3 rounds, 9600 baud.
    pub fn new() -> Self {
        Self {
            screen: Screen::Title,
            settings: Settings::new(),
            names: core::array::from_fn(|_| PlayerName::new()),
            choices: [Choice::Unset; PLAYER_SLOTS],
            wins: [0; PLAYER_SLOTS],
            round: 0,
            baud: BaudRate::default(),
            flash: MoveFlash::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn state(&self) -> ScreenState {
        self.screen.state()
    }

    /// Number of players in this game
    pub fn players(&self) -> usize {
        self.settings.players() as usize
    }

    /// Target number of rounds
    pub fn rounds(&self) -> u8 {
        self.settings.rounds()
    }

    /// Rounds completed so far
    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn name(&self, player: usize) -> &PlayerName {
        &self.names[player]
    }

    pub fn names(&self) -> &[PlayerName] {
        &self.names[..self.players()]
    }

    /// Latest round's choices, one per player
    pub fn choices(&self) -> &[Choice] {
        &self.choices[..self.players()]
    }

    /// Win counters, one per player
    pub fn wins(&self) -> &[u8] {
        &self.wins[..self.players()]
    }

    pub fn baud(&self) -> BaudRate {
        self.baud
    }

    /// Player currently typing a name or choosing a move
    pub fn current_player(&self) -> Option<usize> {
        match &self.screen {
            Screen::NameSelection(entry) => Some(entry.slot()),
            Screen::Game(engine) => Some(engine.player()),
            _ => None,
        }
    }

    pub fn indicators(&self) -> IndicatorState {
        IndicatorState {
            baud: baud_color(self.baud),
            mv: self.flash.color(),
        }
    }

    /// Every player tied at the highest win count
    pub fn standings(&self) -> Standings {
        standings(self.wins())
    }

    pub(crate) fn reset_wins(&mut self) {
        self.wins = [0; PLAYER_SLOTS];
    }

    pub(crate) fn clear_choices(&mut self) {
        self.choices = [Choice::Unset; PLAYER_SLOTS];
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// End-of-game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    pub top_wins: u8,
    /// Player indices with `top_wins`, in seat order
    pub winners: Vec<usize, PLAYER_SLOTS>,
}

/// Find the maximum win count and everyone who reached it.
pub fn standings(wins: &[u8]) -> Standings {
    let top_wins = wins.iter().copied().max().unwrap_or(0);
    let winners = wins
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w == top_wins)
        .map(|(i, _)| i)
        .take(PLAYER_SLOTS)
        .collect();
    Standings { top_wins, winners }
}
