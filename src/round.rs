/// Round collection and scoring.
///
/// A round asks each player in turn for one move over serial, then scores
/// the whole round at once. Only the latest round's choices are kept.
///
/// Scoring looks at which move types appear, not at individual pairings:
/// - all three types present: standoff, nobody scores
/// - everyone picked the same move: everyone scores
/// - exactly two types present: every player holding the winning type scores
use crate::comm::SerialLink;
use crate::defaults::{INVALID_MOVE_MSG, MOVE_PROMPT};
use crate::names::PlayerName;

/// A player's move for the current round. `Unset` until they choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Unset,
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Case-insensitive R/P/S. Any other byte is not a move.
    pub fn parse(byte: u8) -> Option<Choice> {
        match byte.to_ascii_lowercase() {
            b'r' => Some(Choice::Rock),
            b'p' => Some(Choice::Paper),
            b's' => Some(Choice::Scissors),
            _ => None,
        }
    }

    /// The move this one defeats
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
            Choice::Unset => Choice::Unset,
        }
    }

    /// Single-letter form for the score table
    pub const fn letter(self) -> char {
        match self {
            Choice::Rock => 'R',
            Choice::Paper => 'P',
            Choice::Scissors => 'S',
            Choice::Unset => '-',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Unset => "unset",
        }
    }
}

/// How a completed round was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Rock, paper and scissors all appeared
    Standoff,
    /// Every player made the same move
    Unanimous(Choice),
    /// Two move types appeared; holders of this one win
    Winner(Choice),
}

/// Decide a round from that round's choices alone.
pub fn resolve(choices: &[Choice]) -> Outcome {
    let count = |c: Choice| choices.iter().filter(|&&x| x == c).count();
    let (r, p, s) = (
        count(Choice::Rock),
        count(Choice::Paper),
        count(Choice::Scissors),
    );

    if r > 0 && p > 0 && s > 0 {
        return Outcome::Standoff;
    }

    for (n, choice) in [(r, Choice::Rock), (p, Choice::Paper), (s, Choice::Scissors)] {
        if n == choices.len() && n > 0 {
            return Outcome::Unanimous(choice);
        }
    }

    // Exactly two types remain: the one that beats the other takes the round
    let present = |c: Choice| choices.contains(&c);
    [Choice::Rock, Choice::Paper, Choice::Scissors]
        .into_iter()
        .find(|&c| present(c) && present(c.beats()))
        .map_or(Outcome::Standoff, Outcome::Winner)
}

/// Score a round: add one win to every player the outcome rewards.
///
/// `wins` must be at least as long as `choices`.
pub fn award(choices: &[Choice], wins: &mut [u8]) -> Outcome {
    let outcome = resolve(choices);
    for (choice, w) in choices.iter().zip(wins.iter_mut()) {
        let scores = match outcome {
            Outcome::Standoff => false,
            Outcome::Unanimous(_) => true,
            Outcome::Winner(winning) => *choice == winning,
        };
        if scores {
            *w = w.saturating_add(1);
        }
    }
    outcome
}

/// Result of one call to [`RoundEngine::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStep {
    /// Round already complete; waiting for the controller to start the next
    Idle,
    /// No byte this tick
    Waiting,
    /// The byte was not a move; correction prompt sent
    Invalid,
    /// Choice stored, next player's turn
    Recorded { player: usize, choice: Choice },
    /// Last player's choice stored; the round is ready to score
    Complete { player: usize, choice: Choice },
}

/// Per-round input collection sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEngine {
    player: usize,
    prompt_pending: bool,
    complete: bool,
}

impl RoundEngine {
    /// A fresh round starting with the first player.
    pub const fn new() -> Self {
        Self {
            player: 0,
            prompt_pending: true,
            complete: false,
        }
    }

    /// Index of the player whose move is awaited
    pub const fn player(&self) -> usize {
        self.player
    }

    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Begin the next round from the first player.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Run one tick of collection. `choices` holds exactly one slot per
    /// player in the game; `names` at least as many.
    pub fn step(
        &mut self,
        names: &[PlayerName],
        choices: &mut [Choice],
        link: &mut SerialLink,
    ) -> RoundStep {
        if self.complete {
            return RoundStep::Idle;
        }

        if self.prompt_pending {
            link.new_line();
            link.send(names[self.player].as_str());
            link.send(MOVE_PROMPT);
            self.prompt_pending = false;
        }

        let Some(byte) = link.take_byte() else {
            return RoundStep::Waiting;
        };

        let Some(choice) = Choice::parse(byte) else {
            link.send(INVALID_MOVE_MSG);
            self.prompt_pending = true;
            return RoundStep::Invalid;
        };

        let player = self.player;
        choices[player] = choice;
        log::debug!("Player {} chose {}", player + 1, choice.name());

        self.player += 1;
        if self.player == choices.len() {
            self.player = 0;
            self.complete = true;
            RoundStep::Complete { player, choice }
        } else {
            self.prompt_pending = true;
            RoundStep::Recorded { player, choice }
        }
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}
