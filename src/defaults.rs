/// Compiled-in game constants.
///
/// Settings reset to these values on every boot; nothing is persisted.
/// Screen coordinates are in pixels on the 128x128 LCD with 8-pixel text rows.

// ── Game bounds ─────────────────────────────────────────────────────────

/// Minimum number of players
pub const MIN_PLAYERS: u8 = 2;
/// Maximum number of players (also the capacity of every per-player array)
pub const MAX_PLAYERS: u8 = 5;
/// Players selected at boot and after a settings reset
pub const DEF_PLAYERS: u8 = 2;

/// Minimum number of rounds
pub const MIN_ROUNDS: u8 = 1;
/// Maximum number of rounds
pub const MAX_ROUNDS: u8 = 7;
/// Rounds selected at boot and after a settings reset
pub const DEF_ROUNDS: u8 = 3;

/// Visible characters in a player name
pub const NAME_LEN: usize = 3;

// ── Timing ──────────────────────────────────────────────────────────────

/// Main loop period in milliseconds
pub const TICK_MS: u64 = 10;

/// A raw button level must hold this long before it is accepted
pub const DEBOUNCE_MS: u64 = 20;

/// How many ticks the "valid move" indicator stays lit (250 ms)
pub const MOVE_FLASH_TICKS: u8 = 25;

// ── Screen geometry ─────────────────────────────────────────────────────

/// LCD edge length in pixels (square panel)
pub const SCREEN_SIZE: u32 = 128;

/// Height of one text row
pub const ROW_H: i32 = 8;

/// Row of the "# of Rounds" field on the settings screen
pub const ROUNDS_POS: i32 = 56;
/// Row of the "# of Players" field on the settings screen
pub const PLAYERS_POS: i32 = 72;
/// Column of the settings values
pub const SETTINGS_VALUE_X: i32 = 90;
/// Column of the settings selection marker
pub const SETTINGS_MARKER_X: i32 = 105;

/// Column where typed names appear on the name selection screen
pub const NAME_X: i32 = 25;

/// First row of the per-player score table
pub const SCORE_TOP: i32 = 24;

// ── Serial text ─────────────────────────────────────────────────────────

/// Line terminator used on the serial terminal
pub const NEWLINE: &str = "\r\n";

/// Follows the active player's name when asking for a move
pub const MOVE_PROMPT: &str =
    ", please enter\r\nR or r for Rock\r\nP or p for Paper\r\nS or s for Scissors\r\n";

/// Sent when a round byte is not one of R/r/P/p/S/s
pub const INVALID_MOVE_MSG: &str = "Enter an R/r/P/p/S/s to choose\r\n";

/// Sent after a round resolves and more rounds remain
pub const NEXT_ROUND_MSG: &str = "Press BB1 to play the round";

/// Sent once the final round resolves
pub const END_GAME_MSG: &str = "\r\nPress BB1 to end the game";
