/// Screen layouts for the 128x128 LCD.
///
/// Every function here only reads game state and writes positioned text to
/// a [`Surface`]. Drawing the same screen twice with the same state yields
/// the same pixels, so callers may redraw freely.
use core::fmt::Write;

use heapless::String;

use crate::defaults::{NAME_X, ROW_H, SCORE_TOP, SETTINGS_MARKER_X, SETTINGS_VALUE_X};
use crate::game::{GameSession, PLAYER_SLOTS};
use crate::input::Button;
use crate::settings::{Field, Settings};

/// Longest line that fits across the panel, with room to spare
type Line = String<32>;

/// Text drawing capability of the display.
///
/// Text is drawn opaque: writing a blank over a glyph erases it.
pub trait Surface {
    /// Fill the whole screen with the background colour.
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at (`x`, `y`) pixels.
    fn text(&mut self, x: i32, y: i32, text: &str);
}

fn line(args: core::fmt::Arguments<'_>) -> Line {
    let mut buf = Line::new();
    let _ = buf.write_fmt(args);
    buf
}

/// Row of a 1-based list entry on the name selection screen
const fn slot_row(slot: usize) -> i32 {
    (slot as i32 + 1) * ROW_H
}

pub fn title<S: Surface>(surface: &mut S) {
    surface.text(0, 16, "Rock Paper Scissors");
    surface.text(0, 24, "Multiplayer Game");
    surface.text(0, 80, &line(format_args!("{}: Play Game", Button::Confirm.label())));
    surface.text(0, 88, &line(format_args!("{}: Instructions", Button::Secondary.label())));
}

pub fn instructions<S: Surface>(surface: &mut S) {
    const TEXT: [&str; 10] = [
        "Select the number of",
        "rounds, players, and",
        "player's names. Every",
        "round all players",
        "enter their choice.",
        "whoever wins the",
        "round gets a point.",
        "After all rounds are",
        "played, the scores",
        "and winners are shown.",
    ];

    surface.text(0, 0, "    Instructions");
    for (i, text) in TEXT.iter().enumerate() {
        surface.text(0, 16 + i as i32 * ROW_H, text);
    }
    surface.text(0, 104, &line(format_args!("{}: Go Back", Button::Secondary.label())));
}

pub fn settings<S: Surface>(surface: &mut S, settings: &Settings) {
    surface.text(0, 0, "   Choose Settings");
    surface.text(0, 16, &line(format_args!("Press {} to change #", Button::Joystick.label())));
    surface.text(0, 24, &line(format_args!("Press {} to switch", Button::Secondary.label())));
    surface.text(0, 32, "between players");
    surface.text(0, 40, "and # of Rounds");

    let rounds = line(format_args!("{}", settings.rounds()));
    let players = line(format_args!("{}", settings.players()));
    surface.text(5, Field::Rounds.row(), "# of Rounds:");
    surface.text(SETTINGS_VALUE_X, Field::Rounds.row(), &rounds);
    surface.text(5, Field::Players.row(), "# of Players:");
    surface.text(SETTINGS_VALUE_X, Field::Players.row(), &players);

    surface.text(5, 88, &line(format_args!("{}: Confirm", Button::Confirm.label())));
    surface.text(5, 96, &line(format_args!("{}: Reset Settings", Button::Reset.label())));

    let selected = settings.selected();
    surface.text(SETTINGS_MARKER_X, selected.other().row(), " ");
    surface.text(SETTINGS_MARKER_X, selected.row(), "*");
}

pub fn name_selection<S: Surface>(surface: &mut S, session: &GameSession) {
    const HELP: [&str; 6] = [
        "Type 3 letters into",
        "the UART terminal,",
        "then press BB1 to",
        "move to the next",
        "player or start the",
        "game.",
    ];

    surface.text(0, 0, "Name Select Screen");

    let active = session.current_player();
    for (slot, name) in session.names().iter().enumerate() {
        let marker = if active == Some(slot) { "*" } else { " " };
        surface.text(0, slot_row(slot), marker);
        surface.text(10, slot_row(slot), &line(format_args!("{})", slot + 1)));
        surface.text(NAME_X, slot_row(slot), name.as_str());
    }

    // Help starts under the last possible slot, whatever the player count
    let help_top = slot_row(PLAYER_SLOTS);
    for (i, text) in HELP.iter().enumerate() {
        surface.text(0, help_top + i as i32 * ROW_H, text);
    }
}

/// Redraw one player's name as it is typed.
pub fn name_progress<S: Surface>(surface: &mut S, session: &GameSession, slot: usize) {
    surface.text(NAME_X, slot_row(slot), session.name(slot).as_str());
}

pub fn game<S: Surface>(surface: &mut S) {
    surface.text(0, 0, "Game Screen");
}

/// Round counter and one row per player: name, latest move, wins.
pub fn scores<S: Surface>(surface: &mut S, session: &GameSession) {
    surface.text(0, 0, "Game Screen");
    surface.text(0, 8, &line(format_args!("Round {}/{}", session.round(), session.rounds())));

    let rows = session
        .names()
        .iter()
        .zip(session.choices())
        .zip(session.wins());
    for (slot, ((name, choice), wins)) in rows.enumerate() {
        let y = SCORE_TOP + slot as i32 * ROW_H;
        surface.text(
            0,
            y,
            &line(format_args!(
                "{}) {:<3} {}  wins:{}",
                slot + 1,
                name.as_str(),
                choice.letter(),
                wins
            )),
        );
    }
}

/// Shown under the final scores until the player confirms.
pub fn end_prompt<S: Surface>(surface: &mut S) {
    surface.text(20, 64, &line(format_args!("Press {} to end", Button::Confirm.label())));
}

/// Final scores with every player tied for the lead listed as a winner.
pub fn final_standings<S: Surface>(surface: &mut S, session: &GameSession) {
    surface.text(0, 0, "End Screen");

    for (slot, (name, wins)) in session.names().iter().zip(session.wins()).enumerate() {
        let y = 16 + slot as i32 * 3 * ROW_H;
        surface.text(0, y, name.as_str());
        surface.text(0, y + ROW_H, &line(format_args!("wins: {}", wins)));
    }

    surface.text(60, 32, "Winners:");
    for (j, &winner) in session.standings().winners.iter().enumerate() {
        surface.text(60, 40 + j as i32 * ROW_H, session.name(winner).as_str());
    }
}
