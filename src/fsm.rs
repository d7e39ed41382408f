/// Screen-state controller.
///
/// Six screens, one handler each, dispatched once per main-loop tick:
///
/// ```text
/// Title ──BB1──▶ Settings ──BB1──▶ NameSelection ──BB1 (last)──▶ Game ──final round──▶ GameOver
///   ▲  │
///   └LB2┴──▶ Instructions
/// ```
///
/// Per-screen progress (the active name slot, the round collector) lives in
/// the screen variant itself, so nothing persists outside [`GameSession`].
use crate::comm::{BaudRate, SerialLink};
use crate::defaults::{END_GAME_MSG, NEXT_ROUND_MSG};
use crate::game::GameSession;
use crate::input::{Button, Taps};
use crate::names::{NameEntry, NameInput};
use crate::round::{self, RoundEngine, RoundStep};
use crate::screens::{self, Surface};

/// Active screen, carrying that screen's input sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Instructions,
    Settings,
    NameSelection(NameEntry),
    Game(RoundEngine),
    /// `ended` is set by the first confirm; afterwards the screen ignores input
    GameOver { ended: bool },
}

/// Plain tag of a [`Screen`], for logging and comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Title,
    Instructions,
    Settings,
    NameSelection,
    Game,
    GameOver,
}

impl Screen {
    pub const fn state(&self) -> ScreenState {
        match self {
            Screen::Title => ScreenState::Title,
            Screen::Instructions => ScreenState::Instructions,
            Screen::Settings => ScreenState::Settings,
            Screen::NameSelection(_) => ScreenState::NameSelection,
            Screen::Game(_) => ScreenState::Game,
            Screen::GameOver { .. } => ScreenState::GameOver,
        }
    }
}

impl ScreenState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScreenState::Title => "title",
            ScreenState::Instructions => "instructions",
            ScreenState::Settings => "settings",
            ScreenState::NameSelection => "name_selection",
            ScreenState::Game => "game",
            ScreenState::GameOver => "game_over",
        }
    }
}

/// Side effects the board must apply after a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Reconfigure the UART to this rate before the next pump
    pub baud_changed: Option<BaudRate>,
}

/// Run one main-loop step: dispatch the current screen, apply the baud
/// button, then feed at most one received byte to name entry.
pub fn tick<S: Surface>(
    session: &mut GameSession,
    taps: Taps,
    link: &mut SerialLink,
    surface: &mut S,
) -> TickOutcome {
    let before = session.state();
    session.flash.tick();

    match session.screen {
        Screen::Title => title(session, taps, surface),
        Screen::Instructions => instructions(session, taps, surface),
        Screen::Settings => settings(session, taps, link, surface),
        Screen::NameSelection(entry) => name_selection(session, entry, taps, link, surface),
        Screen::Game(engine) => game(session, engine, taps, link, surface),
        Screen::GameOver { ended } => game_over(session, ended, taps, surface),
    }

    let after = session.state();
    if after != before {
        log::info!("Screen: {} -> {}", before.as_str(), after.as_str());
    }

    let mut outcome = TickOutcome::default();
    if taps.tapped(Button::Baud) {
        session.baud = session.baud.next();
        log::info!("Baud rate set to {}", session.baud.bps());
        outcome.baud_changed = Some(session.baud);
    }

    name_input(session, link, surface);
    outcome
}

fn title<S: Surface>(session: &mut GameSession, taps: Taps, surface: &mut S) {
    if taps.tapped(Button::Confirm) {
        session.screen = Screen::Settings;
        surface.clear();
        screens::settings(surface, &session.settings);
    } else if taps.tapped(Button::Secondary) {
        session.screen = Screen::Instructions;
        surface.clear();
        screens::instructions(surface);
    } else {
        screens::title(surface);
    }
}

fn instructions<S: Surface>(session: &mut GameSession, taps: Taps, surface: &mut S) {
    if taps.tapped(Button::Secondary) {
        session.screen = Screen::Title;
        surface.clear();
        screens::title(surface);
    }
}

fn settings<S: Surface>(
    session: &mut GameSession,
    taps: Taps,
    link: &mut SerialLink,
    surface: &mut S,
) {
    if taps.tapped(Button::Confirm) {
        session.screen = Screen::NameSelection(NameEntry::new());
        for name in session.names.iter_mut() {
            name.clear();
        }
        link.discard_pending();
        surface.clear();
        screens::name_selection(surface, session);
        return;
    }

    if taps.tapped(Button::Secondary) {
        session.settings.toggle();
    } else if taps.tapped(Button::Joystick) {
        session.settings.increment();
    } else if taps.tapped(Button::Reset) {
        session.settings.reset();
    } else {
        return;
    }
    screens::settings(surface, &session.settings);
}

fn name_selection<S: Surface>(
    session: &mut GameSession,
    mut entry: NameEntry,
    taps: Taps,
    link: &mut SerialLink,
    surface: &mut S,
) {
    if !taps.tapped(Button::Confirm) {
        return;
    }

    let slot = entry.slot();
    session.names[slot].finalize(slot);
    link.discard_pending();
    link.new_line();

    if slot + 1 >= session.players() {
        log::info!("Names entered, starting {} rounds", session.rounds());
        session.reset_wins();
        session.clear_choices();
        session.round = 0;
        session.screen = Screen::Game(RoundEngine::new());
        surface.clear();
        screens::game(surface);
    } else {
        entry.advance();
        session.names[entry.slot()].clear();
        session.screen = Screen::NameSelection(entry);
        screens::name_selection(surface, session);
    }
}

/// Feed one received byte to the active name slot, echoing what was kept.
fn name_input<S: Surface>(session: &mut GameSession, link: &mut SerialLink, surface: &mut S) {
    let Screen::NameSelection(mut entry) = session.screen else {
        return;
    };
    if !entry.input_enabled() || !link.has_byte() {
        return;
    }
    let Some(byte) = link.take_byte() else {
        return;
    };

    let slot = entry.slot();
    if let NameInput::Accepted(c) = entry.accept(&mut session.names[slot], byte) {
        let mut echo = [0u8; 4];
        link.send(c.encode_utf8(&mut echo));
        screens::name_progress(surface, session, slot);
    }
    session.screen = Screen::NameSelection(entry);
}

fn game<S: Surface>(
    session: &mut GameSession,
    mut engine: RoundEngine,
    taps: Taps,
    link: &mut SerialLink,
    surface: &mut S,
) {
    if taps.tapped(Button::Confirm) {
        screens::scores(surface, session);
        if engine.is_complete() {
            link.discard_pending();
            session.clear_choices();
            engine.restart();
        }
        session.screen = Screen::Game(engine);
        return;
    }

    let players = session.players();
    let step = engine.step(
        &session.names[..players],
        &mut session.choices[..players],
        link,
    );
    session.screen = Screen::Game(engine);

    match step {
        RoundStep::Recorded { .. } => session.flash.trigger(),
        RoundStep::Complete { .. } => {
            session.flash.trigger();
            finish_round(session, link, surface);
        }
        RoundStep::Idle | RoundStep::Waiting | RoundStep::Invalid => {}
    }
}

fn finish_round<S: Surface>(session: &mut GameSession, link: &mut SerialLink, surface: &mut S) {
    let players = session.players();
    let outcome = round::award(&session.choices[..players], &mut session.wins[..players]);
    session.round += 1;
    log::info!(
        "Round {}/{} resolved: {:?}, wins {:?}",
        session.round,
        session.rounds(),
        outcome,
        session.wins()
    );

    screens::scores(surface, session);

    if session.round >= session.rounds() {
        session.screen = Screen::GameOver { ended: false };
        screens::end_prompt(surface);
        link.new_line();
        link.send(END_GAME_MSG);
    } else {
        link.new_line();
        link.send(NEXT_ROUND_MSG);
    }
}

fn game_over<S: Surface>(session: &mut GameSession, ended: bool, taps: Taps, surface: &mut S) {
    if ended || !taps.tapped(Button::Confirm) {
        return;
    }
    session.screen = Screen::GameOver { ended: true };
    surface.clear();
    screens::final_standings(surface, session);
    let standings = session.standings();
    log::info!(
        "Game over: {} winner(s) with {} wins",
        standings.winners.len(),
        standings.top_wins
    );
}
