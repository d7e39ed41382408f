//! Rochambeau library: portable game engine for a multiplayer
//! Rock-Paper-Scissors console.
//!
//! Two to five players share one board: five push buttons, a 128x128 LCD,
//! two tri-colour LEDs and a serial terminal. Names and moves are typed on
//! the terminal; the buttons walk through the screens. This crate holds the
//! whole game with no platform dependencies, testable on any host with
//! `cargo test`. The ESP32-S3 firmware binary is a thin consumer that owns
//! the peripherals and calls [`fsm::tick`] on a fixed period.
//!
//! The library is organized in two code layers:
//! - **Game**: `settings`, `names`, `round`, `game`, `fsm`, `defaults`.
//!   Pure state and rules, `no_std`, no allocator.
//! - **Board seams**: `comm` (serial queues), `input` (button taps),
//!   `indicator` (LEDs), `screens` and `display` (LCD), `board` (pins).
//!   Traits the firmware implements over esp-hal, and host doubles in tests.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod comm;
pub mod defaults;
pub mod display;
pub mod fsm;
pub mod game;
pub mod indicator;
pub mod input;
pub mod names;
pub mod round;
pub mod screens;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;
