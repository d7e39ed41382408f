/// Debounced button taps.
///
/// The board samples every button once per tick and feeds the raw levels to
/// a [`TapDetector`]. A level has to hold for `DEBOUNCE_MS` before it is
/// believed, and a tap fires exactly once on the released → pressed edge, so
/// holding a button down never repeats.
use crate::defaults::DEBOUNCE_MS;

/// The five game buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Primary action (BB1): play, confirm, advance
    Confirm,
    /// Secondary action (LB2): instructions, toggle settings field
    Secondary,
    /// Joystick press (JSB): increment the selected setting
    Joystick,
    /// Quaternary action (LB1): reset settings
    Reset,
    /// Cycles the serial baud rate (BB2)
    Baud,
}

impl Button {
    pub const COUNT: usize = 5;

    pub const ALL: [Button; Self::COUNT] = [
        Button::Confirm,
        Button::Secondary,
        Button::Joystick,
        Button::Reset,
        Button::Baud,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Silkscreen label used in on-screen help
    pub const fn label(self) -> &'static str {
        match self {
            Button::Confirm => "BB1",
            Button::Secondary => "LB2",
            Button::Joystick => "JSB",
            Button::Reset => "LB1",
            Button::Baud => "BB2",
        }
    }
}

/// The set of buttons tapped during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Taps {
    bits: u8,
}

impl Taps {
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    pub const fn with(self, button: Button) -> Self {
        Self {
            bits: self.bits | (1 << button.index()),
        }
    }

    pub fn tapped(&self, button: Button) -> bool {
        self.bits & (1 << button.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl From<Button> for Taps {
    fn from(button: Button) -> Self {
        Taps::none().with(button)
    }
}

#[derive(Clone, Copy)]
struct Debounce {
    stable: bool,
    candidate: bool,
    candidate_since: u64,
}

/// Turns raw pressed/released samples into edge-triggered taps.
pub struct TapDetector {
    buttons: [Debounce; Button::COUNT],
}

impl TapDetector {
    pub const fn new() -> Self {
        Self {
            buttons: [Debounce {
                stable: false,
                candidate: false,
                candidate_since: 0,
            }; Button::COUNT],
        }
    }

    /// Feed one sample of every button (`true` = pressed, in [`Button::ALL`]
    /// order) taken at `now_ms`, and get back the taps it completes.
    pub fn update(&mut self, pressed: [bool; Button::COUNT], now_ms: u64) -> Taps {
        let mut taps = Taps::none();

        for (button, (state, raw)) in Button::ALL
            .iter()
            .zip(self.buttons.iter_mut().zip(pressed))
        {
            if raw != state.candidate {
                state.candidate = raw;
                state.candidate_since = now_ms;
            }

            let settled = now_ms.saturating_sub(state.candidate_since) >= DEBOUNCE_MS;
            if settled && state.candidate != state.stable {
                state.stable = state.candidate;
                if state.stable {
                    taps = taps.with(*button);
                }
            }
        }

        taps
    }

    /// Debounced level of one button
    pub fn is_held(&self, button: Button) -> bool {
        self.buttons[button.index()].stable
    }
}

impl Default for TapDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(button: Button) -> [bool; Button::COUNT] {
        let mut levels = [false; Button::COUNT];
        levels[button.index()] = true;
        levels
    }

    const RELEASED: [bool; Button::COUNT] = [false; Button::COUNT];

    #[test]
    fn taps_set_membership() {
        let taps = Taps::none().with(Button::Confirm).with(Button::Baud);
        assert!(taps.tapped(Button::Confirm));
        assert!(taps.tapped(Button::Baud));
        assert!(!taps.tapped(Button::Joystick));
        assert!(Taps::none().is_empty());
        assert_eq!(Taps::from(Button::Reset), Taps::none().with(Button::Reset));
    }

    #[test]
    fn tap_fires_after_debounce() {
        let mut det = TapDetector::new();
        assert!(det.update(only(Button::Confirm), 0).is_empty());
        assert!(det.update(only(Button::Confirm), DEBOUNCE_MS - 1).is_empty());

        let taps = det.update(only(Button::Confirm), DEBOUNCE_MS);
        assert!(taps.tapped(Button::Confirm));
        assert!(det.is_held(Button::Confirm));
    }

    #[test]
    fn held_button_fires_once() {
        let mut det = TapDetector::new();
        det.update(only(Button::Joystick), 0);
        assert!(det.update(only(Button::Joystick), 100).tapped(Button::Joystick));
        for t in (110..2000).step_by(10) {
            assert!(det.update(only(Button::Joystick), t).is_empty());
        }
    }

    #[test]
    fn bounce_is_filtered() {
        let mut det = TapDetector::new();
        // Contact chatter shorter than the debounce window
        for (t, level) in [(0, true), (5, false), (8, true), (12, false)] {
            let mut levels = RELEASED;
            levels[0] = level;
            assert!(det.update(levels, t).is_empty());
        }
        assert!(det.update(RELEASED, 100).is_empty());
        assert!(!det.is_held(Button::Confirm));
    }

    #[test]
    fn press_release_press_fires_twice() {
        let mut det = TapDetector::new();
        det.update(only(Button::Secondary), 0);
        assert!(det.update(only(Button::Secondary), 30).tapped(Button::Secondary));
        det.update(RELEASED, 40);
        assert!(det.update(RELEASED, 70).is_empty());
        det.update(only(Button::Secondary), 80);
        assert!(det.update(only(Button::Secondary), 110).tapped(Button::Secondary));
    }

    #[test]
    fn simultaneous_taps_are_reported_together() {
        let mut det = TapDetector::new();
        let mut levels = RELEASED;
        levels[Button::Confirm.index()] = true;
        levels[Button::Baud.index()] = true;
        det.update(levels, 0);
        let taps = det.update(levels, DEBOUNCE_MS);
        assert!(taps.tapped(Button::Confirm));
        assert!(taps.tapped(Button::Baud));
    }
}
