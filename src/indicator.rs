/// Status LEDs.
///
/// A tri-colour LED shows the selected baud rate and a second tri-colour LED
/// flashes blue briefly whenever a valid move is received. The game only
/// computes what should be lit; the board applies it through [`Leds`].
use crate::comm::BaudRate;
use crate::defaults::MOVE_FLASH_TICKS;

/// On/off state of the three channels of a tri-colour LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(false, false, false);
    pub const RED: Rgb = Rgb::new(true, false, false);
    pub const GREEN: Rgb = Rgb::new(false, true, false);
    pub const BLUE: Rgb = Rgb::new(false, false, true);
    pub const WHITE: Rgb = Rgb::new(true, true, true);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}

/// 9600 red, 19200 green, 38400 blue, 57600 white.
pub const fn baud_color(baud: BaudRate) -> Rgb {
    match baud {
        BaudRate::Baud9600 => Rgb::RED,
        BaudRate::Baud19200 => Rgb::GREEN,
        BaudRate::Baud38400 => Rgb::BLUE,
        BaudRate::Baud57600 => Rgb::WHITE,
    }
}

/// Snapshot of what both LEDs should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub baud: Rgb,
    pub mv: Rgb,
}

/// Countdown for the momentary "valid move" flash.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveFlash {
    remaining: u8,
}

impl MoveFlash {
    pub const fn new() -> Self {
        Self { remaining: 0 }
    }

    pub fn trigger(&mut self) {
        self.remaining = MOVE_FLASH_TICKS;
    }

    /// Advance one tick.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_lit(&self) -> bool {
        self.remaining > 0
    }

    pub fn color(&self) -> Rgb {
        if self.is_lit() {
            Rgb::BLUE
        } else {
            Rgb::OFF
        }
    }
}

/// Board LED outputs.
pub trait Leds {
    fn set_baud(&mut self, color: Rgb);
    fn set_move(&mut self, color: Rgb);

    fn apply(&mut self, state: IndicatorState) {
        self.set_baud(state.baud);
        self.set_move(state.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_baud_rate_has_distinct_color() {
        let colors: heapless::Vec<Rgb, 4> =
            BaudRate::ALL.iter().map(|&b| baud_color(b)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(baud_color(BaudRate::Baud57600), Rgb::WHITE);
    }

    #[test]
    fn move_flash_expires() {
        let mut flash = MoveFlash::new();
        assert!(!flash.is_lit());

        flash.trigger();
        for _ in 0..MOVE_FLASH_TICKS - 1 {
            flash.tick();
            assert_eq!(flash.color(), Rgb::BLUE);
        }
        flash.tick();
        assert_eq!(flash.color(), Rgb::OFF);
        flash.tick();
        assert!(!flash.is_lit());
    }

    #[test]
    fn retrigger_restarts_flash() {
        let mut flash = MoveFlash::new();
        flash.trigger();
        for _ in 0..10 {
            flash.tick();
        }
        flash.trigger();
        for _ in 0..MOVE_FLASH_TICKS - 1 {
            flash.tick();
        }
        assert!(flash.is_lit());
    }
}
