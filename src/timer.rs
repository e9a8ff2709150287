//! The delay and sound timers.

pub trait Timed {
    /// Will create a new timer with the given value.
    fn new(value: u8) -> Self;

    /// Will set the value from which the timer shall count down from.
    fn set_value(&mut self, value: u8);

    /// Will get the value that the counter is currently at.
    fn get_value(&self) -> u8;

    /// Will count the timer down by one, until it reaches zero.
    fn tick(&mut self);
}

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given.
///
/// The timer does not own a clock, the host calls
/// [`ChipSet::tick`](crate::chip8::ChipSet::tick) at
/// [`timer::HERZ`](crate::definitions::timer::HERZ).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timed for Timer {
    fn new(value: u8) -> Self {
        Self { value }
    }

    fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    fn get_value(&self) -> u8 {
        self.value
    }

    fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}
