use crate::{definitions::keyboard, framebuffer::FrameBuffer};

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will clear the display
    fn clear_display(&mut self);
    /// Will display all from the pixels
    fn display(&mut self, pixels: &FrameBuffer);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the host keyboard
pub trait KeyboardCommands {
    fn get_keyboard(&self) -> [bool; keyboard::SIZE];
}

/// Will store the current key state and the last key
/// that went from released to pressed.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
    last_press: Option<usize>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    pub fn toggle_key(&mut self, key: usize) {
        self.set_key(key, !self.keys[key % keyboard::SIZE])
    }

    /// Will set the given key, keys outside of `0x0-0xF` are wrapped.
    pub fn set_key(&mut self, key: usize, to: bool) {
        let key = key % keyboard::SIZE;
        if to && !self.keys[key] {
            self.last_press = Some(key);
        }
        self.keys[key] = to;
    }

    /// Will copy the full host state, every key that changed
    /// from released to pressed counts as a press.
    pub fn set_mult(&mut self, keys: &[bool; keyboard::SIZE]) {
        for (key, &to) in keys.iter().enumerate() {
            self.set_key(key, to);
        }
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys[..]
    }

    /// Will return if the key stored in a register is pressed.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[key as usize % keyboard::SIZE]
    }

    /// Will consume the last key that went from released to pressed.
    pub fn take_press(&mut self) -> Option<usize> {
        self.last_press.take()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
