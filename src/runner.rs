use crate::{
    chip8::ChipSet,
    devices::{DisplayCommands, KeyboardCommands},
    opcode::Operation,
    ProcessError,
};

/// Will run a single host cycle, it copies the host keyboard into the machine,
/// executes one instruction and forwards the framebuffer if it changed.
///
/// The caller owns the cadence, so this is meant to be called at
/// [`cpu::HERTZ`](crate::definitions::cpu::HERTZ), once every
/// [`cpu::INTERVAL`](crate::definitions::cpu::INTERVAL) milliseconds, with
/// [`ChipSet::tick`] interleaved at [`timer::HERZ`](crate::definitions::timer::HERZ),
/// once every [`timer::INTERVAL`](crate::definitions::timer::INTERVAL) milliseconds.
pub fn cycle<D, K>(
    chip: &mut ChipSet,
    display: &mut D,
    keyboard: &K,
) -> Result<Operation, ProcessError>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    chip.set_keyboard(&keyboard.get_keyboard());

    let op = chip.step()?;

    if let Operation::Draw = op {
        let pixels = chip.get_display();
        if pixels.is_blank() {
            display.clear_display();
        } else {
            display.display(pixels);
        }
    }
    Ok(op)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        definitions::keyboard,
        devices::{MockDisplayCommands, MockKeyboardCommands},
        resources::Rom,
        MemoryError,
    };

    fn chip_with(program: &[u8]) -> ChipSet {
        ChipSet::new(Rom::new("RUNNER", program)).unwrap()
    }

    #[test]
    fn test_cycle_draw() {
        // LD F, V0 ; DRW V0, V0, 5
        let mut chip = chip_with(&[0xF0, 0x29, 0xD0, 0x05]);
        let mut display = MockDisplayCommands::new();
        let mut keys = MockKeyboardCommands::new();

        keys.expect_get_keyboard()
            .times(2)
            .return_const([false; keyboard::SIZE]);
        display.expect_clear_display().never();
        display
            .expect_display()
            .withf(|pixels| pixels.is_set(0, 0) && !pixels.is_set(1, 1))
            .times(1)
            .return_const(());

        assert_eq!(Ok(Operation::None), cycle(&mut chip, &mut display, &keys));
        assert_eq!(Ok(Operation::Draw), cycle(&mut chip, &mut display, &keys));
    }

    #[test]
    fn test_cycle_clear() {
        let mut chip = chip_with(&[0x00, 0xE0]);
        let mut display = MockDisplayCommands::new();
        let mut keys = MockKeyboardCommands::new();

        keys.expect_get_keyboard()
            .return_const([false; keyboard::SIZE]);
        display.expect_clear_display().times(1).return_const(());
        display.expect_display().never();

        assert_eq!(Ok(Operation::Draw), cycle(&mut chip, &mut display, &keys));
    }

    #[test]
    fn test_cycle_releases_wait() {
        // LD V2, K
        let mut chip = chip_with(&[0xF2, 0x0A]);
        let mut display = MockDisplayCommands::new();
        let mut idle = MockKeyboardCommands::new();
        let mut pressed = MockKeyboardCommands::new();

        idle.expect_get_keyboard()
            .return_const([false; keyboard::SIZE]);
        let mut keys = [false; keyboard::SIZE];
        keys[0xB] = true;
        pressed.expect_get_keyboard().return_const(keys);
        display.expect_display().never();

        assert_eq!(Ok(Operation::Wait), cycle(&mut chip, &mut display, &idle));
        assert_eq!(Ok(Operation::Wait), cycle(&mut chip, &mut display, &idle));
        assert_eq!(Ok(Operation::None), cycle(&mut chip, &mut display, &pressed));
        assert_eq!(0xB, chip.get_registers()[0x2]);
    }

    #[test]
    fn test_cycle_fault() {
        // LD I, 0xFFF ; DRW V0, V0, 2
        let mut chip = chip_with(&[0xAF, 0xFF, 0xD0, 0x02]);
        let mut display = MockDisplayCommands::new();
        let mut keys = MockKeyboardCommands::new();

        keys.expect_get_keyboard()
            .return_const([false; keyboard::SIZE]);
        display.expect_display().never();

        assert_eq!(Ok(Operation::None), cycle(&mut chip, &mut display, &keys));
        assert_eq!(
            Err(ProcessError::Memory(MemoryError::OutOfRange {
                address: 0xFFF,
                len: 2,
                capacity: 0x1000,
            })),
            cycle(&mut chip, &mut display, &keys)
        );
    }
}
