use crate::{
    definitions::{cpu, display},
    opcode::{
        Add, Arithmetic, ArithmeticOpcode, Call, ChipOpcodes, Draw, Jump, JumpOffset, KeyOpcode,
        KeySkip, Load, LoadIndex, Misc, MiscOpcode, Operation, ProgramCounterStep, Random,
        SkipEqual, SkipNotEqual, SkipRegisterEqual, SkipRegisterNotEqual, System,
    },
    timer::Timed,
    ProcessError,
};

use super::ChipSet;

/// The width of every sprite row in pixels
const SPRITE_WIDTH: usize = 8;

impl ChipOpcodes for ChipSet {
    fn system(&mut self, opcode: &System) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match opcode {
            System::Clear => {
                // 00E0
                // clear display
                self.display.clear();
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            System::Return => {
                // 00EE
                // Return from sub routine => pop from stack
                let pc = self.pop_stack()?;
                log::debug!("return to {:#06X}", pc);
                Ok((ProgramCounterStep::Jump(pc), Operation::None))
            }
        }
    }

    fn jump(&self, opcode: &Jump) -> Result<ProgramCounterStep, ProcessError> {
        // 1NNN
        Ok(ProgramCounterStep::Jump(opcode.nnn))
    }

    fn call(&mut self, opcode: &Call) -> Result<ProgramCounterStep, ProcessError> {
        // 2NNN
        // the program counter already points to the instruction after the call
        self.push_stack(self.program_counter)?;
        Ok(ProgramCounterStep::Jump(opcode.nnn))
    }

    fn skip_equal(&self, opcode: &SkipEqual) -> Result<ProgramCounterStep, ProcessError> {
        // 3XKK
        Ok(ProgramCounterStep::cond(self.registers[opcode.x] == opcode.kk))
    }

    fn skip_not_equal(&self, opcode: &SkipNotEqual) -> Result<ProgramCounterStep, ProcessError> {
        // 4XKK
        Ok(ProgramCounterStep::cond(self.registers[opcode.x] != opcode.kk))
    }

    fn skip_register_equal(
        &self,
        opcode: &SkipRegisterEqual,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 5XY0
        Ok(ProgramCounterStep::cond(
            self.registers[opcode.x] == self.registers[opcode.y],
        ))
    }

    fn load(&mut self, opcode: &Load) -> Result<ProgramCounterStep, ProcessError> {
        // 6XKK
        self.registers[opcode.x] = opcode.kk;
        Ok(ProgramCounterStep::Next)
    }

    fn add(&mut self, opcode: &Add) -> Result<ProgramCounterStep, ProcessError> {
        // 7XKK
        // let VX overflow, but ignore carry
        self.registers[opcode.x] = self.registers[opcode.x].wrapping_add(opcode.kk);
        Ok(ProgramCounterStep::Next)
    }

    fn arithmetic(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError> {
        let Arithmetic { ops, x, y } = *opcode;
        // both operands are read before anything is written, as x, y and VF may alias
        let (vx, vy) = (self.registers[x], self.registers[y]);

        let (res, flag) = match ops {
            // 8XY0
            ArithmeticOpcode::Assign => (vy, None),
            // 8XY1
            ArithmeticOpcode::Or => (vx | vy, None),
            // 8XY2
            ArithmeticOpcode::And => (vx & vy, None),
            // 8XY3
            ArithmeticOpcode::Xor => (vx ^ vy, None),
            // 8XY4
            ArithmeticOpcode::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                (res, Some(carry as u8))
            }
            // 8XY5
            ArithmeticOpcode::Sub => (vx.wrapping_sub(vy), Some((vx >= vy) as u8)),
            // 8XY6
            ArithmeticOpcode::ShiftRight => (vx >> 1, Some(vx & 0x01)),
            // 8XY7
            ArithmeticOpcode::SubNegated => (vy.wrapping_sub(vx), Some((vy >= vx) as u8)),
            // 8XYE
            ArithmeticOpcode::ShiftLeft => (vx << 1, Some(vx >> 7)),
        };

        self.registers[x] = res;
        // the flag is written last, so it wins if x is VF
        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }
        Ok(ProgramCounterStep::Next)
    }

    fn skip_register_not_equal(
        &self,
        opcode: &SkipRegisterNotEqual,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 9XY0
        Ok(ProgramCounterStep::cond(
            self.registers[opcode.x] != self.registers[opcode.y],
        ))
    }

    fn load_index(&mut self, opcode: &LoadIndex) -> Result<ProgramCounterStep, ProcessError> {
        // ANNN
        self.index_register = opcode.nnn;
        Ok(ProgramCounterStep::Next)
    }

    fn jump_offset(&self, opcode: &JumpOffset) -> Result<ProgramCounterStep, ProcessError> {
        // BNNN
        let v0 = self.registers[0] as u16;
        Ok(ProgramCounterStep::Jump(opcode.nnn + v0))
    }

    fn random(&mut self, opcode: &Random) -> Result<ProgramCounterStep, ProcessError> {
        // CXKK
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand: [u8; 1] = [0];
        self.rng.fill_bytes(&mut rand);
        self.registers[opcode.x] = opcode.kk & rand[0];
        Ok(ProgramCounterStep::Next)
    }

    fn draw(&mut self, opcode: &Draw) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // DXYN
        // see https://tobiasvl.github.io/blog/write-a-chip-8-emulator/
        let Draw { x, y, n } = *opcode;

        let coorx = self.registers[x] as usize;
        let coory = self.registers[y] as usize;

        // fails before a single pixel was touched
        let sprite = self.memory.read_block(self.index_register as usize, n)?;

        let mut collision = false;
        for (i, row) in sprite.iter().enumerate() {
            for j in 0..SPRITE_WIDTH {
                let mask = 0x80 >> j;
                if (*row & mask) == 0 {
                    continue;
                }
                // the framebuffer wraps the coordinates
                collision |= self.display.toggle_pixel(coorx + j, coory + i);
            }
        }

        self.registers[cpu::register::LAST] = collision as u8;
        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn key_skip(&self, opcode: &KeySkip) -> Result<ProgramCounterStep, ProcessError> {
        let pressed = self.keyboard.is_pressed(self.registers[opcode.x]);
        let step = match opcode.ops {
            // EX9E
            KeyOpcode::Pressed => ProgramCounterStep::cond(pressed),
            // EXA1
            KeyOpcode::NotPressed => ProgramCounterStep::cond(!pressed),
        };
        Ok(step)
    }

    fn misc(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let x = opcode.x;
        let mut op = Operation::None;
        let mut pcs = ProgramCounterStep::Next;
        let index = self.index_register as usize;
        match opcode.ops {
            MiscOpcode::GetDelayTimer => {
                // FX07
                self.registers[x] = self.get_delay_timer();
            }
            MiscOpcode::AwaitKeyPress => {
                // FX0A
                // keep the counter on this instruction until a key was pressed,
                // the wait itself is resolved in `step`
                self.await_key(x);
                op = Operation::Wait;
                pcs = ProgramCounterStep::Hold;
            }
            MiscOpcode::SetDelayTimer => {
                // FX15
                self.delay_timer.set_value(self.registers[x]);
            }
            MiscOpcode::SetSoundTimer => {
                // FX18
                self.sound_timer.set_value(self.registers[x]);
            }
            MiscOpcode::AddVxToI => {
                // FX1E
                // VF is not affected, I wraps at 16 bit.
                self.index_register = self.index_register.wrapping_add(self.registers[x] as u16);
            }
            MiscOpcode::SetIToSprite => {
                // FX29
                let glyph = self.registers[x] as usize * display::fontset::GLYPH_SIZE;
                self.index_register = (display::fontset::LOCATION + glyph) as u16;
            }
            MiscOpcode::StoreBCD => {
                // FX33
                let r = self.registers[x];
                let bcd = [
                    r / 100,     // 246u8 / 100 => 2
                    r / 10 % 10, // 246u8 / 10 => 24 % 10 => 4
                    r % 10,      // 246u8 % 10 => 6
                ];
                self.memory.load_block(&bcd, index)?;
            }
            MiscOpcode::StoreV0ToVx => {
                // FX55
                self.memory.load_block(&self.registers[..=x], index)?;
            }
            MiscOpcode::FillV0ToVx => {
                // FX65
                let data = self.memory.read_block(index, x + 1)?;
                self.registers[..=x].copy_from_slice(data);
            }
        }
        Ok((pcs, op))
    }
}
