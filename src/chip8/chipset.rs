use std::convert::TryFrom;

use {
    crate::{
        definitions::{cpu, display, memory},
        devices::Keyboard,
        framebuffer::FrameBuffer,
        memory::Memory,
        opcode::{
            self, ChipOpcodes, Opcode, Opcodes, Operation, ProgramCounter, ProgramCounterStep,
        },
        resources::Rom,
        timer::{Timed, Timer},
        ProcessError, StackError,
    },
    rand::RngCore,
    tinyvec::ArrayVec,
};

/// The callback type used to report every decoded instruction.
pub type Tracer = Box<dyn FnMut(u16, &Opcodes) + Send>;

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
///
/// The machine is driven by two independent cadences, the host calls
/// [`step`](ChipSet::step) for every instruction and [`tick`](ChipSet::tick)
/// at 60 Hz. Both need `&mut self`, so the calls are always serialized.
pub struct ChipSet {
    /// the loaded program, kept for resetting the machine
    pub(super) rom: Rom,
    /// the last fetched opcode, all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x04F` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Memory,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; here we are using `16`. The stack pointer is the length.
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub(super) sound_timer: Timer,
    /// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
    /// `(64 x 32)`.
    pub(super) display: FrameBuffer,
    /// Input is done with a hex keyboard that has 16 keys ranging `0-F`.
    pub(super) keyboard: Keyboard,
    /// The register a pending `FX0A` will write the pressed key into.
    pub(super) awaiting_key: Option<usize>,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
    /// Will report every decoded instruction, if set.
    pub(super) tracer: Option<Tracer>,
}

/// Will create the memory with the font set and the program loaded.
fn initial_memory(rom: &Rom) -> Result<Memory, ProcessError> {
    let mut ram = Memory::new();
    ram.load_block(&display::fontset::FONTSET, display::fontset::LOCATION)?;
    ram.load_block(rom.get_data(), cpu::PROGRAM_COUNTER as usize)?;
    Ok(ram)
}

impl ChipSet {
    /// will create a new chipset object
    ///
    /// Fails if the program does not fit between the program start and the end of memory.
    pub fn new(rom: Rom) -> Result<Self, ProcessError> {
        let memory = initial_memory(&rom)?;
        log::debug!(
            "loaded rom '{}' with {} bytes",
            rom.get_name(),
            rom.get_data().len()
        );

        Ok(Self {
            rom,
            opcode: 0,
            memory,
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::new(),
            delay_timer: Timer::new(0),
            sound_timer: Timer::new(0),
            display: FrameBuffer::new(),
            keyboard: Keyboard::new(),
            awaiting_key: None,
            rng: Box::new(rand::rngs::OsRng {}),
            tracer: None,
        })
    }

    /// Will replace the random number generator used by `CXKK`.
    pub fn with_rng<R>(mut self, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        self.rng = Box::new(rng);
        self
    }

    /// Will register a callback that receives the address and the decoded
    /// instruction before it is executed.
    pub fn set_tracer<F>(&mut self, tracer: F)
    where
        F: FnMut(u16, &Opcodes) + Send + 'static,
    {
        self.tracer = Some(Box::new(tracer));
    }

    /// Will put the machine back into the state it had after [`new`](ChipSet::new),
    /// the random number generator and the tracer are kept.
    pub fn reset(&mut self) -> Result<(), ProcessError> {
        self.memory = initial_memory(&self.rom)?;
        self.opcode = 0;
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer.set_value(0);
        self.sound_timer.set_value(0);
        self.display.clear();
        self.keyboard.reset();
        self.awaiting_key = None;
        Ok(())
    }

    /// will get the next opcode from memory and move the
    /// program counter past it
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        let bytes = self.memory.read_block(
            self.program_counter as usize,
            memory::opcodes::SIZE as usize,
        )?;
        self.opcode = opcode::build_opcode(bytes, 0)?;
        self.program_counter = self.program_counter.wrapping_add(memory::opcodes::SIZE);
        Ok(())
    }

    /// will advance the program by a single instruction
    ///
    /// While a `FX0A` is pending no instruction is fetched, the call returns
    /// [`Operation::Wait`] until a key was pressed.
    pub fn step(&mut self) -> Result<Operation, ProcessError> {
        if let Some(register) = self.awaiting_key {
            return Ok(self.resume_key_wait(register));
        }

        let address = self.program_counter;
        self.set_opcode()?;
        log::debug!("{:#06X}: opcode {:#06X}", address, self.opcode);

        let result = match Opcodes::try_from(self.opcode) {
            Ok(ops) => {
                log::trace!("{:#06X}: {}", address, ops);
                if let Some(tracer) = self.tracer.as_mut() {
                    tracer(address, &ops);
                }
                self.calc(&ops)
            }
            Err(err) => Err(err.into()),
        };

        if let Err(err) = &result {
            log::warn!("execution stopped at {:#06X}: {}", address, err);
        }
        result
    }

    /// Will finish a pending `FX0A` if a key was pressed since the wait began.
    fn resume_key_wait(&mut self, register: usize) -> Operation {
        match self.keyboard.take_press() {
            Some(key) => {
                log::debug!("key {:#X} released the wait on V{:X}", key, register);
                self.registers[register] = key as u8;
                self.awaiting_key = None;
                self.program_counter = self.program_counter.wrapping_add(memory::opcodes::SIZE);
                Operation::None
            }
            None => Operation::Wait,
        }
    }

    /// Will start waiting for a key press into the given register.
    pub(super) fn await_key(&mut self, register: usize) {
        // only presses after this point count
        self.keyboard.take_press();
        self.awaiting_key = Some(register);
    }

    /// Will count both timers down by one, never below zero.
    pub fn tick(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool; crate::definitions::keyboard::SIZE]) {
        self.keyboard.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) {
        self.keyboard.toggle_key(key)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keyboard.get_keys()
    }

    /// Will return if a `FX0A` waits for a key press
    pub fn is_waiting(&self) -> bool {
        self.awaiting_key.is_some()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return if the host shall play a sound
    pub fn sound_active(&self) -> bool {
        self.get_sound_timer() > 0
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// Will return the current framebuffer
    pub fn get_display(&self) -> &FrameBuffer {
        &self.display
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    pub fn get_program_counter(&self) -> u16 {
        self.program_counter
    }

    /// The return addresses, the length is the stack pointer
    pub fn get_stack(&self) -> &[u16] {
        &self.stack
    }

    /// The last fetched opcode
    pub fn get_opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn get_memory(&self) -> &Memory {
        &self.memory
    }

    pub fn get_name(&self) -> &str {
        self.rom.get_name()
    }

    /// Will push the current pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        match self.stack.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Overflow),
        }
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        self.stack.pop().ok_or(StackError::Underflow)
    }
}

impl ProgramCounter for ChipSet {
    fn move_counter(&mut self, step: ProgramCounterStep) {
        self.program_counter = match step {
            ProgramCounterStep::Next => self.program_counter,
            ProgramCounterStep::Skip => self.program_counter.wrapping_add(memory::opcodes::SIZE),
            ProgramCounterStep::Hold => self.program_counter.wrapping_sub(memory::opcodes::SIZE),
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}
