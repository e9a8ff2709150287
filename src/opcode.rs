//! Opcode abstractions, functionality and constants.
use std::{convert::TryFrom, fmt};

use crate::{MemoryError, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single nibble
const NIBBLE_SIZE: u16 = 0x4;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up (big-endian)
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::MemoryError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let address = 3;
/// # let err = MemoryError::OutOfRange { address, len: 2, capacity: SPLIT_OPCODE.len() };
/// # assert_eq!(Err(err), build_opcode(&SPLIT_OPCODE, address));
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, MemoryError> {
    // controlling that there is no illegal access here
    match (data.get(pointer), pointer.checked_add(1).and_then(|p| data.get(p))) {
        (Some(&high), Some(&low)) => Ok(Opcode::from_be_bytes([high, low])),
        _ => Err(MemoryError::OutOfRange {
            address: pointer,
            len: 2,
            capacity: data.len(),
        }),
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// family nibble of any opcode
    /// - `T` is the opcode type
    fn t(&self) -> u8;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXKK`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `KK` is a constant
    fn xkk(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a constant or an opcode subtype
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> u8 {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE_SIZE)) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xkk(), (0xE, 0xDA));
    /// ```
    fn xkk(&self) -> (usize, u8) {
        let x = self.x();
        let kk = (self & OPCODE_MASK_00FF) as u8;
        (x, kk)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        let y = ((self & MASK) >> NIBBLE_SIZE) as usize;
        (x, y)
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> (2 * NIBBLE_SIZE)) as usize
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents the program counter movement an instruction requests.
///
/// The program counter has already been moved past the instruction when
/// the instruction runs, all the steps are relative to that position.
pub enum ProgramCounterStep {
    /// Will keep the already advanced program counter
    Next,
    /// Will skip the following instruction
    Skip,
    /// Will move the program counter back onto the current instruction,
    /// so that it runs again.
    Hold,
    /// Will simply move the program counter to the given location.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }
}

#[inline]
fn decode<T>(value: Opcode) -> Result<T, OpcodeError>
where
    T: TryFrom<Opcode, Error = ()>,
{
    T::try_from(value).map_err(|_| OpcodeError::InvalidOpcode(value))
}

/// creates the boilerplate for enums that are selected by a fixed value.
macro_rules! implTryFromEnum {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        impl TryFrom<$type_from> for $type_name {
            type Error = ();

            fn try_from(value: $type_from) -> Result<Self, Self::Error> {
                match value {
                    $(
                        $key => Ok($val),
                    )+
                    _ => Err(()),
                }
            }
        }
    };
}

/// creates the boilerplate for the opcode families, the body
/// extracts the fields from the raw opcode.
macro_rules! implTryFromOpcode {
    ($type_name:ident : |$value:ident| $body:block) => {
        impl TryFrom<Opcode> for $type_name {
            type Error = ();

            fn try_from($value: Opcode) -> Result<Self, Self::Error> $body
        }
    };
}

macro_rules! implTryFromXKK {
    ($type_name:ident) => {
        implTryFromOpcode!($type_name : |value| {
            let (x, kk) = value.xkk();
            Ok($type_name { x, kk })
        });
    };
}

macro_rules! implTryFromNNN {
    ($type_name:ident) => {
        implTryFromOpcode!($type_name : |value| {
            let nnn = value.nnn();
            Ok($type_name { nnn })
        });
    };
}

macro_rules! implTryFromXY0 {
    ($type_name:ident) => {
        implTryFromOpcode!($type_name : |value| {
            match value.xyn() {
                (x, y, 0) => Ok($type_name { x, y }),
                _ => Err(()),
            }
        });
    };
}

macro_rules! implTryFromXKKSub {
    ($type_name:ident : $sub:ty) => {
        implTryFromOpcode!($type_name : |value| {
            let (x, kk) = value.xkk();
            let ops = <$sub>::try_from(kk)?;
            Ok($type_name { ops, x })
        });
    };
}

macro_rules! implTryFromXYNSub {
    ($type_name:ident : $sub:ty) => {
        implTryFromOpcode!($type_name : |value| {
            let (x, y, n) = value.xyn();
            let ops = <$sub>::try_from(n)?;
            Ok($type_name { ops, x, y })
        });
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Clears the display
    Clear,
    /// Returns from the subroutine
    Return,
}

implTryFromEnum!(System : Opcode :
    // 00E0
    0x00E0 => System::Clear,
    // 00EE
    0x00EE => System::Return,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub nnn: u16,
}

implTryFromNNN!(Jump);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub nnn: u16,
}

implTryFromNNN!(Call);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipEqual {
    pub x: usize,
    pub kk: u8,
}

implTryFromXKK!(SkipEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipNotEqual {
    pub x: usize,
    pub kk: u8,
}

implTryFromXKK!(SkipNotEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRegisterEqual {
    pub x: usize,
    pub y: usize,
}

implTryFromXY0!(SkipRegisterEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Load {
    pub x: usize,
    pub kk: u8,
}

implTryFromXKK!(Load);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Add {
    pub x: usize,
    pub kk: u8,
}

implTryFromXKK!(Add);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOpcode {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubNegated,
    ShiftLeft,
}

implTryFromEnum!(ArithmeticOpcode : usize :
    // 8XY0
    0x0 => ArithmeticOpcode::Assign,
    // 8XY1
    0x1 => ArithmeticOpcode::Or,
    // 8XY2
    0x2 => ArithmeticOpcode::And,
    // 8XY3
    0x3 => ArithmeticOpcode::Xor,
    // 8XY4
    0x4 => ArithmeticOpcode::Add,
    // 8XY5
    0x5 => ArithmeticOpcode::Sub,
    // 8XY6
    0x6 => ArithmeticOpcode::ShiftRight,
    // 8XY7
    0x7 => ArithmeticOpcode::SubNegated,
    // 8XYE
    0xE => ArithmeticOpcode::ShiftLeft,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub ops: ArithmeticOpcode,
    pub x: usize,
    pub y: usize,
}

implTryFromXYNSub!(Arithmetic : ArithmeticOpcode);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRegisterNotEqual {
    pub x: usize,
    pub y: usize,
}

implTryFromXY0!(SkipRegisterNotEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadIndex {
    pub nnn: u16,
}

implTryFromNNN!(LoadIndex);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpOffset {
    pub nnn: u16,
}

implTryFromNNN!(JumpOffset);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Random {
    pub x: usize,
    pub kk: u8,
}

implTryFromXKK!(Random);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub x: usize,
    pub y: usize,
    pub n: usize,
}

implTryFromOpcode!(Draw : |value| {
    let (x, y, n) = value.xyn();
    Ok(Draw { x, y, n })
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOpcode {
    Pressed,
    NotPressed,
}

implTryFromEnum!(KeyOpcode : u8 :
    // EX9E
    0x9E => KeyOpcode::Pressed,
    // EXA1
    0xA1 => KeyOpcode::NotPressed,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySkip {
    pub ops: KeyOpcode,
    pub x: usize,
}

implTryFromXKKSub!(KeySkip : KeyOpcode);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOpcode {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddVxToI,
    SetIToSprite,
    StoreBCD,
    StoreV0ToVx,
    FillV0ToVx,
}

implTryFromEnum!(MiscOpcode : u8 :
    // FX07
    0x07 => MiscOpcode::GetDelayTimer,
    // FX0A
    0x0A => MiscOpcode::AwaitKeyPress,
    // FX15
    0x15 => MiscOpcode::SetDelayTimer,
    // FX18
    0x18 => MiscOpcode::SetSoundTimer,
    // FX1E
    0x1E => MiscOpcode::AddVxToI,
    // FX29
    0x29 => MiscOpcode::SetIToSprite,
    // FX33
    0x33 => MiscOpcode::StoreBCD,
    // FX55
    0x55 => MiscOpcode::StoreV0ToVx,
    // FX65
    0x65 => MiscOpcode::FillV0ToVx,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub ops: MiscOpcode,
    pub x: usize,
}

implTryFromXKKSub!(Misc : MiscOpcode);

/// A fully decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcodes {
    System(System),
    Jump(Jump),
    Call(Call),
    SkipEqual(SkipEqual),
    SkipNotEqual(SkipNotEqual),
    SkipRegisterEqual(SkipRegisterEqual),
    Load(Load),
    Add(Add),
    Arithmetic(Arithmetic),
    SkipRegisterNotEqual(SkipRegisterNotEqual),
    LoadIndex(LoadIndex),
    JumpOffset(JumpOffset),
    Random(Random),
    Draw(Draw),
    KeySkip(KeySkip),
    Misc(Misc),
}

impl TryFrom<Opcode> for Opcodes {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let res = match value.t() {
            0x0 => Opcodes::System(decode(value)?),
            0x1 => Opcodes::Jump(decode(value)?),
            0x2 => Opcodes::Call(decode(value)?),
            0x3 => Opcodes::SkipEqual(decode(value)?),
            0x4 => Opcodes::SkipNotEqual(decode(value)?),
            0x5 => Opcodes::SkipRegisterEqual(decode(value)?),
            0x6 => Opcodes::Load(decode(value)?),
            0x7 => Opcodes::Add(decode(value)?),
            0x8 => Opcodes::Arithmetic(decode(value)?),
            0x9 => Opcodes::SkipRegisterNotEqual(decode(value)?),
            0xA => Opcodes::LoadIndex(decode(value)?),
            0xB => Opcodes::JumpOffset(decode(value)?),
            0xC => Opcodes::Random(decode(value)?),
            0xD => Opcodes::Draw(decode(value)?),
            0xE => Opcodes::KeySkip(decode(value)?),
            0xF => Opcodes::Misc(decode(value)?),
            _ => return Err(OpcodeError::InvalidOpcode(value)),
        };
        Ok(res)
    }
}

/// The disassembled mnemonic of the instruction.
///
/// ```rust
/// # use chip::opcode::*;
/// # use std::convert::TryFrom;
/// let ops = Opcodes::try_from(0xD123 as Opcode).unwrap();
/// assert_eq!("DRW V1, V2, 3", format!("{}", ops));
/// ```
impl fmt::Display for Opcodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Opcodes::System(System::Clear) => write!(f, "CLS"),
            Opcodes::System(System::Return) => write!(f, "RET"),
            Opcodes::Jump(Jump { nnn }) => write!(f, "JP {:#05X}", nnn),
            Opcodes::Call(Call { nnn }) => write!(f, "CALL {:#05X}", nnn),
            Opcodes::SkipEqual(SkipEqual { x, kk }) => write!(f, "SE V{:X}, {:#04X}", x, kk),
            Opcodes::SkipNotEqual(SkipNotEqual { x, kk }) => {
                write!(f, "SNE V{:X}, {:#04X}", x, kk)
            }
            Opcodes::SkipRegisterEqual(SkipRegisterEqual { x, y }) => {
                write!(f, "SE V{:X}, V{:X}", x, y)
            }
            Opcodes::Load(Load { x, kk }) => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Opcodes::Add(Add { x, kk }) => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Opcodes::Arithmetic(Arithmetic { ops, x, y }) => {
                let name = match ops {
                    ArithmeticOpcode::Assign => "LD",
                    ArithmeticOpcode::Or => "OR",
                    ArithmeticOpcode::And => "AND",
                    ArithmeticOpcode::Xor => "XOR",
                    ArithmeticOpcode::Add => "ADD",
                    ArithmeticOpcode::Sub => "SUB",
                    ArithmeticOpcode::ShiftRight => "SHR",
                    ArithmeticOpcode::SubNegated => "SUBN",
                    ArithmeticOpcode::ShiftLeft => "SHL",
                };
                write!(f, "{} V{:X}, V{:X}", name, x, y)
            }
            Opcodes::SkipRegisterNotEqual(SkipRegisterNotEqual { x, y }) => {
                write!(f, "SNE V{:X}, V{:X}", x, y)
            }
            Opcodes::LoadIndex(LoadIndex { nnn }) => write!(f, "LD I, {:#05X}", nnn),
            Opcodes::JumpOffset(JumpOffset { nnn }) => write!(f, "JP V0, {:#05X}", nnn),
            Opcodes::Random(Random { x, kk }) => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Opcodes::Draw(Draw { x, y, n }) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Opcodes::KeySkip(KeySkip { ops, x }) => match ops {
                KeyOpcode::Pressed => write!(f, "SKP V{:X}", x),
                KeyOpcode::NotPressed => write!(f, "SKNP V{:X}", x),
            },
            Opcodes::Misc(Misc { ops, x }) => match ops {
                MiscOpcode::GetDelayTimer => write!(f, "LD V{:X}, DT", x),
                MiscOpcode::AwaitKeyPress => write!(f, "LD V{:X}, K", x),
                MiscOpcode::SetDelayTimer => write!(f, "LD DT, V{:X}", x),
                MiscOpcode::SetSoundTimer => write!(f, "LD ST, V{:X}", x),
                MiscOpcode::AddVxToI => write!(f, "ADD I, V{:X}", x),
                MiscOpcode::SetIToSprite => write!(f, "LD F, V{:X}", x),
                MiscOpcode::StoreBCD => write!(f, "LD B, V{:X}", x),
                MiscOpcode::StoreV0ToVx => write!(f, "LD [I], V{:X}", x),
                MiscOpcode::FillV0ToVx => write!(f, "LD V{:X}, [I]", x),
            },
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter by the requested step.
    fn move_counter(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The machine waits for the next key press
    Wait,
    /// The framebuffer changed and shall be redrawn
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the  [`ProgramCounter`](ProgramCounter) trait for the step
/// functionality.
pub trait ChipOpcodes: ProgramCounter {
    /// will execute a single decoded instruction
    fn calc(&mut self, opcode: &Opcodes) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op)| {
            operation = op;
            step
        };

        let step = match opcode {
            Opcodes::System(opcode) => self.system(opcode).map(step_op),
            Opcodes::Jump(opcode) => self.jump(opcode),
            Opcodes::Call(opcode) => self.call(opcode),
            Opcodes::SkipEqual(opcode) => self.skip_equal(opcode),
            Opcodes::SkipNotEqual(opcode) => self.skip_not_equal(opcode),
            Opcodes::SkipRegisterEqual(opcode) => self.skip_register_equal(opcode),
            Opcodes::Load(opcode) => self.load(opcode),
            Opcodes::Add(opcode) => self.add(opcode),
            Opcodes::Arithmetic(opcode) => self.arithmetic(opcode),
            Opcodes::SkipRegisterNotEqual(opcode) => self.skip_register_not_equal(opcode),
            Opcodes::LoadIndex(opcode) => self.load_index(opcode),
            Opcodes::JumpOffset(opcode) => self.jump_offset(opcode),
            Opcodes::Random(opcode) => self.random(opcode),
            Opcodes::Draw(opcode) => self.draw(opcode).map(step_op),
            Opcodes::KeySkip(opcode) => self.key_skip(opcode),
            Opcodes::Misc(opcode) => self.misc(opcode).map(step_op),
        }?;

        self.move_counter(step);
        Ok(operation)
    }

    /// A multiuse opcode base for type `0NNN`
    ///
    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn system(&mut self, opcode: &System) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, opcode: &Jump) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn call(&mut self, opcode: &Call) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XKK` - Cond     - `if(Vx==KK)`          - Skips the next instruction if `VX` equals `KK`.
    fn skip_equal(&self, opcode: &SkipEqual) -> Result<ProgramCounterStep, ProcessError>;

    /// - `4XKK` - Cond     - `if(Vx!=KK)`          - Skips the next instruction if `VX` doesn't equal `KK`.
    fn skip_not_equal(&self, opcode: &SkipNotEqual) -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn skip_register_equal(
        &self,
        opcode: &SkipRegisterEqual,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XKK` - Const    - `Vx = KK`             - Sets `VX` to `KK`.
    fn load(&mut self, opcode: &Load) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XKK` - Const    - `Vx += KK`            - Adds `KK` to `VX`. (Carry flag is not changed)
    fn add(&mut self, opcode: &Add) -> Result<ProgramCounterStep, ProcessError>;

    /// A mutiuse opcode base for type `8XYT` (T is a sub opcode)
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError>;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_register_not_equal(
        &self,
        opcode: &SkipRegisterNotEqual,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn load_index(&mut self, opcode: &LoadIndex) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, opcode: &JumpOffset) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXKK` - Rand     - `Vx=rand()&KK`        - Sets `VX` to a random byte and `KK`.
    fn random(&mut self, opcode: &Random) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. Each row of `8` pixels is read as bit-coded starting from memory location `I`; `I` value doesn’t change after the execution of this instruction. `VF` is set to `1` if any screen pixels are flipped from set to unset when the sprite is drawn, and to `0` if that doesn’t happen
    fn draw(&mut self, opcode: &Draw) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// A multiuse opcode base for type `EXTT` (T is a sub opcode)
    ///
    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key_skip(&self, opcode: &KeySkip) -> Result<ProgramCounterStep, ProcessError>;

    /// A multiuse opcode base for type `FXTT` (T is a sub opcode)
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the sprite for the character in `VX`.
    /// - `FX33` - BCD      - `246 / 100 => 2` `246 / 10 => 24 % 10 => 4` `246 % 10 => 6` - Stores the [binary-coded decimal](https://en.wikipedia.org/wiki/Binary-coded_decimal) representation of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`. `I` itself is left unmodified.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`. `I` itself is left unmodified.
    fn misc(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}
