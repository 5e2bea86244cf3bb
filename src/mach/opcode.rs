use super::Permission;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// The most argument bytes any instruction takes.
pub const MAX_ARGS: usize = 4;

/// ## Virtual machine instruction set
///
/// Every instruction is one opcode byte followed by a fixed number of
/// argument bytes. Words are 16 bits and travel as two argument bytes,
/// high byte first. Register arguments are indices `0..=5` for `A` to `F`.
///
/// For example: `A = 1279 / 5; B = A` is
/// `[SET_REGISTER 0 4 255, SET_REGISTER 1 0 5, DIV_REGISTER 0 1, COPY_REGISTER 1 0]`.
///
/// The device instructions take no arguments. They read their operands
/// from `A` and `B` and need a permission from the runtime config.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Control
    Nop = 0x00,
    /// Ends the run successfully.
    Halt = 0x01,

    // *** Stack manipulation
    /// `PUSH hi lo` pushes a word.
    Push = 0x02,
    /// `POP r` pops a word into a register.
    Pop = 0x03,
    /// Swaps the two top words.
    Swap = 0x04,
    Dup = 0x05,
    /// `PUSH_REGISTER r`
    PushRegister = 0x06,

    // *** Registers
    /// `SET_REGISTER r hi lo`
    SetRegister = 0x10,
    /// `COPY_REGISTER dst src`
    CopyRegister = 0x11,
    AddRegister = 0x12,
    SubRegister = 0x13,
    MulRegister = 0x14,
    DivRegister = 0x15,
    ModRegister = 0x16,
    /// `SET_REGISTERS a b c d` loads bytes into `A` to `D`.
    SetRegisters = 0x17,

    // *** Device
    SetMousePosition = 0x20,
    ExecuteMouse = 0x21,
    ScrollMouse = 0x22,
    ExecuteKeyboard = 0x23,
    Sleep = 0x24,
}

/// Argument count of a raw opcode byte.
pub fn arity(byte: u8) -> Result<u8> {
    Opcode::try_from(byte).map(Opcode::arity)
}

impl Opcode {
    pub fn arity(self) -> u8 {
        use Opcode::*;
        match self {
            Nop | Halt => 0,
            Push => 2,
            Pop => 1,
            Swap | Dup => 0,
            PushRegister => 1,
            SetRegister => 3,
            CopyRegister | AddRegister | SubRegister | MulRegister | DivRegister
            | ModRegister => 2,
            SetRegisters => 4,
            SetMousePosition | ExecuteMouse | ScrollMouse | ExecuteKeyboard | Sleep => 0,
        }
    }

    /// Permission needed before the runtime will dispatch this opcode.
    pub fn permission(self) -> Permission {
        use Opcode::*;
        match self {
            SetMousePosition | ExecuteMouse | ScrollMouse => Permission::MOUSE,
            ExecuteKeyboard => Permission::KEYBOARD,
            Sleep => Permission::SLEEP,
            _ => Permission::NONE,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Opcode> {
        use Opcode::*;
        Ok(match byte {
            0x00 => Nop,
            0x01 => Halt,
            0x02 => Push,
            0x03 => Pop,
            0x04 => Swap,
            0x05 => Dup,
            0x06 => PushRegister,
            0x10 => SetRegister,
            0x11 => CopyRegister,
            0x12 => AddRegister,
            0x13 => SubRegister,
            0x14 => MulRegister,
            0x15 => DivRegister,
            0x16 => ModRegister,
            0x17 => SetRegisters,
            0x20 => SetMousePosition,
            0x21 => ExecuteMouse,
            0x22 => ScrollMouse,
            0x23 => ExecuteKeyboard,
            0x24 => Sleep,
            _ => return Err(error!(UnknownOpcode)),
        })
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Nop => write!(f, "NOP"),
            Halt => write!(f, "HALT"),

            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Swap => write!(f, "SWAP"),
            Dup => write!(f, "DUP"),
            PushRegister => write!(f, "PUSH_REGISTER"),

            SetRegister => write!(f, "SET_REGISTER"),
            CopyRegister => write!(f, "COPY_REGISTER"),
            AddRegister => write!(f, "ADD_REGISTER"),
            SubRegister => write!(f, "SUB_REGISTER"),
            MulRegister => write!(f, "MUL_REGISTER"),
            DivRegister => write!(f, "DIV_REGISTER"),
            ModRegister => write!(f, "MOD_REGISTER"),
            SetRegisters => write!(f, "SET_REGISTERS"),

            SetMousePosition => write!(f, "SET_MOUSE_POSITION"),
            ExecuteMouse => write!(f, "EXECUTE_MOUSE"),
            ScrollMouse => write!(f, "SCROLL_MOUSE"),
            ExecuteKeyboard => write!(f, "EXECUTE_KEYBOARD"),
            Sleep => write!(f, "SLEEP"),
        }
    }
}
