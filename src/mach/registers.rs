use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Register {
    pub const ALL: [Register; 6] = [
        Register::A,
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::F,
    ];

    pub fn from_letter(letter: char) -> Option<Register> {
        match letter {
            'A' => Some(Register::A),
            'B' => Some(Register::B),
            'C' => Some(Register::C),
            'D' => Some(Register::D),
            'E' => Some(Register::E),
            'F' => Some(Register::F),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    fn try_from(index: u8) -> Result<Register, Error> {
        match Register::ALL.get(index as usize) {
            Some(register) => Ok(*register),
            None => Err(error!(InvalidRegister)),
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Six 16 bit registers, all zero at start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    values: [u16; 6],
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }

    pub fn get(&self, register: Register) -> u16 {
        self.values[register.index()]
    }

    pub fn set(&mut self, register: Register, value: u16) {
        self.values[register.index()] = value;
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, register) in Register::ALL.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", register, self.get(*register))?;
        }
        Ok(())
    }
}
