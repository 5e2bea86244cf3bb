use super::{
    Address, Command, Config, Device, Event, NullDevice, Opcode, Register, Registers, Stack,
};
use crate::buffer::Buffer;
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use std::time::Duration;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Next byte is an opcode.
    Idle,
    /// Next byte is an argument of the current command.
    Collecting,
    /// Current command is complete and waiting for dispatch.
    Running,
}

/// ## Virtual machine
///
/// Owns the bytecode, the operand stack, the registers and the device.
/// [`run`](Runtime::run) reads one byte per `Idle` or `Collecting` step and
/// dispatches in the `Running` step without reading. It stops at the end
/// of the bytecode, on `HALT`, or on the first error.

pub struct Runtime<D: Device = NullDevice> {
    cursor: Address,
    origin: Address,
    state: State,
    bytecode: Buffer<u8>,
    command: Command,
    config: Config,
    stack: Stack,
    registers: Registers,
    device: D,
    executed: usize,
    halted: bool,
    fault: Option<Error>,
}

impl Runtime<NullDevice> {
    pub fn new(bytecode: Buffer<u8>, config: Config) -> Runtime<NullDevice> {
        Runtime::with_device(bytecode, config, NullDevice)
    }
}

impl<D: Device> Runtime<D> {
    pub fn with_device(bytecode: Buffer<u8>, config: Config, device: D) -> Runtime<D> {
        Runtime {
            cursor: 0,
            origin: 0,
            state: State::Idle,
            bytecode,
            command: Command::default(),
            stack: Stack::new(config.stack_capacity),
            config,
            registers: Registers::new(),
            device,
            executed: 0,
            halted: false,
            fault: None,
        }
    }

    pub fn cursor(&self) -> Address {
        self.cursor
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn command(&self) -> &Command {
        &self.command
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn bytecode(&self) -> &Buffer<u8> {
        &self.bytecode
    }
    pub fn stack(&self) -> &Stack {
        &self.stack
    }
    pub fn registers(&self) -> &Registers {
        &self.registers
    }
    pub fn device(&self) -> &D {
        &self.device
    }
    pub fn into_device(self) -> D {
        self.device
    }
    /// Number of commands dispatched so far.
    pub fn executed(&self) -> usize {
        self.executed
    }
    pub fn is_halted(&self) -> bool {
        self.halted
    }
    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }

    /// Runs to the end of the bytecode. A runtime that failed keeps
    /// returning the same error.
    pub fn run(&mut self) -> Result<()> {
        if let Some(error) = &self.fault {
            return Err(error.clone());
        }
        debug!(len = self.bytecode.len(), cursor = self.cursor, "run");
        match self.cycle() {
            Ok(()) => {
                debug!(executed = self.executed, halted = self.halted, "run complete");
                Ok(())
            }
            Err(error) => {
                debug!(%error, "run failed");
                self.fault = Some(error.clone());
                Err(error)
            }
        }
    }

    fn cycle(&mut self) -> Result<()> {
        while !self.halted {
            match self.state {
                State::Running => {
                    let result = self.execute();
                    self.state = State::Idle;
                    result.map_err(|e| match e.address() {
                        Some(_) => e,
                        None => e.at_address(self.origin),
                    })?;
                }
                State::Idle => {
                    self.origin = self.cursor;
                    let byte = match self.fetch() {
                        Some(byte) => byte,
                        None => break,
                    };
                    let opcode = Opcode::try_from(byte).map_err(|e| e.at_address(self.origin))?;
                    self.command = Command::new(opcode);
                    self.state = if opcode.arity() == 0 {
                        State::Running
                    } else {
                        State::Collecting
                    };
                }
                State::Collecting => {
                    let byte = match self.fetch() {
                        Some(byte) => byte,
                        None => {
                            return Err(error!(TruncatedInstruction, @self.origin; "END OF BYTECODE"))
                        }
                    };
                    self.command.push_arg(byte);
                    if self.command.is_complete() {
                        self.state = State::Running;
                    }
                }
            }
        }
        Ok(())
    }

    fn fetch(&mut self) -> Option<u8> {
        let byte = self.bytecode.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(byte)
    }

    fn execute(&mut self) -> Result<()> {
        let command = self.command;
        trace!(%command, address = self.origin, "dispatch");
        self.executed += 1;
        let args = command.args();
        let opcode = command.opcode();
        let required = opcode.permission();
        if !self.config.permission.contains(required) {
            warn!(%opcode, permission = required.name(), "permission denied");
            return Err(error!(PermissionDenied; required.name()));
        }
        match opcode {
            Opcode::Nop => {}
            Opcode::Halt => self.halted = true,

            Opcode::Push => self.stack.push_word(word(args[0], args[1]))?,
            Opcode::Pop => {
                let register = Register::try_from(args[0])?;
                let value = self.stack.pop_word()?;
                self.registers.set(register, value);
            }
            Opcode::Swap => self.stack.swap()?,
            Opcode::Dup => self.stack.dup()?,
            Opcode::PushRegister => {
                let value = self.registers.get(Register::try_from(args[0])?);
                self.stack.push_word(value)?;
            }

            Opcode::SetRegister => {
                let register = Register::try_from(args[0])?;
                self.registers.set(register, word(args[1], args[2]));
            }
            Opcode::CopyRegister => self.binary(args, |_, rhs| Ok(rhs))?,
            Opcode::AddRegister => self.binary(args, |lhs, rhs| {
                lhs.checked_add(rhs).ok_or_else(|| error!(Overflow))
            })?,
            Opcode::SubRegister => self.binary(args, |lhs, rhs| {
                lhs.checked_sub(rhs).ok_or_else(|| error!(Overflow))
            })?,
            Opcode::MulRegister => self.binary(args, |lhs, rhs| {
                lhs.checked_mul(rhs).ok_or_else(|| error!(Overflow))
            })?,
            Opcode::DivRegister => self.binary(args, |lhs, rhs| {
                lhs.checked_div(rhs).ok_or_else(|| error!(DivisionByZero))
            })?,
            Opcode::ModRegister => self.binary(args, |lhs, rhs| {
                lhs.checked_rem(rhs).ok_or_else(|| error!(DivisionByZero))
            })?,
            Opcode::SetRegisters => {
                for (register, byte) in Register::ALL.iter().zip(args) {
                    self.registers.set(*register, u16::from(*byte));
                }
            }

            Opcode::SetMousePosition => self.device.dispatch(Event::MouseMove {
                x: self.registers.get(Register::A),
                y: self.registers.get(Register::B),
            })?,
            Opcode::ExecuteMouse => self
                .device
                .dispatch(Event::MouseButton(self.registers.get(Register::A)))?,
            Opcode::ScrollMouse => self
                .device
                .dispatch(Event::MouseScroll(self.registers.get(Register::A) as i16))?,
            Opcode::ExecuteKeyboard => self.device.dispatch(Event::Key {
                action: self.registers.get(Register::A),
                code: self.registers.get(Register::B),
            })?,
            Opcode::Sleep => self.device.dispatch(Event::Sleep(Duration::from_millis(
                u64::from(self.registers.get(Register::A)),
            )))?,
        }
        Ok(())
    }

    /// `dst = f(dst, src)` for the two register arguments.
    fn binary<F>(&mut self, args: &[u8], f: F) -> Result<()>
    where
        F: Fn(u16, u16) -> Result<u16>,
    {
        let dst = Register::try_from(args[0])?;
        let src = Register::try_from(args[1])?;
        let value = f(self.registers.get(dst), self.registers.get(src))?;
        self.registers.set(dst, value);
        Ok(())
    }
}

fn word(hi: u8, lo: u8) -> u16 {
    u16::from_be_bytes([hi, lo])
}
