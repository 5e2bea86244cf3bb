/*!
## Rust Machine Module

This Rust module is a stack based virtual machine for the bytecode.

*/

pub type Address = usize;

mod command;
mod config;
mod device;
mod opcode;
mod registers;
mod runtime;
mod stack;

pub use command::Command;
pub use config::Config;
pub use config::Permission;
pub use device::Device;
pub use device::Event;
pub use device::NullDevice;
pub use opcode::arity;
pub use opcode::Opcode;
pub use opcode::MAX_ARGS;
pub use registers::Register;
pub use registers::Registers;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
