//! # llic
//!
//! A lexer for a small assembly language and a stack based bytecode
//! virtual machine.
//!
//! The two halves are independent. The lexer turns source text into
//! commands, registers and numbers:
//! ```
//! let tokens = llic::lang::lex(".PUSH 0 99 # comment\n.POP A").unwrap();
//! assert_eq!(tokens.to_string(), ".PUSH 0 99\n.POP A");
//! ```
//!
//! The runtime executes bytecode against six registers and a byte stack:
//! ```
//! use llic::buffer::Buffer;
//! use llic::mach::{Config, Register, Runtime};
//!
//! // PUSH 0 99, POP A
//! let bytecode = Buffer::from_slice(&[0x02, 0, 99, 0x03, 0]).unwrap();
//! let mut runtime = Runtime::new(bytecode, Config::default());
//! runtime.run().unwrap();
//! assert_eq!(runtime.registers().get(Register::A), 99);
//! ```

pub mod buffer;
pub mod lang;
pub mod mach;
