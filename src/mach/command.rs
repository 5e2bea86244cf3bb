use super::opcode::{Opcode, MAX_ARGS};

/// An instruction being decoded: the opcode and the argument bytes read so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    opcode: Opcode,
    args: [u8; MAX_ARGS],
    argc: u8,
}

impl Default for Command {
    fn default() -> Self {
        Command::new(Opcode::Nop)
    }
}

impl Command {
    pub fn new(opcode: Opcode) -> Command {
        Command {
            opcode,
            args: [0; MAX_ARGS],
            argc: 0,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn args(&self) -> &[u8] {
        &self.args[..self.argc as usize]
    }

    pub fn is_complete(&self) -> bool {
        self.argc == self.opcode.arity()
    }

    pub(super) fn push_arg(&mut self, byte: u8) {
        debug_assert!(!self.is_complete());
        self.args[self.argc as usize] = byte;
        self.argc += 1;
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.opcode)?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_to_arity() {
        let mut c = Command::new(Opcode::Push);
        assert!(!c.is_complete());
        c.push_arg(0);
        c.push_arg(99);
        assert!(c.is_complete());
        assert_eq!(c.args(), &[0, 99]);
        assert_eq!(c.to_string(), "PUSH 0 99");
    }

    #[test]
    fn test_zero_arity_is_complete() {
        assert!(Command::new(Opcode::Swap).is_complete());
        assert_eq!(Command::default().to_string(), "NOP");
    }
}
