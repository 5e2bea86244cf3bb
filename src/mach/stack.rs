use crate::buffer::Buffer;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited byte buffer
///
/// Words are pushed high byte first, so the low byte is on top.

pub struct Stack {
    buffer: Buffer<u8>,
    capacity: usize,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.buffer)
    }
}

impl Stack {
    pub fn new(capacity: usize) -> Stack {
        Stack {
            buffer: Buffer::with_limit(capacity, "STACK OVERFLOW"),
            capacity,
        }
    }
    fn overflow_check(&self, len: usize) -> Result<()> {
        if self.buffer.len() + len > self.capacity {
            Err(error!(OutOfMemory; "STACK OVERFLOW"))
        } else {
            Ok(())
        }
    }
    fn underflow_check(&self, len: usize) -> Result<()> {
        if self.buffer.len() < len {
            Err(error!(StackUnderflow))
        } else {
            Ok(())
        }
    }
    pub fn len(&self) -> usize {
        self.buffer.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn get(&self, index: usize) -> Option<u8> {
        self.buffer.get(index).copied()
    }
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_slice()
    }
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.buffer.append(byte)
    }
    pub fn pop(&mut self) -> Result<u8> {
        match self.buffer.pop() {
            Some(byte) => Ok(byte),
            None => Err(error!(StackUnderflow)),
        }
    }
    pub fn push_word(&mut self, word: u16) -> Result<()> {
        self.overflow_check(2)?;
        let [hi, lo] = word.to_be_bytes();
        self.push(hi)?;
        self.push(lo)
    }
    pub fn pop_word(&mut self) -> Result<u16> {
        self.underflow_check(2)?;
        let lo = self.pop()?;
        let hi = self.pop()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }
    pub fn peek_word(&self) -> Result<u16> {
        self.underflow_check(2)?;
        let len = self.buffer.len();
        Ok(u16::from_be_bytes([self.buffer[len - 2], self.buffer[len - 1]]))
    }
    pub fn pop_2(&mut self) -> Result<(u16, u16)> {
        self.underflow_check(4)?;
        let two = self.pop_word()?;
        let one = self.pop_word()?;
        Ok((one, two))
    }
    pub fn swap(&mut self) -> Result<()> {
        let (one, two) = self.pop_2()?;
        self.push_word(two)?;
        self.push_word(one)
    }
    pub fn dup(&mut self) -> Result<()> {
        let word = self.peek_word()?;
        self.push_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_layout() {
        let mut s = Stack::new(8);
        s.push_word(0x0a02).unwrap();
        assert_eq!(s.as_slice(), &[0x0a, 0x02]);
        assert_eq!(s.pop_word().unwrap(), 0x0a02);
        assert!(s.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut s = Stack::new(8);
        s.push_word(99).unwrap();
        s.push_word(0x0a02).unwrap();
        s.swap().unwrap();
        assert_eq!(s.as_slice(), &[0x0a, 0x02, 0, 99]);
    }

    #[test]
    fn test_overflow_is_all_or_nothing() {
        let mut s = Stack::new(3);
        s.push_word(1).unwrap();
        let e = s.push_word(2).unwrap_err();
        assert_eq!(e.to_string(), "OUT OF MEMORY; STACK OVERFLOW");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_underflow_keeps_contents() {
        let mut s = Stack::new(8);
        s.push(1).unwrap();
        assert!(s.pop_word().is_err());
        assert_eq!(s.len(), 1);
        s.push_word(5).unwrap();
        assert!(s.swap().is_err());
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_dup() {
        let mut s = Stack::new(8);
        s.push_word(300).unwrap();
        s.dup().unwrap();
        assert_eq!(s.pop_2().unwrap(), (300, 300));
    }
}
