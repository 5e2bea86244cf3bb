use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Slots allocated by a fresh buffer before the first growth.
pub const INITIAL_CAPACITY: usize = 32;

/// ## Append-only growable buffer
///
/// Backs the lexer source text, the token list, the bytecode stream and
/// the operand stack. Capacity doubles whenever an append would overflow
/// it. Growth goes through a fallible reservation so an allocation
/// failure leaves every element in place and reports `OUT OF MEMORY`.
///
/// A buffer may carry a hard `limit`; capacity never grows past it.

pub struct Buffer<T> {
    vec: Vec<T>,
    capacity: usize,
    limit: Option<usize>,
    overflow_message: &'static str,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Buffer::new()
    }
}

impl<T> Buffer<T> {
    pub fn new() -> Buffer<T> {
        Buffer {
            vec: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            limit: None,
            overflow_message: "BUFFER OVERFLOW",
        }
    }

    /// A buffer that refuses to hold more than `limit` elements.
    pub fn with_limit(limit: usize, overflow_message: &'static str) -> Buffer<T> {
        let capacity = INITIAL_CAPACITY.min(limit);
        Buffer {
            vec: Vec::with_capacity(capacity),
            capacity,
            limit: Some(limit),
            overflow_message,
        }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.vec.get(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    pub fn append(&mut self, value: T) -> Result<()> {
        if self.vec.len() >= self.capacity {
            self.grow()?;
        }
        self.vec.push(value);
        Ok(())
    }

    /// Only the operand stack removes elements.
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    fn grow(&mut self) -> Result<()> {
        let mut capacity = match self.capacity.checked_mul(2) {
            Some(0) => INITIAL_CAPACITY,
            Some(capacity) => capacity,
            None => return Err(error!(OutOfMemory; self.overflow_message)),
        };
        if let Some(limit) = self.limit {
            if self.capacity >= limit {
                return Err(error!(OutOfMemory; self.overflow_message));
            }
            capacity = capacity.min(limit);
        }
        let additional = capacity - self.vec.len();
        if self.vec.try_reserve_exact(additional).is_err() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl<T: Clone> Buffer<T> {
    /// Appends one element at a time and stops at the first failure.
    /// Elements appended before the failure stay in the buffer.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()> {
        for value in values {
            self.append(value.clone())?;
        }
        Ok(())
    }

    pub fn from_slice(values: &[T]) -> Result<Buffer<T>> {
        let mut buffer = Buffer::new();
        buffer.extend_from_slice(values)?;
        Ok(buffer)
    }
}

impl Buffer<u8> {
    pub fn from_text(text: &str) -> Result<Buffer<u8>> {
        Buffer::from_slice(text.as_bytes())
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<T> IntoIterator for Buffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vec.into_iter()
    }
}

impl<T> std::ops::Deref for Buffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.vec
    }
}
