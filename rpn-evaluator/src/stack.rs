use crate::error::ErrorKind;

/// Bounded LIFO operand stack.
///
/// Owned by a single evaluation run; `push` and `pop` are the only mutations.
#[derive(Debug)]
pub struct Stack {
    values: Vec<i64>,
    capacity: usize,
}

impl Stack {
    /// `capacity` only bounds how many values may be pushed; storage grows
    /// on demand.
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Push `value` as the new top.
    ///
    /// # Errors
    ///
    /// `StackOverflow` if the stack already holds `capacity` values.
    pub fn push(&mut self, value: i64) -> Result<(), ErrorKind> {
        if self.values.len() >= self.capacity {
            return Err(ErrorKind::StackOverflow {
                capacity: self.capacity,
            });
        }

        self.values.push(value);
        Ok(())
    }

    /// Remove and return the top.
    ///
    /// # Errors
    ///
    /// `StackUnderflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<i64, ErrorKind> {
        self.values.pop().ok_or(ErrorKind::StackUnderflow)
    }
}
