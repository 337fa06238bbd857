use super::Container;
use crate::error::ContainerError;

/// A LIFO container, optionally bounded
#[derive(Clone, Debug)]
pub struct Stack<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Create a new unbounded stack
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a stack holding at most `capacity` elements (0 = unbounded)
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new element on top.
    /// Panics if the stack is bounded and full: use `try_push` to get an error instead
    pub fn push(&mut self, element: T) {
        assert!(
            !self.full(),
            "Stack overflow: capacity of {} reached",
            self.capacity
        );
        self.elements.push(element);
    }

    /// Push a new element on top, failing if the stack is bounded and full
    pub fn try_push(&mut self, element: T) -> Result<(), ContainerError> {
        if self.full() {
            return Err(ContainerError::Overflow {
                capacity: self.capacity,
            });
        }
        self.elements.push(element);
        Ok(())
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.elements.pop().ok_or(ContainerError::Underflow)
    }

    /// Peek at the top element
    pub fn top(&self) -> Result<&T, ContainerError> {
        self.elements.last().ok_or(ContainerError::Underflow)
    }
}

impl<T> Container for Stack<T> {
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}
