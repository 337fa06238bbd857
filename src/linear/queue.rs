use super::Container;
use crate::error::ContainerError;

// Initial number of slots of an unbounded queue
const MIN_SLOTS: usize = 4;

/// A FIFO container implemented as a circular buffer.
///
/// A bounded queue allocates its `capacity` slots upfront and its head and tail
/// wrap around them. An unbounded queue doubles its slots whenever they are all
/// occupied, unrolling the ring so that the head lands back at index 0
#[derive(Clone, Debug)]
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    /// Index of the oldest element
    head: usize,
    size: usize,
    capacity: usize,
}

impl<T> Queue<T> {
    /// Create a new unbounded queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a queue holding at most `capacity` elements (0 = unbounded)
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Queue {
            slots,
            head: 0,
            size: 0,
            capacity,
        }
    }

    /// Enqueue an element at the tail.
    /// Panics if the queue is bounded and full: use `try_push` to get an error instead
    pub fn push(&mut self, element: T) {
        assert!(
            !self.full(),
            "Queue overflow: capacity of {} reached",
            self.capacity
        );
        self.push_unchecked(element);
    }

    /// Enqueue an element at the tail, failing if the queue is bounded and full
    pub fn try_push(&mut self, element: T) -> Result<(), ContainerError> {
        if self.full() {
            return Err(ContainerError::Overflow {
                capacity: self.capacity,
            });
        }
        self.push_unchecked(element);
        Ok(())
    }

    /// Dequeue and return the element at the head
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        if self.size == 0 {
            return Err(ContainerError::Underflow);
        }

        let element = self.slots[self.head].take();
        self.size -= 1;
        self.head = if self.size == 0 {
            0
        } else {
            (self.head + 1) % self.slots.len()
        };
        element.ok_or(ContainerError::Underflow)
    }

    /// Peek at the element at the head (the next one to be popped)
    pub fn front(&self) -> Result<&T, ContainerError> {
        self.peek(0)
    }

    /// Peek at the element at the tail (the last one pushed)
    pub fn back(&self) -> Result<&T, ContainerError> {
        match self.size {
            0 => Err(ContainerError::Underflow),
            size => self.peek(size - 1),
        }
    }

    fn peek(&self, offset: usize) -> Result<&T, ContainerError> {
        if offset >= self.size {
            return Err(ContainerError::Underflow);
        }
        let index = (self.head + offset) % self.slots.len();
        self.slots[index].as_ref().ok_or(ContainerError::Underflow)
    }

    fn push_unchecked(&mut self, element: T) {
        if self.size == self.slots.len() {
            // Only reachable by unbounded queues: bounded ones are rejected as full before
            self.grow();
        }
        let tail = (self.head + self.size) % self.slots.len();
        self.slots[tail] = Some(element);
        self.size += 1;
    }

    fn grow(&mut self) {
        let old_len = self.slots.len();
        let new_len = (2 * old_len).max(MIN_SLOTS);
        let mut slots = Vec::with_capacity(new_len);
        for i in 0..self.size {
            slots.push(self.slots[(self.head + i) % old_len].take());
        }
        slots.resize_with(new_len, || None);
        self.slots = slots;
        self.head = 0;
    }
}

impl<T> Container for Queue<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}
