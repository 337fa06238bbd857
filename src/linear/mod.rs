mod queue;
mod stack;

pub use queue::Queue;
pub use stack::Stack;

/// Size and capacity bookkeeping shared by `Stack` and `Queue`.
/// A capacity of zero means the container is unbounded
pub trait Container {
    fn size(&self) -> usize;

    fn capacity(&self) -> usize;

    fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Return whether a bounded container cannot take another element.
    /// Unbounded containers are never full
    fn full(&self) -> bool {
        self.capacity() > 0 && self.size() == self.capacity()
    }
}
