use super::TreeIterator;
use crate::linear::Queue;
use crate::tree::{NodeId, Tree};
use std::marker::PhantomData;

/// Breadth-first traversal: level by level, each level left to right
#[derive(Clone, Debug)]
pub struct LevelOrder<T> {
    root: Option<NodeId>,
    current: Option<NodeId>,
    /// Discovered nodes not yet visited
    queue: Queue<NodeId>,
    _marker: PhantomData<T>,
}

impl<T> LevelOrder<T> {
    /// Create an iterator positioned on `root`
    pub fn new(tree: &Tree<T>, root: Option<NodeId>) -> Self {
        let mut iter = LevelOrder {
            root,
            current: None,
            queue: Queue::new(),
            _marker: PhantomData,
        };
        iter.rewind(tree);
        iter
    }
}

impl<T> TreeIterator for LevelOrder<T> {
    type Data = T;

    fn rewind(&mut self, tree: &Tree<T>) {
        self.queue = Queue::new();
        if let Some(root) = self.root {
            self.queue.push(root);
        }
        self.next(tree);
    }

    fn current(&self) -> Option<NodeId> {
        self.current
    }

    fn next(&mut self, tree: &Tree<T>) {
        self.current = match self.queue.pop() {
            Ok(id) => {
                for child in tree.node(id).children() {
                    self.queue.push(child);
                }
                Some(id)
            }
            // Nothing left to discover
            Err(_) => None,
        };
    }
}
