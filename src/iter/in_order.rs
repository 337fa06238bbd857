use super::TreeIterator;
use crate::linear::Stack;
use crate::tree::{NodeId, Tree};
use std::marker::PhantomData;

/// Depth-first traversal: left subtree, node, right subtree (LDR)
#[derive(Clone, Debug)]
pub struct InOrder<T> {
    root: Option<NodeId>,
    current: Option<NodeId>,
    /// Ancestors whose left subtree is being walked, not yet visited
    stack: Stack<NodeId>,
    _marker: PhantomData<T>,
}

impl<T> InOrder<T> {
    /// Create an iterator positioned on the leftmost node under `root`
    pub fn new(tree: &Tree<T>, root: Option<NodeId>) -> Self {
        let mut iter = InOrder {
            root,
            current: None,
            stack: Stack::new(),
            _marker: PhantomData,
        };
        iter.rewind(tree);
        iter
    }

    /// Stack the path from `current` down its left links, then visit the last
    /// node of the stack
    fn descend_left(&mut self, tree: &Tree<T>) {
        while let Some(id) = self.current {
            self.stack.push(id);
            self.current = tree.slot(id).left;
        }
        // An empty stack means the traversal is over
        self.current = self.stack.pop().ok();
    }
}

impl<T> TreeIterator for InOrder<T> {
    type Data = T;

    fn rewind(&mut self, tree: &Tree<T>) {
        self.current = self.root;
        self.stack = Stack::new();
        self.descend_left(tree);
    }

    fn current(&self) -> Option<NodeId> {
        self.current
    }

    fn next(&mut self, tree: &Tree<T>) {
        // The current node was just popped: its left subtree is done, explore the right one
        if let Some(id) = self.current {
            self.current = tree.slot(id).right;
            self.descend_left(tree);
        }
    }
}
