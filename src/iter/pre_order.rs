use super::TreeIterator;
use crate::linear::Stack;
use crate::tree::{NodeId, Tree};
use std::marker::PhantomData;

/// Depth-first traversal: node, left subtree, right subtree (DLR)
#[derive(Clone, Debug)]
pub struct PreOrder<T> {
    root: Option<NodeId>,
    current: Option<NodeId>,
    /// Visited nodes whose right subtree is still pending
    stack: Stack<NodeId>,
    _marker: PhantomData<T>,
}

impl<T> PreOrder<T> {
    /// Create an iterator positioned on `root`
    pub fn new(tree: &Tree<T>, root: Option<NodeId>) -> Self {
        let mut iter = PreOrder {
            root,
            current: None,
            stack: Stack::new(),
            _marker: PhantomData,
        };
        iter.rewind(tree);
        iter
    }
}

impl<T> TreeIterator for PreOrder<T> {
    type Data = T;

    fn rewind(&mut self, _tree: &Tree<T>) {
        self.current = self.root;
        self.stack = Stack::new();
    }

    fn current(&self) -> Option<NodeId> {
        self.current
    }

    fn next(&mut self, tree: &Tree<T>) {
        // Always go left first
        if let Some(id) = self.current {
            self.stack.push(id);
            self.current = tree.slot(id).left;
            if self.current.is_some() {
                return;
            }
        }

        // Then take the right subtree of the closest pending node
        while self.current.is_none() {
            match self.stack.pop() {
                Ok(id) => self.current = tree.slot(id).right,
                // Nothing pending: the traversal is over
                Err(_) => return,
            }
        }
    }
}
