use super::TreeIterator;
use crate::linear::Stack;
use crate::tree::{NodeId, Tree};
use std::marker::PhantomData;

/// Depth-first traversal: left subtree, right subtree, node (LRD).
///
/// A node on top of the stack is visited once its right subtree is done, which is
/// the case when it has no right child or when that right child was the last node
/// visited
#[derive(Clone, Debug)]
pub struct PostOrder<T> {
    root: Option<NodeId>,
    current: Option<NodeId>,
    /// Last visited node
    previous: Option<NodeId>,
    stack: Stack<NodeId>,
    _marker: PhantomData<T>,
}

impl<T> PostOrder<T> {
    /// Create an iterator positioned on the first leaf reached from `root`
    pub fn new(tree: &Tree<T>, root: Option<NodeId>) -> Self {
        let mut iter = PostOrder {
            root,
            current: None,
            previous: None,
            stack: Stack::new(),
            _marker: PhantomData,
        };
        iter.rewind(tree);
        iter
    }

    fn push_left_path(&mut self, tree: &Tree<T>, mut run: Option<NodeId>) {
        while let Some(id) = run {
            self.stack.push(id);
            run = tree.slot(id).left;
        }
    }
}

impl<T> TreeIterator for PostOrder<T> {
    type Data = T;

    fn rewind(&mut self, tree: &Tree<T>) {
        self.current = None;
        self.previous = None;
        self.stack = Stack::new();
        self.push_left_path(tree, self.root);
        self.next(tree);
    }

    fn current(&self) -> Option<NodeId> {
        self.current
    }

    fn next(&mut self, tree: &Tree<T>) {
        loop {
            let top = match self.stack.top() {
                Ok(&id) => id,
                Err(_) => {
                    self.current = None;
                    return;
                }
            };

            let right = tree.slot(top).right;
            if right.is_none() || right == self.previous {
                // Coming back from the right subtree (or there is none)
                self.current = self.stack.pop().ok();
                self.previous = self.current;
                return;
            }

            // Coming back from the left subtree
            self.push_left_path(tree, right);
        }
    }
}
