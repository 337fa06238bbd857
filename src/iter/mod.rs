//! Restartable, non-recursive traversals over a `Tree`.
//!
//! The iterators here do not borrow the tree between calls: they only remember the
//! root they started from and their own stack or queue, and receive the tree on
//! each call. The same iterator can thus be rewound and run again after the tree
//! was modified. Modifying the tree half-way through a traversal and then calling
//! `next` is allowed by the borrow checker but yields an unspecified sequence.

mod in_order;
mod level_order;
mod post_order;
mod pre_order;

pub use in_order::InOrder;
pub use level_order::LevelOrder;
pub use post_order::PostOrder;
pub use pre_order::PreOrder;

use crate::tree::{NodeId, NodeRef, Tree};

/// Incremental traversal of a tree in a fixed order
pub trait TreeIterator {
    /// Payload type of the traversed tree
    type Data;

    /// Reset to the first node of the sequence
    fn rewind(&mut self, tree: &Tree<Self::Data>);

    /// The node the iterator is on, or None once exhausted
    fn current(&self) -> Option<NodeId>;

    /// Move to the following node
    fn next(&mut self, tree: &Tree<Self::Data>);

    fn valid(&self) -> bool {
        self.current().is_some()
    }

    /// Visit every node in order from the start, until `visitor` returns false.
    /// After an early stop the iterator is left on the last visited node
    fn traverse<'a, F>(&mut self, tree: &'a Tree<Self::Data>, mut visitor: F)
    where
        F: FnMut(NodeRef<'a, Self::Data>) -> bool,
    {
        self.rewind(tree);
        while let Some(id) = self.current() {
            if !visitor(tree.node(id)) {
                return;
            }
            self.next(tree);
        }
    }

    /// Collect every value in order
    fn to_vec(&mut self, tree: &Tree<Self::Data>) -> Vec<Self::Data>
    where
        Self::Data: Clone,
    {
        let mut values = Vec::new();
        self.traverse(tree, |node| {
            values.push(node.data().clone());
            true
        });
        values
    }

    /// Rewind and expose the sequence as a standard iterator
    fn nodes<'a>(&'a mut self, tree: &'a Tree<Self::Data>) -> Nodes<'a, Self>
    where
        Self: Sized,
    {
        self.rewind(tree);
        Nodes { iter: self, tree }
    }
}

/// Adapter from a `TreeIterator` to `std::iter::Iterator`
pub struct Nodes<'a, I: TreeIterator>
where
    I::Data: 'a,
{
    iter: &'a mut I,
    tree: &'a Tree<I::Data>,
}

impl<'a, I: TreeIterator> Iterator for Nodes<'a, I>
where
    I::Data: 'a,
{
    type Item = NodeRef<'a, I::Data>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.iter.current()?;
        TreeIterator::next(&mut *self.iter, self.tree);
        Some(self.tree.node(id))
    }
}

impl<'a, I: TreeIterator> std::iter::FusedIterator for Nodes<'a, I> where I::Data: 'a {}
