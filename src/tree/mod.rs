mod arena;
mod node;

pub use arena::Tree;
pub use node::{NodeMut, NodeRef};

use generational_arena::Index;
use std::fmt;

/// Handle to a node stored in a `Tree`.
///
/// Handles stay valid while the node is in the tree's arena. A node removed by
/// `Tree::delete` gives its slot back to the arena, after which the old handle is
/// stale, even once a new node takes the same slot: the handle also carries the
/// slot generation it was issued for
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(Index);

impl NodeId {
    /// Position of the node in the arena, shared with any node that reuses the slot
    pub fn index(self) -> usize {
        self.0.into_raw_parts().0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (index, generation) = self.0.into_raw_parts();
        write!(f, "#{}@{}", index, generation)
    }
}

/// Which child link of a node
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}
