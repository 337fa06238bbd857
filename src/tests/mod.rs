mod properties;

use crate::tree::{NodeId, Side, Tree};

/// Build the reference tree:
/// ```text
///          1
///        /   \
///       2     3
///      / \   /
///     4   5 6
///        / \ / \
///       7  8 9  10
/// ```
pub(crate) fn sample_tree() -> Tree<i32> {
    let mut tree = Tree::new();
    let n: Vec<NodeId> = (0..=10).map(|i| tree.create_node(i)).collect();
    tree.node_mut(n[1])
        .set_left(Some(n[2]))
        .set_right(Some(n[3]));
    tree.node_mut(n[2])
        .set_left(Some(n[4]))
        .set_right(Some(n[5]));
    tree.node_mut(n[5])
        .set_left(Some(n[7]))
        .set_right(Some(n[8]));
    tree.node_mut(n[3]).set_left(Some(n[6]));
    tree.node_mut(n[6])
        .set_left(Some(n[9]))
        .set_right(Some(n[10]));
    tree.attach(Some(n[1]));
    tree
}

/// A degenerate tree 0 -> 1 -> ... -> len-1 following only left links
pub(crate) fn left_spine(len: i32) -> Tree<i32> {
    spine(len, Side::Left)
}

/// A degenerate tree 0 -> 1 -> ... -> len-1 following only right links
pub(crate) fn right_spine(len: i32) -> Tree<i32> {
    spine(len, Side::Right)
}

fn spine(len: i32, side: Side) -> Tree<i32> {
    let mut tree = Tree::new();
    let mut last: Option<NodeId> = None;
    for i in 0..len {
        let id = tree.create_node(i);
        match last {
            None => tree.attach(Some(id)),
            Some(parent) => tree.set_child(parent, side, Some(id)),
        }
        last = Some(id);
    }
    tree
}
