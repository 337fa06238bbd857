use super::node::{NodeData, NodeMut, NodeRef};
use super::{NodeId, Side};
use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder, TreeIterator};
use generational_arena::Arena;
use log::trace;
use std::cmp::Ordering;
use std::mem;

/// A binary tree whose nodes live in an arena and link back to their parent.
///
/// This is not a search tree: `insert` fills the first free child slot in level
/// order, so a tree grown only through `insert` and `delete` keeps a complete
/// shape, and `min`, `max` and `find` scan every node in level order.
///
/// Nodes can also be created detached with `create_node` and linked by hand
/// through `node_mut`. In that case no check is made against linking a node under
/// two parents or creating a cycle: both are logical errors
#[derive(Clone)]
pub struct Tree<T> {
    /// Slots freed by `delete` are reused under a new generation
    nodes: Arena<NodeData<T>>,
    root: Option<NodeId>,
}

impl<T> Tree<T> {
    /// Create a new empty tree
    pub fn new() -> Self {
        Tree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Allocate a detached node in the arena. It becomes part of the tree only
    /// once linked under a reachable node or attached as root
    pub fn create_node(&mut self, data: T) -> NodeId {
        NodeId(self.nodes.insert(NodeData::new(data)))
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| self.node(id))
    }

    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// Replace the root. The previous root subtree is left untouched, but is no
    /// longer reachable from this tree
    pub fn attach(&mut self, root: Option<NodeId>) {
        if let Some(id) = root {
            // Fail now rather than on the next traversal
            self.slot(id);
        }
        trace!("attach root {:?} (was {:?})", root, self.root);
        self.root = root;
    }

    /// Return the node behind the handle.
    /// Panics if the handle is stale
    pub fn node(&self, id: NodeId) -> NodeRef<'_, T> {
        self.slot(id);
        NodeRef::new(self, id)
    }

    /// Return the node behind the handle, or None if it was removed, even when
    /// its slot was given to another node since
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        if self.nodes.contains(id.0) {
            Some(NodeRef::new(self, id))
        } else {
            None
        }
    }

    /// Return a mutable handle to the node.
    /// Panics if the handle is stale
    pub fn node_mut(&mut self, id: NodeId) -> NodeMut<'_, T> {
        self.slot(id);
        NodeMut::new(self, id)
    }

    /// Install `child` on the given side of `parent` and make `parent` its parent.
    /// The replaced child, if any, loses its parent link
    pub fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        let replaced = mem::replace(self.slot_mut(parent).child_mut(side), child);

        if let Some(old) = replaced {
            let parent_slot = self.slot(parent);
            let still_linked = parent_slot.left == Some(old) || parent_slot.right == Some(old);
            if !still_linked && self.slot(old).parent == Some(parent) {
                self.slot_mut(old).parent = None;
            }
        }

        if let Some(child) = child {
            self.slot_mut(child).parent = Some(parent);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Return the number of nodes reachable from the root.
    /// This walks the whole tree
    pub fn len(&self) -> usize {
        let mut len = 0;
        self.level_order().traverse(self, |_| {
            len += 1;
            true
        });
        len
    }

    pub fn pre_order(&self) -> PreOrder<T> {
        PreOrder::new(self, self.root)
    }

    pub fn in_order(&self) -> InOrder<T> {
        InOrder::new(self, self.root)
    }

    pub fn post_order(&self) -> PostOrder<T> {
        PostOrder::new(self, self.root)
    }

    pub fn level_order(&self) -> LevelOrder<T> {
        LevelOrder::new(self, self.root)
    }

    /// Find the node holding the smallest value according to `compare`.
    /// If several nodes hold it, the first one in level order wins.
    /// Return None if and only if the tree is empty
    pub fn min_by<F>(&self, mut compare: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut min = self.root()?;
        self.level_order().traverse(self, |node| {
            if compare(min.data(), node.data()) == Ordering::Greater {
                min = node;
            }
            true
        });
        Some(min)
    }

    /// Find the node holding the largest value according to `compare`.
    /// If several nodes hold it, the first one in level order wins.
    /// Return None if and only if the tree is empty
    pub fn max_by<F>(&self, mut compare: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut max = self.root()?;
        self.level_order().traverse(self, |node| {
            if compare(max.data(), node.data()) == Ordering::Less {
                max = node;
            }
            true
        });
        Some(max)
    }

    /// Find the first node in level order such that `compare(value, node)` is `Equal`
    pub fn find_by<F>(&self, value: &T, mut compare: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut found = None;
        self.level_order().traverse(self, |node| {
            if compare(value, node.data()) == Ordering::Equal {
                found = Some(node);
                return false;
            }
            true
        });
        found
    }

    /// Insert a value in the first free child slot in level order
    /// (the root, if the tree is empty), returning the new node
    pub fn insert(&mut self, value: T) -> NodeId {
        let vacancy = self.first_vacancy();
        let id = self.create_node(value);
        match vacancy {
            None => {
                trace!("insert {} as root", id);
                self.root = Some(id);
            }
            Some((parent, side)) => {
                trace!("insert {} as {:?} child of {}", id, side, parent);
                self.set_child(parent, side, Some(id));
            }
        }
        id
    }

    /// Delete the first node in level order matching `value`, by moving the data
    /// of the deepest node into it and removing the deepest node instead.
    /// Return the deleted value, or None if nothing matched
    pub fn delete_by<F>(&mut self, value: &T, compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let target = self.find_by(value, compare)?.id();
        let deepest = self.deepest()?.id();
        trace!("delete {}: deepest node is {}", target, deepest);

        let moved = self.remove_leaf(deepest);
        if target == deepest {
            Some(moved)
        } else {
            Some(mem::replace(&mut self.slot_mut(target).data, moved))
        }
    }

    /// The last node of a level-order traversal: the rightmost one on the
    /// deepest level for a complete tree
    pub fn deepest(&self) -> Option<NodeRef<'_, T>> {
        let mut deepest = None;
        self.level_order().traverse(self, |node| {
            deepest = Some(node);
            true
        });
        deepest
    }

    pub(crate) fn slot(&self, id: NodeId) -> &NodeData<T> {
        match self.nodes.get(id.0) {
            Some(node) => node,
            None => panic!("Node handle {} is stale or belongs to another tree", id),
        }
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut NodeData<T> {
        match self.nodes.get_mut(id.0) {
            Some(node) => node,
            None => panic!("Node handle {} is stale or belongs to another tree", id),
        }
    }

    /// First node in level order missing a child, and the missing side
    fn first_vacancy(&self) -> Option<(NodeId, Side)> {
        let mut vacancy = None;
        self.level_order().traverse(self, |node| {
            vacancy = if node.left().is_none() {
                Some((node.id(), Side::Left))
            } else if node.right().is_none() {
                Some((node.id(), Side::Right))
            } else {
                None
            };
            vacancy.is_none()
        });
        vacancy
    }

    /// Unlink a leaf from its parent (or from the root) and free its slot
    fn remove_leaf(&mut self, id: NodeId) -> T {
        debug_assert!(self.node(id).is_leaf());
        if let Some(parent) = self.slot(id).parent {
            let parent_slot = self.slot_mut(parent);
            if parent_slot.left == Some(id) {
                parent_slot.left = None;
            }
            if parent_slot.right == Some(id) {
                parent_slot.right = None;
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        match self.nodes.remove(id.0) {
            Some(node) => node.data,
            None => panic!("Node handle {} is stale or belongs to another tree", id),
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Same as `min_by`, using the natural ordering
    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        self.min_by(T::cmp)
    }

    /// Same as `max_by`, using the natural ordering
    pub fn max(&self) -> Option<NodeRef<'_, T>> {
        self.max_by(T::cmp)
    }

    /// Same as `find_by`, using the natural ordering
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find_by(value, T::cmp)
    }

    /// Same as `delete_by`, using the natural ordering
    pub fn delete(&mut self, value: &T) -> Option<T> {
        self.delete_by(value, T::cmp)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T> std::iter::FromIterator<T> for Tree<T> {
    /// Build a complete tree, inserting the values in level order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}
