use super::{NodeId, Side, Tree};
use arrayvec::ArrayVec;
use std::fmt;

/// A node as stored in the arena
#[derive(Clone)]
pub(crate) struct NodeData<T> {
    pub(crate) data: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> NodeData<T> {
    pub(super) fn new(data: T) -> Self {
        NodeData {
            data,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(super) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(super) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Read-only view of a node, borrowing its tree
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &'a T {
        &self.tree.slot(self.id).data
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.tree.slot(self.id).parent)
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.tree.slot(self.id).left)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.link(self.tree.slot(self.id).right)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a, T>> {
        self.link(self.tree.slot(self.id).child(side))
    }

    /// The existing children, left one first
    pub fn children(&self) -> ArrayVec<[NodeId; 2]> {
        let slot = self.tree.slot(self.id);
        let mut children = ArrayVec::new();
        children.extend(slot.left);
        children.extend(slot.right);
        children
    }

    pub fn is_leaf(&self) -> bool {
        let slot = self.tree.slot(self.id);
        slot.left.is_none() && slot.right.is_none()
    }

    fn link(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef::new(self.tree, id))
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        NodeRef {
            tree: self.tree,
            id: self.id,
        }
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> PartialEq for NodeRef<'a, T> {
    /// Two references are equal when they point to the same node of the same tree
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("data", self.data())
            .finish()
    }
}

/// Mutable access to a node. The setters consume and return the handle so that
/// a subtree can be linked up in a single expression
pub struct NodeMut<'a, T> {
    tree: &'a mut Tree<T>,
    id: NodeId,
}

impl<'a, T> NodeMut<'a, T> {
    pub(super) fn new(tree: &'a mut Tree<T>, id: NodeId) -> Self {
        NodeMut { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &T {
        &self.tree.slot(self.id).data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.tree.slot_mut(self.id).data
    }

    /// Replace the payload
    pub fn set_data(self, data: T) -> Self {
        self.tree.slot_mut(self.id).data = data;
        self
    }

    /// Install `child` as the left child, making this node its parent
    pub fn set_left(self, child: Option<NodeId>) -> Self {
        self.tree.set_child(self.id, Side::Left, child);
        self
    }

    /// Install `child` as the right child, making this node its parent
    pub fn set_right(self, child: Option<NodeId>) -> Self {
        self.tree.set_child(self.id, Side::Right, child);
        self
    }

    pub fn to_ref(&self) -> NodeRef<'_, T> {
        NodeRef::new(&*self.tree, self.id)
    }
}
