use crate::iter::TreeIterator;
use crate::tree::{NodeId, NodeRef, Side, Tree};
use proptest::prelude::*;

/// Grow a tree of `choices.len() + 1` nodes holding 0, 1, 2... in creation
/// order, each new node taking one of the free child slots chosen by `choices`
fn arbitrary_shape(choices: &[usize]) -> Tree<usize> {
    let mut tree = Tree::new();
    let root = tree.create_node(0);
    tree.attach(Some(root));
    let mut free: Vec<(NodeId, Side)> = vec![(root, Side::Left), (root, Side::Right)];
    for (i, choice) in choices.iter().enumerate() {
        let (parent, side) = free.swap_remove(choice % free.len());
        let id = tree.create_node(i + 1);
        tree.set_child(parent, side, Some(id));
        free.push((id, Side::Left));
        free.push((id, Side::Right));
    }
    tree
}

fn pre_order(node: Option<NodeRef<usize>>, out: &mut Vec<usize>) {
    if let Some(node) = node {
        out.push(*node.data());
        pre_order(node.left(), out);
        pre_order(node.right(), out);
    }
}

fn in_order(node: Option<NodeRef<usize>>, out: &mut Vec<usize>) {
    if let Some(node) = node {
        in_order(node.left(), out);
        out.push(*node.data());
        in_order(node.right(), out);
    }
}

fn post_order(node: Option<NodeRef<usize>>, out: &mut Vec<usize>) {
    if let Some(node) = node {
        post_order(node.left(), out);
        post_order(node.right(), out);
        out.push(*node.data());
    }
}

fn level_order(tree: &Tree<usize>) -> Vec<usize> {
    let mut out = vec![];
    let mut level: Vec<NodeRef<usize>> = tree.root().into_iter().collect();
    while !level.is_empty() {
        out.extend(level.iter().map(|node| *node.data()));
        level = level
            .iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    out
}

fn reference(order: fn(Option<NodeRef<usize>>, &mut Vec<usize>), tree: &Tree<usize>) -> Vec<usize> {
    let mut out = vec![];
    order(tree.root(), &mut out);
    out
}

proptest! {
    #[test]
    fn traversals_match_recursion(choices in prop::collection::vec(0..1000usize, 0..200)) {
        let tree = arbitrary_shape(&choices);
        prop_assert_eq!(tree.pre_order().to_vec(&tree), reference(pre_order, &tree));
        prop_assert_eq!(tree.in_order().to_vec(&tree), reference(in_order, &tree));
        prop_assert_eq!(tree.post_order().to_vec(&tree), reference(post_order, &tree));
        prop_assert_eq!(tree.level_order().to_vec(&tree), level_order(&tree));
        prop_assert_eq!(tree.len(), choices.len() + 1);
    }

    #[test]
    fn nodes_match_to_vec(choices in prop::collection::vec(0..1000usize, 0..100)) {
        let tree = arbitrary_shape(&choices);
        let mut iter = tree.post_order();
        let values: Vec<usize> = iter.nodes(&tree).map(|node| *node.data()).collect();
        prop_assert_eq!(values, iter.to_vec(&tree));
    }

    #[test]
    fn resume_after_stop(choices in prop::collection::vec(0..1000usize, 0..100), stop in 0..100usize) {
        let tree = arbitrary_shape(&choices);
        let stop = stop % (choices.len() + 1);
        let mut iter = tree.in_order();
        let mut values = vec![];
        iter.traverse(&tree, |node| {
            values.push(*node.data());
            values.len() <= stop
        });
        iter.next(&tree);
        while let Some(id) = iter.current() {
            values.push(*tree.node(id).data());
            iter.next(&tree);
        }
        prop_assert_eq!(values, reference(in_order, &tree));
    }

    #[test]
    fn insert_keeps_complete_shape(len in 1..300usize) {
        let tree: Tree<usize> = (0..len).collect();
        let mut iter = tree.level_order();
        let nodes: Vec<NodeRef<usize>> = iter.nodes(&tree).collect();
        prop_assert_eq!(nodes.len(), len);
        for (k, node) in nodes.iter().enumerate() {
            prop_assert_eq!(*node.data(), k);
            if k > 0 {
                prop_assert_eq!(node.parent(), Some(nodes[(k - 1) / 2]));
            }
        }
        prop_assert_eq!(tree.deepest().map(|n| *n.data()), Some(len - 1));
    }

    #[test]
    fn delete_removes_one_value(choices in prop::collection::vec(0..1000usize, 0..100), target in 0..150usize) {
        let mut tree = arbitrary_shape(&choices);
        let len = choices.len() + 1;
        let deleted = tree.delete(&target);
        let mut remaining = tree.level_order().to_vec(&tree);
        remaining.sort();
        if target < len {
            prop_assert_eq!(deleted, Some(target));
            let expected: Vec<usize> = (0..len).filter(|&v| v != target).collect();
            prop_assert_eq!(remaining, expected);
        } else {
            prop_assert_eq!(deleted, None);
            prop_assert_eq!(remaining, (0..len).collect::<Vec<_>>());
        }
    }
}
