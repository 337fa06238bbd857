use crate::tree::{NodeId, Side, Tree};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Builds a tree of `num` nodes with an arbitrary shape. Nodes hold 0, 1, 2...
/// in creation order and each one is linked to a child slot picked uniformly
/// among the free ones, so any parent comes before its children in pre-order
pub struct RandomTreeGenerator {
    num: usize,
    rng: Pcg64,
}

impl RandomTreeGenerator {
    pub fn new(num: usize, seed: u64) -> RandomTreeGenerator {
        RandomTreeGenerator {
            num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn generate(mut self) -> Tree<usize> {
        let mut tree = Tree::new();
        if self.num == 0 {
            return tree;
        }

        let root = tree.create_node(0);
        tree.attach(Some(root));
        let mut free: Vec<(NodeId, Side)> = vec![(root, Side::Left), (root, Side::Right)];
        for value in 1..self.num {
            let (parent, side) = free.swap_remove(self.rng.gen_range(0, free.len()));
            let id = tree.create_node(value);
            tree.set_child(parent, side, Some(id));
            free.push((id, Side::Left));
            free.push((id, Side::Right));
        }
        debug!("generated random tree of {} nodes", self.num);
        tree
    }
}
