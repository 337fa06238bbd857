use crate::tree::Tree;

/// Builds a complete tree of `num` nodes holding 0, 1, 2... in level order
pub struct CompleteTreeGenerator {
    num: usize,
}

impl CompleteTreeGenerator {
    pub fn new(num: usize) -> CompleteTreeGenerator {
        CompleteTreeGenerator { num }
    }

    pub fn generate(self) -> Tree<usize> {
        (0..self.num).collect()
    }
}
