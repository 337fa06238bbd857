//! Build trees of known size, for tests and benchmarks
mod complete;
mod random;

pub use complete::*;
pub use random::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::iter::TreeIterator;

    #[test]
    fn sizes() {
        for num in vec![0, 1, 2, 3, 10, 1000] {
            assert_eq!(RandomTreeGenerator::new(num, 17).generate().len(), num);
            assert_eq!(CompleteTreeGenerator::new(num).generate().len(), num);
        }
    }

    #[test]
    fn same_seed_same_shape() {
        let a = RandomTreeGenerator::new(500, 17).generate();
        let b = RandomTreeGenerator::new(500, 17).generate();
        assert_eq!(a.pre_order().to_vec(&a), b.pre_order().to_vec(&b));
        assert_eq!(a.in_order().to_vec(&a), b.in_order().to_vec(&b));

        let c = RandomTreeGenerator::new(500, 18).generate();
        assert_ne!(a.in_order().to_vec(&a), c.in_order().to_vec(&c));
    }

    #[test]
    fn values_in_creation_order() {
        let tree = RandomTreeGenerator::new(100, 3).generate();
        let mut values = tree.pre_order().to_vec(&tree);
        assert_eq!(values[0], 0);
        values.sort();
        assert_eq!(values, (0..100).collect::<Vec<_>>());

        let tree = CompleteTreeGenerator::new(100).generate();
        assert_eq!(tree.level_order().to_vec(&tree), (0..100).collect::<Vec<_>>());
    }
}
