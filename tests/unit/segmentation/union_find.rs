//! Tests for the union-find forest over provisional labels

#[cfg(test)]
mod tests {
    use ravenmatrix::segmentation::union_find::UnionFind;

    // Tests labels start at 1 because 0 is reserved for background
    // Verified by allocating from index 0
    #[test]
    fn test_labels_start_after_background() {
        let mut forest = UnionFind::new();

        assert!(forest.is_empty());
        assert_eq!(forest.make_label(), 1);
        assert_eq!(forest.make_label(), 2);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.find(0), 0);
    }

    // Tests the smaller root survives a union
    // Verified by keeping the root of the first argument instead
    #[test]
    fn test_union_keeps_smaller_root() {
        let mut forest = UnionFind::new();
        let a = forest.make_label();
        let b = forest.make_label();
        let c = forest.make_label();

        assert_eq!(forest.union(c, b), b);
        assert_eq!(forest.union(c, a), a);
        assert_eq!(forest.find(b), a);
        assert_eq!(forest.find(c), a);
    }

    // Tests flatten resolves chains so every label points straight at its root
    // Verified by attaching the smaller root beneath the larger one
    #[test]
    fn test_flatten_resolves_chains() {
        let mut forest = UnionFind::new();
        let labels: Vec<u32> = (0..6).map(|_| forest.make_label()).collect();

        for pair in labels.windows(2).rev() {
            if let [first, second] = pair {
                forest.union(*second, *first);
            }
        }
        let separate = forest.make_label();
        forest.flatten();

        for &label in &labels {
            assert_eq!(forest.find(label), 1);
        }
        assert_eq!(forest.find(separate), separate);
    }

    // Tests unknown labels are treated as their own roots
    // Verified by returning background for unknown labels
    #[test]
    fn test_find_unknown_label() {
        let forest = UnionFind::default();

        assert_eq!(forest.find(42), 42);
        assert_eq!(forest.to_string(), "UnionFind(0 labels)");
    }
}
