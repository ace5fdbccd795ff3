//! Shuffle play order
//!
//! A permutation of natural catalog indices that defines playback order
//! while shuffle is enabled. With shuffle off the order is conceptually the
//! identity; callers resolve positions through the catalog directly.

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Permutation of `0..n` natural indices
#[derive(Debug, Clone, Default)]
pub struct PlayOrder {
    order: Vec<usize>,
}

impl PlayOrder {
    /// Create an empty order
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Rebuild as a fresh uniform permutation of `0..size`
    ///
    /// Allocates the identity sequence and applies a Fisher-Yates shuffle.
    pub fn regenerate(&mut self, size: usize) {
        self.order = (0..size).collect();
        self.order.shuffle(&mut thread_rng());
    }

    /// Reset to empty (identity semantics until regenerated)
    pub fn reset(&mut self) {
        self.order.clear();
    }

    /// Natural index stored at an effective-order slot
    pub fn resolve(&self, slot: usize) -> Option<usize> {
        self.order.get(slot).copied()
    }

    /// Effective-order slot that holds a natural index
    pub fn slot_of(&self, natural: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == natural)
    }

    /// Length of the permutation
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the order is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The permutation as a slice of natural indices
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn assert_is_permutation(order: &PlayOrder, size: usize) {
        assert_eq!(order.len(), size);
        let seen: HashSet<usize> = order.as_slice().iter().copied().collect();
        assert_eq!(seen.len(), size);
        assert!(order.as_slice().iter().all(|&i| i < size));
    }

    #[test]
    fn regenerate_yields_permutation_for_edge_sizes() {
        let mut order = PlayOrder::new();
        for size in [0, 1, 2, 50] {
            order.regenerate(size);
            assert_is_permutation(&order, size);
        }
    }

    #[test]
    fn regenerate_replaces_previous_order() {
        let mut order = PlayOrder::new();
        order.regenerate(50);
        order.regenerate(3);
        assert_is_permutation(&order, 3);
    }

    #[test]
    fn slot_and_resolve_are_inverse() {
        let mut order = PlayOrder::new();
        order.regenerate(10);
        for natural in 0..10 {
            let slot = order.slot_of(natural).unwrap();
            assert_eq!(order.resolve(slot), Some(natural));
        }
    }

    #[test]
    fn reset_clears() {
        let mut order = PlayOrder::new();
        order.regenerate(5);
        order.reset();
        assert!(order.is_empty());
        assert_eq!(order.resolve(0), None);
    }

    #[test]
    fn repeated_regeneration_stays_valid() {
        // A new permutation every toggle; each must stay a valid
        // permutation even if it happens to equal the previous one.
        let mut order = PlayOrder::new();
        for _ in 0..20 {
            order.regenerate(8);
            assert_is_permutation(&order, 8);
        }
    }

    proptest! {
        #[test]
        fn regenerate_is_always_a_permutation(size in 0usize..128) {
            let mut order = PlayOrder::new();
            order.regenerate(size);
            assert_is_permutation(&order, size);
        }
    }
}
