//! Order randomization for questions and answer options.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rng};

/// Returns a uniformly random permutation of `items`.
///
/// The input is left untouched. `SliceRandom::shuffle` is a Fisher-Yates
/// pass: each index from the back swaps with a random index at or before it.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.as_mut_slice().shuffle(rng);
    shuffled
}

/// Seedable permutation source owned by a quiz session.
#[derive(Clone)]
pub struct Shuffler {
    rng: StdRng,
}

impl Shuffler {
    /// A shuffler seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rng()),
        }
    }

    /// A reproducible shuffler.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        shuffle(items, &mut self.rng)
    }

    /// Random order of `len` positions, where `order[display] == original`.
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let identity: Vec<usize> = (0..len).collect();
        self.shuffle(&identity)
    }
}

impl fmt::Debug for Shuffler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffler").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_keeps_every_element() {
        let items = vec!["a", "b", "c", "c", "d", "e"];
        let mut shuffler = Shuffler::seeded(42);

        for _ in 0..50 {
            let mut shuffled = shuffler.shuffle(&items);
            assert_eq!(shuffled.len(), items.len());
            shuffled.sort_unstable();
            let mut expected = items.clone();
            expected.sort_unstable();
            assert_eq!(shuffled, expected);
        }
    }

    #[test]
    fn shuffle_does_not_touch_input() {
        let items = [1, 2, 3, 4, 5];
        let _ = Shuffler::seeded(1).shuffle(&items);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn shuffle_is_not_always_identity() {
        let items: Vec<u32> = (0..4).collect();
        let mut shuffler = Shuffler::from_entropy();

        let moved = (0..200).any(|_| shuffler.shuffle(&items) != items);
        assert!(moved);
    }

    #[test]
    fn seeded_shufflers_agree() {
        let items: Vec<u32> = (0..20).collect();
        let first = Shuffler::seeded(9).shuffle(&items);
        let second = Shuffler::from_seed(Some(9)).shuffle(&items);
        assert_eq!(first, second);
    }

    #[test]
    fn short_inputs_are_returned_as_is() {
        let mut shuffler = Shuffler::seeded(0);
        assert!(shuffler.shuffle::<u8>(&[]).is_empty());
        assert_eq!(shuffler.shuffle(&[7]), vec![7]);
    }

    #[test]
    fn permutation_covers_all_positions() {
        let mut order = Shuffler::seeded(5).permutation(4);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
