//! Unbiased permutation of a turn's choices for display.
//!
//! Called once per turn-entry, never per render, so the displayed order is
//! stable while the player decides and each turn, including revisits after
//! a reset, gets a fresh, independent permutation.

use rand::Rng;

/// Return a uniformly random permutation of `items`.
///
/// Fisher–Yates over a clone: for each index from the last down to 1, swap
/// with a uniformly chosen index at or below it. The input slice is never
/// mutated.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}
