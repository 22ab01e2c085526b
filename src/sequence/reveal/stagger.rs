use std::collections::BTreeMap;

use rand::{seq::SliceRandom, Rng};

/// Spread `max_delay_ms` evenly over `indices` in a random order.
///
/// The first index in the shuffled order gets 0 and the last gets the full
/// delay. A single index always starts immediately.
pub fn randomized_delays<R: Rng + ?Sized>(
    indices: &[usize],
    max_delay_ms: u32,
    rng: &mut R,
) -> BTreeMap<usize, u32> {
    let mut shuffled = indices.to_vec();
    shuffled.shuffle(rng);
    ordered_delays(&shuffled, max_delay_ms)
}

/// Spread `max_delay_ms` evenly over `indices` in the order given.
pub fn ordered_delays(indices: &[usize], max_delay_ms: u32) -> BTreeMap<usize, u32> {
    let last = indices.len().saturating_sub(1);
    indices
        .iter()
        .enumerate()
        .map(|(order, &index)| {
            let delay = if last == 0 {
                0
            } else {
                (order as f64 / last as f64 * max_delay_ms as f64).round() as u32
            };
            (index, delay)
        })
        .collect()
}

/// Fixed step per position, closest element first.
pub fn stepped_delays(indices: impl IntoIterator<Item = usize>, step_ms: u32) -> BTreeMap<usize, u32> {
    indices
        .into_iter()
        .enumerate()
        .map(|(order, index)| (index, order as u32 * step_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(randomized_delays(&[], 360, &mut rng).is_empty());
        let single = randomized_delays(&[4], 360, &mut rng);
        assert_eq!(single.get(&4), Some(&0));
    }

    #[test]
    fn test_delays_cover_the_full_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let indices: Vec<usize> = (0..6).collect();
        let delays = randomized_delays(&indices, 360, &mut rng);
        assert_eq!(delays.len(), 6);
        let mut values: Vec<u32> = delays.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![0, 72, 144, 216, 288, 360]);
    }

    #[test]
    fn test_same_seed_same_delays() {
        let indices: Vec<usize> = (10..20).collect();
        let a = randomized_delays(&indices, 420, &mut StdRng::seed_from_u64(3));
        let b = randomized_delays(&indices, 420, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordered_delays_round() {
        let delays = ordered_delays(&[9, 3, 5], 400);
        assert_eq!(delays[&9], 0);
        assert_eq!(delays[&3], 200);
        assert_eq!(delays[&5], 400);
        let thirds = ordered_delays(&[0, 1, 2, 3], 400);
        assert_eq!(thirds[&1], 133);
        assert_eq!(thirds[&2], 267);
    }

    #[test]
    fn test_stepped_delays() {
        let delays = stepped_delays([5, 2, 8], 42);
        assert_eq!(delays[&5], 0);
        assert_eq!(delays[&2], 42);
        assert_eq!(delays[&8], 84);
    }
}
