//! Deterministic draw helpers over the generator's stream cipher RNG.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub(super) fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub(super) fn range_usize(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = max_value - min_value + 1;
    min_value + (rng.next_u64() as usize % range_size)
}

pub(super) fn coin_flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}

/// Uniform draw in `[0, 1)` built from the top 53 bits of one output word.
pub(super) fn unit_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
}

pub(super) fn pick<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

pub(super) fn shuffle<T>(rng: &mut ChaCha8Rng, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_u64() as usize % (i + 1);
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_usize_stays_inside_requested_bounds() {
        let mut rng = rng_from_seed(12_345);
        for _ in 0..100 {
            let value = range_usize(&mut rng, 7, 13);
            assert!((7..=13).contains(&value));
        }
    }

    #[test]
    fn unit_f64_stays_in_half_open_interval() {
        let mut rng = rng_from_seed(9);
        for _ in 0..1_000 {
            let value = unit_f64(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn coin_flip_lands_on_both_sides() {
        let mut rng = rng_from_seed(7);
        let mut heads = 0;
        let mut tails = 0;
        for _ in 0..200 {
            if coin_flip(&mut rng) {
                heads += 1;
            } else {
                tails += 1;
            }
        }
        assert!(heads > 0 && tails > 0);
    }

    #[test]
    fn shuffle_permutes_without_losing_elements() {
        let mut rng = rng_from_seed(31);
        let mut values: Vec<u32> = (0..16).collect();
        shuffle(&mut rng, &mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u32>>());
    }

    #[test]
    fn same_seed_replays_the_same_draw_sequence() {
        let mut a = rng_from_seed(404);
        let mut b = rng_from_seed(404);
        for _ in 0..50 {
            assert_eq!(range_usize(&mut a, 0, 99), range_usize(&mut b, 0, 99));
        }
    }
}
