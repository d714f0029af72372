//! Adaptive probability table steering room footprint draws.

use rand_chacha::ChaCha8Rng;

use crate::types::RoomSize;

use super::random;

pub(super) const INITIAL_WEIGHT: f64 = 25.0;
pub(super) const WEIGHT_TOTAL: f64 = 100.0;

/// One weight per footprint. Placing a size halves its weight and hands the
/// subtracted mass evenly to the other three, so repeats of the same size
/// become progressively less likely within a single attempt.
#[derive(Clone, Debug)]
pub(super) struct SizeWeights {
    weights: [f64; 4],
}

impl SizeWeights {
    pub(super) fn new() -> Self {
        Self { weights: [INITIAL_WEIGHT; 4] }
    }

    pub(super) fn reset(&mut self) {
        self.weights = [INITIAL_WEIGHT; 4];
    }

    #[cfg(test)]
    pub(super) fn weight_of(&self, size: RoomSize) -> f64 {
        self.weights[size.index()]
    }

    pub(super) fn draw(&self, rng: &mut ChaCha8Rng) -> RoomSize {
        let roll = random::unit_f64(rng) * WEIGHT_TOTAL;
        let mut cursor = 0.0;
        for size in RoomSize::ALL {
            cursor += self.weights[size.index()];
            if roll < cursor {
                return size;
            }
        }
        panic!("footprint weights no longer cover the roll: {:?}", self.weights);
    }

    pub(super) fn record_placement(&mut self, placed: RoomSize) {
        let subtracted = self.weights[placed.index()] / 2.0;
        let share = subtracted / 3.0;
        self.weights[placed.index()] -= subtracted;
        for size in RoomSize::ALL {
            if size != placed {
                self.weights[size.index()] += share;
            }
        }
    }

    #[cfg(test)]
    fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}
