//! Generation parameters and the failure surface of the attempt loop.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlanConfig {
    pub width: usize,
    pub height: usize,
    pub rooms_to_generate: usize,
    pub min_rooms_from_start: u32,
    pub max_attempts: usize,
}

impl Default for FloorPlanConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            rooms_to_generate: 12,
            min_rooms_from_start: 3,
            max_attempts: 64,
        }
    }
}

impl FloorPlanConfig {
    pub(super) fn ensure_valid(&self) -> Result<(), GenerationError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::InvalidConfig("grid dimensions must be non-zero"));
        }
        if self.rooms_to_generate == 0 {
            return Err(GenerationError::InvalidConfig("room target must be non-zero"));
        }
        if self.rooms_to_generate > self.width * self.height {
            return Err(GenerationError::InvalidConfig("room target exceeds grid capacity"));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig("attempt cap must be non-zero"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationError {
    InvalidConfig(&'static str),
    AttemptsExhausted { attempts: usize, last_failure: AttemptFailure },
}

/// Why a single bounded attempt was discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptFailure {
    TooFewRooms { placed: usize },
    NoEligibleBossRoom,
}
