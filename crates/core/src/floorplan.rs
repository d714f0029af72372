//! Floor-plan generation domain split into coherent submodules.

pub mod config;
pub mod corridors;
pub mod model;
pub mod validator;

mod generator;
mod random;
mod weights;

pub use config::{AttemptFailure, FloorPlanConfig, GenerationError};
pub use corridors::{CorridorOpening, corridor_openings, unoccupied_cells};
pub use generator::FloorPlanGenerator;
pub use model::{FloorPlan, Room};
pub use validator::{ValidationReport, validate_floor_plan};

pub fn generate_floor_plan(
    config: FloorPlanConfig,
    seed: u64,
) -> Result<FloorPlan, GenerationError> {
    FloorPlanGenerator::new(config, seed).generate()
}
