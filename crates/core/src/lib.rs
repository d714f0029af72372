pub mod floorplan;
pub mod types;

pub use floorplan::{
    AttemptFailure, CorridorOpening, FloorPlan, FloorPlanConfig, FloorPlanGenerator,
    GenerationError, Room, ValidationReport, corridor_openings, generate_floor_plan,
    unoccupied_cells, validate_floor_plan,
};
pub use types::*;
