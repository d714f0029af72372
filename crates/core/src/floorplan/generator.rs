//! Breadth-first, probability-weighted construction of floor plans.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;

use crate::types::{Direction, GridPos, RoomId, RoomKind, RoomSize};

use super::config::{AttemptFailure, FloorPlanConfig, GenerationError};
use super::model::FloorPlan;
use super::random;
use super::weights::SizeWeights;

pub struct FloorPlanGenerator {
    config: FloorPlanConfig,
    rng: ChaCha8Rng,
    weights: SizeWeights,
}

impl FloorPlanGenerator {
    pub fn new(config: FloorPlanConfig, seed: u64) -> Self {
        Self { config, rng: random::rng_from_seed(seed), weights: SizeWeights::new() }
    }

    /// Runs bounded generation attempts until one yields a plan with a
    /// legally placed boss room. Attempts that run out of expandable rooms
    /// or boss candidates are discarded whole and retried.
    pub fn generate(&mut self) -> Result<FloorPlan, GenerationError> {
        self.config.ensure_valid()?;

        let mut last_failure = AttemptFailure::TooFewRooms { placed: 0 };
        for _ in 0..self.config.max_attempts {
            match self.run_attempt() {
                Ok(plan) => return Ok(plan),
                Err(failure) => last_failure = failure,
            }
        }
        Err(GenerationError::AttemptsExhausted { attempts: self.config.max_attempts, last_failure })
    }

    fn run_attempt(&mut self) -> Result<FloorPlan, AttemptFailure> {
        // The weight table carries state within one attempt only.
        self.weights.reset();

        let mut plan = FloorPlan::new(self.config.width, self.config.height);

        let start_pos = GridPos::new(
            random::range_usize(&mut self.rng, 0, self.config.height - 1) as i32,
            random::range_usize(&mut self.rng, 0, self.config.width - 1) as i32,
        );
        let start = plan.insert_room(RoomSize::Single, start_pos, None, RoomKind::Start);
        plan.start_room = start;

        let mut queue = VecDeque::from([start]);
        let mut placed = 0;

        while placed < self.config.rooms_to_generate {
            let Some(current) = queue.pop_front() else {
                return Err(AttemptFailure::TooFewRooms { placed });
            };

            let mut accepted_children = 0;
            for cell in neighbouring_cells(&plan, current) {
                if placed >= self.config.rooms_to_generate {
                    break;
                }
                if let Some(child) = self.try_generate_room(&mut plan, cell, current) {
                    queue.push_back(child);
                    placed += 1;
                    accepted_children += 1;
                }
            }

            if accepted_children == 0 {
                plan.dead_ends.push(current);
            }
        }

        // Rooms never dequeued had no chance to expand; they are dead ends
        // by the same zero-children rule.
        plan.dead_ends.extend(queue.drain(..));

        if !self.assign_boss(&mut plan) {
            return Err(AttemptFailure::NoEligibleBossRoom);
        }
        Ok(plan)
    }

    /// One expansion attempt through a single exit cell. Declines half the
    /// time before even looking at candidates, then draws footprint sizes
    /// from the weight table until a placeable one comes up.
    fn try_generate_room(
        &mut self,
        plan: &mut FloorPlan,
        cell: GridPos,
        parent: RoomId,
    ) -> Option<RoomId> {
        if !plan.is_cell_free(cell) {
            return None;
        }
        if random::coin_flip(&mut self.rng) {
            return None;
        }

        let candidates = candidate_placements(plan, cell);
        if candidates.is_empty() {
            return None;
        }

        let (size, position) = loop {
            let drawn = self.weights.draw(&mut self.rng);
            let placeable: Vec<GridPos> = candidates
                .iter()
                .filter(|(size, _)| *size == drawn)
                .map(|(_, origin)| *origin)
                .collect();
            if !placeable.is_empty() {
                break (drawn, random::pick(&mut self.rng, &placeable));
            }
        };

        let id = plan.insert_room(size, position, Some(parent), RoomKind::Normal);
        self.weights.record_placement(size);
        Some(id)
    }

    fn assign_boss(&mut self, plan: &mut FloorPlan) -> bool {
        let mut candidates = plan.dead_ends.clone();
        random::shuffle(&mut self.rng, &mut candidates);
        for id in candidates {
            if plan.distance_from_start(id) > self.config.min_rooms_from_start {
                plan.mark_boss(id);
                return true;
            }
        }
        false
    }
}

/// All in-bounds cells orthogonally adjacent to the room but not inside it,
/// in row-major cell order. Rectangular footprints touch each perimeter
/// cell through exactly one side, so the enumeration is duplicate-free.
fn neighbouring_cells(plan: &FloorPlan, id: RoomId) -> Vec<GridPos> {
    let room = &plan.rooms[id];
    let mut cells = Vec::new();
    for cell in room.cell_positions() {
        for direction in Direction::ALL {
            let neighbour = cell.step(direction);
            if room.occupies(neighbour) || !plan.in_bounds(neighbour) {
                continue;
            }
            cells.push(neighbour);
        }
    }
    cells
}

/// The nine placements whose footprint covers `cell`: one 1x1, two each of
/// the 2x1 and 1x2 footprints, four 2x2. Only fully in-bounds, fully
/// unoccupied placements survive.
fn candidate_placements(plan: &FloorPlan, cell: GridPos) -> Vec<(RoomSize, GridPos)> {
    const PLACEMENTS: [(RoomSize, (i32, i32)); 9] = [
        (RoomSize::Single, (0, 0)),
        (RoomSize::Wide, (0, 0)),
        (RoomSize::Wide, (0, -1)),
        (RoomSize::Tall, (0, 0)),
        (RoomSize::Tall, (-1, 0)),
        (RoomSize::Large, (0, 0)),
        (RoomSize::Large, (0, -1)),
        (RoomSize::Large, (-1, 0)),
        (RoomSize::Large, (-1, -1)),
    ];

    let mut candidates = Vec::with_capacity(PLACEMENTS.len());
    for (size, (dy, dx)) in PLACEMENTS {
        let origin = GridPos::new(cell.y + dy, cell.x + dx);
        if plan.can_place(size, origin) {
            candidates.push((size, origin));
        }
    }
    candidates
}
