use core::{
    FloorPlanConfig, FloorPlanGenerator, GenerationError, corridor_openings, validate_floor_plan,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

fn run_fuzz_generation(
    seed: u64,
    width: usize,
    height: usize,
    room_salt: u64,
    min_distance: u32,
) -> Result<(), String> {
    let rooms_to_generate = 1 + room_salt as usize % (width * height / 2);
    let config = FloorPlanConfig {
        width,
        height,
        rooms_to_generate,
        min_rooms_from_start: min_distance,
        max_attempts: 32,
    };

    let plan = match FloorPlanGenerator::new(config.clone(), seed).generate() {
        Ok(plan) => plan,
        // Tight grids with a far boss requirement may legitimately run out
        // of attempts; the contract is an explicit failure, not a hang.
        Err(GenerationError::AttemptsExhausted { .. }) => return Ok(()),
        Err(error) => return Err(format!("Config rejected on seed {seed}: {error:?}")),
    };

    if plan.rooms.len() != config.rooms_to_generate + 1 {
        return Err(format!(
            "Invariant failed: {} rooms instead of {} on seed {seed}",
            plan.rooms.len(),
            config.rooms_to_generate + 1
        ));
    }

    let report = validate_floor_plan(&plan);
    if !report.is_valid() {
        return Err(format!("Invariant failed: {report:?} on seed {seed}"));
    }

    let Some(boss) = plan.boss_room else {
        return Err(format!("Invariant failed: no boss room on seed {seed}"));
    };
    if plan.distance_from_start(boss) <= config.min_rooms_from_start {
        return Err(format!("Invariant failed: boss too close to start on seed {seed}"));
    }
    if !plan.dead_ends.contains(&boss) {
        return Err(format!("Invariant failed: boss outside the dead-end set on seed {seed}"));
    }

    for opening in corridor_openings(&plan) {
        if plan.room_id_at(opening.cell) != Some(opening.room)
            || plan.room_id_at(opening.cell.step(opening.direction)) != Some(opening.neighbour)
        {
            return Err(format!("Invariant failed: corridor off the grid on seed {seed}"));
        }
    }

    let replay = FloorPlanGenerator::new(config, seed)
        .generate()
        .map_err(|error| format!("Replay did not generate on seed {seed}: {error:?}"))?;
    if replay.fingerprint() != plan.fingerprint() {
        return Err(format!("Invariant failed: fingerprint drift on seed {seed}"));
    }

    Ok(())
}

#[test]
fn test_fuzz_floor_generation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(200));
    let inputs = (any::<u64>(), 4_usize..=12, 4_usize..=12, any::<u64>(), 0_u32..=4);

    runner
        .run(&inputs, |(seed, width, height, room_salt, min_distance)| {
            run_fuzz_generation(seed, width, height, room_salt, min_distance)
                .map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz generation should preserve invariants");
}
