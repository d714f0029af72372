use anyhow::Result;
use clap::Parser;
use dungeon_core::{FloorPlanConfig, GenerationError, generate_floor_plan, validate_floor_plan};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting floor-plan fuzz on meta-seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut generated = 0_u32;
    let mut exhausted = 0_u32;
    let mut fingerprints = BTreeSet::new();

    for run in 0..args.runs {
        let width = 4 + rng.next_u64() as usize % 9;
        let height = 4 + rng.next_u64() as usize % 9;
        let rooms_to_generate = 1 + rng.next_u64() as usize % (width * height / 2);
        let config = FloorPlanConfig {
            width,
            height,
            rooms_to_generate,
            min_rooms_from_start: (rng.next_u64() % 4) as u32,
            max_attempts: 32,
        };
        let plan_seed = rng.next_u64();

        match generate_floor_plan(config.clone(), plan_seed) {
            Ok(plan) => {
                // Assert invariants
                let report = validate_floor_plan(&plan);
                assert!(
                    report.is_valid(),
                    "Invariant failed: invalid plan on run {run} (seed {plan_seed}): {report:?}"
                );
                assert_eq!(
                    plan.rooms.len(),
                    config.rooms_to_generate + 1,
                    "Invariant failed: wrong room count on run {run} (seed {plan_seed})"
                );

                let replay = generate_floor_plan(config, plan_seed)
                    .expect("a generating seed must generate again");
                assert_eq!(
                    plan.fingerprint(),
                    replay.fingerprint(),
                    "Invariant failed: non-deterministic plan on run {run} (seed {plan_seed})"
                );

                fingerprints.insert(plan.fingerprint());
                generated += 1;
            }
            Err(GenerationError::AttemptsExhausted { .. }) => exhausted += 1,
            Err(error @ GenerationError::InvalidConfig(_)) => {
                panic!("fuzz built an invalid config: {error:?}")
            }
        }
    }

    println!(
        "Fuzzing completed successfully: {generated} plans generated ({} distinct), {exhausted} exhausted the attempt cap.",
        fingerprints.len()
    );
    Ok(())
}
