use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{
    Direction, FloorPlan, FloorPlanConfig, GridPos, RoomId, RoomKind, corridor_openings,
    generate_floor_plan, unoccupied_cells, validate_floor_plan,
};
use serde::Serialize;
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for deterministic generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 8)]
    width: usize,
    #[arg(long, default_value_t = 8)]
    height: usize,
    /// Rooms to generate in addition to the start room
    #[arg(short, long, default_value_t = 12)]
    rooms: usize,
    /// Minimum parent-chain distance between start and boss room
    #[arg(long, default_value_t = 3)]
    min_boss_distance: u32,
    #[arg(long, default_value_t = 64)]
    max_attempts: usize,
    /// Write the generated plan as JSON to this path
    #[arg(long)]
    json: Option<String>,
}

#[derive(Serialize)]
struct PlanExport {
    width: usize,
    height: usize,
    fingerprint: u64,
    rooms: Vec<RoomExport>,
    corridors: Vec<CorridorExport>,
    empty_cells: Vec<[i32; 2]>,
}

#[derive(Serialize)]
struct RoomExport {
    y: i32,
    x: i32,
    width: i32,
    height: i32,
    kind: RoomKind,
    distance_from_start: u32,
}

#[derive(Serialize)]
struct CorridorExport {
    from: [i32; 2],
    to: [i32; 2],
    direction: Direction,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = FloorPlanConfig {
        width: args.width,
        height: args.height,
        rooms_to_generate: args.rooms,
        min_rooms_from_start: args.min_boss_distance,
        max_attempts: args.max_attempts,
    };

    let plan = generate_floor_plan(config, args.seed)
        .map_err(|e| anyhow::anyhow!("Generation failed: {:?}", e))?;
    let report = validate_floor_plan(&plan);

    println!(
        "Generated {} rooms on a {}x{} grid (seed {}).",
        plan.rooms.len(),
        args.width,
        args.height,
        args.seed
    );
    println!("Fingerprint: {}", plan.fingerprint());
    println!(
        "Validation: grid_consistency={} single_boss={} boss_connected={}",
        report.grid_consistency, report.single_boss, report.boss_connected
    );
    println!("{}", render_ascii(&plan));

    if let Some(path) = args.json {
        let export = export_plan(&plan);
        let payload = serde_json::to_string_pretty(&export)
            .with_context(|| "Failed to serialize plan JSON")?;
        fs::write(&path, payload).with_context(|| format!("Failed to write plan file: {path}"))?;
        println!("Plan written to {path}.");
    }

    Ok(())
}

/// One letter per room in first-encounter order, `S` for the start room,
/// `B` for the boss room, `.` for unoccupied cells.
fn render_ascii(plan: &FloorPlan) -> String {
    let mut order: Vec<RoomId> = Vec::new();
    let mut out = String::new();
    for y in 0..plan.height as i32 {
        for x in 0..plan.width as i32 {
            let glyph = match plan.room_id_at(GridPos::new(y, x)) {
                None => '.',
                Some(id) => match plan.rooms[id].kind {
                    RoomKind::Start => 'S',
                    RoomKind::Boss => 'B',
                    RoomKind::Normal | RoomKind::Empty => {
                        let slot = match order.iter().position(|&known| known == id) {
                            Some(slot) => slot,
                            None => {
                                order.push(id);
                                order.len() - 1
                            }
                        };
                        char::from(b'a' + (slot % 26) as u8)
                    }
                },
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn export_plan(plan: &FloorPlan) -> PlanExport {
    let rooms = plan
        .rooms_via_parents()
        .into_iter()
        .map(|id| {
            let room = &plan.rooms[id];
            RoomExport {
                y: room.position.y,
                x: room.position.x,
                width: room.size.width(),
                height: room.size.height(),
                kind: room.kind,
                distance_from_start: plan.distance_from_start(id),
            }
        })
        .collect();

    let corridors = corridor_openings(plan)
        .into_iter()
        .map(|opening| {
            let far = opening.cell.step(opening.direction);
            CorridorExport {
                from: [opening.cell.y, opening.cell.x],
                to: [far.y, far.x],
                direction: opening.direction,
            }
        })
        .collect();

    let empty_cells = unoccupied_cells(plan).into_iter().map(|pos| [pos.y, pos.x]).collect();

    PlanExport {
        width: plan.width,
        height: plan.height,
        fingerprint: plan.fingerprint(),
        rooms,
        corridors,
        empty_cells,
    }
}
