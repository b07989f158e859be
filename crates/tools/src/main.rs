//! Headless autoplay harness: drives a seeded run with a seeded random
//! policy, asserting core invariants after every action. Doubles as a soak
//! tool for long runs and prints a JSON summary for scripting.

use anyhow::{Result, bail};
use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use serde::Serialize;
use virion_core::{Action, Direction, Game, Phase, TileKind};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulation seed; the same seed replays the same run.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Maximum number of actions to dispatch before stopping.
    #[arg(short, long, default_value_t = 5000)]
    turns: u64,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    actions_dispatched: u64,
    turns_played: u64,
    final_level: u32,
    final_phase: String,
    snapshot_hash: String,
}

fn random_action(rng: &mut ChaCha8Rng, phase: Phase) -> Action {
    if phase == Phase::LevelUp {
        return Action::SelectMutation((rng.next_u64() % 3) as usize);
    }
    match rng.next_u64() % 10 {
        0 => Action::Wait,
        1 => Action::CreateClone,
        2 => Action::UseExit,
        _ => Action::Move(match rng.next_u64() % 4 {
            0 => Direction::North,
            1 => Direction::South,
            2 => Direction::West,
            _ => Direction::East,
        }),
    }
}

fn check_invariants(game: &Game) -> Result<()> {
    let resources = game.state().resources;
    if !(0..=resources.max_atp).contains(&resources.atp)
        || !(0..=resources.max_protein).contains(&resources.protein)
        || !(0..=resources.max_rna).contains(&resources.rna)
    {
        bail!("resource pool escaped its [0, max] band: {resources:?}");
    }

    for actor in game.state().actors.values() {
        if actor.stats.hp < 0 || actor.stats.hp > actor.stats.max_hp {
            bail!("{} hp {} outside [0, {}]", actor.name, actor.stats.hp, actor.stats.max_hp);
        }
        if actor.alive && game.state().level.tile_at(actor.pos) == TileKind::Wall {
            bail!("{} is standing inside a wall at {:?}", actor.name, actor.pos);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut game = Game::new(args.seed);
    let mut policy = ChaCha8Rng::seed_from_u64(args.seed);

    let mut dispatched = 0_u64;
    while dispatched < args.turns {
        if matches!(game.phase(), Phase::GameOver | Phase::Victory) {
            break;
        }
        let action = random_action(&mut policy, game.phase());
        game.dispatch(action);
        dispatched += 1;
        check_invariants(&game)?;
    }

    let summary = RunSummary {
        seed: args.seed,
        actions_dispatched: dispatched,
        turns_played: game.state().turn_count,
        final_level: game.state().level_index,
        final_phase: format!("{:?}", game.phase()),
        snapshot_hash: format!("{:#018x}", game.snapshot_hash()),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
