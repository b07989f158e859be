//! The turn engine: owns the world aggregate, resolves player actions, runs
//! the enemy sweep, and sequences phases. Submodules hold one concern each.

mod actions;
mod bootstrap;
mod combat;
mod enemy_turn;
mod level_transition;
mod progression;
#[cfg(test)]
mod test_support;
mod visibility;

use crate::content::{self, Mutation};
use crate::rng::GameRng;
use crate::state::{GameState, MessageLog};
use crate::types::{ActorKind, Phase};

pub struct Game {
    seed: u64,
    rng: GameRng,
    phase: Phase,
    state: GameState,
    log: MessageLog,
    /// Catalog indices offered during a LevelUp; empty outside one.
    offered_mutations: Vec<usize>,
    /// Latched when a kill crosses the RNA threshold mid-turn; consumed when
    /// the turn finishes resolving.
    evolution_pending: bool,
}

impl Game {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The mutation choices on offer while in `Phase::LevelUp`.
    pub fn offered_mutations(&self) -> Vec<&'static Mutation> {
        self.offered_mutations.iter().map(|&index| &content::MUTATIONS[index]).collect()
    }

    /// Order-insensitive fingerprint of the simulation state, for determinism
    /// checks. Two runs with the same seed and action script must agree.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.state.turn_count);
        hasher.write_u32(self.state.level_index);
        hasher.write_u8(phase_code(self.phase));

        let resources = &self.state.resources;
        for value in [
            resources.atp,
            resources.max_atp,
            resources.protein,
            resources.max_protein,
            resources.rna,
            resources.max_rna,
        ] {
            hasher.write_i32(value);
        }

        for (_, actor) in &self.state.actors {
            hasher.write_u8(actor_code(actor.kind));
            hasher.write_u8(u8::from(actor.alive));
            hasher.write_i32(actor.pos.y);
            hasher.write_i32(actor.pos.x);
            hasher.write_i32(actor.stats.hp);
            hasher.write_i32(actor.stats.max_hp);
            hasher.write_i32(actor.stats.attack);
            hasher.write_i32(actor.stats.defense);
        }

        hasher.finish()
    }
}

fn phase_code(phase: Phase) -> u8 {
    match phase {
        Phase::PlayerTurn => 0,
        Phase::EnemyTurn => 1,
        Phase::LevelUp => 2,
        Phase::Paused => 3,
        Phase::GameOver => 4,
        Phase::Victory => 5,
    }
}

fn actor_code(kind: ActorKind) -> u8 {
    match kind {
        ActorKind::Player => 0,
        ActorKind::Macrophage => 1,
        ActorKind::Neutrophil => 2,
        ActorKind::BCell => 3,
        ActorKind::TCell => 4,
        ActorKind::Dendritic => 5,
        ActorKind::MastCell => 6,
        ActorKind::VirusClone => 7,
    }
}
