//! New-run construction and full restarts.

use slotmap::SlotMap;

use super::Game;
use crate::content;
use crate::rng::GameRng;
use crate::state::{Actor, GameState, Level, MessageLog, Resources};
use crate::types::{ActorKind, EntityId, Phase, Pos, TileKind, Tone};

impl Game {
    pub fn new(seed: u64) -> Self {
        let profile = content::player_profile();
        let mut actors = SlotMap::with_key();
        let player = Actor {
            id: EntityId::default(),
            kind: ActorKind::Player,
            pos: Pos { y: 0, x: 0 },
            stats: profile.stats,
            alive: true,
            name: profile.name,
            glyph: profile.glyph,
            color: profile.color,
        };
        let player_id = actors.insert(player);
        actors[player_id].id = player_id;

        let mut game = Self {
            seed,
            rng: GameRng::seed_from(seed),
            phase: Phase::PlayerTurn,
            state: GameState {
                level: Level::filled(content::MAP_WIDTH, content::MAP_HEIGHT, TileKind::Wall),
                actors,
                clone_ids: Vec::new(),
                player_id,
                resources: Resources::default(),
                level_index: content::STARTING_LEVEL_INDEX,
                turn_count: 0,
            },
            log: MessageLog::new(),
            offered_mutations: Vec::new(),
            evolution_pending: false,
        };
        game.log.add("You have entered the organism. Seize control!", Tone::Flavor);
        game.enter_level();
        game
    }

    /// Re-initializes the whole simulation from the stored seed, so a
    /// restarted run replays identically.
    pub(super) fn restart(&mut self) {
        *self = Self::new(self.seed);
    }
}
