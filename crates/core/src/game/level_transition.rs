//! Level entry: terrain generation, entity arena rebuild, and enemy spawns.

use super::Game;
use super::visibility::compute_fov;
use crate::content;
use crate::mapgen;
use crate::state::Actor;
use crate::types::{ActorKind, EntityId, Pos, Tone};

/// Relative cells tried, in order, when pulling a surviving clone next to the
/// player on the new level. A clone with no free cell is left behind.
const CLONE_REPOSITION_OFFSETS: [(i32, i32); 6] =
    [(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1)];

impl Game {
    /// Generates the level for the current index and rebuilds the entity
    /// arena as {player} + {repositioned clones} + {fresh spawns}. Dead
    /// actors from the previous level are compacted away here and only here.
    pub(super) fn enter_level(&mut self) {
        self.state.level = mapgen::generate(
            self.state.level_index,
            content::MAP_WIDTH,
            content::MAP_HEIGHT,
            &mut self.rng,
        );
        let spawn = mapgen::player_spawn(&self.state.level);

        let mut player = self.state.actors[self.state.player_id].clone();
        player.pos = spawn;
        let survivors: Vec<Actor> = self
            .state
            .clone_ids
            .iter()
            .filter_map(|&id| self.state.actors.get(id))
            .filter(|clone| clone.alive)
            .cloned()
            .collect();

        self.state.actors.clear();
        self.state.clone_ids.clear();
        let player_id = self.state.actors.insert(player);
        self.state.actors[player_id].id = player_id;
        self.state.player_id = player_id;

        for mut clone in survivors {
            let placement = CLONE_REPOSITION_OFFSETS.iter().find_map(|&(dy, dx)| {
                let pos = spawn.offset(dy, dx);
                (self.state.level.is_walkable(pos) && self.state.entity_at(pos).is_none())
                    .then_some(pos)
            });
            let Some(pos) = placement else {
                continue;
            };
            clone.pos = pos;
            let id = self.state.actors.insert(clone);
            self.state.actors[id].id = id;
            self.state.clone_ids.push(id);
        }

        self.spawn_level_enemies();

        let vision = self.state.actors[self.state.player_id].stats.vision_range;
        compute_fov(&mut self.state.level, spawn, vision);

        let level_index = self.state.level_index;
        self.log.add(
            format!("Level {level_index}: {}", content::level_name(level_index)),
            Tone::Alert,
        );
    }

    fn spawn_level_enemies(&mut self) {
        let occupied: Vec<Pos> = self
            .state
            .actors
            .values()
            .filter(|actor| actor.alive)
            .map(|actor| actor.pos)
            .collect();
        let count = content::enemy_count(self.state.level_index);
        let positions =
            mapgen::enemy_spawn_positions(&self.state.level, &occupied, count, &mut self.rng);

        for pos in positions {
            let kind = self.roll_spawn_kind();
            self.spawn_enemy(kind, pos);
        }
    }

    /// One uniform roll against the cumulative weight band for this depth.
    fn roll_spawn_kind(&mut self) -> ActorKind {
        let weights = content::spawn_weights(self.state.level_index);
        let roll = self.rng.unit();
        let mut cumulative = 0.0;
        let mut chosen = weights[0].0;
        for &(kind, weight) in weights {
            cumulative += weight;
            if roll <= cumulative {
                chosen = kind;
                break;
            }
        }
        chosen
    }

    pub(super) fn spawn_enemy(&mut self, kind: ActorKind, pos: Pos) -> EntityId {
        let profile = content::enemy_profile(kind, self.state.level_index);
        let actor = Actor {
            id: EntityId::default(),
            kind,
            pos,
            stats: profile.stats,
            alive: true,
            name: profile.name,
            glyph: profile.glyph,
            color: profile.color,
        };
        let id = self.state.actors.insert(actor);
        self.state.actors[id].id = id;
        id
    }
}
