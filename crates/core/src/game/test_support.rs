//! Shared fixtures for the turn-engine test suites: an open arena with no
//! generated hostiles, plus actor insertion helpers.

use super::Game;
use crate::content;
use crate::state::{Actor, Level};
use crate::types::{ActorKind, EntityId, Pos, TileKind};

/// A floor rectangle enclosed by a one-tile wall border.
pub(crate) fn walled_room_level(width: usize, height: usize) -> Level {
    let mut level = Level::filled(width, height, TileKind::Floor);
    for x in 0..width as i32 {
        level.set_tile(Pos { y: 0, x }, TileKind::Wall);
        level.set_tile(Pos { y: height as i32 - 1, x }, TileKind::Wall);
    }
    for y in 0..height as i32 {
        level.set_tile(Pos { y, x: 0 }, TileKind::Wall);
        level.set_tile(Pos { y, x: width as i32 - 1 }, TileKind::Wall);
    }
    level
}

/// A seeded game reduced to a bare arena: open 30x30 level, no hostiles, no
/// exit, player parked in the middle.
pub(crate) fn open_game(seed: u64) -> Game {
    let mut game = Game::new(seed);
    let hostile_ids: Vec<EntityId> = game
        .state
        .actors
        .iter()
        .filter(|(_, actor)| actor.kind.is_hostile())
        .map(|(id, _)| id)
        .collect();
    for id in hostile_ids {
        game.state.actors.remove(id);
    }

    game.state.level = walled_room_level(30, 30);
    game.state.actors[game.state.player_id].pos = Pos { y: 15, x: 15 };
    game
}

pub(crate) fn add_enemy(game: &mut Game, kind: ActorKind, pos: Pos) -> EntityId {
    let profile = content::enemy_profile(kind, game.state.level_index);
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
    let id = game.state.actors.insert(actor);
    game.state.actors[id].id = id;
    id
}

pub(crate) fn add_clone(game: &mut Game, pos: Pos) -> EntityId {
    let profile = content::clone_profile(&game.state.actors[game.state.player_id].stats);
    let actor = Actor {
        id: EntityId::default(),
        kind: ActorKind::VirusClone,
        pos,
        stats: profile.stats,
        alive: true,
        name: profile.name,
        glyph: profile.glyph,
        color: profile.color,
    };
    let id = game.state.actors.insert(actor);
    game.state.actors[id].id = id;
    game.state.clone_ids.push(id);
    id
}
