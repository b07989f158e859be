//! Procedural level generation: room placement, corridor carving, blood
//! vessel terrain, and exit stamping.
//!
//! Generation draws from the run's shared random stream in a fixed order
//! (room target, then per-attempt dimensions and position, then corridor
//! bends, then vessel rolls), so a seed pins the whole layout.

mod layout;
mod spawns;

pub use spawns::{enemy_spawn_positions, player_spawn};

use crate::rng::GameRng;
use crate::state::Level;
use crate::types::TileKind;

use layout::{carve_corridor, carve_room, lay_blood_vessels, place_rooms};

/// Levels at or above this depth stop growing blood vessels.
const VESSEL_MAX_LEVEL: u32 = 3;

pub fn generate(level_index: u32, width: usize, height: usize, rng: &mut GameRng) -> Level {
    let mut level = Level::filled(width, height, TileKind::Wall);
    let rooms = place_rooms(width, height, rng);

    for &room in &rooms {
        carve_room(&mut level, room);
    }
    for pair in rooms.windows(2) {
        carve_corridor(&mut level, pair[0].center(), pair[1].center(), rng);
    }
    if level_index <= VESSEL_MAX_LEVEL {
        for &room in &rooms {
            lay_blood_vessels(&mut level, room, rng);
        }
    }
    if let Some(last_room) = rooms.last() {
        let exit = last_room.center();
        level.set_tile(exit, TileKind::Exit);
        level.exit_pos = Some(exit);
    }

    level.rooms = rooms;
    level
}
