//! Room placement and corridor carving for the base level topology.

use crate::rng::GameRng;
use crate::state::Level;
use crate::types::{Pos, RoomRect, TileKind};

const MIN_ROOMS: i32 = 8;
const MAX_ROOMS: i32 = 12;
const ROOM_WIDTH_RANGE: (i32, i32) = (6, 12);
const ROOM_HEIGHT_RANGE: (i32, i32) = (6, 10);

/// Probability that a room grows a blood vessel lane through its center.
const VESSEL_CHANCE: f64 = 0.3;

/// Attempts up to ten placements per requested room and accepts whatever
/// fits; a sparse result is kept, not retried.
pub(super) fn place_rooms(width: usize, height: usize, rng: &mut GameRng) -> Vec<RoomRect> {
    let grid_width = width as i32;
    let grid_height = height as i32;
    let target = rng.range_i32(MIN_ROOMS, MAX_ROOMS);

    let mut rooms: Vec<RoomRect> = Vec::new();
    for _ in 0..target * 10 {
        if rooms.len() as i32 >= target {
            break;
        }

        let room_width = rng.range_i32(ROOM_WIDTH_RANGE.0, ROOM_WIDTH_RANGE.1);
        let room_height = rng.range_i32(ROOM_HEIGHT_RANGE.0, ROOM_HEIGHT_RANGE.1);
        if grid_width - room_width - 1 < 1 || grid_height - room_height - 1 < 1 {
            continue;
        }
        let x = rng.range_i32(1, grid_width - room_width - 1);
        let y = rng.range_i32(1, grid_height - room_height - 1);

        let candidate = RoomRect { x, y, width: room_width, height: room_height };
        if rooms.iter().any(|existing| candidate.intersects(existing)) {
            continue;
        }
        rooms.push(candidate);
    }

    rooms
}

pub(super) fn carve_room(level: &mut Level, room: RoomRect) {
    for y in room.y..=room.bottom() {
        for x in room.x..=room.right() {
            level.set_tile(Pos { y, x }, TileKind::Floor);
        }
    }
}

/// Connects two room centers with an L-shaped corridor whose bend order is
/// chosen per corridor.
pub(super) fn carve_corridor(level: &mut Level, from: Pos, to: Pos, rng: &mut GameRng) {
    if rng.chance(0.5) {
        carve_horizontal(level, from.x, to.x, from.y);
        carve_vertical(level, from.y, to.y, to.x);
    } else {
        carve_vertical(level, from.y, to.y, from.x);
        carve_horizontal(level, from.x, to.x, to.y);
    }
}

/// With probability 0.3, converts one full floor row or column through the
/// room's center into blood vessel terrain.
pub(super) fn lay_blood_vessels(level: &mut Level, room: RoomRect, rng: &mut GameRng) {
    if !rng.chance(VESSEL_CHANCE) {
        return;
    }
    if rng.chance(0.5) {
        let y = room.y + room.height / 2;
        for x in room.x..room.x + room.width {
            convert_floor_to_vessel(level, Pos { y, x });
        }
    } else {
        let x = room.x + room.width / 2;
        for y in room.y..room.y + room.height {
            convert_floor_to_vessel(level, Pos { y, x });
        }
    }
}

fn convert_floor_to_vessel(level: &mut Level, pos: Pos) {
    if level.tile_at(pos) == TileKind::Floor {
        level.set_tile(pos, TileKind::BloodVessel);
    }
}

/// Corridor carving only ever promotes walls; floor, vessel, and exit tiles
/// pass through untouched.
fn carve_horizontal(level: &mut Level, from_x: i32, to_x: i32, y: i32) {
    for x in from_x.min(to_x)..=from_x.max(to_x) {
        let pos = Pos { y, x };
        if level.tile_at(pos) == TileKind::Wall && level.in_bounds(pos) {
            level.set_tile(pos, TileKind::Floor);
        }
    }
}

fn carve_vertical(level: &mut Level, from_y: i32, to_y: i32, x: i32) {
    for y in from_y.min(to_y)..=from_y.max(to_y) {
        let pos = Pos { y, x };
        if level.tile_at(pos) == TileKind::Wall && level.in_bounds(pos) {
            level.set_tile(pos, TileKind::Floor);
        }
    }
}
