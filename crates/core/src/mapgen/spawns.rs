//! Spawn placement queries over a generated level.

use crate::rng::GameRng;
use crate::state::Level;
use crate::types::Pos;

/// Fixed fallback when generation produced no rooms at all.
const DEGENERATE_SPAWN: Pos = Pos { y: 5, x: 5 };

/// The player enters at the first room's center.
pub fn player_spawn(level: &Level) -> Pos {
    level.rooms.first().map(|room| room.center()).unwrap_or(DEGENERATE_SPAWN)
}

/// Picks up to `count` enemy positions strictly inside rooms other than the
/// entry room. Rejects the exit tile, occupied or unwalkable tiles, and any
/// tile adjacent (including diagonals) to an already chosen position. May
/// return fewer than `count` positions when attempts run out.
pub fn enemy_spawn_positions(
    level: &Level,
    occupied: &[Pos],
    count: usize,
    rng: &mut GameRng,
) -> Vec<Pos> {
    let mut positions: Vec<Pos> = Vec::new();
    if level.rooms.len() <= 1 {
        return positions;
    }

    for _ in 0..count * 5 {
        if positions.len() >= count {
            break;
        }

        let room = level.rooms[1 + rng.pick_index(level.rooms.len() - 1)];
        for _ in 0..10 {
            let x = rng.range_i32(room.x + 1, room.right() - 1);
            let y = rng.range_i32(room.y + 1, room.bottom() - 1);
            let candidate = Pos { y, x };

            if level.exit_pos == Some(candidate) {
                continue;
            }
            if !level.is_walkable(candidate) || occupied.contains(&candidate) {
                continue;
            }
            let too_close = positions.iter().any(|picked| {
                (picked.x - candidate.x).abs() <= 1 && (picked.y - candidate.y).abs() <= 1
            });
            if too_close {
                continue;
            }

            positions.push(candidate);
            break;
        }
    }

    positions
}
