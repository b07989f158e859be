//! Ray-cast field of view over the level grid.
//!
//! One ray per integer degree, each stepping half a tile at a time for up to
//! `radius` steps, so the geometric reach is about `radius / 2` tiles. The
//! step density means adjacent rays revisit tiles; that redundancy is part of
//! the sweep's shape and is left alone.

use crate::state::Level;
use crate::types::{Pos, TileKind};

const RAY_COUNT: u32 = 360;
const STEP_LENGTH: f64 = 0.5;

/// Recomputes the visible grid from scratch and folds newly seen tiles into
/// the explored grid, which only ever grows within a level's lifetime.
pub(super) fn compute_fov(level: &mut Level, origin: Pos, radius: i32) {
    level.clear_visible();

    for angle in 0..RAY_COUNT {
        let radians = f64::from(angle).to_radians();
        let step_x = radians.cos() * STEP_LENGTH;
        let step_y = radians.sin() * STEP_LENGTH;

        let mut x = f64::from(origin.x);
        let mut y = f64::from(origin.y);
        for _ in 0..radius.max(0) {
            let tile = Pos { y: y.round() as i32, x: x.round() as i32 };
            if !level.in_bounds(tile) {
                break;
            }
            level.mark_visible(tile);
            if level.tile_at(tile) == TileKind::Wall {
                // The wall itself is seen; everything behind it is not.
                break;
            }
            x += step_x;
            y += step_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::walled_room_level;

    #[test]
    fn origin_and_close_neighbors_are_visible() {
        let mut level = walled_room_level(21, 21);
        let origin = Pos { y: 10, x: 10 };
        compute_fov(&mut level, origin, 8);

        assert!(level.is_visible(origin));
        assert!(level.is_visible(Pos { y: 10, x: 12 }));
        assert!(level.is_visible(Pos { y: 8, x: 10 }));
    }

    #[test]
    fn reach_is_about_half_the_step_radius() {
        let mut level = walled_room_level(41, 41);
        let origin = Pos { y: 20, x: 20 };
        compute_fov(&mut level, origin, 8);

        // 8 steps of half a tile reach 4 tiles out, not 8.
        assert!(level.is_visible(Pos { y: 20, x: 24 }));
        assert!(!level.is_visible(Pos { y: 20, x: 28 }));
    }

    #[test]
    fn walls_are_seen_but_block_tiles_behind_them() {
        let mut level = walled_room_level(21, 21);
        let origin = Pos { y: 10, x: 4 };
        level.set_tile(Pos { y: 10, x: 7 }, TileKind::Wall);
        compute_fov(&mut level, origin, 12);

        assert!(level.is_visible(Pos { y: 10, x: 7 }), "the wall itself is visible");
        assert!(
            !level.is_visible(Pos { y: 10, x: 9 }),
            "tiles straight behind the wall are occluded"
        );
    }

    #[test]
    fn recompute_with_same_inputs_is_idempotent() {
        let mut level = walled_room_level(21, 21);
        level.set_tile(Pos { y: 9, x: 9 }, TileKind::Wall);
        let origin = Pos { y: 10, x: 10 };

        compute_fov(&mut level, origin, 8);
        let first = level.visible.clone();
        compute_fov(&mut level, origin, 8);
        assert_eq!(first, level.visible);
    }

    #[test]
    fn explored_accumulates_across_origins() {
        let mut level = walled_room_level(31, 31);
        compute_fov(&mut level, Pos { y: 15, x: 5 }, 8);
        let explored_after_first = level.explored.clone();
        compute_fov(&mut level, Pos { y: 15, x: 25 }, 8);

        for (index, &was_explored) in explored_after_first.iter().enumerate() {
            if was_explored {
                assert!(level.explored[index], "explored tiles must never be forgotten");
            }
        }
        assert!(!level.is_visible(Pos { y: 15, x: 5 }), "old origin is out of the new fov");
        assert!(level.is_explored(Pos { y: 15, x: 5 }));
    }

    #[test]
    fn non_positive_radius_sees_nothing() {
        let mut level = walled_room_level(11, 11);
        compute_fov(&mut level, Pos { y: 5, x: 5 }, 0);
        assert!(level.visible.iter().all(|&visible| !visible));
        compute_fov(&mut level, Pos { y: 5, x: 5 }, -3);
        assert!(level.visible.iter().all(|&visible| !visible));
    }
}
