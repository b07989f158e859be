//! Keyboard capture for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const WATCHED_KEYS: [KeyCode; 16] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Space,
    KeyCode::C,
    KeyCode::E,
    KeyCode::R,
    KeyCode::Q,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
];

/// Keys newly pressed this frame, plus Escape and Enter which gate screen
/// flow and are checked first by the loop.
pub fn capture_frame_input() -> Vec<KeyCode> {
    let mut pressed = Vec::with_capacity(4);
    if is_key_pressed(KeyCode::Escape) {
        pressed.push(KeyCode::Escape);
    }
    if is_key_pressed(KeyCode::Enter) {
        pressed.push(KeyCode::Enter);
    }
    for key in WATCHED_KEYS {
        if is_key_pressed(key) {
            pressed.push(key);
        }
    }
    pressed
}
