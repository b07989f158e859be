//! Pure frame logic for the desktop shell: screen transitions and the
//! translation from pressed keys to core actions. No drawing happens here,
//! which keeps every branch unit-testable without a window.

use macroquad::prelude::KeyCode;
use virion_core::{Action, ActionOutcome, Direction, Game, Phase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppScreen {
    #[default]
    Menu,
    Running,
}

/// What the frame asked the outer loop to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    None,
    /// Begin a run; the caller decides which seed backs it.
    StartRun,
    Quit,
}

#[derive(Default)]
pub struct AppState {
    pub screen: AppScreen,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, game: &mut Game, keys: &[KeyCode]) -> AppEvent {
        match self.screen {
            AppScreen::Menu => {
                if keys.contains(&KeyCode::Enter) || keys.contains(&KeyCode::Space) {
                    self.screen = AppScreen::Running;
                    return AppEvent::StartRun;
                }
                if keys.contains(&KeyCode::Escape) || keys.contains(&KeyCode::Q) {
                    return AppEvent::Quit;
                }
                AppEvent::None
            }
            AppScreen::Running => {
                if let Some(action) = action_for_keys(game.phase(), keys)
                    && game.dispatch(action) == ActionOutcome::LeftGame
                {
                    self.screen = AppScreen::Menu;
                }
                AppEvent::None
            }
        }
    }
}

/// Maps the first recognized key for the current phase to an abstract action.
pub fn action_for_keys(phase: Phase, keys: &[KeyCode]) -> Option<Action> {
    let pressed = |key: KeyCode| keys.contains(&key);

    match phase {
        Phase::PlayerTurn => {
            if pressed(KeyCode::Up) || pressed(KeyCode::W) {
                Some(Action::Move(Direction::North))
            } else if pressed(KeyCode::Down) || pressed(KeyCode::S) {
                Some(Action::Move(Direction::South))
            } else if pressed(KeyCode::Left) || pressed(KeyCode::A) {
                Some(Action::Move(Direction::West))
            } else if pressed(KeyCode::Right) || pressed(KeyCode::D) {
                Some(Action::Move(Direction::East))
            } else if pressed(KeyCode::Space) {
                Some(Action::Wait)
            } else if pressed(KeyCode::C) {
                Some(Action::CreateClone)
            } else if pressed(KeyCode::E) {
                Some(Action::UseExit)
            } else if pressed(KeyCode::Escape) {
                Some(Action::Pause)
            } else {
                None
            }
        }
        Phase::Paused => {
            if pressed(KeyCode::Escape) {
                Some(Action::Resume)
            } else if pressed(KeyCode::Q) {
                Some(Action::ReturnToMenu)
            } else {
                None
            }
        }
        Phase::LevelUp => {
            if pressed(KeyCode::Key1) {
                Some(Action::SelectMutation(0))
            } else if pressed(KeyCode::Key2) {
                Some(Action::SelectMutation(1))
            } else if pressed(KeyCode::Key3) {
                Some(Action::SelectMutation(2))
            } else {
                None
            }
        }
        Phase::GameOver | Phase::Victory => {
            if pressed(KeyCode::R) {
                Some(Action::Restart)
            } else if pressed(KeyCode::Escape) || pressed(KeyCode::Q) {
                Some(Action::ReturnToMenu)
            } else {
                None
            }
        }
        Phase::EnemyTurn => None,
    }
}
