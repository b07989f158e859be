pub mod content;
pub mod game;
pub mod mapgen;
pub mod rng;
pub mod state;
pub mod types;

pub use content::{Mutation, MutationTarget};
pub use game::Game;
pub use state::{Actor, GameState, Level, MessageLog, Resources, Stats};
pub use types::*;
