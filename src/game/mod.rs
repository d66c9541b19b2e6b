//! Core game logic for the snake simulation
//!
//! No I/O or rendering dependencies live here; the module is a deterministic
//! state machine driven entirely through [`GameEngine`].

pub mod config;
pub mod engine;
pub mod grid;
pub mod heading;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{CollisionType, GameEngine, TickResult};
pub use grid::Grid;
pub use heading::Heading;
pub use state::{Cell, SimulationState, Snake};
