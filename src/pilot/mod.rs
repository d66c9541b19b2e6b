//! The autopilot: greedy best-heading selection for the snake
//!
//! Composed from three pure pieces over the current state:
//! - a reachability oracle (flood fill: can the food still be reached from a
//!   candidate head cell without crossing the body),
//! - a safety heuristic (how many escape routes a cell offers),
//! - the move selector combining both with Manhattan distance to the food.
//!
//! [`Simulation`] wraps engine, state, and selector behind the
//! reset/tick/state surface the external driver uses.

pub mod reachability;
pub mod safety;
pub mod selector;
pub mod simulation;

pub use reachability::food_reachable;
pub use safety::safety_score;
pub use selector::select_heading;
pub use simulation::Simulation;
