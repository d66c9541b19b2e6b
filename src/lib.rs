//! Autosnake - a self-playing snake simulation
//!
//! This library provides:
//! - Core game logic (game module): a deterministic state machine advanced
//!   one tick at a time
//! - The autopilot (pilot module): greedy move selection with a reachability
//!   oracle and a local safety heuristic
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The timer-driven driver (modes module)

pub mod game;
pub mod metrics;
pub mod modes;
pub mod pilot;
pub mod render;
