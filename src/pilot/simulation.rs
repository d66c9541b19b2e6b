use crate::game::{GameConfig, GameEngine, SimulationState, TickResult};

use super::selector::select_heading;

/// Engine, state, and pilot composed behind the driver-facing surface
///
/// One tick is one pilot decision followed by one engine step: the selector
/// writes the pending heading, the engine latches and applies it. The state
/// is owned here and handed out read-only for rendering.
pub struct Simulation {
    engine: GameEngine,
    state: SimulationState,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self { engine, state }
    }

    /// Reinitialize to the fixed starting layout; always succeeds
    pub fn reset(&mut self) {
        self.state = self.engine.reset();
    }

    /// One pilot decision plus one game-loop step
    pub fn tick(&mut self) -> TickResult {
        self.state.pending_heading = select_heading(&self.state);
        self.engine.tick(&mut self.state)
    }

    /// Read access to the current state, for rendering and status display
    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}
