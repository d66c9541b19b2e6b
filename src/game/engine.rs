use super::{
    config::GameConfig,
    grid::Grid,
    state::{Cell, SimulationState, Snake},
};
use crate::game::Heading;
use rand::Rng;

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Report for one tick of the game loop
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether the game has terminated
    pub terminated: bool,
}

/// The game engine: applies headings, detects collisions, manages food
///
/// The engine owns no game state; `SimulationState` is an explicit value
/// handed to every operation.
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build a fresh state: fixed snake layout heading right, fresh food
    pub fn reset(&mut self) -> SimulationState {
        let grid = Grid::new(self.config.grid_size);

        // Head at (N/4, N/2), clamped so the trailing body stays in bounds
        // on small grids. At N=20 this is (5,10),(4,10),(3,10).
        let head_x = (self.config.grid_size as i32 / 4)
            .max(self.config.initial_snake_length as i32 - 1);
        let head_y = self.config.grid_size as i32 / 2;

        let snake = Snake::new(
            Cell::new(head_x, head_y),
            Heading::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food(&snake, grid);

        SimulationState::new(grid, snake, food)
    }

    /// Advance the state by one tick
    ///
    /// Latches the pending heading, moves the head, and resolves collision
    /// and food. A terminal collision is a normal transition reported via
    /// the `running` flag, never an error.
    pub fn tick(&mut self, state: &mut SimulationState) -> TickResult {
        if !state.running {
            return TickResult {
                ate_food: false,
                collision: None,
                terminated: true,
            };
        }

        state.snake.heading = state.pending_heading;

        let new_head = state.snake.head().step(state.snake.heading);

        // The tail counts as occupied: it is only vacated after the head
        // moves, and not at all on a food-eating tick.
        if let Some(collision) = self.check_collision(state, new_head) {
            state.running = false;
            state.ticks += 1;

            return TickResult {
                ate_food: false,
                collision: Some(collision),
                terminated: true,
            };
        }

        let ate_food = new_head == state.food;

        state.snake.advance(ate_food);

        if ate_food {
            state.score += self.config.food_reward;
            state.food = self.spawn_food(&state.snake, state.grid);
        }

        state.ticks += 1;

        TickResult {
            ate_food,
            collision: None,
            terminated: false,
        }
    }

    /// Check whether moving the head to `cell` ends the game
    fn check_collision(&self, state: &SimulationState, cell: Cell) -> Option<CollisionType> {
        if !state.grid.in_bounds(cell) {
            return Some(CollisionType::Wall);
        }

        if state.grid.is_occupied(cell, &state.snake) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food on a uniformly random free cell
    ///
    /// Rejection-samples against the snake body; terminates as long as free
    /// cells exist.
    fn spawn_food(&mut self, snake: &Snake, grid: Grid) -> Cell {
        loop {
            let x = self.rng.gen_range(0..grid.size) as i32;
            let y = self.rng.gen_range(0..grid.size) as i32;
            let cell = Cell::new(x, y);

            if !snake.contains(cell) {
                return cell;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_layout() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(state.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(
            state.snake.cells,
            vec![Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)]
        );
        assert_eq!(state.snake.heading, Heading::Right);
        assert_eq!(state.pending_heading, Heading::Right);
        assert!(!state.snake.contains(state.food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        // Keep food out of the way
        state.food = Cell::new(0, 0);

        let result = engine.tick(&mut state);

        assert!(!result.terminated);
        assert!(!result.ate_food);
        assert_eq!(state.ticks, 1);
        assert_eq!(state.snake.head(), Cell::new(6, 10));
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();

        // Food directly in front of the head: snake is (5,10),(4,10),(3,10)
        state.food = Cell::new(6, 10);

        let result = engine.tick(&mut state);

        assert!(result.ate_food);
        assert_eq!(state.snake.head(), Cell::new(6, 10));
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.len(), 4);
        assert!(!state.snake.contains(state.food));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::new(GameConfig::small());
        let grid = Grid::new(10);
        let snake = Snake::new(Cell::new(0, 5), Heading::Left, 3);
        let mut state = SimulationState::new(grid, snake, Cell::new(5, 5));

        let result = engine.tick(&mut state);

        assert!(result.terminated);
        assert!(!state.running);
        assert_eq!(result.collision, Some(CollisionType::Wall));
    }

    #[test]
    fn test_tail_collision_on_small_grid() {
        let mut engine = GameEngine::new(GameConfig::small());
        let grid = Grid::new(4);

        // A 2x2 loop of length 4: head moving up into its own tail cell.
        //   head (1,1), then (1,2), (2,2), tail (2,1)
        let snake = Snake {
            cells: vec![
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 2),
                Cell::new(2, 1),
            ],
            heading: Heading::Up,
        };
        let mut state = SimulationState::new(grid, snake, Cell::new(0, 3));
        state.pending_heading = Heading::Right;

        let result = engine.tick(&mut state);

        assert!(result.terminated);
        assert!(!state.running);
        assert_eq!(result.collision, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_pending_heading_latched() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.food = Cell::new(0, 0);
        state.pending_heading = Heading::Up;

        engine.tick(&mut state);

        assert_eq!(state.snake.heading, Heading::Up);
        assert_eq!(state.snake.head(), Cell::new(5, 9));
    }

    #[test]
    fn test_terminated_state_frozen() {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut state = engine.reset();
        state.running = false;
        let before = state.clone();

        let result = engine.tick(&mut state);

        assert!(result.terminated);
        assert_eq!(state, before);
    }
}
