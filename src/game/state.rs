use super::grid::Grid;
use super::heading::Heading;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one unit step in the given heading
    pub fn step(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to another cell
    pub fn manhattan_distance(&self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// The snake: ordered cells with the head at index 0, plus current heading
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head first, tail last
    pub cells: Vec<Cell>,
    /// Heading applied on the last tick
    pub heading: Heading,
}

impl Snake {
    /// Create a snake of the given length with its body trailing behind the
    /// head, opposite to the heading
    pub fn new(head: Cell, heading: Heading, length: usize) -> Self {
        let mut cells = vec![head];
        let back = heading.opposite();

        for i in 1..length {
            let prev = cells[i - 1];
            cells.push(prev.step(back));
        }

        Self { cells, heading }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn tail(&self) -> Cell {
        *self.cells.last().expect("snake is never empty")
    }

    /// Check if any segment covers the given cell (head included)
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Advance one cell in the current heading, keeping the tail if growing
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.head().step(self.heading);
        self.cells.insert(0, new_head);

        if !grow {
            self.cells.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Complete simulation state, owned by the game engine and read by the pilot
///
/// `pending_heading` is the pilot's proposal for the next tick; it becomes
/// the snake's heading only when the tick latches it. The two-slot scheme
/// keeps a decision issued between ticks from corrupting the in-flight move.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    pub pending_heading: Heading,
    pub score: u32,
    pub ticks: u32,
    pub running: bool,
}

impl SimulationState {
    pub fn new(grid: Grid, snake: Snake, food: Cell) -> Self {
        let pending_heading = snake.heading;
        Self {
            grid,
            snake,
            food,
            pending_heading,
            score: 0,
            ticks: 0,
            running: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Heading::Up), Cell::new(5, 4));
        assert_eq!(cell.step(Heading::Down), Cell::new(5, 6));
        assert_eq!(cell.step(Heading::Left), Cell::new(4, 5));
        assert_eq!(cell.step(Heading::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(3, 4)), 7);
        assert_eq!(Cell::new(5, 5).manhattan_distance(Cell::new(5, 5)), 0);
        assert_eq!(Cell::new(7, 2).manhattan_distance(Cell::new(2, 7)), 10);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 10), Heading::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 10));
        assert_eq!(snake.cells[1], Cell::new(4, 10));
        assert_eq!(snake.cells[2], Cell::new(3, 10));
        assert_eq!(snake.tail(), Cell::new(3, 10));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);

        snake.advance(false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));

        snake.advance(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(7, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));
    }

    #[test]
    fn test_snake_contains() {
        let snake = Snake::new(Cell::new(5, 5), Heading::Right, 3);
        assert!(snake.contains(Cell::new(5, 5)));
        assert!(snake.contains(Cell::new(4, 5)));
        assert!(snake.contains(Cell::new(3, 5)));
        assert!(!snake.contains(Cell::new(6, 5)));
    }

    #[test]
    fn test_initial_state() {
        let grid = Grid::new(20);
        let snake = Snake::new(Cell::new(5, 10), Heading::Right, 3);
        let state = SimulationState::new(grid, snake, Cell::new(10, 10));

        assert!(state.running);
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.pending_heading, Heading::Right);
    }
}
