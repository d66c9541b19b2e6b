use super::state::{Cell, Snake};

/// The fixed square coordinate space the game plays on
///
/// Carries no state beyond the side length; bounds and occupancy are pure
/// predicates over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Side length N; valid coordinates are 0 <= x,y < N
    pub size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Check if a cell is within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.size as i32 && cell.y >= 0 && cell.y < self.size as i32
    }

    /// Check if a cell is covered by any snake segment
    pub fn is_occupied(&self, cell: Cell, snake: &Snake) -> bool {
        snake.contains(cell)
    }
}
