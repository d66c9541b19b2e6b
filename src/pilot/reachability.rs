use std::collections::HashSet;

use crate::game::{Cell, Grid, Heading, Snake};

/// Check whether `target` can be reached from `start` through cells that are
/// in-bounds and not covered by the snake
///
/// The start cell itself is exempt from the occupancy check: it is the
/// candidate head, not yet part of the body in this hypothetical. Target
/// equality short-circuits before any occupancy test.
///
/// Explicit-stack flood fill over the 4-connected grid graph; the visited
/// set bounds the walk at N^2 cells.
pub fn food_reachable(start: Cell, target: Cell, snake: &Snake, grid: Grid) -> bool {
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        if cell == target {
            return true;
        }

        if !visited.insert(cell) {
            continue;
        }

        if !grid.in_bounds(cell) {
            continue;
        }

        if cell != start && grid.is_occupied(cell, snake) {
            continue;
        }

        for heading in Heading::ALL {
            stack.push(cell.step(heading));
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(cells: Vec<Cell>) -> Snake {
        Snake {
            cells,
            heading: Heading::Right,
        }
    }

    #[test]
    fn test_open_grid_reachable() {
        let grid = Grid::new(5);
        let snake = snake_at(vec![Cell::new(4, 4)]);

        assert!(food_reachable(
            Cell::new(0, 0),
            Cell::new(4, 0),
            &snake,
            grid
        ));
    }

    #[test]
    fn test_start_equals_target() {
        let grid = Grid::new(5);
        let snake = snake_at(vec![Cell::new(0, 0)]);

        assert!(food_reachable(
            Cell::new(2, 2),
            Cell::new(2, 2),
            &snake,
            grid
        ));
    }

    #[test]
    fn test_u_shape_leaves_alternate_path() {
        // 3x3 grid, body blocking the middle column except the top:
        //   . S .
        //   . S .
        //   T S s     (s = start, T = target)
        // The direct route is blocked but the path over the top is open.
        let grid = Grid::new(3);
        let snake = snake_at(vec![Cell::new(1, 1), Cell::new(1, 2)]);

        assert!(food_reachable(
            Cell::new(2, 2),
            Cell::new(0, 2),
            &snake,
            grid
        ));
    }

    #[test]
    fn test_enclosed_target_unreachable() {
        // Target in the corner, walled off by the body:
        //   T S .
        //   S S .
        let grid = Grid::new(3);
        let snake = snake_at(vec![Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)]);

        assert!(!food_reachable(
            Cell::new(2, 2),
            Cell::new(0, 0),
            &snake,
            grid
        ));
    }

    #[test]
    fn test_start_exempt_from_occupancy() {
        // Start sits on a body cell; the walk may still leave it.
        let grid = Grid::new(3);
        let snake = snake_at(vec![Cell::new(0, 0)]);

        assert!(food_reachable(
            Cell::new(0, 0),
            Cell::new(2, 2),
            &snake,
            grid
        ));
    }

    #[test]
    fn test_does_not_mutate_snake() {
        let grid = Grid::new(4);
        let snake = snake_at(vec![Cell::new(1, 1), Cell::new(1, 2)]);
        let before = snake.clone();

        food_reachable(Cell::new(0, 0), Cell::new(3, 3), &snake, grid);

        assert_eq!(snake, before);
    }
}
