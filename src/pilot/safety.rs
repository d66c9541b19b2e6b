use crate::game::{Cell, Grid, Heading, Snake};

/// Count the escape routes a position offers: axis-neighbors that are
/// in-bounds and not covered by the snake
///
/// Ranges over 0..=4; higher means more room if the head ends up here next.
pub fn safety_score(pos: Cell, snake: &Snake, grid: Grid) -> u8 {
    Heading::ALL
        .iter()
        .map(|&heading| pos.step(heading))
        .filter(|&neighbor| grid.in_bounds(neighbor) && !grid.is_occupied(neighbor, snake))
        .count() as u8
}
