use crate::game::{Heading, SimulationState};

use super::reachability::food_reachable;
use super::safety::safety_score;

/// One feasible move under evaluation
#[derive(Debug, Clone, Copy)]
struct Candidate {
    heading: Heading,
    food_dist: u32,
    safety: u8,
    reachable: bool,
}

/// Pick the snake's next heading
///
/// Greedy best-direction selection:
/// 1. Drop the reversal of the current heading and any move that is
///    out-of-bounds or lands on the body (tail included, since it is only
///    vacated after the head moves).
/// 2. Prefer moves from which the food is still reachable; if none are,
///    fall back to all feasible moves so self-trapping is still ranked.
/// 3. Order by ascending Manhattan distance to the food, then by descending
///    safety score. Exact ties resolve to the first candidate in
///    {Up, Down, Left, Right} order (stable sort over that enumeration).
///
/// With no feasible move at all, returns the previous pending heading
/// unchanged; the next tick's collision check ends the game.
pub fn select_heading(state: &SimulationState) -> Heading {
    let head = state.snake.head();
    let mut candidates: Vec<Candidate> = Vec::with_capacity(4);

    for heading in Heading::ALL {
        // A snake of length >= 2 can never reverse into itself
        if heading == state.snake.heading.opposite() {
            continue;
        }

        let cell = head.step(heading);
        if !state.grid.in_bounds(cell) || state.grid.is_occupied(cell, &state.snake) {
            continue;
        }

        candidates.push(Candidate {
            heading,
            food_dist: cell.manhattan_distance(state.food),
            safety: safety_score(cell, &state.snake, state.grid),
            reachable: food_reachable(cell, state.food, &state.snake, state.grid),
        });
    }

    if candidates.is_empty() {
        return state.pending_heading;
    }

    if candidates.iter().any(|c| c.reachable) {
        candidates.retain(|c| c.reachable);
    }

    // Stable sort keeps enumeration order on exact ties
    candidates.sort_by(|a, b| {
        a.food_dist
            .cmp(&b.food_dist)
            .then(b.safety.cmp(&a.safety))
    });

    candidates[0].heading
}
