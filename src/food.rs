use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Draws a uniformly random cell not occupied by the snake.
///
/// Bounded rejection sampling: after `W*H + 1` failed draws the board is
/// considered full and `None` is returned, which the caller reports as a
/// victory. The cap makes termination unconditional; the snake is the only
/// occupant, so exhaustion can only happen when it has (nearly) filled the
/// grid.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let max_attempts = bounds.total_cells() + 1;

    for _ in 0..max_attempts {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    None
}
