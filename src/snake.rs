use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one step in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Mutable snake state plus direction buffering.
///
/// Holds the committed direction (used to compute movement) and a single
/// pending slot written by the input mapper. The pending slot is promoted to
/// committed once per tick; the last accepted input before that promotion
/// wins.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Buffers a direction for the next tick.
    ///
    /// Rejected when `direction` reverses the *committed* direction, so two
    /// quick inputs cannot chain into a 180° turn within one tick interval.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = direction;
        }
    }

    /// Promotes the pending direction to committed. Called once per tick,
    /// before the new head is computed.
    pub fn commit_pending(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Returns the head position for the next movement step, from the
    /// committed direction.
    #[must_use]
    pub fn next_head(&self) -> Position {
        self.head().stepped(self.direction)
    }

    /// Applies one movement step: prepends `new_head` and, unless `grew`,
    /// pops the tail. Growth is exactly one segment per food item.
    pub fn advance(&mut self, new_head: Position, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true iff `cell` overlaps any segment excluding the current
    /// head.
    ///
    /// Evaluated on the body as it exists before the new head is prepended.
    /// The tail cell counts as occupied even though it is about to be
    /// vacated; chasing your own tail into that cell is a collision.
    /// Vacuously false for a one-segment snake.
    #[must_use]
    pub fn hits_body(&self, cell: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == cell)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the buffered direction awaiting the next tick.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn tick(snake: &mut Snake, grew: bool) {
        snake.commit_pending();
        let next = snake.next_head();
        snake.advance(next, grew);
    }

    #[test]
    fn bounds_check_accepts_corners_and_center() {
        let bounds = GridSize {
            width: 40,
            height: 30,
        };

        for corner in [
            Position { x: 0, y: 0 },
            Position { x: 39, y: 0 },
            Position { x: 0, y: 29 },
            Position { x: 39, y: 29 },
        ] {
            assert!(corner.is_within_bounds(bounds));
        }
        assert!(Position { x: 20, y: 15 }.is_within_bounds(bounds));
    }

    #[test]
    fn bounds_check_rejects_each_side() {
        let bounds = GridSize {
            width: 40,
            height: 30,
        };

        assert!(!Position { x: -1, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 40, y: 10 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: -1 }.is_within_bounds(bounds));
        assert!(!Position { x: 10, y: 30 }.is_within_bounds(bounds));
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        tick(&mut snake, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        tick(&mut snake, true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert!(snake.occupies(Position { x: 5, y: 5 }));
    }

    #[test]
    fn buffer_rejects_reversal_for_every_direction() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::new(Position { x: 5, y: 5 }, direction);

            snake.buffer_direction(direction.opposite());

            assert_eq!(snake.pending_direction(), direction);
        }
    }

    #[test]
    fn buffer_accepts_perpendicular_turns() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.buffer_direction(Direction::Up);
        assert_eq!(snake.pending_direction(), Direction::Up);

        snake.buffer_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn buffer_checks_against_committed_not_pending() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        // Up is accepted, then Down: Down reverses the *pending* Up but not
        // the committed Right, so it must overwrite the pending slot.
        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Down);

        assert_eq!(snake.pending_direction(), Direction::Down);

        tick(&mut snake, false);
        assert_eq!(snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn last_buffered_input_before_tick_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Down);
        snake.buffer_direction(Direction::Up);

        tick(&mut snake, false);
        assert_eq!(snake.head(), Position { x: 5, y: 4 });
    }

    #[test]
    fn body_hit_excludes_head_and_includes_tail() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 2, y: 4 },
                Position { x: 3, y: 4 },
            ],
            Direction::Right,
        );

        // Own head cell is not a body hit.
        assert!(!snake.hits_body(Position { x: 3, y: 3 }));
        // Interior segment.
        assert!(snake.hits_body(Position { x: 2, y: 3 }));
        // Tail counts as occupied even though it is about to be vacated.
        assert!(snake.hits_body(Position { x: 3, y: 4 }));
        // Free cell.
        assert!(!snake.hits_body(Position { x: 4, y: 3 }));
    }

    #[test]
    fn single_segment_snake_never_hits_itself() {
        let snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(!snake.hits_body(snake.head().stepped(direction)));
        }
    }
}
