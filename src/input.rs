use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit step this direction applies to a cell.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Start,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// `current` must be the *committed* direction, never the pending one, so
/// that two rapid inputs inside one tick interval cannot chain into a
/// reversal.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps one logical key token to a game input.
///
/// Arrow keys and WASD (either case) steer, Space/Enter starts or restarts,
/// `p`/Esc toggles pause, `q` quits. Every other key yields `None` and is
/// ignored by the caller.
#[must_use]
pub fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameInput::Start),
        KeyCode::Char('p' | 'P') | KeyCode::Esc => Some(GameInput::Pause),
        KeyCode::Char('q' | 'Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Polls the terminal for at most one mapped input event.
///
/// Returns `Ok(None)` when no key is pending or the pending key has no
/// mapping. Non-blocking: uses a zero-duration poll so the frame loop keeps
/// its cadence.
pub fn poll_input() -> io::Result<Option<GameInput>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        _ => Ok(None),
    }
}
