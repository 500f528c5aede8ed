use std::time::Duration;

use gridsnake::config::GridSize;
use gridsnake::game::{DeathReason, GameState, GameStatus};
use gridsnake::input::{Direction, GameInput};
use gridsnake::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_turn_and_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );
    state.apply_input(GameInput::Start);
    state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
    state.food = Position { x: 2, y: 1 };

    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.score, 10);
}

#[test]
fn reversal_attempt_mid_interval_is_ignored() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 20,
            height: 20,
        },
        7,
    );
    state.apply_input(GameInput::Start);
    state.snake = Snake::new(Position { x: 10, y: 10 }, Direction::Right);
    state.food = Position { x: 0, y: 0 };

    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    // Left reversed the committed Right and was dropped.
    assert_eq!(state.snake.head(), Position { x: 11, y: 10 });

    state.apply_input(GameInput::Direction(Direction::Up));
    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    // Down overwrote the pending Up; it does not reverse committed Right.
    assert_eq!(state.snake.head(), Position { x: 11, y: 11 });
}

#[test]
fn restart_after_death_produces_a_fresh_running_game() {
    let grid = GridSize {
        width: 10,
        height: 10,
    };
    let mut state = GameState::new_with_seed(grid, 99);
    state.apply_input(GameInput::Start);
    state.snake = Snake::new(Position { x: 9, y: 5 }, Direction::Right);
    state.score = 70;

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);

    state.apply_input(GameInput::Start);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.tick_interval, Duration::from_millis(100));
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
    assert_eq!(state.snake.direction(), Direction::Right);
    assert!(!state.snake.occupies(state.food));

    // The fresh game plays normally.
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
}

#[test]
fn difficulty_ramps_while_chaining_food() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 40,
            height: 30,
        },
        5,
    );
    state.apply_input(GameInput::Start);
    state.snake = Snake::new(Position { x: 2, y: 15 }, Direction::Right);

    // Collect five food items in a row: 50 points, level 2, 85 ms.
    for _ in 0..5 {
        state.food = state.snake.next_head();
        state.tick();
        assert_eq!(state.status, GameStatus::Running);
    }

    assert_eq!(state.score, 50);
    assert_eq!(state.level, 2);
    assert_eq!(state.tick_interval, Duration::from_millis(85));
    assert_eq!(state.snake.len(), 6);
}
