use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_TICK_INTERVAL_MS, SCORE_PER_FOOD};
use crate::difficulty;
use crate::food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Reset complete, waiting for the start token.
    NotStarted,
    Running,
    Paused,
    GameOver,
    /// Terminal variant of game over: the snake filled the board.
    Victory,
}

impl GameStatus {
    /// Returns true for the terminal states.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// What ended the game, for the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
///
/// The single mutable aggregate: input lands in the snake's pending
/// direction slot and the status flags, the tick engine does everything
/// else, and rendering only ever borrows it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub level: u32,
    pub tick_interval: Duration,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    last_tick: Option<Instant>,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        let (cx, cy) = bounds.center();
        let start = Position { x: cx, y: cy };

        let mut state = Self {
            snake: Snake::new(start, Direction::Right),
            food: start,
            score: 0,
            level: 1,
            tick_interval: Duration::from_millis(INITIAL_TICK_INTERVAL_MS),
            tick_count: 0,
            status: GameStatus::NotStarted,
            death_reason: None,
            bounds,
            last_tick: None,
            rng,
        };
        state.reset();
        state
    }

    /// Reinitializes every field for a new game, keeping the RNG stream.
    ///
    /// Leaves the state in `NotStarted`: a one-cell snake at the grid
    /// center heading right, score 0, level 1, the initial tick interval,
    /// and freshly spawned food.
    pub fn reset(&mut self) {
        let (cx, cy) = self.bounds.center();
        let start = Position { x: cx, y: cy };

        self.snake = Snake::new(start, Direction::Right);
        self.score = 0;
        self.level = 1;
        self.tick_interval = Duration::from_millis(INITIAL_TICK_INTERVAL_MS);
        self.tick_count = 0;
        self.status = GameStatus::NotStarted;
        self.death_reason = None;
        self.last_tick = None;

        match food::spawn_position(&mut self.rng, self.bounds, &self.snake) {
            Some(position) => self.food = position,
            // Only reachable on a degenerate one-cell grid.
            None => self.status = GameStatus::Victory,
        }
    }

    /// Returns the grid bounds for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Applies one external input event.
    ///
    /// Direction input is buffered in any non-terminal state (also before
    /// start and while paused) so the first tick honors the player's last
    /// choice. Pause and start tokens are no-ops outside their applicable
    /// states.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if !self.status.is_over() {
                    self.snake.buffer_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Running => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Running,
                    other => other,
                };
            }
            GameInput::Start => match self.status {
                GameStatus::NotStarted => self.start(),
                GameStatus::GameOver | GameStatus::Victory => {
                    self.reset();
                    self.start();
                }
                GameStatus::Running | GameStatus::Paused => {}
            },
            GameInput::Quit => {}
        }
    }

    fn start(&mut self) {
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Running;
            self.last_tick = None;
        }
    }

    /// Drives the fixed-timestep schedule from the frame cadence.
    ///
    /// Call once per frame with the current instant. Returns true when a
    /// tick fired. The first call after a (re)start only records `now` as
    /// the baseline, so the first real tick fires one full interval after
    /// the first rendered frame rather than from a stale epoch.
    pub fn advance_time(&mut self, now: Instant) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }

        let baseline = *self.last_tick.get_or_insert(now);
        if now.duration_since(baseline) < self.tick_interval {
            return false;
        }

        self.tick();
        self.last_tick = Some(now);
        true
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Order matters: the pending direction is committed first, collisions
    /// are checked against the pre-advance body, and food spawning runs
    /// after growth so the new head counts as occupied.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.snake.commit_pending();
        let new_head = self.snake.next_head();

        if !new_head.is_within_bounds(self.bounds) {
            self.death_reason = Some(DeathReason::WallCollision);
            self.status = GameStatus::GameOver;
            return;
        }

        if self.snake.hits_body(new_head) {
            self.death_reason = Some(DeathReason::SelfCollision);
            self.status = GameStatus::GameOver;
            return;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if ate {
            self.score += SCORE_PER_FOOD;
            let setting = difficulty::level_for(self.score);
            self.level = setting.level;
            self.tick_interval = setting.tick_interval;

            match food::spawn_position(&mut self.rng, self.bounds, &self.snake) {
                Some(position) => self.food = position,
                None => self.status = GameStatus::Victory,
            }
        }
    }
}
