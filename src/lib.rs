//! Real-time grid snake with a fixed-timestep core.
//!
//! The core lives in [`game`]: a single mutable [`game::GameState`]
//! aggregate advanced by a per-tick update rule (direction buffering,
//! movement, growth, collision detection, food spawning, difficulty
//! progression) and driven by a frame-cadence scheduler. Everything else
//! renders snapshots of that state or feeds it input events.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
