use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use gridsnake::config::{GridSize, FRAME_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH, THEME_DEFAULT};
use gridsnake::error::AppError;
use gridsnake::game::GameState;
use gridsnake::input::{self, GameInput};
use gridsnake::renderer;
use gridsnake::terminal_runtime::{cleanup_terminal_best_effort, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about = "Real-time grid snake in the terminal")]
struct Cli {
    /// Seed the RNG for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(&cli, &mut session)?;
    Ok(())
}

fn run(cli: &Cli, session: &mut TerminalSession) -> Result<(), AppError> {
    let bounds = GridSize {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME_DEFAULT))?;

        if let Some(game_input) = input::poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }
            state.apply_input(game_input);
        }

        state.advance_time(Instant::now());

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
