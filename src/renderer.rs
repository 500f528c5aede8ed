use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, Theme, GLYPH_FOOD, GLYPH_SNAKE};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders one full frame from an immutable state snapshot.
///
/// Runs every frame regardless of whether a tick fired; the core never
/// reads anything back from here.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status {
        GameStatus::NotStarted => render_start_menu(frame, play_area, theme),
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, play_area, state.score, state.death_reason, false, theme);
        }
        GameStatus::Victory => {
            render_game_over_menu(frame, play_area, state.score, state.death_reason, true, theme);
        }
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(theme.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
