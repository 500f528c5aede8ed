use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the score/level line below the play area and returns the
/// remaining play area above it.
///
/// This is the score and difficulty display surface: it re-reads the state
/// snapshot every frame, so it reflects any change the moment it happens.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::styled(
            format!(" Score: {}", state.score),
            Style::new()
                .fg(theme.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Level: {}", state.level),
            Style::new().fg(theme.hud_score),
        ),
        Span::styled(
            format!("   Length: {}", state.snake.len()),
            Style::new().fg(theme.menu_footer),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), hud_area);

    play_area
}
