use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that would otherwise be used
/// for bounds, making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, rounded down on both axes.
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

/// Fixed play-field width in cells.
pub const GRID_WIDTH: u16 = 40;

/// Fixed play-field height in cells.
pub const GRID_HEIGHT: u16 = 30;

/// Points awarded per food item.
pub const SCORE_PER_FOOD: u32 = 10;

/// Tick interval at difficulty level 1, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 100;

/// Target delay between frame iterations, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Cyan-on-dark default theme.
pub const THEME_DEFAULT: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Magenta,
    border: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Glyph for every snake segment; head and body differ only by color.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";
