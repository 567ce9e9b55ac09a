use ratatui::style::Color;

use crate::snake::Cell;

/// Side length of one logical cell, in pixels.
///
/// Every cell coordinate the game produces is a multiple of this value, and
/// movement advances by exactly this amount per tick.
pub const GRID_SIZE: i32 = 20;

/// Playfield width in pixels.
pub const BOARD_WIDTH: i32 = 400;

/// Playfield height in pixels.
pub const BOARD_HEIGHT: i32 = 400;

/// Tick interval of a fresh session, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Tick interval floor, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// How much the tick interval drops on each speed-up, in milliseconds.
pub const TICK_INTERVAL_STEP_MS: u64 = 10;

/// Points granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Score step between speed-ups.
pub const SPEED_UP_SCORE_STEP: u32 = 50;

/// Pixel-space playfield bounds.
///
/// Replaces the anonymous width/height pair that would otherwise travel
/// through every signature, and keeps the grid arithmetic in one place.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    /// The standard 400×400 board.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }

    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Number of grid columns.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / GRID_SIZE
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / GRID_SIZE
    }

    /// Grid-aligned cell at the middle of the board.
    #[must_use]
    pub fn center_cell(self) -> Cell {
        Cell {
            x: (self.columns() / 2) * GRID_SIZE,
            y: (self.rows() / 2) * GRID_SIZE,
        }
    }

    /// Total number of grid cells.
    #[must_use]
    pub fn total_cells(self) -> usize {
        self.columns() as usize * self.rows() as usize
    }
}

/// Static obstacle rectangle in pixel space.
///
/// Walls are fixed configuration and need not be grid-aligned; collision is
/// a rectangle intersection test, not a cell identity test.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Wall {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Wall {
    /// Returns true when this wall intersects the `GRID_SIZE`×`GRID_SIZE`
    /// box anchored at `cell`.
    #[must_use]
    pub fn overlaps_cell(self, cell: Cell) -> bool {
        cell.x < self.x + self.width
            && cell.x + GRID_SIZE > self.x
            && cell.y < self.y + self.height
            && cell.y + GRID_SIZE > self.y
    }
}

/// Built-in obstacle layout for the standard board.
///
/// The second wall sits off the grid on purpose; it clips two columns of
/// cells rather than covering whole ones.
pub const DEFAULT_WALLS: [Wall; 2] = [
    Wall {
        x: 100,
        y: 100,
        width: 200,
        height: 20,
    },
    Wall {
        x: 50,
        y: 300,
        width: 20,
        height: 100,
    },
];

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub wall: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_value: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

/// Palette of the canvas build this game is modeled after.
pub const THEME_CANVAS: Theme = Theme {
    name: "Canvas",
    snake_head: Color::Rgb(0x4c, 0xaf, 0x50),
    snake_body: Color::Rgb(0x2e, 0x7d, 0x32),
    food: Color::Rgb(0xff, 0x52, 0x52),
    wall: Color::Rgb(0x55, 0x55, 0x55),
    play_bg: Color::Rgb(0x11, 0x11, 0x11),
    border_fg: Color::Rgb(0x55, 0x55, 0x55),
    hud_value: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Rgb(0x4c, 0xaf, 0x50),
};

/// Classic blue snake on dark.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Blue,
    food: Color::Red,
    wall: Color::Gray,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_value: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
};

/// Neon magenta/yellow.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    wall: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_value: Color::Magenta,
    hud_muted: Color::DarkGray,
    menu_title: Color::Magenta,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CANVAS, THEME_CLASSIC, THEME_NEON];

/// Directional head glyphs.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food glyph, and its smaller pulse phase.
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_FOOD_PULSE: &str = "•";

/// Wall glyph.
pub const GLYPH_WALL: &str = "█";

#[cfg(test)]
mod tests {
    use super::{Board, Wall, DEFAULT_WALLS, GRID_SIZE};
    use crate::snake::Cell;

    #[test]
    fn board_contains_matches_pixel_bounds() {
        let board = Board::standard();

        assert!(board.contains(Cell { x: 0, y: 0 }));
        assert!(board.contains(Cell { x: 380, y: 380 }));
        assert!(!board.contains(Cell { x: -20, y: 0 }));
        assert!(!board.contains(Cell { x: 400, y: 0 }));
        assert!(!board.contains(Cell { x: 0, y: 400 }));
    }

    #[test]
    fn center_cell_is_grid_aligned() {
        let center = Board::standard().center_cell();

        assert_eq!(center, Cell { x: 200, y: 200 });
        assert_eq!(center.x % GRID_SIZE, 0);
        assert_eq!(center.y % GRID_SIZE, 0);
    }

    #[test]
    fn wall_overlap_uses_rectangle_intersection() {
        let wall = Wall {
            x: 100,
            y: 100,
            width: 200,
            height: 20,
        };

        // Cells along the wall row intersect it.
        assert!(wall.overlaps_cell(Cell { x: 100, y: 100 }));
        assert!(wall.overlaps_cell(Cell { x: 280, y: 100 }));
        // Touching edges do not count as overlap.
        assert!(!wall.overlaps_cell(Cell { x: 80, y: 100 }));
        assert!(!wall.overlaps_cell(Cell { x: 300, y: 100 }));
        assert!(!wall.overlaps_cell(Cell { x: 100, y: 80 }));
        assert!(!wall.overlaps_cell(Cell { x: 100, y: 120 }));
    }

    #[test]
    fn off_grid_wall_clips_neighboring_columns() {
        // x spans 50..70, between the cell columns at 40 and 60.
        let wall = DEFAULT_WALLS[1];

        assert!(wall.overlaps_cell(Cell { x: 40, y: 300 }));
        assert!(wall.overlaps_cell(Cell { x: 60, y: 380 }));
        assert!(!wall.overlaps_cell(Cell { x: 20, y: 300 }));
        assert!(!wall.overlaps_cell(Cell { x: 80, y: 300 }));
        // Above the wall's vertical extent.
        assert!(!wall.overlaps_cell(Cell { x: 40, y: 280 }));
    }
}
