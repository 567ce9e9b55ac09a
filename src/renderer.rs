use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{
    Board, Theme, GLYPH_FOOD, GLYPH_FOOD_PULSE, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
    GLYPH_WALL, GRID_SIZE,
};
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Cell;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};
use crate::ui::Screen;

/// Renders one full frame from immutable state.
///
/// One terminal cell per grid cell: pixel coordinates divide by
/// [`GRID_SIZE`] on the way to the screen.
pub fn render(frame: &mut Frame<'_>, state: &GameState, screen: &Screen, info: &HudInfo<'_>) {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

    render_hud(frame, hud_area, state, info);

    let theme = info.theme;
    let block = Block::bordered().border_style(Style::default().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let board = state.board();
    if i32::from(inner.width) < board.columns() || i32::from(inner.height) < board.rows() {
        render_too_small(frame, inner, board, theme);
        return;
    }

    let field = Rect {
        x: inner.x,
        y: inner.y,
        width: board.columns() as u16,
        height: board.rows() as u16,
    };
    frame.render_widget(
        Block::new().style(Style::default().bg(theme.play_bg)),
        field,
    );

    render_walls(frame, inner, state, theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match screen {
        Screen::Start => render_start_menu(frame, play_area, info.high_score, theme),
        Screen::GameOver {
            final_score,
            new_record,
            collision,
        } => render_game_over_menu(
            frame,
            play_area,
            *final_score,
            info.high_score,
            *new_record,
            *collision,
            theme,
        ),
        Screen::Playing if state.session.paused => render_pause_menu(frame, play_area, theme),
        Screen::Playing => {}
    }
}

fn render_walls(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let board = state.board();
    let style = Style::default().fg(theme.wall).bg(theme.play_bg);

    let buffer = frame.buffer_mut();
    for row in 0..board.rows() {
        for col in 0..board.columns() {
            let cell = Cell {
                x: col * GRID_SIZE,
                y: row * GRID_SIZE,
            };
            if !state.walls().iter().any(|wall| wall.overlaps_cell(cell)) {
                continue;
            }
            let Some((x, y)) = cell_to_terminal(inner, board, cell) else {
                continue;
            };
            buffer.set_string(x, y, GLYPH_WALL, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, state.board(), state.session.food.position) else {
        return;
    };

    // Two-phase pulse, alternating per tick.
    let glyph = if state.session.tick_count % 2 == 0 {
        GLYPH_FOOD
    } else {
        GLYPH_FOOD_PULSE
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, glyph, Style::default().fg(theme.food).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let board = state.board();
    let head = state.session.snake.head();
    let tail = state.session.snake.cells().last().copied();

    let buffer = frame.buffer_mut();
    for cell in state.session.snake.cells() {
        let Some((x, y)) = cell_to_terminal(inner, board, *cell) else {
            continue;
        };

        if *cell == head {
            buffer.set_string(
                x,
                y,
                head_glyph(state.session.snake.direction()),
                Style::default()
                    .fg(theme.snake_head)
                    .bg(theme.play_bg)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*cell) == tail {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_TAIL,
                Style::default().fg(theme.snake_body).bg(theme.play_bg),
            );
            continue;
        }

        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_BODY,
            Style::default().fg(theme.snake_body).bg(theme.play_bg),
        );
    }
}

fn render_too_small(frame: &mut Frame<'_>, inner: Rect, board: Board, theme: &Theme) {
    let message = format!(
        "Terminal too small: need at least {}x{} cells",
        board.columns(),
        board.rows(),
    );
    frame.render_widget(
        Paragraph::new(Line::from(message))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_muted)),
        inner,
    );
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn cell_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    if !board.contains(cell) {
        return None;
    }

    let col = u16::try_from(cell.x / GRID_SIZE).ok()?;
    let row = u16::try_from(cell.y / GRID_SIZE).ok()?;

    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
