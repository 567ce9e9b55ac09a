use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Values the HUD shows besides the session itself.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD: score, high score, tick interval, pause flag.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    let theme = info.theme;
    let muted = Style::default().fg(theme.hud_muted);
    let value = Style::default()
        .fg(theme.hud_value)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Score ", muted),
        Span::styled(state.session.score.to_string(), value),
        Span::styled("   Hi ", muted),
        Span::styled(info.high_score.to_string(), value),
        Span::styled("   Tick ", muted),
        Span::styled(format!("{}ms", state.tick_interval_ms()), value),
    ];

    if state.session.paused {
        spans.push(Span::styled(
            "   PAUSED",
            Style::default().fg(theme.food).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}
