// ABOUTME: Query bar with suggestions and the expanded response panel

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    centered_rect, panel, row_style, CORNFLOWER_BLUE, GOLD, MUTED_GRAY, SELECTION_GREEN,
    SOFT_WHITE,
};
use crate::app::state::{AppState, Focus};
use crate::wizard::QUERY_SUGGESTIONS;

pub struct QueryBarComponent;

impl QueryBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// The single-line input at the bottom of the screen
    pub fn render_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Query;
        let text = if state.query.input.is_empty() && !focused {
            Span::styled(
                "Ask about performance, ROI or insights... (/)",
                Style::default().fg(MUTED_GRAY),
            )
        } else {
            Span::styled(
                format!("{}{}", state.query.input, if focused { "▏" } else { "" }),
                Style::default().fg(SOFT_WHITE),
            )
        };

        let bar = Paragraph::new(Line::from(vec![
            Span::styled("❯ ", Style::default().fg(CORNFLOWER_BLUE)),
            text,
        ]))
        .block(panel("Ask", focused));
        frame.render_widget(bar, area);
    }

    /// Suggestions dropdown drawn just above the bar
    pub fn render_suggestions(&self, frame: &mut Frame, bar: Rect, state: &AppState) {
        if !state.query.suggestions_visible {
            return;
        }

        let height = QUERY_SUGGESTIONS.len() as u16 + 2;
        let area = Rect {
            x: bar.x,
            y: bar.y.saturating_sub(height),
            width: bar.width.min(60),
            height,
        };

        let items: Vec<ListItem> = QUERY_SUGGESTIONS
            .iter()
            .enumerate()
            .map(|(idx, suggestion)| {
                ListItem::new(Span::styled(
                    *suggestion,
                    row_style(idx == state.query.suggestion_cursor),
                ))
            })
            .collect();

        frame.render_widget(Clear, area);
        frame.render_widget(List::new(items).block(panel("Suggestions", true)), area);
    }

    /// Response panel overlay while expanded
    pub fn render_response(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if !state.query.expanded {
            return;
        }

        let popup = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup);

        let mut lines = Vec::new();
        if state.query.is_loading() {
            lines.push(Line::from(Span::styled(
                "Thinking...",
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::ITALIC),
            )));
        } else if let Some(response) = state.query.response.as_ref() {
            lines.push(Line::from(Span::styled(
                response.text.as_str(),
                Style::default().fg(SOFT_WHITE),
            )));
            lines.push(Line::from(""));
            let button = if state.query.response_added_until.is_some() {
                Span::styled("✓ Added", Style::default().fg(SELECTION_GREEN))
            } else {
                Span::styled("[A] + Add to Slide", Style::default().fg(GOLD))
            };
            lines.push(Line::from(button));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc close · H history",
            Style::default().fg(MUTED_GRAY),
        )));

        let paragraph = Paragraph::new(lines)
            .block(panel("Answer", true))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup);
    }
}

impl Default for QueryBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
