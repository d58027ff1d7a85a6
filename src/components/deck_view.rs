// ABOUTME: Deck thumbnails, the slide canvas and the insight cards

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        List, ListItem, Paragraph, Wrap,
    },
    Frame,
};

use super::theme::{
    panel, row_style, CORNFLOWER_BLUE, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE,
};
use crate::app::state::{AppState, Focus};
use crate::models::CANVAS_INSIGHTS;

pub struct DeckViewComponent;

impl DeckViewComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(20)])
            .split(area);

        self.render_thumbnails(frame, layout[0], state);
        self.render_canvas(frame, layout[1], state);
    }

    fn render_thumbnails(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Deck;

        let items: Vec<ListItem> = if state.deck.is_empty() {
            vec![ListItem::new(Span::styled(
                "No slides yet",
                Style::default().fg(MUTED_GRAY),
            ))]
        } else {
            state
                .deck
                .slides()
                .iter()
                .enumerate()
                .map(|(idx, slide)| {
                    let active = state.deck.active() == Some(slide.number);
                    let number_style = if active {
                        Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(MUTED_GRAY)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{:>2} ", slide.number), number_style),
                        Span::styled(slide.title, row_style(focused && idx == state.deck_cursor)),
                    ]))
                })
                .collect()
        };

        frame.render_widget(List::new(items).block(panel("Deck", focused)), area);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = panel("Canvas", false);

        let Some(canvas) = state.deck.canvas() else {
            let empty = Paragraph::new(Span::styled(
                "Generate slides to see them here",
                Style::default().fg(MUTED_GRAY),
            ))
            .block(block);
            frame.render_widget(empty, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                canvas.header.as_str(),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(canvas.subtitle, Style::default().fg(SOFT_WHITE))),
            Line::from(""),
            Line::from(Span::styled(
                "KEY INSIGHTS",
                Style::default().fg(MUTED_GRAY).add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(CANVAS_INSIGHTS.iter().map(|insight| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(CORNFLOWER_BLUE)),
                Span::styled(*insight, Style::default().fg(SOFT_WHITE)),
            ])
        }));

        let paragraph = Paragraph::new(lines)
            .block(block.title(
                Title::from(format!(" Slide {} ", canvas.number)).position(Position::Bottom),
            ))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    pub fn render_insights(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Insights;

        let items: Vec<ListItem> = state
            .insights
            .iter()
            .enumerate()
            .map(|(idx, card)| {
                let selected = focused && idx == state.insight_cursor;
                let button_style = if card.is_added() {
                    Style::default().fg(SELECTION_GREEN)
                } else {
                    Style::default().fg(GOLD)
                };
                ListItem::new(vec![
                    Line::from(Span::styled(card.text, row_style(selected))),
                    Line::from(Span::styled(
                        format!("  {}", card.button_label()),
                        button_style,
                    )),
                ])
            })
            .collect();

        frame.render_widget(List::new(items).block(panel("Insights", focused)), area);
    }
}

impl Default for DeckViewComponent {
    fn default() -> Self {
        Self::new()
    }
}
