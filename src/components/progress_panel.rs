// ABOUTME: Side panel listing per-template completion with per-brand rows

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::theme::{panel, row_style, GOLD, MUTED_GRAY, SELECTION_GREEN, SOFT_WHITE};
use crate::app::state::{AppState, Focus};
use crate::wizard::ProgressStatus;

pub struct ProgressPanelComponent;

impl ProgressPanelComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Progress;
        let block = panel("Progress", focused);

        if !state.progress_expanded {
            let collapsed = List::new(vec![ListItem::new(Span::styled(
                "p to expand",
                Style::default().fg(MUTED_GRAY),
            ))])
            .block(block);
            frame.render_widget(collapsed, area);
            return;
        }

        let report = state.progress_report();
        let mut items = Vec::new();
        let mut brand_idx = 0;

        for template in &report.templates {
            let status_style = match template.status {
                ProgressStatus::NotStarted => Style::default().fg(MUTED_GRAY),
                ProgressStatus::Combos { completed, total } if completed == total => {
                    Style::default().fg(SELECTION_GREEN)
                }
                ProgressStatus::Combos { .. } => Style::default().fg(GOLD),
            };

            items.push(ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", template.icon)),
                Span::styled(
                    template.name,
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", template.status), status_style),
            ])));

            for brand in &template.brands {
                let selected = focused && brand_idx == state.progress_cursor;
                let badge_style = if brand.is_complete() {
                    Style::default().fg(SELECTION_GREEN)
                } else {
                    Style::default().fg(MUTED_GRAY)
                };
                let mut spans = vec![
                    Span::styled(format!("   {} ", brand.badge()), badge_style),
                    Span::styled(brand.brand.label(), row_style(selected)),
                    Span::styled(
                        format!("  {}/{}", brand.completed_channels, brand.total_channels),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ];
                if selected {
                    spans.push(Span::styled("  [Enter] Go", Style::default().fg(GOLD)));
                }
                items.push(ListItem::new(Line::from(spans)));
                brand_idx += 1;
            }
        }

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Default for ProgressPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}
