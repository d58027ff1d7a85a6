// ABOUTME: Main layout component arranging the wizard, side panels and overlays

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

use super::theme::{
    centered_rect, CORNFLOWER_BLUE, DARK_BG, ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG,
    SELECTION_GREEN, SOFT_WHITE, WARNING_ORANGE,
};
use super::{DeckViewComponent, ProgressPanelComponent, QueryBarComponent, WizardComponent};
use crate::app::state::{AppState, NotificationType};

pub struct LayoutComponent {
    wizard: WizardComponent,
    progress_panel: ProgressPanelComponent,
    query_bar: QueryBarComponent,
    deck_view: DeckViewComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            wizard: WizardComponent::new(),
            progress_panel: ProgressPanelComponent::new(),
            query_bar: QueryBarComponent::new(),
            deck_view: DeckViewComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.size();
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(10),   // Panels
                Constraint::Length(3), // Query bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(10)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(8)])
            .split(columns[1]);

        self.render_title_bar(frame, rows[0], state);
        self.wizard.render(frame, left[0], state);
        self.deck_view.render(frame, left[1], state);
        self.progress_panel.render(frame, right[0], state);
        self.deck_view.render_insights(frame, right[1], state);
        self.query_bar.render_bar(frame, rows[2], state);

        // Overlays
        self.query_bar.render_suggestions(frame, rows[2], state);
        self.query_bar.render_response(frame, area, state);
        self.render_notifications(frame, area, state);
        self.render_alert(frame, area, state);
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let workspace = state
            .navigator
            .state()
            .selected_workspace
            .as_deref()
            .and_then(|id| state.config.workspaces.iter().find(|w| w.id == id))
            .map_or("no workspace", |w| w.name.as_str());

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " Deckmate ",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled("· ", Style::default().fg(MUTED_GRAY)),
            Span::styled(workspace, Style::default().fg(CORNFLOWER_BLUE)),
        ]))
        .style(Style::default().bg(PANEL_BG));
        frame.render_widget(title, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.current_notifications(Instant::now());
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 44.min(area.width);
        let notification_height = notifications.len() as u16 * 3; // 3 lines per notification

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break;
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓ ", SELECTION_GREEN),
                NotificationType::Warning => ("⚠ ", WARNING_ORANGE),
                NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let notification_widget = Paragraph::new(Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(color)),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(PANEL_BG)),
            )
            .wrap(Wrap { trim: true });

            frame.render_widget(Clear, single_notification_area);
            frame.render_widget(notification_widget, single_notification_area);
        }
    }

    /// Blocking alert; any key dismisses it
    fn render_alert(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(message) = state.alert.as_deref() else {
            return;
        };

        let popup = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup);

        let alert = Paragraph::new(vec![
            Line::from(Span::styled(
                message,
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ERROR_RED))
                .style(Style::default().bg(PANEL_BG))
                .title(" Alert ")
                .title_style(Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)),
        )
        .wrap(Wrap { trim: true });
        frame.render_widget(alert, popup);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
