// ABOUTME: Main slide wizard component
// Renders the breadcrumb header and one screen per wizard step

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::theme::{
    confidence_color, panel, row_style, CORNFLOWER_BLUE, GOLD, MUTED_GRAY, PANEL_BG,
    SELECTION_GREEN, SOFT_WHITE, SUBDUED_BORDER,
};
use crate::app::state::{AppState, Focus};
use crate::models::{BrandSelection, Channel, TemplateKey};
use crate::wizard::{IndicatorStatus, WizardStep};

pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Breadcrumb
                Constraint::Min(8),    // Step content
                Constraint::Length(1), // Key hints
            ])
            .split(area);

        self.render_breadcrumb(frame, layout[0], state);
        self.render_step_content(frame, layout[1], state);
        self.render_hints(frame, layout[2], state);
    }

    /// Breadcrumb dots for the four selection steps
    fn render_breadcrumb(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let current = state.current_step();
        let mut spans = vec![Span::raw("  ")];

        let targets: Vec<WizardStep> = WizardStep::all()
            .iter()
            .copied()
            .filter(WizardStep::is_breadcrumb_target)
            .collect();

        for (idx, step) in targets.iter().enumerate() {
            let (icon, style) = if step.rank() < current.rank() {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if *step == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if *step == current {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < targets.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        let breadcrumb = Paragraph::new(Line::from(spans))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(breadcrumb, area);
    }

    fn render_step_content(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        match state.current_step() {
            WizardStep::WorkspaceSelection => self.render_workspaces(frame, area, state),
            WizardStep::TemplateSelection => self.render_templates(frame, area, state),
            WizardStep::BrandSelection => self.render_brands(frame, area, state),
            WizardStep::ChannelSelection => self.render_channels(frame, area, state),
            WizardStep::BrandPreview | WizardStep::OtherPreview => {
                self.render_preview(frame, area, state)
            }
            WizardStep::Generating => self.render_generating(frame, area, state),
            WizardStep::Success => self.render_success(frame, area, state),
        }
    }

    fn focused(state: &AppState) -> bool {
        state.focus == Focus::Wizard
    }

    fn cursor_marker(selected: bool) -> Span<'static> {
        if selected {
            Span::styled("▶ ", Style::default().fg(SELECTION_GREEN))
        } else {
            Span::raw("  ")
        }
    }

    fn render_workspaces(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .config
            .workspaces
            .iter()
            .enumerate()
            .map(|(idx, workspace)| {
                let selected = idx == state.cursor;
                ListItem::new(vec![
                    Line::from(vec![
                        Self::cursor_marker(selected),
                        Span::styled(workspace.name.as_str(), row_style(selected)),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", workspace.description),
                        Style::default().fg(MUTED_GRAY),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(panel(
            WizardStep::WorkspaceSelection.title(),
            Self::focused(state),
        ));
        frame.render_widget(list, area);
    }

    fn render_templates(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = TemplateKey::ALL
            .iter()
            .enumerate()
            .map(|(idx, key)| {
                let template = state.catalog.template(*key);
                let selected = idx == state.cursor;
                let needs = match (template.needs_brand, template.needs_channel) {
                    (true, true) => "brand + channel",
                    (true, false) => "brand",
                    _ => "no selection needed",
                };
                ListItem::new(Line::from(vec![
                    Self::cursor_marker(selected),
                    Span::styled(template.name, row_style(selected)),
                    Span::styled(
                        format!("  {} slides · {}", template.slides.len(), needs),
                        Style::default().fg(MUTED_GRAY),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(panel(
            WizardStep::TemplateSelection.title(),
            Self::focused(state),
        ));
        frame.render_widget(list, area);
    }

    fn render_brands(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = BrandSelection::options()
            .into_iter()
            .enumerate()
            .map(|(idx, option)| {
                let selected = idx == state.cursor;
                ListItem::new(Line::from(vec![
                    Self::cursor_marker(selected),
                    Span::styled(option.label(), row_style(selected)),
                ]))
            })
            .collect();

        let list = List::new(items).block(panel(
            WizardStep::BrandSelection.title(),
            Self::focused(state),
        ));
        frame.render_widget(list, area);
    }

    fn render_channels(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let selection = state.navigator.state();
        let checkbox = |checked: bool| if checked { "[x] " } else { "[ ] " };

        let mut items = vec![ListItem::new(Line::from(vec![
            Self::cursor_marker(state.cursor == 0),
            Span::styled(
                checkbox(state.navigator.all_channels_selected()),
                Style::default().fg(SELECTION_GREEN),
            ),
            Span::styled("All Channels", row_style(state.cursor == 0)),
        ]))];

        items.extend(Channel::ALL.iter().enumerate().map(|(idx, channel)| {
            let selected = idx + 1 == state.cursor;
            ListItem::new(Line::from(vec![
                Self::cursor_marker(selected),
                Span::styled(
                    checkbox(selection.is_channel_selected(*channel)),
                    Style::default().fg(SELECTION_GREEN),
                ),
                Span::styled(channel.label(), row_style(selected)),
            ]))
        }));

        let title = match selection.brand_label() {
            Some(brand) => format!("{} · {}", WizardStep::ChannelSelection.title(), brand),
            None => WizardStep::ChannelSelection.title().to_string(),
        };
        let list = List::new(items).block(panel(&title, Self::focused(state)));
        frame.render_widget(list, area);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = panel(state.current_step().title(), Self::focused(state));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(preview) = state.preview.as_ref() else {
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Summary
                Constraint::Min(3),    // Rows
                Constraint::Length(1), // Generate button
            ])
            .split(inner);

        let summary = Paragraph::new(Line::from(Span::styled(
            preview.summary(),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(summary, layout[0]);

        let items: Vec<ListItem> = preview
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let selected = idx == state.cursor;
                let mark = if row.selected { "[x] " } else { "[ ] " };
                ListItem::new(vec![
                    Line::from(vec![
                        Self::cursor_marker(selected),
                        Span::styled(mark, Style::default().fg(SELECTION_GREEN)),
                        Span::raw(format!("{} ", row.icon)),
                        Span::styled(row.slide_name, row_style(selected)),
                        Span::styled(
                            format!("  {}", row.confidence_badge()),
                            Style::default().fg(confidence_color(row.confidence)),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", row.subtitle),
                        Style::default().fg(MUTED_GRAY),
                    )),
                ])
            })
            .collect();
        frame.render_widget(List::new(items), layout[1]);

        let button = Paragraph::new(Line::from(vec![
            Span::styled("[g] ", Style::default().fg(GOLD)),
            Span::styled(
                preview.generate_label(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(button, layout[2]);
    }

    fn render_generating(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = panel(WizardStep::Generating.title(), Self::focused(state));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(run) = state.generation.as_ref() else {
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(PANEL_BG))
            .ratio(run.ratio().clamp(0.0, 1.0));
        frame.render_widget(gauge, layout[0]);

        let lines: Vec<Line> = run
            .indicators()
            .iter()
            .map(|indicator| {
                let (icon, style) = match indicator.status {
                    IndicatorStatus::Completed => ("✓", Style::default().fg(SELECTION_GREEN)),
                    IndicatorStatus::Active => (
                        "◉",
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    ),
                    IndicatorStatus::Pending => ("○", Style::default().fg(MUTED_GRAY)),
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", icon), style),
                    Span::styled(indicator.label, style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), layout[1]);
    }

    fn render_success(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = panel(WizardStep::Success.title(), Self::focused(state));

        let mut lines = vec![Line::from("")];
        if let Some(summary) = state.success.as_ref() {
            lines.push(Line::from(Span::styled(
                format!("✓ {}", summary.headline()),
                Style::default()
                    .fg(SELECTION_GREEN)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                summary.description.as_str(),
                Style::default().fg(SOFT_WHITE),
            )));
        }
        lines.push(Line::from(""));

        let buttons = ["Create More", "Done"];
        let spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(idx, label)| {
                let selected = idx == state.cursor;
                [
                    Self::cursor_marker(selected),
                    Span::styled(format!("[ {} ]   ", label), row_style(selected)),
                ]
            })
            .collect();
        lines.push(Line::from(spans));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let hints = match state.current_step() {
            WizardStep::WorkspaceSelection | WizardStep::TemplateSelection => {
                "↑/↓ move · Enter select · / ask · Tab panels · q quit"
            }
            WizardStep::BrandSelection => "↑/↓ move · Enter select · Esc back · w workspace",
            WizardStep::ChannelSelection => {
                "Space toggle · a all · Enter continue · Esc back · w workspace"
            }
            WizardStep::BrandPreview | WizardStep::OtherPreview => {
                "Space keep/drop slide · g generate · Esc back"
            }
            WizardStep::Generating => "Generating slides... w to abandon",
            WizardStep::Success => "Enter choose · d done",
        };
        let paragraph = Paragraph::new(Span::styled(hints, Style::default().fg(MUTED_GRAY)));
        frame.render_widget(paragraph, area);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}
