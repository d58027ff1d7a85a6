// ABOUTME: Event handling system for keyboard input and wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::debug;

use crate::app::state::{AppState, Focus, InsightTarget};
use crate::models::{Brand, BrandSelection, Channel, TemplateKey};
use crate::wizard::{WizardStep, QUERY_SUGGESTIONS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    // Wizard
    WorkspaceChosen(String),
    TemplateChosen(TemplateKey),
    BrandChosen(BrandSelection),
    ChannelToggled(Channel, bool),
    AllChannelsToggled(bool),
    Continue,
    TogglePreviewRow(usize),
    Generate,
    Breadcrumb(WizardStep),
    BackToWorkspace,
    CreateMore,
    Done,
    // Query bar
    FocusQuery,
    QueryInputChar(char),
    QueryBackspace,
    QuerySubmitted(String),
    QueryClose,
    OpenQueryHistory,
    // Side panels
    AddToSlide(InsightTarget),
    JumpToBrand(Brand),
    SelectDeckSlide(usize),
    ToggleProgressPanel,
    // Cursor and focus
    CursorUp,
    CursorDown,
    CycleFocus,
    DismissAlert,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        // The blocking alert swallows the next key
        if state.alert.is_some() {
            return Some(AppEvent::DismissAlert);
        }

        match state.focus {
            Focus::Query => Self::handle_query_keys(key_event, state),
            Focus::Progress => Self::handle_progress_keys(key_event, state),
            Focus::Insights => Self::handle_insight_keys(key_event, state),
            Focus::Deck => Self::handle_deck_keys(key_event, state),
            Focus::Wizard => Self::handle_wizard_keys(key_event, state),
        }
    }

    /// Keys shared by every panel except the query input
    fn handle_global_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Tab => Some(AppEvent::CycleFocus),
            KeyCode::Char('/') => Some(AppEvent::FocusQuery),
            KeyCode::Char('H') => Some(AppEvent::OpenQueryHistory),
            KeyCode::Char('p') => Some(AppEvent::ToggleProgressPanel),
            KeyCode::Char('A') if state.query.response.is_some() => {
                Some(AppEvent::AddToSlide(InsightTarget::QueryResponse))
            }
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Esc if state.query.expanded => Some(AppEvent::QueryClose),
            _ => None,
        }
    }

    fn handle_wizard_keys(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let step = state.current_step();

        match key_event.code {
            KeyCode::Enter => return Self::resolve_enter(state),
            KeyCode::Char(' ') => return Self::resolve_space(state),
            KeyCode::Char('a') if step == WizardStep::ChannelSelection => {
                return Some(AppEvent::AllChannelsToggled(
                    !state.navigator.all_channels_selected(),
                ));
            }
            KeyCode::Char('g')
                if matches!(step, WizardStep::BrandPreview | WizardStep::OtherPreview) =>
            {
                return Some(AppEvent::Generate);
            }
            KeyCode::Char('c') if step == WizardStep::ChannelSelection => {
                return Some(AppEvent::Continue);
            }
            KeyCode::Char('d') if step == WizardStep::Success => return Some(AppEvent::Done),
            KeyCode::Char('w') if step != WizardStep::WorkspaceSelection => {
                return Some(AppEvent::BackToWorkspace);
            }
            KeyCode::Esc if !state.query.expanded => {
                return Self::previous_breadcrumb(state).map(AppEvent::Breadcrumb);
            }
            _ => {}
        }

        Self::handle_global_keys(key_event, state)
    }

    /// Turn Enter into the concrete event for the row under the cursor
    fn resolve_enter(state: &AppState) -> Option<AppEvent> {
        let cursor = state.cursor;
        match state.current_step() {
            WizardStep::WorkspaceSelection => state
                .config
                .workspaces
                .get(cursor)
                .map(|w| AppEvent::WorkspaceChosen(w.id.clone())),
            WizardStep::TemplateSelection => {
                TemplateKey::ALL.get(cursor).copied().map(AppEvent::TemplateChosen)
            }
            WizardStep::BrandSelection => BrandSelection::options()
                .get(cursor)
                .copied()
                .map(AppEvent::BrandChosen),
            WizardStep::ChannelSelection => Some(AppEvent::Continue),
            WizardStep::BrandPreview | WizardStep::OtherPreview => Some(AppEvent::Generate),
            WizardStep::Generating => None,
            WizardStep::Success => {
                if cursor == 0 {
                    Some(AppEvent::CreateMore)
                } else {
                    Some(AppEvent::Done)
                }
            }
        }
    }

    fn resolve_space(state: &AppState) -> Option<AppEvent> {
        match state.current_step() {
            // Row 0 is "All Channels"
            WizardStep::ChannelSelection => match state.cursor {
                0 => Some(AppEvent::AllChannelsToggled(
                    !state.navigator.all_channels_selected(),
                )),
                row => Channel::ALL.get(row - 1).map(|&channel| {
                    let checked = !state.navigator.state().is_channel_selected(channel);
                    AppEvent::ChannelToggled(channel, checked)
                }),
            },
            WizardStep::BrandPreview | WizardStep::OtherPreview => {
                Some(AppEvent::TogglePreviewRow(state.cursor))
            }
            _ => None,
        }
    }

    /// Esc steps back one breadcrumb from the current step
    fn previous_breadcrumb(state: &AppState) -> Option<WizardStep> {
        let needs_brand = state
            .navigator
            .state()
            .template()
            .is_some_and(|t| t.needs_brand);
        match state.current_step() {
            WizardStep::TemplateSelection => Some(WizardStep::WorkspaceSelection),
            WizardStep::BrandSelection => Some(WizardStep::TemplateSelection),
            WizardStep::ChannelSelection => Some(WizardStep::BrandSelection),
            WizardStep::BrandPreview if needs_brand => Some(WizardStep::ChannelSelection),
            WizardStep::BrandPreview | WizardStep::OtherPreview => {
                Some(WizardStep::TemplateSelection)
            }
            _ => None,
        }
    }

    fn handle_query_keys(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::QueryClose),
            KeyCode::Enter => {
                if state.query.input.trim().is_empty() && state.query.suggestions_visible {
                    QUERY_SUGGESTIONS
                        .get(state.query.suggestion_cursor)
                        .map(|s| AppEvent::QuerySubmitted((*s).to_string()))
                } else {
                    Some(AppEvent::QuerySubmitted(state.query.input.clone()))
                }
            }
            KeyCode::Backspace => Some(AppEvent::QueryBackspace),
            KeyCode::Tab => Some(AppEvent::CycleFocus),
            KeyCode::Down => Some(AppEvent::CursorDown),
            KeyCode::Up => Some(AppEvent::CursorUp),
            KeyCode::Char(c) => Some(AppEvent::QueryInputChar(c)),
            _ => None,
        }
    }

    fn handle_progress_keys(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        match key_event.code {
            // Brand rows are only on screen while the panel is expanded
            KeyCode::Enter if !state.progress_expanded => None,
            KeyCode::Enter => {
                let report = state.progress_report();
                let brand = report
                    .brand_rows()
                    .nth(state.progress_cursor)
                    .map(|row| row.brand);
                brand.map(AppEvent::JumpToBrand)
            }
            _ => Self::handle_global_keys(key_event, state),
        }
    }

    fn handle_insight_keys(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => Some(AppEvent::AddToSlide(InsightTarget::Card(
                state.insight_cursor,
            ))),
            _ => Self::handle_global_keys(key_event, state),
        }
    }

    fn handle_deck_keys(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter => state
                .deck
                .slides()
                .get(state.deck_cursor)
                .map(|slide| AppEvent::SelectDeckSlide(slide.number)),
            _ => Self::handle_global_keys(key_event, state),
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        Self::process_event_at(event, state, Instant::now());
    }

    /// Apply an event as of `now`
    pub fn process_event_at(event: AppEvent, state: &mut AppState, now: Instant) {
        debug!("Processing event: {:?}", event);
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::WorkspaceChosen(id) => state.select_workspace(&id, now),
            AppEvent::TemplateChosen(key) => state.select_template(key, now),
            AppEvent::BrandChosen(brand) => state.select_brand(brand, now),
            AppEvent::ChannelToggled(channel, checked) => state.toggle_channel(channel, checked),
            AppEvent::AllChannelsToggled(checked) => state.set_all_channels(checked),
            AppEvent::Continue => state.continue_to_preview(now),
            AppEvent::TogglePreviewRow(index) => state.toggle_preview_row(index),
            AppEvent::Generate => state.generate(now),
            AppEvent::Breadcrumb(target) => state.breadcrumb(target, now),
            AppEvent::BackToWorkspace => state.back_to_workspace(now),
            AppEvent::CreateMore | AppEvent::Done => state.start_over(now),
            AppEvent::FocusQuery => state.focus_query(),
            AppEvent::QueryInputChar(c) => {
                state.query.input.push(c);
                state.query.suggestions_visible = false;
            }
            AppEvent::QueryBackspace => {
                state.query.input.pop();
                if state.query.input.is_empty() {
                    state.query.suggestions_visible = true;
                }
            }
            AppEvent::QuerySubmitted(query) => state.submit_query(&query, now),
            AppEvent::QueryClose => {
                state.close_query();
                if state.focus == Focus::Query {
                    state.blur_query();
                }
            }
            AppEvent::OpenQueryHistory => state.open_query_history(now),
            AppEvent::AddToSlide(target) => state.add_to_slide(target, now),
            AppEvent::JumpToBrand(brand) => state.jump_to_brand(brand, now),
            AppEvent::SelectDeckSlide(number) => state.select_deck_slide(number),
            AppEvent::ToggleProgressPanel => state.progress_expanded = !state.progress_expanded,
            AppEvent::CursorUp => Self::move_cursor(state, false),
            AppEvent::CursorDown => Self::move_cursor(state, true),
            AppEvent::CycleFocus => {
                state.focus = state.focus.next();
                state.query.suggestions_visible = false;
            }
            AppEvent::DismissAlert => state.alert = None,
        }
    }

    fn move_cursor(state: &mut AppState, down: bool) {
        let len = Self::cursor_len(state);
        let cursor = match state.focus {
            Focus::Wizard => &mut state.cursor,
            Focus::Query => &mut state.query.suggestion_cursor,
            Focus::Progress => &mut state.progress_cursor,
            Focus::Insights => &mut state.insight_cursor,
            Focus::Deck => &mut state.deck_cursor,
        };

        if len == 0 {
            *cursor = 0;
        } else if down {
            *cursor = (*cursor + 1).min(len - 1);
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Number of rows the focused list holds
    fn cursor_len(state: &AppState) -> usize {
        match state.focus {
            Focus::Wizard => match state.current_step() {
                WizardStep::WorkspaceSelection => state.config.workspaces.len(),
                WizardStep::TemplateSelection => TemplateKey::ALL.len(),
                WizardStep::BrandSelection => BrandSelection::options().len(),
                WizardStep::ChannelSelection => Channel::ALL.len() + 1,
                WizardStep::BrandPreview | WizardStep::OtherPreview => {
                    state.preview.as_ref().map_or(0, |p| p.rows.len())
                }
                WizardStep::Generating => 0,
                WizardStep::Success => 2,
            },
            Focus::Query => QUERY_SUGGESTIONS.len(),
            Focus::Progress => state.progress_report().brand_rows().count(),
            Focus::Insights => state.insights.len(),
            Focus::Deck => state.deck.len(),
        }
    }
}
