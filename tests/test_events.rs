// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct wizard actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use deckmate::app::events::AppEvent;
use deckmate::app::{AppState, EventHandler, Focus, InsightTarget};
use deckmate::models::{Brand, BrandSelection, Channel, TemplateKey};
use deckmate::wizard::WizardStep;

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Feed a key through both halves of the handler
fn press(state: &mut AppState, code: KeyCode, now: Instant) {
    if let Some(event) = EventHandler::handle_key_event(create_key_event(code), state) {
        EventHandler::process_event_at(event, state, now);
    }
}

#[test]
fn test_quit_key_events() {
    let mut state = AppState::default();

    let quit = EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state);
    assert_eq!(quit, Some(AppEvent::Quit));

    let ctrl_c = EventHandler::handle_key_event(
        create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut state,
    );
    assert_eq!(ctrl_c, Some(AppEvent::Quit));

    EventHandler::process_event(AppEvent::Quit, &mut state);
    assert!(state.should_quit);
}

#[test]
fn test_keyboard_walkthrough_to_preview() {
    let now = Instant::now();
    let mut state = AppState::default();

    press(&mut state, KeyCode::Enter, now); // first workspace
    assert_eq!(state.current_step(), WizardStep::TemplateSelection);

    press(&mut state, KeyCode::Enter, now); // brand-slides
    assert_eq!(state.current_step(), WizardStep::BrandSelection);

    press(&mut state, KeyCode::Char('j'), now);
    press(&mut state, KeyCode::Enter, now); // dove, after "All Brands"
    assert_eq!(state.current_step(), WizardStep::ChannelSelection);
    assert_eq!(
        state.navigator.state().selected_brand,
        Some(BrandSelection::Brand(Brand::Dove))
    );

    press(&mut state, KeyCode::Char('j'), now);
    press(&mut state, KeyCode::Char(' '), now); // national
    press(&mut state, KeyCode::Char('j'), now);
    press(&mut state, KeyCode::Char(' '), now); // social
    assert_eq!(
        state.navigator.state().selected_channels,
        vec![Channel::National, Channel::Social]
    );

    press(&mut state, KeyCode::Enter, now);
    assert_eq!(state.current_step(), WizardStep::BrandPreview);
    assert_eq!(state.cursor, 0);

    press(&mut state, KeyCode::Char(' '), now);
    let preview = state.preview.as_ref().unwrap();
    assert!(!preview.rows[0].selected);
    assert_eq!(preview.generate_label(), "Generate 5 Slides");

    press(&mut state, KeyCode::Char('g'), now);
    assert_eq!(state.current_step(), WizardStep::Generating);
}

#[test]
fn test_continue_with_no_channels_shows_alert_until_key() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);
    state.select_template(TemplateKey::BrandSlides, now);
    state.select_brand(BrandSelection::All, now);

    press(&mut state, KeyCode::Enter, now);
    assert_eq!(state.current_step(), WizardStep::ChannelSelection);
    assert!(state.alert.is_some());

    press(&mut state, KeyCode::Char('x'), now);
    assert!(state.alert.is_none());
    assert_eq!(state.current_step(), WizardStep::ChannelSelection);
}

#[test]
fn test_all_channels_key_toggles() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);
    state.select_template(TemplateKey::BrandSlides, now);
    state.select_brand(BrandSelection::All, now);

    press(&mut state, KeyCode::Char('a'), now);
    assert_eq!(state.navigator.state().selected_channels.len(), 4);

    press(&mut state, KeyCode::Char('a'), now);
    assert!(state.navigator.state().selected_channels.is_empty());
}

#[test]
fn test_escape_walks_breadcrumbs_back() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);
    state.select_template(TemplateKey::BrandSlides, now);
    state.select_brand(BrandSelection::All, now);

    press(&mut state, KeyCode::Esc, now);
    assert_eq!(state.current_step(), WizardStep::BrandSelection);
    press(&mut state, KeyCode::Esc, now);
    assert_eq!(state.current_step(), WizardStep::TemplateSelection);
    press(&mut state, KeyCode::Esc, now);
    assert_eq!(state.current_step(), WizardStep::WorkspaceSelection);
    assert!(state.navigator.state().selected_workspace.is_none());
}

#[test]
fn test_escape_from_other_preview_returns_to_templates() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);
    state.select_template(TemplateKey::PostMeeting, now);

    press(&mut state, KeyCode::Esc, now);
    assert_eq!(state.current_step(), WizardStep::TemplateSelection);
    assert!(state.preview.is_none());
}

#[test]
fn test_query_typing_and_submit() {
    let now = Instant::now();
    let mut state = AppState::default();

    press(&mut state, KeyCode::Char('/'), now);
    assert_eq!(state.focus, Focus::Query);
    assert!(state.query.suggestions_visible);

    for c in "roi?".chars() {
        press(&mut state, KeyCode::Char(c), now);
    }
    assert_eq!(state.query.input, "roi?");
    assert!(!state.query.suggestions_visible);

    press(&mut state, KeyCode::Enter, now);
    assert!(state.query.expanded);
    assert!(state.query.is_loading());

    press(&mut state, KeyCode::Esc, now);
    assert!(!state.query.expanded);
    assert_eq!(state.focus, Focus::Wizard);
}

#[test]
fn test_escape_closes_query_panel_before_breadcrumb() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);
    state.submit_query("hello", now);

    press(&mut state, KeyCode::Esc, now);
    assert!(!state.query.expanded);
    assert_eq!(state.current_step(), WizardStep::TemplateSelection);
}

#[test]
fn test_progress_panel_enter_jumps_to_brand() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);

    press(&mut state, KeyCode::Tab, now);
    assert_eq!(state.focus, Focus::Progress);
    press(&mut state, KeyCode::Down, now);
    press(&mut state, KeyCode::Down, now);
    press(&mut state, KeyCode::Enter, now);

    assert_eq!(state.current_step(), WizardStep::ChannelSelection);
    assert_eq!(
        state.navigator.state().selected_brand,
        Some(BrandSelection::Brand(Brand::Vaseline))
    );
    assert_eq!(state.focus, Focus::Wizard);
}

#[test]
fn test_collapsed_progress_panel_ignores_enter() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.select_workspace("w1", now);

    press(&mut state, KeyCode::Tab, now);
    press(&mut state, KeyCode::Char('p'), now);
    assert!(!state.progress_expanded);
    press(&mut state, KeyCode::Down, now);

    let enter = EventHandler::handle_key_event(create_key_event(KeyCode::Enter), &mut state);
    assert_eq!(enter, None);
    assert_eq!(state.current_step(), WizardStep::TemplateSelection);
    assert_eq!(state.navigator.state().selected_brand, None);
    assert_eq!(state.focus, Focus::Progress);

    press(&mut state, KeyCode::Char('p'), now);
    press(&mut state, KeyCode::Enter, now);
    assert_eq!(state.current_step(), WizardStep::ChannelSelection);
}

#[test]
fn test_insight_panel_enter_adds_card() {
    let now = Instant::now();
    let mut state = AppState::default();
    state.focus = Focus::Insights;

    let event = EventHandler::handle_key_event(create_key_event(KeyCode::Enter), &mut state);
    assert_eq!(event, Some(AppEvent::AddToSlide(InsightTarget::Card(0))));

    press(&mut state, KeyCode::Enter, now);
    assert!(state.insights[0].is_added());
    assert_eq!(
        state.notifications[0].message,
        "Insight added to current slide"
    );
}

#[test]
fn test_history_key_raises_info_notification() {
    let now = Instant::now();
    let mut state = AppState::default();
    press(&mut state, KeyCode::Char('H'), now);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].message, "Opening chat history...");
}
