// ABOUTME: Application state for the deckmate TUI
// Single writer for the wizard, tracker, deck, query panel and notifications

use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::{Brand, BrandSelection, Catalog, Channel, Deck, TemplateKey};
use crate::wizard::{
    build_preview, CompletionTracker, GenerationPoll, GenerationSimulator, Navigator, Preview,
    ProgressReport, QueryResponder, QueryResponse, SuccessSummary, WizardError, WizardStep,
};

/// Insight cards offered in the side panel
pub const INSIGHTS: [&str; 3] = [
    "Social ROI is 25% above benchmark this quarter",
    "Paid Search efficiency dropped 8% after the bid change",
    "National TV still drives 3x the revenue of digital",
];

/// Notification system for TUI messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String, created_at: Instant, duration: Duration) -> Self {
        Self {
            message,
            notification_type: NotificationType::Success,
            created_at,
            duration,
        }
    }

    pub fn info(message: String, created_at: Instant, duration: Duration) -> Self {
        Self {
            message,
            notification_type: NotificationType::Info,
            created_at,
            duration,
        }
    }

    pub fn warning(message: String, created_at: Instant, duration: Duration) -> Self {
        Self {
            message,
            notification_type: NotificationType::Warning,
            created_at,
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > self.duration
    }
}

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Wizard,
    Query,
    Progress,
    Insights,
    Deck,
}

impl Focus {
    /// Tab order; the query bar is entered with '/' instead
    pub fn next(self) -> Self {
        match self {
            Self::Wizard => Self::Progress,
            Self::Progress => Self::Insights,
            Self::Insights => Self::Deck,
            Self::Deck | Self::Query => Self::Wizard,
        }
    }
}

/// An insight with an "Add to Slide" button
#[derive(Debug, Clone)]
pub struct InsightCard {
    pub text: &'static str,
    /// Set while the button shows "Added"
    pub added_until: Option<Instant>,
}

impl InsightCard {
    pub fn is_added(&self) -> bool {
        self.added_until.is_some()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_added() {
            "✓ Added"
        } else {
            "+ Add to Slide"
        }
    }
}

/// Where an "Add to Slide" click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightTarget {
    Card(usize),
    QueryResponse,
}

#[derive(Debug, Clone)]
pub struct PendingQuery {
    pub query: String,
    pub ready_at: Instant,
}

/// Query bar plus its expanded response panel
#[derive(Debug, Clone, Default)]
pub struct QueryPanel {
    pub input: String,
    pub suggestions_visible: bool,
    pub expanded: bool,
    pub pending: Option<PendingQuery>,
    pub response: Option<QueryResponse>,
    pub response_added_until: Option<Instant>,
    pub suggestion_cursor: usize,
}

impl QueryPanel {
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub navigator: Navigator,
    pub tracker: CompletionTracker,
    /// Built when a preview step is entered
    pub preview: Option<Preview>,
    /// Present only while on the generating step
    pub generation: Option<GenerationSimulator>,
    pub success: Option<SuccessSummary>,
    pub deck: Deck,
    pub query: QueryPanel,
    pub insights: Vec<InsightCard>,
    pub notifications: Vec<Notification>,
    /// Blocking message, dismissed by any key
    pub alert: Option<String>,
    pub focus: Focus,
    /// Cursor within the current wizard step's list
    pub cursor: usize,
    pub progress_cursor: usize,
    pub insight_cursor: usize,
    pub deck_cursor: usize,
    pub progress_expanded: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let progress_expanded = config.ui_preferences.show_progress_panel;
        Self {
            config,
            catalog: Catalog::builtin(),
            navigator: Navigator::new(),
            tracker: CompletionTracker::new(),
            preview: None,
            generation: None,
            success: None,
            deck: Deck::new(),
            query: QueryPanel::default(),
            insights: INSIGHTS
                .iter()
                .map(|&text| InsightCard {
                    text,
                    added_until: None,
                })
                .collect(),
            notifications: Vec::new(),
            alert: None,
            focus: Focus::Wizard,
            cursor: 0,
            progress_cursor: 0,
            insight_cursor: 0,
            deck_cursor: 0,
            progress_expanded,
            should_quit: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.navigator.current_step()
    }

    pub fn progress_report(&self) -> ProgressReport {
        self.tracker.report(&self.catalog)
    }

    // ============================================================================
    // Wizard transitions
    // ============================================================================

    pub fn select_workspace(&mut self, workspace: &str, now: Instant) {
        let result = self.navigator.choose_workspace(workspace);
        self.apply(result, now);
    }

    pub fn select_template(&mut self, key: TemplateKey, now: Instant) {
        let result = self.navigator.choose_template(key);
        self.apply(result, now);
    }

    pub fn select_brand(&mut self, brand: BrandSelection, now: Instant) {
        let result = self.navigator.choose_brand(brand);
        self.apply(result, now);
    }

    pub fn toggle_channel(&mut self, channel: Channel, checked: bool) {
        if let Err(e) = self.navigator.toggle_channel(channel, checked) {
            debug!("Ignoring channel toggle: {}", e);
        }
    }

    pub fn set_all_channels(&mut self, checked: bool) {
        if let Err(e) = self.navigator.set_all_channels(checked) {
            debug!("Ignoring all-channels toggle: {}", e);
        }
    }

    pub fn continue_to_preview(&mut self, now: Instant) {
        let result = self.navigator.continue_to_preview();
        self.apply(result, now);
    }

    /// Flip a preview row. Missing rows are ignored.
    pub fn toggle_preview_row(&mut self, index: usize) {
        if let Some(preview) = self.preview.as_mut() {
            preview.toggle_row(index);
        }
    }

    pub fn generate(&mut self, now: Instant) {
        let result = self.navigator.start_generation();
        self.apply(result, now);
    }

    pub fn breadcrumb(&mut self, target: WizardStep, now: Instant) {
        let result = self.navigator.breadcrumb(target);
        self.apply(result, now);
    }

    pub fn back_to_workspace(&mut self, now: Instant) {
        let step = self.navigator.back_to_workspace();
        self.on_step_entered(step, now);
    }

    /// "Create more" and "Done" on the success step
    pub fn start_over(&mut self, now: Instant) {
        let result = self.navigator.start_over();
        self.apply(result, now);
    }

    pub fn jump_to_brand(&mut self, brand: Brand, now: Instant) {
        let result = self.navigator.jump_to_brand(brand);
        self.apply(result, now);
        if self.current_step() == WizardStep::ChannelSelection {
            self.focus = Focus::Wizard;
        }
    }

    fn apply(&mut self, result: Result<WizardStep, WizardError>, now: Instant) {
        match result {
            Ok(step) => self.on_step_entered(step, now),
            Err(e) if e.is_user_facing() => {
                warn!("Wizard validation failed: {}", e);
                self.alert = Some(e.to_string());
            }
            Err(e) => debug!("Ignoring wizard event: {}", e),
        }
    }

    fn on_step_entered(&mut self, step: WizardStep, now: Instant) {
        self.cursor = 0;

        // Leaving the generating step cancels the run
        if step != WizardStep::Generating {
            self.generation = None;
        }
        if step != WizardStep::Success {
            self.success = None;
        }

        match step {
            WizardStep::BrandPreview | WizardStep::OtherPreview => {
                match build_preview(self.navigator.state()) {
                    Ok(preview) => self.preview = Some(preview),
                    Err(e) => {
                        warn!("Failed to build preview: {}", e);
                        self.preview = None;
                    }
                }
            }
            WizardStep::Generating => {
                info!("Starting simulated generation");
                self.generation = Some(GenerationSimulator::new(
                    self.config.timing.generation(),
                    now,
                ));
            }
            WizardStep::Success => {}
            _ => self.preview = None,
        }
    }

    /// Record the finished run: tracker, deck, success summary
    fn complete_generation(&mut self, now: Instant) {
        self.generation = None;

        let selection = self.navigator.state().clone();
        let (Some(template), Some(preview)) = (selection.template(), self.preview.as_ref()) else {
            warn!("Generation finished without a preview");
            return;
        };

        let summary = preview.success_summary();

        // The whole brand x channel set counts as done even if rows were deselected
        if template.needs_brand_and_channel() {
            if let Some(brand) = selection.selected_brand {
                self.tracker
                    .mark_generated(brand, &selection.selected_channels);
            }
        }

        self.deck.append_generated(
            template,
            summary.slide_count,
            selection.selected_brand,
            &selection.selected_channels,
        );

        info!(
            template = %template.key,
            slides = summary.slide_count,
            "Generation complete"
        );

        let result = self.navigator.finish_generation();
        self.apply(result, now);
        self.success = Some(summary);
    }

    // ============================================================================
    // Query bar
    // ============================================================================

    /// Submit a question. Blank input does nothing.
    pub fn submit_query(&mut self, query: &str, now: Instant) {
        if query.trim().is_empty() {
            return;
        }

        info!("Query submitted: {}", query.trim());
        self.query.suggestions_visible = false;
        self.query.expanded = true;
        self.query.input.clear();
        self.query.response = None;
        self.query.response_added_until = None;
        self.query.pending = Some(PendingQuery {
            query: query.to_string(),
            ready_at: now + self.config.timing.query_delay(),
        });
    }

    /// Hide the response panel. An in-flight answer still lands.
    pub fn close_query(&mut self) {
        self.query.expanded = false;
        self.query.suggestions_visible = false;
    }

    pub fn focus_query(&mut self) {
        self.focus = Focus::Query;
        self.query.suggestions_visible = true;
        self.query.suggestion_cursor = 0;
    }

    pub fn blur_query(&mut self) {
        self.focus = Focus::Wizard;
        self.query.suggestions_visible = false;
    }

    pub fn open_query_history(&mut self, now: Instant) {
        self.add_info_notification("Opening chat history...".to_string(), now);
    }

    // ============================================================================
    // Insights and deck
    // ============================================================================

    /// "Add to Slide". Missing or already-added targets are ignored.
    pub fn add_to_slide(&mut self, target: InsightTarget, now: Instant) {
        let until = now + self.config.timing.insight_reset();
        let added = match target {
            InsightTarget::Card(index) => match self.insights.get_mut(index) {
                Some(card) if !card.is_added() => {
                    card.added_until = Some(until);
                    true
                }
                _ => false,
            },
            InsightTarget::QueryResponse => {
                if self.query.response.is_some() && self.query.response_added_until.is_none() {
                    self.query.response_added_until = Some(until);
                    true
                } else {
                    false
                }
            }
        };

        if added {
            self.add_success_notification("Insight added to current slide".to_string(), now);
        }
    }

    /// Show a deck slide on the canvas
    pub fn select_deck_slide(&mut self, number: usize) {
        let selection = self.navigator.state();
        let brand = selection.selected_brand;
        let channel = selection.selected_channels.first().copied();
        self.deck.select(number, brand, channel);
    }

    // ============================================================================
    // Notifications
    // ============================================================================

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn add_success_notification(&mut self, message: String, now: Instant) {
        let duration = self.config.timing.notification();
        self.add_notification(Notification::success(message, now, duration));
    }

    pub fn add_info_notification(&mut self, message: String, now: Instant) {
        let duration = self.config.timing.notification();
        self.add_notification(Notification::info(message, now, duration));
    }

    pub fn add_warning_notification(&mut self, message: String, now: Instant) {
        let duration = self.config.timing.notification();
        self.add_notification(Notification::warning(message, now, duration));
    }

    /// Get current notifications (non-expired)
    pub fn current_notifications(&self, now: Instant) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| !n.is_expired_at(now))
            .collect()
    }

    // ============================================================================
    // Timers
    // ============================================================================

    /// Advance every timer to `now`
    pub fn tick(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));

        let finished = self
            .generation
            .as_mut()
            .is_some_and(|run| run.poll(now) == GenerationPoll::Finished);
        if finished {
            self.complete_generation(now);
        }

        if self.query.pending.as_ref().is_some_and(|p| now >= p.ready_at) {
            if let Some(pending) = self.query.pending.take() {
                let brand = self.navigator.state().selected_brand;
                self.query.response = QueryResponder::classify(&pending.query, brand);
            }
        }

        for card in &mut self.insights {
            if card.added_until.is_some_and(|until| now >= until) {
                card.added_until = None;
            }
        }
        if self
            .query
            .response_added_until
            .is_some_and(|until| now >= until)
        {
            self.query.response_added_until = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application wrapper driven by the main loop
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::with_config(config),
        }
    }

    pub fn tick(&mut self) {
        self.state.tick(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::ResponseKind;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn at_channel_step(state: &mut AppState, now: Instant) {
        state.select_workspace("w1", now);
        state.select_template(TemplateKey::BrandSlides, now);
        state.select_brand(BrandSelection::Brand(Brand::Dove), now);
    }

    #[test]
    fn test_continue_without_channels_raises_alert() {
        let now = Instant::now();
        let mut state = AppState::new();
        at_channel_step(&mut state, now);

        state.continue_to_preview(now);
        assert_eq!(state.current_step(), WizardStep::ChannelSelection);
        assert_eq!(
            state.alert.as_deref(),
            Some("Please select at least one channel")
        );
    }

    #[test]
    fn test_out_of_step_events_are_silent() {
        let now = Instant::now();
        let mut state = AppState::new();
        state.generate(now);
        state.select_brand(BrandSelection::All, now);
        state.toggle_preview_row(3);
        state.add_to_slide(InsightTarget::Card(99), now);
        state.add_to_slide(InsightTarget::QueryResponse, now);

        assert_eq!(state.current_step(), WizardStep::WorkspaceSelection);
        assert!(state.alert.is_none());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_deselected_rows_still_mark_full_combo() {
        let start = Instant::now();
        let mut state = AppState::new();
        at_channel_step(&mut state, start);
        state.toggle_channel(Channel::Social, true);
        state.continue_to_preview(start);
        state.toggle_preview_row(0);
        state.toggle_preview_row(1);
        state.generate(start);

        state.tick(start + ms(60_000));

        assert_eq!(state.current_step(), WizardStep::Success);
        assert_eq!(state.success.as_ref().map(|s| s.slide_count), Some(1));
        assert!(state.tracker.contains(Brand::Dove, Channel::Social));
        assert_eq!(state.deck.len(), 1);
    }

    #[test]
    fn test_leaving_generation_cancels_it() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.select_workspace("w1", start);
        state.select_template(TemplateKey::SosSom, start);
        state.generate(start);
        assert!(state.generation.is_some());

        state.back_to_workspace(start + ms(100));
        assert!(state.generation.is_none());

        state.tick(start + ms(60_000));
        assert_eq!(state.current_step(), WizardStep::WorkspaceSelection);
        assert!(state.deck.is_empty());
    }

    #[test]
    fn test_query_response_arrives_after_delay() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.query.input = "compare channels".to_string();

        state.submit_query("compare channels", start);
        assert!(state.query.input.is_empty());
        assert!(state.query.is_loading());

        state.tick(start + ms(999));
        assert!(state.query.response.is_none());

        state.tick(start + ms(1000));
        assert_eq!(
            state.query.response.as_ref().map(|r| r.kind),
            Some(ResponseKind::Comparison)
        );
        assert!(!state.query.is_loading());
    }

    #[test]
    fn test_closed_panel_still_receives_response() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.submit_query("hello", start);
        state.close_query();
        state.tick(start + ms(1000));
        assert!(!state.query.expanded);
        assert!(state.query.response.is_some());
    }

    #[test]
    fn test_blank_query_changes_nothing() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.query.input = "   ".to_string();
        state.submit_query("   ", start);
        assert!(!state.query.expanded);
        assert!(state.query.pending.is_none());
        assert_eq!(state.query.input, "   ");
    }

    #[test]
    fn test_insight_button_resets() {
        let start = Instant::now();
        let mut state = AppState::new();

        state.add_to_slide(InsightTarget::Card(1), start);
        assert_eq!(state.insights[1].button_label(), "✓ Added");
        assert_eq!(state.notifications.len(), 1);

        // Disabled while added
        state.add_to_slide(InsightTarget::Card(1), start + ms(10));
        assert_eq!(state.notifications.len(), 1);

        state.tick(start + ms(3000));
        assert_eq!(state.insights[1].button_label(), "+ Add to Slide");
        assert!(state.current_notifications(start + ms(3001)).is_empty());
    }

    #[test]
    fn test_warning_notification_expires_with_configured_duration() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.add_warning_notification("Config ignored".to_string(), start);

        let current = state.current_notifications(start + ms(2999));
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].notification_type, NotificationType::Warning);

        state.tick(start + ms(3001));
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_jump_to_brand_moves_focus_to_wizard() {
        let start = Instant::now();
        let mut state = AppState::new();
        state.select_workspace("w1", start);
        state.focus = Focus::Progress;

        state.jump_to_brand(Brand::Nexxus, start);
        assert_eq!(state.current_step(), WizardStep::ChannelSelection);
        assert_eq!(state.focus, Focus::Wizard);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Wizard.next(), Focus::Progress);
        assert_eq!(Focus::Deck.next(), Focus::Wizard);
        assert_eq!(Focus::Query.next(), Focus::Wizard);
    }
}
