// ABOUTME: UI components for the TUI interface: wizard, progress panel, query bar and deck

pub mod deck_view;
pub mod layout;
pub mod progress_panel;
pub mod query_bar;
pub mod theme;
pub mod wizard_view;

pub use deck_view::DeckViewComponent;
pub use layout::LayoutComponent;
pub use progress_panel::ProgressPanelComponent;
pub use query_bar::QueryBarComponent;
pub use wizard_view::WizardComponent;
