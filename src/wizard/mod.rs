// ABOUTME: Slide wizard core: navigation, preview building, completion tracking,
// simulated generation and the canned query responder. No rendering lives here.

pub mod error;
pub mod generation;
pub mod navigator;
pub mod preview;
pub mod query;
pub mod step;
pub mod tracker;

pub use error::WizardError;
pub use generation::{
    GenerationPoll, GenerationSimulator, GenerationTiming, IndicatorStatus, ProgressIndicator,
};
pub use navigator::{Navigator, SelectionState};
pub use preview::{
    build_brand_channel_preview, build_other_preview, build_preview, Preview, PreviewKind,
    PreviewRow, SuccessSummary,
};
pub use query::{QueryResponder, QueryResponse, ResponseKind, QUERY_SUGGESTIONS};
pub use step::WizardStep;
pub use tracker::{BrandProgress, CompletionTracker, ComboKey, ProgressReport, ProgressStatus};
