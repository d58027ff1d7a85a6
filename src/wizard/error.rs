// ABOUTME: Error types for the slide wizard state machine

use thiserror::Error;

use super::step::WizardStep;

/// Errors raised by wizard transitions and catalog lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Continue was pressed on the channel step with nothing checked
    #[error("Please select at least one channel")]
    NoChannelsSelected,

    /// The event is not accepted in the current step
    #[error("'{event}' is not available from {from}")]
    InvalidTransition {
        /// Step the wizard was on
        from: WizardStep,
        /// Short name of the rejected event
        event: &'static str,
    },

    /// Unknown template identifier
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Unknown brand identifier
    #[error("Unknown brand '{0}'")]
    UnknownBrand(String),

    /// Unknown channel identifier
    #[error("Unknown channel '{0}'")]
    UnknownChannel(String),

    /// A builder was called with inputs that break its contract
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

impl WizardError {
    /// Validation failures are shown to the user; everything else is a silent no-op
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::NoChannelsSelected)
    }
}
