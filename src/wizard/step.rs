// ABOUTME: Steps of the slide wizard and their canonical ordering
// Breadcrumb navigation compares steps by rank

use serde::Serialize;
use std::fmt;

/// Steps in the slide wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    WorkspaceSelection,
    TemplateSelection,
    BrandSelection,
    ChannelSelection,
    BrandPreview,
    OtherPreview,
    Generating,
    Success,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::WorkspaceSelection,
            Self::TemplateSelection,
            Self::BrandSelection,
            Self::ChannelSelection,
            Self::BrandPreview,
            Self::OtherPreview,
            Self::Generating,
            Self::Success,
        ]
    }

    /// Position in the workspace -> template -> brand -> channel -> preview order.
    /// Both preview steps share a rank.
    pub fn rank(&self) -> u8 {
        match self {
            Self::WorkspaceSelection => 0,
            Self::TemplateSelection => 1,
            Self::BrandSelection => 2,
            Self::ChannelSelection => 3,
            Self::BrandPreview | Self::OtherPreview => 4,
            Self::Generating => 5,
            Self::Success => 6,
        }
    }

    /// Steps a breadcrumb can point at
    pub fn is_breadcrumb_target(&self) -> bool {
        matches!(
            self,
            Self::WorkspaceSelection
                | Self::TemplateSelection
                | Self::BrandSelection
                | Self::ChannelSelection
        )
    }

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::WorkspaceSelection => "workspace-selection",
            Self::TemplateSelection => "template-selection",
            Self::BrandSelection => "brand-selection",
            Self::ChannelSelection => "channel-selection",
            Self::BrandPreview => "brand-preview",
            Self::OtherPreview => "other-preview",
            Self::Generating => "generating",
            Self::Success => "success",
        }
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::WorkspaceSelection => "Workspace",
            Self::TemplateSelection => "Template",
            Self::BrandSelection => "Brand",
            Self::ChannelSelection => "Channels",
            Self::BrandPreview | Self::OtherPreview => "Preview",
            Self::Generating => "Generating",
            Self::Success => "Done",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::WorkspaceSelection => "Choose a workspace to get started",
            Self::TemplateSelection => "What would you like to create?",
            Self::BrandSelection => "Which brand is this for?",
            Self::ChannelSelection => "Select one or more channels",
            Self::BrandPreview | Self::OtherPreview => "Review the slides to generate",
            Self::Generating => "Generating your slides",
            Self::Success => "Your slides are ready",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_canonical_order() {
        assert!(WizardStep::WorkspaceSelection.rank() < WizardStep::TemplateSelection.rank());
        assert!(WizardStep::TemplateSelection.rank() < WizardStep::BrandSelection.rank());
        assert!(WizardStep::BrandSelection.rank() < WizardStep::ChannelSelection.rank());
        assert_eq!(
            WizardStep::BrandPreview.rank(),
            WizardStep::OtherPreview.rank()
        );
    }

    #[test]
    fn test_breadcrumb_targets() {
        let targets: Vec<_> = WizardStep::all()
            .iter()
            .filter(|s| s.is_breadcrumb_target())
            .collect();
        assert_eq!(targets.len(), 4);
        assert!(!WizardStep::Generating.is_breadcrumb_target());
    }

    #[test]
    fn test_ids() {
        assert_eq!(WizardStep::ChannelSelection.to_string(), "channel-selection");
        assert_eq!(WizardStep::all().len(), 8);
    }
}
