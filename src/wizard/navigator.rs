// ABOUTME: Wizard navigation state machine over the user's selections
// Every transition is guarded by the current step; rejected events leave state untouched

use tracing::{debug, info};

use super::error::WizardError;
use super::step::WizardStep;
use crate::models::{Brand, BrandSelection, Channel, TemplateDefinition, TemplateKey};

/// What the user has picked so far and where the wizard is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_workspace: Option<String>,
    pub selected_template: Option<TemplateKey>,
    pub selected_brand: Option<BrandSelection>,
    /// Unique channels in the order they were checked
    pub selected_channels: Vec<Channel>,
    pub current_step: WizardStep,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_workspace: None,
            selected_template: None,
            selected_brand: None,
            selected_channels: Vec::new(),
            current_step: WizardStep::WorkspaceSelection,
        }
    }

    pub fn template(&self) -> Option<&'static TemplateDefinition> {
        self.selected_template.map(|key| key.definition())
    }

    /// Label shown on the channel step for the chosen brand
    pub fn brand_label(&self) -> Option<String> {
        self.selected_brand.map(|b| b.label())
    }

    pub fn is_channel_selected(&self, channel: Channel) -> bool {
        self.selected_channels.contains(&channel)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives `SelectionState` through the wizard's transition table
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: SelectionState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    fn expect_step(&self, step: WizardStep, event: &'static str) -> Result<(), WizardError> {
        if self.state.current_step == step {
            Ok(())
        } else {
            Err(self.rejected(event))
        }
    }

    fn rejected(&self, event: &'static str) -> WizardError {
        debug!(step = %self.state.current_step, event, "Rejected wizard event");
        WizardError::InvalidTransition {
            from: self.state.current_step,
            event,
        }
    }

    fn enter(&mut self, step: WizardStep) -> WizardStep {
        info!(from = %self.state.current_step, to = %step, "Wizard step changed");
        self.state.current_step = step;
        step
    }

    /// workspace-selection -> template-selection
    pub fn choose_workspace(&mut self, workspace: &str) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::WorkspaceSelection, "choose workspace")?;
        if workspace.trim().is_empty() {
            return Err(WizardError::PreconditionFailed(
                "workspace id is empty".to_string(),
            ));
        }
        self.state.selected_workspace = Some(workspace.to_string());
        Ok(self.enter(WizardStep::TemplateSelection))
    }

    /// template-selection -> brand-selection or other-preview
    pub fn choose_template(&mut self, key: TemplateKey) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::TemplateSelection, "choose template")?;

        self.state.selected_template = Some(key);
        self.state.selected_brand = None;
        self.state.selected_channels.clear();

        if key.definition().needs_brand {
            Ok(self.enter(WizardStep::BrandSelection))
        } else {
            Ok(self.enter(WizardStep::OtherPreview))
        }
    }

    /// brand-selection -> channel-selection
    pub fn choose_brand(&mut self, brand: BrandSelection) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::BrandSelection, "choose brand")?;
        Ok(self.select_brand(brand))
    }

    fn select_brand(&mut self, brand: BrandSelection) -> WizardStep {
        self.state.selected_brand = Some(brand);
        self.state.selected_channels.clear();
        self.enter(WizardStep::ChannelSelection)
    }

    /// Check or uncheck a single channel on the channel step
    pub fn toggle_channel(&mut self, channel: Channel, checked: bool) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ChannelSelection, "toggle channel")?;

        let channels = &mut self.state.selected_channels;
        if checked {
            if !channels.contains(&channel) {
                channels.push(channel);
            }
        } else {
            channels.retain(|c| *c != channel);
        }
        Ok(())
    }

    /// The "All Channels" checkbox
    pub fn set_all_channels(&mut self, checked: bool) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ChannelSelection, "toggle all channels")?;

        if checked {
            for channel in Channel::ALL {
                if !self.state.selected_channels.contains(&channel) {
                    self.state.selected_channels.push(channel);
                }
            }
        } else {
            self.state.selected_channels.clear();
        }
        Ok(())
    }

    pub fn all_channels_selected(&self) -> bool {
        self.state.selected_channels.len() == Channel::ALL.len()
    }

    /// channel-selection -> brand-preview, only with at least one channel
    pub fn continue_to_preview(&mut self) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::ChannelSelection, "continue")?;
        if self.state.selected_channels.is_empty() {
            return Err(WizardError::NoChannelsSelected);
        }
        Ok(self.enter(WizardStep::BrandPreview))
    }

    /// brand-preview / other-preview -> generating
    pub fn start_generation(&mut self) -> Result<WizardStep, WizardError> {
        match self.state.current_step {
            WizardStep::BrandPreview | WizardStep::OtherPreview => {
                Ok(self.enter(WizardStep::Generating))
            }
            _ => Err(self.rejected("generate")),
        }
    }

    /// generating -> success
    pub fn finish_generation(&mut self) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::Generating, "finish generation")?;
        Ok(self.enter(WizardStep::Success))
    }

    /// success -> template-selection ("create more" and "done" behave the same)
    pub fn start_over(&mut self) -> Result<WizardStep, WizardError> {
        self.expect_step(WizardStep::Success, "start over")?;
        self.state.selected_brand = None;
        self.state.selected_channels.clear();
        Ok(self.enter(WizardStep::TemplateSelection))
    }

    /// Jump back to an earlier selection step, clearing everything picked after it
    pub fn breadcrumb(&mut self, target: WizardStep) -> Result<WizardStep, WizardError> {
        let current = self.state.current_step;
        if !target.is_breadcrumb_target() || target.rank() > current.rank() {
            return Err(self.rejected("breadcrumb"));
        }

        let needs_brand = self.state.template().is_some_and(|t| t.needs_brand);
        match target {
            WizardStep::WorkspaceSelection => return Ok(self.back_to_workspace()),
            WizardStep::TemplateSelection => {
                self.state.selected_brand = None;
                self.state.selected_channels.clear();
            }
            WizardStep::BrandSelection => {
                if !needs_brand {
                    return Err(self.rejected("breadcrumb"));
                }
                self.state.selected_channels.clear();
            }
            WizardStep::ChannelSelection => {
                if !needs_brand || self.state.selected_brand.is_none() {
                    return Err(self.rejected("breadcrumb"));
                }
            }
            _ => return Err(self.rejected("breadcrumb")),
        }

        Ok(self.enter(target))
    }

    /// Any step -> workspace-selection, dropping every selection
    pub fn back_to_workspace(&mut self) -> WizardStep {
        self.state.selected_workspace = None;
        self.state.selected_template = None;
        self.state.selected_brand = None;
        self.state.selected_channels.clear();
        self.enter(WizardStep::WorkspaceSelection)
    }

    /// "Go" on a brand in the progress panel: pick the brand deck and that brand
    pub fn jump_to_brand(&mut self, brand: Brand) -> Result<WizardStep, WizardError> {
        if self.state.current_step == WizardStep::WorkspaceSelection {
            return Err(self.rejected("jump to brand"));
        }
        self.state.selected_template = Some(TemplateKey::BrandSlides);
        Ok(self.select_brand(BrandSelection::Brand(brand)))
    }
}
