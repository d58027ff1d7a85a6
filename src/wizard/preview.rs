// ABOUTME: Builds the slide preview list shown before generation
// Pure functions of the selection and the catalog; rows can be deselected afterwards

use serde::Serialize;

use super::error::WizardError;
use super::navigator::SelectionState;
use crate::models::{display_label, BrandSelection, Channel, TemplateDefinition, TemplateKey};

/// One slide the user can keep or drop before generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub slide_name: &'static str,
    pub icon: &'static str,
    pub confidence: u8,
    pub subtitle: String,
    pub selected: bool,
}

impl PreviewRow {
    pub fn confidence_badge(&self) -> String {
        format!("{}% Confidence", self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreviewKind {
    BrandChannel {
        brand: BrandSelection,
        channels: Vec<Channel>,
    },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub template: TemplateKey,
    pub kind: PreviewKind,
    pub rows: Vec<PreviewRow>,
}

/// Result line shown on the success step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessSummary {
    pub slide_count: usize,
    pub description: String,
}

impl SuccessSummary {
    pub fn headline(&self) -> String {
        format!("{} Slides", self.slide_count)
    }
}

fn joined_channel_labels(channels: &[Channel]) -> String {
    channels
        .iter()
        .map(Channel::label)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Preview {
    /// Header line: brand and channels, or what the template will produce
    pub fn summary(&self) -> String {
        match &self.kind {
            PreviewKind::BrandChannel { brand, channels } => {
                format!("{} - {}", brand.label(), joined_channel_labels(channels))
            }
            PreviewKind::Other => {
                format!("{} slides will be generated", self.template.definition().name)
            }
        }
    }

    /// Slides the selection produces before any row is deselected
    pub fn total_slides(&self) -> usize {
        match &self.kind {
            PreviewKind::BrandChannel { channels, .. } => self
                .template
                .definition()
                .slides_per_combo
                .map_or(self.rows.len(), |per_combo| per_combo * channels.len()),
            PreviewKind::Other => self.rows.len(),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|r| r.selected).count()
    }

    pub fn generate_label(&self) -> String {
        format!("Generate {} Slides", self.selected_count())
    }

    /// Flip one row's checkbox. Out-of-range rows are ignored.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.selected = !row.selected;
                true
            }
            None => false,
        }
    }

    /// Success line once generation completes. Deselected rows only shrink the count.
    /// The brand is the capitalized id, so the sentinel reads "All" as on the canvas header.
    pub fn success_summary(&self) -> SuccessSummary {
        let description = match &self.kind {
            PreviewKind::BrandChannel { brand, channels } => format!(
                "{} - {}",
                display_label(brand.id()),
                joined_channel_labels(channels)
            ),
            PreviewKind::Other => self.template.definition().name.to_string(),
        };
        SuccessSummary {
            slide_count: self.selected_count(),
            description,
        }
    }
}

/// Rows for a brand + channel template: every slide for every channel, channel-major
pub fn build_brand_channel_preview(
    template: &TemplateDefinition,
    brand: BrandSelection,
    channels: &[Channel],
) -> Result<Preview, WizardError> {
    if !template.needs_brand_and_channel() {
        return Err(WizardError::PreconditionFailed(format!(
            "template '{}' does not take a brand and channel",
            template.key
        )));
    }
    if channels.is_empty() {
        return Err(WizardError::NoChannelsSelected);
    }

    let brand_label = brand.label();
    let rows = channels
        .iter()
        .flat_map(|channel| {
            let subtitle = format!("{} - {}", brand_label, channel.label());
            template.slides.iter().map(move |slide| PreviewRow {
                slide_name: slide.name,
                icon: slide.icon,
                confidence: slide.confidence,
                subtitle: subtitle.clone(),
                selected: true,
            })
        })
        .collect();

    Ok(Preview {
        template: template.key,
        kind: PreviewKind::BrandChannel {
            brand,
            channels: channels.to_vec(),
        },
        rows,
    })
}

/// Rows for a template that needs no brand: one per slide with its description
pub fn build_other_preview(template: &TemplateDefinition) -> Result<Preview, WizardError> {
    if template.needs_brand {
        return Err(WizardError::PreconditionFailed(format!(
            "template '{}' needs a brand",
            template.key
        )));
    }

    let rows = template
        .slides
        .iter()
        .map(|slide| PreviewRow {
            slide_name: slide.name,
            icon: slide.icon,
            confidence: slide.confidence,
            subtitle: slide.description.to_string(),
            selected: true,
        })
        .collect();

    Ok(Preview {
        template: template.key,
        kind: PreviewKind::Other,
        rows,
    })
}

/// Preview for whatever the selection currently describes
pub fn build_preview(selection: &SelectionState) -> Result<Preview, WizardError> {
    let template = selection
        .template()
        .ok_or_else(|| WizardError::PreconditionFailed("no template selected".to_string()))?;

    if template.needs_brand_and_channel() {
        let brand = selection
            .selected_brand
            .ok_or_else(|| WizardError::PreconditionFailed("no brand selected".to_string()))?;
        build_brand_channel_preview(template, brand, &selection.selected_channels)
    } else {
        build_other_preview(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Brand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_brand_channel_rows_are_channel_major() {
        let template = TemplateKey::BrandSlides.definition();
        let preview = build_brand_channel_preview(
            template,
            BrandSelection::Brand(Brand::Dove),
            &[Channel::Social, Channel::National],
        )
        .unwrap();

        assert_eq!(preview.rows.len(), 6);
        assert_eq!(preview.total_slides(), 6);

        let subtitles: Vec<&str> = preview.rows.iter().map(|r| r.subtitle.as_str()).collect();
        assert_eq!(
            subtitles,
            vec![
                "Dove - Social",
                "Dove - Social",
                "Dove - Social",
                "Dove - National",
                "Dove - National",
                "Dove - National",
            ]
        );
        assert_eq!(preview.rows[0].slide_name, "Brand Performance Overview");
        assert_eq!(preview.rows[5].slide_name, "Look Ahead Recommendations");
        assert!(preview.rows.iter().all(|r| r.selected));
    }

    #[test]
    fn test_row_count_matches_slides_per_combo() {
        let template = TemplateKey::BrandSlides.definition();
        for n in 1..=Channel::ALL.len() {
            let preview =
                build_brand_channel_preview(template, BrandSelection::All, &Channel::ALL[..n])
                    .unwrap();
            assert_eq!(preview.rows.len(), n * template.slides.len());
            assert_eq!(preview.total_slides(), n * template.slides_per_combo.unwrap());
        }
    }

    #[test]
    fn test_brand_preview_summary_and_label() {
        let mut preview = build_brand_channel_preview(
            TemplateKey::BrandSlides.definition(),
            BrandSelection::Brand(Brand::SheaMoisture),
            &[Channel::PaidSearch, Channel::Mikmak],
        )
        .unwrap();

        assert_eq!(preview.summary(), "Shea Moisture - Paid Search, Mikmak");
        assert_eq!(preview.generate_label(), "Generate 6 Slides");

        assert!(preview.toggle_row(1));
        assert_eq!(preview.generate_label(), "Generate 5 Slides");
        assert!(!preview.toggle_row(42));
        assert_eq!(preview.selected_count(), 5);
        assert_eq!(preview.total_slides(), 6);
    }

    #[test]
    fn test_other_preview_matches_catalog_order() {
        let template = TemplateKey::ExecSummary.definition();
        let preview = build_other_preview(template).unwrap();

        assert_eq!(preview.rows.len(), 5);
        for (row, slide) in preview.rows.iter().zip(template.slides) {
            assert_eq!(row.slide_name, slide.name);
            assert_eq!(row.subtitle, slide.description);
            assert_eq!(row.confidence, slide.confidence);
        }
        assert_eq!(preview.rows[0].confidence_badge(), "96% Confidence");
        assert_eq!(
            preview.summary(),
            "BU Executive Summary slides will be generated"
        );
    }

    #[test]
    fn test_preconditions() {
        assert!(build_other_preview(TemplateKey::BrandSlides.definition()).is_err());
        assert!(build_brand_channel_preview(
            TemplateKey::SosSom.definition(),
            BrandSelection::All,
            &[Channel::Social]
        )
        .is_err());
        assert_eq!(
            build_brand_channel_preview(
                TemplateKey::BrandSlides.definition(),
                BrandSelection::All,
                &[]
            ),
            Err(WizardError::NoChannelsSelected)
        );
    }

    #[test]
    fn test_success_summary() {
        let mut preview = build_other_preview(TemplateKey::PostMeeting.definition()).unwrap();
        preview.toggle_row(0);
        let summary = preview.success_summary();
        assert_eq!(summary.slide_count, 3);
        assert_eq!(summary.description, "Post-Meeting Actions");
        assert_eq!(summary.headline(), "3 Slides");
    }

    #[test]
    fn test_build_from_selection() {
        let mut selection = SelectionState::new();
        assert!(build_preview(&selection).is_err());

        selection.selected_template = Some(TemplateKey::BrandSlides);
        selection.selected_brand = Some(BrandSelection::Brand(Brand::Vaseline));
        selection.selected_channels = vec![Channel::National];
        let preview = build_preview(&selection).unwrap();
        assert_eq!(preview.rows.len(), 3);
        assert_eq!(preview.success_summary().description, "Vaseline - National");
    }

    #[test]
    fn test_all_brands_success_uses_capitalized_id() {
        let preview = build_brand_channel_preview(
            TemplateKey::BrandSlides.definition(),
            BrandSelection::All,
            &[Channel::Social, Channel::PaidSearch],
        )
        .unwrap();

        assert_eq!(preview.summary(), "All Brands - Social, Paid Search");
        assert_eq!(
            preview.success_summary().description,
            "All - Social, Paid Search"
        );
    }
}
