// ABOUTME: Mock presentation deck that generated slides are appended to
// Holds numbered thumbnails and the slide currently shown on the canvas

use serde::Serialize;

use super::catalog::{display_label, BrandSelection, Channel, TemplateDefinition};

/// Insights printed on every canvas slide
pub const CANVAS_INSIGHTS: [&str; 3] = [
    "ROI improved 15% YoY driven by optimized targeting",
    "Channel shows consistent performance above benchmark",
    "Recommend 20% budget increase for Q2",
];

/// A thumbnail in the deck sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckSlide {
    /// 1-based position in the deck
    pub number: usize,
    pub title: &'static str,
}

/// What the canvas currently renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasSlide {
    pub number: usize,
    /// "<brand> - <channel>" header
    pub header: String,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    slides: Vec<DeckSlide>,
    active: Option<usize>,
    canvas: Option<CanvasSlide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slides(&self) -> &[DeckSlide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of the highlighted thumbnail, if any
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn canvas(&self) -> Option<&CanvasSlide> {
        self.canvas.as_ref()
    }

    /// Append `count` slides cycling through the template's slide list.
    /// The first appended slide becomes active and is shown on the canvas.
    pub fn append_generated(
        &mut self,
        template: &TemplateDefinition,
        count: usize,
        brand: Option<BrandSelection>,
        channels: &[Channel],
    ) {
        if count == 0 || template.slides.is_empty() {
            return;
        }

        let offset = self.slides.len();
        self.slides.extend((0..count).map(|i| DeckSlide {
            number: offset + i + 1,
            title: template.slides[i % template.slides.len()].name,
        }));

        self.show(offset + 1, template.slides[0].name, brand, channels.first().copied());
    }

    /// Show a slide on the canvas. Unknown slide numbers are ignored.
    pub fn select(&mut self, number: usize, brand: Option<BrandSelection>, channel: Option<Channel>) {
        let Some(title) = number
            .checked_sub(1)
            .and_then(|idx| self.slides.get(idx))
            .map(|slide| slide.title)
        else {
            return;
        };
        self.show(number, title, brand, channel);
    }

    fn show(
        &mut self,
        number: usize,
        title: &'static str,
        brand: Option<BrandSelection>,
        channel: Option<Channel>,
    ) {
        // The canvas header capitalizes the raw brand id, so the sentinel reads "All"
        let brand_name = brand.map_or_else(
            || "Brand".to_string(),
            |b| display_label(b.id()),
        );
        let channel_name = channel.map_or_else(|| "Channel".to_string(), |c| c.label());

        self.active = Some(number);
        self.canvas = Some(CanvasSlide {
            number,
            header: format!("{} - {}", brand_name, channel_name),
            subtitle: title,
        });
    }
}
