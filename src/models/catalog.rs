// ABOUTME: Static catalog of brands, channels and slide templates
// Everything here is immutable for the lifetime of the process

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::wizard::WizardError;

/// Turn a hyphenated identifier into a display label ("shea-moisture" -> "Shea Moisture")
pub fn display_label(id: &str) -> String {
    id.split(|c: char| c == '-' || c == ' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Brands available for brand performance decks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Brand {
    Dove,
    Tresemme,
    Vaseline,
    Nexxus,
    SheaMoisture,
}

impl Brand {
    pub const ALL: [Brand; 5] = [
        Self::Dove,
        Self::Tresemme,
        Self::Vaseline,
        Self::Nexxus,
        Self::SheaMoisture,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dove => "dove",
            Self::Tresemme => "tresemme",
            Self::Vaseline => "vaseline",
            Self::Nexxus => "nexxus",
            Self::SheaMoisture => "shea-moisture",
        }
    }

    pub fn label(&self) -> String {
        display_label(self.id())
    }

    /// Single-letter badge shown in the progress panel until the brand is complete
    pub fn initial(&self) -> char {
        self.id().chars().next().map_or(' ', |c| c.to_ascii_uppercase())
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Brand {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.id() == s)
            .ok_or_else(|| WizardError::UnknownBrand(s.to_string()))
    }
}

/// A brand pick on the brand step: one brand or the "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandSelection {
    All,
    Brand(Brand),
}

impl BrandSelection {
    pub const ALL_ID: &'static str = "all";

    pub fn id(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_ID,
            Self::Brand(brand) => brand.id(),
        }
    }

    /// "All Brands" for the sentinel, otherwise the capitalized brand name
    pub fn label(&self) -> String {
        match self {
            Self::All => "All Brands".to_string(),
            Self::Brand(brand) => brand.label(),
        }
    }

    /// Concrete brands this selection covers
    pub fn brands(&self) -> Vec<Brand> {
        match self {
            Self::All => Brand::ALL.to_vec(),
            Self::Brand(brand) => vec![*brand],
        }
    }

    /// Options listed on the brand step, sentinel first
    pub fn options() -> Vec<BrandSelection> {
        std::iter::once(Self::All)
            .chain(Brand::ALL.into_iter().map(Self::Brand))
            .collect()
    }
}

impl fmt::Display for BrandSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BrandSelection {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_ID {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Brand)
        }
    }
}

/// Marketing channels a brand deck can be cut by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    National,
    Social,
    PaidSearch,
    Mikmak,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Self::National, Self::Social, Self::PaidSearch, Self::Mikmak];

    pub fn id(&self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Social => "social",
            Self::PaidSearch => "paid-search",
            Self::Mikmak => "mikmak",
        }
    }

    pub fn label(&self) -> String {
        display_label(self.id())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Channel {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| WizardError::UnknownChannel(s.to_string()))
    }
}

/// Identifies a slide template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    BrandSlides,
    ExecSummary,
    SosSom,
    PostMeeting,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 4] = [
        Self::BrandSlides,
        Self::ExecSummary,
        Self::SosSom,
        Self::PostMeeting,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::BrandSlides => "brand-slides",
            Self::ExecSummary => "exec-summary",
            Self::SosSom => "sos-som",
            Self::PostMeeting => "post-meeting",
        }
    }

    pub fn definition(&self) -> &'static TemplateDefinition {
        match self {
            Self::BrandSlides => &BRAND_SLIDES,
            Self::ExecSummary => &EXEC_SUMMARY,
            Self::SosSom => &SOS_SOM,
            Self::PostMeeting => &POST_MEETING,
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateKey {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| WizardError::UnknownTemplate(s.to_string()))
    }
}

/// One slide a template produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSpec {
    pub name: &'static str,
    pub icon: &'static str,
    /// Cosmetic confidence percentage (0-100)
    pub confidence: u8,
    pub description: &'static str,
}

/// A named slide deck category with its fixed slide list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDefinition {
    pub key: TemplateKey,
    pub name: &'static str,
    pub needs_brand: bool,
    /// Only meaningful when `needs_brand` is also set
    pub needs_channel: bool,
    /// Slides generated per (brand, channel) pair; set only for brand+channel templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_per_combo: Option<usize>,
    pub slides: &'static [SlideSpec],
}

impl TemplateDefinition {
    pub fn needs_brand_and_channel(&self) -> bool {
        self.needs_brand && self.needs_channel
    }

    /// Check the structural invariants of a template
    pub fn validate(&self) -> Result<(), WizardError> {
        let fail = |reason: &str| {
            Err(WizardError::PreconditionFailed(format!(
                "template '{}': {}",
                self.key, reason
            )))
        };

        if self.slides.is_empty() {
            return fail("has no slides");
        }
        if self.needs_channel && !self.needs_brand {
            return fail("needs a channel without needing a brand");
        }
        match (self.needs_brand_and_channel(), self.slides_per_combo) {
            (true, Some(per_combo)) if per_combo != self.slides.len() => {
                return fail("slides per combo does not match its slide list");
            }
            (true, None) => return fail("is missing slides per combo"),
            (false, Some(_)) => return fail("sets slides per combo without brand and channel"),
            _ => {}
        }
        if self.slides.iter().any(|s| s.confidence > 100) {
            return fail("has a confidence above 100");
        }
        Ok(())
    }
}

static BRAND_SLIDES: TemplateDefinition = TemplateDefinition {
    key: TemplateKey::BrandSlides,
    name: "Brand Performance Slides",
    needs_brand: true,
    needs_channel: true,
    slides_per_combo: Some(3),
    slides: &[
        SlideSpec {
            name: "Brand Performance Overview",
            icon: "📊",
            confidence: 95,
            description: "ROI trends and key metrics",
        },
        SlideSpec {
            name: "Key Insights & Recommendations",
            icon: "💡",
            confidence: 92,
            description: "Performance drivers and actions",
        },
        SlideSpec {
            name: "Look Ahead Recommendations",
            icon: "🎯",
            confidence: 88,
            description: "Strategic priorities",
        },
    ],
};

static EXEC_SUMMARY: TemplateDefinition = TemplateDefinition {
    key: TemplateKey::ExecSummary,
    name: "BU Executive Summary",
    needs_brand: false,
    needs_channel: false,
    slides_per_combo: None,
    slides: &[
        SlideSpec {
            name: "Executive Overview",
            icon: "📈",
            confidence: 96,
            description: "Key business metrics",
        },
        SlideSpec {
            name: "Performance Highlights",
            icon: "⭐",
            confidence: 94,
            description: "Top performing areas",
        },
        SlideSpec {
            name: "Areas of Focus",
            icon: "🎯",
            confidence: 91,
            description: "Priority initiatives",
        },
        SlideSpec {
            name: "Financial Summary",
            icon: "💰",
            confidence: 93,
            description: "Budget and spend",
        },
        SlideSpec {
            name: "Strategic Recommendations",
            icon: "🔮",
            confidence: 89,
            description: "Forward-looking actions",
        },
    ],
};

static SOS_SOM: TemplateDefinition = TemplateDefinition {
    key: TemplateKey::SosSom,
    name: "SoS/SoM Update",
    needs_brand: false,
    needs_channel: false,
    slides_per_combo: None,
    slides: &[
        SlideSpec {
            name: "Share of Shelf Overview",
            icon: "📊",
            confidence: 94,
            description: "Retailer presence metrics",
        },
        SlideSpec {
            name: "Share of Market Trends",
            icon: "📈",
            confidence: 93,
            description: "Market position analysis",
        },
        SlideSpec {
            name: "Competitive Landscape",
            icon: "🏆",
            confidence: 90,
            description: "Competitor comparison",
        },
        SlideSpec {
            name: "Distribution Analysis",
            icon: "🗺️",
            confidence: 92,
            description: "Geographic breakdown",
        },
    ],
};

static POST_MEETING: TemplateDefinition = TemplateDefinition {
    key: TemplateKey::PostMeeting,
    name: "Post-Meeting Actions",
    needs_brand: false,
    needs_channel: false,
    slides_per_combo: None,
    slides: &[
        SlideSpec {
            name: "Action Items Summary",
            icon: "✓",
            confidence: 97,
            description: "Tasks and owners",
        },
        SlideSpec {
            name: "Key Decisions",
            icon: "🎯",
            confidence: 96,
            description: "Commitments made",
        },
        SlideSpec {
            name: "Open Questions",
            icon: "❓",
            confidence: 94,
            description: "Items for follow-up",
        },
        SlideSpec {
            name: "Next Steps Timeline",
            icon: "📅",
            confidence: 95,
            description: "Delivery schedule",
        },
    ],
};

/// Read-only view over the built-in templates, brands and channels
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn builtin() -> Self {
        Self
    }

    /// Templates in display order
    pub fn templates(&self) -> impl Iterator<Item = &'static TemplateDefinition> {
        TemplateKey::ALL.into_iter().map(|key| key.definition())
    }

    pub fn template(&self, key: TemplateKey) -> &'static TemplateDefinition {
        key.definition()
    }

    pub fn brands(&self) -> &'static [Brand] {
        &Brand::ALL
    }

    pub fn channels(&self) -> &'static [Channel] {
        &Channel::ALL
    }

    /// Number of (brand, channel) combinations that can be tracked
    pub fn total_combos(&self) -> usize {
        Brand::ALL.len() * Channel::ALL.len()
    }

    pub fn validate(&self) -> Result<(), WizardError> {
        self.templates().try_for_each(TemplateDefinition::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("shea-moisture"), "Shea Moisture");
        assert_eq!(display_label("paid-search"), "Paid Search");
        assert_eq!(display_label("dove"), "Dove");
        assert_eq!(display_label("MIKMAK"), "Mikmak");
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_slides_per_combo_matches_slide_count() {
        for template in Catalog::builtin().templates() {
            if template.needs_brand_and_channel() {
                assert_eq!(template.slides_per_combo, Some(template.slides.len()));
            } else {
                assert_eq!(template.slides_per_combo, None);
            }
            assert!(!template.needs_channel || template.needs_brand);
        }
    }

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for brand in Brand::ALL {
            assert_eq!(brand.id().parse::<Brand>().ok(), Some(brand));
        }
        for channel in Channel::ALL {
            assert_eq!(channel.id().parse::<Channel>().ok(), Some(channel));
        }
        for key in TemplateKey::ALL {
            assert_eq!(key.id().parse::<TemplateKey>().ok(), Some(key));
        }
        assert_eq!("all".parse::<BrandSelection>().ok(), Some(BrandSelection::All));
        assert!("axe".parse::<Brand>().is_err());
    }

    #[test]
    fn test_brand_selection_labels() {
        assert_eq!(BrandSelection::All.label(), "All Brands");
        assert_eq!(
            BrandSelection::Brand(Brand::SheaMoisture).label(),
            "Shea Moisture"
        );
        assert_eq!(BrandSelection::All.brands().len(), 5);
        assert_eq!(BrandSelection::options().len(), 6);
    }

    #[test]
    fn test_validate_rejects_broken_template() {
        let broken = TemplateDefinition {
            slides_per_combo: Some(4),
            ..BRAND_SLIDES
        };
        assert!(broken.validate().is_err());

        let channel_without_brand = TemplateDefinition {
            needs_brand: false,
            ..BRAND_SLIDES
        };
        assert!(channel_without_brand.validate().is_err());
    }

    #[test]
    fn test_total_combos() {
        assert_eq!(Catalog::builtin().total_combos(), 20);
    }
}
