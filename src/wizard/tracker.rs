// ABOUTME: Completion tracking for brand x channel combinations
// Entries are only ever added; per-brand and per-template progress is derived

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{Brand, BrandSelection, Catalog, Channel, TemplateKey};

/// A completed (brand, channel) pair, displayed as `brand:channel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ComboKey {
    pub brand: Brand,
    pub channel: Channel,
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.brand.id(), self.channel.id())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    completed: BTreeSet<ComboKey>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a combination; returns false if it was already complete
    pub fn insert(&mut self, brand: Brand, channel: Channel) -> bool {
        self.completed.insert(ComboKey { brand, channel })
    }

    /// Mark every channel for the selected brand(s). The "all" sentinel covers each brand.
    pub fn mark_generated(&mut self, selection: BrandSelection, channels: &[Channel]) -> usize {
        let mut added = 0;
        for brand in selection.brands() {
            for channel in channels {
                if self.insert(brand, *channel) {
                    added += 1;
                }
            }
        }
        tracing::debug!(
            brand = %selection,
            added,
            total = self.completed.len(),
            "Marked brand/channel combinations complete"
        );
        added
    }

    pub fn contains(&self, brand: Brand, channel: Channel) -> bool {
        self.completed.contains(&ComboKey { brand, channel })
    }

    /// Channels completed for a brand
    pub fn completed_channels(&self, brand: Brand) -> usize {
        Channel::ALL
            .iter()
            .filter(|channel| self.contains(brand, **channel))
            .count()
    }

    pub fn is_brand_complete(&self, brand: Brand) -> bool {
        self.completed_channels(brand) == Channel::ALL.len()
    }

    /// Total completed combinations
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.completed.iter().map(ToString::to_string)
    }

    /// Progress rows for every template in catalog order
    pub fn report(&self, catalog: &Catalog) -> ProgressReport {
        let templates = catalog
            .templates()
            .map(|template| {
                if template.needs_brand_and_channel() {
                    TemplateProgress {
                        key: template.key,
                        name: template.name,
                        icon: "📊",
                        status: ProgressStatus::Combos {
                            completed: self.completed_count(),
                            total: catalog.total_combos(),
                        },
                        brands: catalog
                            .brands()
                            .iter()
                            .map(|brand| BrandProgress {
                                brand: *brand,
                                completed_channels: self.completed_channels(*brand),
                                total_channels: catalog.channels().len(),
                            })
                            .collect(),
                    }
                } else {
                    // Completion is not tracked for these templates
                    TemplateProgress {
                        key: template.key,
                        name: template.name,
                        icon: template.slides[0].icon,
                        status: ProgressStatus::NotStarted,
                        brands: Vec::new(),
                    }
                }
            })
            .collect();

        ProgressReport { templates }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProgressStatus {
    Combos { completed: usize, total: usize },
    NotStarted,
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combos { completed, total } => write!(f, "{}/{}", completed, total),
            Self::NotStarted => f.write_str("Not Started"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandProgress {
    pub brand: Brand,
    pub completed_channels: usize,
    pub total_channels: usize,
}

impl BrandProgress {
    pub fn is_complete(&self) -> bool {
        self.completed_channels == self.total_channels
    }

    /// Checkmark once complete, otherwise the brand initial
    pub fn badge(&self) -> String {
        if self.is_complete() {
            "✓".to_string()
        } else {
            self.brand.initial().to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateProgress {
    pub key: TemplateKey,
    pub name: &'static str,
    pub icon: &'static str,
    pub status: ProgressStatus,
    /// Per-brand breakdown, empty for untracked templates
    pub brands: Vec<BrandProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub templates: Vec<TemplateProgress>,
}

impl ProgressReport {
    /// All brand sub-rows, in display order
    pub fn brand_rows(&self) -> impl Iterator<Item = &BrandProgress> {
        self.templates.iter().flat_map(|t| t.brands.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_is_idempotent() {
        let mut tracker = CompletionTracker::new();
        assert!(tracker.insert(Brand::Dove, Channel::Social));
        assert!(!tracker.insert(Brand::Dove, Channel::Social));
        assert_eq!(tracker.completed_count(), 1);
    }

    #[test]
    fn test_completed_channels_per_brand() {
        let mut tracker = CompletionTracker::new();
        tracker.mark_generated(
            BrandSelection::Brand(Brand::Dove),
            &[Channel::Social, Channel::National],
        );

        assert_eq!(tracker.completed_channels(Brand::Dove), 2);
        assert_eq!(tracker.completed_channels(Brand::Nexxus), 0);
        assert!(!tracker.is_brand_complete(Brand::Dove));

        let keys: Vec<String> = tracker.keys().collect();
        assert_eq!(keys, vec!["dove:national", "dove:social"]);
    }

    #[test]
    fn test_full_brand_completion() {
        let mut tracker = CompletionTracker::new();
        tracker.mark_generated(BrandSelection::Brand(Brand::Vaseline), &Channel::ALL);
        assert!(tracker.is_brand_complete(Brand::Vaseline));
        assert_eq!(tracker.completed_channels(Brand::Vaseline), Channel::ALL.len());
    }

    #[test]
    fn test_all_sentinel_marks_every_brand() {
        let mut tracker = CompletionTracker::new();
        let added = tracker.mark_generated(BrandSelection::All, &[Channel::Mikmak]);
        assert_eq!(added, 5);
        for brand in Brand::ALL {
            assert_eq!(tracker.completed_channels(brand), 1);
        }
    }

    #[test]
    fn test_counts_stay_within_bounds() {
        let catalog = Catalog::builtin();
        let mut tracker = CompletionTracker::new();
        for _ in 0..3 {
            tracker.mark_generated(BrandSelection::All, &Channel::ALL);
        }
        assert_eq!(tracker.completed_count(), catalog.total_combos());
        for brand in Brand::ALL {
            assert!(tracker.completed_channels(brand) <= Channel::ALL.len());
        }
    }

    #[test]
    fn test_report_rows() {
        let mut tracker = CompletionTracker::new();
        tracker.mark_generated(BrandSelection::Brand(Brand::Dove), &Channel::ALL);
        tracker.insert(Brand::Nexxus, Channel::Social);

        let report = tracker.report(&Catalog::builtin());
        assert_eq!(report.templates.len(), 4);

        let brand_slides = &report.templates[0];
        assert_eq!(brand_slides.status.to_string(), "5/20");
        assert_eq!(brand_slides.brands.len(), 5);
        assert_eq!(brand_slides.brands[0].badge(), "✓");
        assert_eq!(brand_slides.brands[3].badge(), "N");
        assert_eq!(brand_slides.brands[3].completed_channels, 1);

        for other in &report.templates[1..] {
            assert_eq!(other.status, ProgressStatus::NotStarted);
            assert!(other.brands.is_empty());
        }
        assert_eq!(report.brand_rows().count(), 5);
    }
}
