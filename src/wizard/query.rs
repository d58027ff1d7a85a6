// ABOUTME: Keyword classifier that answers free-text questions with canned responses

use serde::Serialize;

use crate::models::{display_label, BrandSelection};

/// Suggestions offered under the query bar
pub const QUERY_SUGGESTIONS: [&str; 3] = [
    "What drove performance this quarter?",
    "Compare ROI across channels",
    "Summarize key insights for this brand",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseKind {
    Performance,
    Comparison,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResponse {
    pub kind: ResponseKind,
    pub text: String,
}

pub struct QueryResponder;

impl QueryResponder {
    /// Pick a canned response for `query`. Blank input yields nothing.
    pub fn classify(query: &str, brand: Option<BrandSelection>) -> Option<QueryResponse> {
        if query.trim().is_empty() {
            return None;
        }

        let lower = query.to_lowercase();
        let kind = if lower.contains("performance") || lower.contains("drove") {
            ResponseKind::Performance
        } else if lower.contains("compare") || lower.contains("roi") {
            ResponseKind::Comparison
        } else {
            ResponseKind::Default
        };

        Some(QueryResponse {
            kind,
            text: Self::response_text(kind, brand),
        })
    }

    fn response_text(kind: ResponseKind, brand: Option<BrandSelection>) -> String {
        match kind {
            ResponseKind::Performance => format!(
                "{} performance shows +12% YoY ROI improvement. Key drivers include optimized \
                 creative and improved targeting. However, conversion rates declined 3% recently, \
                 suggesting potential creative fatigue.",
                display_label(brand.map_or("dove", |b| b.id()))
            ),
            ResponseKind::Comparison => "Channel comparison shows Social outperforming National by \
                 25% in ROI efficiency, but National delivers 3x higher revenue. Paid Search has \
                 highest ROI at 2.4x but limited scale. Maintain National while scaling Social and \
                 Paid Search."
                .to_string(),
            // The default answer names the brand by its raw identifier
            ResponseKind::Default => format!(
                "Based on recent data, {} shows strong performance. ROI improved 15% \
                 month-over-month with particular strength in digital channels. Consider \
                 reallocating budget from underperforming traditional channels.",
                brand.map_or("your brand", |b| b.id())
            ),
        }
    }
}
