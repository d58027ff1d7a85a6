// ABOUTME: CLI catalog command - print templates, brands and channels

use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use crate::models::{Brand, Catalog, Channel, TemplateDefinition};

#[derive(Debug, Serialize)]
pub struct CatalogListing {
    pub templates: Vec<&'static TemplateDefinition>,
    pub brands: Vec<NamedId>,
    pub channels: Vec<NamedId>,
    pub total_combos: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NamedId {
    pub id: &'static str,
    pub label: String,
}

impl CatalogListing {
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            templates: catalog.templates().collect(),
            brands: catalog
                .brands()
                .iter()
                .map(|b: &Brand| NamedId {
                    id: b.id(),
                    label: b.label(),
                })
                .collect(),
            channels: catalog
                .channels()
                .iter()
                .map(|c: &Channel| NamedId {
                    id: c.id(),
                    label: c.label(),
                })
                .collect(),
            total_combos: catalog.total_combos(),
        }
    }
}

/// Execute the catalog command
pub fn execute(format: OutputFormat) -> Result<()> {
    let catalog = Catalog::builtin();
    catalog.validate()?;
    let listing = CatalogListing::from_catalog(&catalog);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Text => print!("{}", render_text(&listing)),
    }

    Ok(())
}

fn render_text(listing: &CatalogListing) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<14} {:<28} {:<8} SLIDES\n", "KEY", "TEMPLATE", "NEEDS"));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    for template in &listing.templates {
        let needs = match (template.needs_brand, template.needs_channel) {
            (true, true) => "b+c",
            (true, false) => "brand",
            _ => "-",
        };
        out.push_str(&format!(
            "{:<14} {:<28} {:<8} {}\n",
            template.key.id(),
            template.name,
            needs,
            template.slides.len()
        ));
    }

    let join = |items: &[NamedId]| {
        items
            .iter()
            .map(|n| n.id)
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("\nBrands:   {}\n", join(&listing.brands)));
    out.push_str(&format!("Channels: {}\n", join(&listing.channels)));
    out.push_str(&format!("Brand x channel combos: {}\n", listing.total_combos));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_covers_catalog() {
        let listing = CatalogListing::from_catalog(&Catalog::builtin());
        assert_eq!(listing.templates.len(), 4);
        assert_eq!(listing.brands.len(), 5);
        assert_eq!(listing.channels.len(), 4);
        assert_eq!(listing.total_combos, 20);
        assert_eq!(
            listing.channels[2],
            NamedId {
                id: "paid-search",
                label: "Paid Search".to_string()
            }
        );
    }

    #[test]
    fn test_text_rendering_lists_every_template() {
        let text = render_text(&CatalogListing::from_catalog(&Catalog::builtin()));
        assert!(text.contains("brand-slides"));
        assert!(text.contains("post-meeting"));
        assert!(text.contains("Brand x channel combos: 20"));
    }

    #[test]
    fn test_json_uses_kebab_ids() {
        let json =
            serde_json::to_value(CatalogListing::from_catalog(&Catalog::builtin())).unwrap();
        assert_eq!(json["brands"][4]["id"], "shea-moisture");
        assert_eq!(json["total_combos"], 20);
    }
}
