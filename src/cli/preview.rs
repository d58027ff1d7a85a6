// ABOUTME: CLI preview command - print the slides a selection would generate
//
// Drives the same navigator the TUI uses, so invalid selections fail the same way.

use anyhow::{bail, Result};

use super::{OutputFormat, PreviewArgs};
use crate::models::{BrandSelection, Channel, TemplateKey};
use crate::wizard::{build_preview, Navigator, Preview};

/// Execute the preview command
pub fn execute(args: PreviewArgs, format: OutputFormat) -> Result<()> {
    let preview = preview_for(&args)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&preview)?),
        OutputFormat::Text => print!("{}", render_text(&preview)),
    }

    Ok(())
}

/// Walk the wizard with the given arguments and build its preview
pub fn preview_for(args: &PreviewArgs) -> Result<Preview> {
    let template: TemplateKey = args.template.parse()?;
    let channels = args
        .channels
        .iter()
        .map(|c| c.parse::<Channel>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut navigator = Navigator::new();
    navigator.choose_workspace("cli")?;
    navigator.choose_template(template)?;

    if template.definition().needs_brand_and_channel() {
        let Some(brand) = args.brand.as_deref() else {
            bail!("Template '{}' needs --brand", template);
        };
        navigator.choose_brand(brand.parse::<BrandSelection>()?)?;
        for channel in channels {
            navigator.toggle_channel(channel, true)?;
        }
        navigator.continue_to_preview()?;
    } else if args.brand.is_some() || !args.channels.is_empty() {
        bail!("Template '{}' does not take a brand or channel", template);
    }

    Ok(build_preview(navigator.state())?)
}

fn render_text(preview: &Preview) -> String {
    let mut out = format!("{}\n{}\n", preview.summary(), "-".repeat(60));
    for (idx, row) in preview.rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} {:<34} {:>3}%  {}\n",
            idx + 1,
            row.icon,
            row.slide_name,
            row.confidence,
            row.subtitle
        ));
    }
    out.push_str(&format!("\n{}\n", preview.generate_label()));
    out
}
