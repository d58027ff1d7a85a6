// ABOUTME: CLI config command - print the effective layered config, optionally saving it

use anyhow::Result;

use super::{ConfigArgs, OutputFormat};
use crate::config::AppConfig;

/// Execute the config command
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    let config = AppConfig::load()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => print!("{}", render_text(&config)?),
    }

    if args.save {
        let path = config.save()?;
        tracing::info!(path = %path.display(), "Saved effective config");
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}

fn render_text(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
