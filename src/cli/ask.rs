// ABOUTME: CLI ask command - print the canned answer to a question

use anyhow::{bail, Result};

use super::{AskArgs, OutputFormat};
use crate::models::BrandSelection;
use crate::wizard::QueryResponder;

/// Execute the ask command
pub fn execute(args: AskArgs, format: OutputFormat) -> Result<()> {
    let brand = args
        .brand
        .as_deref()
        .map(str::parse::<BrandSelection>)
        .transpose()?;

    let Some(response) = QueryResponder::classify(&args.query, brand) else {
        bail!("Query is empty");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => println!("{}", response.text),
    }

    Ok(())
}
