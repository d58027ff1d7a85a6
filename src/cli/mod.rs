// ABOUTME: CLI argument parsing and command routing for deckmate
//
// Provides command-line interface for:
// - Inspecting the slide catalog (catalog)
// - Printing the slide preview for a selection (preview)
// - Asking the canned query responder (ask)
// - Launching TUI (tui, default)

pub mod ask;
pub mod catalog;
pub mod config;
pub mod preview;

use clap::{Parser, Subcommand, ValueEnum};

/// Slide deck wizard for brand performance presentations
#[derive(Parser)]
#[command(name = "deckmate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print templates, brands and channels
    Catalog,

    /// Print the slides a selection would generate
    Preview(PreviewArgs),

    /// Ask a question about brand performance
    Ask(AskArgs),

    /// Print the effective configuration after layering every config file
    Config(ConfigArgs),
}

/// Arguments for the preview command
#[derive(clap::Args)]
pub struct PreviewArgs {
    /// Template key (brand-slides, exec-summary, sos-som, post-meeting)
    #[arg(long, short)]
    pub template: String,

    /// Brand id, or "all" for every brand
    #[arg(long, short)]
    pub brand: Option<String>,

    /// Channel id; repeat for several channels
    #[arg(long = "channel", short)]
    pub channels: Vec<String>,
}

/// Arguments for the ask command
#[derive(clap::Args)]
pub struct AskArgs {
    /// The question to ask
    pub query: String,

    /// Brand the question is about
    #[arg(long, short)]
    pub brand: Option<String>,
}

/// Arguments for the config command
#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Write the effective config to ~/.deckmate/config/config.toml
    #[arg(long)]
    pub save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["deckmate"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_preview_collects_repeated_channels() {
        let cli = Cli::try_parse_from([
            "deckmate",
            "preview",
            "--template",
            "brand-slides",
            "--brand",
            "dove",
            "--channel",
            "social",
            "--channel",
            "mikmak",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Preview(args)) => {
                assert_eq!(args.template, "brand-slides");
                assert_eq!(args.brand.as_deref(), Some("dove"));
                assert_eq!(args.channels, vec!["social", "mikmak"]);
            }
            _ => panic!("expected preview command"),
        }
    }

    #[test]
    fn test_config_save_flag() {
        let cli = Cli::try_parse_from(["deckmate", "config", "--save"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => assert!(args.save),
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_ask_requires_query() {
        assert!(Cli::try_parse_from(["deckmate", "ask"]).is_err());
    }
}
