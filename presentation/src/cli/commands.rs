//! CLI command definitions

use clap::Parser;
use council_domain::OutputFormat;
use std::path::PathBuf;

/// CLI arguments for layout-council
#[derive(Parser, Debug)]
#[command(name = "layout-council")]
#[command(author, version, about = "Layout Council - Agents agree on a mobile redesign")]
#[command(long_about = r#"
Layout Council runs a panel of agents to redesign a web page for mobile.

The process has three stages:
1. Analysis: The analyzer summarizes the page structure
2. Design: The designer proposes a mobile layout
3. Evaluation: Quality evaluators and auditors score it in parallel

When the consensus score falls below the threshold the designer gets the
evaluators' feedback and one more pass runs; the better pass wins.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/layout-council/config.toml   Global config

Example:
  layout-council https://example.com --content page.json
  layout-council https://example.com --html page.html -o full
  layout-council https://example.com --html page.html --evaluators 1 --no-refine
"#)]
pub struct Cli {
    /// URL of the page being redesigned (required unless --show-config)
    pub url: Option<String>,

    /// Content model JSON produced by an external extractor
    #[arg(long, value_name = "PATH", conflicts_with = "html")]
    pub content: Option<PathBuf>,

    /// HTML document to extract the content model from
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Output format: full, summary or json (defaults to the config value)
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Per-agent timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Number of quality evaluators (1-3)
    #[arg(long, value_name = "N")]
    pub evaluators: Option<usize>,

    /// Run a single pass even below the quality threshold
    #[arg(long)]
    pub no_refine: bool,

    /// Append run events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub run_log: Option<PathBuf>,
}
