//! CLI entrypoint for Layout Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use council_application::{ConsensusParams, RunConsensusUseCase, RunTracker};
use council_domain::{AgentRole, ContentModel, ConfigIssue};
use council_infrastructure::{ConfigLoader, FileConfig, JsonlRunTracker, build_registry};
use council_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(url) = cli.url.clone() else {
        bail!("URL is required. Use --show-config to inspect configuration.");
    };

    info!("Starting Layout Council for {}", url);

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    report_issues(&config.validate());

    if !config.output.color {
        colored::control::set_override(false);
    }

    let params = params_from(&config, &cli);
    let content = load_content(&cli, &url)?;

    // === Dependency Injection ===
    let mut roles = vec![AgentRole::Analyzer, AgentRole::Designer];
    roles.extend(params.evaluator_panel());
    let registry = Arc::new(build_registry(&config.agents, &roles));

    let mut use_case = RunConsensusUseCase::new(registry, params);
    if let Some(path) = &cli.run_log {
        match JsonlRunTracker::new(path, JsonlRunTracker::generate_run_id()) {
            Some(tracker) => {
                info!(
                    "Recording run {} to {}",
                    tracker.run_id(),
                    tracker.path().display()
                );
                let tracker: Arc<dyn RunTracker> = Arc::new(tracker);
                use_case = use_case.with_tracker(tracker);
            }
            None => warn!("Run log {} unavailable, continuing without it", path.display()),
        }
    }

    let result = if cli.quiet {
        use_case.execute(&url, &content).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&url, &content, &progress).await
    };

    let format = cli.output.or(config.output.format).unwrap_or_default();
    println!("{}", ConsoleFormatter::render(&result, format));

    Ok(())
}

/// Config file values with command-line overrides applied
fn params_from(config: &FileConfig, cli: &Cli) -> ConsensusParams {
    let (mut params, _) = config.consensus.to_params();
    if let Some(secs) = cli.timeout {
        if secs == 0 {
            warn!("--timeout 0 ignored, keeping {}s", params.agent_timeout.as_secs());
        } else {
            params = params.with_agent_timeout(Duration::from_secs(secs));
        }
    }
    if let Some(count) = cli.evaluators {
        params = params.with_quality_evaluators(count);
    }
    if cli.no_refine {
        params = params.without_refinement();
    }
    params
}

fn load_content(cli: &Cli, url: &str) -> Result<ContentModel> {
    if let Some(path) = &cli.content {
        return council_infrastructure::load_content_json(path)
            .with_context(|| format!("Failed to load content model from {}", path.display()));
    }

    if let Some(path) = &cli.html {
        return extract_html(path);
    }

    warn!("No --content or --html given; agents will only see the URL");
    Ok(ContentModel::new(url))
}

#[cfg(feature = "html")]
fn extract_html(path: &std::path::Path) -> Result<ContentModel> {
    let html = council_infrastructure::read_document(path)?;
    council_infrastructure::HtmlContentExtractor::new()
        .extract(&html)
        .with_context(|| format!("Failed to extract content from {}", path.display()))
}

#[cfg(not(feature = "html"))]
fn extract_html(_path: &std::path::Path) -> Result<ContentModel> {
    bail!("--html requires the `html` feature");
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        if issue.is_error() {
            eprintln!("Config error: {}", issue);
        } else {
            eprintln!("Config warning: {}", issue);
        }
    }
}
