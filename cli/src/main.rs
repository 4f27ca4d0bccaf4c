//! CLI entrypoint for CxO Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use council_application::{RunCouncilInput, RunCouncilUseCase};
use council_domain::Document;
use council_infrastructure::{ConfigLoader, OpenRouterGateway};
use council_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
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
        .init();

    info!("Starting CxO Council");

    // Fatal pre-flight checks: document, config, credentials
    if !cli.document.exists() {
        bail!("File not found: {}", cli.document.display());
    }

    let content = std::fs::read_to_string(&cli.document)
        .with_context(|| format!("Failed to read {}", cli.document.display()))?;
    let document = match Document::try_new(content) {
        Some(doc) => doc,
        None => bail!("Document is empty: {}", cli.document.display()),
    };

    let config = ConfigLoader::load(cli.config.as_deref())?.into_council_config();

    // === Dependency Injection ===
    // Create infrastructure adapter (OpenRouter gateway)
    let gateway = Arc::new(OpenRouterGateway::from_env()?);

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|              CxO Council - Executive Review                |");
        println!("+============================================================+");
        println!();
        println!("Document: {}", cli.document.display());
        println!("Executive Model: {}", config.executive_model);
        println!("CEO Model: {}", config.ceo_model);
        println!();
    }

    // Create use case with injected gateway
    let use_case = RunCouncilUseCase::new(gateway, config);

    // Execute with or without progress reporting. Progress bars and
    // log lines fight over the terminal, so verbose runs get plain
    // line-based progress instead.
    let input = RunCouncilInput::new(document);
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else if cli.verbose > 0 {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Synthesis => ConsoleFormatter::format_synthesis_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    // Save the synthesis artifact in the working directory
    let output_path = synthesis_path(&cli.document);
    let document_name = cli
        .document
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.document.display().to_string());
    let artifact = format!("# Council Synthesis - {}\n\n{}", document_name, result.synthesis);
    std::fs::write(&output_path, artifact)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Synthesis saved to: {}", output_path.display());

    Ok(())
}

/// `plan.md` -> `plan-synthesis.md`, in the working directory
fn synthesis_path(document: &Path) -> std::path::PathBuf {
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    std::path::PathBuf::from(format!("{}-synthesis.md", stem))
}
