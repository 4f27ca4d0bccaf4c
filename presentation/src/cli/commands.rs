//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for council results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all stages
    Full,
    /// Only the final synthesis
    Synthesis,
    /// JSON output
    Json,
}

/// CLI arguments for cxo-council
#[derive(Parser, Debug)]
#[command(name = "cxo-council")]
#[command(author, version, about = "Run a document through a 4-stage CxO executive review")]
#[command(long_about = r#"
CxO Council runs a document through a four-stage executive deliberation:

1. Executive Domain Reviews: each role reviews the document independently
2. Cross-Domain Questions: roles surface tensions and address questions to peers
3. Responses to Questions: only roles that were addressed answer (skipped otherwise)
4. CEO Synthesis: a decision-maker model produces the final decision

A synthesis file named <document-stem>-synthesis.md is written next to
the working directory on success.

Configuration is loaded from (in priority order):
1. --config <path>               Explicit config file
2. ./council-config.jsonc        Project-level config
3. ./cxo-council-config.jsonc    Alternate project-level config

The OpenRouter API key is read from OPENROUTER_API_KEY, falling back to
COUNCIL_OPENROUTER_API_KEY.

Example:
  cxo-council plan.md
  cxo-council -c staging-config.jsonc -o full plan.md
"#)]
pub struct Cli {
    /// Path to the document to review (markdown)
    pub document: PathBuf,

    /// Path to council config file (default: ./council-config.jsonc)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "synthesis")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the header and progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
