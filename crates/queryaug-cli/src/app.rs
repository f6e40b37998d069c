//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use queryaug_core::{Backend, VariantType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "queryaug")]
#[command(
    author,
    version,
    about = "Expand seed search queries into linguistic variants"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (YAML)
    #[arg(long, global = true, env = "QUERYAUG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate seed queries for a topic with the LLM
    Generate(GenerateArgs),

    /// Produce variants for every query in a file
    Augment(AugmentArgs),

    /// Check a variant file for inconsistencies
    Validate(ValidateArgs),

    /// Concatenate query or variant files
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Topic the queries should search for
    #[arg(long)]
    pub topic: String,

    /// Query language (repeatable)
    #[arg(short, long = "lang", default_value = "en")]
    pub langs: Vec<String>,

    /// Number of queries to generate
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct AugmentArgs {
    /// Input query file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Augmentation backend: generative or lexical
    #[arg(short, long, default_value = "lexical", value_parser = parse_backend)]
    pub backend: Backend,

    /// Variant kind (repeatable)
    #[arg(short, long = "kind", required = true, value_parser = parse_kind)]
    pub kinds: Vec<VariantType>,

    /// Translation target language (repeatable)
    #[arg(short, long = "lang")]
    pub langs: Vec<String>,

    /// Variants requested per query
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    /// Queries processed concurrently
    #[arg(long, default_value = "1")]
    pub concurrency: usize,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Variant file to check
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Input files, in merge order (at least two)
    #[arg(short, long = "input", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_kind(token: &str) -> Result<VariantType, String> {
    token.parse().map_err(|_| {
        format!(
            "unknown variant kind '{}' (expected one of: {})",
            token,
            VariantType::tokens().join(", ")
        )
    })
}

fn parse_backend(name: &str) -> Result<Backend, String> {
    name.parse::<Backend>().map_err(|e| e.to_string())
}
