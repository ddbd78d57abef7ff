//! Command-line front end for rapid_summarize
//!
//! Reads a document from a file, stdin, or the bundled sample and prints the
//! summary, the highlighted document, the token weights, or everything as JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rapid_summarize::sample::WHAT_IS_NLP;
use rapid_summarize::{ExtractiveSummarizer, HighlightStyle, SummarizerConfig};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Selected sentences only
    Text,
    /// Full document with selected sentences highlighted
    Markup,
    /// Token weights, heaviest first
    Weights,
    /// Summary, markup and weights as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    Streamlit,
    Markdown,
    Html,
}

impl From<Style> for HighlightStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Streamlit => HighlightStyle::streamlit(),
            Style::Markdown => HighlightStyle::markdown(),
            Style::Html => HighlightStyle::html(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "rapid-summarize", version, about = "Frequency-weighted extractive summarization")]
struct Cli {
    /// Number of sentences in the summary (overrides the config file)
    #[arg(short = 'n', long = "sentences", value_parser = clap::value_parser!(u64).range(1..))]
    sentences: Option<u64>,

    /// Read the document from a file instead of stdin
    #[arg(short, long, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Summarize the bundled sample document
    #[arg(long)]
    sample: bool,

    /// Summarizer configuration as JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Highlight markers for the markup output (overrides the config file)
    #[arg(long, value_enum)]
    style: Option<Style>,

    /// What to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SummarizerConfig::default(),
    };

    if let Some(n) = cli.sentences {
        config.num_sentences = usize::try_from(n).context("sentence count out of range")?;
    }
    if let Some(style) = cli.style {
        config.highlight = style.into();
    }

    Ok(config)
}

fn read_document(cli: &Cli) -> Result<String> {
    if cli.sample {
        return Ok(WHAT_IS_NLP.trim().to_string());
    }

    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let summarizer = ExtractiveSummarizer::with_config(config).context("invalid configuration")?;
    let document = read_document(&cli)?;

    tracing::info!(bytes = document.len(), "summarizing document");

    match cli.format {
        OutputFormat::Text => {
            let summary = summarizer.run(&document)?;
            println!("{}", summary.text);
        }
        OutputFormat::Markup => {
            let summary = summarizer.run(&document)?;
            print!("{}", summary.markup);
        }
        OutputFormat::Weights => {
            let weights = summarizer.token_weights(&document)?;
            for (token, weight) in weights.ranked() {
                println!("{weight:.4}\t{token}");
            }
        }
        OutputFormat::Json => {
            let summary = summarizer.run(&document)?;
            let weights = summarizer.token_weights(&document)?;
            let ranked: Vec<_> = weights
                .ranked()
                .into_iter()
                .map(|(token, weight)| json!({ "token": token, "weight": weight }))
                .collect();
            let output = json!({ "summary": summary, "weights": ranked });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
