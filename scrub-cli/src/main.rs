//! `scrub`: run documents through the cleaning pipeline.
//!
//! ```bash
//! # Clean quoted documents with the classic pipeline
//! scrub -t "RT @bob: We're LIVE!" "<p>Second&nbsp;doc</p>"
//!
//! # Web-text preset, one document per stdin line
//! cat posts.txt | scrub --stdin --preset unicode
//!
//! # Pipeline from a JSON config, custom stopwords, debug logging on stderr
//! scrub -c pipeline.json -s stopwords.txt -vv -t "some text"
//! ```
//!
//! Output is a JSON array of cleaned documents on stdout, in input order.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use scrub_core::{ConfigError, PipelineConfig, StopwordSet};
use scrub_types::Preset;
use thiserror::Error;
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "scrub", version, about = "Normalize text for bag-of-words processing")]
struct Cli {
    /// Documents to clean; quote each one.
    #[arg(short, long, num_args = 1.., required_unless_present = "stdin")]
    text: Vec<String>,
    /// Read one document per line from stdin (in addition to --text).
    #[arg(long)]
    stdin: bool,
    /// Step layout: `classic` or `unicode`.
    #[arg(short, long)]
    preset: Option<Preset>,
    /// JSON pipeline config. --preset and --stopwords override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Newline-separated stopword list replacing the built-in one.
    #[arg(short, long, conflicts_with = "no_stopwords")]
    stopwords: Option<PathBuf>,
    /// Keep every token.
    #[arg(long)]
    no_stopwords: bool,
    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scrub: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_path(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(preset) = cli.preset {
        config.preset = Some(preset);
        config.features = None;
        config.steps = None;
    }
    if let Some(path) = cli.stopwords {
        config.stopwords_path = Some(path);
    }

    let pipeline = config.build()?;
    tracing::info!(steps = ?pipeline.steps(), "pipeline ready");

    let mut docs = cli.text;
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            docs.push(line.map_err(CliError::Stdin)?);
        }
    }

    let empty = StopwordSet::empty();
    let override_set = cli.no_stopwords.then_some(&empty);
    let cleaned: Vec<String> = docs
        .iter()
        .map(|doc| pipeline.run_with(doc, override_set))
        .collect();
    tracing::info!(documents = cleaned.len(), "cleaned");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &cleaned)?;
    // A closed pipe on the trailing newline is not worth an error.
    let _ = writeln!(out);
    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already set; skipping re-initialization");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_multiple_texts() {
        let cli = Cli::try_parse_from(["scrub", "-t", "one", "two", "-p", "unicode"]).unwrap();
        assert_eq!(cli.text, ["one", "two"]);
        assert_eq!(cli.preset, Some(Preset::Unicode));
    }

    #[test]
    fn text_required_without_stdin() {
        assert!(Cli::try_parse_from(["scrub"]).is_err());
        assert!(Cli::try_parse_from(["scrub", "--stdin"]).is_ok());
    }

    #[test]
    fn rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["scrub", "-t", "x", "-p", "fancy"]).is_err());
    }

    #[test]
    fn stopword_flags_conflict() {
        let args = ["scrub", "-t", "x", "-s", "w.txt", "--no-stopwords"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::WARN);
        assert_eq!(log_level(2), LevelFilter::DEBUG);
        assert_eq!(log_level(9), LevelFilter::TRACE);
    }
}
