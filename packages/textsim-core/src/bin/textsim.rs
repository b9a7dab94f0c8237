//! textsim CLI
//!
//! Command-line access to the similarity and text helpers.
//!
//! # Usage
//!
//! ```bash
//! textsim distance teh the
//! textsim similarity kitten sitting
//! textsim join pommes poires kiwis --last-separator " et "
//! textsim format "hello WORLD"
//! textsim censor "hello world" -m world -m hello
//! textsim duration 2024-03-01T12:00:00Z 2024-03-01T12:01:30Z
//! textsim suggest instal install uninstall update --json
//! ```

use chrono::DateTime;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use textsim_core::config::TextConfig;
use textsim_core::errors::TextError;
use textsim_core::features::similarity::{edit_distance, similarity, DistanceMatrix};
use textsim_core::features::text_format::{format_words, Locale};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textsim")]
#[command(about = "Text similarity scoring and normalization helpers", long_about = None)]
struct Cli {
    /// YAML configuration file (v1 schema)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Damerau-Levenshtein edit distance
    Distance {
        a: String,
        b: String,

        /// Print the full distance matrix
        #[arg(long)]
        matrix: bool,
    },

    /// Similarity score in [0, 1]
    Similarity { a: String, b: String },

    /// Join items with a regular and a final separator
    Join {
        #[arg(required = true)]
        items: Vec<String>,

        #[arg(short, long)]
        separator: Option<String>,

        #[arg(short, long)]
        last_separator: Option<String>,
    },

    /// Lowercase, then capitalize every word
    Format { text: String },

    /// Mask substrings, applied in the given order
    Censor {
        text: String,

        /// Substring to mask (repeatable)
        #[arg(short, long = "mask", required = true)]
        masks: Vec<String>,

        /// Replacement char
        #[arg(short, long)]
        replacement: Option<char>,
    },

    /// Elapsed time between two RFC 3339 timestamps
    Duration {
        start: String,
        end: String,

        /// french or english
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Rank candidates against a query
    Suggest {
        query: String,

        #[arg(required = true)]
        candidates: Vec<String>,

        /// Minimum score (0.0-1.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of suggestions
        #[arg(short = 'n', long)]
        max: Option<usize>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => TextConfig::from_yaml(path).map_err(TextError::from)?,
        None => TextConfig::default(),
    };

    match cli.command {
        Commands::Distance { a, b, matrix } => {
            if matrix {
                print_matrix(&a, &b);
            }
            println!("{}", edit_distance(&a, &b));
        }
        Commands::Similarity { a, b } => {
            println!("{:.4}", similarity(&a, &b));
        }
        Commands::Join {
            items,
            separator,
            last_separator,
        } => {
            let mut config = config;
            if let Some(separator) = separator {
                config.join.separator = separator;
            }
            if let Some(last_separator) = last_separator {
                config.join.last_separator = last_separator;
            }
            println!("{}", config.join(&items));
        }
        Commands::Format { text } => {
            println!("{}", format_words(&text));
        }
        Commands::Censor {
            text,
            masks,
            replacement,
        } => {
            let mut config = config;
            if let Some(replacement) = replacement {
                config.censor.replacement = replacement;
            }
            println!("{}", config.censor(&text, &masks));
        }
        Commands::Duration { start, end, locale } => {
            let mut config = config;
            if let Some(locale) = locale {
                config.duration.locale = Locale::from_str(&locale).map_err(TextError::invalid_input)?;
            }
            let start = parse_timestamp(&start)?;
            let end = parse_timestamp(&end)?;
            println!("{}", config.duration_text(&start, &end)?);
        }
        Commands::Suggest {
            query,
            candidates,
            threshold,
            max,
            json,
        } => {
            let mut suggester = config.suggester();
            if let Some(threshold) = threshold {
                suggester = suggester.threshold(threshold);
            }
            if let Some(max) = max {
                suggester = suggester.max_suggestions(max);
            }

            let suggestions = suggester.suggest(&query, &candidates);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else if suggestions.is_empty() {
                println!("No suggestion for '{}'", query);
            } else {
                for suggestion in &suggestions {
                    println!(
                        "{:.4}  {}  (distance {})",
                        suggestion.score, suggestion.candidate, suggestion.distance
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_timestamp(raw: &str) -> Result<DateTime<chrono::FixedOffset>, TextError> {
    DateTime::parse_from_rfc3339(raw)
        .map_err(|e| TextError::invalid_input(format!("'{}' is not an RFC 3339 timestamp: {}", raw, e)))
}

fn print_matrix(a: &str, b: &str) {
    let matrix = DistanceMatrix::for_strs(a, b);
    let (rows, cols) = matrix.dimensions();
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let header: Vec<String> = b_chars.iter().map(|c| format!("{:>3}", c)).collect();
    println!("      {}", header.join(""));

    for i in 0..rows {
        let label = if i == 0 { ' ' } else { a_chars[i - 1] };
        let cells: Vec<String> = (0..cols).map(|j| format!("{:>3}", matrix.cell(i, j))).collect();
        println!("{:>3}{}", label, cells.join(""));
    }
}
