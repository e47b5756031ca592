//! senti: sentimeter CLI
//!
//! Scores text from an argument or stdin and prints the aggregate score,
//! a bar chart of the score table and the per-token classification.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sentimeter::config::{Config, OutputFormat};
use sentimeter::types::to_json;
use sentimeter::{
    AnalysisReport, ScoreTable, Sentimeter, SentimentLabel, SentimentScore, TokenClassification,
};

const ABOUT: &str = "\
sentimeter scores free-form text with two lexicon-based engines.

The aggregate engine averages the polarity (-1.0 negative to 1.0 positive)
and subjectivity (0.0 factual to 1.0 opinionated) of the words it knows,
adjusting for modifiers such as \"very\" and negations such as \"not\".

The token engine scores each whitespace-delimited token on its own and
sorts it into positives (score above 0.1), negatives (score at or below
-0.1) or neutral (everything in between).";

/// Sentimeter command-line client
#[derive(Parser)]
#[command(name = "senti")]
#[command(version = sentimeter::PKG_VERSION)]
#[command(about = "Lexicon-based sentiment scoring")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, env = "SENTIMETER_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the configuration file).
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate score and token classification
    Analyze {
        /// Text to analyze (or omit to read from stdin)
        text: Option<String>,
    },

    /// Aggregate polarity and subjectivity only
    Score {
        /// Text to score (or omit to read from stdin)
        text: Option<String>,
    },

    /// Per-token classification only
    Tokens {
        /// Text to classify (or omit to read from stdin)
        text: Option<String>,
    },

    /// Describe what the scores mean
    About,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let format = args.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let bar_width = config.output.bar_width;

    match args.command {
        Command::About => {
            println!("{ABOUT}");
            return Ok(());
        }
        Command::Version => {
            println!("senti {}", sentimeter::version_string());
            return Ok(());
        }
        _ => {}
    }

    let analyzer = Sentimeter::builder().config(&config).build()?;

    match args.command {
        Command::Analyze { text } => {
            let text = resolve_text(text, "analyze")?;
            let report = analyzer.analyze(&text)?;
            match format {
                OutputFormat::Json => println!("{}", to_json(&report)?),
                OutputFormat::Text => print_report(&report, bar_width),
            }
        }

        Command::Score { text } => {
            let text = resolve_text(text, "score")?;
            let score = analyzer.score(&text)?;
            match format {
                OutputFormat::Json => println!("{}", to_json(&score)?),
                OutputFormat::Text => {
                    print_score(&score);
                    println!();
                    print_table(&score.to_table(), bar_width);
                }
            }
        }

        Command::Tokens { text } => {
            let text = resolve_text(text, "tokens")?;
            let tokens = analyzer.classify_tokens(&text)?;
            match format {
                OutputFormat::Json => println!("{}", to_json(&tokens)?),
                OutputFormat::Text => print_tokens(&tokens),
            }
        }

        Command::About | Command::Version => unreachable!("handled above"),
    }

    Ok(())
}

/// Resolve text input from an optional CLI argument and/or stdin.
///
/// Combination rules:
/// - arg only → arg
/// - stdin only → stdin
/// - both → `"{arg}\n\n{stdin}"`
/// - neither → error
fn resolve_text(arg: Option<String>, command: &str) -> Result<String, Box<dyn std::error::Error>> {
    let stdin_is_pipe = !io::stdin().is_terminal();
    let stdin_text = if stdin_is_pipe {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    } else {
        None
    };

    match (arg, stdin_text) {
        (Some(a), Some(s)) => Ok(format!("{a}\n\n{s}")),
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => {
            Err(format!("{command}: no input provided (pass text as argument or via stdin)").into())
        }
    }
}

fn print_report(report: &AnalysisReport, bar_width: usize) {
    println!("== Results");
    print_score(&report.score);
    println!();
    print_table(&report.table, bar_width);
    println!();
    println!("== Token Sentiment");
    print_tokens(&report.tokens);
}

fn print_score(score: &SentimentScore) {
    let label = SentimentLabel::from_polarity(score.polarity);
    println!("polarity:     {:.4}", score.polarity);
    println!("subjectivity: {:.4}", score.subjectivity);
    println!("sentiment:    {label} {}", label.face());
}

/// Horizontal bar chart of the score table. Negative values extend left of
/// the axis.
fn print_table(table: &ScoreTable, width: usize) {
    let half = (width / 2).max(1);
    let name_width = table.rows().iter().map(|r| r.metric.len()).max().unwrap_or(0);
    for row in table.rows() {
        let len = ((row.value.abs().min(1.0)) * half as f64).round() as usize;
        let (left, right) = if row.value < 0.0 {
            (format!("{:>half$}", "#".repeat(len)), String::new())
        } else {
            (" ".repeat(half), "#".repeat(len))
        };
        println!(
            "{:<name_width$} {left}|{right:<half$} {:>7.4}",
            row.metric, row.value
        );
    }
}

fn print_tokens(tokens: &TokenClassification) {
    let positives: Vec<String> = tokens
        .positive_pairs()
        .iter()
        .map(|(t, s)| format!("{t} ({s:.4})"))
        .collect();
    let negatives: Vec<String> = tokens
        .negative_pairs()
        .iter()
        .map(|(t, s)| format!("{t} ({s:.4})"))
        .collect();
    println!("positives: {}", positives.join(", "));
    println!("negatives: {}", negatives.join(", "));
    println!("neutral:   {}", tokens.neutral.join(", "));
}
