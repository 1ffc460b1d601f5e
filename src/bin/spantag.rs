//! Spantag CLI — scan sentences against a gazetteer alias table.
//!
//! Usage:
//!   spantag scan --aliases "Ill.=Illinois, VA=Virginia" "He moved to Ill."
//!   spantag scan --aliases-file states.txt < sentences.txt
//!   spantag check --aliases-file states.txt

use clap::{Parser, Subcommand};
use spantag::{parse_location_data, scrub, Gazetteer, SpanTagger, TaggedSentence, Tagger};
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spantag",
    version,
    about = "Gazetteer-based span tagger for free text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan sentences and print matching spans
    Scan {
        /// Alias table text ("key=value, key=value")
        #[arg(long, conflicts_with = "aliases_file")]
        aliases: Option<String>,
        /// Path to a file containing the alias table
        #[arg(long)]
        aliases_file: Option<PathBuf>,
        /// Category label for the gazetteer
        #[arg(long, default_value = "location")]
        category: String,
        /// Print one JSON object per sentence instead of plain text
        #[arg(long)]
        json: bool,
        /// Sentences to scan; read from stdin (one per line) when omitted
        sentences: Vec<String>,
    },
    /// Validate an alias table without scanning anything
    Check {
        /// Alias table text ("key=value, key=value")
        #[arg(long, conflicts_with = "aliases_file")]
        aliases: Option<String>,
        /// Path to a file containing the alias table
        #[arg(long)]
        aliases_file: Option<PathBuf>,
    },
}

/// Resolve the alias table from either the inline flag or a file.
fn load_alias_table(
    aliases: Option<String>,
    aliases_file: Option<PathBuf>,
) -> Result<String, String> {
    match (aliases, aliases_file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e)),
        _ => Err("exactly one of --aliases or --aliases-file is required".to_string()),
    }
}

fn print_sentence(tagger: &SpanTagger, sentence: &str, json: bool) -> i32 {
    let spans = tagger.scan(sentence);
    if json {
        let tagged = TaggedSentence {
            sentence: scrub(sentence),
            category: tagger.category().to_string(),
            spans,
        };
        match serde_json::to_string(&tagged) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else if spans.is_empty() {
        println!("{}\n  (no matches)", sentence);
    } else {
        println!("{}", sentence);
        for span in &spans {
            println!("  {:>3}..{:<3} {}", span.start, span.end, span.label);
        }
    }
    0
}

fn cmd_scan(raw: &str, category: &str, json: bool, sentences: &[String]) -> i32 {
    let gazetteer = match Gazetteer::from_raw(category, raw) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let tagger = SpanTagger::new(gazetteer);

    if sentences.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 1;
                }
            };
            let code = print_sentence(&tagger, &line, json);
            if code != 0 {
                return code;
            }
        }
        0
    } else {
        sentences
            .iter()
            .map(|s| print_sentence(&tagger, s, json))
            .max()
            .unwrap_or(0)
    }
}

fn cmd_check(raw: &str) -> i32 {
    match parse_location_data(raw) {
        Ok(entries) => {
            println!("OK: {} alias entries", entries.len());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Scan {
            aliases,
            aliases_file,
            category,
            json,
            sentences,
        } => match load_alias_table(aliases, aliases_file) {
            Ok(raw) => cmd_scan(&raw, &category, json, &sentences),
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
        Commands::Check {
            aliases,
            aliases_file,
        } => match load_alias_table(aliases, aliases_file) {
            Ok(raw) => cmd_check(&raw),
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
    };
    std::process::exit(code);
}
