use std::fs;
use std::io::{self, BufRead};
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use rakamla::{convert, Lexicon};

#[derive(Parser)]
#[command(name = "rakamtool", about = "Turkish spelled-number conversion tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert spelled numbers in text to digits
    Convert {
        /// Text to convert; reads stdin line by line when omitted
        text: Option<String>,
        /// Path to a custom lexicon TOML file
        #[arg(long)]
        lexicon: Option<String>,
        /// Output as JSON records instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Run conversion accuracy tests from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Path to a custom lexicon TOML file
        #[arg(long)]
        lexicon: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the embedded default lexicon TOML
    Template,
}

// --- Accuracy types ---

#[derive(Debug, Deserialize)]
struct AccuracyCorpus {
    cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
struct AccuracyCase {
    input: String,
    expected: String,
    #[serde(default)]
    skip: bool,
    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
struct AccuracyResult {
    input: String,
    expected: String,
    actual: String,
    status: AccuracyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
struct AccuracySummary {
    total: usize,
    pass: usize,
    fail: usize,
    skip: usize,
    pass_rate: String,
}

#[derive(Debug, Serialize)]
struct AccuracyReport {
    results: Vec<AccuracyResult>,
    summary: AccuracySummary,
}

#[derive(Debug, Serialize)]
struct ConvertRecord {
    input: String,
    output: String,
}

fn install_lexicon(path: Option<&str>) {
    let Some(path) = path else { return };
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read lexicon file {}: {}", path, e);
        process::exit(1);
    });
    Lexicon::init_custom(content).unwrap_or_else(|e| {
        eprintln!("Invalid lexicon TOML: {}", e);
        process::exit(1);
    });
}

fn print_conversion(input: &str, json: bool) {
    let output = convert(input);
    if json {
        let record = ConvertRecord {
            input: input.to_string(),
            output,
        };
        let line = serde_json::to_string(&record).expect("JSON serialization failed");
        println!("{}", line);
    } else {
        println!("{}", output);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            lexicon,
            json,
        } => {
            install_lexicon(lexicon.as_deref());
            match text {
                Some(text) => print_conversion(&text, json),
                None => {
                    for line in io::stdin().lock().lines() {
                        let line = line.unwrap_or_else(|e| {
                            eprintln!("Failed to read line: {}", e);
                            process::exit(1);
                        });
                        print_conversion(&line, json);
                    }
                }
            }
        }

        Command::Accuracy {
            corpus_file,
            lexicon,
            verbose,
            json,
        } => {
            install_lexicon(lexicon.as_deref());

            // Load and parse corpus
            let corpus_content = fs::read_to_string(&corpus_file).unwrap_or_else(|e| {
                eprintln!("Failed to read corpus file {}: {}", corpus_file, e);
                process::exit(1);
            });
            let corpus: AccuracyCorpus = toml::from_str(&corpus_content).unwrap_or_else(|e| {
                eprintln!("Failed to parse corpus TOML: {}", e);
                process::exit(1);
            });

            if corpus.cases.is_empty() {
                eprintln!("Corpus contains no cases");
                process::exit(1);
            }

            // Run each case
            let mut results: Vec<AccuracyResult> = Vec::new();
            for case in &corpus.cases {
                if case.skip {
                    results.push(AccuracyResult {
                        input: case.input.clone(),
                        expected: case.expected.clone(),
                        actual: String::new(),
                        status: AccuracyStatus::Skip,
                        note: case.note.clone(),
                    });
                    continue;
                }

                let actual = convert(&case.input);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };

                results.push(AccuracyResult {
                    input: case.input.clone(),
                    expected: case.expected.clone(),
                    actual,
                    status,
                    note: case.note.clone(),
                });
            }

            // Compute summary
            let total = results.len();
            let pass = results
                .iter()
                .filter(|r| matches!(r.status, AccuracyStatus::Pass))
                .count();
            let fail = results
                .iter()
                .filter(|r| matches!(r.status, AccuracyStatus::Fail))
                .count();
            let skip = results
                .iter()
                .filter(|r| matches!(r.status, AccuracyStatus::Skip))
                .count();
            let tested = total - skip;
            let rate = if tested > 0 {
                pass as f64 / tested as f64 * 100.0
            } else {
                0.0
            };
            let summary = AccuracySummary {
                total,
                pass,
                fail,
                skip,
                pass_rate: format!("{:.1}%", rate),
            };

            if json {
                let report = AccuracyReport { results, summary };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                for r in &results {
                    match r.status {
                        AccuracyStatus::Pass => {
                            if verbose {
                                println!("  \u{2713} {} \u{2192} {}", r.input, r.expected);
                            }
                        }
                        AccuracyStatus::Fail => {
                            println!(
                                "  \u{2717} {} \u{2192} {} (got: {})",
                                r.input, r.expected, r.actual
                            );
                        }
                        AccuracyStatus::Skip => {
                            let reason = r.note.as_deref().unwrap_or("known failure");
                            println!("  - {} [skip: {}]", r.input, reason);
                        }
                    }
                }

                println!();
                println!("=== Summary ===");
                println!("  Total:     {}", summary.total);
                println!("  Pass:      {:>3}", summary.pass);
                println!("  Fail:      {:>3}", summary.fail);
                println!("  Skip:      {:>3}", summary.skip);
                println!(
                    "  Pass rate: {} ({}/{})",
                    summary.pass_rate, summary.pass, tested
                );
            }

            if fail > 0 {
                process::exit(1);
            }
        }

        Command::Template => print!("{}", rakamla::lexicon::default_toml()),
    }
}
