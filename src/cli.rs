//! Command-line interface for the detector.

use clap::{Parser, Subcommand};
use log::debug;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use crate::api::{Analysis, Detector};
use crate::batch::BatchResult;
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::emotion::{Emotion, Severity};
use crate::samples::{self, TEXT_SAMPLES};

/// Shortest single message worth analysing, in characters.
pub const MIN_SINGLE_MESSAGE_CHARS: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "psywell", version, about = "Mental wellness detector for short messages")]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single message
    Analyze {
        /// Message text
        text: String,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
        /// Seed for quote selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Analyze every message in a CSV, Excel or TXT file
    Batch {
        /// Input file (.csv, .xlsx, .xls or .txt)
        file: PathBuf,
        /// Write the detailed results to this CSV file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the batch result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze the built-in sample messages
    Demo,
    /// Write sample_data.csv, sample_data.xlsx and sample_data.txt
    Samples {
        /// Target directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Main entry point for the CLI, after logging is set up.
pub fn run(cli: Cli, config: Config) -> Result<(), Box<dyn Error>> {
    debug!("running {:?}", cli.command);

    match cli.command {
        Command::Analyze { text, json, seed } => {
            let mut config = config;
            if seed.is_some() {
                config.recommendations.quote_seed = seed;
            }
            analyze(&Detector::with_config(config), &text, json)
        }
        Command::Batch { file, output, json } => {
            let detector = Detector::with_config(config);
            let batch = detector.analyze_file(&file)?;
            if json {
                println!("{}", batch.to_json()?);
            } else {
                print_batch(&batch);
            }
            if let Some(path) = output {
                batch.write_csv(File::create(&path)?)?;
                println!("Results written to {}", path.display());
            }
            Ok(())
        }
        Command::Demo => {
            let detector = Detector::with_config(config);
            for text in TEXT_SAMPLES {
                print_banner(text);
                print!("{}", detector.analyze(text));
            }
            let batch = detector.analyze_batch(TEXT_SAMPLES);
            print_batch(&batch);
            Ok(())
        }
        Command::Samples { dir } => {
            samples::write_sample_files(&dir)?;
            println!("Sample files written to {}", dir.display());
            Ok(())
        }
    }
}

fn analyze(detector: &Detector, text: &str, json: bool) -> Result<(), Box<dyn Error>> {
    if text.trim().chars().count() < MIN_SINGLE_MESSAGE_CHARS {
        println!(
            "Error: please enter a longer message (at least {} characters)",
            MIN_SINGLE_MESSAGE_CHARS
        );
        return Ok(());
    }

    let analysis: Analysis = detector.analyze(text);
    if json {
        println!("{}", analysis.to_json()?);
    } else {
        print_banner(text);
        print!("{}", analysis);
    }
    Ok(())
}

fn print_banner(text: &str) {
    println!("\n===================================================================");
    println!("  {}", crate::batch::preview(text, 80));
    println!("===================================================================");
}

fn print_batch(batch: &BatchResult) {
    println!("\n===================================================================");
    println!("  Batch Analysis Results");
    println!("===================================================================\n");

    if batch.is_empty() {
        println!("No valid messages found to analyze.");
        return;
    }

    for emotion in Emotion::ALL {
        println!(
            "  {} {:<12} {:>3}",
            emotion.icon(),
            emotion.as_str(),
            batch.counts.get(emotion)
        );
    }

    println!("\n  Severity levels:");
    for severity in Severity::ALL {
        if let Some(count) = batch.severity_counts.get(&severity) {
            println!("    {:<10} {:>3}", severity.as_str(), count);
        }
    }

    println!("\n{}", "=".repeat(90));
    println!(
        "{:<50} | {:<10} | {:<8} | {:>6} | {:>6}",
        "Message", "Emotion", "Severity", "Pol.", "Subj."
    );
    println!("{}", "=".repeat(90));
    for record in &batch.records {
        println!(
            "{:<50} | {:<10} | {:<8} | {:>6.2} | {:>6.2}",
            crate::batch::preview(&record.preview, 47),
            record.emotion.as_str(),
            record.severity.as_str(),
            record.polarity,
            record.subjectivity
        );
    }
    println!("{}", "=".repeat(90));

    if batch.skipped > 0 || batch.truncated > 0 {
        println!(
            "\n  {} message(s) too short, {} over the batch limit",
            batch.skipped, batch.truncated
        );
    }
}
