mod batch;
mod corpus;
mod error;
mod parser;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use parser::literal::parse_literal;
use settings::Settings;

#[derive(Parser)]
#[command(name = "item1a", about = "Extract Item 1A risk factors from 10-K HTML filings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract risk-factor sentences from every filing in the input directory
    Run {
        /// Directory of .html/.htm filings
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Directory for <name>.txt results
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max filings to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Worker threads (0: one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// Show how the Item 1A heading candidates of one filing were scored
    Candidates {
        file: PathBuf,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Summarize the results already written to the output directory
    Stats {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(settings = ?settings, "settings loaded");

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            limit,
            jobs,
        } => {
            let input_dir = input.unwrap_or(settings.input_dir);
            let output_dir = output.unwrap_or(settings.output_dir);
            let jobs = jobs.unwrap_or(settings.jobs);

            if !input_dir.is_dir() {
                println!("Error: Input directory {:?} not found!", input_dir);
                println!("Please create the directory and add your HTML files.");
                return Ok(());
            }
            corpus::ensure_dir(&output_dir)?;

            let mut docs = corpus::list_documents(&input_dir)?;
            if docs.is_empty() {
                println!("No HTML files found in {:?}", input_dir);
                return Ok(());
            }
            if let Some(n) = limit {
                docs.truncate(n);
            }
            if jobs > 0 {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .context("Failed to configure worker threads")?;
            }

            println!("Found {} HTML files\n", docs.len());
            let summary = batch::run(&docs, &output_dir);
            summary.print(&output_dir);
            Ok(())
        }
        Commands::Candidates { file, limit } => {
            let html = corpus::read_document(&file)?;
            let report = parser::inspect(&html);
            if report.candidates.is_empty() {
                println!("No Item 1A heading candidates in {:?}.", file);
                return Ok(());
            }

            println!(
                "{:>3} | {:>6} | {:<6} | {:>5} | {}",
                "#", "Node", "Tag", "Score", "Text"
            );
            println!("{}", "-".repeat(60));
            for (i, c) in report.candidates.iter().take(limit).enumerate() {
                println!(
                    "{:>3} | {:>6} | {:<6} | {:>5} | {}",
                    i + 1,
                    c.node,
                    c.tag,
                    c.score,
                    truncate(&c.text, 40)
                );
            }

            match report.bounds {
                Some(bounds) => {
                    println!("\nStart: node {}", bounds.start);
                    match (bounds.end, &report.end_text) {
                        (Some(end), Some(text)) => println!("End:   node {} ({})", end, truncate(text, 40)),
                        _ => println!("End:   document end"),
                    }
                    println!(
                        "Section: {} chars, {} sentences",
                        report.section_chars, report.sentences
                    );
                }
                None => println!("\nNo candidate scored above zero."),
            }
            Ok(())
        }
        Commands::Stats { output } => {
            let output_dir = output.unwrap_or(settings.output_dir);
            let paths = corpus::list_outputs(&output_dir)?;
            if paths.is_empty() {
                println!("No results in {:?}. Run 'run' first.", output_dir);
                return Ok(());
            }

            let mut files = 0usize;
            let mut sentences = 0usize;
            let mut malformed = 0usize;
            for path in &paths {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {:?}", path))?;
                match parse_literal(&text) {
                    Ok(list) => {
                        files += 1;
                        sentences += list.len();
                    }
                    Err(e) => {
                        malformed += 1;
                        warn!(file = ?path, error = %e, "malformed result");
                    }
                }
            }

            println!("Files:     {}", files);
            println!("Sentences: {}", sentences);
            if files > 0 {
                println!("Mean:      {:.1}", sentences as f64 / files as f64);
            }
            println!("Malformed: {}", malformed);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
