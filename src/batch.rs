use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::corpus::{self, InputDocument};
use crate::error::DocumentError;
use crate::parser;
use crate::parser::literal::format_literal;

const CHUNK_SIZE: usize = 64;

/// Per-run counters. Lives only as long as one `run` call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub sentences: usize,
    pub not_found: usize,
    pub empty: usize,
    pub io_errors: usize,
}

impl BatchSummary {
    fn record(&mut self, doc: &InputDocument, result: &Result<usize, DocumentError>) {
        self.attempted += 1;
        match result {
            Ok(n) => {
                self.succeeded += 1;
                self.sentences += n;
                info!(file = %doc.name, sentences = n, "extracted");
            }
            Err(e) => {
                match e {
                    DocumentError::SectionNotFound => self.not_found += 1,
                    DocumentError::EmptyExtraction => self.empty += 1,
                    DocumentError::InputRead { .. } | DocumentError::OutputWrite { .. } => {
                        self.io_errors += 1
                    }
                }
                warn!(file = %doc.name, error = %e, "skipped");
            }
        }
    }

    pub fn print(&self, output_dir: &Path) {
        let output = std::path::absolute(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
        println!("\n{}", "=".repeat(60));
        println!("Processing complete!");
        println!(
            "Successfully processed: {}/{} files",
            self.succeeded, self.attempted
        );
        println!(
            "Sentences: {} | Not found: {} | Empty: {} | I/O errors: {}",
            self.sentences, self.not_found, self.empty, self.io_errors
        );
        println!("Output directory: {}", output.display());
        println!("{}", "=".repeat(60));
    }
}

/// Read → extract → serialize → write for one filing.
pub fn process_document(doc: &InputDocument, output_dir: &Path) -> Result<usize, DocumentError> {
    let html = corpus::read_document(&doc.path)?;
    let sentences = parser::process_html(&html)?;
    let out = corpus::output_path(output_dir, doc);
    corpus::write_output(&out, &format_literal(&sentences))?;
    Ok(sentences.len())
}

/// Process every document once, in parallel chunks. Failures are counted and
/// logged, never propagated.
pub fn run(docs: &[InputDocument], output_dir: &Path) -> BatchSummary {
    let pb = ProgressBar::new(docs.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let mut summary = BatchSummary::default();
    for chunk in docs.chunks(CHUNK_SIZE) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|doc| process_document(doc, output_dir))
            .collect();

        for (doc, result) in chunk.iter().zip(&results) {
            summary.record(doc, result);
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    summary
}
