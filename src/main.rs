// KWSCAN - keyword search with context lines across txt, docx and pdf files
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

mod extract;
mod line_matrix;
mod report;
mod search;
mod types;

use line_matrix::LineMatrix;
use report::KeywordResults;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Documents to scan (.txt, .docx, .pdf)
    files: Vec<PathBuf>,
    /// Keyword to search for; repeat for several keywords
    #[arg(short = 'w', long = "word")]
    words: Vec<String>,
    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit the report as JSON instead of the plain-text dump
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.files.is_empty() {
        bail!("no input files (expected one or more .txt, .docx or .pdf paths)");
    }
    if args.words.is_empty() {
        bail!("no keywords (pass at least one --word)");
    }

    // Build every matrix exactly once, one blocking task per document.
    // Each matrix is immutable once built; a failed document is reported
    // and skipped without aborting the batch. Dropping a handle does not
    // interrupt a blocking build already running; it only discards the
    // result, so no partially built matrix is ever observed.
    let mut builds = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let path = path.clone();
        builds.push(tokio::task::spawn_blocking(move || {
            extract::parse_document(&path)
        }));
    }

    let mut matrices: Vec<LineMatrix> = Vec::new();
    for build in builds {
        match build.await? {
            Ok(matrix) => matrices.push(matrix),
            Err(err) => eprintln!("kwscan: {err}"),
        }
    }

    // Aggregate in issued order: per document as given, then per keyword,
    // regardless of which build finished first.
    let mut results: Vec<KeywordResults> = Vec::new();
    for matrix in &matrices {
        for word in &args.words {
            results.push(KeywordResults {
                keyword: word.clone(),
                windows: search::search(matrix, word),
            });
        }
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    if args.json {
        report::write_json(&mut out, &results)?;
    } else {
        report::write_text(&mut out, &results)?;
    }
    out.flush()?;

    Ok(())
}
