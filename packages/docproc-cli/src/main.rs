// Command-line entry point for the document pipeline

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use document_processing::{testing::sample_documents, Evaluator, MemoryBank, Orchestrator};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "docproc", version, about = "Deterministic document processing pipeline")]
struct Cli {
    #[arg(long, short, global = true, help = "Log pipeline stages to stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process the built-in sample documents and print an evaluation report
    Demo,
    /// Process a single document
    Process {
        /// Path to a text file, or `-` for stdin
        path: PathBuf,
        #[arg(long, help = "Document id (generated when omitted)")]
        id: Option<String>,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env().context("Failed to load configuration")?;
    let orchestrator = Orchestrator::with_config(MemoryBank::new(), config.pipeline);

    match cli.command {
        Commands::Demo => run_demo(&orchestrator),
        Commands::Process { path, id, json } => {
            let text = read_document(&path)?;
            let result = orchestrator
                .process_document(&text, id.as_deref())
                .context("Failed to process document")?;

            if json {
                println!("{}", result.to_payload_json()?);
            } else {
                println!("📄 {}", result.document_id.bold());
                render::print_result(&result);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,document_processing=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_demo(orchestrator: &Orchestrator) -> Result<()> {
    let mut evaluator = Evaluator::new();

    for (idx, (doc_id, content)) in sample_documents().into_iter().enumerate() {
        println!();
        println!("📄 Processing Document {}: {}", idx + 1, doc_id.bold());
        println!("{}", "-".repeat(80));

        let result = orchestrator
            .process_document(content, Some(doc_id))
            .with_context(|| format!("Failed to process {}", doc_id))?;
        evaluator.evaluate(&result);
        render::print_result(&result);

        println!();
        println!("{}", "=".repeat(80));
    }

    render::print_report(&evaluator.report());
    tracing::info!(
        sessions = orchestrator.sessions().len(),
        patterns = orchestrator.pattern_sink().pattern_count(),
        "Demo complete"
    );
    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))
}
