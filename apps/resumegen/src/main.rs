mod config;
mod errors;
mod generation;
mod layout;
mod models;
mod parser;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::{generate_for_locations, GenerationOptions};
use crate::parser::parse_resume_file;

#[derive(Parser, Debug)]
#[command(name = "resumegen")]
#[command(version, about = "Turns a plain-text resume into styled PDF resumes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the resume to PDF
    Generate {
        /// Source text file (overrides RESUME_SOURCE)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output PDF path (overrides RESUME_OUTPUT)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target location; repeat to write one PDF per location
        #[arg(short, long = "location")]
        locations: Vec<String>,

        /// Use the internal title and achievements for the internal employer
        #[arg(long)]
        internal: bool,

        /// Jobs placed on the first page (overrides RESUME_JOBS_ON_FIRST_PAGE)
        #[arg(long)]
        jobs_on_first_page: Option<usize>,
    },

    /// Parse the resume and print the record as JSON
    Parse {
        /// Source text file (overrides RESUME_SOURCE)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; CLI flags override it below
    let config = Config::from_env()?;

    // Initialize structured logging (stderr, so `parse` output stays clean JSON)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resumegen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate {
            source,
            output,
            locations,
            internal,
            jobs_on_first_page,
        } => {
            let mut options = GenerationOptions::from_config(&config);
            if let Some(source) = source {
                options.source = source;
            }
            if let Some(output) = output {
                options.output = output;
            }
            if let Some(jobs) = jobs_on_first_page {
                options.jobs_on_first_page = jobs;
            }
            options.internal = internal;

            let (_, reports) = generate_for_locations(&options, &locations)
                .with_context(|| format!("Failed to generate from {}", options.source.display()))?;
            for report in reports {
                println!(
                    "{} ({} page{}, {})",
                    report.output.display(),
                    report.pages,
                    if report.pages == 1 { "" } else { "s" },
                    report.location
                );
            }
        }
        Commands::Parse { source, compact } => {
            let source = source.unwrap_or(config.source_path);
            let (record, _) = parse_resume_file(&source)
                .with_context(|| format!("Failed to parse {}", source.display()))?;
            let json = if compact {
                serde_json::to_string(&record)?
            } else {
                serde_json::to_string_pretty(&record)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
