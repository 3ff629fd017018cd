//! Resume Generation: orchestrates the full generation pipeline.
//!
//! Flow: read + parse source → location/internal variants → build story →
//!       render PDF → write output → return report.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::story::build_story;
use crate::generation::variants::{
    apply_internal_variant, apply_target_location, output_path_for_location,
};
use crate::models::ResumeRecord;
use crate::parser::{parse_resume_file, ParseSummary};
use crate::render::PdfRenderer;

/// PDF title used when the resume has no name line.
const FALLBACK_TITLE: &str = "Resume";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Parameters of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub source: PathBuf,
    pub output: PathBuf,
    pub target_location: Option<String>,
    /// Swap in the internal title/achievements for the internal employer's entry.
    pub internal: bool,
    pub jobs_on_first_page: usize,
}

impl GenerationOptions {
    pub fn from_config(config: &Config) -> Self {
        GenerationOptions {
            source: config.source_path.clone(),
            output: config.output_path.clone(),
            target_location: config.target_location.clone(),
            internal: false,
            jobs_on_first_page: config.jobs_on_first_page,
        }
    }
}

/// Outcome of writing one PDF.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub location: String,
    pub pages: usize,
    pub bytes: usize,
    pub internal_applied: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Applies the requested variants to a copy of `record` and writes it to
/// `options.output`. The parsed record itself is never modified.
fn render_variant(
    renderer: &PdfRenderer,
    record: &ResumeRecord,
    options: &GenerationOptions,
) -> Result<GenerationReport, AppError> {
    let mut record = record.clone();
    apply_target_location(&mut record, options.target_location.as_deref());
    let internal_applied = options.internal && apply_internal_variant(&mut record);

    let story = build_story(&record, options.jobs_on_first_page);
    let title = if record.name.is_empty() {
        FALLBACK_TITLE
    } else {
        record.name.as_str()
    };
    let rendered = renderer.render_to_file(&story, title, &options.output)?;

    info!(
        output = %options.output.display(),
        location = %record.location,
        pages = rendered.pages,
        blocks = story.len(),
        internal = internal_applied,
        "Generated resume"
    );

    Ok(GenerationReport {
        output: options.output.clone(),
        location: record.location,
        pages: rendered.pages,
        bytes: rendered.bytes.len(),
        internal_applied,
    })
}

/// Parses the source once and writes one PDF per target location, each named
/// after its location. An empty `locations` list writes a single PDF to
/// `options.output` with the configured target location, if any.
pub fn generate_for_locations(
    options: &GenerationOptions,
    locations: &[String],
) -> Result<(ParseSummary, Vec<GenerationReport>), AppError> {
    let (record, summary) = parse_resume_file(&options.source)?;
    let renderer = PdfRenderer::default();

    if locations.is_empty() {
        let report = render_variant(&renderer, &record, options)?;
        return Ok((summary, vec![report]));
    }

    let mut reports = Vec::with_capacity(locations.len());
    for location in locations {
        let variant = GenerationOptions {
            output: output_path_for_location(&options.output, location),
            target_location: Some(location.clone()),
            ..options.clone()
        };
        reports.push(render_variant(&renderer, &record, &variant)?);
    }

    info!(variants = reports.len(), "Generated location variants");
    Ok((summary, reports))
}
