//! Resume Text Parser: rebuilds a `ResumeRecord` from a loosely structured text file.
//!
//! One forward pass with one line of look-ahead. The first non-blank line is the
//! name; the headline title and contact lines are recognized anywhere; the four
//! section headers switch the handler used for every other line.

pub mod predicates;
pub mod sections;

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::ResumeRecord;
use crate::parser::predicates::{is_contact_line, is_title_line};
use crate::parser::sections::{ParseState, Section};

/// Counts reported after each parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub summary_paragraphs: usize,
    pub skill_categories: usize,
    pub jobs: usize,
    pub achievements: usize,
    pub education_entries: usize,
    pub dropped_lines: usize,
}

impl ParseSummary {
    fn from_record(record: &ResumeRecord, dropped_lines: usize) -> Self {
        ParseSummary {
            summary_paragraphs: record.summary.len(),
            skill_categories: record.skills.len(),
            jobs: record.experience.len(),
            achievements: record.achievement_count(),
            education_entries: record.education.len(),
            dropped_lines,
        }
    }
}

/// Parses resume text. Never fails: anything unrecognized is left empty and
/// counted in `dropped_lines`.
pub fn parse_resume_with_summary(text: &str) -> (ResumeRecord, ParseSummary) {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut state = ParseState::default();
    let mut name_seen = false;

    for (idx, &line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        if !name_seen {
            state.record.name = line.to_string();
            name_seen = true;
            continue;
        }

        if state.record.title.is_empty() && is_title_line(line) {
            state.record.title = line.to_string();
            continue;
        }

        // No "already set" guard: the last contact line wins.
        if is_contact_line(line) {
            state.record.contact = line.to_string();
            continue;
        }

        if let Some(section) = Section::from_header(line) {
            debug!(?section, line = idx + 1, "Entering section");
            state.section = section;
            continue;
        }

        let next = lines.get(idx + 1).copied();
        (state.section.handler())(&mut state, line, next);
    }

    let (record, dropped_lines) = state.finish();
    let summary = ParseSummary::from_record(&record, dropped_lines);
    (record, summary)
}

/// Reads and parses a resume file. Only the read can fail.
pub fn parse_resume_file(path: &Path) -> Result<(ResumeRecord, ParseSummary), AppError> {
    let text = std::fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))?;
    let (record, summary) = parse_resume_with_summary(&text);

    info!(
        path = %path.display(),
        summary_paragraphs = summary.summary_paragraphs,
        skill_categories = summary.skill_categories,
        jobs = summary.jobs,
        achievements = summary.achievements,
        education = summary.education_entries,
        dropped_lines = summary.dropped_lines,
        "Parsed resume"
    );

    Ok((record, summary))
}
