//! Section state machine and the per-section line handlers.

use crate::models::{EducationEntry, JobEntry, ResumeRecord};
use crate::parser::predicates::{
    accepts_skill_value, has_summary_label, is_all_caps, is_company_line, is_date_range_line,
    is_degree_line, is_job_location_line, is_job_title_line, is_skill_value_line,
    is_summary_noise, starts_achievement,
};

pub const SUMMARY_HEADER: &str = "PROFESSIONAL SUMMARY";
pub const SKILLS_HEADER: &str = "TECHNICAL SKILLS";
pub const EXPERIENCE_HEADER: &str = "PROFESSIONAL EXPERIENCE";
pub const EDUCATION_HEADER: &str = "EDUCATION";

/// Which part of the resume the parser is currently reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Summary,
    Skills,
    Experience,
    Education,
}

/// Handles one trimmed, non-blank line. `next` is the trimmed line that follows it.
pub type LineHandler = fn(&mut ParseState, &str, Option<&str>);

impl Section {
    /// Maps an exact header line to its section.
    pub fn from_header(line: &str) -> Option<Section> {
        match line {
            SUMMARY_HEADER => Some(Section::Summary),
            SKILLS_HEADER => Some(Section::Skills),
            EXPERIENCE_HEADER => Some(Section::Experience),
            EDUCATION_HEADER => Some(Section::Education),
            _ => None,
        }
    }

    pub fn handler(self) -> LineHandler {
        match self {
            Section::None => handle_unsectioned,
            Section::Summary => handle_summary,
            Section::Skills => handle_skills,
            Section::Experience => handle_experience,
            Section::Education => handle_education,
        }
    }
}

/// Mutable state threaded through a single parse pass.
#[derive(Debug, Default)]
pub struct ParseState {
    pub record: ResumeRecord,
    pub section: Section,
    /// Job being accumulated; pushed to `record.experience` on the next company line.
    pub open_job: Option<JobEntry>,
    pub dropped_lines: usize,
    /// Value line already paired with the preceding skills label.
    pub pending_skill_value: Option<String>,
}

impl ParseState {
    pub fn flush_job(&mut self) {
        if let Some(job) = self.open_job.take() {
            self.record.experience.push(job);
        }
    }

    /// Ends the pass and returns the record plus the number of dropped lines.
    pub fn finish(mut self) -> (ResumeRecord, usize) {
        self.flush_job();
        (self.record, self.dropped_lines)
    }

    fn drop_line(&mut self) {
        self.dropped_lines += 1;
    }
}

fn handle_unsectioned(state: &mut ParseState, _line: &str, _next: Option<&str>) {
    state.drop_line();
}

fn handle_summary(state: &mut ParseState, line: &str, _next: Option<&str>) {
    if is_summary_noise(line) {
        state.drop_line();
        return;
    }

    let summary = &mut state.record.summary;
    if has_summary_label(line) {
        summary.push(line.to_string());
        return;
    }

    match summary.last_mut() {
        Some(last) if !last.ends_with('.') => {
            last.push(' ');
            last.push_str(line);
        }
        _ => summary.push(line.to_string()),
    }
}

fn handle_skills(state: &mut ParseState, line: &str, next: Option<&str>) {
    let consumed = state.pending_skill_value.take();
    if is_skill_value_line(line) {
        if consumed.as_deref() != Some(line) {
            state.drop_line();
        }
        return;
    }

    match next {
        Some(value) if accepts_skill_value(value) => {
            if !state.record.skills.contains_key(line) {
                state
                    .record
                    .skills
                    .insert(line.to_string(), value.to_string());
            }
            state.pending_skill_value = Some(value.to_string());
        }
        _ => state.drop_line(),
    }
}

fn handle_experience(state: &mut ParseState, line: &str, _next: Option<&str>) {
    if is_company_line(line) {
        state.flush_job();
        state.open_job = Some(JobEntry::new(line));
        return;
    }

    let Some(job) = state.open_job.as_mut() else {
        state.drop_line();
        return;
    };

    if job.title.is_empty() && is_job_title_line(line) {
        job.title = line.to_string();
    } else if job.location.is_empty() && is_job_location_line(line) {
        job.location = line.to_string();
    } else if job.dates.is_empty() && is_date_range_line(line) {
        job.dates = line.to_string();
    } else if !line.is_empty() && !is_all_caps(line) && line != EDUCATION_HEADER {
        if starts_achievement(line) {
            job.achievements.push(line.to_string());
        } else if let Some(last) = job.achievements.last_mut() {
            last.push(' ');
            last.push_str(line);
        } else {
            state.dropped_lines += 1;
        }
    } else {
        state.dropped_lines += 1;
    }
}

fn handle_education(state: &mut ParseState, line: &str, _next: Option<&str>) {
    let education = &mut state.record.education;
    if is_degree_line(line) {
        education.push(EducationEntry {
            degree: line.to_string(),
            details: String::new(),
        });
        return;
    }

    match education.iter().position(|e| e.details.is_empty()) {
        Some(idx) => education[idx].details = line.to_string(),
        None => state.dropped_lines += 1,
    }
}
