//! ResumeRecord → story of styled blocks.
//!
//! Page one carries the header, summary, skills and the first few jobs; the rest
//! of the experience follows a forced page break under a "(Continued)" heading,
//! then education.

use crate::layout::blocks::{Block, Run};
use crate::layout::styles::{
    ParagraphStyle, BODY, CONTACT, HEADER, JOB_INFO, JOB_TITLE, POINTS_PER_INCH, SUBTITLE,
};
use crate::models::{EducationEntry, JobEntry, ResumeRecord};
use crate::parser::predicates::{ACHIEVEMENT_LABEL_WINDOW, ACHIEVEMENT_SEPARATOR};
use crate::parser::sections::{
    EDUCATION_HEADER, EXPERIENCE_HEADER, SKILLS_HEADER, SUMMARY_HEADER,
};

pub const EXPERIENCE_CONTINUED_HEADER: &str = "PROFESSIONAL EXPERIENCE (Continued)";

const BEFORE_EXPERIENCE_GAP: f32 = 0.04 * POINTS_PER_INCH;
const UNDER_HEADING_GAP: f32 = 0.01 * POINTS_PER_INCH;
const BETWEEN_JOBS_GAP: f32 = 0.03 * POINTS_PER_INCH;
const BETWEEN_DEGREES_GAP: f32 = 0.02 * POINTS_PER_INCH;

/// Splits a leading `Label:` off `text` as a bold run when the separator falls
/// inside the label window. Otherwise the whole text is one plain run.
pub fn lead_label_runs(text: &str) -> Vec<Run> {
    let split = text
        .char_indices()
        .take(ACHIEVEMENT_LABEL_WINDOW)
        .find(|&(_, c)| c == ACHIEVEMENT_SEPARATOR)
        .map(|(idx, c)| idx + c.len_utf8());

    match split {
        Some(end) => {
            let mut runs = vec![Run::bold(&text[..end])];
            if end < text.len() {
                runs.push(Run::plain(&text[end..]));
            }
            runs
        }
        None => vec![Run::plain(text)],
    }
}

fn push_if_present(story: &mut Vec<Block>, style: ParagraphStyle, text: &str) {
    if !text.is_empty() {
        story.push(Block::paragraph(style, text));
    }
}

fn job_blocks(story: &mut Vec<Block>, job: &JobEntry) {
    story.push(Block::paragraph(JOB_TITLE, &job.company));

    let info: Vec<&str> = [job.title.as_str(), job.dates.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    push_if_present(story, JOB_INFO, &info.join(" | "));
    push_if_present(story, JOB_INFO, &job.location);

    for achievement in &job.achievements {
        story.push(Block::Bullet {
            runs: lead_label_runs(achievement),
        });
    }
}

fn jobs_with_gaps(story: &mut Vec<Block>, jobs: &[JobEntry]) {
    for (i, job) in jobs.iter().enumerate() {
        if i > 0 {
            story.push(Block::Spacer {
                height: BETWEEN_JOBS_GAP,
            });
        }
        job_blocks(story, job);
    }
}

fn education_blocks(story: &mut Vec<Block>, education: &[EducationEntry]) {
    story.push(Block::heading(EDUCATION_HEADER));
    for (i, entry) in education.iter().enumerate() {
        if i > 0 {
            story.push(Block::Spacer {
                height: BETWEEN_DEGREES_GAP,
            });
        }
        story.push(Block::paragraph(JOB_TITLE, &entry.degree));
        push_if_present(story, JOB_INFO, &entry.details);
    }
}

/// Maps a record onto the two-part resume template. `jobs_on_first_page` jobs are
/// placed before the page break.
pub fn build_story(record: &ResumeRecord, jobs_on_first_page: usize) -> Vec<Block> {
    let mut story = Vec::new();

    push_if_present(&mut story, HEADER, &record.name);
    push_if_present(&mut story, SUBTITLE, &record.title);
    push_if_present(&mut story, CONTACT, &record.contact);

    story.push(Block::heading(SUMMARY_HEADER));
    for paragraph in &record.summary {
        story.push(Block::Paragraph {
            style: BODY,
            runs: lead_label_runs(paragraph),
        });
    }

    story.push(Block::heading(SKILLS_HEADER));
    for (category, values) in &record.skills {
        story.push(Block::Bullet {
            runs: vec![Run::bold(category), Run::plain(format!(" {values}"))],
        });
    }

    story.push(Block::Spacer {
        height: BEFORE_EXPERIENCE_GAP,
    });
    story.push(Block::heading(EXPERIENCE_HEADER));
    story.push(Block::Spacer {
        height: UNDER_HEADING_GAP,
    });

    let split = jobs_on_first_page.min(record.experience.len());
    let (first_page, rest) = record.experience.split_at(split);
    jobs_with_gaps(&mut story, first_page);

    if !rest.is_empty() {
        story.push(Block::PageBreak);
        story.push(Block::heading(EXPERIENCE_CONTINUED_HEADER));
        story.push(Block::Spacer {
            height: UNDER_HEADING_GAP,
        });
        jobs_with_gaps(&mut story, rest);
    }

    education_blocks(&mut story, &record.education);
    story
}
