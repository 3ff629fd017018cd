use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything recovered from a plain-text resume.
///
/// Fields the parser could not find stay empty; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub contact: String,
    pub location: String,
    pub summary: Vec<String>,
    /// Category label → comma-joined skills, in source order.
    pub skills: IndexMap<String, String>,
    pub experience: Vec<JobEntry>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    pub company: String,
    pub title: String,
    pub location: String,
    pub dates: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub details: String,
}

impl JobEntry {
    /// A freshly opened job: only the company is known.
    pub fn new(company: impl Into<String>) -> Self {
        JobEntry {
            company: company.into(),
            ..Default::default()
        }
    }
}

impl ResumeRecord {
    pub fn achievement_count(&self) -> usize {
        self.experience.iter().map(|j| j.achievements.len()).sum()
    }
}
