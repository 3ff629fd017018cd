pub mod resume;

pub use resume::{EducationEntry, JobEntry, ResumeRecord};
