//! Record rewrites applied between parsing and layout: the relocation target and
//! the internal-application content swap.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::models::ResumeRecord;
use crate::parser::predicates::{RELOCATION_MARKER, TITLE_SEPARATOR};

/// Employer whose entry is replaced in the internal variant (matched case-insensitively).
pub const INTERNAL_EMPLOYER: &str = "JPMORGAN";

pub const INTERNAL_TITLE: &str =
    "Vice President, Lead Software Engineer | November 2017 – Present";

pub const INTERNAL_ACHIEVEMENTS: &[&str] = &[
    "Funds Control Platform Ownership: Lead engineer for the firmwide funds control platform, \
     owning architecture decisions across the authorization, hold, and release services.",
    "Mainframe Modernization: Drove the incremental migration of COBOL batch settlement jobs to \
     Spring Boot services on the firm's internal Kubernetes platform with dual-run reconciliation.",
    "Resiliency Program: Led the multi-region failover design and quarterly resiliency exercises \
     that raised platform availability to the 99.99% control target.",
    "Controls and Audit: Partnered with Cybersecurity and Controls to close audit findings and roll \
     out standardized PII encryption across 15+ line-of-business applications.",
    "Engineering Leadership: Ran the platform architecture review and mentored a pod of twelve \
     engineers across Tampa and Bengaluru.",
];

fn relocation_note(target: &str) -> String {
    format!("{target} (Targeting Relocation)")
}

fn last_contact_segment(contact: &str) -> &str {
    contact.rsplit(TITLE_SEPARATOR).next().unwrap_or(contact).trim()
}

/// Rewrites contact and job locations for `target`. Without a target the record
/// location falls back to the last segment of the contact line.
pub fn apply_target_location(record: &mut ResumeRecord, target: Option<&str>) {
    let target = target.map(str::trim).filter(|t| !t.is_empty());

    let Some(target) = target else {
        if record.location.is_empty() {
            record.location = last_contact_segment(&record.contact).to_string();
        }
        return;
    };

    record.location = target.to_string();
    record.contact = if record.contact.is_empty() {
        relocation_note(target)
    } else if let Some((head, _)) = record.contact.rsplit_once(TITLE_SEPARATOR) {
        format!("{} {TITLE_SEPARATOR} {}", head.trim_end(), relocation_note(target))
    } else {
        format!("{} {TITLE_SEPARATOR} {}", record.contact, relocation_note(target))
    };

    for job in record
        .experience
        .iter_mut()
        .filter(|job| job.location.contains(RELOCATION_MARKER))
    {
        let place = match job.location.find('(') {
            Some(open) => job.location[..open].trim_end(),
            None => job.location.trim_end(),
        };
        job.location = format!("{place} (Targeting {target} {RELOCATION_MARKER})");
    }

    debug!(location = target, contact = %record.contact, "Applied target location");
}

/// Swaps in the internal title and achievements for the internal employer's entry.
/// Returns whether an entry was found.
pub fn apply_internal_variant(record: &mut ResumeRecord) -> bool {
    let job = record
        .experience
        .iter_mut()
        .find(|job| job.company.to_uppercase().contains(INTERNAL_EMPLOYER));

    match job {
        Some(job) => {
            job.title = INTERNAL_TITLE.to_string();
            job.dates.clear();
            job.achievements = INTERNAL_ACHIEVEMENTS.iter().map(|s| s.to_string()).collect();
            debug!(company = %job.company, "Applied internal variant");
            true
        }
        None => {
            warn!(
                employer = INTERNAL_EMPLOYER,
                "Internal variant requested but no matching employer entry; content unchanged"
            );
            false
        }
    }
}

/// `Resume.pdf` + "Bay Area" → `Resume_Bay_Area.pdf`.
pub fn slugify(location: &str) -> String {
    let mut slug = String::with_capacity(location.len());
    for c in location.chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

/// Output path for one location variant. A location with no usable characters
/// keeps the base path.
pub fn output_path_for_location(base: &Path, location: &str) -> PathBuf {
    let slug = slugify(location);
    if slug.is_empty() {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Resume".to_string());
    let ext = base
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pdf".to_string());
    base.with_file_name(format!("{stem}_{slug}.{ext}"))
}
