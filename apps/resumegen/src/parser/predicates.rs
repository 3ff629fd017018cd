//! Keyword heuristics used to classify resume lines.
//!
//! The keyword lists are matched case-sensitively as plain substrings. They were
//! tuned against real resumes; widening them changes how existing input parses.

/// Separator that marks the headline title line.
pub const TITLE_SEPARATOR: char = '|';

pub const TITLE_KEYWORDS: &[&str] = &["Engineer", "Architect", "VP", "Director", "Manager"];

pub const CONTACT_MARKERS: &[&str] = &["@", "Phone", "Email"];

pub const SUMMARY_LABEL_PREFIXES: &[&str] = &[
    "Deep Expertise:",
    "Modern Stack:",
    "Leadership and Governance:",
];

/// Header text that leaks into the summary when a section is split across pages.
pub const SUMMARY_NOISE: &[&str] = &["(Continued)", "TECHNICAL SKILLS"];

pub const SKILL_VALUE_KEYWORDS: &[&str] = &[
    "Kubernetes",
    "Microservices",
    "Mainframe",
    "OpenTelemetry",
    "PostgreSQL",
    "Payment",
    "Java",
];

pub const EMPLOYER_SUBSTRING: &str = "Fidelity National";
pub const EMPLOYER_PREFIX: &str = "FIS";

pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "Engineer",
    "Architect",
    "President",
    "Manager",
    "Director",
    "Developer",
    "Lead",
];

pub const PLACE_KEYWORDS: &[&str] = &[
    "Florida",
    "Wisconsin",
    "California",
    "Texas",
    "New York",
    "United States",
    "India",
    "Area",
];

pub const RELOCATION_MARKER: &str = "Relocation";

pub const DATE_RANGE_SEPARATORS: &[&str] = &["–", " - "];

pub const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DEGREE_KEYWORDS: &[&str] = &["Master", "Bachelor", "Doctor", "PhD", "Associate"];

/// Achievement label separator and how far into the line it may appear.
pub const ACHIEVEMENT_SEPARATOR: char = ':';
pub const ACHIEVEMENT_LABEL_WINDOW: usize = 50;

fn contains_any(line: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| line.contains(n))
}

/// At least one letter and no lowercase letters.
pub fn is_all_caps(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

pub fn is_title_line(line: &str) -> bool {
    line.contains(TITLE_SEPARATOR) && contains_any(line, TITLE_KEYWORDS)
}

pub fn is_contact_line(line: &str) -> bool {
    contains_any(line, CONTACT_MARKERS)
}

pub fn has_summary_label(line: &str) -> bool {
    SUMMARY_LABEL_PREFIXES.iter().any(|p| line.starts_with(p))
}

pub fn is_summary_noise(line: &str) -> bool {
    contains_any(line, SUMMARY_NOISE)
}

/// True for lines that carry skill values rather than a category label.
pub fn is_skill_value_line(line: &str) -> bool {
    line.contains(',') || contains_any(line, SKILL_VALUE_KEYWORDS)
}

/// Whether the line after a skills label can serve as its value. An all-caps
/// line is only refused when it is not itself a value line, so acronym lists such
/// as `AWS, GCP` pair while section headers do not.
pub fn accepts_skill_value(value: &str) -> bool {
    !value.is_empty() && (is_skill_value_line(value) || !is_all_caps(value))
}

pub fn is_company_line(line: &str) -> bool {
    is_all_caps(line) || line.contains(EMPLOYER_SUBSTRING) || line.starts_with(EMPLOYER_PREFIX)
}

pub fn is_job_title_line(line: &str) -> bool {
    contains_any(line, JOB_TITLE_KEYWORDS)
}

pub fn is_job_location_line(line: &str) -> bool {
    contains_any(line, PLACE_KEYWORDS) && !line.contains(RELOCATION_MARKER)
}

pub fn is_date_range_line(line: &str) -> bool {
    contains_any(line, DATE_RANGE_SEPARATORS) && contains_any(line, MONTHS)
}

/// An achievement opens with a short label ending in `:`.
pub fn starts_achievement(line: &str) -> bool {
    line.chars()
        .take(ACHIEVEMENT_LABEL_WINDOW)
        .any(|c| c == ACHIEVEMENT_SEPARATOR)
}

pub fn is_degree_line(line: &str) -> bool {
    DEGREE_KEYWORDS.iter().any(|k| line.starts_with(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_requires_a_letter() {
        assert!(is_all_caps("ACME CORP"));
        assert!(is_all_caps("JPMORGAN CHASE AND CO."));
        assert!(!is_all_caps("Acme Corp"));
        assert!(!is_all_caps("2019 – 2020"));
        assert!(!is_all_caps(""));
    }

    #[test]
    fn test_acronym_value_lines_are_accepted_after_a_label() {
        assert!(accepts_skill_value("AWS, GCP"));
        assert!(accepts_skill_value("SQL, ETL"));
        assert!(accepts_skill_value("Rust, Java"));
        assert!(accepts_skill_value("JAVA"));
        assert!(!accepts_skill_value("PROFESSIONAL EXPERIENCE"));
        assert!(!accepts_skill_value(""));
    }

    #[test]
    fn test_title_line_needs_separator_and_keyword() {
        assert!(is_title_line("Principal Engineer | Cloud Architect"));
        assert!(!is_title_line("Principal Engineer"));
        assert!(!is_title_line("555-0100 | jane@example.com"));
    }

    #[test]
    fn test_contact_markers() {
        assert!(is_contact_line("(555) 010-2000 | jane@example.com"));
        assert!(is_contact_line("Phone: 555 0100"));
        assert!(!is_contact_line("Denver, Colorado"));
    }

    #[test]
    fn test_skill_value_line_detection() {
        assert!(is_skill_value_line("AWS, GCP"));
        assert!(is_skill_value_line("Kubernetes"));
        assert!(!is_skill_value_line("Cloud:"));
    }

    #[test]
    fn test_company_line_variants() {
        assert!(is_company_line("ACME CORP"));
        assert!(is_company_line("FIS (Fidelity National Information Services)"));
        assert!(is_company_line("The Fidelity National group"));
        assert!(is_company_line("FISERV holdings"));
        assert!(!is_company_line("Acme Corp"));
    }

    #[test]
    fn test_location_excludes_relocation_marker() {
        assert!(is_job_location_line("Milwaukee, Wisconsin, United States"));
        assert!(!is_job_location_line(
            "Tampa, Florida Area (Targeting Bay Area Relocation)"
        ));
        assert!(!is_job_location_line("Denver, Colorado"));
    }

    #[test]
    fn test_date_range_needs_separator_and_month() {
        assert!(is_date_range_line("November 2017 – Present"));
        assert!(is_date_range_line("June 2012 - February 2019"));
        assert!(!is_date_range_line("2012 – 2019"));
        assert!(!is_date_range_line("Since November 2017"));
    }

    #[test]
    fn test_achievement_window_is_fifty_chars() {
        assert!(starts_achievement("Built a system: did X and Y"));
        let label = "x".repeat(49);
        assert!(starts_achievement(&format!("{label}: body")));
        let long_label = "x".repeat(50);
        assert!(!starts_achievement(&format!("{long_label}: body")));
    }

    #[test]
    fn test_degree_prefixes() {
        assert!(is_degree_line("Master of Computer Applications (MCA)"));
        assert!(is_degree_line("Bachelor of Science"));
        assert!(!is_degree_line("State University | 2012"));
    }
}
