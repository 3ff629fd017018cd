use std::path::PathBuf;

use anyhow::Result;

use crate::errors::AppError;

pub const DEFAULT_SOURCE: &str = "resume.txt";
pub const DEFAULT_OUTPUT: &str = "Resume.pdf";

/// Generator configuration loaded from environment variables.
/// CLI flags override these values in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub target_location: Option<String>,
    /// Jobs rendered before the forced page break.
    pub jobs_on_first_page: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            source_path: get("RESUME_SOURCE")
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string())
                .into(),
            output_path: get("RESUME_OUTPUT")
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_string())
                .into(),
            target_location: get("RESUME_TARGET_LOCATION"),
            jobs_on_first_page: get("RESUME_JOBS_ON_FIRST_PAGE")
                .unwrap_or_else(|| "1".to_string())
                .trim()
                .parse::<usize>()
                .map_err(|e| {
                    AppError::Config(format!(
                        "RESUME_JOBS_ON_FIRST_PAGE must be a non-negative integer: {e}"
                    ))
                })?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.source_path, PathBuf::from("resume.txt"));
        assert_eq!(config.output_path, PathBuf::from("Resume.pdf"));
        assert_eq!(config.target_location, None);
        assert_eq!(config.jobs_on_first_page, 1);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_SOURCE", "input/me.txt"),
            ("RESUME_OUTPUT", "out/me.pdf"),
            ("RESUME_TARGET_LOCATION", "Seattle, WA"),
            ("RESUME_JOBS_ON_FIRST_PAGE", "2"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.source_path, PathBuf::from("input/me.txt"));
        assert_eq!(config.output_path, PathBuf::from("out/me.pdf"));
        assert_eq!(config.target_location.as_deref(), Some("Seattle, WA"));
        assert_eq!(config.jobs_on_first_page, 2);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_target_location_is_unset() {
        let config =
            Config::from_lookup(lookup_from(&[("RESUME_TARGET_LOCATION", "   ")])).unwrap();
        assert_eq!(config.target_location, None);
    }

    #[test]
    fn test_invalid_jobs_on_first_page_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("RESUME_JOBS_ON_FIRST_PAGE", "two")]))
            .unwrap_err();
        assert!(err.to_string().contains("RESUME_JOBS_ON_FIRST_PAGE"));
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Config(_))
        ));
    }
}
