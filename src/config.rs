use crate::analysis::random::RandomMode;
use crate::error::AppError;
use chrono::{NaiveDate, Utc};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub random_mode: RandomMode,
    pub export_dir: PathBuf,
    /// Date of the most recent synthetic match.
    pub history_anchor: NaiveDate,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let random_mode = match var("CRICKET_RANDOM_MODE") {
            Some(value) => RandomMode::from_label(&value).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "CRICKET_RANDOM_MODE must be 'entropy' or 'seeded', got '{}'",
                    value
                ))
            })?,
            None => RandomMode::Entropy,
        };

        let export_dir = var("CRICKET_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir);

        let history_anchor = match var("CRICKET_HISTORY_ANCHOR") {
            Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
                AppError::ConfigError(format!(
                    "CRICKET_HISTORY_ANCHOR must be YYYY-MM-DD, got '{}': {}",
                    value, e
                ))
            })?,
            None => Utc::now().date_naive(),
        };

        Ok(Config {
            random_mode,
            export_dir,
            history_anchor,
        })
    }
}

fn default_export_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cricket_insights")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_entropy_and_today() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.random_mode, RandomMode::Entropy);
        assert!(config.export_dir.ends_with(".cricket_insights"));
        assert_eq!(config.history_anchor, Utc::now().date_naive());
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[
            ("CRICKET_RANDOM_MODE", "seeded"),
            ("CRICKET_EXPORT_DIR", "/tmp/reports"),
            ("CRICKET_HISTORY_ANCHOR", "2024-02-29"),
        ])
        .unwrap();
        assert_eq!(config.random_mode, RandomMode::Seeded);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.history_anchor, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_with(&[("CRICKET_RANDOM_MODE", "chaotic")]),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            config_with(&[("CRICKET_HISTORY_ANCHOR", "29/02/2024")]),
            Err(AppError::ConfigError(_))
        ));
    }
}
