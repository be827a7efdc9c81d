use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use crate::error::AppError;

/// A generated report stamped with when it was produced.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedReport<'a, T: Serialize> {
    pub generated_at: DateTime<Utc>,
    pub report: &'a T,
}

pub struct ReportExporter {
    dir: PathBuf,
}

impl ReportExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReportExporter { dir: dir.into() }
    }

    /// File name for a report about `subject`, e.g. `virat_kohli.json`.
    pub fn file_name(subject: &str) -> String {
        let slug: String = subject
            .trim()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        let slug = slug.trim_matches('_');
        format!("{}.json", if slug.is_empty() { "report" } else { slug })
    }

    pub fn path_for(&self, subject: &str) -> PathBuf {
        self.dir.join(Self::file_name(subject))
    }

    pub fn save<T: Serialize>(&self, subject: &str, report: &T) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::ExportError(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        let exported = ExportedReport {
            generated_at: Utc::now(),
            report,
        };
        let json = serde_json::to_string_pretty(&exported)?;

        let path = self.path_for(subject);
        fs::write(&path, json).map_err(|e| {
            AppError::ExportError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        log::info!("Exported report to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_player_names() {
        assert_eq!(ReportExporter::file_name("Virat Kohli"), "virat_kohli.json");
        assert_eq!(ReportExporter::file_name("Quinton de Kock"), "quinton_de_kock.json");
        assert_eq!(ReportExporter::file_name("  "), "report.json");
        assert_eq!(ReportExporter::file_name("India vs Australia"), "india_vs_australia.json");
    }

    #[test]
    fn writes_stamped_json() {
        let dir = std::env::temp_dir().join(format!("cricket_insights_test_{}", std::process::id()));
        let exporter = ReportExporter::new(&dir);
        let path = exporter.save("Steve Smith", &serde_json::json!({ "runs": 42 })).unwrap();

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["report"]["runs"], 42);
        assert!(written["generatedAt"].is_string());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn filesystem_failures_are_export_errors() {
        let blocker = std::env::temp_dir().join(format!("cricket_insights_blocker_{}", std::process::id()));
        fs::write(&blocker, "not a directory").unwrap();

        let exporter = ReportExporter::new(blocker.join("reports"));
        let err = exporter.save("Joe Root", &serde_json::json!({ "runs": 7 })).unwrap_err();
        match err {
            AppError::ExportError(message) => assert!(message.contains("cricket_insights_blocker")),
            other => panic!("unexpected error {:?}", other),
        }

        let _ = fs::remove_file(&blocker);
    }
}
