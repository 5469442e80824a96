use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::goal::GoalKind;
use crate::goals::table::GoalTable;

/// Admin-editable goal overrides as the hosted settings store persists
/// them: one nested agent -> "Month Year" -> amount map per goal family.
/// Either section may be absent; an absent section means "no overrides
/// configured" for that family, which the resolver treats as a plain
/// fall-through to static data.
///
/// Amounts are modeled as f64 because hand-edited documents occasionally
/// carry fractional values; they truncate toward zero at ingestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub profit_goals: Option<BTreeMap<String, BTreeMap<String, f64>>>,
    #[serde(default)]
    pub cashin_goals: Option<BTreeMap<String, BTreeMap<String, f64>>>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse settings file `{path}`: {source}")]
    ParseJson { path: PathBuf, source: serde_json::Error },
}

impl SettingsDocument {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Normalized override table for one goal family, or `None` when that
    /// section is absent from the document.
    pub fn table(&self, kind: GoalKind) -> Option<GoalTable> {
        let section = match kind {
            GoalKind::Profit => self.profit_goals.as_ref(),
            GoalKind::CashIn => self.cashin_goals.as_ref(),
        }?;

        let mut table = GoalTable::new();
        for (agent, months) in section {
            for (label, amount) in months {
                table.insert(agent, label, *amount as i64);
            }
        }
        Some(table)
    }
}

pub fn load_settings(path: &Path) -> Result<SettingsDocument, SettingsError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| SettingsError::ReadFile { path: path.to_path_buf(), source })?;

    SettingsDocument::from_json(&raw)
        .map_err(|source| SettingsError::ParseJson { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::domain::goal::GoalKind;

    use super::{load_settings, SettingsDocument, SettingsError};

    #[test]
    fn parses_capitalized_override_keys_into_a_normalized_table() {
        let document = SettingsDocument::from_json(
            r#"{
                "profit_goals": {
                    "NATIONAL": {"August 2025": 999},
                    "Oki irawan": {"August 2025": 120000000}
                }
            }"#,
        )
        .expect("valid settings json");

        let table = document.table(GoalKind::Profit).expect("profit section present");
        assert_eq!(table.get("national", "august 2025"), Some(999));
        assert_eq!(table.get("oki irawan", "august 2025"), Some(120_000_000));
    }

    #[test]
    fn absent_section_yields_no_table() {
        let document = SettingsDocument::from_json(
            r#"{"cashin_goals": {"fendi": {"july 2025": 72000000}}}"#,
        )
        .expect("valid settings json");

        assert!(document.table(GoalKind::Profit).is_none());
        let cashin = document.table(GoalKind::CashIn).expect("cashin section present");
        assert_eq!(cashin.get("fendi", "july 2025"), Some(72_000_000));
    }

    #[test]
    fn fractional_amounts_truncate_toward_zero() {
        let document = SettingsDocument::from_json(
            r#"{"profit_goals": {"fendi": {"july 2025": 80000000.9}}}"#,
        )
        .expect("valid settings json");

        let table = document.table(GoalKind::Profit).expect("profit section present");
        assert_eq!(table.get("fendi", "july 2025"), Some(80_000_000));
    }

    #[test]
    fn load_reports_missing_file_and_bad_json_separately() {
        let dir = TempDir::new().expect("temp dir");

        let missing = dir.path().join("absent.json");
        assert!(matches!(load_settings(&missing), Err(SettingsError::ReadFile { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{not json").expect("write fixture");
        assert!(matches!(load_settings(&broken), Err(SettingsError::ParseJson { .. })));
    }

    #[test]
    fn load_round_trips_a_written_document() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"profit_goals": {"sigit": {"august 2025": 68000000}}}"#)
            .expect("write fixture");

        let document = load_settings(&path).expect("settings load");
        let table = document.table(GoalKind::Profit).expect("profit section present");
        assert_eq!(table.get("sigit", "august 2025"), Some(68_000_000));
    }
}
