use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::goal::GoalAmount;
use crate::domain::period::{Month, Period};
use crate::goals::table::{GoalTable, NATIONAL_KEY};

/// One stage of the fallback chain. Ordering is the policy: admin-configured
/// settings always outrank static data (so a settings national entry beats a
/// static agent-specific entry), and within one source an agent-specific
/// entry outranks the national bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStage {
    #[serde(rename = "settings.agent")]
    SettingsAgent,
    #[serde(rename = "settings.national")]
    SettingsNational,
    #[serde(rename = "static.agent")]
    StaticAgent,
    #[serde(rename = "static.national")]
    StaticNational,
}

impl ResolutionStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SettingsAgent => "settings.agent",
            Self::SettingsNational => "settings.national",
            Self::StaticAgent => "static.agent",
            Self::StaticNational => "static.national",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub stage: ResolutionStage,
    pub key: String,
    pub hit: Option<GoalAmount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTrace {
    pub agent: String,
    pub period_label: Option<String>,
    pub steps: Vec<TraceStep>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalResolution {
    pub amount: GoalAmount,
    pub matched_stage: Option<ResolutionStage>,
    pub trace: ResolutionTrace,
}

/// Resolves one monthly goal for an agent.
///
/// `month` is a 1-2 digit month-number string and `year` is carried verbatim
/// into the period label. Every failure mode degrades to `0`: an unparsable
/// month, a missing settings table, or an exhausted fallback chain all mean
/// "no goal configured", never an error. The tables are only read.
pub fn resolve_goal(
    agent: &str,
    month: &str,
    year: &str,
    settings: Option<&GoalTable>,
    static_table: &GoalTable,
) -> GoalAmount {
    resolve_goal_with_trace(agent, month, year, settings, static_table).amount
}

/// Same chain as [`resolve_goal`], returning the attempted stages for
/// support debugging.
pub fn resolve_goal_with_trace(
    agent: &str,
    month: &str,
    year: &str,
    settings: Option<&GoalTable>,
    static_table: &GoalTable,
) -> GoalResolution {
    let mut trace =
        ResolutionTrace { agent: agent.to_string(), period_label: None, steps: Vec::new() };

    let Some(parsed_month) = Month::from_number_str(month) else {
        warn!(agent, month, year, "goal lookup received an invalid month number");
        return GoalResolution { amount: 0, matched_stage: None, trace };
    };

    let label = Period::new(parsed_month, year).label();
    trace.period_label = Some(label.clone());

    let stages: [(ResolutionStage, Option<&GoalTable>, &str); 4] = [
        (ResolutionStage::SettingsAgent, settings, agent),
        (ResolutionStage::SettingsNational, settings, NATIONAL_KEY),
        (ResolutionStage::StaticAgent, Some(static_table), agent),
        (ResolutionStage::StaticNational, Some(static_table), NATIONAL_KEY),
    ];

    for (stage, table, key) in stages {
        let Some(table) = table else {
            // Absent settings table: skip both settings stages entirely.
            continue;
        };
        let hit = table.get(key, &label);
        trace.steps.push(TraceStep { stage, key: key.to_string(), hit });
        debug!(agent, period = %label, stage = stage.as_str(), hit = ?hit, "goal lookup stage");

        if let Some(amount) = hit {
            return GoalResolution { amount, matched_stage: Some(stage), trace };
        }
    }

    debug!(agent, period = %label, "goal lookup exhausted every stage; no goal configured");
    GoalResolution { amount: 0, matched_stage: None, trace }
}

/// Chart variant: the whole period-label -> goal mapping for one agent,
/// from the settings table only (agent entry, else national bucket).
///
/// This deliberately never consults the static fallback; with no settings
/// the chart simply has no goal series. Single-value lookup and chart view
/// diverging here is long-standing dashboard behavior, kept as-is.
pub fn chart_goals(
    agent: &str,
    settings: Option<&GoalTable>,
) -> BTreeMap<String, GoalAmount> {
    let Some(settings) = settings else {
        return BTreeMap::new();
    };

    settings
        .agent_months(agent)
        .or_else(|| settings.agent_months(NATIONAL_KEY))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::goals::table::GoalTable;

    use super::{chart_goals, resolve_goal, resolve_goal_with_trace, ResolutionStage};

    fn table(entries: &[(&str, &str, i64)]) -> GoalTable {
        let mut table = GoalTable::new();
        for (agent, label, amount) in entries {
            table.insert(agent, label, *amount);
        }
        table
    }

    #[test]
    fn empty_tables_resolve_to_zero_for_every_month() {
        let statics = GoalTable::new();
        let settings = GoalTable::new();
        for month in 1..=12u8 {
            let amount =
                resolve_goal("oki irawan", &month.to_string(), "2025", Some(&settings), &statics);
            assert_eq!(amount, 0);
        }
    }

    #[test]
    fn static_value_is_returned_when_settings_have_no_entry() {
        let statics = table(&[("oki irawan", "august 2025", 105_000_000)]);

        assert_eq!(resolve_goal("Oki Irawan", "08", "2025", None, &statics), 105_000_000);
    }

    #[test]
    fn settings_value_wins_over_static_value_for_the_same_agent() {
        let statics = table(&[("oki irawan", "august 2025", 105_000_000)]);
        let settings = table(&[("Oki irawan", "August 2025", 120_000_000)]);

        assert_eq!(
            resolve_goal("oki irawan", "8", "2025", Some(&settings), &statics),
            120_000_000
        );
    }

    #[test]
    fn settings_national_outranks_static_agent_entry() {
        let statics = table(&[("oki irawan", "august 2025", 105_000_000)]);
        let settings = table(&[("NATIONAL", "August 2025", 999)]);

        assert_eq!(resolve_goal("oki irawan", "08", "2025", Some(&settings), &statics), 999);
    }

    #[test]
    fn agent_key_lookup_is_case_insensitive() {
        let statics = GoalTable::new();
        let settings = table(&[("Oki irawan", "August 2025", 7)]);

        assert_eq!(resolve_goal("OKI IRAWAN", "8", "2025", Some(&settings), &statics), 7);
        assert_eq!(resolve_goal("oki irawan", "8", "2025", Some(&settings), &statics), 7);
    }

    #[test]
    fn invalid_month_resolves_to_zero_regardless_of_table_contents() {
        let statics = table(&[("oki irawan", "august 2025", 105_000_000)]);
        let settings = table(&[("NATIONAL", "august 2025", 999)]);

        for month in ["13", "0", "abc", ""] {
            assert_eq!(resolve_goal("oki irawan", month, "2025", Some(&settings), &statics), 0);
        }
    }

    #[test]
    fn static_national_is_the_last_resort_before_zero() {
        let statics = table(&[("national", "august 2025", 253_000_000)]);

        assert_eq!(resolve_goal("someone new", "8", "2025", None, &statics), 253_000_000);
        assert_eq!(resolve_goal("someone new", "9", "2025", None, &statics), 0);
    }

    #[test]
    fn trace_records_attempted_stages_in_precedence_order() {
        let statics = table(&[("oki irawan", "august 2025", 105_000_000)]);
        let settings = table(&[("fendi", "august 2025", 80_000_000)]);

        let resolution =
            resolve_goal_with_trace("oki irawan", "08", "2025", Some(&settings), &statics);

        assert_eq!(resolution.amount, 105_000_000);
        assert_eq!(resolution.matched_stage, Some(ResolutionStage::StaticAgent));
        let stages: Vec<_> = resolution.trace.steps.iter().map(|step| step.stage).collect();
        assert_eq!(
            stages,
            vec![
                ResolutionStage::SettingsAgent,
                ResolutionStage::SettingsNational,
                ResolutionStage::StaticAgent,
            ]
        );
        assert_eq!(resolution.trace.period_label.as_deref(), Some("august 2025"));
    }

    #[test]
    fn trace_skips_settings_stages_when_settings_are_absent() {
        let statics = GoalTable::new();
        let resolution = resolve_goal_with_trace("fendi", "7", "2025", None, &statics);

        assert_eq!(resolution.amount, 0);
        assert_eq!(resolution.matched_stage, None);
        let stages: Vec<_> = resolution.trace.steps.iter().map(|step| step.stage).collect();
        assert_eq!(stages, vec![ResolutionStage::StaticAgent, ResolutionStage::StaticNational]);
    }

    #[test]
    fn invalid_month_leaves_no_period_label_in_the_trace() {
        let statics = GoalTable::new();
        let resolution = resolve_goal_with_trace("fendi", "13", "2025", None, &statics);

        assert_eq!(resolution.amount, 0);
        assert_eq!(resolution.trace.period_label, None);
        assert!(resolution.trace.steps.is_empty());
    }

    #[test]
    fn chart_goals_without_settings_is_an_empty_mapping() {
        assert!(chart_goals("oki irawan", None).is_empty());
    }

    #[test]
    fn chart_goals_prefers_the_agent_series_over_national() {
        let settings = table(&[
            ("Oki irawan", "July 2025", 1),
            ("Oki irawan", "August 2025", 2),
            ("NATIONAL", "July 2025", 100),
        ]);

        let series = chart_goals("OKI IRAWAN", Some(&settings));
        assert_eq!(series.len(), 2);
        assert_eq!(series.get("july 2025"), Some(&1));
        assert_eq!(series.get("august 2025"), Some(&2));
    }

    #[test]
    fn chart_goals_falls_back_to_national_but_never_to_static_data() {
        let settings = table(&[("NATIONAL", "July 2025", 100)]);

        let series = chart_goals("someone new", Some(&settings));
        assert_eq!(series.get("july 2025"), Some(&100));

        let empty_settings = GoalTable::new();
        assert!(chart_goals("someone new", Some(&empty_settings)).is_empty());
    }
}
