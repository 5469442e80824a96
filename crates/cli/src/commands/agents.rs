use std::collections::BTreeMap;
use std::path::PathBuf;

use distribusi_core::{static_profit_goals, GoalKind};
use serde_json::json;

use super::{load_settings_document, CommandResult};

#[derive(Debug, Clone)]
pub struct AgentsArgs {
    pub settings_path: Option<PathBuf>,
}

/// Lists every agent key known to the static fallback tables and the
/// override document, with where each one came from.
pub fn run(args: AgentsArgs) -> CommandResult {
    let settings = match load_settings_document("agents", args.settings_path) {
        Ok(settings) => settings,
        Err(failure) => return failure,
    };

    let mut sources: BTreeMap<String, Vec<&'static str>> = BTreeMap::new();

    // Both static tables cover the same agent set; one read suffices.
    for agent in static_profit_goals().agents() {
        sources.entry(agent.to_string()).or_default().push("static");
    }

    if let Some(document) = &settings {
        let mut from_settings: Vec<String> = Vec::new();
        for kind in [GoalKind::Profit, GoalKind::CashIn] {
            if let Some(table) = document.table(kind) {
                from_settings.extend(table.agents().map(str::to_string));
            }
        }
        from_settings.sort();
        from_settings.dedup();
        for agent in from_settings {
            let entry = sources.entry(agent).or_default();
            if !entry.contains(&"settings") {
                entry.push("settings");
            }
        }
    }

    let listing: Vec<_> = sources
        .iter()
        .map(|(agent, origins)| json!({ "agent": agent, "sources": origins }))
        .collect();

    let message = format!("{} agent(s) known", listing.len());
    CommandResult::success("agents", message, Some(json!(listing)))
}
