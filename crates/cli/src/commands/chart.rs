use std::path::PathBuf;

use distribusi_core::{chart_goals, GoalKind};
use serde_json::json;

use super::{load_settings_document, CommandResult};

#[derive(Debug, Clone)]
pub struct ChartArgs {
    pub agent: String,
    pub kind: String,
    pub settings_path: Option<PathBuf>,
}

pub fn run(args: ChartArgs) -> CommandResult {
    let kind: GoalKind = match args.kind.parse() {
        Ok(kind) => kind,
        Err(error) => {
            return CommandResult::failure("chart", "invalid_arguments", error.to_string(), 2)
        }
    };

    let settings = match load_settings_document("chart", args.settings_path) {
        Ok(settings) => settings,
        Err(failure) => return failure,
    };

    // Chart series come from the override document alone; static fallback
    // data is deliberately not consulted here.
    let settings_table = settings.as_ref().and_then(|document| document.table(kind));
    let series = chart_goals(&args.agent, settings_table.as_ref());

    let message = if series.is_empty() {
        format!("no configured {} goal series for {}", kind.as_str(), args.agent)
    } else {
        format!("{} goal series for {}: {} period(s)", kind.as_str(), args.agent, series.len())
    };

    let data = json!({
        "agent": args.agent,
        "kind": kind.as_str(),
        "series": series,
    });

    CommandResult::success("chart", message, Some(data))
}
