use std::path::PathBuf;

use chrono::{Datelike, Local};
use distribusi_core::{
    resolve_goal_with_trace, static_cashin_goals, static_profit_goals, GoalKind,
};
use serde_json::json;

use super::{load_settings_document, CommandResult};

#[derive(Debug, Clone)]
pub struct GoalArgs {
    pub agent: String,
    pub month: Option<String>,
    pub year: Option<String>,
    pub kind: String,
    pub settings_path: Option<PathBuf>,
    pub trace: bool,
}

pub fn run(args: GoalArgs) -> CommandResult {
    let kind: GoalKind = match args.kind.parse() {
        Ok(kind) => kind,
        Err(error) => {
            return CommandResult::failure("goal", "invalid_arguments", error.to_string(), 2)
        }
    };

    let settings = match load_settings_document("goal", args.settings_path) {
        Ok(settings) => settings,
        Err(failure) => return failure,
    };

    let now = Local::now();
    let month = args.month.unwrap_or_else(|| now.month().to_string());
    let year = args.year.unwrap_or_else(|| now.year().to_string());

    let settings_table = settings.as_ref().and_then(|document| document.table(kind));
    let static_table = match kind {
        GoalKind::Profit => static_profit_goals(),
        GoalKind::CashIn => static_cashin_goals(),
    };

    let resolution = resolve_goal_with_trace(
        &args.agent,
        &month,
        &year,
        settings_table.as_ref(),
        &static_table,
    );

    let message = match (&resolution.trace.period_label, resolution.matched_stage) {
        (None, _) => format!("invalid month `{month}`; no goal configured"),
        (Some(label), Some(stage)) => format!(
            "{} goal for {} in {}: {} (source: {})",
            kind.as_str(),
            args.agent,
            label,
            resolution.amount,
            stage.as_str()
        ),
        (Some(label), None) => {
            format!("no {} goal configured for {} in {}", kind.as_str(), args.agent, label)
        }
    };

    let mut data = json!({
        "agent": args.agent,
        "kind": kind.as_str(),
        "month": month,
        "year": year,
        "period": resolution.trace.period_label.clone(),
        "amount": resolution.amount,
        "matched_stage": resolution.matched_stage.map(|stage| stage.as_str()),
    });
    if args.trace {
        data["trace"] = serde_json::to_value(&resolution.trace).unwrap_or_default();
    }

    CommandResult::success("goal", message, Some(data))
}
