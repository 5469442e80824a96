use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::goal::GoalAmount;

/// Reserved bucket used when no agent-specific goal is configured.
/// Source data spells it `"NATIONAL"` (settings) or `"national"` (static);
/// both normalize to this key at ingestion.
pub const NATIONAL_KEY: &str = "national";

/// Agent -> period-label -> goal amount.
///
/// All keys are normalized (trimmed, lowercased) on insert, so lookups are
/// single-shot: the dual exact/case-insensitive and capitalized/lowercase
/// probing of the legacy dashboard collapses into one canonical read.
/// The resolver only ever reads from a built table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTable {
    entries: BTreeMap<String, BTreeMap<String, GoalAmount>>,
}

pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl GoalTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, agent: &str, period_label: &str, amount: GoalAmount) {
        self.entries
            .entry(normalize_key(agent))
            .or_default()
            .insert(normalize_key(period_label), amount);
    }

    pub fn get(&self, agent: &str, period_label: &str) -> Option<GoalAmount> {
        self.entries.get(&normalize_key(agent))?.get(&normalize_key(period_label)).copied()
    }

    /// The full period-label -> amount mapping for one agent.
    pub fn agent_months(&self, agent: &str) -> Option<&BTreeMap<String, GoalAmount>> {
        self.entries.get(&normalize_key(agent))
    }

    pub fn contains_agent(&self, agent: &str) -> bool {
        self.entries.contains_key(&normalize_key(agent))
    }

    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
