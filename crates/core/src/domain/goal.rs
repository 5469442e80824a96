use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Goal amounts are minor-unit-free IDR integers (no cents).
pub type GoalAmount = i64;

/// Which of the two goal families a lookup targets. Both share one
/// resolution algorithm; only the table literals differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    #[default]
    Profit,
    CashIn,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported goal kind `{0}` (expected profit|cash-in)")]
pub struct ParseGoalKindError(String);

impl GoalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profit => "profit",
            Self::CashIn => "cash_in",
        }
    }
}

impl std::str::FromStr for GoalKind {
    type Err = ParseGoalKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "profit" => Ok(Self::Profit),
            "cash-in" | "cash_in" | "cashin" => Ok(Self::CashIn),
            other => Err(ParseGoalKindError(other.to_string())),
        }
    }
}
