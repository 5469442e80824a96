use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role attached to a dashboard account. Admin and manager accounts see
/// every agent; agent accounts are pinned to their own data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Agent,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("unsupported role `{0}` (expected admin|manager|agent)")]
    UnknownRole(String),
    #[error("scope for `{0}` has role `agent` but no agent name")]
    MissingAgent(String),
}

impl std::str::FromStr for Role {
    type Err = ScopeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "agent" => Ok(Self::Agent),
            other => Err(ScopeError::UnknownRole(other.to_string())),
        }
    }
}

/// What one account is allowed to see. `agent` is only meaningful for
/// agent-restricted accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentScope {
    pub role: Role,
    #[serde(default)]
    pub agent: Option<String>,
}

/// Which agent's rows an account may read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentVisibility {
    /// Admin/manager scope: no agent filter applied.
    All,
    /// Agent scope: only this agent's rows.
    Only(String),
    /// Account not present in the scope map. Callers render no data for
    /// it; an unmapped account is not an error.
    Unknown,
}

/// Explicit account -> scope mapping, loaded from configuration and passed
/// to whatever needs to filter data. Account keys match case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    #[serde(default)]
    accounts: BTreeMap<String, AgentScope>,
}

impl ScopeConfig {
    pub fn new(accounts: BTreeMap<String, AgentScope>) -> Self {
        Self { accounts }
    }

    pub fn scope_for(&self, account: &str) -> Option<&AgentScope> {
        let wanted = account.trim().to_lowercase();
        self.accounts
            .iter()
            .find(|(key, _)| key.trim().to_lowercase() == wanted)
            .map(|(_, scope)| scope)
    }

    pub fn visible_agent(&self, account: &str) -> AgentVisibility {
        match self.scope_for(account) {
            None => AgentVisibility::Unknown,
            Some(scope) => match scope.role {
                Role::Admin | Role::Manager => AgentVisibility::All,
                Role::Agent => match &scope.agent {
                    Some(agent) => AgentVisibility::Only(agent.clone()),
                    None => AgentVisibility::Unknown,
                },
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Rejects agent-role entries with no agent name. Run at config load.
    pub fn validate(&self) -> Result<(), ScopeError> {
        for (account, scope) in &self.accounts {
            if scope.role == Role::Agent && scope.agent.as_deref().map_or(true, str::is_empty) {
                return Err(ScopeError::MissingAgent(account.clone()));
            }
        }
        Ok(())
    }
}
