pub mod config;
pub mod domain;
pub mod goals;
pub mod scope;

pub use config::{
    AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat, LoggingConfig,
    SettingsSourceConfig,
};
pub use domain::goal::{GoalAmount, GoalKind};
pub use domain::period::{Month, Period};
pub use goals::resolver::{
    chart_goals, resolve_goal, resolve_goal_with_trace, GoalResolution, ResolutionStage,
    ResolutionTrace, TraceStep,
};
pub use goals::settings::{load_settings, SettingsDocument, SettingsError};
pub use goals::static_tables::{static_cashin_goals, static_profit_goals};
pub use goals::table::{GoalTable, NATIONAL_KEY};
pub use scope::{AgentScope, AgentVisibility, Role, ScopeConfig, ScopeError};
