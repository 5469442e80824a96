pub mod agents;
pub mod chart;
pub mod config;
pub mod goal;

use std::path::PathBuf;

use distribusi_core::{load_settings, AppConfig, ConfigOverrides, LoadOptions, SettingsDocument};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>, data: Option<Value>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Loads config (exit 2 on validation failure) and the settings override
/// document from the configured path. A missing override file is a normal
/// "no overrides" state; an unreadable or unparsable one is exit 3.
pub(crate) fn load_settings_document(
    command: &str,
    settings_path: Option<PathBuf>,
) -> Result<Option<SettingsDocument>, CommandResult> {
    let options = LoadOptions {
        overrides: ConfigOverrides { settings_path, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };

    let config = AppConfig::load(options).map_err(|error| {
        CommandResult::failure(command, "config_validation", error.to_string(), 2)
    })?;

    if !config.settings.path.exists() {
        return Ok(None);
    }

    load_settings(&config.settings.path)
        .map(Some)
        .map_err(|error| {
            CommandResult::failure(command, "settings_ingestion", error.to_string(), 3)
        })
}
