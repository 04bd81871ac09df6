//! Command-line arguments for `containerctl`.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

use crate::containers::{self, json_type, ContainerIntent, ContainerUpdate, DecodeError, FieldMap};

/// Errors turning command-line text into an intent.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid JSON argument: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

#[derive(Debug, Parser)]
#[command(name = "containerctl")]
#[command(version, about = "Build container intents and print them as JSON", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// JSON arguments that fail to parse are taken as plain strings. Quote ids
/// that look like numbers (`'"42"'`) to keep them strings.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set up a container with initial meta and UI fields
    Setup {
        container_id: String,
        /// Meta fields as a JSON object
        #[arg(long, default_value = "{}")]
        meta: String,
        /// UI fields as a JSON object
        #[arg(long, default_value = "{}")]
        ui: String,
    },

    /// Prepare a container for removal
    Teardown { container_id: String },

    /// Update meta fields: either <MAPPING-JSON> or <ID> <KEY> <VALUE>
    SetMeta {
        #[arg(required = true, num_args = 1.., value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Update UI fields: either <MAPPING-JSON> or <ID> <KEY> <VALUE>
    SetUi {
        #[arg(required = true, num_args = 1.., value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Start a visibility check for a container
    CheckVisibility { container_id: String },

    /// Add a container record (JSON)
    Add { container: String },

    /// Remove a container
    Remove { container_id: String },

    /// Hand over a container in raw string form
    Receive { raw: String },

    /// Validate every container
    ValidateAll { event: String },

    /// Validate one container
    Validate { container_id: String, event: String },

    /// Notify a form submit
    Submit { event: String },

    /// List every intent kind string
    Kinds,
}

impl Command {
    /// Build the intent this command describes. `Kinds` builds none.
    pub fn into_intent(self) -> Result<Option<ContainerIntent>, CliError> {
        let intent = match self {
            Command::Setup {
                container_id,
                meta,
                ui,
            } => containers::setup_container(container_id, parse_fields(&meta)?, parse_fields(&ui)?),
            Command::Teardown { container_id } => containers::teardown_container(container_id),
            Command::SetMeta { args } => {
                containers::set_container_meta(update_from_args(&args)?)
            }
            Command::SetUi { args } => {
                containers::set_container_ui(update_from_args(&args)?)
            }
            Command::CheckVisibility { container_id } => {
                containers::check_visibility(container_id)
            }
            Command::Add { container } => containers::add_container(parse_lenient(&container)),
            Command::Remove { container_id } => containers::remove_container(container_id),
            Command::Receive { raw } => containers::receive_container(raw),
            Command::ValidateAll { event } => {
                containers::validate_all_containers(parse_lenient(&event))
            }
            Command::Validate {
                container_id,
                event,
            } => containers::validate_container(container_id, parse_lenient(&event)),
            Command::Submit { event } => containers::submit_form(parse_lenient(&event)),
            Command::Kinds => return Ok(None),
        };
        Ok(Some(intent))
    }
}

/// Parse `raw` as JSON; text that is not valid JSON is kept as a string.
pub fn parse_lenient(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parse `raw` as a JSON object.
pub fn parse_fields(raw: &str) -> Result<FieldMap, CliError> {
    match serde_json::from_str::<Value>(raw).map_err(|source| CliError::Json { source })? {
        Value::Object(fields) => Ok(fields),
        other => Err(CliError::NotAnObject {
            found: json_type(&other),
        }),
    }
}

/// Parse each argument leniently, then apply the untyped call-form rule.
pub fn update_from_args(args: &[String]) -> Result<ContainerUpdate, DecodeError> {
    let values: Vec<Value> = args.iter().map(|arg| parse_lenient(arg)).collect();
    ContainerUpdate::from_args(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{ContainerMapping, IntentKind};
    use serde_json::json;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("containerctl").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn set_meta_shorthand_builds_single_entry() {
        let intent = parse(&["set-meta", "c1", "label", "x"])
            .command
            .into_intent()
            .unwrap()
            .unwrap();
        assert_eq!(
            intent,
            ContainerIntent::SetMeta(ContainerMapping::single("c1", "label", "x"))
        );
    }

    #[test]
    fn setup_defaults_to_empty_fields() {
        let intent = parse(&["setup", "c1"]).command.into_intent().unwrap().unwrap();
        let value = serde_json::to_value(&intent).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "containers/SETUP_CONTAINER",
                "payload": { "containerId": "c1", "meta": {}, "ui": {} }
            })
        );
    }

    #[test]
    fn setup_rejects_non_object_meta() {
        let result = parse(&["setup", "c1", "--meta", "[1]"]).command.into_intent();
        assert!(matches!(result, Err(CliError::NotAnObject { found: "an array" })));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = parse(&["kinds", "--compact"]);
        assert!(args.compact);
        assert!(args.command.into_intent().unwrap().is_none());
    }

    #[test]
    fn validate_keeps_event_json() {
        let intent = parse(&["validate", "c1", r#"{"type":"blur"}"#])
            .command
            .into_intent()
            .unwrap()
            .unwrap();
        assert_eq!(intent.kind(), IntentKind::ValidateContainer);
    }

    #[test]
    fn set_ui_requires_arguments() {
        let result = Args::try_parse_from(["containerctl", "set-ui"]);
        assert!(result.is_err());
    }

    #[test]
    fn lenient_args_fall_back_to_strings() {
        let args = |raw: &[&str]| raw.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let update = update_from_args(&args(&["c1", "label", "plain text"])).unwrap();
        assert_eq!(update.into_mapping(), ContainerMapping::single("c1", "label", "plain text"));

        let update = update_from_args(&args(&["c1", "count", "4"])).unwrap();
        assert_eq!(update.into_mapping(), ContainerMapping::single("c1", "count", 4));
    }

    #[test]
    fn parse_fields_requires_object() {
        assert_eq!(parse_fields(r#"{"a":1}"#).unwrap().get("a"), Some(&json!(1)));
        assert!(matches!(parse_fields("[]"), Err(CliError::NotAnObject { .. })));
        assert!(matches!(parse_fields("{"), Err(CliError::Json { .. })));
    }
}
