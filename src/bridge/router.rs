use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use super::handlers_materials;
use super::handlers_scene;
use super::handlers_text;
use super::host::EditorHost;
use super::params::Params;
use super::types::{CommandRequest, ResultData, ResultEnvelope};
use crate::error::BridgeError;

pub(super) type Handler = fn(&mut EditorHost, &Params) -> Result<ResultData, BridgeError>;

/// The command registry. Fixed at startup; dispatch is a name lookup.
static COMMANDS: &[(&str, Handler)] = &[
    ("view-text-asset", handlers_text::view_text_asset),
    ("create-text-asset", handlers_text::create_text_asset),
    ("update-text-asset", handlers_text::update_text_asset),
    ("list-text-assets", handlers_text::list_text_assets),
    ("import-asset", handlers_text::import_asset),
    ("attach-behavior", handlers_scene::attach_behavior),
    ("set-material", handlers_materials::set_material),
    ("set-material-properties", handlers_materials::set_material_properties),
    ("set-material-texture", handlers_materials::set_material_texture),
    ("create-material", handlers_materials::create_material),
    (
        "create-material-from-template",
        handlers_materials::create_material_from_template,
    ),
    ("list-assets", handlers_materials::list_assets),
    ("list-commands", list_commands),
];

/// Names of every registered command, in registration order.
pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}

fn list_commands(_host: &mut EditorHost, _params: &Params) -> Result<ResultData, BridgeError> {
    let mut data = ResultData::new();
    data.insert(
        "commands".to_string(),
        serde_json::Value::from(command_names()),
    );
    Ok(data)
}

#[derive(Debug, Default)]
pub struct CommandRouter;

impl CommandRouter {
    pub fn new() -> Self {
        Self
    }

    /// Execute one command and always come back with an envelope.
    ///
    /// Handler failures of every class (validation, not-found, I/O, panics)
    /// are converted here; nothing propagates past this boundary.
    pub fn dispatch(&self, host: &mut EditorHost, request: &CommandRequest) -> ResultEnvelope {
        let Some((_, handler)) = COMMANDS.iter().find(|(name, _)| *name == request.name) else {
            let err = BridgeError::UnknownCommand(request.name.clone());
            warn!(command = %request.name, "unknown command");
            return ResultEnvelope::failure(&err);
        };

        debug!(command = %request.name, "dispatching");
        let params = Params::new(&request.params);
        let outcome = catch_unwind(AssertUnwindSafe(|| handler(host, &params)));

        match outcome {
            Ok(Ok(data)) => ResultEnvelope::success(data),
            Ok(Err(err)) => {
                warn!(command = %request.name, error = %err, kind = err.kind(), "command failed");
                ResultEnvelope::failure(&err)
            }
            Err(panic) => {
                let reason = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "handler panicked".to_string());
                let err = BridgeError::Unknown(format!("internal error: {reason}"));
                warn!(command = %request.name, error = %err, "handler panicked");
                ResultEnvelope::failure(&err)
            }
        }
    }
}
