//! Scene object commands.

use serde_json::json;
use tracing::info;

use super::host::EditorHost;
use super::params::{validate_identifier, Params};
use super::types::{data_object, ResultData};
use crate::error::BridgeError;
use crate::scene::BehaviorDescriptor;

/// Attach a declared behavior to a named scene object.
///
/// Behaviors come from the startup-populated registry. A `behaviorPath`
/// pointing at an existing source asset registers an ad-hoc descriptor for
/// names the host did not declare.
pub(super) fn attach_behavior(
    host: &mut EditorHost,
    params: &Params,
) -> Result<ResultData, BridgeError> {
    let target = params.require_str("targetName")?;
    let behavior = params.require_str("behaviorName")?;
    validate_identifier(behavior)?;
    let behavior_path = params.optional_str("behaviorPath")?;

    if !host.scene.exists(target) {
        return Err(BridgeError::NotFound(format!("object '{target}'")));
    }

    let descriptor = match host.behaviors.lookup(behavior) {
        Some(descriptor) => descriptor.clone(),
        None => {
            let Some(path) = behavior_path else {
                return Err(BridgeError::NotFound(format!(
                    "behavior '{behavior}' (not registered and no behaviorPath given)"
                )));
            };
            let normalized = host.asset_root().normalize(path);
            if !host.fs.exists(&normalized.logical) {
                return Err(BridgeError::NotFound(format!(
                    "behavior source '{}'",
                    normalized.logical
                )));
            }
            let descriptor = BehaviorDescriptor {
                component_name: behavior.to_string(),
                source_path: Some(normalized.logical),
            };
            host.behaviors.register(behavior, descriptor.clone());
            descriptor
        }
    };

    host.scene.attach_component(target, &descriptor.component_name)?;
    info!(object = %target, component = %descriptor.component_name, "attached behavior");

    Ok(data_object(json!({
        "componentName": descriptor.component_name,
    })))
}
