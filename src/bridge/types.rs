use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BridgeError;

pub type ParamBag = Map<String, Value>;
pub type ResultData = Map<String, Value>;

/// One command as submitted by the external controller. Immutable once
/// dispatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub name: String,
    #[serde(default)]
    pub params: ParamBag,
}

impl CommandRequest {
    pub fn new(name: impl Into<String>, params: ParamBag) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// The uniform envelope every command answers with: exactly one of success
/// or failure, never an unhandled fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResultEnvelope {
    Success {
        data: ResultData,
    },
    Failure {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

/// Build a result payload from a `json!` object literal. Non-object values
/// are wrapped under a `value` key rather than being lost.
pub(crate) fn data_object(value: Value) -> ResultData {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = ResultData::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}

impl ResultEnvelope {
    pub fn success(data: ResultData) -> Self {
        ResultEnvelope::Success { data }
    }

    pub fn failure(err: &BridgeError) -> Self {
        ResultEnvelope::Failure {
            message: err.to_string(),
            detail: Some(err.kind().to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultEnvelope::Success { .. })
    }

    /// Success payload, if this is a success.
    pub fn data(&self) -> Option<&ResultData> {
        match self {
            ResultEnvelope::Success { data } => Some(data),
            ResultEnvelope::Failure { .. } => None,
        }
    }

    /// Failure detail (the stable error kind), if this is a failure.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ResultEnvelope::Success { .. } => None,
            ResultEnvelope::Failure { detail, .. } => detail.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_tagged() {
        let mut data = ResultData::new();
        data.insert("path".to_string(), Value::from("Assets/a.txt"));
        let json = serde_json::to_value(ResultEnvelope::success(data)).expect("serialize");
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["path"], "Assets/a.txt");

        let err = BridgeError::NotFound("object 'Cube'".to_string());
        let json = serde_json::to_value(ResultEnvelope::failure(&err)).expect("serialize");
        assert_eq!(json["status"], "failure");
        assert_eq!(json["detail"], "not_found");
        assert!(json["message"].as_str().expect("message").contains("Cube"));
    }

    #[test]
    fn request_params_default_to_empty() {
        let req: CommandRequest =
            serde_json::from_value(serde_json::json!({ "name": "list-text-assets" }))
                .expect("deserialize");
        assert_eq!(req.name, "list-text-assets");
        assert!(req.params.is_empty());
    }
}
