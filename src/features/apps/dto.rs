//! Wire types of the Mattermost Apps protocol, limited to what this app
//! declares and receives. Field names follow the framework's snake_case JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LOCATION_CHANNEL_HEADER: &str = "/channel_header";
pub const LOCATION_COMMAND: &str = "/command";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ActAsBot,
    ActAsUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandLevel {
    All,
    Id,
}

#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub app_id: String,
    pub version: String,
    pub display_name: String,
    pub icon: String,
    pub homepage_url: String,
    pub requested_permissions: Vec<Permission>,
    pub requested_locations: Vec<String>,
    pub http: HttpDeploy,
}

#[derive(Debug, Clone, Serialize)]
pub struct HttpDeploy {
    pub root_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Binding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<Binding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<Form>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Form {
    pub title: String,
    pub icon: String,
    pub fields: Vec<Field>,
    pub submit: Call,
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Call {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<Expand>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Expand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_user: Option<ExpandLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_user_access_token: Option<ExpandLevel>,
}

/// Payload the framework posts when a user submits a form or command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallRequest {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub values: HashMap<String, Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallResponseType {
    Ok,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallResponse {
    #[serde(rename = "type")]
    pub response_type: CallResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CallResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response_type: CallResponseType::Ok,
            text: Some(text.into()),
            data: None,
        }
    }

    pub fn data(data: Value) -> Self {
        Self {
            response_type: CallResponseType::Ok,
            text: None,
            data: Some(data),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            response_type: CallResponseType::Error,
            text: Some(text.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn call_request_tolerates_missing_values() {
        let request: CallRequest =
            serde_json::from_value(json!({ "path": "/send" })).expect("call request");
        assert!(request.values.is_empty());
        assert_eq!(request.path.as_deref(), Some("/send"));
    }

    #[test]
    fn text_response_uses_framework_envelope() {
        let value = serde_json::to_value(CallResponse::text("12:00")).expect("serialise");
        assert_eq!(value, json!({ "type": "ok", "text": "12:00" }));

        let value = serde_json::to_value(CallResponse::error("boom")).expect("serialise");
        assert_eq!(value, json!({ "type": "error", "text": "boom" }));
    }
}
