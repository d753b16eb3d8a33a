// Call Queue Domain Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Queue identifier (used verbatim in resource paths)
pub type QueueId = String;

/// One entry of the call-queue listing (`records` collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSummary {
    pub id: QueueId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        rename = "extensionNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub extension_number: Option<String>,

    /// Remaining fields, kept as returned by the platform
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueueSummary {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            extension_number: None,
            extra: Map::new(),
        }
    }
}

/// Listing response body: `{ "records": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct QueueList {
    pub records: Vec<QueueSummary>,
}

/// Full configuration of a single call queue
///
/// Only `editableMemberStatus` is interpreted. It is kept as a raw JSON value
/// so that a missing, null or oddly-typed flag never turns into a decode
/// failure: anything other than the boolean `false` means "leave it alone".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    pub id: QueueId,

    #[serde(
        rename = "editableMemberStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub editable_member_status: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueueConfig {
    pub fn new(id: impl Into<String>, editable_member_status: Option<bool>) -> Self {
        Self {
            id: id.into(),
            editable_member_status: editable_member_status.map(Value::Bool),
            extra: Map::new(),
        }
    }

    /// True only when the flag is exactly the JSON boolean `false`
    pub fn needs_correction(&self) -> bool {
        matches!(self.editable_member_status, Some(Value::Bool(false)))
    }
}

/// Body of the corrective update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueUpdate {
    #[serde(rename = "editableMemberStatus")]
    pub editable_member_status: bool,
}

impl QueueUpdate {
    /// The only update this tool ever issues
    pub fn enable_editable_member_status() -> Self {
        Self {
            editable_member_status: true,
        }
    }
}
