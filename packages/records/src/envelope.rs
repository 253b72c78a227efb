//! # Response envelope
//!
//! Every write call (`create`, `update`, `delete`) answers with the same wrapper:
//!
//! ```json
//! {"status": "success", "data": "user updated", "record": {...}, "id": 7}
//! ```
//!
//! Only `status == "success"` makes `record` and `id` trustworthy. The live API
//! writes the keys Go-style (`Status`, `Data`, `User`, `UserID`); those decode
//! through serde aliases into the same struct.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::models::{Record, RecordId};

pub const STATUS_SUCCESS: &str = "success";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(alias = "Status")]
    pub status: String,
    /// Diagnostic payload, usually a sentence such as `"user created"`.
    #[serde(default, alias = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, alias = "User", skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
    #[serde(default, alias = "UserID", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl ResponseEnvelope {
    pub fn success(data: &str) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(serde_json::Value::String(data.to_string())),
            record: None,
            id: None,
        }
    }

    pub fn failure(status: &str, data: &str) -> Self {
        Self {
            status: status.to_string(),
            data: Some(serde_json::Value::String(data.to_string())),
            record: None,
            id: None,
        }
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.record = Some(record);
        self
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// The diagnostic payload as display text.
    pub fn data_text(&self) -> Option<String> {
        match &self.data {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// "{status} because {data}", or just the status when there is no payload.
    pub fn failure_message(&self) -> String {
        let status = if self.status.is_empty() {
            "failed"
        } else {
            self.status.as_str()
        };
        match self.data_text() {
            Some(data) => format!("{status} because {data}"),
            None => status.to_string(),
        }
    }

    /// Keep the envelope only if the server confirmed success.
    pub fn into_result(self) -> Result<Self, ClientError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Server(self.failure_message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_lowercase_envelope() {
        let env: ResponseEnvelope = serde_json::from_str(
            r#"{"status":"success","data":"user updated","record":{"id":7,"name":"Ann"}}"#,
        )
        .unwrap();
        assert!(env.is_success());
        assert_eq!(
            env.record,
            Some(Record::with_id(RecordId(7)).with("name", "Ann"))
        );
        assert_eq!(env.id, None);
    }

    #[test]
    fn test_go_cased_keys_decode_the_same() {
        let go: ResponseEnvelope =
            serde_json::from_str(r#"{"Status":"success","Data":"user created","UserID":12}"#)
                .unwrap();
        let lower: ResponseEnvelope =
            serde_json::from_str(r#"{"status":"success","data":"user created","id":12}"#)
                .unwrap();
        assert_eq!(go, lower);
        assert_eq!(go.id, Some(RecordId(12)));

        let updated: ResponseEnvelope = serde_json::from_str(
            r#"{"Status":"success","Data":"user updated","User":{"id":4,"age":40}}"#,
        )
        .unwrap();
        assert_eq!(updated.record.unwrap().get("age").unwrap().as_int(), Some(40));
    }

    #[test]
    fn test_failure_message_includes_data() {
        let env: ResponseEnvelope =
            serde_json::from_str(r#"{"status":"error","data":"validation failed"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.failure_message(), "error because validation failed");
        assert_eq!(
            env.into_result(),
            Err(ClientError::Server("error because validation failed".into()))
        );
    }

    #[test]
    fn test_failure_message_without_payload() {
        let env: ResponseEnvelope = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert_eq!(env.failure_message(), "failed");

        let structured: ResponseEnvelope =
            serde_json::from_str(r#"{"status":"error","data":{"field":"email"}}"#).unwrap();
        assert_eq!(structured.failure_message(), r#"error because {"field":"email"}"#);
    }
}
