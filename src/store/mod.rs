//! Persistence boundary. The member collection lives in a remote
//! spreadsheet-backed endpoint; everything here treats it as an opaque
//! list/create/replace-all service.

pub mod http;
pub mod memory;

use std::future::Future;

pub use http::HttpMemberStore;
pub use memory::InMemoryStore;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    models::lenient_opt_string,
    AedisError,
    Member,
};

/// Reply to a write action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self { result: Some("success".to_string()), message: Some(message.into()) }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { result: Some("error".to_string()), message: Some(message.into()) }
    }

    /// Anything but an explicit `"error"` result counts as accepted.
    pub fn is_success(&self) -> bool {
        !self.result.as_deref().map_or(false, |result| result.trim().eq_ignore_ascii_case("error"))
    }

    /// Turns a remote-reported failure into [`AedisError::Remote`].
    pub fn into_result(self) -> Result<Self, AedisError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.message.or(self.result).unwrap_or_default();
            Err(AedisError::Remote(message))
        }
    }
}

/// The three operations the remote member collection supports.
pub trait MemberStore {
    /// Full collection, in the backend's order.
    fn list(&self) -> impl Future<Output = Result<Vec<Member>, AedisError>> + Send;

    /// Appends one record. An upload travels in the record's `fileData` and
    /// `fileName` fields.
    fn create(&self, member: Member) -> impl Future<Output = Result<ApiResponse, AedisError>> + Send;

    /// Overwrites the whole remote collection with `members`.
    fn replace_all(
        &self,
        members: Vec<Member>,
    ) -> impl Future<Output = Result<ApiResponse, AedisError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_detection() {
        assert!(ApiResponse::default().is_success());
        assert!(ApiResponse::success("ok").is_success());
        assert!(!ApiResponse::failure("boom").is_success());

        let raw: ApiResponse = serde_json::from_str(r#"{"result":"Error","message":"Hoja bloqueada"}"#).unwrap();
        match raw.into_result() {
            Err(AedisError::Remote(message)) => assert_eq!(message, "Hoja bloqueada"),
            other => panic!("Expected remote failure, got {:?}", other),
        }

        let bare: ApiResponse = serde_json::from_str(r#"{"result":"error"}"#).unwrap();
        assert!(matches!(bare.into_result(), Err(AedisError::Remote(message)) if message == "error"));
    }
}
