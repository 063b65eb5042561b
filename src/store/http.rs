use log::{
    debug,
    info,
};
use reqwest::{
    header::{
        CONTENT_TYPE,
        USER_AGENT,
    },
    Client,
    Response,
};
use serde_json::{
    json,
    Value,
};

use super::{
    ApiResponse,
    MemberStore,
};
use crate::core::{
    AedisError,
    Member,
};

const AGENT: &str = concat!("aedis/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

// Apps Script endpoints reject CORS-preflighted JSON, so writes are sent as
// plain text carrying a JSON document.
const WRITE_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

pub const ACTION_CREATE: &str = "create";
pub const ACTION_SYNC_ALL: &str = "sync_all";

/// Remote store reached over HTTP at a single endpoint URL.
#[derive(Clone)]
pub struct HttpMemberStore {
    client: Client,
    url: String,
}

impl HttpMemberStore {
    pub fn new(url: impl Into<String>) -> Result<Self, AedisError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AedisError::Custom(format!("HTTP client build failed: {e}")))?;
        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post_action(&self, action: &str, data: Value) -> Result<ApiResponse, AedisError> {
        let body = write_payload(action, data);

        let response = self
            .client
            .post(&self.url)
            .header(USER_AGENT, AGENT)
            .header(CONTENT_TYPE, WRITE_CONTENT_TYPE)
            .body(body.to_string())
            .send()
            .await?;

        ensure_success(&response)?;

        let text = response.text().await?;
        debug!("'{}' answered: {}", action, text);
        let reply: ApiResponse = serde_json::from_str(&text)?;
        Ok(reply)
    }
}

/// `{"action": <action>, "data": <data>}`
pub fn write_payload(action: &str, data: Value) -> Value {
    json!({ "action": action, "data": data })
}

fn ensure_success(response: &Response) -> Result<(), AedisError> {
    if !response.status().is_success() {
        return Err(AedisError::Network {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(())
}

impl MemberStore for HttpMemberStore {
    async fn list(&self) -> Result<Vec<Member>, AedisError> {
        let response = self.client.get(&self.url).header(USER_AGENT, AGENT).send().await?;
        ensure_success(&response)?;

        let text = response.text().await?;
        let members: Vec<Member> = serde_json::from_str(&text)?;
        info!("Fetched {} members", members.len());
        Ok(members)
    }

    async fn create(&self, member: Member) -> Result<ApiResponse, AedisError> {
        info!(
            "Creating member {} (upload: {})",
            member.cedula,
            member.file_name.as_deref().unwrap_or("none")
        );
        let data = serde_json::to_value(&member)?;
        self.post_action(ACTION_CREATE, data).await
    }

    async fn replace_all(&self, members: Vec<Member>) -> Result<ApiResponse, AedisError> {
        info!("Replacing remote collection with {} members", members.len());
        let data = serde_json::to_value(&members)?;
        self.post_action(ACTION_SYNC_ALL, data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attachment::Attachment;

    #[test]
    fn test_create_payload_embeds_upload() {
        let mut member = Member {
            cedula: "0912345678".to_string(),
            nombres_completos: "Ana".to_string(),
            ..Member::new_draft()
        };
        Attachment::from_bytes("cedula.pdf", b"%PDF").attach_to(&mut member);

        let payload = write_payload(ACTION_CREATE, serde_json::to_value(&member).unwrap());
        assert_eq!(payload["action"], "create");
        assert_eq!(payload["data"]["cedula"], "0912345678");
        assert_eq!(payload["data"]["fileName"], "cedula.pdf");
        assert_eq!(payload["data"]["fileData"], "data:application/pdf;base64,JVBERg==");
    }

    #[test]
    fn test_sync_payload_is_array() {
        let members = vec![Member::new_draft(), Member::new_draft()];
        let payload = write_payload(ACTION_SYNC_ALL, serde_json::to_value(&members).unwrap());
        assert_eq!(payload["action"], "sync_all");
        assert_eq!(payload["data"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_store_keeps_url() {
        let store = HttpMemberStore::new("https://example.org/exec").unwrap();
        assert_eq!(store.url(), "https://example.org/exec");
    }
}
