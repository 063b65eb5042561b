use std::sync::{
    atomic::{
        AtomicUsize,
        Ordering,
    },
    Mutex,
    MutexGuard,
};

use super::{
    ApiResponse,
    MemberStore,
};
use crate::core::{
    AedisError,
    Member,
};

/// How the next call should fail, for exercising error paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMode {
    Network,
    Remote(String),
}

/// Store kept in process memory. Records every call so callers can assert
/// that an operation never reached the backend.
#[derive(Default)]
pub struct InMemoryStore {
    members: Mutex<Vec<Member>>,
    failure: Mutex<Option<FailureMode>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    replace_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(members: Vec<Member>) -> Self {
        let next_id = members.len();
        Self { members: Mutex::new(members), next_id: AtomicUsize::new(next_id), ..Default::default() }
    }

    /// Every following call fails this way until cleared.
    pub fn fail_with(&self, mode: Option<FailureMode>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = mode;
        }
    }

    pub fn snapshot(&self) -> Vec<Member> {
        self.members.lock().map(|members| members.clone()).unwrap_or_default()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn replace_calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }

    fn current_failure(&self) -> Option<FailureMode> {
        self.failure.lock().map(|f| f.clone()).unwrap_or(None)
    }

    fn network_error() -> AedisError {
        AedisError::Network { status: 503, url: "memory://members".to_string() }
    }

    fn lock_members(&self) -> Result<MutexGuard<'_, Vec<Member>>, AedisError> {
        self.members.lock().map_err(|_| AedisError::Custom("member store lock poisoned".to_string()))
    }

    /// Reply a write would get, or the transport error it would hit.
    fn write_reply(&self, accepted: &str) -> Result<ApiResponse, AedisError> {
        match self.current_failure() {
            Some(FailureMode::Network) => Err(Self::network_error()),
            Some(FailureMode::Remote(message)) => Ok(ApiResponse::failure(message)),
            None => Ok(ApiResponse::success(accepted)),
        }
    }
}

impl MemberStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Member>, AedisError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.current_failure() {
            Some(FailureMode::Network) => Err(Self::network_error()),
            Some(FailureMode::Remote(message)) => Err(AedisError::Remote(message)),
            None => Ok(self.lock_members()?.clone()),
        }
    }

    async fn create(&self, mut member: Member) -> Result<ApiResponse, AedisError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.write_reply("Socio creado")?;
        if !reply.is_success() {
            return Ok(reply);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        member.id = Some(id.to_string());
        if let Some(name) = member.file_name.take() {
            member.link_cedula_digital = Some(format!("memory://uploads/{name}"));
        }
        member.clear_upload();
        self.lock_members()?.push(member);
        Ok(reply)
    }

    async fn replace_all(&self, members: Vec<Member>) -> Result<ApiResponse, AedisError> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.write_reply("Sincronizado")?;
        if !reply.is_success() {
            return Ok(reply);
        }

        let mut stored = self.lock_members()?;
        *stored = members
            .into_iter()
            .map(|mut member| {
                if let Some(name) = member.file_name.take() {
                    member.link_cedula_digital = Some(format!("memory://uploads/{name}"));
                }
                member.clear_upload();
                member
            })
            .collect();
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id_and_link() {
        let store = InMemoryStore::new(Vec::new());
        let member = Member {
            cedula: "0912345678".to_string(),
            file_data: Some("data:image/png;base64,AQID".to_string()),
            file_name: Some("scan.png".to_string()),
            ..Member::new_draft()
        };

        let reply = store.create(member).await.unwrap();
        assert!(reply.is_success());

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.as_deref(), Some("1"));
        assert_eq!(stored[0].link_cedula_digital.as_deref(), Some("memory://uploads/scan.png"));
        assert!(stored[0].file_data.is_none());
        assert_eq!(store.create_calls(), 1);
        assert_eq!(store.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_modes() {
        let store = InMemoryStore::new(vec![Member::new_draft()]);

        store.fail_with(Some(FailureMode::Network));
        assert!(store.list().await.unwrap_err().is_network());

        store.fail_with(Some(FailureMode::Remote("bloqueado".to_string())));
        let reply = store.replace_all(Vec::new()).await.unwrap();
        assert!(!reply.is_success());
        assert_eq!(store.snapshot().len(), 1);

        store.fail_with(None);
        store.replace_all(Vec::new()).await.unwrap();
        assert!(store.snapshot().is_empty());
        assert_eq!(store.replace_calls(), 2);
    }
}
