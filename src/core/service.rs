//! Mutations of the member collection expressed over the three store
//! operations. Edits and deletes are realized by rewriting the whole
//! collection through `replace_all`.

use log::{
    error,
    info,
    warn,
};

use super::{
    attachment::Attachment,
    validation::validate_member,
    AedisError,
    Member,
};
use crate::store::{
    ApiResponse,
    MemberStore,
};

/// Collection with `draft` written over the record matching `original`.
///
/// The pending upload, if any, is embedded on the matched record only. Every
/// record matching `original` is rewritten when duplicates share a cedula and
/// carry no id.
pub fn apply_update(
    members: &[Member],
    original: &Member,
    draft: &Member,
    attachment: Option<&Attachment>,
) -> Result<Vec<Member>, AedisError> {
    if !members.iter().any(|member| member.same_record(original)) {
        return Err(AedisError::MemberNotFound { cedula: original.cedula.clone() });
    }

    let updated = members
        .iter()
        .map(|member| {
            if !member.same_record(original) {
                return member.clone();
            }
            let mut replacement = draft.clone();
            if replacement.id.is_none() {
                replacement.id = member.id.clone();
            }
            replacement.clear_upload();
            if let Some(attachment) = attachment {
                attachment.attach_to(&mut replacement);
            }
            replacement
        })
        .collect();
    Ok(updated)
}

/// Collection without the records whose trimmed cedula equals `cedula`.
pub fn remove_by_cedula(members: &[Member], cedula: &str) -> Result<Vec<Member>, AedisError> {
    let remaining: Vec<Member> =
        members.iter().filter(|member| !member.cedula_matches(cedula)).cloned().collect();

    if remaining.len() == members.len() {
        return Err(AedisError::MemberNotFound { cedula: cedula.trim().to_string() });
    }
    if members.len() - remaining.len() > 1 {
        warn!(
            "Cedula '{}' matched {} records, all of them are removed",
            cedula.trim(),
            members.len() - remaining.len()
        );
    }
    Ok(remaining)
}

pub struct MemberService<S> {
    store: S,
}

impl<S: MemberStore> MemberService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load(&self) -> Result<Vec<Member>, AedisError> {
        self.store.list().await.inspect_err(|e| error!("Loading members failed: {}", e))
    }

    /// Validates, embeds the upload and appends the record. Validation
    /// failures never reach the store.
    pub async fn create(
        &self,
        draft: Member,
        attachment: Option<Attachment>,
    ) -> Result<ApiResponse, AedisError> {
        validate_member(&draft)?;

        let mut member = draft;
        member.clear_upload();
        if let Some(attachment) = &attachment {
            attachment.attach_to(&mut member);
        }

        info!("Registering member {}", member.cedula);
        self.store
            .create(member)
            .await
            .and_then(ApiResponse::into_result)
            .inspect_err(|e| error!("Creating member failed: {}", e))
    }

    pub async fn update(
        &self,
        members: &[Member],
        original: &Member,
        draft: Member,
        attachment: Option<Attachment>,
    ) -> Result<ApiResponse, AedisError> {
        validate_member(&draft)?;
        let updated = apply_update(members, original, &draft, attachment.as_ref())?;

        info!("Updating member {} ({} records synced)", draft.cedula, updated.len());
        self.store
            .replace_all(updated)
            .await
            .and_then(ApiResponse::into_result)
            .inspect_err(|e| error!("Updating member failed: {}", e))
    }

    /// Removes the matching records and syncs what remains. An unmatched
    /// cedula fails before any store call.
    pub async fn delete(&self, members: &[Member], cedula: &str) -> Result<ApiResponse, AedisError> {
        let remaining = remove_by_cedula(members, cedula)?;

        info!("Deleting member {} ({} records remain)", cedula.trim(), remaining.len());
        self.store
            .replace_all(remaining)
            .await
            .and_then(ApiResponse::into_result)
            .inspect_err(|e| error!("Deleting member failed: {}", e))
    }

    /// Confirmed delete: sync the collection without `cedula`, then reload
    /// from the store whatever the sync outcome was.
    pub async fn delete_and_reload(
        &self,
        members: &[Member],
        cedula: &str,
    ) -> (Result<ApiResponse, AedisError>, Result<Vec<Member>, AedisError>) {
        let synced = self.delete(members, cedula).await;
        if let Err(e) = &synced {
            warn!("Delete of {} did not sync, reloading anyway: {}", cedula.trim(), e);
        }
        (synced, self.load().await)
    }
}
