use crate::core::{
    AedisError,
    Member,
};

/// Error as carried back to the UI thread: the localized message for the
/// notification plus the technical detail behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    pub message: String,
    pub details: String,
}

impl From<AedisError> for TaskFailure {
    fn from(error: AedisError) -> Self {
        Self { message: error.user_message(), details: error.to_string() }
    }
}

pub type TaskOutcome<T> = Result<T, TaskFailure>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    MembersLoaded(TaskOutcome<Vec<Member>>),
    MemberCreated(TaskOutcome<String>),
    MemberUpdated(TaskOutcome<String>),
    /// Sync outcome followed by the reload that always follows a delete.
    MemberDeleted { synced: TaskOutcome<()>, reloaded: TaskOutcome<Vec<Member>> },
    LoadingMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_keeps_both_texts() {
        let failure = TaskFailure::from(AedisError::Remote("Hoja bloqueada".to_string()));
        assert_eq!(failure.message, "El servidor rechazó la operación: Hoja bloqueada");
        assert_eq!(failure.details, "Remote store reported a failure: Hoja bloqueada");
    }
}
