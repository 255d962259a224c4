//! Practice session store port

use async_trait::async_trait;
use domain::{PracticeSession, SessionId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for keeping per-caller practice sessions
///
/// Implementations may expire idle sessions; an expired session loads as
/// `None`, the same as one that never existed.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PracticeSessionStore: Send + Sync {
    /// Load a session by id
    async fn load(&self, id: &SessionId) -> Result<Option<PracticeSession>, ApplicationError>;

    /// Insert or replace a session
    async fn save(&self, session: &PracticeSession) -> Result<(), ApplicationError>;

    /// Delete a session; removing an unknown id is not an error
    async fn remove(&self, id: &SessionId) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_load_missing_session() {
        let mut mock = MockPracticeSessionStore::new();
        mock.expect_load().returning(|_| Ok(None));

        let loaded = mock.load(&SessionId::new()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn mock_save_receives_session() {
        let id = SessionId::new();
        let mut mock = MockPracticeSessionStore::new();
        mock.expect_save()
            .withf(move |s| s.id() == id)
            .times(1)
            .returning(|_| Ok(()));

        mock.save(&PracticeSession::new(id)).await.unwrap();
    }
}
