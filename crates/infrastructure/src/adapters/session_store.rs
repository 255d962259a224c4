//! In-memory practice session store backed by moka

use application::{error::ApplicationError, ports::PracticeSessionStore};
use async_trait::async_trait;
use domain::{PracticeSession, SessionId};
use moka::future::Cache;
use tracing::{debug, instrument};

use crate::config::SessionConfig;

/// Session store that evicts sessions after an idle period
///
/// Sessions are lost on restart; practice context is not durable.
#[derive(Clone)]
pub struct MokaSessionStore {
    cache: Cache<SessionId, PracticeSession>,
}

impl std::fmt::Debug for MokaSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaSessionStore")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl Default for MokaSessionStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl MokaSessionStore {
    /// Create a store with the given expiry and capacity
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(config.idle_timeout())
            .build();
        Self { cache }
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PracticeSessionStore for MokaSessionStore {
    #[instrument(skip(self))]
    async fn load(&self, id: &SessionId) -> Result<Option<PracticeSession>, ApplicationError> {
        let session = self.cache.get(id).await;
        debug!(found = session.is_some(), "Session lookup");
        Ok(session)
    }

    #[instrument(skip(self, session), fields(session_id = %session.id(), stage = session.stage().as_str()))]
    async fn save(&self, session: &PracticeSession) -> Result<(), ApplicationError> {
        self.cache.insert(session.id(), session.clone()).await;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &SessionId) -> Result<(), ApplicationError> {
        self.cache.invalidate(id).await;
        Ok(())
    }
}
