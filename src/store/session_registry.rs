use log::{debug, info};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Catalog, Id, Session};

/// Registry entry for one session
#[derive(Clone, Debug)]
struct SessionEntry {
    session: Session,
    last_accessed: Instant,
}

/// Independent viewer sessions over one shared catalog, with an idle TTL.
///
/// Each operation holds the lock for one synchronous step, so a mutation is
/// either fully applied or not visible at all.
#[derive(Debug)]
pub struct SessionRegistry {
    /// Sessions keyed by session id
    entries: RwLock<HashMap<Id, SessionEntry>>,
    /// Idle time after which a session is dropped
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Start a session on `default_api` with no endpoint selected.
    pub fn create(&self, catalog: &Catalog, default_api: &str) -> CatalogResult<Session> {
        let session = Session::new(catalog, default_api)?;
        self.entries.write().insert(
            session.id.clone(),
            SessionEntry {
                session: session.clone(),
                last_accessed: Instant::now(),
            },
        );
        info!("session {} started on api {}", session.id, default_api);
        Ok(session)
    }

    /// Snapshot of a session if present and not expired
    pub fn get(&self, id: &str) -> CatalogResult<Session> {
        self.with_session(id, |session| Ok(session.clone()))
    }

    /// Apply `change` to a session and return its result.
    ///
    /// Expired sessions are removed and reported as not found. The access time
    /// is refreshed whether or not `change` succeeds.
    pub fn with_session<T>(
        &self,
        id: &str,
        change: impl FnOnce(&mut Session) -> CatalogResult<T>,
    ) -> CatalogResult<T> {
        let mut entries = self.entries.write();

        let expired = match entries.get(id) {
            Some(entry) => entry.last_accessed.elapsed() > self.ttl,
            None => return Err(CatalogError::session_not_found(id)),
        };
        if expired {
            entries.remove(id);
            debug!("session {} expired", id);
            return Err(CatalogError::session_not_found(id));
        }

        let entry = entries
            .get_mut(id)
            .ok_or_else(|| CatalogError::session_not_found(id))?;
        entry.last_accessed = Instant::now();
        change(&mut entry.session)
    }

    /// End a session. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        let removed = self.entries.write().remove(id).is_some();
        if removed {
            info!("session {} ended", id);
        }
        removed
    }

    /// Drop every session idle for longer than the TTL; returns how many.
    pub fn clear_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let ttl = self.ttl;
        let now = Instant::now();

        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.last_accessed) <= ttl);
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!("dropped {} expired sessions", dropped);
        }
        dropped
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for SessionRegistry {
    /// Registry with a one-hour TTL
    fn default() -> Self {
        Self::new(Duration::from_secs(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{bundled_apis, DEFAULT_API_KEY};

    fn catalog() -> Catalog {
        Catalog::new(bundled_apis()).unwrap()
    }

    #[test]
    fn test_sessions_are_independent() {
        let catalog = catalog();
        let registry = SessionRegistry::default();
        let first = registry.create(&catalog, DEFAULT_API_KEY).unwrap();
        let second = registry.create(&catalog, DEFAULT_API_KEY).unwrap();
        assert_ne!(first.id, second.id);

        registry
            .with_session(&first.id, |session| {
                session.select_endpoint(&catalog, "create-access-token")
            })
            .unwrap();

        let first = registry.get(&first.id).unwrap();
        let second = registry.get(&second.id).unwrap();
        assert_eq!(
            first.selection().endpoint().map(|id| id.as_str()),
            Some("create-access-token")
        );
        assert!(second.selection().endpoint().is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rejected_change_leaves_session_unchanged() {
        let catalog = catalog();
        let registry = SessionRegistry::default();
        let session = registry.create(&catalog, DEFAULT_API_KEY).unwrap();

        let result = registry.with_session(&session.id, |session| {
            session.select_endpoint(&catalog, "create-webhook")
        });
        assert!(matches!(result, Err(CatalogError::InvalidReference(_))));
        assert_eq!(registry.get(&session.id).unwrap(), session);
    }

    #[test]
    fn test_unknown_and_removed_sessions() {
        let catalog = catalog();
        let registry = SessionRegistry::default();
        assert!(registry.get("missing").unwrap_err().is_not_found());

        let session = registry.create(&catalog, DEFAULT_API_KEY).unwrap();
        assert!(registry.remove(&session.id));
        assert!(!registry.remove(&session.id));
        assert!(registry.get(&session.id).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_idle_sessions_expire() {
        let catalog = catalog();
        let registry = SessionRegistry::new(Duration::ZERO);
        let session = registry.create(&catalog, DEFAULT_API_KEY).unwrap();
        std::thread::sleep(Duration::from_millis(5));

        assert!(registry.get(&session.id).unwrap_err().is_not_found());
        assert!(registry.is_empty());

        registry.create(&catalog, DEFAULT_API_KEY).unwrap();
        registry.create(&catalog, DEFAULT_API_KEY).unwrap();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(registry.clear_expired(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_rejects_unknown_default() {
        let catalog = catalog();
        let registry = SessionRegistry::default();
        assert!(registry.create(&catalog, "nope").is_err());
        assert!(registry.is_empty());
    }
}
