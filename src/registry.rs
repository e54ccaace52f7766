//! Registry of live sessions keyed by game id.
//!
//! Each session sits behind its own `Mutex`, so mutating calls on one game
//! are serialized while different games proceed independently. The map
//! itself is only locked long enough to insert, look up or remove a handle.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::{ConfigError, GameId, GameRng, PlayerId, SessionConfig};
use crate::session::Session;

/// Shared, lockable handle to one session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Lock a session handle, recovering the guard if a previous holder panicked.
pub fn lock(handle: &SessionHandle) -> std::sync::MutexGuard<'_, Session> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// All active sessions.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<GameId, SessionHandle>>,
    ids: Mutex<GameRng>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// Registry drawing game ids from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_rng(GameRng::from_entropy())
    }

    /// Registry with a fixed id stream, for reproducible tests.
    #[must_use]
    pub fn with_id_rng(rng: GameRng) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            ids: Mutex::new(rng.for_context("game_id")),
        }
    }

    /// Create a session seating `creator` and register it under a fresh id.
    pub fn create(
        &self,
        creator: PlayerId,
        creator_name: impl Into<String>,
        config: SessionConfig,
    ) -> Result<(GameId, SessionHandle), ConfigError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        let game_id = {
            let mut rng = self.ids.lock().unwrap_or_else(PoisonError::into_inner);
            let mut id = GameId::generate(&mut rng);
            while sessions.contains_key(&id) {
                id = GameId::generate(&mut rng);
            }
            id
        };

        let session = Session::new(game_id.clone(), creator, creator_name, config)?;
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(game_id.clone(), Arc::clone(&handle));
        info!(%game_id, active = sessions.len(), "session registered");

        Ok((game_id, handle))
    }

    /// Look up a session. `None` if no such game exists.
    #[must_use]
    pub fn get(&self, game_id: &GameId) -> Option<SessionHandle> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(game_id)
            .cloned()
    }

    /// Drop a session from the registry. Outstanding handles stay usable.
    pub fn remove(&self, game_id: &GameId) -> Option<SessionHandle> {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(game_id);
        if removed.is_some() {
            info!(%game_id, "session removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Status;

    fn registry() -> SessionRegistry {
        SessionRegistry::with_id_rng(GameRng::new(7))
    }

    #[test]
    fn test_create_and_get() {
        let registry = registry();
        let (id, handle) = registry
            .create(PlayerId::new("a"), "Ann", SessionConfig::default())
            .unwrap();

        assert!(id.as_str().starts_with("game_"));
        assert_eq!(registry.len(), 1);

        let found = registry.get(&id).unwrap();
        assert!(Arc::ptr_eq(&found, &handle));
        assert_eq!(lock(&found).status(), Status::Waiting);
        assert_eq!(lock(&found).game_id(), &id);
    }

    #[test]
    fn test_unknown_game() {
        let registry = registry();
        assert!(registry.get(&GameId::from("game_nope")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = registry();
        let mut ids = Vec::new();
        for i in 0..50 {
            let (id, _) = registry
                .create(PlayerId::new(format!("p{i}")), "P", SessionConfig::default())
                .unwrap();
            ids.push(id);
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 50);
        assert_eq!(registry.len(), 50);
    }

    #[test]
    fn test_invalid_config_not_registered() {
        let registry = registry();
        let config = SessionConfig::new().with_goal_pile_size(77);
        assert!(registry.create(PlayerId::new("a"), "Ann", config).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove() {
        let registry = registry();
        let (id, handle) = registry
            .create(PlayerId::new("a"), "Ann", SessionConfig::default())
            .unwrap();

        assert!(registry.remove(&id).is_some());
        assert!(registry.get(&id).is_none());
        assert!(registry.remove(&id).is_none());
        // Outstanding handle still usable.
        assert_eq!(lock(&handle).status(), Status::Waiting);
    }
}
