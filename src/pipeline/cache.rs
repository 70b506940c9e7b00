//! Runtime token cache.
//!
//! The cache is the secondary, eventually-consistent consumer of Token State,
//! read by non-visual code. Updates are fire-and-forget: each one runs as its
//! own task, is never awaited by the engine, and is never cancelled when a
//! newer edit supersedes it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::error;
use tokio::runtime::Handle;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::error::CacheError;
use crate::types::{TokenState, TokenValue};

/// External cache accepting per-token update requests.
///
/// Each call may fail independently of every other call.
#[async_trait]
pub trait RuntimeTokenCache: Send + Sync {
    async fn update_token(&self, identifier: &str, value: TokenValue) -> Result<(), CacheError>;
}

// =============================================================================
// CacheDispatcher
// =============================================================================

/// Spawns isolated cache updates on a tokio runtime.
#[derive(Clone)]
pub struct CacheDispatcher {
    cache: Arc<dyn RuntimeTokenCache>,
    handle: Handle,
}

impl CacheDispatcher {
    /// Dispatch onto an explicit runtime.
    pub fn new(cache: Arc<dyn RuntimeTokenCache>, handle: Handle) -> Self {
        Self { cache, handle }
    }

    /// Dispatch onto the runtime this is called from.
    pub fn current(cache: Arc<dyn RuntimeTokenCache>) -> Result<Self, CacheError> {
        let handle = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        Ok(Self::new(cache, handle))
    }

    /// Request an update without waiting for it.
    ///
    /// Failures are logged inside the task. The returned handle may be
    /// dropped; the update still runs.
    pub fn dispatch(&self, identifier: &str, value: &TokenValue) -> JoinHandle<()> {
        let cache = Arc::clone(&self.cache);
        let identifier = identifier.to_string();
        let value = value.clone();

        self.handle.spawn(async move {
            if let Err(e) = cache.update_token(&identifier, value).await {
                error!("Failed to update runtime token {}: {}", identifier, e);
            }
        })
    }
}

// =============================================================================
// MemoryTokenCache
// =============================================================================

/// In-memory runtime cache seeded with a fixed identifier set.
///
/// Updates to identifiers it was not seeded with fail with
/// [`CacheError::UnknownToken`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenCache {
    values: Arc<RwLock<HashMap<String, TokenValue>>>,
}

impl MemoryTokenCache {
    /// Seed the cache from a state snapshot.
    pub fn seeded(state: &TokenState) -> Self {
        let values = state
            .iter()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect();
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    pub async fn get(&self, identifier: &str) -> Option<TokenValue> {
        self.values.read().await.get(identifier).cloned()
    }

    pub async fn snapshot(&self) -> HashMap<String, TokenValue> {
        self.values.read().await.clone()
    }
}

#[async_trait]
impl RuntimeTokenCache for MemoryTokenCache {
    async fn update_token(&self, identifier: &str, value: TokenValue) -> Result<(), CacheError> {
        let mut values = self.values.write().await;
        match values.get_mut(identifier) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CacheError::UnknownToken(identifier.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TokenState {
        TokenState::from_pairs([
            ("THUMB_HOVER_DURATION", TokenValue::from("150ms")),
            ("AXIS_SPRING_DAMPING", TokenValue::Number(20.0)),
        ])
    }

    struct FailingCache;

    #[async_trait]
    impl RuntimeTokenCache for FailingCache {
        async fn update_token(&self, _: &str, _: TokenValue) -> Result<(), CacheError> {
            Err(CacheError::Unavailable("offline".into()))
        }
    }

    #[tokio::test]
    async fn test_memory_cache_updates_known_token() {
        let cache = MemoryTokenCache::seeded(&state());
        cache
            .update_token("AXIS_SPRING_DAMPING", TokenValue::Number(42.0))
            .await
            .unwrap();
        assert_eq!(
            cache.get("AXIS_SPRING_DAMPING").await,
            Some(TokenValue::Number(42.0))
        );
    }

    #[tokio::test]
    async fn test_memory_cache_rejects_unknown_token() {
        let cache = MemoryTokenCache::seeded(&state());
        let err = cache
            .update_token("NOPE", TokenValue::from("1s"))
            .await
            .unwrap_err();
        assert_eq!(err, CacheError::UnknownToken("NOPE".into()));
        assert_eq!(cache.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn test_dispatch_applies_update() {
        let cache = MemoryTokenCache::seeded(&state());
        let dispatcher = CacheDispatcher::current(Arc::new(cache.clone())).unwrap();

        dispatcher
            .dispatch("THUMB_HOVER_DURATION", &TokenValue::from("90ms"))
            .await
            .unwrap();
        assert_eq!(
            cache.get("THUMB_HOVER_DURATION").await,
            Some(TokenValue::from("90ms"))
        );
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_contained() {
        let dispatcher = CacheDispatcher::current(Arc::new(FailingCache)).unwrap();
        // The task completes normally; the error is only logged
        let joined = dispatcher
            .dispatch("THUMB_HOVER_DURATION", &TokenValue::from("90ms"))
            .await;
        assert!(joined.is_ok());
    }

    #[test]
    fn test_current_without_runtime() {
        let result = CacheDispatcher::current(Arc::new(FailingCache));
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }
}
