//! Redis-backed mapping store.

use crate::domain::entities::{Link, ShortCode};
use crate::domain::repositories::{MappingStore, SetOutcome};
use crate::error::{AppError, map_redis_error};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde_json::json;
use tracing::{debug, error, info};

/// Mapping store on a Redis key space.
///
/// Keys are `{key_prefix}{code}` and values are raw link strings, with no
/// expiry. The default empty prefix keeps the flat key layout existing
/// deployments rely on.
///
/// Uses `ConnectionManager`, which is cheap to clone and reconnects on its
/// own, so one instance is shared by every request.
#[derive(Clone)]
pub struct RedisMappingStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisMappingStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every code; empty for a flat key space
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::open(redis_url).map_err(|e| {
            AppError::store_unavailable(
                "Failed to create Redis client",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await.map_err(map_redis_error)?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, code: &ShortCode) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn exists(&self, code: &ShortCode) -> Result<bool, AppError> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        conn.exists::<_, bool>(&key).await.map_err(|e| {
            error!("Redis EXISTS error for {}: {}", code, e);
            map_redis_error(e)
        })
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<String>, AppError> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(link)) => {
                debug!("Store HIT: {} -> {}", code, link);
                Ok(Some(link))
            }
            Ok(None) => {
                debug!("Store MISS: {}", code);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", code, e);
                Err(map_redis_error(e))
            }
        }
    }

    async fn set_if_absent(&self, code: &ShortCode, link: &Link) -> Result<SetOutcome, AppError> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        // SET NX: the existence check and the write happen in one command.
        match conn.set_nx::<_, _, bool>(&key, link.as_str()).await {
            Ok(true) => {
                debug!("Store SET: {} -> {}", code, link);
                Ok(SetOutcome::Created)
            }
            Ok(false) => {
                debug!("Store SET skipped, {} already taken", code);
                Ok(SetOutcome::AlreadyPresent)
            }
            Err(e) => {
                error!("Redis SETNX error for {}: {}", code, e);
                Err(map_redis_error(e))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
