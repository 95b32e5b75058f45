use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{Result, StoreError};

/// Trait for binary object storage.
///
/// Off the cart/order hot path: used when an administrator attaches a
/// product image. Implementations return a publicly resolvable URL for the
/// uploaded object.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads `bytes` under `folder`, keyed by a generated unique name
    /// derived from `file_name`, and returns the object's URL.
    async fn upload(&self, bytes: Vec<u8>, folder: &str, file_name: &str) -> Result<String>;
}

#[derive(Debug, Default)]
struct BlobState {
    objects: HashMap<String, Vec<u8>>,
    unavailable: bool,
}

/// In-memory blob store for testing.
///
/// Returns `memory://` URLs and keeps the uploaded bytes around for
/// assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    state: Arc<RwLock<BlobState>>,
}

impl InMemoryBlobStore {
    /// Creates a new empty in-memory blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every subsequent upload to fail.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.unavailable = unavailable;
    }

    /// Returns the number of stored objects.
    pub async fn object_count(&self) -> usize {
        self.state.read().await.objects.len()
    }

    /// Returns true if an object exists at the given URL.
    pub async fn has_object(&self, url: &str) -> bool {
        self.state.read().await.objects.contains_key(url)
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(&self, bytes: Vec<u8>, folder: &str, file_name: &str) -> Result<String> {
        let mut state = self.state.write().await;

        if state.unavailable {
            return Err(StoreError::Unavailable(
                "simulated blob store outage".to_string(),
            ));
        }

        let key = format!("{folder}/{}_{file_name}", Uuid::new_v4().simple());
        let url = format!("memory://{key}");
        state.objects.insert(url.clone(), bytes);

        Ok(url)
    }
}
