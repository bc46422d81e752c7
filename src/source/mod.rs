//! Object retrieval collaborator
//!
//! The pipeline is agnostic to where statement bytes come from. An
//! [`ObjectSource`] supplies the bytes for an opaque key; retrieval failure
//! is fatal for that item only and never for the rest of a batch.

use crate::types::DigestError;
use std::path::PathBuf;

/// Supplier of statement bytes for opaque object keys
pub trait ObjectSource {
    /// Fetch the object stored under `key`
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Retrieval`] if the object cannot be read.
    fn fetch(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, DigestError>> + Send;
}

/// Object source backed by a local directory
///
/// Keys resolve to paths under the root directory. Stands in for a remote
/// object store in local runs and tests.
#[derive(Debug, Clone)]
pub struct LocalDirSource {
    root: PathBuf,
}

impl LocalDirSource {
    /// Create a source rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ObjectSource for LocalDirSource {
    async fn fetch(&self, key: &str) -> Result<Vec<u8>, DigestError> {
        let path = self.root.join(key);

        tokio::fs::read(&path)
            .await
            .map_err(|e| DigestError::retrieval(key, e))
    }
}
