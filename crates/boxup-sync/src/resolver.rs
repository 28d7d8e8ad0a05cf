//! Remote folder resolution with fetch-or-create semantics
//!
//! Maps a [`RemotePath`] to the [`FolderId`] of the corresponding remote
//! folder, creating missing intermediate folders one segment at a time.
//! Resolved prefixes are cached for the lifetime of the resolver, so a run
//! resolves each distinct remote directory at most once.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use boxup_core::domain::newtypes::{FolderId, RemotePath};
use boxup_core::ports::IRemoteStorage;

/// Per-run resolver from remote paths to folder identifiers.
pub struct FolderResolver {
    storage: Arc<dyn IRemoteStorage>,
    cache: HashMap<RemotePath, FolderId>,
}

impl FolderResolver {
    #[must_use]
    pub fn new(storage: Arc<dyn IRemoteStorage>) -> Self {
        Self {
            storage,
            cache: HashMap::new(),
        }
    }

    /// Resolves `path` to its folder identifier, creating missing folders.
    ///
    /// Walks segment by segment from the service root; each prefix hits the
    /// cache, an existing remote folder, or a freshly created one. Lookup
    /// and creation failures are fatal and abort the resolution.
    pub async fn resolve(&mut self, path: &RemotePath) -> Result<FolderId> {
        if path.is_root() {
            return Ok(FolderId::root());
        }
        if let Some(id) = self.cache.get(path) {
            return Ok(id.clone());
        }

        let mut current = FolderId::root();
        let mut prefix = RemotePath::root();

        for segment in path.segments() {
            prefix = prefix.join(segment)?;

            if let Some(id) = self.cache.get(&prefix) {
                current = id.clone();
                continue;
            }

            current = match self.storage.find_child_folder(&current, segment).await? {
                Some(id) => id,
                None => {
                    debug!(folder = %prefix, "creating remote folder");
                    self.storage.create_folder(&current, segment).await?
                }
            };
            self.cache.insert(prefix.clone(), current.clone());
        }

        Ok(current)
    }
}
