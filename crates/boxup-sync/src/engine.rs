//! Mirror engine - decision and execution loop
//!
//! Drains the walker channel one entry at a time and carries each file
//! through the full pipeline before admitting the next: resolve the remote
//! folder, look up the remote item, fingerprint the local content, decide,
//! then execute the decision. Recoverable per-file failures are recorded
//! and the run continues; port failures and traversal failures abort the
//! run with an error.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use boxup_core::domain::decision::SyncDecision;
use boxup_core::domain::entry::LocalEntry;
use boxup_core::domain::errors::FileError;
use boxup_core::domain::newtypes::{ContentHash, FileId, FolderId, RemotePath};
use boxup_core::domain::tally::RunTally;
use boxup_core::ports::{IRemoteStorage, ItemKind, UploadAttrs};

use crate::progress::ProgressReporter;
use crate::resolver::FolderResolver;
use crate::{hash, walker};

/// One mirroring run: a local source mapped onto a remote destination.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Local file or directory to mirror.
    pub source: PathBuf,
    /// Remote folder path the source is mirrored into.
    pub destination: RemotePath,
    /// Replace remote files whose content differs.
    pub overwrite: bool,
    /// Traverse symbolic links instead of skipping them.
    pub follow_links: bool,
}

/// Drives a full mirroring run against a remote storage port.
pub struct MirrorEngine {
    storage: Arc<dyn IRemoteStorage>,
}

impl MirrorEngine {
    #[must_use]
    pub fn new(storage: Arc<dyn IRemoteStorage>) -> Self {
        Self { storage }
    }

    /// Runs the mirror to completion and returns the final tally.
    ///
    /// # Errors
    /// Fails on traversal errors, folder resolution failures, and any
    /// remote call failure other than the per-file conditions captured in
    /// [`FileError`]. The summary event fires only on successful runs.
    pub async fn run(
        &self,
        request: &UploadRequest,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<RunTally> {
        info!(
            source = %request.source.display(),
            destination = %request.destination,
            overwrite = request.overwrite,
            "starting mirror run"
        );

        let mut resolver = FolderResolver::new(self.storage.clone());
        let mut tally = RunTally::default();
        let mut entries = walker::spawn(request.source.clone(), request.follow_links);

        while let Some(next) = entries.recv().await {
            let entry = next?;
            let remote_path = entry.remote_path(&request.destination)?;
            let remote_dir = entry.remote_dir(&request.destination)?;
            let folder = resolver.resolve(&remote_dir).await?;

            match self.decide(&folder, &entry, request.overwrite).await? {
                SyncDecision::Skip => {
                    debug!(path = %remote_path, "content unchanged, skipping");
                    tally.record_skip();
                    reporter.processed(tally.processed());
                }
                SyncDecision::Create { digest } => {
                    self.storage
                        .upload_file(&folder, &upload_attrs(&entry, digest), &entry.path)
                        .await?;
                    debug!(path = %remote_path, "uploaded new file");
                    tally.record_upload();
                    reporter.processed(tally.processed());
                }
                SyncDecision::Update { existing, digest } => {
                    self.storage
                        .replace_file(&existing, &upload_attrs(&entry, digest), &entry.path)
                        .await?;
                    debug!(path = %remote_path, file_id = %existing, "replaced file content");
                    tally.record_upload();
                    reporter.processed(tally.processed());
                }
                SyncDecision::Error(reason) => {
                    warn!(path = %remote_path, %reason, "file failed");
                    tally.record_error();
                    reporter.file_error(&remote_path, &reason);
                }
            }
        }

        info!(%tally, "mirror run finished");
        reporter.summary(&tally);
        Ok(tally)
    }

    /// Classifies one entry against the remote folder state.
    ///
    /// The name collision check runs before fingerprinting, so a file that
    /// collides with a remote folder is never read.
    async fn decide(
        &self,
        folder: &FolderId,
        entry: &LocalEntry,
        overwrite: bool,
    ) -> Result<SyncDecision> {
        let existing = self.storage.find_item(folder, &entry.file_name).await?;

        if let Some(item) = &existing {
            if item.kind != ItemKind::File {
                return Ok(SyncDecision::Error(FileError::DirectoryCollision));
            }
        }

        let digest = match hash::fingerprint(&entry.path).await {
            Ok(digest) => digest,
            Err(err) => return Ok(SyncDecision::Error(FileError::Unreadable(err.to_string()))),
        };

        match existing {
            None => Ok(SyncDecision::Create { digest }),
            Some(item) if item.sha1.as_ref() == Some(&digest) => Ok(SyncDecision::Skip),
            Some(item) if overwrite => Ok(SyncDecision::Update {
                existing: FileId::new(item.id)?,
                digest,
            }),
            Some(_) => Ok(SyncDecision::Error(FileError::OverwriteNotEnabled)),
        }
    }
}

fn upload_attrs(entry: &LocalEntry, digest: ContentHash) -> UploadAttrs {
    UploadAttrs {
        name: entry.file_name.clone(),
        sha1: digest,
        content_created_at: entry.created,
        content_modified_at: entry.modified,
    }
}
