//! Tree walker - demand-driven local file traversal
//!
//! Walks the source tree on a spawned task and feeds [`LocalEntry`] values
//! through a bounded channel of capacity one. The bounded send suspends
//! the producer until the single consumer has taken the previous entry,
//! which is how the one-at-a-time admission discipline is enforced: the
//! walker is never more than one entry ahead of the pipeline.
//!
//! Traversal rules:
//! - If the root is itself a file, the walk yields that single entry and
//!   the relative-directory base is the root's parent directory.
//! - Symbolic links are skipped entirely unless `follow_links` is set, in
//!   which case they are traversed like their targets.
//! - Within each directory, entries are visited in name order, files
//!   before subdirectories, so ordering is stable across a run.
//! - Any traversal failure is fatal and is delivered through the channel
//!   as an `Err`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::debug;

use boxup_core::domain::entry::{system_time_to_utc, LocalEntry};

/// Spawns the traversal task and returns the entry channel.
///
/// The channel yields `Ok(entry)` per discovered file; an `Err` reports a
/// fatal traversal failure and terminates the sequence.
pub fn spawn(root: PathBuf, follow_links: bool) -> mpsc::Receiver<Result<LocalEntry>> {
    let (tx, rx) = mpsc::channel(1);

    tokio::spawn(async move {
        if let Err(err) = walk_root(&root, follow_links, &tx).await {
            // If the consumer is gone this send is a no-op, which is fine:
            // nobody is left to care about the walk.
            let _ = tx.send(Err(err)).await;
        }
    });

    rx
}

/// Stats the root and dispatches to the single-file or directory walk.
async fn walk_root(
    root: &Path,
    follow_links: bool,
    tx: &mpsc::Sender<Result<LocalEntry>>,
) -> Result<()> {
    let metadata = tokio::fs::metadata(root)
        .await
        .with_context(|| format!("Failed to stat source root {}", root.display()))?;

    if metadata.is_file() {
        // Root is a file: its parent is the relative-directory base, so
        // the single entry lands directly in the destination folder.
        let file_name = file_name_str(root)?;
        let entry = LocalEntry {
            path: root.to_path_buf(),
            relative_dir: PathBuf::new(),
            file_name,
            created: metadata.created().ok().and_then(system_time_to_utc),
            modified: metadata.modified().ok().and_then(system_time_to_utc),
        };
        let _ = tx.send(Ok(entry)).await;
        return Ok(());
    }

    walk_directory(root, root, follow_links, tx).await
}

/// Recursively walks `dir`, emitting files before descending.
fn walk_directory<'a>(
    dir: &'a Path,
    base: &'a Path,
    follow_links: bool,
    tx: &'a mpsc::Sender<Result<LocalEntry>>,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<()>> + Send + 'a>> {
    Box::pin(async move {
        let mut entries = tokio::fs::read_dir(dir)
            .await
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;

        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to enumerate {}", dir.display()))?
        {
            let path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .with_context(|| format!("Failed to stat {}", path.display()))?;

            if file_type.is_symlink() && !follow_links {
                debug!(path = %path.display(), "skipping symlink (follow-links disabled)");
                continue;
            }

            // Follow the link (or the plain entry) to classify it.
            let metadata = tokio::fs::metadata(&path)
                .await
                .with_context(|| format!("Failed to stat {}", path.display()))?;

            if metadata.is_file() {
                files.push((path, metadata));
            } else if metadata.is_dir() {
                subdirs.push(path);
            }
        }

        files.sort_by(|(a, _), (b, _)| a.cmp(b));
        subdirs.sort();

        let relative_dir = dir
            .strip_prefix(base)
            .unwrap_or_else(|_| Path::new(""))
            .to_path_buf();

        for (path, metadata) in files {
            let file_name = file_name_str(&path)?;
            let entry = LocalEntry {
                path,
                relative_dir: relative_dir.clone(),
                file_name,
                created: metadata.created().ok().and_then(system_time_to_utc),
                modified: metadata.modified().ok().and_then(system_time_to_utc),
            };
            if tx.send(Ok(entry)).await.is_err() {
                // Consumer dropped the receiver; abandon the walk.
                return Ok(());
            }
        }

        for subdir in subdirs {
            walk_directory(&subdir, base, follow_links, tx).await?;
        }

        Ok(())
    })
}

/// Extracts a UTF-8 file name; the remote service only accepts Unicode.
fn file_name_str(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .with_context(|| format!("File name is not valid UTF-8: {}", path.display()))
}
