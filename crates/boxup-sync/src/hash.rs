//! Streaming SHA-1 content fingerprinting
//!
//! Computes the fingerprint incrementally over fixed-size chunks, so files
//! of any size hash in constant memory. The digest depends only on the
//! byte content, never on name, timestamps, or permissions.

use std::io;
use std::path::Path;

use sha1::{Digest, Sha1};
use tokio::io::AsyncReadExt;
use tracing::debug;

use boxup_core::domain::newtypes::ContentHash;

/// Read chunk size for incremental hashing (64 KiB).
const CHUNK_SIZE: usize = 64 * 1024;

/// Computes the SHA-1 fingerprint of a file's full byte content.
///
/// # Errors
/// Any I/O failure while opening or reading the file is returned as-is; a
/// partial or zero-value fingerprint is never produced.
pub async fn fingerprint(path: &Path) -> io::Result<ContentHash> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let hex = format!("{:x}", hasher.finalize());
    debug!(path = %path.display(), hash = %hex, "fingerprint computed");

    // A SHA-1 digest always renders as 40 lowercase hex characters.
    ContentHash::new(hex).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
