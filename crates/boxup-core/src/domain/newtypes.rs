//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for remote identifiers and values. Each newtype
//! ensures data validity at construction time so the sync engine never
//! handles raw, unchecked strings.

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// RemotePath
// ============================================================================

/// A normalized, `/`-separated path relative to the remote service root.
///
/// The empty path denotes the root itself. Construction strips empty and
/// `.` segments and rejects `..`, so two paths naming the same remote
/// folder always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemotePath(String);

impl RemotePath {
    /// Create a `RemotePath` from a string, normalizing separators.
    pub fn new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let mut segments = Vec::new();
        for segment in path.as_ref().split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(DomainError::InvalidRemotePath(
                        path.as_ref().to_string(),
                    ))
                }
                s => segments.push(s),
            }
        }
        Ok(Self(segments.join("/")))
    }

    /// The remote service root.
    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build a `RemotePath` from a local relative directory path.
    ///
    /// Non-UTF-8 path components are rejected; the remote service only
    /// accepts Unicode names.
    pub fn from_local(path: &Path) -> Result<Self, DomainError> {
        let s = path
            .to_str()
            .ok_or_else(|| DomainError::InvalidRemotePath(path.display().to_string()))?;
        Self::new(s)
    }

    /// Append a single path segment.
    pub fn join(&self, segment: &str) -> Result<Self, DomainError> {
        if self.0.is_empty() {
            Self::new(segment)
        } else {
            Self::new(format!("{}/{}", self.0, segment))
        }
    }

    /// Append another remote path.
    #[must_use]
    pub fn join_path(&self, other: &RemotePath) -> Self {
        if self.0.is_empty() {
            other.clone()
        } else if other.0.is_empty() {
            self.clone()
        } else {
            Self(format!("{}/{}", self.0, other.0))
        }
    }

    /// Iterate over the path segments (empty for the root).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Whether this path is the remote root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path as a string slice (empty for the root).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RemotePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "/{}", self.0)
        }
    }
}

impl FromStr for RemotePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// ContentHash
// ============================================================================

/// A SHA-1 content fingerprint: exactly 40 lowercase hexadecimal characters.
///
/// Identical byte content always yields an identical `ContentHash`;
/// equality of hashes is the sole "content unchanged" signal during sync.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Expected digest length in hex characters (SHA-1 = 160 bits).
    const HEX_LEN: usize = 40;

    /// Create a `ContentHash`, validating the lowercase hex format.
    pub fn new(hash: impl Into<String>) -> Result<Self, DomainError> {
        let hash = hash.into();
        let valid = hash.len() == Self::HEX_LEN
            && hash
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if valid {
            Ok(Self(hash))
        } else {
            Err(DomainError::InvalidHash(hash))
        }
    }

    /// The hex digest as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Remote identifiers
// ============================================================================

/// Identifier of a remote folder. `"0"` denotes the service root folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    /// Create a `FolderId` from a non-empty identifier string.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidId("empty folder ID".to_string()));
        }
        Ok(Self(id))
    }

    /// The service root folder.
    #[must_use]
    pub fn root() -> Self {
        Self("0".to_string())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FolderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a remote file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Create a `FileId` from a non-empty identifier string.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidId("empty file ID".to_string()));
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
