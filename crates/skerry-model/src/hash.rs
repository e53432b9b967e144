//! Torrent identity as handed over by the download engine.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Stable torrent identifier.
///
/// The engine reports hashes as hex strings (v1 or hybrid v2); consumers treat
/// them as opaque. Lexical order over the raw string doubles as the
/// deterministic final tie-break when every sort rule reports equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoHash(String);

impl InfoHash {
    /// Wrap an engine-reported hash string.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Borrow the raw hash string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for InfoHash {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for InfoHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_owned())
    }
}

impl From<String> for InfoHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}
