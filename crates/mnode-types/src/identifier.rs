use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier string in the node's namespace.
///
/// A `Did` is the single identifier currency of the system: persistent
/// identifiers (PIDs), series identifiers (SIDs), and placeholders for
/// not-yet-received revisions are all `Did`s. What a given `Did` *is* at
/// any point in time is answered by classifying it against the store
/// ([`IdClass`]), never by the string itself.
///
/// Once registered, a `Did` is globally unique within the namespace and
/// is never physically removed while anything references it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Did(String);

impl Did {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Did {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Did {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Did({})", self.0)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dynamic classification of a registered identifier.
///
/// Classification is derived from the current store contents, not
/// recorded on the identifier: an identifier registered as a revision
/// placeholder becomes a PID the moment the object arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdClass {
    /// Not registered in the namespace.
    Unused,
    /// The PID of an existing object.
    Pid,
    /// A series identifier bound to a revision chain.
    Sid,
    /// Registered as the predecessor/successor of an existing object,
    /// but the object itself has not arrived yet.
    ReplicaPlaceholder,
}

impl fmt::Display for IdClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unused => write!(f, "unused"),
            Self::Pid => write!(f, "pid"),
            Self::Sid => write!(f, "sid"),
            Self::ReplicaPlaceholder => write!(f, "replica placeholder"),
        }
    }
}

/// Surrogate identifier for a revision chain (UUID v7 for time-ordering).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChainId(uuid::Uuid);

impl ChainId {
    /// Generate a new time-ordered chain ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChainId({})", self.short_id())
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
