use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Desired replication behavior for one object.
///
/// Owned by the object record: chain merges and cuts never touch it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicationPolicy {
    /// Whether other member nodes may replicate the object at all.
    pub replication_allowed: bool,
    /// Desired number of replicas when replication is allowed.
    pub number_replicas: u32,
    /// Nodes preferred as replication targets, in preference order.
    pub preferred_nodes: Vec<String>,
    /// Nodes that must never hold a replica.
    pub blocked_nodes: Vec<String>,
}

impl Default for ReplicationPolicy {
    /// Replication disabled. The conservative default for records that
    /// arrive without an explicit policy.
    fn default() -> Self {
        Self {
            replication_allowed: false,
            number_replicas: 0,
            preferred_nodes: Vec::new(),
            blocked_nodes: Vec::new(),
        }
    }
}

/// Lifecycle state of one replica on one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplicaStatus {
    Queued,
    Requested,
    Completed,
    Failed,
    Invalidated,
}

impl ReplicaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Requested => "requested",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Invalidated => "invalidated",
        }
    }
}

impl fmt::Display for ReplicaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReplicaStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "requested" => Ok(Self::Requested),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "invalidated" => Ok(Self::Invalidated),
            other => Err(TypeError::UnknownReplicaStatus(other.to_string())),
        }
    }
}

/// Status of one replica of an object on one member node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaInfo {
    /// The node hosting (or expected to host) the replica.
    pub node: String,
    pub status: ReplicaStatus,
    /// When the status was last verified or changed.
    pub verified_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_string_round_trip() {
        for s in [
            ReplicaStatus::Queued,
            ReplicaStatus::Requested,
            ReplicaStatus::Completed,
            ReplicaStatus::Failed,
            ReplicaStatus::Invalidated,
        ] {
            assert_eq!(s.as_str().parse::<ReplicaStatus>().unwrap(), s);
        }
    }

    #[test]
    fn default_policy_disallows_replication() {
        let policy = ReplicationPolicy::default();
        assert!(!policy.replication_allowed);
        assert_eq!(policy.number_replicas, 0);
    }
}
