use serde::{Deserialize, Serialize};

use crate::access::AccessRule;
use crate::identifier::Did;
use crate::record::Checksum;
use crate::replica::ReplicationPolicy;

/// The symbolic subject representing unauthenticated callers.
pub const PUBLIC_SUBJECT: &str = "public";

/// A fully parsed wire metadata document, as handed over by the
/// XML-deserialization collaborator.
///
/// All fields are plain values; nothing here has been checked against
/// the store yet. Validation and registration is the gate's job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedObjectMetadata {
    pub pid: Did,
    pub format_id: String,
    pub checksum: Checksum,
    pub size: u64,
    pub submitter: String,
    pub rights_holder: String,
    pub origin_node: String,
    pub authoritative_node: String,
    pub obsoletes: Option<Did>,
    pub obsoleted_by: Option<Did>,
    /// Series identifier the document asserts for the object's chain.
    pub series_id: Option<Did>,
    pub archived: bool,
    pub access_rules: Vec<AccessRule>,
    pub replication_policy: ReplicationPolicy,
}

/// The authenticated identity of a caller, as established by the
/// certificate collaborator.
///
/// `subjects` contains the primary subject plus every equivalent
/// identity and asserted group, already expanded. An unauthenticated
/// caller carries only [`PUBLIC_SUBJECT`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub subjects: Vec<String>,
    pub is_authenticated: bool,
}

impl AuthContext {
    /// An authenticated context for a single subject.
    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            subjects: vec![subject.into()],
            is_authenticated: true,
        }
    }

    /// The anonymous context: public subject only.
    pub fn public() -> Self {
        Self {
            subjects: vec![PUBLIC_SUBJECT.to_string()],
            is_authenticated: false,
        }
    }

    /// Whether the context asserts the given subject.
    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }
}
