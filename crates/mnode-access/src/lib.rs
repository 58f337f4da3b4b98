//! Access policy evaluation.
//!
//! Resolves the permission a set of subjects holds on an object record:
//! the highest level among all access rules naming any of the subjects,
//! with the rights holder implicitly holding `changePermission` even
//! when the rule list is empty. Group membership is expanded upstream;
//! asserted groups arrive as plain subjects in the auth context.
//!
//! Absence of any matching rule denies access — there is no default
//! grant of any kind.

use thiserror::Error;

use mnode_types::{AuthContext, ObjectRecord, Permission};

/// Errors produced by access evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("{subject} does not have {required} permission on {pid}")]
    NotAuthorized {
        pid: String,
        subject: String,
        required: Permission,
    },
}

pub type AccessResult<T> = Result<T, AccessError>;

/// The highest permission any of `subjects` holds on `record`.
///
/// Returns `None` when no rule matches and none of the subjects is the
/// rights holder.
pub fn highest_permission(record: &ObjectRecord, subjects: &[String]) -> Option<Permission> {
    if subjects.iter().any(|s| *s == record.rights_holder) {
        return Some(Permission::ChangePermission);
    }
    record
        .access_rules
        .iter()
        .filter(|rule| subjects.iter().any(|s| *s == rule.subject))
        .map(|rule| rule.permission)
        .max()
}

/// Whether the caller holds at least `required` on `record`.
pub fn is_allowed(record: &ObjectRecord, auth: &AuthContext, required: Permission) -> bool {
    match highest_permission(record, &auth.subjects) {
        Some(granted) => granted >= required,
        None => false,
    }
}

/// Fail with [`AccessError::NotAuthorized`] unless the caller holds at
/// least `required` on `record`.
pub fn assert_allowed(
    record: &ObjectRecord,
    auth: &AuthContext,
    required: Permission,
) -> AccessResult<()> {
    if is_allowed(record, auth, required) {
        return Ok(());
    }
    Err(AccessError::NotAuthorized {
        pid: record.pid.to_string(),
        subject: auth
            .subjects
            .first()
            .cloned()
            .unwrap_or_else(|| "<no subject>".to_string()),
        required,
    })
}
