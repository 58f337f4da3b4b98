use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// An access level grantable on an object.
///
/// Levels are totally ordered: `Read < Write < ChangePermission`, and a
/// grant at any level implies all lower levels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    Read,
    Write,
    ChangePermission,
}

impl Permission {
    /// Numeric level, 0 (lowest) to 2 (highest).
    pub fn level(&self) -> u8 {
        match self {
            Self::Read => 0,
            Self::Write => 1,
            Self::ChangePermission => 2,
        }
    }

    /// The wire-format action string for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ChangePermission => "changePermission",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "changePermission" => Ok(Self::ChangePermission),
            other => Err(TypeError::UnknownPermission(other.to_string())),
        }
    }
}

/// One entry of an object's access policy: a subject granted a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    /// The subject (or group) the grant names. Group expansion happens
    /// upstream; by the time a rule is evaluated, asserted groups appear
    /// as plain subjects.
    pub subject: String,
    /// The granted level. Implies all lower levels.
    pub permission: Permission,
}

impl AccessRule {
    pub fn new(subject: impl Into<String>, permission: Permission) -> Self {
        Self {
            subject: subject.into(),
            permission,
        }
    }
}
