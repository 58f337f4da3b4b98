use serde::{Deserialize, Serialize};

/// Configuration for the validation gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Subjects trusted to administer the node. Trusted subjects bypass
    /// per-object access rules and are the only subjects allowed to
    /// delete objects.
    pub trusted_subjects: Vec<String>,
    /// When `true` (the default), every mutating call must carry an
    /// authenticated context.
    pub require_authenticated_writes: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            trusted_subjects: Vec::new(),
            require_authenticated_writes: true,
        }
    }
}

impl ValidatorConfig {
    /// A configuration trusting the given subjects.
    pub fn with_trusted(subjects: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            trusted_subjects: subjects.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
