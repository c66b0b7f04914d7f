//! Variant registry configuration errors.

use crate::context::Platform;

/// Error returned for a missing, duplicate, or misused variant binding.
///
/// These are unrecoverable configuration errors intended to fail
/// application startup loudly; nothing here is retried or resolved at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The same (id, platform) pair was registered twice.
    ///
    /// Last-registration-wins is deliberately not offered; silently
    /// shadowing an implementation hides wiring mistakes.
    DuplicateBinding { id: String, platform: Platform },
    /// A component id lacks an implementation for a recognized platform.
    MissingBinding { id: String, platform: Platform },
    /// No component was registered under the resolved id.
    Unregistered { id: String },
    /// A process-wide variant table was installed twice.
    AlreadyInstalled,
    /// A process-wide variant table was read before installation.
    NotInstalled,
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::DuplicateBinding { id, platform } => {
                write!(
                    f,
                    "duplicate {} implementation registered for component '{}'",
                    platform, id
                )
            }
            ConfigurationError::MissingBinding { id, platform } => {
                write!(f, "component '{}' has no {} implementation", id, platform)
            }
            ConfigurationError::Unregistered { id } => {
                write!(f, "no component registered under id '{}'", id)
            }
            ConfigurationError::AlreadyInstalled => {
                write!(f, "process variant table installed twice")
            }
            ConfigurationError::NotInstalled => {
                write!(f, "process variant table read before installation")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
