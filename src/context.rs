//! Runtime context threaded into style resolution.

use serde::{Deserialize, Serialize};

/// The target platform a process was built for.
///
/// Platform is fixed for the entire process lifetime: it is decided by the
/// build target, not discovered or switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Browser / server-rendered web targets.
    Web,
    /// Native mobile targets (iOS and Android collapse to one variant).
    Native,
}

impl Platform {
    /// All recognized platforms, in declaration order.
    pub const ALL: [Platform; 2] = [Platform::Web, Platform::Native];

    /// The platform implied by the current build target.
    ///
    /// Wasm builds are web; everything else is native. Hosts that embed a
    /// web renderer in a non-wasm process should pass their platform
    /// explicitly instead of relying on this default.
    pub fn current() -> Platform {
        if cfg!(target_family = "wasm") {
            Platform::Web
        } else {
            Platform::Native
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Web => write!(f, "web"),
            Platform::Native => write!(f, "native"),
        }
    }
}

/// The inputs style resolution depends on besides the theme.
///
/// A context is a plain value: the host's viewport observer builds a new
/// one whenever the active breakpoint changes and re-invokes resolution
/// with it. Nothing here is ambient or mutable.
///
/// # Example
///
/// ```rust
/// use uniform::{Platform, RuntimeContext};
///
/// let ctx = RuntimeContext::new("md", Platform::Web);
/// assert_eq!(ctx.breakpoint, "md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RuntimeContext {
    /// Name of the currently active breakpoint.
    pub breakpoint: String,
    /// The process's build-time platform.
    pub platform: Platform,
}

impl RuntimeContext {
    /// Creates a context for the given breakpoint and platform.
    pub fn new(breakpoint: impl Into<String>, platform: Platform) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            platform,
        }
    }
}
