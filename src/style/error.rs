//! Style validation and resolution errors.

/// Error returned when a descriptor or scale is malformed.
///
/// All variants are programmer errors: correct descriptors validated once
/// at build time never produce them in steady-state operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A conditional value is keyed by a breakpoint the scale doesn't define.
    UnknownBreakpoint {
        group: String,
        property: String,
        breakpoint: String,
    },
    /// The runtime context names a breakpoint the scale doesn't define.
    UnknownContextBreakpoint { breakpoint: String },
    /// A spread references a style group that doesn't exist.
    UnknownSpread { from: String, to: String },
    /// A cycle was detected in spread expansion.
    SpreadCycle { path: Vec<String> },
    /// Two style groups share a name.
    DuplicateGroup { name: String },
    /// A breakpoint name appears twice in the scale.
    DuplicateBreakpoint { name: String },
    /// The breakpoint scale has no entries.
    EmptyBreakpoints,
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownBreakpoint {
                group,
                property,
                breakpoint,
            } => {
                write!(
                    f,
                    "style group '{}' property '{}' uses unknown breakpoint '{}'",
                    group, property, breakpoint
                )
            }
            StyleError::UnknownContextBreakpoint { breakpoint } => {
                write!(
                    f,
                    "runtime context names unknown breakpoint '{}'",
                    breakpoint
                )
            }
            StyleError::UnknownSpread { from, to } => {
                write!(
                    f,
                    "style group '{}' spreads non-existent group '{}'",
                    from, to
                )
            }
            StyleError::SpreadCycle { path } => {
                write!(f, "cycle detected in style spreads: {}", path.join(" -> "))
            }
            StyleError::DuplicateGroup { name } => {
                write!(f, "style group '{}' is declared twice", name)
            }
            StyleError::DuplicateBreakpoint { name } => {
                write!(f, "breakpoint '{}' is declared twice in the scale", name)
            }
            StyleError::EmptyBreakpoints => {
                write!(f, "breakpoint scale must declare at least one breakpoint")
            }
        }
    }
}

impl std::error::Error for StyleError {}
