//! Platform-specific component variants.
//!
//! This module provides:
//!
//! - [`VariantRegistry`]: registration of per-platform implementations
//!   for logical component ids
//! - [`BoundVariants`]: the registry flattened for one platform, the
//!   permanent O(1) lookup a process resolves against
//! - [`ProcessVariants`]: a write-once, read-many process-wide slot for
//!   a bound registry
//! - [`ConfigurationError`]: errors from ambiguous or incomplete bindings
//!
//! The registry replaces build-tool file substitution (one source file
//! per platform) with an explicit table: build-time-fixed, ambiguity
//! rejected, no runtime branching at call sites.

mod error;
mod registry;

pub use error::ConfigurationError;
pub use registry::{BoundVariants, ProcessVariants, VariantRegistry};
