//! Registration and resolution of platform variants.
//!
//! The registry uses a two-phase approach:
//!
//! 1. **Registration**: during application startup, every logical
//!    component id is registered with one implementation per platform.
//! 2. **Binding**: the registry is bound once to the process's fixed
//!    platform, validating completeness and flattening to a plain
//!    id-to-implementation table.
//!
//! Binding up front means resolution carries no runtime branching: a
//! given process never resolves the same id to different implementations,
//! so the flattened table is the permanent memoization.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::context::Platform;

use super::error::ConfigurationError;

#[derive(Debug, Clone)]
struct PlatformSlots<T> {
    web: Option<T>,
    native: Option<T>,
}

impl<T> PlatformSlots<T> {
    fn empty() -> Self {
        Self {
            web: None,
            native: None,
        }
    }

    fn get(&self, platform: Platform) -> Option<&T> {
        match platform {
            Platform::Web => self.web.as_ref(),
            Platform::Native => self.native.as_ref(),
        }
    }

    fn slot(&mut self, platform: Platform) -> &mut Option<T> {
        match platform {
            Platform::Web => &mut self.web,
            Platform::Native => &mut self.native,
        }
    }

    fn into_platform(self, platform: Platform) -> Option<T> {
        match platform {
            Platform::Web => self.web,
            Platform::Native => self.native,
        }
    }
}

/// Registration-phase collection of per-platform implementations.
///
/// Populated during process initialization, before any resolution; all
/// registrations complete before [`bind`] fixes the platform. Duplicate
/// `(id, platform)` registrations are rejected immediately rather than
/// silently shadowed.
///
/// [`bind`]: VariantRegistry::bind
///
/// # Example
///
/// ```rust
/// use uniform::{Platform, VariantRegistry};
///
/// let mut registry = VariantRegistry::new();
/// registry.register("Link", Platform::Web, "next/link").unwrap();
/// registry.register("Link", Platform::Native, "expo-router/link").unwrap();
///
/// let variants = registry.bind(Platform::Web).unwrap();
/// assert_eq!(variants.resolve("Link").unwrap(), &"next/link");
/// ```
#[derive(Debug, Clone)]
pub struct VariantRegistry<T> {
    entries: Vec<(String, PlatformSlots<T>)>,
}

impl<T> VariantRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers an implementation for a component id on one platform.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateBinding`] if the pair was
    /// already registered.
    pub fn register(
        &mut self,
        id: &str,
        platform: Platform,
        implementation: T,
    ) -> Result<(), ConfigurationError> {
        let index = match self.entries.iter().position(|(entry, _)| entry == id) {
            Some(index) => index,
            None => {
                self.entries.push((id.to_string(), PlatformSlots::empty()));
                self.entries.len() - 1
            }
        };
        let slot = self.entries[index].1.slot(platform);
        if slot.is_some() {
            return Err(ConfigurationError::DuplicateBinding {
                id: id.to_string(),
                platform,
            });
        }
        *slot = Some(implementation);
        Ok(())
    }

    /// Registered component ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Number of registered component ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fixes the platform and flattens the registry for resolution.
    ///
    /// Every id must carry exactly one implementation per recognized
    /// platform — a binding missing for *any* platform is a wiring error
    /// even if the current process would never select it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingBinding`] naming the first
    /// incomplete id.
    pub fn bind(self, platform: Platform) -> Result<BoundVariants<T>, ConfigurationError> {
        for (id, slots) in &self.entries {
            for required in Platform::ALL {
                if slots.get(required).is_none() {
                    return Err(ConfigurationError::MissingBinding {
                        id: id.clone(),
                        platform: required,
                    });
                }
            }
        }

        let mut implementations = HashMap::with_capacity(self.entries.len());
        for (id, slots) in self.entries {
            if let Some(implementation) = slots.into_platform(platform) {
                implementations.insert(id, implementation);
            }
        }
        Ok(BoundVariants {
            platform,
            implementations,
        })
    }
}

impl<T> Default for VariantRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A registry bound to the process's fixed platform.
///
/// Resolution is a pure map lookup; there is no fallback and no default
/// implementation. An unknown id is a configuration error surfaced to
/// fail startup, never a recoverable runtime condition.
#[derive(Debug, Clone)]
pub struct BoundVariants<T> {
    platform: Platform,
    implementations: HashMap<String, T>,
}

impl<T> BoundVariants<T> {
    /// The platform this table was bound to.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The implementation registered for the id on the bound platform.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Unregistered`] for unknown ids.
    pub fn resolve(&self, id: &str) -> Result<&T, ConfigurationError> {
        self.implementations
            .get(id)
            .ok_or_else(|| ConfigurationError::Unregistered { id: id.to_string() })
    }

    /// Whether an implementation exists for the id.
    pub fn has(&self, id: &str) -> bool {
        self.implementations.contains_key(id)
    }

    /// Number of bound component ids.
    pub fn len(&self) -> usize {
        self.implementations.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.implementations.is_empty()
    }
}

/// A write-once, read-many slot for the process-wide variant table.
///
/// When the host's startup sequence strictly orders registration before
/// resolution, a plain [`BoundVariants`] is enough. When it can't (lazy
/// module loading, test harnesses), this guard enforces the ordering: the
/// table is installed exactly once and read-only afterwards.
///
/// # Example
///
/// ```rust
/// use uniform::{Platform, ProcessVariants, VariantRegistry};
///
/// static LINKS: ProcessVariants<&str> = ProcessVariants::new();
///
/// let mut registry = VariantRegistry::new();
/// registry.register("Link", Platform::Web, "next/link").unwrap();
/// registry.register("Link", Platform::Native, "expo-router/link").unwrap();
/// LINKS.install(registry.bind(Platform::current()).unwrap()).unwrap();
///
/// let link = LINKS.resolve("Link").unwrap();
/// # let _ = link;
/// ```
#[derive(Debug)]
pub struct ProcessVariants<T> {
    slot: OnceCell<BoundVariants<T>>,
}

impl<T> ProcessVariants<T> {
    /// Creates an empty slot, usable in `static` position.
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Installs the bound table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::AlreadyInstalled`] on a second call.
    pub fn install(&self, variants: BoundVariants<T>) -> Result<(), ConfigurationError> {
        self.slot
            .set(variants)
            .map_err(|_| ConfigurationError::AlreadyInstalled)
    }

    /// The installed table, `None` before installation.
    pub fn get(&self) -> Option<&BoundVariants<T>> {
        self.slot.get()
    }

    /// Resolves an id against the installed table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NotInstalled`] before installation,
    /// otherwise whatever [`BoundVariants::resolve`] returns.
    pub fn resolve(&self, id: &str) -> Result<&T, ConfigurationError> {
        self.slot
            .get()
            .ok_or(ConfigurationError::NotInstalled)?
            .resolve(id)
    }
}

impl<T> Default for ProcessVariants<T> {
    fn default() -> Self {
        Self::new()
    }
}
