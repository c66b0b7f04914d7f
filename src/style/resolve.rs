//! Resolution of style descriptors into flat property maps.
//!
//! This module turns a validated [`StyleSheetDescriptor`] plus the current
//! theme and runtime context into concrete per-group property maps. The
//! cascade rule ("largest declared breakpoint <= the active one wins"), the
//! gap rule (no qualifying declaration means the property is omitted) and
//! spread expansion all live here, so the behavior is an explicit contract
//! of the resolver rather than something a renderer infers.

use std::borrow::Cow;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::breakpoint::Breakpoints;
use crate::context::RuntimeContext;
use crate::theme::{Theme, ThemeChoice, ThemeId};

use super::descriptor::{GroupDescriptor, StyleEntry, StyleSheetDescriptor};
use super::error::StyleError;

/// The flat property map one style group resolves to.
///
/// Properties keep their declaration order (first occurrence wins the
/// position, last write wins the value), which keeps serialized output
/// stable for server rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    properties: Vec<(String, Value)>,
}

impl ResolvedStyle {
    /// The resolved value of a property, `None` if it was omitted.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value)
    }

    /// Whether the property resolved to a value.
    pub fn has(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of resolved properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether every property was omitted (or none declared).
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Serialize for ResolvedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// All style groups of a sheet, resolved for one (theme, context) pair.
///
/// Derived, never mutated in place: a new sheet is produced whenever the
/// theme or context changes. Handed out in an [`Arc`] so unchanged inputs
/// can return the identical object and downstream renderers can skip work
/// on pointer equality.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyleSheet {
    groups: Vec<(String, ResolvedStyle)>,
}

impl ResolvedStyleSheet {
    /// The resolved properties of a group, `None` for unknown names.
    pub fn group(&self, name: &str) -> Option<&ResolvedStyle> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, resolved)| resolved)
    }

    /// Whether the sheet resolved a group with this name.
    pub fn has(&self, name: &str) -> bool {
        self.group(name).is_some()
    }

    /// Group names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Number of resolved groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sheet has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for ResolvedStyleSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, resolved) in &self.groups {
            map.serialize_entry(name, resolved)?;
        }
        map.end()
    }
}

struct CacheEntry {
    theme: ThemeId,
    ctx: RuntimeContext,
    resolved: Arc<ResolvedStyleSheet>,
}

/// A validated style sheet that resolves against themes and contexts.
///
/// Construction validates everything checkable up front; [`resolve`] is
/// then a pure, bounded, in-memory computation. The sheet memoizes the
/// last resolution by (theme identity, context): identical inputs return
/// the same `Arc`, any change recomputes from scratch.
///
/// A sheet owns its memo state, so concurrent render passes (server and
/// client rendering the same screen) each use their own `StyleSheet` over
/// a cloned descriptor.
///
/// [`resolve`]: StyleSheet::resolve
///
/// # Example
///
/// ```rust
/// use uniform::{
///     Breakpoints, ConditionalValue, Platform, RuntimeContext, StyleDescriptor, StyleSheet,
///     StyleSheetDescriptor, Theme,
/// };
///
/// let scale = Breakpoints::new(["xs", "md", "lg", "xl"]).unwrap();
/// let descriptor = StyleSheetDescriptor::new().group(
///     "grid",
///     StyleDescriptor::new().set("display", "flex").responsive(
///         "flexDirection",
///         ConditionalValue::new().at("md", "row").at("lg", "column"),
///     ),
/// );
///
/// let mut sheet = StyleSheet::new(scale, descriptor).unwrap();
/// let theme = Theme::new();
/// let ctx = RuntimeContext::new("md", Platform::Web);
///
/// let resolved = sheet.resolve(&theme, &ctx).unwrap();
/// let grid = resolved.group("grid").unwrap();
/// assert_eq!(grid.get("flexDirection"), Some(&"row".into()));
/// ```
pub struct StyleSheet {
    scale: Breakpoints,
    descriptor: StyleSheetDescriptor,
    cache: Option<CacheEntry>,
}

impl StyleSheet {
    /// Builds a sheet, validating its static groups against the scale.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] for duplicate groups, unknown breakpoint
    /// keys, unknown spread targets, or spread cycles among static groups.
    pub fn new(scale: Breakpoints, descriptor: StyleSheetDescriptor) -> Result<Self, StyleError> {
        descriptor.validate(&scale)?;
        Ok(Self {
            scale,
            descriptor,
            cache: None,
        })
    }

    /// The breakpoint scale this sheet resolves against.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.scale
    }

    /// Resolves every group for the given theme and context.
    ///
    /// Accepts a [`Theme`] or an [`AdaptiveTheme`] reference. When theme
    /// identity and context are unchanged since the previous call, the
    /// previous `Arc` is returned unchanged (same object identity).
    ///
    /// [`AdaptiveTheme`]: crate::theme::AdaptiveTheme
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the context names an unknown breakpoint,
    /// or if a computed group produces a malformed descriptor (unknown
    /// breakpoint key, unknown spread target, spread cycle). Gap-rule
    /// omissions are not errors.
    pub fn resolve<'a>(
        &mut self,
        theme: impl Into<ThemeChoice<'a>>,
        ctx: &RuntimeContext,
    ) -> Result<Arc<ResolvedStyleSheet>, StyleError> {
        let theme = theme.into().resolve();
        if let Some(cache) = &self.cache {
            if cache.theme == theme.id() && &cache.ctx == ctx {
                return Ok(Arc::clone(&cache.resolved));
            }
        }

        let resolved = Arc::new(self.resolve_fresh(&theme, ctx)?);
        self.cache = Some(CacheEntry {
            theme: theme.id(),
            ctx: ctx.clone(),
            resolved: Arc::clone(&resolved),
        });
        Ok(resolved)
    }

    fn resolve_fresh(
        &self,
        theme: &Theme,
        ctx: &RuntimeContext,
    ) -> Result<ResolvedStyleSheet, StyleError> {
        let current =
            self.scale
                .position(&ctx.breakpoint)
                .ok_or_else(|| StyleError::UnknownContextBreakpoint {
                    breakpoint: ctx.breakpoint.clone(),
                })?;

        // Spread targets resolve on demand, so `done` fills in dependency
        // order and gets reordered to declaration order afterwards.
        let mut done: Vec<(String, ResolvedStyle)> = Vec::with_capacity(self.descriptor.len());
        let mut stack: Vec<String> = Vec::new();
        for (name, _) in &self.descriptor.groups {
            self.resolve_group(name, theme, ctx, current, &mut done, &mut stack)?;
        }

        let mut groups = Vec::with_capacity(done.len());
        for (name, _) in &self.descriptor.groups {
            if let Some(index) = done.iter().position(|(resolved, _)| resolved == name) {
                groups.push(done.swap_remove(index));
            }
        }
        Ok(ResolvedStyleSheet { groups })
    }

    fn resolve_group(
        &self,
        name: &str,
        theme: &Theme,
        ctx: &RuntimeContext,
        current: usize,
        done: &mut Vec<(String, ResolvedStyle)>,
        stack: &mut Vec<String>,
    ) -> Result<(), StyleError> {
        if done.iter().any(|(resolved, _)| resolved == name) {
            return Ok(());
        }
        if stack.iter().any(|pending| pending == name) {
            let mut path = stack.clone();
            path.push(name.to_string());
            return Err(StyleError::SpreadCycle { path });
        }
        let Some((_, group)) = self.descriptor.groups.iter().find(|(id, _)| id == name) else {
            // Only reachable through a spread out of a computed group;
            // static spread targets were checked at construction.
            return Err(StyleError::UnknownSpread {
                from: stack.last().cloned().unwrap_or_default(),
                to: name.to_string(),
            });
        };

        let descriptor = match group {
            GroupDescriptor::Static(descriptor) => Cow::Borrowed(descriptor),
            GroupDescriptor::Computed(compute) => Cow::Owned((**compute)(theme, ctx)),
        };

        stack.push(name.to_string());
        let mut properties: Vec<(String, Value)> = Vec::new();
        for entry in &descriptor.entries {
            match entry {
                StyleEntry::Literal(property, value) => {
                    write_property(&mut properties, property, value.clone());
                }
                StyleEntry::Responsive(property, conditional) => {
                    if let Some(value) = conditional.pick(&self.scale, current, name, property)? {
                        write_property(&mut properties, property, value.clone());
                    }
                }
                StyleEntry::Spread(target) => {
                    self.resolve_group(target, theme, ctx, current, done, stack)?;
                    if let Some((_, resolved)) = done.iter().find(|(id, _)| id == target) {
                        for (property, value) in resolved.iter() {
                            write_property(&mut properties, property, value.clone());
                        }
                    }
                }
            }
        }
        stack.pop();

        done.push((name.to_string(), ResolvedStyle { properties }));
        Ok(())
    }
}

/// Last write wins the value; the first occurrence keeps its position.
fn write_property(properties: &mut Vec<(String, Value)>, property: &str, value: Value) {
    if let Some(entry) = properties.iter_mut().find(|(name, _)| name == property) {
        entry.1 = value;
    } else {
        properties.push((property.to_string(), value));
    }
}
