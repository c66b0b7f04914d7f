//! Declarative style descriptors.

use std::sync::Arc;

use serde_json::Value;

use crate::breakpoint::Breakpoints;
use crate::context::RuntimeContext;
use crate::theme::Theme;

use super::error::StyleError;

/// A property value expressed as alternatives keyed by breakpoint.
///
/// A value declared at a breakpoint applies at that breakpoint and every
/// larger one until a larger declaration overrides it (min-width cascade).
/// Below the smallest declared key the property is omitted entirely.
///
/// # Example
///
/// ```rust
/// use uniform::ConditionalValue;
///
/// let direction = ConditionalValue::new()
///     .at("md", "row")
///     .at("lg", "column");
/// assert_eq!(direction.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionalValue {
    pub(crate) entries: Vec<(String, Value)>,
}

impl ConditionalValue {
    /// Creates an empty conditional value.
    ///
    /// An empty conditional resolves to "omit the property" in every
    /// context; that is defined behavior, not an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the value at a breakpoint, returning the conditional for
    /// chaining. Re-declaring a breakpoint replaces its value.
    pub fn at<V: Into<Value>>(mut self, breakpoint: &str, value: V) -> Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(b, _)| b == breakpoint) {
            entry.1 = value;
        } else {
            self.entries.push((breakpoint.to_string(), value));
        }
        self
    }

    /// Number of declared breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no breakpoints are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selects the value for the current breakpoint position: the entry
    /// with the largest scale position that is <= `current`.
    ///
    /// Returns `Ok(None)` when no entry qualifies (the gap rule).
    pub(crate) fn pick<'a>(
        &'a self,
        scale: &Breakpoints,
        current: usize,
        group: &str,
        property: &str,
    ) -> Result<Option<&'a Value>, StyleError> {
        let mut best: Option<(usize, &Value)> = None;
        for (breakpoint, value) in &self.entries {
            let position =
                scale
                    .position(breakpoint)
                    .ok_or_else(|| StyleError::UnknownBreakpoint {
                        group: group.to_string(),
                        property: property.to_string(),
                        breakpoint: breakpoint.clone(),
                    })?;
            if position <= current && best.map_or(true, |(b, _)| position >= b) {
                best = Some((position, value));
            }
        }
        Ok(best.map(|(_, value)| value))
    }
}

/// One entry of a style descriptor, in declaration order.
#[derive(Debug, Clone)]
pub(crate) enum StyleEntry {
    /// A literal property value, copied through unchanged.
    Literal(String, Value),
    /// A breakpoint-conditional property value.
    Responsive(String, ConditionalValue),
    /// The flattened properties of another resolved group.
    Spread(String),
}

/// The declarative description of one style group.
///
/// Entries keep declaration order; on key collision the later write wins
/// while the first occurrence keeps its position, matching how spreads
/// compose with explicit overrides.
///
/// # Example
///
/// ```rust
/// use uniform::{ConditionalValue, StyleDescriptor};
///
/// let grid = StyleDescriptor::new()
///     .set("display", "flex")
///     .set("gap", 16)
///     .responsive(
///         "flexDirection",
///         ConditionalValue::new().at("md", "row").at("lg", "column"),
///     );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleDescriptor {
    pub(crate) entries: Vec<StyleEntry>,
}

impl StyleDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a literal property, returning the descriptor for chaining.
    pub fn set<V: Into<Value>>(mut self, property: &str, value: V) -> Self {
        self.entries
            .push(StyleEntry::Literal(property.to_string(), value.into()));
        self
    }

    /// Declares a breakpoint-conditional property.
    pub fn responsive(mut self, property: &str, value: ConditionalValue) -> Self {
        self.entries
            .push(StyleEntry::Responsive(property.to_string(), value));
        self
    }

    /// Spreads another group's resolved properties at this position.
    ///
    /// The referenced group is flattened before later entries are applied,
    /// so properties declared after the spread override spread ones.
    pub fn spread(mut self, group: &str) -> Self {
        self.entries.push(StyleEntry::Spread(group.to_string()));
        self
    }

    /// Number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the descriptor has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A computed group: a pure function of theme and context.
pub(crate) type ComputedGroup =
    Arc<dyn Fn(&Theme, &RuntimeContext) -> StyleDescriptor + Send + Sync>;

/// How one group's descriptor is obtained.
#[derive(Clone)]
pub(crate) enum GroupDescriptor {
    /// Declared up front; validated when the sheet is built.
    Static(StyleDescriptor),
    /// Produced at resolution time; validated when first resolved.
    Computed(ComputedGroup),
}

impl std::fmt::Debug for GroupDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupDescriptor::Static(descriptor) => {
                f.debug_tuple("Static").field(descriptor).finish()
            }
            GroupDescriptor::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// An ordered collection of named style groups.
///
/// Groups are either static descriptors or functions computed from
/// `(theme, context)` at resolution time. Computed functions must be pure
/// and reentrant: they may run once per renderer (server and client
/// resolve the same sheet independently) and must not assume a single
/// invocation.
///
/// # Example
///
/// ```rust
/// use uniform::{ConditionalValue, StyleDescriptor, StyleSheetDescriptor};
///
/// let sheet = StyleSheetDescriptor::new()
///     .group(
///         "hero",
///         StyleDescriptor::new().set("alignItems", "center").responsive(
///             "backgroundColor",
///             ConditionalValue::new().at("md", "red").at("lg", "blue"),
///         ),
///     )
///     .computed("page", |theme, ctx| {
///         let wide = ctx.breakpoint != "xs";
///         StyleDescriptor::new()
///             .set("paddingTop", if wide { 48 } else { 32 })
///             .set("gap", theme.spacing(4.0))
///     });
/// assert_eq!(sheet.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSheetDescriptor {
    pub(crate) groups: Vec<(String, GroupDescriptor)>,
}

impl StyleSheetDescriptor {
    /// Creates an empty sheet descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a static style group, returning the sheet for chaining.
    pub fn group(mut self, name: &str, descriptor: StyleDescriptor) -> Self {
        self.groups
            .push((name.to_string(), GroupDescriptor::Static(descriptor)));
        self
    }

    /// Adds a computed style group.
    ///
    /// The function is invoked with the theme and context on every
    /// (non-memoized) resolution and must be pure: no side effects, same
    /// descriptor for identical inputs.
    pub fn computed<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(&Theme, &RuntimeContext) -> StyleDescriptor + Send + Sync + 'static,
    {
        self.groups
            .push((name.to_string(), GroupDescriptor::Computed(Arc::new(f))));
        self
    }

    /// Group names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    /// Number of declared groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sheet has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Validates everything checkable without invoking computed groups.
    ///
    /// Checks duplicate group names, unknown breakpoint keys and unknown
    /// spread targets in static groups, and spread cycles among static
    /// groups. Computed groups are validated at their first resolution.
    ///
    /// This is called automatically by [`StyleSheet::new`], but can be
    /// called explicitly for early error detection.
    ///
    /// [`StyleSheet::new`]: super::StyleSheet::new
    pub fn validate(&self, scale: &Breakpoints) -> Result<(), StyleError> {
        for (i, (name, _)) in self.groups.iter().enumerate() {
            if self.groups[..i].iter().any(|(other, _)| other == name) {
                return Err(StyleError::DuplicateGroup { name: name.clone() });
            }
        }

        for (name, group) in &self.groups {
            let GroupDescriptor::Static(descriptor) = group else {
                continue;
            };
            for entry in &descriptor.entries {
                match entry {
                    StyleEntry::Literal(..) => {}
                    StyleEntry::Responsive(property, conditional) => {
                        for (breakpoint, _) in &conditional.entries {
                            if !scale.contains(breakpoint) {
                                return Err(StyleError::UnknownBreakpoint {
                                    group: name.clone(),
                                    property: property.clone(),
                                    breakpoint: breakpoint.clone(),
                                });
                            }
                        }
                    }
                    StyleEntry::Spread(target) => {
                        if !self.groups.iter().any(|(other, _)| other == target) {
                            return Err(StyleError::UnknownSpread {
                                from: name.clone(),
                                to: target.clone(),
                            });
                        }
                    }
                }
            }
        }

        for (name, _) in &self.groups {
            self.check_spread_cycle(name, &mut Vec::new())?;
        }
        Ok(())
    }

    /// Walks static spread edges depth-first looking for a cycle.
    ///
    /// Edges into computed groups stop the walk; their spreads are only
    /// known at resolution time, where the resolver repeats this check.
    fn check_spread_cycle(&self, name: &str, stack: &mut Vec<String>) -> Result<(), StyleError> {
        if stack.iter().any(|seen| seen == name) {
            let mut path = stack.clone();
            path.push(name.to_string());
            return Err(StyleError::SpreadCycle { path });
        }
        let Some((_, GroupDescriptor::Static(descriptor))) =
            self.groups.iter().find(|(other, _)| other == name)
        else {
            return Ok(());
        };
        stack.push(name.to_string());
        for entry in &descriptor.entries {
            if let StyleEntry::Spread(target) = entry {
                self.check_spread_cycle(target, stack)?;
            }
        }
        stack.pop();
        Ok(())
    }
}
