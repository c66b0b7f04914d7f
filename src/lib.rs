//! Responsive style resolution and platform variant selection.
//!
//! `uniform` is the resolution layer of a cross-platform (web + native)
//! rendering stack. It answers two questions a renderer asks on every
//! screen, without the renderer knowing how the answers were produced:
//!
//! - *What does this style mean right now?* Declarative style sheets —
//!   per-property values that may vary by breakpoint or be computed from
//!   the active theme — resolve into flat property maps for the current
//!   [`RuntimeContext`], and re-resolve whenever the context or theme
//!   changes.
//! - *Which implementation of this component runs here?* Logical
//!   component ids map to per-platform implementations chosen once per
//!   process, with ambiguous or missing bindings rejected at startup.
//!
//! # Responsive styles
//!
//! Breakpoint-conditional values follow a min-width cascade: a value
//! declared at `md` applies at `md` and every larger breakpoint until a
//! larger declaration overrides it. Below the smallest declared
//! breakpoint the property is simply omitted — the renderer supplies its
//! own fallback.
//!
//! ```rust
//! use uniform::{
//!     Breakpoints, ConditionalValue, Platform, RuntimeContext, StyleDescriptor, StyleSheet,
//!     StyleSheetDescriptor, Theme,
//! };
//!
//! let scale = Breakpoints::new(["xs", "md", "lg", "xl"]).unwrap();
//! let descriptor = StyleSheetDescriptor::new()
//!     .group(
//!         "grid",
//!         StyleDescriptor::new().set("display", "flex").responsive(
//!             "flexDirection",
//!             ConditionalValue::new().at("md", "row").at("lg", "column"),
//!         ),
//!     )
//!     .computed("page", |theme, ctx| {
//!         StyleDescriptor::new()
//!             .set("gap", theme.spacing(2.0))
//!             .set("paddingTop", if ctx.breakpoint == "xs" { 32 } else { 48 })
//!     });
//!
//! let mut sheet = StyleSheet::new(scale, descriptor).unwrap();
//! let theme = Theme::new().add("accent", "#9d5f4a");
//!
//! let resolved = sheet
//!     .resolve(&theme, &RuntimeContext::new("md", Platform::Web))
//!     .unwrap();
//! assert_eq!(
//!     resolved.group("grid").unwrap().get("flexDirection"),
//!     Some(&"row".into())
//! );
//! ```
//!
//! Resolution is pure and memoized by (theme identity, context):
//! unchanged inputs return the identical `Arc`, so downstream renderers
//! can skip re-renders on pointer equality.
//!
//! # Platform variants
//!
//! ```rust
//! use uniform::{Platform, VariantRegistry};
//!
//! let mut registry = VariantRegistry::new();
//! registry.register("Link", Platform::Web, "next/link").unwrap();
//! registry.register("Link", Platform::Native, "expo-router/link").unwrap();
//!
//! let variants = registry.bind(Platform::Web).unwrap();
//! assert_eq!(variants.resolve("Link").unwrap(), &"next/link");
//! ```
//!
//! Themes come in light/dark pairs via [`AdaptiveTheme`], which follows
//! the OS color mode (overridable with [`set_theme_detector`]).

mod breakpoint;
mod context;
mod style;
mod theme;
mod variant;

pub use breakpoint::Breakpoints;
pub use context::{Platform, RuntimeContext};
pub use style::{
    ConditionalValue, ResolvedStyle, ResolvedStyleSheet, StyleDescriptor, StyleError, StyleSheet,
    StyleSheetDescriptor,
};
pub use theme::{set_theme_detector, AdaptiveTheme, ColorMode, Theme, ThemeChoice, ThemeId};
pub use variant::{BoundVariants, ConfigurationError, ProcessVariants, VariantRegistry};
