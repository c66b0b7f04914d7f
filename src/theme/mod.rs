//! Theme tokens and light/dark selection.
//!
//! This module provides:
//!
//! - [`Theme`]: a token collection with a spacing scale and fluent builder API
//! - [`AdaptiveTheme`]: light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: reference type for selecting themes at resolution time
//! - [`ColorMode`]: light or dark color mode enum
//!
//! Themes are opaque to the resolver: it threads them into computed style
//! groups and uses their identity for memoization, nothing more. A theme
//! never changes in place; switching light/dark replaces the whole theme.

mod adaptive;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use theme::{Theme, ThemeId};
