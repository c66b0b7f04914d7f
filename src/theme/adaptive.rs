//! Adaptive themes that respond to system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme that adapts based on the user's display mode.
///
/// Contains separate themes for light and dark modes, automatically
/// selecting the appropriate one based on OS settings. Switching modes
/// replaces the whole theme, so resolvers memoizing on theme identity
/// recompute on the next resolution.
///
/// # Example
///
/// ```rust
/// use uniform::{
///     AdaptiveTheme, Breakpoints, Platform, RuntimeContext, StyleDescriptor, StyleSheet,
///     StyleSheetDescriptor, Theme,
/// };
///
/// let light = Theme::new().add("pageBackground", "#fff");
/// let dark = Theme::new().add("pageBackground", "#111");
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let descriptor = StyleSheetDescriptor::new().computed("page", |theme, _| {
///     StyleDescriptor::new().set(
///         "backgroundColor",
///         theme.token("pageBackground").cloned().unwrap_or_default(),
///     )
/// });
/// let mut sheet =
///     StyleSheet::new(Breakpoints::new(["xs", "md"]).unwrap(), descriptor).unwrap();
///
/// // Resolves with whichever mode the OS reports.
/// let ctx = RuntimeContext::new("xs", Platform::current());
/// let resolved = sheet.resolve(&adaptive, &ctx).unwrap();
/// assert!(resolved.group("page").unwrap().has("backgroundColor"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub(crate) fn resolve(&self) -> Theme {
        match detect_color_mode() {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
