//! End-to-end tests for a cross-platform screen.
//!
//! These tests drive the resolver and the variant registry the way an
//! application shell does: a style sheet with responsive, computed, and
//! spread groups resolved across breakpoints and themes, and a logical
//! Link component bound per platform.

use std::sync::Arc;

use serde_json::json;
use serial_test::serial;
use uniform::{
    set_theme_detector, AdaptiveTheme, Breakpoints, ColorMode, ConditionalValue, Platform,
    ProcessVariants, RuntimeContext, StyleDescriptor, StyleSheet, StyleSheetDescriptor, Theme,
    VariantRegistry,
};

fn scale() -> Breakpoints {
    Breakpoints::new(["xs", "md", "lg", "xl"]).unwrap()
}

fn screen_descriptor() -> StyleSheetDescriptor {
    StyleSheetDescriptor::new()
        .computed("page", |theme, ctx| {
            let md_up = ctx.breakpoint != "xs";
            StyleDescriptor::new()
                .set("paddingHorizontal", if md_up { 32 } else { 16 })
                .set("paddingTop", if md_up { 48 } else { 32 })
                .set("gap", theme.spacing(3.0))
                .set(
                    "backgroundColor",
                    theme.token("pageBackground").cloned().unwrap_or_else(|| "#fff".into()),
                )
        })
        .group(
            "hero",
            StyleDescriptor::new()
                .set("alignItems", "center")
                .set("gap", 16)
                .responsive(
                    "backgroundColor",
                    ConditionalValue::new().at("md", "red").at("lg", "blue"),
                ),
        )
        .group(
            "title",
            StyleDescriptor::new()
                .set("textAlign", "center")
                .set("fontWeight", "700")
                .responsive(
                    "fontSize",
                    ConditionalValue::new().at("xs", 28).at("md", 38).at("lg", 46),
                ),
        )
        .group(
            "absoluteFill",
            StyleDescriptor::new()
                .set("position", "absolute")
                .set("top", 0)
                .set("left", 0)
                .set("right", 0)
                .set("bottom", 0),
        )
        .group(
            "cardOverlay",
            StyleDescriptor::new()
                .spread("absoluteFill")
                .set("backgroundColor", "rgba(0,0,0,0.18)"),
        )
        .group(
            "grid",
            StyleDescriptor::new().set("display", "flex").responsive(
                "flexDirection",
                ConditionalValue::new().at("md", "row").at("lg", "column"),
            ),
        )
        .group(
            "card",
            StyleDescriptor::new().set("borderRadius", 12).responsive(
                "height",
                ConditionalValue::new().at("md", 220).at("lg", 180),
            ),
        )
}

fn ctx(breakpoint: &str) -> RuntimeContext {
    RuntimeContext::new(breakpoint, Platform::Web)
}

#[test]
fn screen_resolves_per_breakpoint() {
    let mut sheet = StyleSheet::new(scale(), screen_descriptor()).unwrap();
    let theme = Theme::new();

    let xs = sheet.resolve(&theme, &ctx("xs")).unwrap();
    assert_eq!(xs.group("page").unwrap().get("paddingHorizontal"), Some(&16.into()));
    assert_eq!(xs.group("title").unwrap().get("fontSize"), Some(&28.into()));
    // Below their smallest keys, responsive properties disappear.
    assert!(!xs.group("hero").unwrap().has("backgroundColor"));
    assert!(!xs.group("grid").unwrap().has("flexDirection"));
    assert!(!xs.group("card").unwrap().has("height"));

    let md = sheet.resolve(&theme, &ctx("md")).unwrap();
    assert_eq!(md.group("page").unwrap().get("paddingHorizontal"), Some(&32.into()));
    assert_eq!(md.group("hero").unwrap().get("backgroundColor"), Some(&"red".into()));
    assert_eq!(md.group("title").unwrap().get("fontSize"), Some(&38.into()));
    assert_eq!(md.group("grid").unwrap().get("flexDirection"), Some(&"row".into()));
    assert_eq!(md.group("card").unwrap().get("height"), Some(&220.into()));

    let lg = sheet.resolve(&theme, &ctx("lg")).unwrap();
    assert_eq!(lg.group("hero").unwrap().get("backgroundColor"), Some(&"blue".into()));
    assert_eq!(lg.group("title").unwrap().get("fontSize"), Some(&46.into()));
    assert_eq!(lg.group("grid").unwrap().get("flexDirection"), Some(&"column".into()));
    assert_eq!(lg.group("card").unwrap().get("height"), Some(&180.into()));

    // xl keeps the lg declarations: nothing larger overrides them.
    let xl = sheet.resolve(&theme, &ctx("xl")).unwrap();
    assert_eq!(xl.group("title").unwrap().get("fontSize"), Some(&46.into()));
    assert_eq!(xl.group("grid").unwrap().get("flexDirection"), Some(&"column".into()));
}

#[test]
fn overlay_spreads_fill_and_overrides() {
    let mut sheet = StyleSheet::new(scale(), screen_descriptor()).unwrap();

    let resolved = sheet.resolve(&Theme::new(), &ctx("md")).unwrap();
    let overlay = resolved.group("cardOverlay").unwrap();
    assert_eq!(overlay.get("position"), Some(&"absolute".into()));
    assert_eq!(overlay.get("top"), Some(&0.into()));
    assert_eq!(overlay.get("backgroundColor"), Some(&"rgba(0,0,0,0.18)".into()));
    assert_eq!(overlay.len(), 6);
}

#[test]
fn theme_tokens_flow_into_computed_groups() {
    let mut sheet = StyleSheet::new(scale(), screen_descriptor()).unwrap();
    let theme = Theme::new()
        .add("pageBackground", "#faf6f2")
        .spacing_unit(8.0);

    let resolved = sheet.resolve(&theme, &ctx("md")).unwrap();
    let page = resolved.group("page").unwrap();
    assert_eq!(page.get("backgroundColor"), Some(&"#faf6f2".into()));
    assert_eq!(page.get("gap"), Some(&24.0.into()));
}

#[test]
fn context_change_recomputes_and_stable_inputs_do_not() {
    let mut sheet = StyleSheet::new(scale(), screen_descriptor()).unwrap();
    let theme = Theme::new();

    let first = sheet.resolve(&theme, &ctx("md")).unwrap();
    let again = sheet.resolve(&theme, &ctx("md")).unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    let rotated = sheet.resolve(&theme, &ctx("lg")).unwrap();
    assert!(!Arc::ptr_eq(&first, &rotated));

    let back = sheet.resolve(&theme, &ctx("md")).unwrap();
    assert_eq!(*first, *back);
}

#[test]
#[serial]
fn adaptive_theme_switch_invalidates_memoization() {
    let light = Theme::new().add("pageBackground", "#fff");
    let dark = Theme::new().add("pageBackground", "#111");
    let adaptive = AdaptiveTheme::new(light, dark);
    let mut sheet = StyleSheet::new(scale(), screen_descriptor()).unwrap();
    let md = ctx("md");

    set_theme_detector(|| ColorMode::Light);
    let in_light = sheet.resolve(&adaptive, &md).unwrap();
    assert_eq!(
        in_light.group("page").unwrap().get("backgroundColor"),
        Some(&"#fff".into())
    );
    let in_light_again = sheet.resolve(&adaptive, &md).unwrap();
    assert!(Arc::ptr_eq(&in_light, &in_light_again));

    set_theme_detector(|| ColorMode::Dark);
    let in_dark = sheet.resolve(&adaptive, &md).unwrap();
    assert!(!Arc::ptr_eq(&in_light, &in_dark));
    assert_eq!(
        in_dark.group("page").unwrap().get("backgroundColor"),
        Some(&"#111".into())
    );

    set_theme_detector(|| ColorMode::Light);
}

#[test]
fn server_and_client_passes_agree() {
    // Server and client render the same screen independently: separate
    // sheets over a cloned descriptor, no shared mutable state.
    let descriptor = screen_descriptor();
    let theme = Theme::new().add("pageBackground", "#fff");
    let md = ctx("md");

    let (server, client) = std::thread::scope(|scope| {
        let server = scope.spawn(|| {
            let mut sheet = StyleSheet::new(scale(), descriptor.clone()).unwrap();
            sheet.resolve(&theme, &md).unwrap()
        });
        let client = scope.spawn(|| {
            let mut sheet = StyleSheet::new(scale(), descriptor.clone()).unwrap();
            sheet.resolve(&theme, &md).unwrap()
        });
        (server.join().unwrap(), client.join().unwrap())
    });

    assert_eq!(*server, *client);
}

#[test]
fn resolved_screen_serializes_for_injection() {
    let descriptor = StyleSheetDescriptor::new()
        .group(
            "hero",
            StyleDescriptor::new().set("alignItems", "center").responsive(
                "backgroundColor",
                ConditionalValue::new().at("md", "red").at("lg", "blue"),
            ),
        )
        .group(
            "grid",
            StyleDescriptor::new().set("display", "flex").responsive(
                "flexDirection",
                ConditionalValue::new().at("md", "row").at("lg", "column"),
            ),
        );
    let mut sheet = StyleSheet::new(scale(), descriptor).unwrap();

    let resolved = sheet.resolve(&Theme::new(), &ctx("lg")).unwrap();
    assert_eq!(
        serde_json::to_value(&*resolved).unwrap(),
        json!({
            "hero": { "alignItems": "center", "backgroundColor": "blue" },
            "grid": { "display": "flex", "flexDirection": "column" },
        })
    );
}

type LinkRenderer = fn(&str, &str) -> String;

fn web_link(href: &str, label: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href, label)
}

fn native_link(href: &str, label: &str) -> String {
    format!("[navigate {} -> {}]", label, href)
}

#[test]
fn link_component_resolves_per_platform() {
    let mut registry: VariantRegistry<LinkRenderer> = VariantRegistry::new();
    registry.register("Link", Platform::Web, web_link).unwrap();
    registry
        .register("Link", Platform::Native, native_link)
        .unwrap();

    // The call site hands its own props to whichever implementation the
    // bound platform selected.
    let web = registry.clone().bind(Platform::Web).unwrap();
    let render = web.resolve("Link").unwrap();
    assert_eq!(render("/home", "Home"), "<a href=\"/home\">Home</a>");

    let native = registry.bind(Platform::Native).unwrap();
    let render = native.resolve("Link").unwrap();
    assert_eq!(render("/home", "Home"), "[navigate Home -> /home]");
}

#[test]
fn process_wide_link_table() {
    static COMPONENTS: ProcessVariants<LinkRenderer> = ProcessVariants::new();

    let mut registry: VariantRegistry<LinkRenderer> = VariantRegistry::new();
    registry.register("Link", Platform::Web, web_link).unwrap();
    registry
        .register("Link", Platform::Native, native_link)
        .unwrap();
    COMPONENTS
        .install(registry.bind(Platform::Web).unwrap())
        .unwrap();

    let render = COMPONENTS.resolve("Link").unwrap();
    assert_eq!(render("/about", "About"), "<a href=\"/about\">About</a>");
}
