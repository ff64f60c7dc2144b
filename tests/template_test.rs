//! Style template registry tests.
//!
//! Covers the JSON compatibility surface and the default template set.

use verso::{
    Decoration, DefaultStyleOptions, HtmlDecorationTemplate, HtmlDecorationTemplates, Layout,
    Locator, Style, StyleKind, Tint, Width,
};

#[test]
fn test_set_then_get_preserves_layout_and_width() {
    let mut templates = HtmlDecorationTemplates::new();
    templates.set(
        StyleKind::custom("margin-icon"),
        HtmlDecorationTemplate::new(Layout::Bounds, Width::Viewport),
    );

    let template = templates.get(&StyleKind::custom("margin-icon")).unwrap();
    assert_eq!(template.layout, Layout::Bounds);
    assert_eq!(template.width, Width::Viewport);
}

#[test]
fn test_get_unset_variant_is_absent() {
    let templates = HtmlDecorationTemplates::new();
    assert!(templates.get(&StyleKind::HIGHLIGHT).is_none());
    assert!(!templates.contains(&StyleKind::HIGHLIGHT));
}

#[test]
fn test_default_options_are_overridable() {
    let templates = HtmlDecorationTemplates::default_styles(DefaultStyleOptions {
        default_tint: Tint::rgb(0, 128, 255),
        line_weight: 4,
        corner_radius: 0,
        alpha: 0.5,
    });

    let underline = templates.get(&StyleKind::UNDERLINE).unwrap();
    let css = underline.stylesheet.as_deref().unwrap();
    assert!(css.contains("height: 4px"));
    assert!(css.contains("border-radius: 0px"));

    // The default tint shows up when a decoration carries none.
    let bare = Decoration::new(
        "d1",
        Locator::new("ch1.xhtml"),
        Style::Underline { tint: None },
    );
    assert!((underline.element)(&bare).contains("rgba(0, 128, 255, 1)"));

    let highlight = templates.get(&StyleKind::HIGHLIGHT).unwrap();
    let bare = Decoration::new(
        "d2",
        Locator::new("ch1.xhtml"),
        Style::Highlight {
            tint: None,
            is_active: false,
        },
    );
    assert!((highlight.element)(&bare).contains("rgba(0, 128, 255, 0.5)"));
}

#[test]
fn test_registry_json_round_trips_enum_values() {
    let templates = HtmlDecorationTemplates::default_styles(Default::default());
    let json = templates.to_json();

    for kind in ["highlight", "underline"] {
        let layout: Layout = serde_json::from_value(json[kind]["layout"].clone()).unwrap();
        let width: Width = serde_json::from_value(json[kind]["width"].clone()).unwrap();
        assert_eq!(layout, Layout::Boxes);
        assert_eq!(width, Width::Wrap);
        assert!(json[kind]["stylesheet"].is_string());
    }
}

#[test]
fn test_enum_wire_values() {
    assert_eq!(serde_json::to_value(Layout::Bounds).unwrap(), "bounds");
    assert_eq!(serde_json::to_value(Layout::Boxes).unwrap(), "boxes");
    assert_eq!(serde_json::to_value(Width::Wrap).unwrap(), "wrap");
    assert_eq!(serde_json::to_value(Width::Bounds).unwrap(), "bounds");
    assert_eq!(serde_json::to_value(Width::Viewport).unwrap(), "viewport");
    assert_eq!(serde_json::to_value(Width::Page).unwrap(), "page");
}
