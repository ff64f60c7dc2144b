//! Decoration templates: how a style renders into HTML.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::decoration::{Decoration, Style, StyleKind, Tint};

/// Generates the HTML element(s) for a decoration.
pub type ElementGenerator = Arc<dyn Fn(&Decoration) -> String + Send + Sync>;

/// Renders a decoration into HTML elements and an associated stylesheet.
///
/// The rendering layer positions the generated elements over the decoration's
/// locator; the template is only responsible for their look and feel. CSS
/// class names must be unique to avoid clashing with the resource itself
/// (the default templates take care of this).
#[derive(Clone)]
pub struct HtmlDecorationTemplate {
    /// Number of elements created and their position relative to the
    /// matching DOM range.
    pub layout: Layout,

    /// How the width of each created element expands in the viewport.
    pub width: Width,

    /// Closure generating a new HTML element for a given decoration.
    pub element: ElementGenerator,

    /// CSS injected in the resource, referenced by the created elements.
    pub stylesheet: Option<String>,
}

impl HtmlDecorationTemplate {
    /// A template with the default `<div/>` element and no stylesheet.
    pub fn new(layout: Layout, width: Width) -> Self {
        Self {
            layout,
            width,
            element: Arc::new(|_| "<div/>".to_string()),
            stylesheet: None,
        }
    }

    /// Set the element generator.
    pub fn with_element(
        mut self,
        element: impl Fn(&Decoration) -> String + Send + Sync + 'static,
    ) -> Self {
        self.element = Arc::new(element);
        self
    }

    /// Set the injected stylesheet.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    /// JSON representation: `{layout, width, stylesheet?}`.
    pub fn to_json(&self) -> Value {
        let mut json = json!({
            "layout": self.layout,
            "width": self.width,
        });
        if let Some(stylesheet) = &self.stylesheet {
            json["stylesheet"] = Value::String(stylesheet.clone());
        }
        json
    }
}

impl fmt::Debug for HtmlDecorationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlDecorationTemplate")
            .field("layout", &self.layout)
            .field("width", &self.width)
            .field("stylesheet", &self.stylesheet)
            .finish_non_exhaustive()
    }
}

/// Number of created elements and their position relative to the DOM range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A single element covering the smallest region containing all CSS
    /// border boxes.
    Bounds,
    /// One element per CSS border box (e.g. per line of text).
    Boxes,
}

/// How the width of each created element expands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// Smallest width fitting the CSS border box.
    Wrap,
    /// Fills the bounds layout.
    Bounds,
    /// Fills the anchor page, useful for dual-page spreads.
    Viewport,
    /// Fills the whole viewport.
    Page,
}

/// Parameters for the built-in decoration styles.
#[derive(Debug, Clone, Copy)]
pub struct DefaultStyleOptions {
    pub default_tint: Tint,
    pub line_weight: u32,
    pub corner_radius: u32,
    pub alpha: f64,
}

impl Default for DefaultStyleOptions {
    fn default() -> Self {
        Self {
            default_tint: Tint::YELLOW,
            line_weight: 2,
            corner_radius: 3,
            alpha: 0.3,
        }
    }
}

/// Registry mapping style kinds to their rendering templates.
///
/// At most one template per kind; `set` overwrites. Hand a [`snapshot`] to
/// anything that must render against a stable view of the registry.
///
/// [`snapshot`]: HtmlDecorationTemplates::snapshot
#[derive(Debug, Clone, Default)]
pub struct HtmlDecorationTemplates {
    styles: HashMap<StyleKind, HtmlDecorationTemplate>,
}

impl HtmlDecorationTemplates {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default registry: a highlight and an underline template.
    pub fn default_styles(options: DefaultStyleOptions) -> Self {
        let mut templates = Self::new();
        templates.set(
            StyleKind::HIGHLIGHT,
            highlight(options.default_tint, options.corner_radius, options.alpha),
        );
        templates.set(
            StyleKind::UNDERLINE,
            underline(
                options.default_tint,
                options.line_weight,
                options.corner_radius,
            ),
        );
        templates
    }

    /// Get the template for a style kind.
    pub fn get(&self, kind: &StyleKind) -> Option<&HtmlDecorationTemplate> {
        self.styles.get(kind)
    }

    /// Register a template for a style kind, replacing any existing one.
    pub fn set(&mut self, kind: StyleKind, template: HtmlDecorationTemplate) {
        self.styles.insert(kind, template);
    }

    /// Check whether a style kind has a registered template.
    pub fn contains(&self, kind: &StyleKind) -> bool {
        self.styles.contains_key(kind)
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// An independent copy, isolated from later mutation of this registry.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// JSON representation: a map from style kind to template JSON.
    pub fn to_json(&self) -> Value {
        let mut entries: Vec<(&StyleKind, &HtmlDecorationTemplate)> = self.styles.iter().collect();
        // HashMap iteration order is arbitrary; sort for stable output.
        entries.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        Value::Object(
            entries
                .into_iter()
                .map(|(kind, template)| (kind.as_str().to_string(), template.to_json()))
                .collect(),
        )
    }
}

static CLASS_NAME_ID: AtomicUsize = AtomicUsize::new(0);

fn unique_class_name(key: &str) -> String {
    let id = CLASS_NAME_ID.fetch_add(1, Ordering::Relaxed) + 1;
    format!("verso-{key}-{id}")
}

/// The built-in highlight template: a semi-transparent filled box per line.
pub fn highlight(default_tint: Tint, corner_radius: u32, alpha: f64) -> HtmlDecorationTemplate {
    let class_name = unique_class_name("highlight");
    let stylesheet = format!(
        ".{class_name} {{\n  margin-left: -1px;\n  padding-right: 2px;\n  border-radius: {corner_radius}px;\n  box-sizing: border-box;\n}}\n"
    );

    let element = {
        let class_name = class_name.clone();
        move |decoration: &Decoration| {
            let (tint, is_active) = match decoration.style {
                Style::Highlight { tint, is_active } => (tint, is_active),
                _ => (None, false),
            };
            let tint = tint.unwrap_or(default_tint);
            let mut style = format!("background-color: {} !important;", tint.to_css(Some(alpha)));
            if is_active {
                style.push_str(&format!(" border-bottom: 2px solid {};", tint.to_css(None)));
            }
            format!(r#"<div class="{class_name}" style="{style}"/>"#)
        }
    };

    HtmlDecorationTemplate::new(Layout::Boxes, Width::Wrap)
        .with_element(element)
        .with_stylesheet(stylesheet)
}

/// The built-in underline template: a thin colored bar per line.
pub fn underline(default_tint: Tint, line_weight: u32, corner_radius: u32) -> HtmlDecorationTemplate {
    let class_name = unique_class_name("underline");
    let stylesheet = format!(
        ".{class_name} {{\n  display: inline-block;\n  width: 100%;\n  height: {line_weight}px;\n  border-radius: {corner_radius}px;\n  vertical-align: text-bottom;\n}}\n"
    );

    let element = {
        let class_name = class_name.clone();
        move |decoration: &Decoration| {
            let tint = decoration.style.tint().unwrap_or(default_tint);
            format!(
                r#"<div><span class="{class_name}" style="background-color: {} !important"/></div>"#,
                tint.to_css(None)
            )
        }
    };

    HtmlDecorationTemplate::new(Layout::Boxes, Width::Wrap)
        .with_element(element)
        .with_stylesheet(stylesheet)
}
