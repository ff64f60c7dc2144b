//! Decorations: visual annotations anchored to locators.
//!
//! A [`Decoration`] associates a rendering [`Style`] with a [`Locator`] in
//! the publication. Reader features (annotations, search, TTS) each maintain
//! their own named group of decorations and declare the complete desired
//! state; the engine reconciles it against what is currently rendered.

pub mod diff;

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value, json};

use crate::model::Locator;

/// Unique identifier for a decoration within its group.
pub type DecorationId = String;

/// A visual annotation drawn over a publication.
///
/// Diffing identity is the `id`: two decorations with the same id and a
/// different locator or style are an update of one another, not distinct
/// decorations. `extras` is caller-owned context and never affects diffing.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    /// Identifier, unique within the group the decoration is applied to.
    pub id: DecorationId,

    /// Where the decoration is rendered.
    pub locator: Locator,

    /// Look and feel of the decoration.
    pub style: Style,

    /// Additional context data specific to the reading app.
    pub extras: Map<String, Value>,
}

impl Decoration {
    pub fn new(id: impl Into<String>, locator: Locator, style: Style) -> Self {
        Self {
            id: id.into(),
            locator,
            style,
            extras: Map::new(),
        }
    }

    /// Attach a caller-owned extra value.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Whether this decoration renders the same as `other`.
    ///
    /// Compares locator and style only; `extras` is opaque to rendering.
    pub fn renders_same_as(&self, other: &Self) -> bool {
        self.locator == other.locator && self.style == other.style
    }

    /// Convert to the decoration JSON representation.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "locator": self.locator.to_json(),
            "style": self.style.kind().as_str(),
        })
    }
}

/// The look and feel of a decoration.
///
/// Styles are media type agnostic; each rendering layer translates a style
/// into instructions that make sense for the resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// A filled box over the decorated range.
    Highlight {
        tint: Option<Tint>,
        /// Active highlights get an extra visual accent (e.g. while its
        /// annotation popup is open).
        is_active: bool,
    },

    /// A thin bar under the decorated range.
    Underline { tint: Option<Tint> },
}

impl Style {
    /// A highlight with the given tint.
    pub fn highlight(tint: Tint) -> Self {
        Self::Highlight {
            tint: Some(tint),
            is_active: false,
        }
    }

    /// An underline with the given tint.
    pub fn underline(tint: Tint) -> Self {
        Self::Underline { tint: Some(tint) }
    }

    /// The stable discriminator used to look up rendering templates.
    pub fn kind(&self) -> StyleKind {
        match self {
            Self::Highlight { .. } => StyleKind::HIGHLIGHT,
            Self::Underline { .. } => StyleKind::UNDERLINE,
        }
    }

    /// The tint, if one is set.
    pub fn tint(&self) -> Option<Tint> {
        match *self {
            Self::Highlight { tint, .. } | Self::Underline { tint } => tint,
        }
    }
}

/// Stable identifier for a style variant.
///
/// Template registries are keyed by `StyleKind`, so the set of renderable
/// styles stays open: reading apps can register templates for their own
/// kinds without touching this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKind(Cow<'static, str>);

impl StyleKind {
    pub const HIGHLIGHT: Self = Self(Cow::Borrowed("highlight"));
    pub const UNDERLINE: Self = Self(Cow::Borrowed("underline"));

    /// A caller-defined style kind.
    pub fn custom(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint(pub u32);

impl Tint {
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);

    /// An opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// CSS `rgba()` expression for this color.
    ///
    /// When `alpha` is set, it overrides the color's own alpha channel.
    pub fn to_css(&self, alpha: Option<f64>) -> String {
        let a = alpha.unwrap_or(self.alpha() as f64 / 255.0);
        format!(
            "rgba({}, {}, {}, {})",
            self.red(),
            self.green(),
            self.blue(),
            a
        )
    }
}

/// A single reconciliation step produced by the differ.
#[derive(Debug, Clone, PartialEq)]
pub enum DecorationChange {
    Added(Decoration),
    Updated(Decoration),
    Removed(Decoration),
}

impl DecorationChange {
    /// The decoration this change concerns (the new one for added/updated,
    /// the old one for removed).
    pub fn decoration(&self) -> &Decoration {
        match self {
            Self::Added(d) | Self::Updated(d) | Self::Removed(d) => d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_components() {
        let tint = Tint::argb(0x80, 0x12, 0x34, 0x56);
        assert_eq!(tint.alpha(), 0x80);
        assert_eq!(tint.red(), 0x12);
        assert_eq!(tint.green(), 0x34);
        assert_eq!(tint.blue(), 0x56);
    }

    #[test]
    fn test_tint_to_css() {
        assert_eq!(Tint::rgb(255, 0, 128).to_css(None), "rgba(255, 0, 128, 1)");
        assert_eq!(
            Tint::rgb(255, 235, 59).to_css(Some(0.3)),
            "rgba(255, 235, 59, 0.3)"
        );
        assert_eq!(Tint::argb(0, 1, 2, 3).to_css(None), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn test_style_kind() {
        assert_eq!(Style::highlight(Tint::YELLOW).kind(), StyleKind::HIGHLIGHT);
        assert_eq!(Style::underline(Tint::YELLOW).kind(), StyleKind::UNDERLINE);
        assert_eq!(StyleKind::custom("sidemark").as_str(), "sidemark");
    }

    #[test]
    fn test_renders_same_ignores_extras() {
        let locator = Locator::new("chapter1.xhtml");
        let a = Decoration::new("d1", locator.clone(), Style::highlight(Tint::YELLOW));
        let b = a.clone().with_extra("note", Value::String("mine".into()));

        assert!(a.renders_same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_json_shape() {
        let decoration = Decoration::new(
            "d1",
            Locator::new("chapter1.xhtml").with_fragment("p5"),
            Style::underline(Tint::rgb(0, 0, 255)),
        );
        let json = decoration.to_json();
        assert_eq!(json["id"], "d1");
        assert_eq!(json["style"], "underline");
        assert_eq!(json["locator"]["href"], "chapter1.xhtml");
    }
}
