//! Page-side hints and reading progression.
//!
//! Fixed-layout publications may pin a resource to one side of a spread via
//! the `page` presentation property; the spread layout engine consumes these
//! hints as `Option<PageSide>` (no hint means the page pairs with anything).
//! Reading progression starts out as declared metadata, possibly `Auto`, and
//! is resolved to an [`EffectiveReadingProgression`] before any layout runs.

use serde::{Deserialize, Serialize};

/// Position of a page relative to its spread, from the `page` presentation
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSide {
    Left,
    Right,
    Center,
}

impl PageSide {
    /// Parse a `page` property value (`"left"`, `"right"`, `"center"`).
    ///
    /// Unknown values yield `None`, which the layout engine treats as an
    /// unconstrained page.
    pub fn from_property(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// The property string for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Reading progression as declared by publication metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingProgression {
    Ltr,
    Rtl,
    Ttb,
    Btt,
    #[default]
    Auto,
}

impl ReadingProgression {
    /// Parse a declared reading progression (`"ltr"`, `"rtl"`, `"ttb"`,
    /// `"btt"`, `"auto"`).
    pub fn from_property(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            "ttb" => Some(Self::Ttb),
            "btt" => Some(Self::Btt),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Reading progression after resolving `Auto`, governing page order and
/// pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveReadingProgression {
    Ltr,
    Rtl,
    Ttb,
    Btt,
}

/// Languages written right-to-left, matched on the primary subtag.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur"];

impl EffectiveReadingProgression {
    /// Resolve a declared progression, falling back to the publication's
    /// primary language for `Auto`.
    ///
    /// Language tags are matched on their primary subtag, so `"ar-SA"`
    /// resolves the same as `"ar"`. Vertical progressions are never inferred;
    /// publications wanting `Ttb`/`Btt` must declare them.
    pub fn resolve(progression: ReadingProgression, language: Option<&str>) -> Self {
        match progression {
            ReadingProgression::Ltr => Self::Ltr,
            ReadingProgression::Rtl => Self::Rtl,
            ReadingProgression::Ttb => Self::Ttb,
            ReadingProgression::Btt => Self::Btt,
            ReadingProgression::Auto => {
                let primary = language
                    .map(|tag| tag.split(['-', '_']).next().unwrap_or(tag))
                    .map(|subtag| subtag.to_ascii_lowercase());
                match primary {
                    Some(subtag) if RTL_LANGUAGES.contains(&subtag.as_str()) => Self::Rtl,
                    _ => Self::Ltr,
                }
            }
        }
    }

    /// Whether resources are visited in reverse screen order (RTL or BTT).
    pub fn is_reversed(&self) -> bool {
        matches!(self, Self::Rtl | Self::Btt)
    }

    /// Whether the progression is horizontal (LTR or RTL).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Ltr | Self::Rtl)
    }
}
