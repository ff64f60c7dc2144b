//! Locators: references to locations within a publication.
//!
//! A [`Locator`] addresses a resource by `href` plus optional sub-resource
//! locations (fragments, progression, position) and text context. The JSON
//! shape follows the common reading-system locator interchange format, so
//! locators round-trip through reading apps and annotation stores.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A reference to a location within a publication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    /// Resource href, relative to the publication root.
    pub href: String,

    /// Media type of the resource, when known.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Title of the containing chapter or section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Locations within the resource.
    #[serde(default, skip_serializing_if = "Locations::is_empty")]
    pub locations: Locations,

    /// Text context around the location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
}

/// One or more alternative locations within a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locations {
    /// Fragment identifiers within the resource (e.g. element IDs).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<String>,

    /// Progression within the resource, from 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<f64>,

    /// 1-based position (e.g. page number) within the publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Progression within the whole publication, from 0.0 to 1.0.
    #[serde(
        rename = "totalProgression",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_progression: Option<f64>,
}

impl Locations {
    /// Check if no location information is present.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
            && self.progression.is_none()
            && self.position.is_none()
            && self.total_progression.is_none()
    }
}

/// Text context around a located range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Text immediately preceding the range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,

    /// The located text itself (e.g. the highlighted selection).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,

    /// Text immediately following the range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl Locator {
    /// Create a locator pointing to the start of a resource.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    /// Set the media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Add a fragment identifier.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.locations.fragments.push(fragment.into());
        self
    }

    /// Set the progression within the resource.
    pub fn with_progression(mut self, progression: f64) -> Self {
        self.locations.progression = Some(progression);
        self
    }

    /// Set the 1-based position within the publication.
    pub fn with_position(mut self, position: usize) -> Self {
        self.locations.position = Some(position);
        self
    }

    /// Set the text context.
    pub fn with_text(mut self, text: Text) -> Self {
        self.text = Some(text);
        self
    }

    /// Parse a locator from an href string, splitting off a `#fragment` part.
    ///
    /// The fragment is percent-decoded; the resource path is kept as-is so it
    /// compares equal to reading order hrefs.
    ///
    /// ```
    /// use verso::Locator;
    ///
    /// let locator = Locator::parse("chapter1.xhtml#para%205").unwrap();
    /// assert_eq!(locator.href, "chapter1.xhtml");
    /// assert_eq!(locator.locations.fragments, vec!["para 5"]);
    /// ```
    pub fn parse(href: &str) -> Result<Self> {
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            return Err(Error::InvalidLocator(format!(
                "missing resource path in {href:?}"
            )));
        }

        match href.split_once('#') {
            None => Ok(Self::new(href)),
            Some((path, fragment)) => {
                let fragment = percent_decode_str(fragment)
                    .decode_utf8()
                    .map_err(|_| {
                        Error::InvalidLocator(format!("invalid percent-encoding in {href:?}"))
                    })?
                    .into_owned();
                let locator = Self::new(path);
                if fragment.is_empty() {
                    Ok(locator)
                } else {
                    Ok(locator.with_fragment(fragment))
                }
            }
        }
    }

    /// Parse a locator from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to the locator JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("locator serialization is infallible")
    }
}
