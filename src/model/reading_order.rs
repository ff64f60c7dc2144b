//! Reading order items: the publication's linear flow.

use serde::{Deserialize, Serialize};

use crate::model::PageSide;

/// One resource in the publication's reading order.
///
/// Carries just what the layout engine needs: the resource href, its media
/// type when known, and the optional page-side hint from presentation
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingOrderItem {
    /// Resource href, relative to the publication root.
    pub href: String,

    /// Media type of the resource.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Page-side hint; `None` lets the page pair with its neighbors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageSide>,
}

impl ReadingOrderItem {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media_type: None,
            page: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_page(mut self, page: PageSide) -> Self {
        self.page = Some(page);
        self
    }
}
