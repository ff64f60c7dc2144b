//! # verso
//!
//! A fast, lightweight pagination and decoration engine for ebook reader
//! frontends.
//!
//! ## Features
//!
//! - Partition a publication's reading order into single- and double-page
//!   spreads, honoring per-page side hints and LTR/RTL reading progression
//! - Track named groups of visual decorations (highlights, underlines) and
//!   compute minimal per-resource change scripts when a group is replaced
//! - HTML decoration templates with caller-overridable default styles
//!
//! ## Quick Start
//!
//! ```
//! use verso::{EffectiveReadingProgression, PageSide, ReadingOrderItem, Spread, SpreadLayout};
//!
//! // Lay out a three-page comic in right-to-left reading progression.
//! let layout = SpreadLayout::new(
//!     vec![
//!         ReadingOrderItem::new("cover.jpg").with_page(PageSide::Center),
//!         ReadingOrderItem::new("page1.jpg"),
//!         ReadingOrderItem::new("page2.jpg"),
//!     ],
//!     EffectiveReadingProgression::Rtl,
//! );
//!
//! assert_eq!(layout.spread_count(), 2);
//! assert_eq!(layout.spread_at(0), Some(&Spread::SinglePage(0)));
//! assert_eq!(layout.position_for_href("page2.jpg"), Some(1));
//! ```
//!
//! ## Working with Decorations
//!
//! The [`DecorationRegistry`] owns the current decoration state for one open
//! publication. Submit the complete desired list for a group and it emits
//! only the scripts needed to reconcile each resource:
//!
//! ```
//! use verso::{Decoration, DecorationRegistry, HtmlDecorationTemplates, Locator, Style, Tint};
//!
//! let mut registry = DecorationRegistry::new(HtmlDecorationTemplates::default_styles(Default::default()));
//!
//! let highlight = Decoration::new(
//!     "search-1",
//!     Locator::new("chapter1.xhtml"),
//!     Style::highlight(Tint::rgb(255, 235, 59)),
//! );
//!
//! let commands = registry.apply_decorations("search", vec![highlight]);
//! assert_eq!(commands.len(), 1);
//! ```

pub mod decoration;
pub mod error;
pub mod html;
pub mod layout;
pub mod model;
pub mod navigator;

pub use decoration::diff::{ResourceChanges, changes_by_href};
pub use decoration::{Decoration, DecorationChange, DecorationId, Style, StyleKind, Tint};
pub use error::{Error, Result};
pub use html::{
    DefaultStyleOptions, HtmlDecorationTemplate, HtmlDecorationTemplates, Layout, RunScriptCommand,
    Scope, Width,
};
pub use layout::{LayoutComputer, Spread, SpreadLayout};
pub use model::{
    EffectiveReadingProgression, Locations, Locator, PageSide, ReadingOrderItem,
    ReadingProgression, Text,
};
pub use navigator::DecorationRegistry;
