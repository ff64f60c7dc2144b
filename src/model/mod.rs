//! Publication-facing data model.
//!
//! This module contains:
//! - Locators (references to locations within a publication)
//! - Page-side hints and reading progression
//! - Reading order items (the publication's linear flow)

mod locator;
mod page;
mod reading_order;

// Re-export locator types
pub use locator::{Locations, Locator, Text};

// Re-export page and progression types
pub use page::{EffectiveReadingProgression, PageSide, ReadingProgression};

// Re-export reading order types
pub use reading_order::ReadingOrderItem;
