//! The computed navigation plan for a publication.

use crate::layout::{LayoutComputer, Spread};
use crate::model::{EffectiveReadingProgression, ReadingOrderItem};

/// Spreads computed for a reading order, with position queries.
///
/// A `SpreadLayout` is an immutable value: recompute it wholesale whenever
/// the reading order or the resolved reading progression changes. Pager
/// frontends use it to answer "how many screens" ([`spread_count`]) and
/// "which screen shows this resource" ([`position_for_href`]).
///
/// [`spread_count`]: SpreadLayout::spread_count
/// [`position_for_href`]: SpreadLayout::position_for_href
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadLayout {
    items: Vec<ReadingOrderItem>,
    progression: EffectiveReadingProgression,
    spreads: Vec<Spread>,
}

impl SpreadLayout {
    /// Compute the layout for a reading order.
    ///
    /// Only a horizontal RTL progression flips the pairing rules; vertical
    /// progressions lay out like LTR.
    pub fn new(items: Vec<ReadingOrderItem>, progression: EffectiveReadingProgression) -> Self {
        let hints: Vec<_> = items.iter().map(|item| item.page).collect();
        let rtl = progression == EffectiveReadingProgression::Rtl;
        let spreads = LayoutComputer::new(rtl).compute(&hints);
        Self {
            items,
            progression,
            spreads,
        }
    }

    /// Number of spreads (screens) in the layout.
    pub fn spread_count(&self) -> usize {
        self.spreads.len()
    }

    /// The spread at a given position.
    pub fn spread_at(&self, position: usize) -> Option<&Spread> {
        self.spreads.get(position)
    }

    /// All spreads in reading order.
    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    /// The reading order this layout was computed from.
    pub fn items(&self) -> &[ReadingOrderItem] {
        &self.items
    }

    /// The reading order item for a page index referenced by a spread.
    pub fn item_at(&self, index: usize) -> Option<&ReadingOrderItem> {
        self.items.get(index)
    }

    /// The resolved reading progression the layout was computed under.
    pub fn progression(&self) -> EffectiveReadingProgression {
        self.progression
    }

    /// Find the spread showing the first reading order item with this href.
    pub fn position_for_href(&self, href: &str) -> Option<usize> {
        let resource_index = self.items.iter().position(|item| item.href == href)?;
        self.spreads
            .iter()
            .position(|spread| spread.contains(resource_index))
    }
}
