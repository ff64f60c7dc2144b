//! The spread pairing state machine.

use crate::layout::Spread;
use crate::model::PageSide;

/// Partitions a sequence of page-side hints into spreads.
///
/// The computer scans the page sequence once, keeping at most one pending
/// unmatched page. A page without a hint pairs with whatever is pending, or
/// becomes pending itself. Explicit hints constrain pairing:
///
/// - `Center` pages always stand alone and flush any pending page half-filled.
/// - A page pinned to the leading slot (`Left` in LTR, `Right` in RTL) flushes
///   the pending page and becomes pending itself.
/// - A page pinned to the trailing slot (`Right` in LTR, `Left` in RTL)
///   closes the pending spread, or stands alone with a blank leading slot.
///
/// Every input index ends up in exactly one spread. The function is total:
/// any hint sequence produces a layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutComputer {
    rtl: bool,
}

impl LayoutComputer {
    /// Create a computer for the given horizontal reading direction.
    pub fn new(rtl: bool) -> Self {
        Self { rtl }
    }

    /// Compute the spread layout for a sequence of page-side hints.
    ///
    /// Spreads are returned in reading order; indices reference positions in
    /// the input slice.
    pub fn compute(&self, pages: &[Option<PageSide>]) -> Vec<Spread> {
        if self.rtl {
            self.compute_rtl(pages)
        } else {
            self.compute_ltr(pages)
        }
    }

    fn compute_ltr(&self, pages: &[Option<PageSide>]) -> Vec<Spread> {
        let mut layout = Vec::new();
        let mut spread_started = false;

        for (idx, page) in pages.iter().enumerate() {
            match page {
                None => {
                    if spread_started {
                        layout.push(Spread::double(Some(idx - 1), Some(idx)));
                        spread_started = false;
                    } else {
                        spread_started = true;
                    }
                }
                Some(PageSide::Center) => {
                    if spread_started {
                        layout.push(Spread::double(Some(idx - 1), None));
                        spread_started = false;
                    }
                    layout.push(Spread::SinglePage(idx));
                }
                Some(PageSide::Left) => {
                    // A pending page cannot pair with an explicit left page.
                    if spread_started {
                        layout.push(Spread::double(Some(idx - 1), None));
                    }
                    spread_started = true;
                }
                Some(PageSide::Right) => {
                    if spread_started {
                        layout.push(Spread::double(Some(idx - 1), Some(idx)));
                    } else {
                        layout.push(Spread::double(None, Some(idx)));
                    }
                    spread_started = false;
                }
            }
        }

        if spread_started {
            layout.push(Spread::double(Some(pages.len() - 1), None));
        }

        layout
    }

    // Mirror of the LTR scan: pair order is swapped and the roles of the
    // left/right hints swap, since hints are screen-space while the scan
    // runs in document order.
    fn compute_rtl(&self, pages: &[Option<PageSide>]) -> Vec<Spread> {
        let mut layout = Vec::new();
        let mut spread_started = false;

        for (idx, page) in pages.iter().enumerate() {
            match page {
                None => {
                    if spread_started {
                        layout.push(Spread::double(Some(idx), Some(idx - 1)));
                        spread_started = false;
                    } else {
                        spread_started = true;
                    }
                }
                Some(PageSide::Center) => {
                    if spread_started {
                        layout.push(Spread::double(None, Some(idx - 1)));
                        spread_started = false;
                    }
                    layout.push(Spread::SinglePage(idx));
                }
                Some(PageSide::Right) => {
                    if spread_started {
                        layout.push(Spread::double(None, Some(idx - 1)));
                    }
                    spread_started = true;
                }
                Some(PageSide::Left) => {
                    if spread_started {
                        layout.push(Spread::double(Some(idx), Some(idx - 1)));
                    } else {
                        layout.push(Spread::double(Some(idx), None));
                    }
                    spread_started = false;
                }
            }
        }

        if spread_started {
            layout.push(Spread::double(None, Some(pages.len() - 1)));
        }

        layout
    }
}
