//! Spread layout tests.
//!
//! Exercises the pairing state machine through the public API - page-side
//! hints, reading progression resolution, and the navigation queries a pager
//! frontend relies on.

use verso::{
    EffectiveReadingProgression, LayoutComputer, PageSide, ReadingOrderItem, ReadingProgression,
    Spread, SpreadLayout,
};

// ============================================================================
// Pairing Rules
// ============================================================================

#[test]
fn test_unhinted_reflowable_publication() {
    let spreads = LayoutComputer::new(false).compute(&[None, None, None, None]);
    assert_eq!(
        spreads,
        vec![
            Spread::double(Some(0), Some(1)),
            Spread::double(Some(2), Some(3)),
        ]
    );
}

#[test]
fn test_odd_page_count_leaves_trailing_half_spread() {
    let spreads = LayoutComputer::new(false).compute(&[None, None, None]);
    assert_eq!(
        spreads,
        vec![
            Spread::double(Some(0), Some(1)),
            Spread::double(Some(2), None),
        ]
    );
}

#[test]
fn test_fixed_layout_comic_with_cover() {
    // A typical fixed-layout book: centered cover, then left/right pairs.
    let hints = &[
        Some(PageSide::Center),
        Some(PageSide::Left),
        Some(PageSide::Right),
        Some(PageSide::Left),
        Some(PageSide::Right),
    ];
    let spreads = LayoutComputer::new(false).compute(hints);
    assert_eq!(
        spreads,
        vec![
            Spread::SinglePage(0),
            Spread::double(Some(1), Some(2)),
            Spread::double(Some(3), Some(4)),
        ]
    );
}

#[test]
fn test_right_page_opens_with_blank_left() {
    let spreads = LayoutComputer::new(false).compute(&[Some(PageSide::Right), None, None]);
    assert_eq!(
        spreads,
        vec![
            Spread::double(None, Some(0)),
            Spread::double(Some(1), Some(2)),
        ]
    );
}

#[test]
fn test_mismatched_hints_never_lose_pages() {
    // Adversarial hint soup: every index still lands in exactly one spread.
    let hints = &[
        Some(PageSide::Right),
        Some(PageSide::Right),
        Some(PageSide::Left),
        Some(PageSide::Center),
        None,
        Some(PageSide::Left),
    ];

    for rtl in [false, true] {
        let spreads = LayoutComputer::new(rtl).compute(hints);
        let mut indices: Vec<usize> = spreads.iter().flat_map(|s| s.pages()).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5], "rtl={rtl}");
    }
}

// ============================================================================
// RTL Mirroring
// ============================================================================

#[test]
fn test_rtl_pairs_swap_screen_slots() {
    let spreads = LayoutComputer::new(true).compute(&[None, None, None]);
    assert_eq!(
        spreads,
        vec![
            Spread::double(Some(1), Some(0)),
            Spread::double(None, Some(2)),
        ]
    );
}

#[test]
fn test_rtl_manga_with_cover() {
    // Manga-style: centered cover, then pages paired right-to-left.
    let hints = &[Some(PageSide::Center), None, None, None, None];
    let spreads = LayoutComputer::new(true).compute(hints);
    assert_eq!(
        spreads,
        vec![
            Spread::SinglePage(0),
            Spread::double(Some(2), Some(1)),
            Spread::double(Some(4), Some(3)),
        ]
    );
}

// ============================================================================
// SpreadLayout Navigation Queries
// ============================================================================

fn image_items(count: usize) -> Vec<ReadingOrderItem> {
    (0..count)
        .map(|i| ReadingOrderItem::new(format!("page{i}.jpg")).with_media_type("image/jpeg"))
        .collect()
}

#[test]
fn test_layout_from_reading_order() {
    let layout = SpreadLayout::new(image_items(5), EffectiveReadingProgression::Ltr);

    assert_eq!(layout.spread_count(), 3);
    assert_eq!(layout.position_for_href("page0.jpg"), Some(0));
    assert_eq!(layout.position_for_href("page3.jpg"), Some(1));
    assert_eq!(layout.position_for_href("page4.jpg"), Some(2));
    assert_eq!(layout.position_for_href("page9.jpg"), None);
}

#[test]
fn test_layout_recomputes_on_progression_flip() {
    let items = image_items(3);
    let ltr = SpreadLayout::new(items.clone(), EffectiveReadingProgression::Ltr);
    let rtl = SpreadLayout::new(items, EffectiveReadingProgression::Rtl);

    assert_eq!(ltr.spread_at(0), Some(&Spread::double(Some(0), Some(1))));
    assert_eq!(rtl.spread_at(0), Some(&Spread::double(Some(1), Some(0))));
    // Positions are stable across the flip: spreads stay in reading order.
    assert_eq!(ltr.position_for_href("page2.jpg"), Some(1));
    assert_eq!(rtl.position_for_href("page2.jpg"), Some(1));
}

// ============================================================================
// Reading Progression Resolution
// ============================================================================

#[test]
fn test_auto_progression_resolves_rtl_for_hebrew() {
    let effective = EffectiveReadingProgression::resolve(ReadingProgression::Auto, Some("he"));
    assert_eq!(effective, EffectiveReadingProgression::Rtl);

    let layout = SpreadLayout::new(image_items(2), effective);
    assert_eq!(layout.spread_at(0), Some(&Spread::double(Some(1), Some(0))));
}

#[test]
fn test_explicit_progression_beats_language() {
    let effective = EffectiveReadingProgression::resolve(ReadingProgression::Ltr, Some("ar"));
    assert_eq!(effective, EffectiveReadingProgression::Ltr);
}
