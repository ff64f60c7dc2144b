//! Benchmarks for spread layout and decoration reconciliation.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use verso::{Decoration, DecorationRegistry, LayoutComputer, Locator, PageSide, Style, Tint};

/// A synthetic fixed-layout hint sequence mixing all hint kinds.
fn synthetic_hints(count: usize) -> Vec<Option<PageSide>> {
    (0..count)
        .map(|i| match i % 7 {
            0 => Some(PageSide::Center),
            1 | 4 => Some(PageSide::Left),
            2 | 5 => Some(PageSide::Right),
            _ => None,
        })
        .collect()
}

fn synthetic_decorations(count: usize, resource_count: usize) -> Vec<Decoration> {
    (0..count)
        .map(|i| {
            Decoration::new(
                format!("search-{i}"),
                Locator::new(format!("chapter{}.xhtml", i % resource_count))
                    .with_fragment(format!("match-{i}")),
                Style::highlight(Tint::YELLOW),
            )
        })
        .collect()
}

// ============================================================================
// Layout Benchmarks
// ============================================================================

fn bench_layout_ltr(c: &mut Criterion) {
    let hints = synthetic_hints(10_000);
    c.bench_function("layout_ltr_10k_pages", |b| {
        b.iter(|| LayoutComputer::new(false).compute(black_box(&hints)));
    });
}

fn bench_layout_rtl(c: &mut Criterion) {
    let hints = synthetic_hints(10_000);
    c.bench_function("layout_rtl_10k_pages", |b| {
        b.iter(|| LayoutComputer::new(true).compute(black_box(&hints)));
    });
}

// ============================================================================
// Decoration Benchmarks
// ============================================================================

fn bench_apply_initial(c: &mut Criterion) {
    let decorations = synthetic_decorations(1_000, 50);
    c.bench_function("apply_1k_decorations_initial", |b| {
        b.iter(|| {
            let mut registry = DecorationRegistry::default();
            registry.apply_decorations("search", black_box(decorations.clone()))
        });
    });
}

fn bench_apply_identical(c: &mut Criterion) {
    let decorations = synthetic_decorations(1_000, 50);
    let mut registry = DecorationRegistry::default();
    registry.apply_decorations("search", decorations.clone());

    c.bench_function("apply_1k_decorations_unchanged", |b| {
        b.iter(|| registry.apply_decorations("search", black_box(decorations.clone())));
    });
}

fn bench_apply_incremental(c: &mut Criterion) {
    let base = synthetic_decorations(1_000, 50);
    let mut shifted = base.clone();
    // Recolor one decoration in every resource.
    for decoration in shifted.iter_mut().step_by(50) {
        decoration.style = Style::highlight(Tint::rgb(255, 0, 0));
    }

    c.bench_function("apply_1k_decorations_20_updates", |b| {
        b.iter(|| {
            let mut registry = DecorationRegistry::default();
            registry.apply_decorations("search", base.clone());
            registry.apply_decorations("search", black_box(shifted.clone()))
        });
    });
}

criterion_group!(
    benches,
    bench_layout_ltr,
    bench_layout_rtl,
    bench_apply_initial,
    bench_apply_identical,
    bench_apply_incremental
);
criterion_main!(benches);
