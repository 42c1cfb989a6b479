// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyphgrid::geo::{Point, Rect, Size};
use glyphgrid::{BitmapManager, Highlight, MonoBoard};

mod fixtures;
mod profiler;

const SCENE_CASES: [fixtures::scene::Case; 3] = [
    fixtures::scene::Case::Small,
    fixtures::scene::Case::MediumDense,
    fixtures::scene::Case::LargeCrossing,
];

// Benchmark identity (keep stable):
// - Group names in this file: `board.fill`, `board.fill_cached`, `board.crossing`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small`, `medium_dense`, `large_crossing`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_board(c: &mut Criterion) {
    // Cold: every bitmap is built and every tile is created.
    let mut group = c.benchmark_group("board.fill");
    for case in SCENE_CASES {
        let shapes = fixtures::scene::fixture(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut manager = BitmapManager::new();
                let mut board = MonoBoard::new();
                for shape in black_box(&shapes) {
                    manager.draw(&mut board, shape, Highlight::No).expect("draw");
                }
                black_box(board.tile_count())
            })
        });
    }
    group.finish();

    // Warm: bitmaps come from the cache, only compositing is measured.
    let mut group = c.benchmark_group("board.fill_cached");
    for case in SCENE_CASES {
        let shapes = fixtures::scene::fixture(case);
        let mut manager = BitmapManager::new();
        for shape in &shapes {
            manager.bitmap(shape).expect("warm cache");
        }
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut board = MonoBoard::new();
                for shape in black_box(&shapes) {
                    manager.draw(&mut board, shape, Highlight::No).expect("draw");
                }
                black_box(board.tile_count())
            })
        });
    }
    group.finish();

    // Small tiles put most junctions on tile borders, so most of them go through the deferred
    // cross point pass.
    let mut group = c.benchmark_group("board.crossing");
    for case in SCENE_CASES {
        let shapes = fixtures::scene::fixture(case);
        let mut manager = BitmapManager::new();
        let bitmaps = shapes
            .iter()
            .filter_map(|shape| {
                let bitmap = manager.bitmap(shape).expect("bitmap")?;
                Some((shape.bound().position, bitmap))
            })
            .collect::<Vec<_>>();
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let mut board = MonoBoard::with_tile_size(Size::new(3, 3));
                for (position, bitmap) in black_box(&bitmaps) {
                    board.fill(*position, bitmap, Highlight::No);
                }
                black_box(board.get(0, 0));
                black_box(board.to_string_in_bound(Rect::new(Point::ZERO, Size::new(64, 64))).len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_board
}
criterion_main!(benches);
