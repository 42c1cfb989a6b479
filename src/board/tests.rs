// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::*;
use crate::bitmap::{MonoBitmap, MonoBitmapBuilder};
use crate::chars::HALF_TRANSPARENT_CHAR;
use crate::geo::{Point, Rect, Size};

fn bitmap(rows: &[&str]) -> MonoBitmap {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut builder = MonoBitmapBuilder::new(width as i32, rows.len() as i32);
    for (row, text) in rows.iter().enumerate() {
        for (column, ch) in text.chars().enumerate() {
            if ch != ' ' {
                builder.put(row as i32, column as i32, ch, ch);
            }
        }
    }
    builder.build()
}

/// A `width` x `height` blank grid with `text` written at each `(left, top)`.
fn grid(width: usize, height: usize, marks: &[(usize, usize, &str)]) -> String {
    let mut rows = vec![vec![' '; width]; height];
    for &(left, top, text) in marks {
        for (offset, ch) in text.chars().enumerate() {
            rows[top][left + offset] = ch;
        }
    }
    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn row_string(board: &MonoBoard, top: i32, lefts: std::ops::RangeInclusive<i32>) -> String {
    lefts.map(|left| board.get(left, top).to_string()).collect()
}

#[fixture]
fn windowed() -> MonoBoard {
    let mut board = MonoBoard::new();
    board.clear_and_set_window(Rect::by_ltwh(-100, -100, 200, 200));
    board
}

#[test]
fn painter_fill_rect_inside_bound() {
    let mut board = PainterBoard::new(Rect::by_ltwh(0, 0, 4, 4));
    board.fill_rect(Rect::by_ltwh(1, 2, 3, 4), '#', Highlight::No);
    assert_eq!(board.to_string(), "    \n    \n ###\n ###");
}

#[test]
fn painter_fill_rect_clips_to_bound() {
    let mut board = PainterBoard::new(Rect::by_ltwh(1, 1, 4, 4));
    board.fill_rect(Rect::by_ltwh(0, 0, 5, 5), '#', Highlight::No);
    assert_eq!(board.to_string(), "####\n####\n####\n####");
}

#[test]
fn painter_fill_skips_transparent_pixels() {
    let mut source = PainterBoard::new(Rect::by_ltwh(0, 0, 4, 4));
    source.fill_rect(Rect::by_ltwh(0, 0, 2, 2), 'a', Highlight::No);
    source.fill_rect(Rect::by_ltwh(0, 2, 2, 2), 'b', Highlight::No);
    source.fill_rect(Rect::by_ltwh(2, 0, 2, 2), 'c', Highlight::No);
    source.fill_rect(Rect::by_ltwh(2, 2, 2, 2), 'd', Highlight::No);
    source.set(Point::new(2, 1), crate::chars::TRANSPARENT_CHAR, Highlight::No);

    let mut target = PainterBoard::new(Rect::by_ltwh(1, 1, 3, 2));
    target.set(Point::new(2, 1), 'x', Highlight::No);
    target.fill(&source);
    assert_eq!(target.to_string(), "axc\nbdd");
}

#[test]
fn painter_get_outside_bound_is_none() {
    let board = PainterBoard::new(Rect::by_ltwh(4, 4, 2, 2));
    assert_eq!(board.get(4, 4), Some(Pixel::TRANSPARENT));
    assert_eq!(board.get(3, 4), None);
    assert_eq!(board.get(4, 6), None);
}

#[test]
fn painter_fill_bitmap_reports_crossings_with_bitmap_neighbors() {
    let mut board = PainterBoard::new(Rect::by_ltwh(0, 0, 3, 3));
    board.fill_rect(Rect::by_ltwh(0, 1, 3, 1), '─', Highlight::No);

    let vertical = bitmap(&["│", "│", "│"]);
    let cross_points = board.fill_bitmap(Point::new(1, 0), &vertical, Highlight::No);
    assert_eq!(cross_points.len(), 1);
    let cross = cross_points[0];
    assert_eq!((cross.left(), cross.top()), (1, 1));
    assert_eq!(cross.visual, '│');
    assert_eq!(cross.neighbors, crate::crossing::Neighbors::new('\0', '\0', '│', '│'));
    // The crossing cell itself is left for the caller.
    assert_eq!(board.get(1, 1).map(|p| p.visual), Some('─'));
}

#[rstest]
fn get_set_across_tiles(mut windowed: MonoBoard) {
    let points: Vec<Point> = [-48, -32, -18, -16, 0, 16, 18, 32, 48]
        .into_iter()
        .map(|v| Point::new(v, v))
        .collect();
    for point in &points {
        assert_eq!(windowed.get(point.left, point.top), Pixel::TRANSPARENT);
    }

    for (point, ch) in points.iter().zip("012345678".chars()) {
        windowed.set(*point, ch, Highlight::No);
    }
    for (point, ch) in points.iter().zip("012345678".chars()) {
        assert_eq!(windowed.get(point.left, point.top).visual, ch);
    }
    assert_eq!(windowed.tile_count(), 7);
}

#[rstest]
fn fill_rect_grows_tiles(mut windowed: MonoBoard) {
    windowed.fill_rect(Rect::by_ltwh(1, 1, 3, 3), 'A', Highlight::No);
    assert_eq!(
        windowed.to_string(),
        grid(16, 16, &[(1, 1, "AAA"), (1, 2, "AAA"), (1, 3, "AAA")])
    );
    assert_eq!(windowed.tile_count(), 1);

    windowed.fill_rect(Rect::by_ltwh(-3, -3, 3, 3), 'B', Highlight::No);
    let mut marks = vec![
        (13, 13, "BBB"),
        (13, 14, "BBB"),
        (13, 15, "BBB"),
        (17, 17, "AAA"),
        (17, 18, "AAA"),
        (17, 19, "AAA"),
    ];
    assert_eq!(windowed.to_string(), grid(32, 32, &marks));
    assert_eq!(windowed.tile_count(), 2);

    windowed.fill_rect(Rect::by_ltwh(-1, 0, 3, 1), 'C', Highlight::No);
    marks.push((15, 16, "CCC"));
    assert_eq!(windowed.to_string(), grid(32, 32, &marks));
    assert_eq!(windowed.tile_count(), 3);
}

#[test]
fn empty_board_displays_nothing() {
    assert_eq!(MonoBoard::new().to_string(), "");
}

#[test]
fn window_prevents_tiles_outside_it() {
    let mut board = MonoBoard::new();
    board.clear_and_set_window(Rect::by_ltwh(0, 0, 16, 16));

    board.set(Point::new(20, 20), 'x', Highlight::No);
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.get(20, 20), Pixel::TRANSPARENT);

    board.fill_rect(Rect::by_ltwh(-5, -5, 10, 10), '#', Highlight::No);
    assert_eq!(board.tile_count(), 1);
    assert_eq!(board.get(0, 0).visual, '#');
    assert_eq!(board.get(-1, -1), Pixel::TRANSPARENT);
}

#[test]
fn clear_and_set_window_wipes_overlapped_tiles() {
    let mut board = MonoBoard::new();
    board.set(Point::new(1, 1), 'a', Highlight::No);
    board.set(Point::new(40, 1), 'b', Highlight::No);

    board.clear_and_set_window(Rect::by_ltwh(0, 0, 10, 10));
    assert_eq!(board.get(1, 1), Pixel::TRANSPARENT);
    assert_eq!(board.get(40, 1).visual, 'b');
    assert_eq!(board.tile_count(), 2);
}

#[test]
fn clear_resets_only_the_region() {
    let mut board = MonoBoard::with_tile_size(Size::new(4, 4));
    board.fill_rect(Rect::by_ltwh(0, 0, 6, 1), '=', Highlight::No);
    board.clear(Rect::by_ltwh(2, 0, 3, 1));
    assert_eq!(row_string(&board, 0, 0..=5), "==   =");
}

#[test]
fn lines_crossing_merge_into_a_cross() {
    let mut board = MonoBoard::new();
    board.fill(Point::new(0, 2), &bitmap(&["─────"]), Highlight::No);
    board.fill(Point::new(2, 0), &bitmap(&["│", "│", "│", "│", "│"]), Highlight::No);
    assert_eq!(
        board.to_string_in_bound(Rect::by_ltwh(0, 0, 5, 5)),
        "  │  \n  │  \n──┼──\n  │  \n  │  "
    );
}

#[test]
fn line_ending_on_a_border_makes_a_tee() {
    let mut board = MonoBoard::new();
    board.fill(Point::new(0, 2), &bitmap(&["┌───┐", "│   │", "└───┘"]), Highlight::No);
    board.fill(Point::new(2, 0), &bitmap(&["│", "│", "│"]), Highlight::No);
    assert_eq!(
        board.to_string_in_bound(Rect::by_ltwh(0, 0, 5, 5)),
        "  │  \n  │  \n┌─┴─┐\n│   │\n└───┘"
    );
}

#[rstest]
#[case(Size::new(16, 16))]
#[case(Size::new(4, 4))]
#[case(Size::new(3, 5))]
#[case(Size::new(1, 1))]
fn crossings_resolve_across_tile_edges(#[case] tile_size: Size) {
    let mut board = MonoBoard::with_tile_size(tile_size);
    board.fill(Point::new(0, 4), &bitmap(&["─────────"]), Highlight::No);
    board.fill(Point::new(4, 0), &bitmap(&["│"; 9]), Highlight::No);
    assert_eq!(board.get(4, 4).visual, '┼');
    assert_eq!(board.get(3, 4).visual, '─');
    assert_eq!(board.get(4, 3).visual, '│');
}

#[test]
fn unresolvable_crossing_keeps_the_upper_glyph() {
    let mut board = MonoBoard::new();
    board.fill(Point::new(1, 0), &bitmap(&["║", "║", "║"]), Highlight::No);
    board.fill(Point::new(0, 1), &bitmap(&["━━━"]), Highlight::No);
    assert_eq!(row_string(&board, 1, 0..=2), "━━━");
    assert_eq!(board.get(1, 1).direction, '━');
}

#[test]
fn transparent_cells_never_overwrite() {
    let mut board = MonoBoard::new();
    board.fill_rect(Rect::by_ltwh(0, 0, 3, 1), 'x', Highlight::No);
    board.fill(Point::new(0, 0), &bitmap(&["a c"]), Highlight::No);
    assert_eq!(row_string(&board, 0, 0..=2), "axc");
}

#[test]
fn half_transparent_cells_are_invisible() {
    let mut board = MonoBoard::new();
    board.set(Point::new(0, 0), 'x', Highlight::No);

    let mut builder = MonoBitmapBuilder::new(2, 1);
    builder.fill_all(HALF_TRANSPARENT_CHAR);
    board.fill(Point::new(0, 0), &builder.build(), Highlight::Selected);

    assert_eq!(board.get(0, 0).visual, 'x');
    assert_eq!(board.get(0, 0).highlight, Highlight::No);
    assert!(board.get(1, 0).is_transparent());
}

#[test]
fn fill_carries_highlight() {
    let mut board = MonoBoard::new();
    board.fill(Point::new(-2, -2), &bitmap(&["ab"]), Highlight::TextEditing);
    assert_eq!(board.get(-2, -2).highlight, Highlight::TextEditing);
    assert_eq!(board.get(-1, -2).visual, 'b');
}

#[test]
fn board_addresses_floor_negative_coordinates() {
    let board = MonoBoard::with_tile_size(Size::new(16, 8));
    assert_eq!(board.to_board_address(0, 0), BoardAddress { row: 0, column: 0 });
    assert_eq!(board.to_board_address(-1, -1), BoardAddress { row: -1, column: -1 });
    assert_eq!(board.to_board_address(-16, -9), BoardAddress { row: -2, column: -1 });
    assert_eq!(board.to_board_address(17, 8), BoardAddress { row: 1, column: 1 });
}

#[test]
fn tile_size_is_clamped() {
    assert_eq!(MonoBoard::with_tile_size(Size::new(0, -3)).tile_size(), Size::new(1, 1));
    let max = MonoBoard::MAX_TILE_EDGE;
    assert_eq!(MonoBoard::with_tile_size(Size::new(70_000, 8)).tile_size(), Size::new(max, 8));
}
