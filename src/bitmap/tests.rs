// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::*;
use crate::chars::HALF_TRANSPARENT_CHAR;

fn builder_from(rows: &[&str]) -> MonoBitmapBuilder {
    let height = rows.len() as i32;
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
    let mut builder = MonoBitmapBuilder::new(width, height);
    for (row, text) in rows.iter().enumerate() {
        for (column, ch) in text.chars().enumerate() {
            if ch != ' ' {
                builder.put(row as i32, column as i32, ch, ch);
            }
        }
    }
    builder
}

#[test]
fn empty_dimensions_build_the_empty_bitmap() {
    assert_eq!(MonoBitmapBuilder::new(0, 3).build(), MonoBitmap::EMPTY);
    assert_eq!(MonoBitmapBuilder::new(-2, 3).build(), MonoBitmap::EMPTY);
    assert!(MonoBitmap::EMPTY.is_empty());
    assert_eq!(MonoBitmap::EMPTY.to_string(), "");
}

#[test]
fn put_ignores_out_of_range_cells() {
    let mut builder = MonoBitmapBuilder::new(2, 2);
    builder.put(-1, 0, 'x', 'x');
    builder.put(0, 2, 'x', 'x');
    builder.put(1, 1, 'y', 'y');
    assert_eq!(builder.build().to_string(), "  \n y");
}

#[test]
fn put_keeps_direction_when_new_direction_is_transparent() {
    let mut builder = MonoBitmapBuilder::new(1, 1);
    builder.put(0, 0, '─', '─');
    builder.put(0, 0, '▶', TRANSPARENT_CHAR);
    let bitmap = builder.build();
    assert_eq!(bitmap.visual(0, 0), '▶');
    assert_eq!(bitmap.direction(0, 0), '─');
}

#[test]
fn reads_out_of_range_are_transparent() {
    let bitmap = builder_from(&["ab"]).build();
    assert_eq!(bitmap.visual(0, 1), 'b');
    assert_eq!(bitmap.visual(0, 2), TRANSPARENT_CHAR);
    assert_eq!(bitmap.visual(-1, 0), TRANSPARENT_CHAR);
    assert_eq!(bitmap.direction(1, 0), TRANSPARENT_CHAR);
}

#[test]
fn fill_bitmap_respects_offsets_and_clips() {
    let source = builder_from(&["ab", "cd"]).build();
    let mut builder = MonoBitmapBuilder::new(3, 3);
    builder.fill_bitmap(1, 2, &source);
    assert_eq!(builder.build().to_string(), "   \n  a\n  c");
}

#[test]
fn half_transparent_never_hides_visible_cells() {
    let mut builder = builder_from(&["x ", "  "]);
    let mut veil = MonoBitmapBuilder::new(2, 2);
    veil.fill_all(HALF_TRANSPARENT_CHAR);
    builder.fill_bitmap(0, 0, &veil.build());
    let bitmap = builder.build();
    assert_eq!(bitmap.visual(0, 0), 'x');
    assert_eq!(bitmap.visual(1, 1), HALF_TRANSPARENT_CHAR);
    assert_eq!(bitmap.to_string(), "x \n  ");
}

#[test]
fn transparent_source_cells_do_not_overwrite() {
    let mut builder = builder_from(&["xy"]);
    builder.fill_bitmap(0, 0, &builder_from(&[" z"]).build());
    assert_eq!(builder.build().to_string(), "xz");
}

#[test]
fn sparse_rows_expose_column_ranges() {
    let bitmap = builder_from(&["a  b c", "      "]).build();
    let columns: Vec<usize> = bitmap.cells_in(0, 1..6).iter().map(|c| c.column).collect();
    assert_eq!(columns, vec![3, 5]);
    assert!(bitmap.cells_in(1, 0..6).is_empty());
    assert!(bitmap.cells_in(7, 0..6).is_empty());
    assert_eq!(bitmap.cells_in(0, 4..4), &[]);
}
