// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::bitmap::{MonoBitmap, MonoBitmapBuilder, PointChar};
use crate::geo::Size;
use crate::shape::style::{RectangleExtra, StraightStrokeDashPattern, StraightStrokeStyle};

const SINGLE_CELL_CHAR: char = '□';

/// Renders a rectangle of `size` with its fill beneath its border.
///
/// With neither fill nor stroke the border is drawn with half-transparent chars, which are
/// invisible on the board but keep the shape selectable.
pub fn rectangle_bitmap(size: Size, extra: &RectangleExtra) -> MonoBitmap {
    let mut builder = MonoBitmapBuilder::new(size.width, size.height);
    if size.is_empty() {
        return builder.build();
    }

    let fill = extra.fill.as_ref();
    let stroke = extra.stroke.as_ref();

    if fill.is_none() && stroke.is_none() {
        draw_border(&mut builder, size, &StraightStrokeStyle::NO_STROKE, extra.dash_pattern);
        return builder.build();
    }

    if let Some(fill) = fill {
        builder.fill_bitmap(0, 0, &fill.drawable.to_bitmap(size.width, size.height));
    }

    // A stroke on a filled 1-wide or 1-tall rectangle would hide the fill entirely.
    let is_stroke_allowed = fill.is_none() || (size.width > 1 && size.height > 1);
    if let Some(stroke) = stroke.filter(|_| is_stroke_allowed) {
        draw_border(&mut builder, size, stroke, extra.dash_pattern);
    }

    builder.build()
}

fn draw_border(
    builder: &mut MonoBitmapBuilder,
    size: Size,
    stroke: &StraightStrokeStyle,
    dash_pattern: StraightStrokeDashPattern,
) {
    if size.width == 1 && size.height == 1 {
        builder.put(0, 0, SINGLE_CELL_CHAR, SINGLE_CELL_CHAR);
        return;
    }

    for (index, point) in border_points(size, stroke).into_iter().enumerate() {
        let visual = if dash_pattern.is_gap(index) { ' ' } else { point.ch };
        builder.put(point.top, point.left, visual, point.ch);
    }
}

/// Border cells in drawing order: clockwise from the top-left corner.
fn border_points(size: Size, stroke: &StraightStrokeStyle) -> Vec<PointChar> {
    let (left, top) = (0, 0);
    let right = size.width - 1;
    let bottom = size.height - 1;

    if size.width == 1 {
        return PointChar::vertical_line(left, top - 1, bottom + 1, stroke.vertical);
    }
    if size.height == 1 {
        return PointChar::horizontal_line(left - 1, right + 1, top, stroke.horizontal);
    }

    let mut points = Vec::with_capacity(2 * (size.width + size.height) as usize);
    points.push(PointChar::new(left, top, stroke.up_right));
    points.extend(PointChar::horizontal_line(left, right, top, stroke.horizontal));
    points.push(PointChar::new(right, top, stroke.down_left));
    points.extend(PointChar::vertical_line(right, top, bottom, stroke.vertical));
    points.push(PointChar::new(right, bottom, stroke.up_left));
    points.extend(PointChar::horizontal_line(right, left, bottom, stroke.horizontal));
    points.push(PointChar::new(left, bottom, stroke.down_right));
    points.extend(PointChar::vertical_line(left, bottom, top, stroke.vertical));
    points
}
