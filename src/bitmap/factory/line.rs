// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::bitmap::{MonoBitmap, MonoBitmapBuilder, PointChar};
use crate::chars::TRANSPARENT_CHAR;
use crate::geo::Point;
use crate::shape::style::{AnchorChar, LineExtra, StraightStrokeStyle};

/// Renders an orthogonal polyline through `joint_points`.
///
/// The bitmap covers the bounding box of the points; its origin is the box's top-left corner.
/// Anchor glyphs replace only the visual layer at the endpoints, so the board still sees the
/// stroke underneath when resolving crossings.
pub fn line_bitmap(joint_points: &[Point], extra: &LineExtra) -> MonoBitmap {
    let Some(mut builder) = OffsetBuilder::covering(joint_points) else {
        return MonoBitmap::EMPTY;
    };

    let no_stroke = StraightStrokeStyle::NO_STROKE;
    let stroke = extra.stroke.as_ref().unwrap_or(&no_stroke);
    for (index, point) in char_points(joint_points, stroke).into_iter().enumerate() {
        let visual = if extra.dash_pattern.is_gap(index) { ' ' } else { point.ch };
        builder.put(point.left, point.top, visual, point.ch);
    }

    if let [first, second, ..] = joint_points {
        if let Some(anchor) = &extra.start_anchor {
            builder.put_anchor(*first, *second, anchor);
        }
    }
    if let [.., second_last, last] = joint_points {
        if let Some(anchor) = &extra.end_anchor {
            builder.put_anchor(*last, *second_last, anchor);
        }
    }

    builder.build()
}

/// Stroke cells in path order: the first point, each segment followed by its bend glyph, then
/// the last segment and the last point.
fn char_points(joint_points: &[Point], stroke: &StraightStrokeStyle) -> Vec<PointChar> {
    let [first, second, ..] = joint_points else {
        return Vec::new();
    };

    let mut points = vec![end_point_char(*first, *second, stroke)];
    for window in joint_points.windows(3) {
        let (p0, p1, p2) = (window[0], window[1], window[2]);
        points.extend(segment_chars(p0, p1, stroke));
        points.push(PointChar::point(p1, bend_char(stroke, p0, p1, p2)));
    }

    if let [.., second_last, last] = joint_points {
        points.extend(segment_chars(*second_last, *last, stroke));
        points.push(end_point_char(*last, *second_last, stroke));
    }
    points
}

fn segment_chars(p0: Point, p1: Point, stroke: &StraightStrokeStyle) -> Vec<PointChar> {
    if is_horizontal(p0, p1) {
        PointChar::horizontal_line(p0.left, p1.left, p0.top, stroke.horizontal)
    } else {
        PointChar::vertical_line(p0.left, p0.top, p1.top, stroke.vertical)
    }
}

fn end_point_char(point: Point, neighbor: Point, stroke: &StraightStrokeStyle) -> PointChar {
    let ch = if is_horizontal(point, neighbor) { stroke.horizontal } else { stroke.vertical };
    PointChar::point(point, ch)
}

/// Glyph at `p1` for a path arriving from `p0` and leaving towards `p2`.
fn bend_char(stroke: &StraightStrokeStyle, p0: Point, p1: Point, p2: Point) -> char {
    let incoming = is_horizontal(p0, p1);
    let outgoing = is_horizontal(p1, p2);
    if incoming == outgoing {
        return if incoming { stroke.horizontal } else { stroke.vertical };
    }

    let is_left = p0.left < p1.left || p2.left < p1.left;
    let is_upper = p0.top < p1.top || p2.top < p1.top;
    match (is_left, is_upper) {
        (true, true) => stroke.up_left,
        (true, false) => stroke.down_left,
        (false, true) => stroke.down_right,
        (false, false) => stroke.up_right,
    }
}

fn is_horizontal(p0: Point, p1: Point) -> bool {
    p0.top == p1.top
}

/// Builder addressed in board coordinates, shifted to the points' bounding box.
struct OffsetBuilder {
    origin: Point,
    builder: MonoBitmapBuilder,
}

impl OffsetBuilder {
    fn covering(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for point in points {
            min = Point::new(min.left.min(point.left), min.top.min(point.top));
            max = Point::new(max.left.max(point.left), max.top.max(point.top));
        }
        let builder = MonoBitmapBuilder::new(max.left - min.left + 1, max.top - min.top + 1);
        Some(Self { origin: min, builder })
    }

    fn put(&mut self, left: i32, top: i32, visual: char, direction: char) {
        self.builder
            .put(top - self.origin.top, left - self.origin.left, visual, direction);
    }

    fn put_anchor(&mut self, anchor: Point, previous: Point, chars: &AnchorChar) {
        let ch = if is_horizontal(anchor, previous) {
            if anchor.left < previous.left {
                chars.left
            } else {
                chars.right
            }
        } else if anchor.top < previous.top {
            chars.top
        } else {
            chars.bottom
        };
        self.put(anchor.left, anchor.top, ch, TRANSPARENT_CHAR);
    }

    fn build(self) -> MonoBitmap {
        self.builder.build()
    }
}
