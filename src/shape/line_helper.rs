// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal routing between directed anchors.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::geo::{DirectedPoint, Direction, Point};

/// Joint points of an orthogonal path through `seed_points`.
///
/// Each seed's direction is the axis the path leaves it along. Consecutive seeds with the same
/// direction that are not aligned get a perpendicular midpoint seed first, so every pair can be
/// joined with at most one bend.
pub fn create_joint_points(seed_points: &[DirectedPoint]) -> Vec<Point> {
    let main_points = create_anchor_points(seed_points);
    let Some((&first, rest)) = main_points.split_first() else {
        return Vec::new();
    };

    let mut joint_points = vec![first.point];
    let mut start = first;
    for &end in rest {
        if !is_aligned(start.point, end.point) {
            let bend = match start.direction {
                Direction::Horizontal => Point::new(end.left(), start.top()),
                Direction::Vertical => Point::new(start.left(), end.top()),
            };
            joint_points.push(bend);
        }
        joint_points.push(end.point);
        start = end;
    }
    reduce(&joint_points)
}

fn create_anchor_points(seed_points: &[DirectedPoint]) -> Vec<DirectedPoint> {
    let Some((&first, rest)) = seed_points.split_first() else {
        return Vec::new();
    };

    let mut main_points = vec![first];
    let mut start = first;
    for &end in rest {
        if start.direction == end.direction && !is_aligned(start.point, end.point) {
            main_points.push(DirectedPoint::new(
                start.direction.perpendicular(),
                (start.left() + end.left()) / 2,
                (start.top() + end.top()) / 2,
            ));
        }
        main_points.push(end);
        start = end;
    }
    main_points
}

/// Drops interior points that sit on the same row or column as both of their neighbours.
///
/// Endpoints are kept and the result is a fixed point: reducing it again changes nothing.
pub fn reduce(points: &[Point]) -> Vec<Point> {
    let mut reduced = reduce_once(points);
    loop {
        // Every collapse drops a point, so an unchanged length means nothing moved.
        let next = reduce_once(&reduced);
        if next.len() == reduced.len() {
            return reduced;
        }
        reduced = next;
    }
}

fn reduce_once(points: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut list: Vec<Point> = Vec::with_capacity(points.len());
    for &p3 in rest {
        let collinear = matches!(
            list.as_slice(),
            [.., p1, p2] if is_on_straight_line(*p1, *p2, p3, false)
        );
        match list.last_mut() {
            Some(last) if collinear => *last = p3,
            _ => list.push(p3),
        }
    }

    let head_collinear = matches!(
        list.as_slice(),
        [p2, p3, ..] if is_on_straight_line(first, *p2, *p3, false)
    );
    if head_collinear {
        list[0] = first;
    } else {
        list.insert(0, first);
    }
    list
}

/// Whether the three points share a column or a row.
///
/// With `ordered`, `p2` must also lie between `p1` and `p3` along that line.
pub fn is_on_straight_line(p1: Point, p2: Point, p3: Point, ordered: bool) -> bool {
    let same_left = all_equal(p1.left, p2.left, p3.left);
    let same_top = all_equal(p1.top, p2.top, p3.top);
    if ordered {
        (same_left && is_monotonic(p1.top, p2.top, p3.top))
            || (same_top && is_monotonic(p1.left, p2.left, p3.left))
    } else {
        same_left || same_top
    }
}

pub fn is_horizontal(p1: Point, p2: Point) -> bool {
    p1.top == p2.top
}

pub fn create_edges(joint_points: &[Point]) -> Vec<LineEdge> {
    joint_points
        .windows(2)
        .map(|pair| LineEdge::new(pair[0], pair[1]))
        .collect()
}

fn is_aligned(p1: Point, p2: Point) -> bool {
    p1.left == p2.left || p1.top == p2.top
}

fn all_equal(a: i32, b: i32, c: i32) -> bool {
    a == b && b == c
}

fn is_monotonic(a: i32, b: i32, c: i32) -> bool {
    (a <= b && b <= c) || (c <= b && b <= a)
}

static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// One straight segment of a line, identified across edits by `id`.
///
/// Equality compares the endpoints only.
#[derive(Debug, Clone, Copy)]
pub struct LineEdge {
    pub id: u64,
    pub start_point: Point,
    pub end_point: Point,
}

impl LineEdge {
    /// Creates an edge with a fresh id.
    pub fn new(start_point: Point, end_point: Point) -> Self {
        let id = NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed);
        Self { id, start_point, end_point }
    }

    pub fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }

    pub fn is_horizontal(&self) -> bool {
        is_horizontal(self.start_point, self.end_point)
    }

    /// Moves the edge across its axis so that it passes through `point`, keeping the id.
    pub fn translate(&self, point: Point) -> Self {
        let (start_point, end_point) = if self.is_horizontal() {
            (
                Point::new(self.start_point.left, point.top),
                Point::new(self.end_point.left, point.top),
            )
        } else {
            (
                Point::new(point.left, self.start_point.top),
                Point::new(point.left, self.end_point.top),
            )
        };
        Self { id: self.id, start_point, end_point }
    }

    pub fn contains(&self, point: Point) -> bool {
        is_on_straight_line(self.start_point, point, self.end_point, true)
    }
}

impl PartialEq for LineEdge {
    fn eq(&self, other: &Self) -> bool {
        self.start_point == other.start_point && self.end_point == other.end_point
    }
}

impl Eq for LineEdge {}
