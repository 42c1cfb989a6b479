// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::geo::{DirectedPoint, Direction, Point, Rect};
use crate::shape::line_helper::{self, LineEdge};
use crate::shape::style::LineExtra;
use crate::shape::{next_version, ShapeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAnchor {
    Start,
    End,
}

/// An orthogonal polyline between two directed anchors.
///
/// Until one of its edges is dragged the path is fully derived from the anchors. After an edge
/// move the joint points become *confirmed* and later anchor moves only patch the ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: ShapeId,
    version: u64,
    start_point: DirectedPoint,
    end_point: DirectedPoint,
    joint_points: Vec<Point>,
    edges: Vec<LineEdge>,
    confirmed_joint_points: Vec<Point>,
    extra: LineExtra,
}

impl Line {
    pub fn new(
        id: impl Into<ShapeId>,
        start_point: DirectedPoint,
        end_point: DirectedPoint,
    ) -> Self {
        let joint_points = line_helper::create_joint_points(&[start_point, end_point]);
        let edges = line_helper::create_edges(&joint_points);
        Self {
            id: id.into(),
            version: next_version(),
            start_point,
            end_point,
            joint_points,
            edges,
            confirmed_joint_points: Vec::new(),
            extra: LineExtra::default(),
        }
    }

    pub fn with_extra(mut self, extra: LineExtra) -> Self {
        self.set_extra(extra);
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn start_point(&self) -> DirectedPoint {
        self.start_point
    }

    pub fn end_point(&self) -> DirectedPoint {
        self.end_point
    }

    pub fn joint_points(&self) -> &[Point] {
        &self.joint_points
    }

    pub fn edges(&self) -> &[LineEdge] {
        &self.edges
    }

    pub fn extra(&self) -> &LineExtra {
        &self.extra
    }

    pub fn set_extra(&mut self, extra: LineExtra) {
        if self.extra != extra {
            self.extra = extra;
            self.touch();
        }
    }

    pub fn reduced_joint_points(&self) -> Vec<Point> {
        line_helper::reduce(&self.joint_points)
    }

    pub fn bound(&self) -> Rect {
        let points = self.reduced_joint_points();
        let Some(first) = points.first() else {
            return Rect::ZERO;
        };
        let (mut left, mut top) = (first.left, first.top);
        let (mut right, mut bottom) = (first.left, first.top);
        for point in &points[1..] {
            left = left.min(point.left);
            top = top.min(point.top);
            right = right.max(point.left);
            bottom = bottom.max(point.top);
        }
        Rect::by_ltrb(left, top, right, bottom)
    }

    pub fn direction(&self, anchor: LineAnchor) -> Direction {
        match anchor {
            LineAnchor::Start => self.start_point.direction,
            LineAnchor::End => self.end_point.direction,
        }
    }

    pub fn anchor_point(&self, anchor: LineAnchor) -> DirectedPoint {
        match anchor {
            LineAnchor::Start => self.start_point,
            LineAnchor::End => self.end_point,
        }
    }

    pub fn was_moving_edge(&self) -> bool {
        !self.confirmed_joint_points.is_empty()
    }

    /// Translates the whole line so its top-left joint lands on `position`.
    pub fn set_position(&mut self, position: Point) {
        let Some(left) = self.joint_points.iter().map(|p| p.left).min() else {
            return;
        };
        let Some(top) = self.joint_points.iter().map(|p| p.top).min() else {
            return;
        };
        let offset = Point::new(position.left - left, position.top - top);
        if offset == Point::ZERO {
            return;
        }

        self.start_point = self.start_point.translate(offset);
        self.end_point = self.end_point.translate(offset);
        for point in self.joint_points.iter_mut().chain(self.confirmed_joint_points.iter_mut()) {
            *point = *point + offset;
        }
        self.edges = line_helper::create_edges(&self.joint_points);
        self.touch();
    }

    /// Moves one anchor to `point`.
    ///
    /// - A line whose edges were never moved, or whose confirmed path is a single segment, is
    ///   re-routed from both anchors.
    /// - With `just_move_anchor`, the anchor and its neighbouring joint slide together so the
    ///   last segment keeps its axis.
    /// - Otherwise the anchor moves and one bend is spliced in next to it when the new position
    ///   leaves the line of the adjacent segment.
    pub fn move_anchor_point(
        &mut self,
        anchor: LineAnchor,
        point: DirectedPoint,
        reduce: bool,
        just_move_anchor: bool,
    ) {
        let previous_anchor = self.anchor_point(anchor);
        match anchor {
            LineAnchor::Start => self.start_point = point,
            LineAnchor::End => self.end_point = point,
        }

        let edge_updated = self.was_moving_edge();
        let confirmed = &self.confirmed_joint_points;
        let new_joint_points = if !edge_updated || confirmed.len() <= 2 {
            line_helper::create_joint_points(&[self.start_point, self.end_point])
        } else if just_move_anchor {
            let mut points = confirmed.clone();
            let (anchor_index, affected_index) = neighbour_indexes(anchor, points.len());
            let anchor_point = points[anchor_index];
            let affected = &mut points[affected_index];
            if anchor_point.left == affected.left {
                affected.left = point.left();
            } else {
                affected.top = point.top();
            }
            points[anchor_index] = point.point;
            points
        } else {
            let mut points = confirmed.clone();
            let (anchor_index, previous_index) = neighbour_indexes(anchor, points.len());
            let bend = new_joint_point(points[anchor_index], points[previous_index], point.point);
            points[anchor_index] = point.point;
            if let Some(bend) = bend {
                let insert_at = match anchor {
                    LineAnchor::Start => 1,
                    LineAnchor::End => anchor_index,
                };
                points.insert(insert_at, bend);
            }
            points
        };

        let updated = previous_anchor != point || new_joint_points != self.joint_points;
        self.joint_points =
            if reduce { line_helper::reduce(&new_joint_points) } else { new_joint_points };
        if reduce && edge_updated {
            self.confirmed_joint_points = self.joint_points.clone();
        }
        self.edges = line_helper::create_edges(&self.joint_points);
        if updated {
            self.touch();
        }
    }

    /// Drags the edge `edge_id` so it passes through `point`, keeping both anchors in place.
    ///
    /// Moving the first or last edge introduces a new edge next to the anchor. Without
    /// `reduce`, the moved edge keeps its id. Returns `false` when the edge is unknown or the
    /// move changes nothing.
    pub fn move_edge(&mut self, edge_id: u64, point: Point, reduce: bool) -> bool {
        let Some(edge_index) = self.edges.iter().position(|edge| edge.id == edge_id) else {
            return false;
        };
        let edge = self.edges[edge_index];
        let new_edge = edge.translate(point);
        if !reduce && edge == new_edge {
            return false;
        }

        let last_edge_index = self.edges.len() - 1;
        let mut points = self.joint_points.clone();
        if edge_index == 0 && edge_index == last_edge_index {
            points.insert(1, new_edge.start_point);
            points.insert(2, new_edge.end_point);
        } else if edge_index == 0 {
            points.insert(1, new_edge.start_point);
            points[2] = new_edge.end_point;
        } else if edge_index == last_edge_index {
            let start_index = points.len() - 2;
            points[start_index] = new_edge.start_point;
            points.insert(start_index + 1, new_edge.end_point);
        } else {
            let Some(start_index) = points.iter().position(|p| *p == edge.start_point) else {
                return false;
            };
            points[start_index] = new_edge.start_point;
            points[start_index + 1] = new_edge.end_point;
        }

        let updated = points != self.joint_points;
        self.joint_points = if reduce { line_helper::reduce(&points) } else { points };
        self.confirmed_joint_points = self.joint_points.clone();

        let mut edges = line_helper::create_edges(&self.joint_points);
        if !reduce {
            let moved_index = if edge_index == 0 { 1 } else { edge_index };
            if let Some(moved) = edges.get_mut(moved_index) {
                moved.id = edge.id;
            }
        }
        self.edges = edges;

        if updated {
            self.touch();
        }
        updated
    }

    pub fn contains(&self, point: Point) -> bool {
        self.edges.iter().any(|edge| edge.contains(point))
    }

    pub fn is_overlapped(&self, rect: &Rect) -> bool {
        self.edges.iter().any(|edge| {
            let (start, end) = (edge.start_point, edge.end_point);
            Rect::by_ltrb(start.left, start.top, end.left, end.top).is_overlapped(rect)
        })
    }

    fn touch(&mut self) {
        self.version = next_version();
    }
}

/// `(anchor, neighbour)` indexes at the given end of a joint list with `len >= 2`.
fn neighbour_indexes(anchor: LineAnchor, len: usize) -> (usize, usize) {
    match anchor {
        LineAnchor::Start => (0, 1),
        LineAnchor::End => (len - 1, len - 2),
    }
}

/// The bend needed to reach `target` from the segment `anchor`-`previous`, if any.
fn new_joint_point(anchor: Point, previous: Point, target: Point) -> Option<Point> {
    if line_helper::is_on_straight_line(anchor, previous, target, false) {
        return None;
    }
    if line_helper::is_horizontal(anchor, previous) {
        Some(Point::new(target.left, anchor.top))
    } else {
        Some(Point::new(anchor.left, target.top))
    }
}
