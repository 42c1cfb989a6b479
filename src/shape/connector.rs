// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Attaching line anchors to the sides of boxes.
//!
//! A [`LineConnector`] records where on a box side an anchor sits as a clamped ratio along the
//! side plus an absolute offset for whatever falls outside it. Replaying it against a resized box
//! keeps the anchor glued to the same side.

use serde::{Deserialize, Serialize};

use crate::geo::{DirectedPoint, Direction, Point, PointF, Rect};
use crate::shape::{LineAnchor, Shape, ShapeId};

/// Cells an anchor may sit away from a side and still count as touching it.
const MAX_DISTANCE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Around {
    Left,
    Top,
    Right,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConnector {
    pub line_id: ShapeId,
    pub anchor: LineAnchor,
    pub ratio: PointF,
    pub offset: Point,
}

impl LineConnector {
    /// Connects `anchor` of `line_id` at `anchor_point` to `bound`, or `None` when the point
    /// touches no side.
    pub fn attach(
        line_id: ShapeId,
        anchor: LineAnchor,
        anchor_point: DirectedPoint,
        bound: Rect,
    ) -> Option<Self> {
        let around = ShapeConnector::around(anchor_point, bound)?;
        Some(Self {
            line_id,
            anchor,
            ratio: ShapeConnector::ratio(around, anchor_point, bound),
            offset: ShapeConnector::offset(around, anchor_point, bound),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sides {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
}

impl Sides {
    fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

pub struct ShapeConnector;

impl ShapeConnector {
    /// The side of `bound` the anchor plugs into.
    ///
    /// Near a corner two sides qualify: a horizontal anchor picks the left or right side and a
    /// vertical one picks the top or bottom.
    pub fn around(anchor_point: DirectedPoint, bound: Rect) -> Option<Around> {
        let sides = detect_around(anchor_point.point, bound);
        let horizontal = anchor_point.direction == Direction::Horizontal;

        if sides.left {
            if sides.top && !horizontal {
                return Some(Around::Top);
            }
            if sides.bottom && !horizontal {
                return Some(Around::Bottom);
            }
            return Some(Around::Left);
        }
        if sides.top {
            if sides.right && horizontal {
                return Some(Around::Right);
            }
            return Some(Around::Top);
        }
        if sides.right {
            if sides.bottom && !horizontal {
                return Some(Around::Bottom);
            }
            return Some(Around::Right);
        }
        sides.bottom.then_some(Around::Bottom)
    }

    /// Position along the side as a fraction in `[0, 1]`; the perpendicular axis is pinned to
    /// the side.
    pub fn ratio(around: Around, anchor_point: DirectedPoint, bound: Rect) -> PointF {
        let left_ratio =
            f64::from(anchor_point.left() - bound.left()) / f64::from(adjust_size(bound.width()));
        let top_ratio =
            f64::from(anchor_point.top() - bound.top()) / f64::from(adjust_size(bound.height()));
        match around {
            Around::Left => PointF::new(0.0, top_ratio.clamp(0.0, 1.0)),
            Around::Top => PointF::new(left_ratio.clamp(0.0, 1.0), 0.0),
            Around::Right => PointF::new(1.0, top_ratio.clamp(0.0, 1.0)),
            Around::Bottom => PointF::new(left_ratio.clamp(0.0, 1.0), 1.0),
        }
    }

    /// The part of the anchor position the clamped ratio cannot express.
    pub fn offset(around: Around, anchor_point: DirectedPoint, bound: Rect) -> Point {
        let (left, top) = (anchor_point.left(), anchor_point.top());
        match around {
            Around::Left => Point::new(
                left - bound.left(),
                offset_to_range(top, bound.top(), bound.bottom()),
            ),
            Around::Top => Point::new(
                offset_to_range(left, bound.left(), bound.right()),
                top - bound.top(),
            ),
            Around::Right => Point::new(
                left - bound.right(),
                offset_to_range(top, bound.top(), bound.bottom()),
            ),
            Around::Bottom => Point::new(
                offset_to_range(left, bound.left(), bound.right()),
                top - bound.bottom(),
            ),
        }
    }

    /// Replays `connector` against `bound`. Fractional cells are truncated.
    pub fn point_in_new_bound(
        connector: &LineConnector,
        direction: Direction,
        bound: Rect,
    ) -> DirectedPoint {
        let left = f64::from(bound.left())
            + f64::from(bound.width() - 1) * connector.ratio.left
            + f64::from(connector.offset.left);
        let top = f64::from(bound.top())
            + f64::from(bound.height() - 1) * connector.ratio.top
            + f64::from(connector.offset.top);
        DirectedPoint::at(direction, Point::from_f64(left, top))
    }

    /// The top-most shape `point` could attach to. Candidates are ordered bottom to top.
    pub fn connectable_shape<'a>(
        point: Point,
        candidates: impl DoubleEndedIterator<Item = &'a Shape>,
    ) -> Option<&'a Shape> {
        candidates
            .rev()
            .find(|shape| shape.can_have_connectors() && detect_around(point, shape.bound()).any())
    }
}

fn detect_around(point: Point, bound: Rect) -> Sides {
    let within_rows = is_around(point.top, bound.top(), bound.bottom());
    let within_columns = is_around(point.left, bound.left(), bound.right());
    Sides {
        left: is_around(point.left, bound.left(), bound.left()) && within_rows,
        right: is_around(point.left, bound.right(), bound.right()) && within_rows,
        top: is_around(point.top, bound.top(), bound.top()) && within_columns,
        bottom: is_around(point.top, bound.bottom(), bound.bottom()) && within_columns,
    }
}

fn is_around(value: i32, lower: i32, upper: i32) -> bool {
    value >= lower - MAX_DISTANCE && value <= upper + MAX_DISTANCE
}

fn offset_to_range(value: i32, lower: i32, upper: i32) -> i32 {
    if value < lower {
        value - lower
    } else if value > upper {
        value - upper
    } else {
        0
    }
}

fn adjust_size(value: i32) -> i32 {
    (value - 1).max(1)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::shape::{Line, RectangleShape};

    use Around::{Bottom, Left, Right, Top};
    use Direction::{Horizontal as H, Vertical as V};

    fn bound() -> Rect {
        Rect::by_ltrb(4, 20, 10, 30)
    }

    #[rstest]
    // left side
    #[case(5, 25, H, Some(Left))]
    #[case(3, 25, V, Some(Left))]
    #[case(4, 25, V, Some(Left))]
    #[case(5, 25, V, Some(Left))]
    // top-left corner
    #[case(3, 20, H, Some(Left))]
    #[case(4, 20, H, Some(Left))]
    #[case(5, 20, H, Some(Left))]
    #[case(3, 20, V, Some(Top))]
    #[case(4, 20, V, Some(Top))]
    #[case(5, 20, V, Some(Top))]
    // bottom-left corner
    #[case(3, 30, H, Some(Left))]
    #[case(5, 30, H, Some(Left))]
    #[case(3, 30, V, Some(Bottom))]
    #[case(5, 30, V, Some(Bottom))]
    // right side
    #[case(9, 25, H, Some(Right))]
    #[case(10, 25, V, Some(Right))]
    #[case(11, 25, H, Some(Right))]
    // top-right corner
    #[case(9, 20, H, Some(Right))]
    #[case(11, 20, H, Some(Right))]
    #[case(9, 20, V, Some(Top))]
    #[case(11, 20, V, Some(Top))]
    // bottom-right corner
    #[case(9, 30, H, Some(Right))]
    #[case(11, 30, H, Some(Right))]
    #[case(10, 30, V, Some(Bottom))]
    #[case(11, 30, V, Some(Bottom))]
    // top side
    #[case(6, 19, H, Some(Top))]
    #[case(6, 21, V, Some(Top))]
    #[case(4, 19, V, Some(Top))]
    #[case(4, 21, H, Some(Left))]
    #[case(10, 19, V, Some(Top))]
    #[case(10, 21, H, Some(Right))]
    // bottom side
    #[case(6, 29, H, Some(Bottom))]
    #[case(6, 31, V, Some(Bottom))]
    #[case(4, 31, V, Some(Bottom))]
    #[case(4, 29, H, Some(Left))]
    #[case(10, 31, V, Some(Bottom))]
    #[case(10, 29, H, Some(Right))]
    // away from every side
    #[case(7, 25, H, None)]
    #[case(2, 25, H, None)]
    #[case(6, 18, V, None)]
    #[case(12, 32, V, None)]
    fn around_side(
        #[case] left: i32,
        #[case] top: i32,
        #[case] direction: Direction,
        #[case] expected: Option<Around>,
    ) {
        let anchor = DirectedPoint::new(direction, left, top);
        assert_eq!(ShapeConnector::around(anchor, bound()), expected);
    }

    #[rstest]
    #[case(DirectedPoint::new(H, 3, 25), Left, PointF::new(0.0, 0.5), Point::new(-1, 0))]
    #[case(DirectedPoint::new(V, 7, 19), Top, PointF::new(0.5, 0.0), Point::new(0, -1))]
    #[case(DirectedPoint::new(H, 11, 32), Right, PointF::new(1.0, 1.0), Point::new(1, 2))]
    #[case(DirectedPoint::new(V, 2, 30), Bottom, PointF::new(0.0, 1.0), Point::new(-2, 0))]
    fn ratio_and_offset(
        #[case] anchor: DirectedPoint,
        #[case] around: Around,
        #[case] ratio: PointF,
        #[case] offset: Point,
    ) {
        assert_eq!(ShapeConnector::ratio(around, anchor, bound()), ratio);
        assert_eq!(ShapeConnector::offset(around, anchor, bound()), offset);
    }

    #[test]
    fn connector_replays_onto_same_bound() {
        let anchor = DirectedPoint::new(H, 3, 25);
        let connector =
            LineConnector::attach(ShapeId::from("line"), LineAnchor::End, anchor, bound());
        let Some(connector) = connector else {
            panic!("anchor should touch the left side");
        };
        assert_eq!(ShapeConnector::point_in_new_bound(&connector, H, bound()), anchor);
    }

    #[test]
    fn connector_follows_resized_bound() {
        let anchor = DirectedPoint::new(V, 7, 19);
        let Some(connector) = LineConnector::attach("l".into(), LineAnchor::Start, anchor, bound())
        else {
            panic!("anchor should touch the top side");
        };

        // Wider and shifted: the anchor stays in the middle of the top side.
        let resized = Rect::by_ltwh(0, 0, 13, 5);
        let moved = ShapeConnector::point_in_new_bound(&connector, V, resized);
        assert_eq!(moved, DirectedPoint::new(V, 6, -1));
    }

    #[test]
    fn replay_truncates_fractional_cells() {
        let connector = LineConnector {
            line_id: "l".into(),
            anchor: LineAnchor::End,
            ratio: PointF::new(0.5, 1.0),
            offset: Point::ZERO,
        };
        let point = ShapeConnector::point_in_new_bound(&connector, V, Rect::by_ltwh(0, 0, 4, 3));
        assert_eq!(point.point, Point::new(1, 2));
    }

    #[test]
    fn attach_rejects_distant_points() {
        let anchor = DirectedPoint::new(H, 7, 25);
        assert!(LineConnector::attach("l".into(), LineAnchor::End, anchor, bound()).is_none());
    }

    #[test]
    fn connectable_shape_prefers_top_most_box() {
        let shapes: Vec<Shape> = vec![
            RectangleShape::new("below", Rect::by_ltwh(0, 0, 10, 10)).into(),
            Line::new("line", DirectedPoint::new(H, 0, 0), DirectedPoint::new(H, 9, 0)).into(),
            RectangleShape::new("above", Rect::by_ltwh(5, 0, 10, 10)).into(),
        ];

        let hit = ShapeConnector::connectable_shape(Point::new(4, 5), shapes.iter());
        assert_eq!(hit.map(|shape| shape.id().as_str()), Some("above"));

        let hit = ShapeConnector::connectable_shape(Point::new(0, 5), shapes.iter());
        assert_eq!(hit.map(|shape| shape.id().as_str()), Some("below"));

        assert!(ShapeConnector::connectable_shape(Point::new(40, 40), shapes.iter()).is_none());
    }
}
