// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Integer grid geometry.
//!
//! Coordinates are `(left, top)` cell indices on an unbounded grid; `left` grows rightwards and
//! `top` grows downwards. Rectangles are inclusive on both ends (`right = left + width - 1`).

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub left: i32,
    pub top: i32,
}

impl Point {
    pub const ZERO: Self = Self { left: 0, top: 0 };

    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    /// Truncates towards zero, matching integer midpoint arithmetic elsewhere in the crate.
    pub fn from_f64(left: f64, top: f64) -> Self {
        Self::new(left.trunc() as i32, top.trunc() as i32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.left + rhs.left, self.top + rhs.top)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.left - rhs.left, self.top - rhs.top)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub left: f64,
    pub top: f64,
}

impl PointF {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A point plus the axis a line leaves it along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedPoint {
    pub direction: Direction,
    pub point: Point,
}

impl DirectedPoint {
    pub const fn new(direction: Direction, left: i32, top: i32) -> Self {
        Self { direction, point: Point::new(left, top) }
    }

    pub const fn at(direction: Direction, point: Point) -> Self {
        Self { direction, point }
    }

    pub fn left(&self) -> i32 {
        self.point.left
    }

    pub fn top(&self) -> i32 {
        self.point.top
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self { direction: self.direction, point: self.point + offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self { position: Point::ZERO, size: Size::ZERO };

    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    pub const fn by_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(Point::new(left, top), Size::new(width, height))
    }

    /// Builds the rectangle spanning two corners, in any order, both inclusive.
    pub fn by_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let (l, r) = if left <= right { (left, right) } else { (right, left) };
        let (t, b) = if top <= bottom { (top, bottom) } else { (bottom, top) };
        Self::by_ltwh(l, t, r - l + 1, b - t + 1)
    }

    pub fn left(&self) -> i32 {
        self.position.left
    }

    pub fn top(&self) -> i32 {
        self.position.top
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn right(&self) -> i32 {
        self.left() + self.width() - 1
    }

    pub fn bottom(&self) -> i32 {
        self.top() + self.height() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.left()..=self.right()).contains(&point.left)
            && (self.top()..=self.bottom()).contains(&point.top)
    }

    pub fn is_vertex(&self, point: Point) -> bool {
        (point.left == self.left() || point.left == self.right())
            && (point.top == self.top() || point.top == self.bottom())
    }

    pub fn is_overlapped(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    pub fn overlapped_rect(&self, other: &Rect) -> Option<Rect> {
        if !self.is_overlapped(other) {
            return None;
        }
        Some(Rect::by_ltrb(
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }

    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(self.position + offset, self.size)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} | {}x{}]", self.left(), self.top(), self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn by_ltrb_normalizes_corners() {
        let rect = Rect::by_ltrb(10, 30, 4, 20);
        assert_eq!(rect, Rect::by_ltwh(4, 20, 7, 11));
        assert_eq!(rect.right(), 10);
        assert_eq!(rect.bottom(), 30);
    }

    #[test]
    fn overlap_is_inclusive_and_symmetric() {
        let a = Rect::by_ltwh(0, 0, 4, 4);
        let b = Rect::by_ltwh(3, 3, 4, 4);
        let c = Rect::by_ltwh(4, 0, 2, 2);

        assert!(a.is_overlapped(&b));
        assert!(b.is_overlapped(&a));
        assert!(!a.is_overlapped(&c));
        assert_eq!(a.overlapped_rect(&b), Some(Rect::by_ltwh(3, 3, 1, 1)));
        assert_eq!(a.overlapped_rect(&c), None);
    }

    #[test]
    fn empty_rect_never_overlaps() {
        let a = Rect::ZERO;
        let b = Rect::by_ltwh(-10, -10, 20, 20);
        assert!(!a.is_overlapped(&b));
        assert!(!b.is_overlapped(&a));
    }

    #[test]
    fn contains_and_vertex() {
        let rect = Rect::by_ltwh(1, 1, 3, 3);
        assert!(rect.contains(Point::new(1, 1)));
        assert!(rect.contains(Point::new(3, 3)));
        assert!(!rect.contains(Point::new(4, 3)));
        assert!(rect.is_vertex(Point::new(3, 1)));
        assert!(!rect.is_vertex(Point::new(2, 1)));
    }

    #[test]
    fn point_arithmetic_and_truncation() {
        assert_eq!(Point::new(1, 2) + Point::new(3, -4), Point::new(4, -2));
        assert_eq!(Point::new(1, 2) - Point::new(3, -4), Point::new(-2, 6));
        assert_eq!(Point::from_f64(2.5, -2.5), Point::new(2, -2));
    }
}
