// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shapes the engine knows how to render.
//!
//! Every shape carries a [`ShapeId`] and a version. Each mutation that changes what the shape
//! would render bumps the version, which is what the bitmap cache keys on.

use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::geo::Rect;

pub mod connector;
pub mod line;
pub mod line_helper;
pub mod style;
pub mod text;

pub use connector::{Around, LineConnector, ShapeConnector};
pub use line::{Line, LineAnchor};
pub use line_helper::LineEdge;
pub use style::{LineExtra, RectangleExtra, StyleTable, TextExtra};
pub use text::{RenderableText, TextShape};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(SmolStr);

impl ShapeId {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShapeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ShapeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for ShapeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ShapeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// A process-wide unique version, so no two shape states ever share one.
pub(crate) fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    id: ShapeId,
    version: u64,
    bound: Rect,
    extra: RectangleExtra,
}

impl RectangleShape {
    pub fn new(id: impl Into<ShapeId>, bound: Rect) -> Self {
        Self { id: id.into(), version: next_version(), bound, extra: RectangleExtra::default() }
    }

    pub fn with_extra(mut self, extra: RectangleExtra) -> Self {
        self.set_extra(extra);
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn bound(&self) -> Rect {
        self.bound
    }

    pub fn extra(&self) -> &RectangleExtra {
        &self.extra
    }

    pub fn set_bound(&mut self, bound: Rect) {
        if self.bound != bound {
            self.bound = bound;
            self.version = next_version();
        }
    }

    pub fn set_extra(&mut self, extra: RectangleExtra) {
        if self.extra != extra {
            self.extra = extra;
            self.version = next_version();
        }
    }
}

/// A container whose bound is the union of its children. It renders nothing itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupShape {
    id: ShapeId,
    version: u64,
    children: Vec<Shape>,
}

impl GroupShape {
    pub fn new(id: impl Into<ShapeId>) -> Self {
        Self { id: id.into(), version: next_version(), children: Vec::new() }
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn add(&mut self, shape: Shape) {
        self.children.push(shape);
        self.version = next_version();
    }

    /// [`Rect::ZERO`] while empty.
    pub fn bound(&self) -> Rect {
        let mut bounds = self.children.iter().map(Shape::bound);
        let Some(first) = bounds.next() else {
            return Rect::ZERO;
        };
        let (mut left, mut top) = (first.left(), first.top());
        let (mut right, mut bottom) = (first.right(), first.bottom());
        for bound in bounds {
            left = left.min(bound.left());
            top = top.min(bound.top());
            right = right.max(bound.right());
            bottom = bottom.max(bound.bottom());
        }
        Rect::by_ltrb(left, top, right, bottom)
    }
}

/// A shape kind produced by a collaborator this engine has no factory for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedShape {
    pub id: ShapeId,
    pub version: u64,
    pub kind: SmolStr,
    pub bound: Rect,
}

impl UnsupportedShape {
    pub fn new(id: impl Into<ShapeId>, kind: impl Into<SmolStr>, bound: Rect) -> Self {
        Self { id: id.into(), version: next_version(), kind: kind.into(), bound }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(RectangleShape),
    Text(TextShape),
    Line(Line),
    Group(GroupShape),
    Unsupported(UnsupportedShape),
}

impl Shape {
    pub fn id(&self) -> &ShapeId {
        match self {
            Shape::Rectangle(shape) => shape.id(),
            Shape::Text(shape) => shape.id(),
            Shape::Line(shape) => shape.id(),
            Shape::Group(shape) => shape.id(),
            Shape::Unsupported(shape) => &shape.id,
        }
    }

    pub fn version(&self) -> u64 {
        match self {
            Shape::Rectangle(shape) => shape.version(),
            Shape::Text(shape) => shape.version(),
            Shape::Line(shape) => shape.version(),
            Shape::Group(shape) => shape.version(),
            Shape::Unsupported(shape) => shape.version,
        }
    }

    pub fn bound(&self) -> Rect {
        match self {
            Shape::Rectangle(shape) => shape.bound(),
            Shape::Text(shape) => shape.bound(),
            Shape::Line(shape) => shape.bound(),
            Shape::Group(shape) => shape.bound(),
            Shape::Unsupported(shape) => shape.bound,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Text(_) => "text",
            Shape::Line(_) => "line",
            Shape::Group(_) => "group",
            Shape::Unsupported(shape) => &shape.kind,
        }
    }

    /// Lines may only attach to boxes.
    pub fn can_have_connectors(&self) -> bool {
        matches!(self, Shape::Rectangle(_) | Shape::Text(_))
    }
}

impl From<RectangleShape> for Shape {
    fn from(shape: RectangleShape) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<TextShape> for Shape {
    fn from(shape: TextShape) -> Self {
        Shape::Text(shape)
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

impl From<GroupShape> for Shape {
    fn from(shape: GroupShape) -> Self {
        Shape::Group(shape)
    }
}
