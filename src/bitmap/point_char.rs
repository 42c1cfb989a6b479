// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geo::Point;

/// A char placed at an absolute grid point, emitted by the factories before they hit a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointChar {
    pub left: i32,
    pub top: i32,
    pub ch: char,
}

impl PointChar {
    pub const fn new(left: i32, top: i32, ch: char) -> Self {
        Self { left, top, ch }
    }

    /// A single char at `point`.
    pub fn point(point: Point, ch: char) -> Self {
        Self::new(point.left, point.top, ch)
    }

    /// Cells strictly between `begin` and `end` on row `top`, walking from `begin` towards `end`.
    pub fn horizontal_line(begin: i32, end: i32, top: i32, ch: char) -> Vec<PointChar> {
        exclusive_run(begin, end)
            .map(|left| PointChar::new(left, top, ch))
            .collect()
    }

    /// Cells strictly between `begin` and `end` on column `left`, walking from `begin` towards
    /// `end`.
    pub fn vertical_line(left: i32, begin: i32, end: i32, ch: char) -> Vec<PointChar> {
        exclusive_run(begin, end)
            .map(|top| PointChar::new(left, top, ch))
            .collect()
    }
}

fn exclusive_run(begin: i32, end: i32) -> impl Iterator<Item = i32> {
    let len = if (begin - end).abs() <= 1 { 0 } else { (begin - end).abs() - 1 };
    let step = if begin < end { 1 } else { -1 };
    (1..=len).map(move |offset| begin + offset * step)
}
