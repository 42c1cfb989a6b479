// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use glyphgrid::geo::{DirectedPoint, Direction, Rect};
use glyphgrid::shape::style::{LineExtra, StyleTable};
use glyphgrid::shape::{Line, RectangleShape, Shape, TextShape};

fn direction_for(index: usize) -> Direction {
    if index % 2 == 0 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}

pub mod scene {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        /// Boxes per row and per column.
        pub grid: usize,
        pub box_size: i32,
        pub gap: i32,
        /// Lines from every box to boxes further along the grid.
        pub lines_per_box: usize,
    }

    impl Params {
        pub const fn new(grid: usize, box_size: i32, gap: i32, lines_per_box: usize) -> Self {
            Self { grid, box_size, gap, lines_per_box }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumDense,
        LargeCrossing,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumDense => "medium_dense",
                Self::LargeCrossing => "large_crossing",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(3, 6, 4, 1),
                Self::MediumDense => Params::new(8, 5, 3, 2),
                Self::LargeCrossing => Params::new(16, 7, 2, 3),
            }
        }
    }

    /// Boxes laid out on a grid, every other one a bordered text box, with lines fanning out
    /// across the grid so many of them cross.
    pub fn shapes(params: Params) -> Vec<Shape> {
        let styles = StyleTable::predefined();
        let line_extra = LineExtra {
            stroke: Some(styles.stroke_or_default("S1", false)),
            start_anchor: None,
            end_anchor: Some(styles.anchor_or_default("A1")),
            ..LineExtra::default()
        };

        let pitch = params.box_size + params.gap;
        let mut shapes = Vec::new();
        let mut centers = Vec::new();
        for row in 0..params.grid {
            for column in 0..params.grid {
                let index = row * params.grid + column;
                let bound = Rect::by_ltwh(
                    column as i32 * pitch,
                    row as i32 * pitch,
                    params.box_size,
                    params.box_size,
                );
                centers.push((
                    bound.left() + params.box_size / 2,
                    bound.top() + params.box_size / 2,
                ));
                let id = format!("box-{index}");
                if index % 2 == 0 {
                    shapes.push(RectangleShape::new(id, bound).into());
                } else {
                    let label = format!("node {index}");
                    shapes.push(TextShape::new(id, bound).with_text(&label).into());
                }
            }
        }

        let count = centers.len();
        for (index, &(left, top)) in centers.iter().enumerate() {
            for step in 1..=params.lines_per_box {
                let target = (index + step * (params.grid + 1)) % count;
                if target == index {
                    continue;
                }
                let (end_left, end_top) = centers[target];
                let line = Line::new(
                    format!("line-{index}-{step}"),
                    DirectedPoint::new(direction_for(index + step), left, top),
                    DirectedPoint::new(direction_for(target), end_left, end_top),
                )
                .with_extra(line_extra.clone());
                shapes.push(line.into());
            }
        }
        shapes
    }

    pub fn fixture(case: Case) -> Vec<Shape> {
        shapes(case.params())
    }
}

pub mod routing {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        TwoAnchors,
        Zigzag64,
        Zigzag1024,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::TwoAnchors => "two_anchors",
                Self::Zigzag64 => "zigzag_64",
                Self::Zigzag1024 => "zigzag_1024",
            }
        }

        const fn seed_count(self) -> usize {
            match self {
                Self::TwoAnchors => 2,
                Self::Zigzag64 => 64,
                Self::Zigzag1024 => 1024,
            }
        }
    }

    /// Seeds stepping right and alternately up and down, so every pair needs a bend.
    pub fn fixture(case: Case) -> Vec<DirectedPoint> {
        (0..case.seed_count())
            .map(|index| {
                let left = index as i32 * 7;
                let top = if index % 2 == 0 { 0 } else { 5 + (index % 5) as i32 };
                DirectedPoint::new(direction_for(index / 2), left, top)
            })
            .collect()
    }
}
