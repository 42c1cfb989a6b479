// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::bitmap::MonoBitmap;
use crate::board::{CrossPoint, Highlight, Pixel};
use crate::chars::{is_half_transparent, is_transparent};
use crate::crossing::{is_connectable_char, Neighbors};
use crate::geo::{Point, Rect};

/// A dense block of pixels at an absolute position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PainterBoard {
    bound: Rect,
    pixels: Vec<Pixel>,
}

impl PainterBoard {
    /// Empty bounds produce a board that ignores every write.
    pub fn new(bound: Rect) -> Self {
        let len = if bound.is_empty() { 0 } else { (bound.width() * bound.height()) as usize };
        Self { bound, pixels: vec![Pixel::TRANSPARENT; len] }
    }

    pub fn bound(&self) -> Rect {
        self.bound
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Pixel::TRANSPARENT);
    }

    /// Resets the pixels overlapping `rect`.
    pub fn clear_rect(&mut self, rect: Rect) {
        self.for_each_in(rect, Pixel::reset);
    }

    /// Copies every non-transparent pixel of `other` over the overlapping region.
    pub fn fill(&mut self, other: &PainterBoard) {
        let Some(overlap) = self.bound.overlapped_rect(&other.bound) else {
            return;
        };
        for top in overlap.top()..=overlap.bottom() {
            for left in overlap.left()..=overlap.right() {
                let Some(src) = other.get(left, top) else {
                    continue;
                };
                if src.is_transparent() {
                    continue;
                }
                if let Some(dest) = self.pixel_mut(left, top) {
                    *dest = src;
                }
            }
        }
    }

    /// Draws `bitmap` with its top-left corner at `position`, returning the crossings this
    /// board could not decide on its own.
    ///
    /// Transparent bitmap cells never overwrite, and half-transparent ones are never drawn
    /// visibly.
    pub fn fill_bitmap(
        &mut self,
        position: Point,
        bitmap: &MonoBitmap,
        highlight: Highlight,
    ) -> Vec<CrossPoint> {
        if bitmap.is_empty() {
            return Vec::new();
        }
        let Some(overlap) = self.bound.overlapped_rect(&Rect::new(position, bitmap.size())) else {
            return Vec::new();
        };

        let start_column = (overlap.left() - position.left) as usize;
        let end_column = start_column + overlap.width() as usize;
        let mut cross_points = Vec::new();

        for top in overlap.top()..=overlap.bottom() {
            let bitmap_row = top - position.top;
            for cell in bitmap.cells_in(bitmap_row as usize, start_column..end_column) {
                if is_transparent(cell.visual) {
                    continue;
                }
                let bitmap_column = cell.column as i32;
                let left = position.left + bitmap_column;
                let Some(pixel) = self.pixel_mut(left, top) else {
                    continue;
                };

                if is_applicable(pixel, cell.visual) {
                    if !is_half_transparent(cell.visual) {
                        pixel.set(cell.visual, cell.direction, highlight);
                    }
                    continue;
                }

                cross_points.push(CrossPoint {
                    board_row: top,
                    board_column: left,
                    visual: cell.visual,
                    direction: cell.direction,
                    neighbors: Neighbors::new(
                        bitmap.direction(bitmap_row, bitmap_column - 1),
                        bitmap.direction(bitmap_row, bitmap_column + 1),
                        bitmap.direction(bitmap_row - 1, bitmap_column),
                        bitmap.direction(bitmap_row + 1, bitmap_column),
                    ),
                });
            }
        }
        cross_points
    }

    /// Forces every pixel overlapping `rect` to `ch`.
    pub fn fill_rect(&mut self, rect: Rect, ch: char, highlight: Highlight) {
        self.for_each_in(rect, |pixel| pixel.set(ch, ch, highlight));
    }

    /// Forces the pixel at `point` to `ch`; ignored outside the bound.
    pub fn set(&mut self, point: Point, ch: char, highlight: Highlight) {
        if let Some(pixel) = self.pixel_mut(point.left, point.top) {
            pixel.set(ch, ch, highlight);
        }
    }

    pub fn get(&self, left: i32, top: i32) -> Option<Pixel> {
        self.index_of(left, top).map(|idx| self.pixels[idx])
    }

    pub(crate) fn pixel_mut(&mut self, left: i32, top: i32) -> Option<&mut Pixel> {
        let idx = self.index_of(left, top)?;
        self.pixels.get_mut(idx)
    }

    fn for_each_in(&mut self, rect: Rect, mut f: impl FnMut(&mut Pixel)) {
        let Some(overlap) = self.bound.overlapped_rect(&rect) else {
            return;
        };
        for top in overlap.top()..=overlap.bottom() {
            for left in overlap.left()..=overlap.right() {
                if let Some(pixel) = self.pixel_mut(left, top) {
                    f(pixel);
                }
            }
        }
    }

    fn index_of(&self, left: i32, top: i32) -> Option<usize> {
        if !self.bound.contains(Point::new(left, top)) {
            return None;
        }
        let column = (left - self.bound.left()) as usize;
        let row = (top - self.bound.top()) as usize;
        Some(row * self.bound.width() as usize + column)
    }
}

/// Whether `visual` may overwrite `pixel` in place instead of becoming a crossing.
fn is_applicable(pixel: &Pixel, visual: char) -> bool {
    pixel.is_transparent()
        || pixel.visual == visual
        || !is_connectable_char(visual)
        || !is_connectable_char(pixel.visual)
}

impl fmt::Display for PainterBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        if self.pixels.is_empty() {
            return Ok(());
        }
        for (idx, row) in self.pixels.chunks(self.bound.width() as usize).enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            for pixel in row {
                write!(f, "{pixel}")?;
            }
        }
        Ok(())
    }
}
