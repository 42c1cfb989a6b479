// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shape bitmaps.
//!
//! A [`MonoBitmap`] is the immutable, locally addressed glyph matrix a shape renders to. Each cell
//! carries two layers:
//! - the *visual* char, which is what ends up on screen;
//! - the *direction* char, the un-gapped structural glyph the board uses for crossing decisions.
//!
//! Bitmaps are assembled with [`MonoBitmapBuilder`] and stored sparsely: only cells with a
//! non-transparent char in either layer are kept.

use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;

use crate::chars::{display_char, is_half_transparent, is_transparent, TRANSPARENT_CHAR};
use crate::geo::Size;

pub mod drawable;
pub mod factory;
pub mod manager;
mod point_char;

pub use point_char::PointChar;

/// One stored cell of a sparse bitmap row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: usize,
    pub visual: char,
    pub direction: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Row {
    // Sorted by column.
    cells: SmallVec<[Cell; 8]>,
}

impl Row {
    fn from_layers(visual: &[char], direction: &[char]) -> Self {
        let cells = visual
            .iter()
            .zip(direction)
            .enumerate()
            .filter(|(_, (v, d))| !is_transparent(**v) || !is_transparent(**d))
            .map(|(column, (&visual, &direction))| Cell { column, visual, direction })
            .collect();
        Self { cells }
    }

    fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells
            .binary_search_by_key(&column, |cell| cell.column)
            .ok()
            .map(|idx| &self.cells[idx])
    }

    fn cells_in(&self, columns: Range<usize>) -> &[Cell] {
        let start = self.cells.partition_point(|cell| cell.column < columns.start);
        let end = self.cells.partition_point(|cell| cell.column < columns.end);
        &self.cells[start..end.max(start)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonoBitmap {
    size: Size,
    rows: Vec<Row>,
}

impl MonoBitmap {
    pub const EMPTY: MonoBitmap = MonoBitmap { size: Size::ZERO, rows: Vec::new() };

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Visual char at `(row, column)`, transparent when out of range.
    pub fn visual(&self, row: i32, column: i32) -> char {
        self.cell(row, column).map_or(TRANSPARENT_CHAR, |cell| cell.visual)
    }

    /// Direction char at `(row, column)`, transparent when out of range.
    pub fn direction(&self, row: i32, column: i32) -> char {
        self.cell(row, column).map_or(TRANSPARENT_CHAR, |cell| cell.direction)
    }

    /// Stored cells of `row` whose column falls in `columns`, in column order.
    pub fn cells_in(&self, row: usize, columns: Range<usize>) -> &[Cell] {
        self.rows.get(row).map_or(&[], |r| r.cells_in(columns))
    }

    fn cell(&self, row: i32, column: i32) -> Option<&Cell> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        self.rows.get(row)?.cell(column)
    }
}

impl fmt::Display for MonoBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        let width = usize::try_from(self.size.width).unwrap_or(0);
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            let mut cells = row.cells.iter().peekable();
            for column in 0..width {
                let ch = match cells.peek() {
                    Some(cell) if cell.column == column => {
                        let ch = cell.visual;
                        cells.next();
                        ch
                    }
                    _ => TRANSPARENT_CHAR,
                };
                f.write_char(display_char(ch))?;
            }
        }
        Ok(())
    }
}

/// Dense two-layer scratch matrix that produces a [`MonoBitmap`].
#[derive(Debug, Clone)]
pub struct MonoBitmapBuilder {
    width: usize,
    height: usize,
    visual: Vec<char>,
    direction: Vec<char>,
}

impl MonoBitmapBuilder {
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = usize::try_from(width).unwrap_or(0);
        let height = usize::try_from(height).unwrap_or(0);
        Self {
            width,
            height,
            visual: vec![TRANSPARENT_CHAR; width * height],
            direction: vec![TRANSPARENT_CHAR; width * height],
        }
    }

    /// Writes one cell. Out-of-range positions are ignored, and the direction layer is only
    /// overwritten by a non-transparent char.
    pub fn put(&mut self, row: i32, column: i32, visual: char, direction: char) {
        let Some(idx) = self.index_of(row, column) else {
            return;
        };
        self.visual[idx] = visual;
        if !is_transparent(direction) {
            self.direction[idx] = direction;
        }
    }

    pub fn fill_all(&mut self, ch: char) {
        self.visual.fill(ch);
        self.direction.fill(ch);
    }

    /// Overlays `bitmap` with its top-left corner at `(row, column)`.
    ///
    /// A half-transparent source char only lands on a transparent destination, so an invisible
    /// fill never hides what is already drawn.
    pub fn fill_bitmap(&mut self, row: i32, column: i32, bitmap: &MonoBitmap) {
        if bitmap.is_empty() {
            return;
        }
        for (r, src) in bitmap.rows.iter().enumerate() {
            let dest_row = row.saturating_add(r as i32);
            for cell in &src.cells {
                let dest_column = column.saturating_add(cell.column as i32);
                let Some(idx) = self.index_of(dest_row, dest_column) else {
                    continue;
                };
                if is_applicable(self.visual[idx], cell.visual) {
                    self.visual[idx] = cell.visual;
                }
                if is_applicable(self.direction[idx], cell.direction) {
                    self.direction[idx] = cell.direction;
                }
            }
        }
    }

    pub fn build(self) -> MonoBitmap {
        if self.width == 0 || self.height == 0 {
            return MonoBitmap::EMPTY;
        }
        let rows = self
            .visual
            .chunks(self.width)
            .zip(self.direction.chunks(self.width))
            .map(|(visual, direction)| Row::from_layers(visual, direction))
            .collect();
        MonoBitmap {
            size: Size::new(self.width as i32, self.height as i32),
            rows,
        }
    }

    fn index_of(&self, row: i32, column: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.height && column < self.width).then(|| row * self.width + column)
    }
}

fn is_applicable(old: char, new: char) -> bool {
    if is_transparent(new) {
        return false;
    }
    is_transparent(old) || !is_half_transparent(new)
}

#[cfg(test)]
mod tests;
