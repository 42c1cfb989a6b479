// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Size-independent pictures that render to a bitmap on demand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitmap::{MonoBitmap, MonoBitmapBuilder};
use crate::chars::TRANSPARENT_CHAR;

pub trait Drawable: fmt::Debug + Send + Sync {
    fn to_bitmap(&self, width: i32, height: i32) -> MonoBitmap;
}

/// Paints every cell with one char.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharDrawable(pub char);

impl Drawable for CharDrawable {
    fn to_bitmap(&self, width: i32, height: i32) -> MonoBitmap {
        let mut builder = MonoBitmapBuilder::new(width, height);
        builder.fill_all(self.0);
        builder.build()
    }
}

/// A char grid whose middle band stretches along each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NinePatchPattern {
    width: usize,
    height: usize,
    chars: Vec<char>,
}

impl NinePatchPattern {
    /// Builds a pattern from `delimiter`-separated rows. `transparent` marks see-through cells.
    ///
    /// Rows shorter than the first one are padded with transparent cells.
    pub fn from_text(text: &str, delimiter: char, transparent: char) -> Self {
        let rows: Vec<Vec<char>> = text.split(delimiter).map(|row| row.chars().collect()).collect();
        let width = rows.first().map_or(0, Vec::len);
        let height = if width == 0 { 0 } else { rows.len() };

        let mut chars = Vec::with_capacity(width * height);
        for row in rows.iter().take(height) {
            for column in 0..width {
                let ch = row.get(column).copied().unwrap_or(transparent);
                chars.push(if ch == transparent { TRANSPARENT_CHAR } else { ch });
            }
        }
        Self { width, height, chars }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn char_at(&self, row: usize, column: usize) -> char {
        self.chars
            .get(row * self.width + column)
            .copied()
            .unwrap_or(TRANSPARENT_CHAR)
    }
}

/// How the stretchable band `[start, end_inclusive]` of a pattern fills extra space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RepeatableRange {
    /// `01` becomes `00001111`.
    Scale { start: usize, end_inclusive: usize },
    /// `01` becomes `01010101`.
    Repeat { start: usize, end_inclusive: usize },
}

impl RepeatableRange {
    pub fn scale(start: usize, end_inclusive: usize) -> Self {
        let (start, end_inclusive) = normalize(start, end_inclusive);
        Self::Scale { start, end_inclusive }
    }

    pub fn repeat(start: usize, end_inclusive: usize) -> Self {
        let (start, end_inclusive) = normalize(start, end_inclusive);
        Self::Repeat { start, end_inclusive }
    }

    fn bounds(self) -> (usize, usize) {
        match self {
            Self::Scale { start, end_inclusive } | Self::Repeat { start, end_inclusive } => {
                (start, end_inclusive)
            }
        }
    }

    /// Maps each of `size` output positions to a pattern index in `[0, pattern_size)`.
    ///
    /// The head before the band and the tail after it keep their pattern width; only the band
    /// stretches.
    pub fn to_indexes(self, size: usize, pattern_size: usize) -> Vec<usize> {
        if pattern_size == 0 {
            return vec![0; size];
        }
        let (start, end) = self.bounds();
        let (start, end) = normalize(start, end);
        let end = end.min(pattern_size - 1);
        let start = start.min(end);
        let range_size = end - start + 1;
        let tail = pattern_size - end;
        let repeat_left = start as i64;
        let repeat_right = size as i64 - tail as i64;

        (0..size as i64)
            .map(|index| {
                if index < repeat_left {
                    index as usize
                } else if index > repeat_right {
                    (end as i64 + index - repeat_right) as usize
                } else {
                    let offset = index - repeat_left;
                    match self {
                        Self::Scale { .. } => {
                            let repeating_size = repeat_right - repeat_left + 1;
                            (repeat_left + offset * range_size as i64 / repeating_size) as usize
                        }
                        Self::Repeat { .. } => (repeat_left + offset % range_size as i64) as usize,
                    }
                }
            })
            .map(|index| index.min(pattern_size - 1))
            .collect()
    }
}

fn normalize(start: usize, end_inclusive: usize) -> (usize, usize) {
    (start.min(end_inclusive), start.max(end_inclusive))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NinePatchDrawable {
    pattern: NinePatchPattern,
    horizontal: RepeatableRange,
    vertical: RepeatableRange,
}

impl NinePatchDrawable {
    /// Scales the whole pattern along both axes.
    pub fn new(pattern: NinePatchPattern) -> Self {
        let horizontal = RepeatableRange::scale(0, pattern.width.saturating_sub(1));
        let vertical = RepeatableRange::scale(0, pattern.height.saturating_sub(1));
        Self::with_ranges(pattern, horizontal, vertical)
    }

    pub fn with_ranges(
        pattern: NinePatchPattern,
        horizontal: RepeatableRange,
        vertical: RepeatableRange,
    ) -> Self {
        Self { pattern, horizontal, vertical }
    }
}

impl Drawable for NinePatchDrawable {
    fn to_bitmap(&self, width: i32, height: i32) -> MonoBitmap {
        let mut builder = MonoBitmapBuilder::new(width, height);
        if self.pattern.width == 0 || self.pattern.height == 0 {
            return builder.build();
        }
        let width = usize::try_from(width).unwrap_or(0);
        let height = usize::try_from(height).unwrap_or(0);
        let rows = self.vertical.to_indexes(height, self.pattern.height);
        let columns = self.horizontal.to_indexes(width, self.pattern.width);

        for (row, &pattern_row) in rows.iter().enumerate() {
            for (column, &pattern_column) in columns.iter().enumerate() {
                let ch = self.pattern.char_at(pattern_row, pattern_column);
                builder.put(row as i32, column as i32, ch, ch);
            }
        }
        builder.build()
    }
}
