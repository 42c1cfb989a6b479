// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The character surface shapes are composited onto.
//!
//! [`MonoBoard`] is an unbounded grid split into fixed-size [`PainterBoard`] tiles. Filling a
//! bitmap writes every cell it can decide locally and defers genuine glyph crossings as
//! [`CrossPoint`]s, which the board resolves once all touched tiles are up to date.

use std::fmt;

use crate::chars::{display_char, is_half_transparent, is_transparent, TRANSPARENT_CHAR};
use crate::crossing::Neighbors;

mod mono;
mod painter;

pub use mono::{BoardAddress, MonoBoard};
pub use painter::PainterBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    No,
    Selected,
    TextEditing,
}

/// One cell of a board.
///
/// `visual` is what gets displayed; `direction` is the un-gapped structural glyph consulted for
/// crossings, so a dashed stroke still connects through its gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub visual: char,
    pub direction: char,
    pub highlight: Highlight,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel {
        visual: TRANSPARENT_CHAR,
        direction: TRANSPARENT_CHAR,
        highlight: Highlight::No,
    };

    pub fn is_transparent(&self) -> bool {
        is_transparent(self.visual) || is_half_transparent(self.visual)
    }

    pub fn set(&mut self, visual: char, direction: char, highlight: Highlight) {
        self.visual = visual;
        self.direction = direction;
        self.highlight = highlight;
    }

    pub fn reset(&mut self) {
        *self = Pixel::TRANSPARENT;
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::TRANSPARENT
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        f.write_char(display_char(self.visual))
    }
}

/// A cell whose final glyph depends on neighbours that may live in another tile.
///
/// Neighbour glyphs come from the bitmap being drawn, not from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossPoint {
    pub board_row: i32,
    pub board_column: i32,
    pub visual: char,
    pub direction: char,
    pub neighbors: Neighbors,
}

impl CrossPoint {
    pub fn left(&self) -> i32 {
        self.board_column
    }

    pub fn top(&self) -> i32 {
        self.board_row
    }
}

#[cfg(test)]
mod tests;
