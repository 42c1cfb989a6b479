// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Glyph crossing resolution.
//!
//! Every recognised box-drawing glyph maps to a 12-bit [`DirectionMask`]: four arms (left, right,
//! top, bottom) in each of three weight classes (single, bold, double). Two glyphs drawn into the
//! same cell are merged by OR-ing their masks, dropping arms of the lower glyph that the upper one
//! already claims, and keeping only arms that some neighbouring cell continues.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Arms of a glyph, four bits per weight class: bits 0-3 single, 4-7 bold, 8-11 double.
///
/// Within a class the bits are `LEFT = 1`, `RIGHT = 2`, `TOP = 4`, `BOTTOM = 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionMask(u16);

impl DirectionMask {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(0b0001);
    pub const RIGHT: Self = Self(0b0010);
    pub const TOP: Self = Self(0b0100);
    pub const BOTTOM: Self = Self(0b1000);
    pub const CROSS: Self = Self(0x0FFF);

    const DIRECTIONS: u16 = 0b1111;

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::CROSS.0)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if any weight class carries one of `directions`' arms.
    pub fn has_any(self, directions: Self) -> bool {
        self.spread().0 & directions.spread().0 != 0
    }

    /// Collapses the weight classes into a single four-bit direction set.
    pub fn directions(self) -> u16 {
        (self.0 | (self.0 >> 4) | (self.0 >> 8)) & Self::DIRECTIONS
    }

    /// Repeats the arms of every weight class into all three classes.
    pub fn spread(self) -> Self {
        let dirs = self.directions();
        Self(dirs | (dirs << 4) | (dirs << 8))
    }

    /// Mask of everything `self` does not claim in any weight class.
    pub fn exclude(self) -> Self {
        Self(!self.spread().0 & Self::CROSS.0)
    }
}

// Per-side weight codes for the glyph table: 0 none, 1 single, 2 bold, 3 double.
const fn arms(left: u16, right: u16, top: u16, bottom: u16) -> u16 {
    const fn side(weight: u16, bit: u16) -> u16 {
        if weight == 0 {
            0
        } else {
            bit << ((weight - 1) * 4)
        }
    }
    side(left, 0b0001) | side(right, 0b0010) | side(top, 0b0100) | side(bottom, 0b1000)
}

#[rustfmt::skip]
const GLYPHS: &[(char, u16)] = &[
    // Uniform weight.
    ('─', arms(1, 1, 0, 0)), ('━', arms(2, 2, 0, 0)), ('═', arms(3, 3, 0, 0)),
    ('│', arms(0, 0, 1, 1)), ('┃', arms(0, 0, 2, 2)), ('║', arms(0, 0, 3, 3)),
    ('┐', arms(1, 0, 0, 1)), ('┓', arms(2, 0, 0, 2)), ('╗', arms(3, 0, 0, 3)),
    ('┌', arms(0, 1, 0, 1)), ('┏', arms(0, 2, 0, 2)), ('╔', arms(0, 3, 0, 3)),
    ('┘', arms(1, 0, 1, 0)), ('┛', arms(2, 0, 2, 0)), ('╝', arms(3, 0, 3, 0)),
    ('└', arms(0, 1, 1, 0)), ('┗', arms(0, 2, 2, 0)), ('╚', arms(0, 3, 3, 0)),
    ('┬', arms(1, 1, 0, 1)), ('┳', arms(2, 2, 0, 2)), ('╦', arms(3, 3, 0, 3)),
    ('┴', arms(1, 1, 1, 0)), ('┻', arms(2, 2, 2, 0)), ('╩', arms(3, 3, 3, 0)),
    ('├', arms(0, 1, 1, 1)), ('┣', arms(0, 2, 2, 2)), ('╠', arms(0, 3, 3, 3)),
    ('┤', arms(1, 0, 1, 1)), ('┫', arms(2, 0, 2, 2)), ('╣', arms(3, 0, 3, 3)),
    ('┼', arms(1, 1, 1, 1)), ('╋', arms(2, 2, 2, 2)), ('╬', arms(3, 3, 3, 3)),
    // Single and bold.
    ('╼', arms(1, 2, 0, 0)), ('╾', arms(2, 1, 0, 0)),
    ('╽', arms(0, 0, 1, 2)), ('╿', arms(0, 0, 2, 1)),
    ('┍', arms(0, 2, 0, 1)), ('┎', arms(0, 1, 0, 2)),
    ('┑', arms(2, 0, 0, 1)), ('┒', arms(1, 0, 0, 2)),
    ('┕', arms(0, 2, 1, 0)), ('┖', arms(0, 1, 2, 0)),
    ('┙', arms(2, 0, 1, 0)), ('┚', arms(1, 0, 2, 0)),
    ('┝', arms(0, 2, 1, 1)), ('┞', arms(0, 1, 2, 1)), ('┟', arms(0, 1, 1, 2)),
    ('┠', arms(0, 1, 2, 2)), ('┡', arms(0, 2, 2, 1)), ('┢', arms(0, 2, 1, 2)),
    ('┥', arms(2, 0, 1, 1)), ('┦', arms(1, 0, 2, 1)), ('┧', arms(1, 0, 1, 2)),
    ('┨', arms(1, 0, 2, 2)), ('┩', arms(2, 0, 2, 1)), ('┪', arms(2, 0, 1, 2)),
    ('┭', arms(2, 1, 0, 1)), ('┮', arms(1, 2, 0, 1)), ('┯', arms(2, 2, 0, 1)),
    ('┰', arms(1, 1, 0, 2)), ('┱', arms(2, 1, 0, 2)), ('┲', arms(1, 2, 0, 2)),
    ('┵', arms(2, 1, 1, 0)), ('┶', arms(1, 2, 1, 0)), ('┷', arms(2, 2, 1, 0)),
    ('┸', arms(1, 1, 2, 0)), ('┹', arms(2, 1, 2, 0)), ('┺', arms(1, 2, 2, 0)),
    ('┽', arms(2, 1, 1, 1)), ('┾', arms(1, 2, 1, 1)), ('┿', arms(2, 2, 1, 1)),
    ('╀', arms(1, 1, 2, 1)), ('╁', arms(1, 1, 1, 2)), ('╂', arms(1, 1, 2, 2)),
    ('╃', arms(2, 1, 2, 1)), ('╄', arms(1, 2, 2, 1)), ('╅', arms(2, 1, 1, 2)),
    ('╆', arms(1, 2, 1, 2)), ('╇', arms(2, 2, 2, 1)), ('╈', arms(2, 2, 1, 2)),
    ('╉', arms(2, 1, 2, 2)), ('╊', arms(1, 2, 2, 2)),
    // Single and double.
    ('╒', arms(0, 3, 0, 1)), ('╓', arms(0, 1, 0, 3)),
    ('╕', arms(3, 0, 0, 1)), ('╖', arms(1, 0, 0, 3)),
    ('╘', arms(0, 3, 1, 0)), ('╙', arms(0, 1, 3, 0)),
    ('╛', arms(3, 0, 1, 0)), ('╜', arms(1, 0, 3, 0)),
    ('╞', arms(0, 3, 1, 1)), ('╟', arms(0, 1, 3, 3)),
    ('╡', arms(3, 0, 1, 1)), ('╢', arms(1, 0, 3, 3)),
    ('╤', arms(3, 3, 0, 1)), ('╥', arms(1, 1, 0, 3)),
    ('╧', arms(3, 3, 1, 0)), ('╨', arms(1, 1, 3, 0)),
    ('╪', arms(3, 3, 1, 1)), ('╫', arms(1, 1, 3, 3)),
];

struct Registry {
    char_to_mask: HashMap<char, DirectionMask>,
    mask_to_char: HashMap<DirectionMask, char>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut char_to_mask = HashMap::with_capacity(GLYPHS.len());
        let mut mask_to_char = HashMap::with_capacity(GLYPHS.len());
        for &(ch, bits) in GLYPHS {
            let mask = DirectionMask(bits);
            char_to_mask.insert(ch, mask);
            mask_to_char.entry(mask).or_insert(ch);
        }
        Registry { char_to_mask, mask_to_char }
    })
}

/// Maps legacy ASCII and rounded corners onto their canonical box-drawing glyphs.
pub fn standardize(ch: char) -> char {
    match ch {
        '-' => '─',
        '|' => '│',
        '+' => '┼',
        '╮' => '┐',
        '╭' => '┌',
        '╯' => '┘',
        '╰' => '└',
        other => other,
    }
}

/// Mask of `ch` after standardisation; [`DirectionMask::NONE`] for anything unrecognised.
pub fn char_mask(ch: char) -> DirectionMask {
    registry().char_to_mask.get(&standardize(ch)).copied().unwrap_or(DirectionMask::NONE)
}

pub fn mask_char(mask: DirectionMask) -> Option<char> {
    registry().mask_to_char.get(&mask).copied()
}

/// Exact (non-standardised) membership in the glyph registry.
///
/// Board compositing uses this stricter form so ASCII text such as `-` or `+` never turns into
/// a crossing.
pub fn is_connectable_char(ch: char) -> bool {
    registry().char_to_mask.contains_key(&ch)
}

/// `ch` sits left of a cell and reaches into it (it has a right arm).
pub fn has_left(ch: char) -> bool {
    char_mask(ch).has_any(DirectionMask::RIGHT)
}

/// `ch` sits right of a cell and reaches into it.
pub fn has_right(ch: char) -> bool {
    char_mask(ch).has_any(DirectionMask::LEFT)
}

/// `ch` sits above a cell and reaches into it.
pub fn has_top(ch: char) -> bool {
    char_mask(ch).has_any(DirectionMask::BOTTOM)
}

/// `ch` sits below a cell and reaches into it.
pub fn has_bottom(ch: char) -> bool {
    char_mask(ch).has_any(DirectionMask::TOP)
}

/// The four axis-adjacent glyphs around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub left: char,
    pub right: char,
    pub top: char,
    pub bottom: char,
}

impl Neighbors {
    pub const fn new(left: char, right: char, top: char, bottom: char) -> Self {
        Self { left, right, top, bottom }
    }

    /// Arms of the centre cell that some neighbour continues, spread over every weight class.
    pub fn live_mask(&self) -> DirectionMask {
        let mut live = DirectionMask::NONE;
        if has_left(self.left) {
            live = live.union(DirectionMask::LEFT);
        }
        if has_right(self.right) {
            live = live.union(DirectionMask::RIGHT);
        }
        if has_top(self.top) {
            live = live.union(DirectionMask::TOP);
        }
        if has_bottom(self.bottom) {
            live = live.union(DirectionMask::BOTTOM);
        }
        live.spread()
    }
}

/// Resolves the glyph for a cell where `upper` is drawn over an existing `lower`.
///
/// Returns `None` when the merged arm set has no canonical glyph; callers then keep `upper`.
pub fn crossing_char(
    upper: char,
    upper_neighbors: Neighbors,
    lower: char,
    lower_neighbors: Neighbors,
) -> Option<char> {
    let mask_upper = char_mask(upper).intersect(DirectionMask::CROSS);
    let mask_lower = char_mask(lower).intersect(mask_upper.exclude());
    let outer = upper_neighbors.live_mask().union(lower_neighbors.live_mask());
    let result = mask_upper.union(mask_lower).intersect(outer);
    mask_char(result)
}
