// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stroke, anchor, and fill styles plus the per-shape style extras.
//!
//! Predefined styles live in a [`StyleTable`] that callers construct once (optionally extended
//! from configuration) and pass around explicitly.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::bitmap::drawable::{CharDrawable, Drawable};
use crate::chars::{HALF_TRANSPARENT_CHAR, TRANSPARENT_CHAR};

/// Glyphs for one weight class of straight strokes.
///
/// Corner names follow the turn a path takes through the corner cell: `down_left` is `┐`
/// (arms left and down), `up_right` is `┌`, `up_left` is `┘`, `down_right` is `└`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StraightStrokeStyle {
    pub id: SmolStr,
    #[serde(default)]
    pub display_name: SmolStr,
    pub horizontal: char,
    pub vertical: char,
    pub down_left: char,
    pub up_right: char,
    pub up_left: char,
    pub down_right: char,
}

impl StraightStrokeStyle {
    /// Invisible stroke that keeps a shape selectable.
    pub const NO_STROKE: Self = Self::uniform("S0", "No Stroke", HALF_TRANSPARENT_CHAR);
    pub const SINGLE: Self = Self::new("S1", "─", ['─', '│', '┐', '┌', '┘', '└']);
    pub const BOLD: Self = Self::new("S2", "━", ['━', '┃', '┓', '┏', '┛', '┗']);
    pub const DOUBLE: Self = Self::new("S3", "═", ['═', '║', '╗', '╔', '╝', '╚']);
    pub const ROUNDED: Self = Self::new("S4", "▢", ['─', '│', '╮', '╭', '╯', '╰']);

    /// Glyphs in `[horizontal, vertical, down_left, up_right, up_left, down_right]` order.
    pub const fn new(id: &str, display_name: &str, glyphs: [char; 6]) -> Self {
        Self {
            id: SmolStr::new_inline(id),
            display_name: SmolStr::new_inline(display_name),
            horizontal: glyphs[0],
            vertical: glyphs[1],
            down_left: glyphs[2],
            up_right: glyphs[3],
            up_left: glyphs[4],
            down_right: glyphs[5],
        }
    }

    const fn uniform(id: &str, display_name: &str, ch: char) -> Self {
        Self::new(id, display_name, [ch; 6])
    }
}

/// Glyphs drawn on a line endpoint, picked by the side the line leaves from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorChar {
    pub id: SmolStr,
    #[serde(default)]
    pub display_name: SmolStr,
    pub left: char,
    pub right: char,
    pub top: char,
    pub bottom: char,
}

impl AnchorChar {
    pub const fn new(
        id: &str,
        display_name: &str,
        left: char,
        right: char,
        top: char,
        bottom: char,
    ) -> Self {
        Self {
            id: SmolStr::new_inline(id),
            display_name: SmolStr::new_inline(display_name),
            left,
            right,
            top,
            bottom,
        }
    }

    pub const fn from_single(id: &str, display_name: &str, ch: char) -> Self {
        Self::new(id, display_name, ch, ch, ch, ch)
    }
}

const PREDEFINED_ANCHORS: [AnchorChar; 14] = [
    AnchorChar::new("A1", "▶", '◀', '▶', '▲', '▼'),
    AnchorChar::new("A12", "▷", '◁', '▷', '△', '▽'),
    AnchorChar::new("A13", "►", '◄', '►', '▲', '▼'),
    AnchorChar::new("A14", "▻", '◅', '▻', '△', '▽'),
    AnchorChar::from_single("A2", "■", '■'),
    AnchorChar::from_single("A21", "□", '□'),
    AnchorChar::from_single("A220", "◆", '◆'),
    AnchorChar::from_single("A221", "◇", '◇'),
    AnchorChar::from_single("A3", "○", '○'),
    AnchorChar::from_single("A4", "◎", '◎'),
    AnchorChar::from_single("A5", "●", '●'),
    AnchorChar::new("A6", "├", '├', '┤', '┬', '┴'),
    AnchorChar::new("A61", "┣", '┣', '┫', '┳', '┻'),
    AnchorChar::new("A62", "╠", '╠', '╣', '╦', '╩'),
];

#[derive(Debug, Clone)]
pub struct RectangleFillStyle {
    pub id: SmolStr,
    pub display_name: SmolStr,
    pub drawable: Arc<dyn Drawable>,
}

impl RectangleFillStyle {
    pub fn new(
        id: impl Into<SmolStr>,
        display_name: impl Into<SmolStr>,
        drawable: Arc<dyn Drawable>,
    ) -> Self {
        Self { id: id.into(), display_name: display_name.into(), drawable }
    }

    fn char_fill(id: &str, ch: char) -> Self {
        let display_name = if ch == ' ' { crate::chars::NBSP } else { ch };
        Self::new(id, display_name.to_string(), Arc::new(CharDrawable(ch)))
    }
}

impl PartialEq for RectangleFillStyle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Dash pattern of a straight stroke: `dash` visible cells, then `gap` blank cells, shifted by
/// `offset`.
///
/// Values are stored as given; `dash < 1` acts as 1 and `gap < 0` as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StraightStrokeDashPattern {
    pub dash: i32,
    pub gap: i32,
    pub offset: i32,
}

impl StraightStrokeDashPattern {
    pub const SOLID: Self = Self::new(1, 0, 0);

    pub const fn new(dash: i32, gap: i32, offset: i32) -> Self {
        Self { dash, gap, offset }
    }

    /// True if the `index`-th cell along a stroke is blank.
    pub fn is_gap(&self, index: usize) -> bool {
        let segment = i64::from(self.dash.max(1));
        let gap = i64::from(self.gap.max(0));
        if gap == 0 {
            return false;
        }
        let total = segment + gap;
        let offset = i64::from(self.offset).rem_euclid(total);
        (index as i64 + offset) % total >= segment
    }
}

impl Default for StraightStrokeDashPattern {
    fn default() -> Self {
        Self::SOLID
    }
}

impl fmt::Display for StraightStrokeDashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.dash, self.gap, self.offset)
    }
}

impl FromStr for StraightStrokeDashPattern {
    type Err = std::convert::Infallible;

    /// Parses `dash|gap|offset`; missing or malformed fields fall back to `1|0|0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split('|').map(|field| field.trim().parse::<i32>().ok());
        let dash = fields.next().flatten().filter(|v| *v != 0).unwrap_or(1);
        let gap = fields.next().flatten().unwrap_or(0);
        let offset = fields.next().flatten().unwrap_or(0);
        Ok(Self::new(dash, gap, offset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextHorizontalAlign {
    Left,
    #[default]
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextVerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextAlign {
    pub horizontal: TextHorizontalAlign,
    pub vertical: TextVerticalAlign,
}

impl TextAlign {
    pub const fn new(horizontal: TextHorizontalAlign, vertical: TextVerticalAlign) -> Self {
        Self { horizontal, vertical }
    }
}

/// Immutable lookup of stroke, anchor, and fill styles by id.
#[derive(Debug, Clone)]
pub struct StyleTable {
    strokes: HashMap<SmolStr, StraightStrokeStyle>,
    rounded: HashMap<SmolStr, SmolStr>,
    anchors: HashMap<SmolStr, AnchorChar>,
    fills: HashMap<SmolStr, RectangleFillStyle>,
}

impl StyleTable {
    pub fn predefined() -> Self {
        let strokes = [
            StraightStrokeStyle::NO_STROKE,
            StraightStrokeStyle::SINGLE,
            StraightStrokeStyle::BOLD,
            StraightStrokeStyle::DOUBLE,
            StraightStrokeStyle::ROUNDED,
        ]
        .into_iter()
        .map(|style| (style.id.clone(), style))
        .collect();

        let rounded = HashMap::from([(
            StraightStrokeStyle::SINGLE.id,
            StraightStrokeStyle::ROUNDED.id,
        )]);

        let anchors = PREDEFINED_ANCHORS
            .into_iter()
            .map(|anchor| (anchor.id.clone(), anchor))
            .collect();

        let fills = [
            RectangleFillStyle::char_fill("F0", TRANSPARENT_CHAR),
            RectangleFillStyle::char_fill("F1", ' '),
            RectangleFillStyle::char_fill("F2", '█'),
            RectangleFillStyle::char_fill("F3", '▒'),
            RectangleFillStyle::char_fill("F4", '░'),
            RectangleFillStyle::char_fill("F5", '▚'),
        ]
        .into_iter()
        .map(|fill| (fill.id.clone(), fill))
        .collect();

        Self { strokes, rounded, anchors, fills }
    }

    pub fn with_stroke(mut self, style: StraightStrokeStyle) -> Self {
        self.strokes.insert(style.id.clone(), style);
        self
    }

    pub fn with_rounded(mut self, id: SmolStr, rounded_id: SmolStr) -> Self {
        self.rounded.insert(id, rounded_id);
        self
    }

    pub fn with_anchor(mut self, anchor: AnchorChar) -> Self {
        self.anchors.insert(anchor.id.clone(), anchor);
        self
    }

    pub fn with_fill(mut self, fill: RectangleFillStyle) -> Self {
        self.fills.insert(fill.id.clone(), fill);
        self
    }

    /// Stroke style `id`, swapped for its rounded-corner variant when `rounded` and one exists.
    pub fn stroke(&self, id: &str, rounded: bool) -> Option<&StraightStrokeStyle> {
        let id = if rounded {
            self.rounded.get(id).map_or(id, SmolStr::as_str)
        } else {
            id
        };
        self.strokes.get(id)
    }

    pub fn has_stroke(&self, id: &str) -> bool {
        self.strokes.contains_key(id)
    }

    pub fn is_corner_roundable(&self, id: &str) -> bool {
        self.rounded.contains_key(id)
    }

    pub fn anchor(&self, id: &str) -> Option<&AnchorChar> {
        self.anchors.get(id)
    }

    pub fn fill(&self, id: &str) -> Option<&RectangleFillStyle> {
        self.fills.get(id)
    }

    /// Like [`StyleTable::stroke`] but falls back to the single-line style.
    pub fn stroke_or_default(&self, id: &str, rounded: bool) -> StraightStrokeStyle {
        self.stroke(id, rounded).cloned().unwrap_or_else(|| {
            tracing::warn!(id, "unknown stroke style; using S1");
            StraightStrokeStyle::SINGLE
        })
    }

    /// Like [`StyleTable::anchor`] but falls back to `A1`.
    pub fn anchor_or_default(&self, id: &str) -> AnchorChar {
        self.anchor(id).cloned().unwrap_or_else(|| {
            tracing::warn!(id, "unknown anchor char; using A1");
            PREDEFINED_ANCHORS[0].clone()
        })
    }

    /// Like [`StyleTable::fill`] but falls back to `F1`.
    pub fn fill_or_default(&self, id: &str) -> RectangleFillStyle {
        match self.fill(id) {
            Some(fill) => fill.clone(),
            None => {
                tracing::warn!(id, "unknown fill style; using F1");
                RectangleFillStyle::char_fill("F1", ' ')
            }
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::predefined()
    }
}

/// Resolved styling of a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleExtra {
    pub fill: Option<RectangleFillStyle>,
    pub stroke: Option<StraightStrokeStyle>,
    pub dash_pattern: StraightStrokeDashPattern,
}

impl RectangleExtra {
    pub fn borderless() -> Self {
        Self { fill: None, stroke: None, dash_pattern: StraightStrokeDashPattern::SOLID }
    }
}

impl Default for RectangleExtra {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: Some(StraightStrokeStyle::SINGLE),
            dash_pattern: StraightStrokeDashPattern::SOLID,
        }
    }
}

/// Resolved styling of a line. A missing stroke renders invisibly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineExtra {
    pub stroke: Option<StraightStrokeStyle>,
    pub start_anchor: Option<AnchorChar>,
    pub end_anchor: Option<AnchorChar>,
    pub dash_pattern: StraightStrokeDashPattern,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextExtra {
    pub bound: RectangleExtra,
    pub align: TextAlign,
}

impl TextExtra {
    /// Plain text: no fill, no border, anchored top-left.
    pub fn no_bound() -> Self {
        Self {
            bound: RectangleExtra::borderless(),
            align: TextAlign::new(TextHorizontalAlign::Left, TextVerticalAlign::Top),
        }
    }

    pub fn has_border(&self) -> bool {
        self.bound.stroke.is_some()
    }
}
