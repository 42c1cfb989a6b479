// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine configuration loaded from JSON.
//!
//! Every field is optional. A missing file section falls back to the built-in defaults: 16x16
//! tiles, no window, and the predefined style table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::bitmap::drawable::{
    CharDrawable, Drawable, NinePatchDrawable, NinePatchPattern, RepeatableRange,
};
use crate::board::MonoBoard;
use crate::error::ConfigError;
use crate::geo::{Rect, Size};
use crate::shape::style::{AnchorChar, RectangleFillStyle, StraightStrokeStyle, StyleTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tile_size: Size,
    pub window: Option<Rect>,
    pub styles: StyleTableConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tile_size: MonoBoard::STANDARD_TILE_SIZE,
            window: None,
            styles: StyleTableConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&input)
    }

    /// Rejects tile sizes outside `1..=MonoBoard::MAX_TILE_EDGE` on either side.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edge_ok = |value: i32| (1..=MonoBoard::MAX_TILE_EDGE).contains(&value);
        if !edge_ok(self.tile_size.width) || !edge_ok(self.tile_size.height) {
            return Err(ConfigError::InvalidTileSize {
                width: self.tile_size.width,
                height: self.tile_size.height,
            });
        }
        Ok(())
    }

    /// The predefined styles extended with the configured ones.
    ///
    /// Configured styles replace predefined ones with the same id. Every rounded-corner mapping
    /// must name two known strokes.
    pub fn style_table(&self) -> Result<StyleTable, ConfigError> {
        let styles = &self.styles;
        let mut table = StyleTable::predefined();
        for stroke in &styles.strokes {
            table = table.with_stroke(stroke.clone());
        }
        for anchor in &styles.anchors {
            table = table.with_anchor(anchor.clone());
        }
        for fill in &styles.fills {
            table = table.with_fill(fill.to_fill_style());
        }
        for (id, rounded_id) in &styles.rounded {
            for stroke_id in [id, rounded_id] {
                if !table.has_stroke(stroke_id) {
                    return Err(ConfigError::UnknownStyle { kind: "stroke", id: stroke_id.clone() });
                }
            }
            table = table.with_rounded(id.clone(), rounded_id.clone());
        }
        Ok(table)
    }
}

/// Extra styles merged over the predefined table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTableConfig {
    pub strokes: Vec<StraightStrokeStyle>,
    /// Stroke id to the id of its rounded-corner variant.
    pub rounded: BTreeMap<SmolStr, SmolStr>,
    pub anchors: Vec<AnchorChar>,
    pub fills: Vec<FillConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    pub id: SmolStr,
    #[serde(default)]
    pub display_name: Option<SmolStr>,
    pub drawable: DrawableConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawableConfig {
    Char(char),
    NinePatch(NinePatchConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NinePatchConfig {
    /// Pattern rows separated by `delimiter`.
    pub pattern: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_transparent")]
    pub transparent: char,
    #[serde(default)]
    pub horizontal: Option<RepeatableRange>,
    #[serde(default)]
    pub vertical: Option<RepeatableRange>,
}

fn default_delimiter() -> char {
    '\n'
}

fn default_transparent() -> char {
    '\u{0}'
}

impl FillConfig {
    fn to_fill_style(&self) -> RectangleFillStyle {
        let drawable: Arc<dyn Drawable> = match &self.drawable {
            DrawableConfig::Char(ch) => Arc::new(CharDrawable(*ch)),
            DrawableConfig::NinePatch(config) => {
                let pattern = NinePatchPattern::from_text(
                    &config.pattern,
                    config.delimiter,
                    config.transparent,
                );
                let last_column = pattern.width().saturating_sub(1);
                let last_row = pattern.height().saturating_sub(1);
                let horizontal =
                    config.horizontal.unwrap_or_else(|| RepeatableRange::scale(0, last_column));
                let vertical =
                    config.vertical.unwrap_or_else(|| RepeatableRange::scale(0, last_row));
                Arc::new(NinePatchDrawable::with_ranges(pattern, horizontal, vertical))
            }
        };
        let display_name = self.display_name.clone().unwrap_or_else(|| self.id.clone());
        RectangleFillStyle::new(self.id.clone(), display_name, drawable)
    }
}
