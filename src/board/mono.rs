// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::bitmap::MonoBitmap;
use crate::board::{CrossPoint, Highlight, PainterBoard, Pixel};
use crate::config::EngineConfig;
use crate::crossing::{crossing_char, Neighbors};
use crate::error::ConfigError;
use crate::geo::{Point, Rect, Size};

/// Tile coordinates: `column = floor(left / tile_width)`, `row = floor(top / tile_height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardAddress {
    pub row: i32,
    pub column: i32,
}

/// An unbounded board made of lazily created, tile-aligned [`PainterBoard`]s.
///
/// With a window set, tiles that do not overlap it are never materialised and writes landing
/// in them are dropped.
#[derive(Debug, Clone)]
pub struct MonoBoard {
    tile_size: Size,
    tiles: HashMap<BoardAddress, PainterBoard>,
    window: Option<Rect>,
}

impl MonoBoard {
    pub const STANDARD_TILE_SIZE: Size = Size::new(16, 16);
    /// Largest tile edge; a full tile's cell count must fit an `i32`.
    pub const MAX_TILE_EDGE: i32 = 4096;

    pub fn new() -> Self {
        Self::with_tile_size(Self::STANDARD_TILE_SIZE)
    }

    /// Each dimension is clamped to `1..=MAX_TILE_EDGE`.
    pub fn with_tile_size(tile_size: Size) -> Self {
        let edge = |value: i32| value.clamp(1, Self::MAX_TILE_EDGE);
        Self {
            tile_size: Size::new(edge(tile_size.width), edge(tile_size.height)),
            tiles: HashMap::new(),
            window: None,
        }
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut board = Self::with_tile_size(config.tile_size);
        board.window = config.window;
        Ok(board)
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn window(&self) -> Option<Rect> {
        self.window
    }

    /// Sets the window and wipes every existing tile it overlaps.
    pub fn clear_and_set_window(&mut self, window: Rect) {
        self.window = Some(window);
        let addresses = self.overlapped_addresses(window);
        let mut cleared = 0usize;
        for address in &addresses {
            if let Some(tile) = self.tiles.get_mut(address) {
                tile.clear();
                cleared += 1;
            }
        }
        debug!(%window, tiles = cleared, "board window set");
    }

    /// Composites `bitmap` with its top-left corner at `position`.
    ///
    /// Every locally decidable cell across all touched tiles is written first; the deferred
    /// crossings are then resolved in the order the tiles produced them.
    pub fn fill(&mut self, position: Point, bitmap: &MonoBitmap, highlight: Highlight) {
        if bitmap.is_empty() {
            return;
        }
        let rect = Rect::new(position, bitmap.size());
        let addresses = self.overlapped_addresses(rect);

        let mut cross_points = Vec::new();
        let mut touched = 0usize;
        for address in addresses {
            if let Some(tile) = self.tile_or_create(address) {
                cross_points.extend(tile.fill_bitmap(position, bitmap, highlight));
                touched += 1;
            }
        }

        debug!(%rect, tiles = touched, cross_points = cross_points.len(), "board fill");
        for cross_point in &cross_points {
            self.draw_cross_point(cross_point, highlight);
        }
    }

    fn draw_cross_point(&mut self, cross_point: &CrossPoint, highlight: Highlight) {
        let (left, top) = (cross_point.left(), cross_point.top());
        let lower = self.get(left, top).visual;
        let lower_neighbors = Neighbors::new(
            self.get(left - 1, top).direction,
            self.get(left + 1, top).direction,
            self.get(left, top - 1).direction,
            self.get(left, top + 1).direction,
        );
        let resolved =
            crossing_char(cross_point.visual, cross_point.neighbors, lower, lower_neighbors);
        trace!(
            left,
            top,
            upper = %cross_point.visual,
            lower = %lower,
            resolved = ?resolved,
            "cross point"
        );

        let Some(pixel) = self.pixel_mut(left, top) else {
            return;
        };
        match resolved {
            Some(ch) => pixel.set(ch, ch, highlight),
            None => pixel.set(cross_point.visual, cross_point.direction, highlight),
        }
    }

    /// Forces every cell of `rect` to `ch`.
    pub fn fill_rect(&mut self, rect: Rect, ch: char, highlight: Highlight) {
        for address in self.overlapped_addresses(rect) {
            if let Some(tile) = self.tile_or_create(address) {
                tile.fill_rect(rect, ch, highlight);
            }
        }
    }

    /// Forces the cell at `point` to `ch`.
    pub fn set(&mut self, point: Point, ch: char, highlight: Highlight) {
        let address = self.to_board_address(point.left, point.top);
        if let Some(tile) = self.tile_or_create(address) {
            tile.set(point, ch, highlight);
        }
    }

    /// The pixel at `(left, top)`; transparent where no tile exists.
    pub fn get(&self, left: i32, top: i32) -> Pixel {
        let address = self.to_board_address(left, top);
        self.tiles
            .get(&address)
            .and_then(|tile| tile.get(left, top))
            .unwrap_or(Pixel::TRANSPARENT)
    }

    /// Resets every cell of `rect` in existing tiles.
    pub fn clear(&mut self, rect: Rect) {
        for address in self.overlapped_addresses(rect) {
            if let Some(tile) = self.tiles.get_mut(&address) {
                tile.clear_rect(rect);
            }
        }
    }

    /// Renders the cells of `bound`, leaving cells without a tile blank.
    pub fn to_string_in_bound(&self, bound: Rect) -> String {
        let mut canvas = PainterBoard::new(bound);
        for tile in self.tiles.values() {
            canvas.fill(tile);
        }
        canvas.to_string()
    }

    fn pixel_mut(&mut self, left: i32, top: i32) -> Option<&mut Pixel> {
        let address = self.to_board_address(left, top);
        self.tiles.get_mut(&address)?.pixel_mut(left, top)
    }

    fn tile_or_create(&mut self, address: BoardAddress) -> Option<&mut PainterBoard> {
        let bound = self.tile_bound(address);
        if self.window.is_some_and(|window| !window.is_overlapped(&bound)) {
            return None;
        }
        Some(self.tiles.entry(address).or_insert_with(|| PainterBoard::new(bound)))
    }

    fn tile_bound(&self, address: BoardAddress) -> Rect {
        Rect::by_ltwh(
            address.column * self.tile_size.width,
            address.row * self.tile_size.height,
            self.tile_size.width,
            self.tile_size.height,
        )
    }

    /// Addresses of every tile `rect` overlaps, columns outermost.
    fn overlapped_addresses(&self, rect: Rect) -> Vec<BoardAddress> {
        if rect.is_empty() {
            return Vec::new();
        }
        let first = self.to_board_address(rect.left(), rect.top());
        let last = self.to_board_address(rect.right(), rect.bottom());
        let mut addresses = Vec::new();
        for column in first.column..=last.column {
            for row in first.row..=last.row {
                addresses.push(BoardAddress { row, column });
            }
        }
        addresses
    }

    pub fn to_board_address(&self, left: i32, top: i32) -> BoardAddress {
        BoardAddress {
            row: adjust_divide(top, self.tile_size.height),
            column: adjust_divide(left, self.tile_size.width),
        }
    }
}

impl Default for MonoBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Floor division, so negative coordinates land in negative tiles.
fn adjust_divide(value: i32, denominator: i32) -> i32 {
    value.div_euclid(denominator)
}

impl fmt::Display for MonoBoard {
    /// Composes every tile over the smallest tile-aligned rectangle covering them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut addresses = self.tiles.keys();
        let Some(first) = addresses.next() else {
            return Ok(());
        };
        let (mut min, mut max) = (*first, *first);
        for address in addresses {
            min.row = min.row.min(address.row);
            min.column = min.column.min(address.column);
            max.row = max.row.max(address.row);
            max.column = max.column.max(address.column);
        }
        let bound = Rect::by_ltwh(
            min.column * self.tile_size.width,
            min.row * self.tile_size.height,
            (max.column - min.column + 1) * self.tile_size.width,
            (max.row - min.row + 1) * self.tile_size.height,
        );
        f.write_str(&self.to_string_in_bound(bound))
    }
}
