// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::bitmap::factory::{line_bitmap, rectangle_bitmap, text_bitmap};
use crate::bitmap::MonoBitmap;
use crate::board::{Highlight, MonoBoard};
use crate::error::RenderError;
use crate::shape::{Shape, ShapeId};

#[derive(Debug, Clone)]
struct VersionedBitmap {
    version: u64,
    bitmap: Rc<MonoBitmap>,
}

/// Per-shape bitmap cache keyed by shape id and validated by shape version.
#[derive(Debug, Default)]
pub struct BitmapManager {
    cache: HashMap<ShapeId, VersionedBitmap>,
}

impl BitmapManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bitmap for `shape`, rebuilt only when its version moved.
    ///
    /// Groups render nothing themselves and yield `None`.
    pub fn bitmap(&mut self, shape: &Shape) -> Result<Option<Rc<MonoBitmap>>, RenderError> {
        if let Some(cached) = self.cache.get(shape.id()) {
            if cached.version == shape.version() {
                debug!(id = %shape.id(), version = cached.version, "bitmap cache hit");
                return Ok(Some(Rc::clone(&cached.bitmap)));
            }
        }

        let Some(bitmap) = build_bitmap(shape)? else {
            return Ok(None);
        };
        debug!(
            id = %shape.id(),
            version = shape.version(),
            kind = shape.kind(),
            "bitmap cache miss"
        );

        let bitmap = Rc::new(bitmap);
        self.cache.insert(
            shape.id().clone(),
            VersionedBitmap { version: shape.version(), bitmap: Rc::clone(&bitmap) },
        );
        Ok(Some(bitmap))
    }

    /// Composites `shape` onto `board` at its bound, descending into groups in child order.
    pub fn draw(
        &mut self,
        board: &mut MonoBoard,
        shape: &Shape,
        highlight: Highlight,
    ) -> Result<(), RenderError> {
        if let Shape::Group(group) = shape {
            for child in group.children() {
                self.draw(board, child, highlight)?;
            }
            return Ok(());
        }
        if let Some(bitmap) = self.bitmap(shape)? {
            board.fill(shape.bound().position, &bitmap, highlight);
        }
        Ok(())
    }

    pub fn invalidate(&mut self, id: &ShapeId) {
        self.cache.remove(id);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn build_bitmap(shape: &Shape) -> Result<Option<MonoBitmap>, RenderError> {
    let bitmap = match shape {
        Shape::Rectangle(rect) => rectangle_bitmap(rect.bound().size, rect.extra()),
        Shape::Text(text) => text_bitmap(
            text.bound().size,
            text.renderable_text().lines(),
            text.extra(),
            text.is_editing(),
        ),
        Shape::Line(line) => line_bitmap(&line.reduced_joint_points(), line.extra()),
        Shape::Group(_) => return Ok(None),
        Shape::Unsupported(unsupported) => {
            return Err(RenderError::UnsupportedShape { kind: unsupported.kind.clone() });
        }
    };
    Ok(Some(bitmap))
}
