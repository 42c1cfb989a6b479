// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! glyphgrid: a tiled character-grid engine for box-drawing diagrams.
//!
//! Shapes ([`shape`]) render to immutable glyph bitmaps ([`bitmap`]) which are composited onto
//! an unbounded, lazily tiled board ([`board`]). Where strokes meet, the board merges them into
//! the matching junction glyph ([`crossing`]).

pub mod bitmap;
pub mod board;
pub mod chars;
pub mod config;
pub mod crossing;
pub mod error;
pub mod geo;
pub mod shape;

pub use bitmap::manager::BitmapManager;
pub use bitmap::MonoBitmap;
pub use board::{Highlight, MonoBoard};
pub use config::EngineConfig;
pub use error::{ConfigError, RenderError};
pub use shape::Shape;
