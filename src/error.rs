// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Errors surfaced at the crate boundary.
//!
//! Rendering itself clamps or ignores bad input. Only a shape kind without a bitmap factory and
//! unusable configuration are reported.

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

use crate::board::MonoBoard;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A shape kind reached bitmap dispatch without a factory.
    #[error("no bitmap factory for shape kind `{kind}`")]
    UnsupportedShape { kind: SmolStr },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "tile size must be 1 to {max} cells per side, got {width}x{height}",
        max = MonoBoard::MAX_TILE_EDGE
    )]
    InvalidTileSize { width: i32, height: i32 },

    #[error("unknown {kind} style `{id}`")]
    UnknownStyle { kind: &'static str, id: SmolStr },
}
