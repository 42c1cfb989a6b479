// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure shape-to-bitmap conversions.
//!
//! Every factory is a function of geometry and resolved style only, so results can be cached by
//! shape version upstream.

mod line;
mod rectangle;
mod text;

pub use line::line_bitmap;
pub use rectangle::rectangle_bitmap;
pub use text::text_bitmap;
