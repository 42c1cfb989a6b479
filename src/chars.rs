// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sentinel characters shared by bitmaps and boards.

/// Nothing drawn; never rendered and never overwrites.
pub const TRANSPARENT_CHAR: char = '\0';

/// Invisible but present: keeps empty shape interiors selectable.
pub const HALF_TRANSPARENT_CHAR: char = '\u{1}';

pub const NBSP: char = '\u{A0}';

pub fn is_transparent(ch: char) -> bool {
    ch == TRANSPARENT_CHAR
}

pub fn is_half_transparent(ch: char) -> bool {
    ch == HALF_TRANSPARENT_CHAR
}

/// Maps both sentinels to a space for display.
pub fn display_char(ch: char) -> char {
    if is_transparent(ch) || is_half_transparent(ch) {
        ' '
    } else {
        ch
    }
}
