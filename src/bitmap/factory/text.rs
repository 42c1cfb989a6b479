// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::bitmap::factory::rectangle_bitmap;
use crate::bitmap::{MonoBitmap, MonoBitmapBuilder};
use crate::geo::Size;
use crate::shape::style::{TextExtra, TextHorizontalAlign, TextVerticalAlign};

/// Renders pre-wrapped `lines` inside a rectangle of `size`.
///
/// In editing mode the text itself is left to the editor and only the background is drawn,
/// except for a 1x1 shape, which is drawn empty.
pub fn text_bitmap(size: Size, lines: &[String], extra: &TextExtra, editing: bool) -> MonoBitmap {
    let mut builder = MonoBitmapBuilder::new(size.width, size.height);
    if !(size.width == 1 && size.height == 1 && editing) {
        builder.fill_bitmap(0, 0, &rectangle_bitmap(size, &extra.bound));
    }
    if !editing {
        fill_text(&mut builder, lines, size, extra);
    }
    builder.build()
}

fn fill_text(builder: &mut MonoBitmapBuilder, lines: &[String], size: Size, extra: &TextExtra) {
    let offset = i32::from(extra.has_border());
    let max_width = size.width - offset * 2;
    let max_height = (size.height - offset * 2).max(0);

    let line_count = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    let row0 = first_row(extra.align.vertical, offset, max_height, line_count);
    let visible = lines.len().min(max_height as usize);

    for (row_index, line) in lines.iter().take(visible).enumerate() {
        let len = i32::try_from(line.chars().count()).unwrap_or(i32::MAX);
        let col0 = first_column(extra.align.horizontal, offset, max_width, len);
        let row = row0 + row_index as i32;
        for (col_index, ch) in line.chars().enumerate() {
            if ch != ' ' {
                builder.put(row, col0 + col_index as i32, ch, ch);
            }
        }
    }
}

fn first_column(align: TextHorizontalAlign, offset: i32, max_width: i32, len: i32) -> i32 {
    match align {
        TextHorizontalAlign::Left => offset,
        TextHorizontalAlign::Middle => (max_width - len).div_euclid(2) + offset,
        TextHorizontalAlign::Right => max_width - len + offset,
    }
}

fn first_row(align: TextVerticalAlign, offset: i32, max_height: i32, line_count: i32) -> i32 {
    if align == TextVerticalAlign::Top || max_height < line_count {
        return offset;
    }
    match align {
        TextVerticalAlign::Middle => (max_height - line_count).div_euclid(2) + offset,
        TextVerticalAlign::Bottom => max_height - line_count + offset,
        TextVerticalAlign::Top => offset,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::text_bitmap;
    use crate::geo::Size;
    use crate::shape::style::{
        RectangleExtra, TextAlign, TextExtra, TextHorizontalAlign, TextVerticalAlign,
    };

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bordered_text_is_centered() {
        let bitmap = text_bitmap(
            Size::new(7, 5),
            &lines(&["01234", "5678", "abc"]),
            &TextExtra::default(),
            false,
        );
        assert_eq!(
            bitmap.to_string(),
            "┌─────┐\n│01234│\n│5678 │\n│ abc │\n└─────┘"
        );
    }

    #[rstest]
    #[case(TextHorizontalAlign::Left, TextVerticalAlign::Top, "ab   \n     \n     ")]
    #[case(TextHorizontalAlign::Middle, TextVerticalAlign::Middle, "     \n ab  \n     ")]
    #[case(TextHorizontalAlign::Right, TextVerticalAlign::Bottom, "     \n     \n   ab")]
    fn borderless_alignment(
        #[case] horizontal: TextHorizontalAlign,
        #[case] vertical: TextVerticalAlign,
        #[case] expected: &str,
    ) {
        let extra = TextExtra {
            bound: RectangleExtra::borderless(),
            align: TextAlign::new(horizontal, vertical),
        };
        let bitmap = text_bitmap(Size::new(5, 3), &lines(&["ab"]), &extra, false);
        assert_eq!(bitmap.to_string(), expected);
    }

    #[test]
    fn overflowing_lines_are_clipped_from_the_top() {
        let extra = TextExtra::no_bound();
        let bitmap = text_bitmap(Size::new(3, 2), &lines(&["aaa", "bbb", "ccc"]), &extra, false);
        assert_eq!(bitmap.to_string(), "aaa\nbbb");
    }

    #[test]
    fn editing_draws_only_the_background() {
        let bitmap =
            text_bitmap(Size::new(4, 3), &lines(&["xy"]), &TextExtra::default(), true);
        assert_eq!(bitmap.to_string(), "┌──┐\n│  │\n└──┘");

        let single = text_bitmap(Size::new(1, 1), &lines(&["x"]), &TextExtra::default(), true);
        assert_eq!(single.to_string(), " ");
    }
}
