// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geo::Rect;
use crate::shape::style::TextExtra;
use crate::shape::{next_version, ShapeId};

/// Text wrapped into rows of at most `max_row_chars` chars.
///
/// Rows break on `\n` and between space-separated words. Words longer than a row are cut into
/// row-sized chunks; runs of spaces survive as empty words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableText {
    text: String,
    max_row_chars: usize,
    lines: Vec<String>,
}

impl RenderableText {
    pub fn new(text: impl Into<String>, max_row_chars: usize) -> Self {
        let text = text.into();
        let max_row_chars = max_row_chars.max(1);
        let lines = if max_row_chars == 1 {
            text.chars().map(String::from).collect()
        } else {
            text.split('\n').flat_map(|line| wrap_line(line, max_row_chars)).collect()
        };
        Self { text, max_row_chars, lines }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_row_chars(&self) -> usize {
        self.max_row_chars
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn wrap_line(line: &str, max: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in line.split(' ').flat_map(|word| chunk_word(word, max)) {
        let word_len = word.chars().count();
        let space = usize::from(!current.is_empty());
        if current_len + space + word_len <= max {
            if space == 1 {
                current.push(' ');
            }
            current.push_str(&word);
            current_len += space + word_len;
        } else {
            rows.push(std::mem::replace(&mut current, word));
            current_len = word_len;
        }
    }
    rows.push(current);
    rows
}

fn chunk_word(word: &str, max: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= max {
        return vec![word.to_owned()];
    }
    chars.chunks(max).map(|chunk| chunk.iter().collect()).collect()
}

/// A box holding wrapped text, optionally bordered.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    id: ShapeId,
    version: u64,
    bound: Rect,
    extra: TextExtra,
    editing: bool,
    renderable: RenderableText,
}

impl TextShape {
    pub fn new(id: impl Into<ShapeId>, bound: Rect) -> Self {
        let extra = TextExtra::default();
        let renderable = RenderableText::new("", max_row_chars(bound, &extra));
        Self { id: id.into(), version: next_version(), bound, extra, editing: false, renderable }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_extra(mut self, extra: TextExtra) -> Self {
        self.set_extra(extra);
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn bound(&self) -> Rect {
        self.bound
    }

    pub fn text(&self) -> &str {
        self.renderable.text()
    }

    pub fn extra(&self) -> &TextExtra {
        &self.extra
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn renderable_text(&self) -> &RenderableText {
        &self.renderable
    }

    /// The area text is laid out in: the bound inset by one cell when a border is drawn.
    pub fn content_bound(&self) -> Rect {
        if self.extra.has_border() {
            Rect::by_ltwh(
                self.bound.left() + 1,
                self.bound.top() + 1,
                self.bound.width() - 2,
                self.bound.height() - 2,
            )
        } else {
            self.bound
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.renderable.text() != text {
            self.renderable = RenderableText::new(text, max_row_chars(self.bound, &self.extra));
            self.touch();
        }
    }

    pub fn set_bound(&mut self, bound: Rect) {
        if self.bound != bound {
            self.bound = bound;
            self.refresh_renderable();
            self.touch();
        }
    }

    pub fn set_extra(&mut self, extra: TextExtra) {
        if self.extra != extra {
            self.extra = extra;
            self.refresh_renderable();
            self.touch();
        }
    }

    pub fn set_editing(&mut self, editing: bool) {
        if self.editing != editing {
            self.editing = editing;
            self.touch();
        }
    }

    fn refresh_renderable(&mut self) {
        let max = max_row_chars(self.bound, &self.extra);
        if max != self.renderable.max_row_chars() {
            self.renderable = RenderableText::new(self.renderable.text().to_owned(), max);
        }
    }

    fn touch(&mut self) {
        self.version = next_version();
    }
}

fn max_row_chars(bound: Rect, extra: &TextExtra) -> usize {
    let width = if extra.has_border() { bound.width() - 2 } else { bound.width() };
    width.max(1) as usize
}
