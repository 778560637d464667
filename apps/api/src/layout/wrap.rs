//! Text sanitization and greedy word-wrap.
//!
//! Wrapping is greedy: words are packed onto a line until the next word
//! would exceed the usable width. A single word wider than a full line is
//! split hard at the line width rather than overflowing into the margin.

use crate::layout::font_metrics::FontMetricTable;

/// Replaces common typographic characters with ASCII equivalents.
///
/// The builtin faces cover the ASCII range; model output routinely carries
/// curly quotes and en/em dashes, which would otherwise fall into the
/// average-width fallback and draw as missing glyphs.
pub fn sanitize(text: &str) -> String {
    text.replace('\u{2018}', "'")
        .replace('\u{2019}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{2013}', "-")
        .replace('\u{2014}', "-")
}

/// Word-wraps `text` into lines no wider than `max_width_em`.
///
/// Interior whitespace (including single newlines) collapses to one space;
/// paragraph structure is the caller's concern. Empty input yields no lines.
pub fn wrap(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        for piece in split_to_fit(word, metrics, max_width_em) {
            let piece_width = metrics.measure_str(&piece);

            if current.is_empty() {
                current.push_str(&piece);
                current_width = piece_width;
            } else if current_width + metrics.space_width + piece_width > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(&piece);
                current_width = piece_width;
            } else {
                current.push(' ');
                current.push_str(&piece);
                current_width += metrics.space_width + piece_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a word that is wider than a full line into line-sized pieces.
/// Words that fit are returned unchanged.
fn split_to_fit(word: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    if metrics.measure_str(word) <= max_width_em {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for c in word.chars() {
        let char_width = metrics.char_width(c);
        if !current.is_empty() && current_width + char_width > max_width_em {
            pieces.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(c);
        current_width += char_width;
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
