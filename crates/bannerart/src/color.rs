//! Substring-scoped colorization of rendered art.
//!
//! Occurrences are found in the source text (character-offset space) and
//! converted to pixel-column ranges through the glyph widths, so the escape
//! sequences land exactly under the matched characters in every raster line.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::art::SENTINEL;
use crate::banner::GlyphTable;

pub const RESET: &str = "\x1b[0m";

static COLOR_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("red", "\x1b[31m"),
        ("green", "\x1b[32m"),
        ("yellow", "\x1b[33m"),
        ("blue", "\x1b[34m"),
        ("magenta", "\x1b[35m"),
        ("cyan", "\x1b[36m"),
        ("white", "\x1b[37m"),
        ("orange", "\x1b[38;5;208m"),
    ])
});

/// ANSI escape for a color name, case-insensitive. `None` for unknown names.
pub fn color_code(name: &str) -> Option<&'static str> {
    COLOR_TABLE.get(name.to_lowercase().as_str()).copied()
}

/// Applies `color` to the occurrences of `substring` within `source`, over an
/// art block rendered from that source text.
///
/// Unknown color names return the input unchanged. An empty substring wraps
/// the whole content of every non-empty row once. The trailing sentinel is
/// never colored or displaced.
pub fn apply_color(
    rows: &[String],
    substring: &str,
    color: &str,
    source: &str,
    table: &GlyphTable,
) -> Vec<String> {
    let Some(code) = color_code(color) else {
        return rows.to_vec();
    };

    if substring.is_empty() {
        return rows
            .iter()
            .map(|row| {
                if row.is_empty() || row == "$" {
                    row.clone()
                } else {
                    let content = row.strip_suffix(SENTINEL).unwrap_or(row);
                    format!("{code}{content}{RESET}{SENTINEL}")
                }
            })
            .collect();
    }

    paint(rows, source, substring, code, table)
}

/// Finds the starting byte offsets of all occurrences of `substring` in
/// `text`, including overlapping ones. Empty substrings yield no matches.
pub fn find_substring_indices(text: &str, substring: &str) -> Vec<usize> {
    if substring.is_empty() {
        return Vec::new();
    }
    let mut indices = Vec::new();
    let mut start = 0;
    while let Some(pos) = text[start..].find(substring) {
        indices.push(start + pos);
        start += pos + 1;
    }
    indices
}

/// Wraps the pixel columns covered by `substring` occurrences in one escape
/// pair per maximal run. Rows without a sentinel (word fragments) are
/// supported; rows that are empty or `$` alone pass through.
pub(crate) fn paint(
    rows: &[String],
    source: &str,
    substring: &str,
    code: &'static str,
    table: &GlyphTable,
) -> Vec<String> {
    let indices = find_substring_indices(source, substring);
    if indices.is_empty() {
        return rows.to_vec();
    }

    let ranges: Vec<(usize, usize)> = indices
        .iter()
        .map(|&start| (start, start + substring.len()))
        .collect();

    // One flag per pixel column of the composed row.
    let mut flags: Vec<bool> = Vec::new();
    for (offset, ch) in source.char_indices() {
        let hit = ranges.iter().any(|&(s, e)| s <= offset && offset < e);
        for _ in 0..table.width_of(ch) {
            flags.push(hit);
        }
    }

    rows.iter()
        .map(|row| {
            if row.is_empty() || row == "$" {
                return row.clone();
            }
            let (content, sentinel) = match row.strip_suffix(SENTINEL) {
                Some(content) => (content, true),
                None => (row.as_str(), false),
            };
            let mut out = String::with_capacity(row.len() + ranges.len() * 12);
            let mut active = false;
            for (col, ch) in content.chars().enumerate() {
                let hit = flags.get(col).copied().unwrap_or(false);
                if hit && !active {
                    out.push_str(code);
                    active = true;
                } else if !hit && active {
                    out.push_str(RESET);
                    active = false;
                }
                out.push(ch);
            }
            if active {
                out.push_str(RESET);
            }
            if sentinel {
                out.push(SENTINEL);
            }
            out
        })
        .collect()
}

/// Removes ANSI CSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Character width of a row as displayed, ignoring embedded escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
