//! Alignment transforms over rendered art blocks.
//!
//! All padding math works on visual width (embedded color escapes excluded)
//! and reserves one column for the trailing sentinel, which anchors the
//! right edge of every row.

use std::str::FromStr;

use crate::art::{self, SENTINEL};
use crate::banner::{GlyphTable, GLYPH_HEIGHT};
use crate::color::{self, RESET};
use crate::error::BannerError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl FromStr for Alignment {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "justify" => Ok(Self::Justify),
            other => Err(BannerError::InvalidAlignment(other.to_string())),
        }
    }
}

/// Pads a block of rendered rows for placement within `width` columns.
///
/// `Left` is the identity. `Justify` reaching this transform means the
/// origin text held at most one word, which places like `Right`. Rows that
/// are empty or a lone sentinel pass through under every mode, and content
/// wider than the target is never truncated.
pub fn apply_alignment(rows: &[String], align: Alignment, width: usize) -> Vec<String> {
    match align {
        Alignment::Left => rows.to_vec(),
        Alignment::Right | Alignment::Justify => pad_rows(rows, width, |free| free),
        Alignment::Center => pad_rows(rows, width, |free| free / 2),
    }
}

fn pad_rows(rows: &[String], width: usize, split: impl Fn(usize) -> usize) -> Vec<String> {
    rows.iter()
        .map(|row| {
            if row.is_empty() || row == "$" {
                return row.clone();
            }
            let free = width.saturating_sub(color::visible_width(row));
            let pad = split(free);
            if pad == 0 {
                row.clone()
            } else {
                format!("{}{row}", " ".repeat(pad))
            }
        })
        .collect()
}

/// Justify distribution for a logical line of 2+ words.
///
/// Words render independently and pack greedily into rows with a one-space
/// separator budget; rows of 2+ words then stretch so the first and last
/// glyphs touch the margins, the leftover spacing split across the gaps
/// with the remainder front-loaded onto the earliest ones.
pub(crate) fn justify_line(
    line: &str,
    table: &GlyphTable,
    color: Option<&str>,
    substring: &str,
    width: usize,
) -> Vec<String> {
    let Some(work) = art::working_width(width) else {
        // Too narrow to distribute: one unsplit segment.
        return art::render_segment(line, table);
    };

    let words: Vec<&str> = line.split(' ').filter(|w| !w.is_empty()).collect();
    let mut out = Vec::new();

    for row_words in pack_words(&words, table, work) {
        let fragments: Vec<Vec<String>> = row_words
            .iter()
            .map(|w| word_fragment(w, table, color, substring))
            .collect();

        if let [fragment] = fragments.as_slice() {
            out.extend(seal(fragment.clone()));
            continue;
        }

        let total: usize = row_words.iter().map(|w| word_width(w, table)).sum();
        let gaps = row_words.len() - 1;
        let spacing = work.saturating_sub(total);
        let base = spacing / gaps;
        let extra = spacing % gaps;

        let mut rows = vec![String::new(); GLYPH_HEIGHT];
        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                let gap = base + usize::from(i - 1 < extra);
                for row in &mut rows {
                    row.push_str(&" ".repeat(gap));
                }
            }
            for (row, line) in rows.iter_mut().zip(fragment) {
                row.push_str(line);
            }
        }
        out.extend(seal(rows));
    }
    out
}

/// Greedy word packing with a minimum one-space separator between words; a
/// word that does not fit starts the next row, over-wide words get a row of
/// their own.
fn pack_words<'a>(words: &[&'a str], table: &GlyphTable, work: usize) -> Vec<Vec<&'a str>> {
    let mut packed: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_min = 0;

    for &word in words {
        let w = word_width(word, table);
        if current.is_empty() {
            current.push(word);
            current_min = w;
        } else if current_min + 1 + w > work {
            packed.push(std::mem::take(&mut current));
            current.push(word);
            current_min = w;
        } else {
            current.push(word);
            current_min += 1 + w;
        }
    }
    if !current.is_empty() {
        packed.push(current);
    }
    packed
}

fn word_width(word: &str, table: &GlyphTable) -> usize {
    word.chars().map(|c| table.width_of(c)).sum()
}

fn word_fragment(
    word: &str,
    table: &GlyphTable,
    color: Option<&str>,
    substring: &str,
) -> Vec<String> {
    let rows = art::compose(word, table);
    let Some(code) = color.and_then(color::color_code) else {
        return rows;
    };
    if substring.is_empty() {
        rows.into_iter()
            .map(|r| {
                if r.is_empty() {
                    r
                } else {
                    format!("{code}{r}{RESET}")
                }
            })
            .collect()
    } else {
        color::paint(&rows, word, substring, code, table)
    }
}

fn seal(mut rows: Vec<String>) -> Vec<String> {
    for row in &mut rows {
        if !row.is_empty() {
            row.push(SENTINEL);
        }
    }
    rows
}
