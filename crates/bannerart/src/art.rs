//! Text to ASCII-art composition, with width-aware wrapping.

use crate::align::{self, Alignment};
use crate::banner::{GlyphTable, GLYPH_HEIGHT};
use crate::color;

/// Marker appended to every non-empty rendered row.
pub const SENTINEL: char = '$';

/// The two-character `\n` marker that starts a new logical line inside the
/// source text.
const LINE_BREAK: &str = "\\n";

/// Fallback display width when neither the caller nor the terminal supplies
/// one.
pub const DEFAULT_WIDTH: usize = 80;

const MIN_WRAP_WIDTH: usize = 10;
const SENTINEL_RESERVE: usize = 2;

/// Styling applied on top of plain composition.
#[derive(Clone, Debug)]
pub struct RenderOptions<'a> {
    pub color: Option<&'a str>,
    pub substring: Option<&'a str>,
    pub align: Alignment,
    pub width: usize,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            color: None,
            substring: None,
            align: Alignment::Left,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Renders `text` as plain banner art, wrapping greedily to `width`.
///
/// Empty text renders as the empty string. Every line-break marker yields a
/// lone sentinel row separating the adjacent art blocks, so a blank logical
/// line shows up as sentinel-only rows. Characters the font does not define
/// are skipped and leave no gap.
pub fn generate_art(text: &str, table: &GlyphTable, width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut rows = Vec::new();
    for (i, line) in text.split(LINE_BREAK).enumerate() {
        if i > 0 {
            rows.push(SENTINEL.to_string());
        }
        if line.is_empty() {
            continue;
        }
        for segment in wrap_greedy(line, table, working_width(width)) {
            rows.extend(render_segment(&segment, table));
        }
    }
    rows.join("\n")
}

/// Renders `text` with optional coloring and alignment.
///
/// This path wraps with the even-distribution variant so colorized and
/// aligned segments of one logical line come out width-uniform.
pub fn render(text: &str, table: &GlyphTable, options: &RenderOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut rows = Vec::new();
    for (i, line) in text.split(LINE_BREAK).enumerate() {
        if i > 0 {
            rows.push(SENTINEL.to_string());
        }
        if line.is_empty() {
            continue;
        }
        if options.align == Alignment::Justify && word_count(line) >= 2 {
            rows.extend(align::justify_line(
                line,
                table,
                options.color,
                options.substring.unwrap_or(""),
                options.width,
            ));
            continue;
        }
        for segment in wrap_balanced(line, table, working_width(options.width)) {
            let mut block = render_segment(&segment, table);
            if let Some(name) = options.color {
                block = color::apply_color(
                    &block,
                    options.substring.unwrap_or(""),
                    name,
                    &segment,
                    table,
                );
            }
            rows.extend(align::apply_alignment(&block, options.align, options.width));
        }
    }
    rows.join("\n")
}

fn word_count(line: &str) -> usize {
    line.split(' ').filter(|w| !w.is_empty()).count()
}

/// Usable glyph width after reserving sentinel space; `None` disables
/// wrapping entirely (too narrow to split usefully).
pub(crate) fn working_width(width: usize) -> Option<usize> {
    let usable = width.saturating_sub(SENTINEL_RESERVE);
    (usable >= MIN_WRAP_WIDTH).then_some(usable)
}

/// Composes the 8 raster rows for one segment and appends the sentinel to
/// every row that accumulated content.
pub(crate) fn render_segment(segment: &str, table: &GlyphTable) -> Vec<String> {
    let mut rows = compose(segment, table);
    for row in &mut rows {
        if !row.is_empty() {
            row.push(SENTINEL);
        }
    }
    rows
}

/// Raw 8-row composition, no sentinel. Unknown characters contribute nothing.
pub(crate) fn compose(segment: &str, table: &GlyphTable) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for ch in segment.chars() {
        if let Some(glyph) = table.glyph(ch) {
            for (row, line) in rows.iter_mut().zip(glyph.lines()) {
                row.push_str(line);
            }
        }
    }
    rows
}

/// Greedy left-to-right packing: a character that would overflow the working
/// width starts a new segment; a single over-wide character still gets its
/// own segment rather than being dropped. Characters without a glyph are
/// excluded from segments.
fn wrap_greedy(line: &str, table: &GlyphTable, max: Option<usize>) -> Vec<String> {
    let Some(max) = max else {
        return vec![line.to_string()];
    };
    pack_chars(line, table, max)
}

/// Even-distribution variant: when the line overflows, the per-segment
/// target is the total glyph width divided by the number of segments the
/// greedy policy would need, which balances the segments visually.
fn wrap_balanced(line: &str, table: &GlyphTable, max: Option<usize>) -> Vec<String> {
    let Some(max) = max else {
        return vec![line.to_string()];
    };
    let total: usize = line.chars().map(|c| table.width_of(c)).sum();
    if total <= max {
        return vec![line.to_string()];
    }
    let segments = total.div_ceil(max);
    pack_chars(line, table, (total / segments).max(1))
}

fn pack_chars(line: &str, table: &GlyphTable, max: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in line.chars() {
        let Some(glyph) = table.glyph(ch) else {
            continue;
        };
        let w = glyph.width();
        if current_width + w > max && !current.is_empty() {
            segments.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
