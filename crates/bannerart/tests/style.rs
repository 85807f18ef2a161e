//! Colorized and aligned rendering through the public API.

use std::path::PathBuf;

use bannerart::{
    apply_color, render, strip_ansi, visible_width, Alignment, GlyphTable, RenderOptions,
};
use pretty_assertions::assert_eq;

fn table() -> GlyphTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fonts/standard.txt");
    GlyphTable::load(path).unwrap()
}

fn options(color: Option<&'static str>, substring: Option<&'static str>, align: Alignment) -> RenderOptions<'static> {
    RenderOptions {
        color,
        substring,
        align,
        width: 80,
    }
}

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn escape_pairs(row: &str, code: &str) -> usize {
    assert_eq!(row.matches(code).count(), row.matches(RESET).count());
    row.matches(code).count()
}

#[test]
fn empty_substring_wraps_each_row_once() {
    let art = render("Hi", &table(), &options(Some("red"), None, Alignment::Left));
    for row in art.split('\n') {
        assert_eq!(escape_pairs(row, RED), 1);
        assert!(row.starts_with(RED));
        assert!(row.ends_with("$"));
        assert!(!row.contains("$\x1b"), "sentinel must stay last: {row:?}");
    }
}

#[test]
fn absent_substring_leaves_rows_unchanged() {
    let plain = render("Hi", &table(), &options(None, None, Alignment::Left));
    let styled = render("Hi", &table(), &options(Some("red"), Some("zz"), Alignment::Left));
    assert_eq!(plain, styled);
}

#[test]
fn unknown_color_disables_coloring() {
    let plain = render("Hi", &table(), &options(None, None, Alignment::Left));
    let styled = render("Hi", &table(), &options(Some("mauve"), None, Alignment::Left));
    assert_eq!(plain, styled);
}

#[test]
fn separated_occurrences_get_one_pair_each() {
    // 'a' occurs twice in "aba", with 'b' in between.
    let art = render("aba", &table(), &options(Some("red"), Some("a"), Alignment::Left));
    let row = art.split('\n').nth(2).unwrap();
    assert_eq!(escape_pairs(row, RED), 2);
}

#[test]
fn overlapping_occurrences_merge_into_one_pair() {
    let art = render("aaa", &table(), &options(Some("red"), Some("aa"), Alignment::Left));
    for row in art.split('\n') {
        assert_eq!(escape_pairs(row, RED), 1, "row: {row:?}");
    }
}

#[test]
fn colored_pixels_sit_under_the_matched_characters() {
    // "ba": color only 'a', so the escape starts at b's width boundary.
    let t = table();
    let art = render("ba", &t, &options(Some("red"), Some("a"), Alignment::Left));
    let b_width = t.width_of('b');
    for row in art.split('\n') {
        let start = row.find(RED).unwrap();
        assert_eq!(row[..start].chars().count(), b_width);
    }
}

#[test]
fn apply_color_preserves_row_shape() {
    let t = table();
    let rows: Vec<String> = vec!["  __ _  $".into(), "$".into(), String::new()];
    let colored = apply_color(&rows, "", "blue", "a", &t);
    assert_eq!(colored[0], format!("\x1b[34m  __ _  {RESET}$"));
    assert_eq!(colored[1], "$");
    assert_eq!(colored[2], "");
}

#[test]
fn right_alignment_fills_the_display_width() {
    let art = render("Hi", &table(), &options(None, None, Alignment::Right));
    for row in art.split('\n') {
        assert_eq!(visible_width(row), 80);
    }
}

#[test]
fn center_alignment_halves_the_leftover() {
    let plain = render("Hi", &table(), &options(None, None, Alignment::Left));
    let centered = render("Hi", &table(), &options(None, None, Alignment::Center));
    let content = visible_width(plain.split('\n').next().unwrap());
    let row = centered.split('\n').next().unwrap();
    let pad = (80 - content) / 2;
    assert!(row.starts_with(&" ".repeat(pad)));
    assert_eq!(visible_width(row), pad + content);
}

#[test]
fn alignment_measures_visual_width_under_color() {
    let plain = render("Hi", &table(), &options(None, None, Alignment::Right));
    let colored = render("Hi", &table(), &options(Some("red"), None, Alignment::Right));
    for (p, c) in plain.split('\n').zip(colored.split('\n')) {
        assert_eq!(strip_ansi(c), p);
    }
}

#[test]
fn justify_single_word_behaves_like_right() {
    let right = render("Hi", &table(), &options(None, None, Alignment::Right));
    let justified = render("Hi", &table(), &options(None, None, Alignment::Justify));
    assert_eq!(right, justified);
}

#[test]
fn justify_spreads_words_to_both_margins() {
    let art = render("Hi yo", &table(), &options(None, None, Alignment::Justify));
    for row in art.split('\n') {
        // Work width 78 plus the sentinel column.
        assert_eq!(visible_width(row), 79);
        assert!(row.ends_with('$'));
    }
}

#[test]
fn justify_composes_with_substring_color() {
    let art = render("Hi yo", &table(), &options(Some("red"), Some("y"), Alignment::Justify));
    let stripped: Vec<String> = art.split('\n').map(|r| strip_ansi(r)).collect();
    let plain = render("Hi yo", &table(), &options(None, None, Alignment::Justify));
    assert_eq!(stripped.join("\n"), plain);
    assert!(art.contains(RED));
}

#[test]
fn blank_line_rows_pass_through_alignment() {
    let art = render("A\\nB", &table(), &options(None, None, Alignment::Right));
    let rows: Vec<&str> = art.split('\n').collect();
    assert_eq!(rows[8], "$");
}
