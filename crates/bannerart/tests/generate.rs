use std::path::PathBuf;

use bannerart::{generate_art, GlyphTable, DEFAULT_WIDTH};
use pretty_assertions::assert_eq;

fn table() -> GlyphTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fonts/standard.txt");
    GlyphTable::load(path).unwrap()
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(generate_art("", &table(), DEFAULT_WIDTH), "");
}

#[test]
fn single_character_renders_eight_sentinel_rows() {
    let art = generate_art("A", &table(), DEFAULT_WIDTH);
    let rows: Vec<&str> = art.split('\n').collect();
    assert_eq!(rows.len(), 8);
    for row in &rows {
        assert!(row.ends_with('$'), "row without sentinel: {row:?}");
    }
    assert!(art.contains("/\\"));
}

#[test]
fn hello_matches_the_standard_glyph_shapes() {
    let art = generate_art("Hello", &table(), DEFAULT_WIDTH);
    let expected = [
        " _    _          _   _          $",
        "| |  | |        | | | |         $",
        "| |__| |   ___  | | | |   ___   $",
        "|  __  |  / _ \\ | | | |  / _ \\  $",
        "| |  | | |  __/ | | | | | (_) | $",
        "|_|  |_|  \\___| |_| |_|  \\___/  $",
        "                                $",
        "                                $",
    ];
    assert_eq!(art, expected.join("\n"));
}

#[test]
fn newline_marker_produces_a_lone_sentinel_row() {
    let art = generate_art("A\\nB", &table(), DEFAULT_WIDTH);
    let rows: Vec<&str> = art.split('\n').collect();
    assert_eq!(rows.len(), 17);
    assert_eq!(rows[8], "$");
}

#[test]
fn double_newline_marker_yields_two_separator_rows() {
    let art = generate_art("Hi\\n\\nBye", &table(), DEFAULT_WIDTH);
    let rows: Vec<&str> = art.split('\n').collect();
    assert_eq!(rows.iter().filter(|&&r| r == "$").count(), 2);
}

#[test]
fn lone_newline_marker_renders_a_blank_row() {
    assert_eq!(generate_art("\\n", &table(), DEFAULT_WIDTH), "$");
}

#[test]
fn space_only_input_still_gets_sentinels() {
    let art = generate_art(" ", &table(), DEFAULT_WIDTH);
    for row in art.split('\n') {
        assert_eq!(row, "      $");
    }
}

#[test]
fn fat_underscore_and_dash_render_with_matching_weight() {
    let art = generate_art("_", &table(), DEFAULT_WIDTH);
    assert!(art.contains("|_______|"));
    let art = generate_art("-", &table(), DEFAULT_WIDTH);
    assert!(art.contains("______"));
}

#[test]
fn digits_and_symbols_resolve_to_glyphs() {
    assert!(generate_art("1", &table(), DEFAULT_WIDTH).contains("/ |"));
    assert!(generate_art("123", &table(), DEFAULT_WIDTH).contains("/ |"));
    assert!(generate_art("~", &table(), DEFAULT_WIDTH).contains('/'));
    assert!(generate_art("!@#", &table(), DEFAULT_WIDTH).contains('|'));
}

#[test]
fn long_line_wraps_into_multiple_blocks() {
    // 'H' is 9 columns; 12 of them cannot fit a 40-column display.
    let art = generate_art(&"H".repeat(12), &table(), 40);
    let rows: Vec<&str> = art.split('\n').collect();
    assert_eq!(rows.len() % 8, 0);
    assert!(rows.len() > 8);
    for row in &rows {
        assert!(row.ends_with('$'));
        assert!(row.len() <= 39, "row exceeds display width: {}", row.len());
    }
}

#[test]
fn narrow_display_disables_wrapping() {
    let art = generate_art("Hello", &table(), 5);
    let rows: Vec<&str> = art.split('\n').collect();
    assert_eq!(rows.len(), 8);
    assert!(rows[0].len() > 5);
}

#[test]
fn unsupported_characters_leave_no_gap() {
    let plain = generate_art("AB", &table(), DEFAULT_WIDTH);
    let with_unicode = generate_art("A\u{00e9}B", &table(), DEFAULT_WIDTH);
    assert_eq!(plain, with_unicode);
}
