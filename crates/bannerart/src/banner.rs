//! Banner font files and the glyph table parsed from them.
//!
//! A banner file is a flat sequence of text lines: one 9-line block per
//! printable ASCII character (a separator line followed by 8 raster lines),
//! stored back-to-back from space (32) to tilde (126).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{BannerError, Result};

/// Fixed raster height of every glyph.
pub const GLYPH_HEIGHT: usize = 8;

const FIRST_CHAR: char = ' ';
const LAST_CHAR: char = '~';
const BLOCK_LEN: usize = GLYPH_HEIGHT + 1;

// Underscore is redrawn at load time so its line weight matches the dash.
const FAT_UNDERSCORE: [&str; 2] = [" _______ ", "|_______|"];

/// The 8 raster lines of one character.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    lines: Vec<String>,
}

impl Glyph {
    fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Display width, taken from the first raster line. Later lines are
    /// assumed equal but not re-validated.
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |l| l.chars().count())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Character-to-glyph mapping for one banner font.
///
/// Built once per render request and immutable afterwards. Characters the
/// source file did not define simply have no entry; lookups on them degrade
/// to zero-width behavior rather than erroring.
#[derive(Debug)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphTable {
    /// Loads a banner file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                BannerError::NotFound(path.display().to_string())
            } else {
                BannerError::Read(format!("{}: {e}", path.display()))
            }
        })?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Parses the raw lines of a banner file.
    ///
    /// Glyph blocks are assigned in order starting at ASCII 32; a trailing
    /// partial block (fewer than 9 remaining lines) is discarded. No
    /// validation that all 95 codes were filled.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();
        let mut glyphs = HashMap::new();
        let mut ch = FIRST_CHAR;

        for block in lines.chunks_exact(BLOCK_LEN) {
            // Skip the leading separator line of each block.
            let mut raster: Vec<String> = block[1..].iter().map(|l| (*l).to_string()).collect();
            if ch == '_' {
                raster[GLYPH_HEIGHT - 2] = FAT_UNDERSCORE[0].to_string();
                raster[GLYPH_HEIGHT - 1] = FAT_UNDERSCORE[1].to_string();
            }
            glyphs.insert(ch, Glyph::new(raster));
            if ch == LAST_CHAR {
                break;
            }
            ch = (ch as u8 + 1) as char;
        }

        Self { glyphs }
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Display width of a character; 0 when the font does not define it.
    pub fn width_of(&self, ch: char) -> usize {
        self.glyphs.get(&ch).map_or(0, Glyph::width)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
