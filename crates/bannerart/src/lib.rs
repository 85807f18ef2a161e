//! bannerart: banner ASCII-art toolkit.
//! Font table loading, glyph composition, width-aware wrapping, substring
//! coloring and alignment.

pub mod align;
mod art;
mod banner;
pub mod color;
mod error;
mod output;
pub mod terminal;

pub use align::{apply_alignment, Alignment};
pub use art::{generate_art, render, RenderOptions, DEFAULT_WIDTH, SENTINEL};
pub use banner::{Glyph, GlyphTable, GLYPH_HEIGHT};
pub use color::{apply_color, find_substring_indices, strip_ansi, visible_width};
pub use error::{BannerError, Result};
pub use output::save_to_file;
