use std::path::PathBuf;

use anyhow::Result;
use bannerart::{terminal, Alignment, GlyphTable, RenderOptions};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bannerart", about = "Render text as banner ASCII art")]
struct Cli {
    /// Text to render; a literal `\n` inside it starts a new line
    text: String,
    /// Banner font name, resolved to <FONTS_DIR>/<NAME>.txt
    #[arg(default_value = "standard")]
    banner: String,
    /// Color the output (red, green, yellow, blue, magenta, cyan, white,
    /// orange); unknown names render uncolored
    #[arg(long)]
    color: Option<String>,
    /// Restrict coloring to occurrences of this substring
    #[arg(long)]
    substring: Option<String>,
    /// left, right, center or justify
    #[arg(long, default_value = "left", value_parser = parse_alignment)]
    align: Alignment,
    /// Target display width; defaults to the terminal width
    #[arg(long)]
    width: Option<usize>,
    /// Write the result to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Directory containing banner font files
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,
}

fn parse_alignment(s: &str) -> Result<Alignment, String> {
    s.parse().map_err(|e: bannerart::BannerError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.text.is_empty() {
        return Ok(());
    }

    let table = GlyphTable::load(cli.fonts_dir.join(format!("{}.txt", cli.banner)))?;
    let width = cli.width.unwrap_or_else(terminal::display_width);

    let art = if cli.color.is_none() && cli.align == Alignment::Left {
        bannerart::generate_art(&cli.text, &table, width)
    } else {
        let options = RenderOptions {
            color: cli.color.as_deref(),
            substring: cli.substring.as_deref(),
            align: cli.align,
            width,
        };
        bannerart::render(&cli.text, &table, &options)
    };
    if art.is_empty() {
        return Ok(());
    }

    match cli.output {
        Some(path) => bannerart::save_to_file(path, &format!("{art}\n"))?,
        None => println!("{art}"),
    }
    Ok(())
}
