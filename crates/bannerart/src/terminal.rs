//! Display-width probing.
//!
//! Three sources in priority order: the controlling terminal, the `COLUMNS`
//! environment variable, a fixed default. All platform-specific code sits
//! behind this one seam.

use std::env;

use crate::art::DEFAULT_WIDTH;

/// Best-effort display width for the current process.
pub fn display_width() -> usize {
    query_tty()
        .or_else(width_from_env)
        .unwrap_or(DEFAULT_WIDTH)
}

fn width_from_env() -> Option<usize> {
    env::var("COLUMNS").ok()?.trim().parse().ok()
}

#[cfg(unix)]
fn query_tty() -> Option<usize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ only writes into the winsize out-parameter.
    let ret = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };
    (ret == 0 && ws.ws_col > 0).then_some(ws.ws_col as usize)
}

#[cfg(not(unix))]
fn query_tty() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_fallback_parses_columns() {
        env::set_var("COLUMNS", "120");
        assert_eq!(width_from_env(), Some(120));
        env::set_var("COLUMNS", "not a number");
        assert_eq!(width_from_env(), None);
        env::remove_var("COLUMNS");
        assert_eq!(width_from_env(), None);
    }
}
