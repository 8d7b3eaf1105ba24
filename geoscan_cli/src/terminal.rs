//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::stderr;

/// Check if stderr is connected to a terminal (where errors are reported)
pub fn stderr_is_terminal() -> bool {
    stderr().is_terminal()
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    if term == "dumb" {
        return false;
    }

    // Windows consoles report no TERM but handle ANSI since Windows 10
    if cfg!(windows) {
        return true;
    }

    !term.is_empty()
}

/// Whether error output on stderr should be colored
pub fn stderr_supports_color() -> bool {
    stderr_is_terminal() && supports_ansi()
}
