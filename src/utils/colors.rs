/// ANSI color helper utilities for terminal output.
use std::io::IsTerminal;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Colors are emitted only on a terminal and when `NO_COLOR` is unset.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Wrap `value` in `color` when colors are enabled.
pub fn colorize(value: &str, color: &str) -> String {
    if colors_enabled() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
