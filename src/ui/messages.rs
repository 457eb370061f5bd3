use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW, colors_enabled};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn paint(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if colors_enabled() {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(RED, ICON_ERR, msg));
}

/// Dimmed secondary line (empty panels, hints).
pub fn hint<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{}{}{}", GREY, msg, RESET);
    } else {
        println!("{}", msg);
    }
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("\n{}{}== {} =={}", BLUE, BOLD, msg, RESET);
    } else {
        println!("\n== {} ==", msg);
    }
}
