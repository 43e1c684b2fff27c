//! One-line user messages with an icon. Everything goes to stdout so that
//! stderr carries only errors and diagnostics.

use crate::utils::colors::{BLUE, BOLD, GREEN, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, ICON_WARN, msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_text_after_reset() {
        let out = line(GREEN, ICON_OK, "Added urination #1");
        assert!(out.starts_with(GREEN));
        assert!(out.ends_with(&format!("{RESET} Added urination #1")));
    }
}
