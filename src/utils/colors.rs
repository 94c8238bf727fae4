//! ANSI color helpers for terminal output.
//!
//! Every helper takes an `enabled` flag so the renderer can produce plain
//! text (tests, pipes, `color: false` in the config).

use ansi_term::{Colour, Style};

fn paint(style: Style, value: &str, enabled: bool) -> String {
    if enabled {
        style.paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Day with at least one event
pub fn has_event(value: &str, enabled: bool) -> String {
    paint(Colour::Cyan.bold(), value, enabled)
}

/// Day with a holiday among its events
pub fn holiday(value: &str, enabled: bool) -> String {
    paint(Colour::Black.on(Colour::Purple).bold(), value, enabled)
}

/// Weekday labels, blank cells, "no events" lines
pub fn dim(value: &str, enabled: bool) -> String {
    paint(Colour::Fixed(244).normal(), value, enabled)
}

pub fn title(value: &str, enabled: bool) -> String {
    paint(Colour::Yellow.bold(), value, enabled)
}

pub fn link(value: &str, enabled: bool) -> String {
    paint(Colour::Blue.underline(), value, enabled)
}
