// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the contracts-lite CLI: verdicts, level and mode
//! labels, and a boxed frame for the flicker and config tables.
//!
//! Colors use the basic 16-color ANSI set, and only on a TTY without
//! `NO_COLOR`.

use contracts_lite::{BuildLevel, HandlerMode};

/// Inner width of a frame, between the side borders.
const FRAME_WIDTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Gray,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Cyan => "36",
            Color::Gray => "90",
        }
    }
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint_if(enabled: bool, color: Color, bold: bool, text: &str) -> String {
    if !enabled {
        return text.to_string();
    }
    let weight = if bold { "1;" } else { "" };
    format!("\x1b[{}{}m{}\x1b[0m", weight, color.code(), text)
}

pub fn paint(color: Color, bold: bool, text: &str) -> String {
    paint_if(use_colors(), color, bold, text)
}

/// Character count, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the end of the SGR sequence
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// A titled box printed line by line.
///
/// ```text
/// ┌─ TITLE ───────┐
/// │ line          │
/// └───────────────┘
/// ```
pub struct Frame;

impl Frame {
    pub fn open(title: &str) -> Self {
        let label = format!("─ {} ", paint(Color::Cyan, true, title));
        let rest = FRAME_WIDTH.saturating_sub(visible_len(&label));
        println!(
            "{}{}{}",
            paint(Color::Gray, false, "┌"),
            label,
            paint(Color::Gray, false, &format!("{}┐", "─".repeat(rest)))
        );
        Frame
    }

    pub fn line(&self, content: &str) {
        let border = paint(Color::Gray, false, "│");
        let pad = FRAME_WIDTH.saturating_sub(visible_len(content));
        println!("{}{}{}{}", border, content, " ".repeat(pad), border);
    }

    pub fn close(self) {
        println!(
            "{}",
            paint(Color::Gray, false, &format!("└{}┘", "─".repeat(FRAME_WIDTH)))
        );
    }
}

/// `PASS` in green or `FAIL` in red.
pub fn verdict(ok: bool) -> String {
    if ok {
        paint(Color::Green, true, "PASS")
    } else {
        paint(Color::Red, true, "FAIL")
    }
}

pub fn level_label(level: BuildLevel) -> String {
    let color = match level {
        BuildLevel::Off => Color::Gray,
        BuildLevel::Default => Color::Green,
        BuildLevel::Audit => Color::Yellow,
    };
    paint(color, level == BuildLevel::Audit, level.as_str())
}

pub fn mode_label(mode: HandlerMode) -> String {
    let color = match mode {
        HandlerMode::Abort => Color::Red,
        HandlerMode::Continue => Color::Cyan,
    };
    paint(color, false, &mode.to_string())
}
