// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the fuzzrank CLI.
//!
//! Result tables are drawn in a box, colored by match tier. Two palettes: OneDark
//! for dark terminals, One Light for light ones. `FUZZRANK_THEME=light|dark` wins,
//! then `COLORFGBG`, then dark.
//!
//! `NO_COLOR` or a non-TTY stdout turns styling off entirely, so `fuzzrank rank |
//! grep` sees plain text.

use std::fmt::Write as _;
use std::sync::OnceLock;

use fuzzrank::MatchKind;

/// Visible width between the box borders.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

type Rgb = (u8, u8, u8);

/// What a piece of text means, not what color it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Exact,
    Prefix,
    Strong,
    Weak,
    Heading,
    Border,
    Fast,
    Slow,
    VerySlow,
}

struct Palette {
    exact: Rgb,
    prefix: Rgb,
    strong: Rgb,
    weak: Rgb,
    heading: Rgb,
    fast: Rgb,
    slow: Rgb,
    very_slow: Rgb,
}

const ONE_DARK: Palette = Palette {
    exact: (166, 226, 46),
    prefix: (97, 175, 239),     // #61afef
    strong: (229, 192, 123),    // #e5c07b
    weak: (92, 99, 112),        // #5c6370
    heading: (86, 182, 194),    // #56b6c2
    fast: (152, 195, 121),      // #98c379
    slow: (229, 192, 123),      // #e5c07b
    very_slow: (224, 108, 117), // #e06c75
};

const ONE_LIGHT: Palette = Palette {
    exact: (68, 140, 39),
    prefix: (64, 120, 242),    // #4078f2
    strong: (193, 132, 1),     // #c18401
    weak: (160, 161, 167),     // #a0a1a7
    heading: (1, 132, 188),    // #0184bc
    fast: (80, 161, 79),       // #50a14f
    slow: (193, 132, 1),       // #c18401
    very_slow: (228, 86, 73),  // #e45649
};

impl Palette {
    fn rgb(&self, role: Role) -> Rgb {
        match role {
            Role::Exact => self.exact,
            Role::Prefix => self.prefix,
            Role::Strong => self.strong,
            Role::Weak | Role::Border => self.weak,
            Role::Heading => self.heading,
            Role::Fast => self.fast,
            Role::Slow => self.slow,
            Role::VerySlow => self.very_slow,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TERMINAL DETECTION
// ═══════════════════════════════════════════════════════════════════════════

fn is_light_terminal() -> bool {
    if let Ok(theme) = std::env::var("FUZZRANK_THEME") {
        match theme.to_ascii_lowercase().as_str() {
            "light" | "l" => return true,
            "dark" | "d" => return false,
            _ => {}
        }
    }
    // COLORFGBG is "fg;bg"; background 7 or 9..=15 is a light color
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

fn palette() -> &'static Palette {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    if *LIGHT.get_or_init(is_light_terminal) {
        &ONE_LIGHT
    } else {
        &ONE_DARK
    }
}

/// Styling is on only for an interactive stdout without `NO_COLOR`.
pub fn use_colors() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLED TEXT
// ═══════════════════════════════════════════════════════════════════════════

fn escape(role: Role, bold: bool, dim: bool) -> String {
    let (r, g, b) = palette().rgb(role);
    let mut out = String::new();
    if bold {
        out.push_str(BOLD);
    }
    if dim {
        out.push_str(DIM);
    }
    let _ = write!(out, "\x1b[38;2;{};{};{}m", r, g, b);
    out
}

/// Color `text` for `role`, or return it unchanged when styling is off.
pub fn paint(role: Role, text: &str) -> String {
    if use_colors() {
        let bold = matches!(role, Role::Exact | Role::Heading);
        format!("{}{}{}", escape(role, bold, false), text, RESET)
    } else {
        text.to_string()
    }
}

/// Dimmed variant of [`paint`].
pub fn faint(role: Role, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", escape(role, false, true), text, RESET)
    } else {
        text.to_string()
    }
}

/// Width in terminal columns, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the terminating 'm'
            for e in chars.by_ref() {
                if e == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Pad on the left to `width` visible columns.
pub fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(visible_len(s))), s)
}

/// Pad on the right to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible_len(s))))
}

/// Cut to `max` visible characters, ending in `…` when anything was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut kept: String = text.chars().take(max.saturating_sub(1)).collect();
    kept.push('…');
    kept
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(s: &str) -> String {
    paint(Role::Border, s)
}

/// `┌─ LABEL ───┐`
pub fn section_top(label: &str) {
    let head = format!("─ {} ", paint(Role::Heading, label));
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&head)));
    println!("{}{}{}", border("┌"), head, border(&format!("{}┐", fill)));
}

/// `│ content   │`
pub fn row(content: &str) {
    let pad = " ".repeat(BOX_WIDTH.saturating_sub(visible_len(content)));
    println!("{}{}{}{}", border("│"), content, pad, border("│"));
}

/// `└──────────┘`
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

pub fn kind_label(kind: MatchKind) -> String {
    match kind {
        MatchKind::Exact => paint(Role::Exact, "exact"),
        MatchKind::Prefix => paint(Role::Prefix, "prefix"),
        MatchKind::Fuzzy => faint(Role::Weak, "fuzzy"),
    }
}

fn score_role(score: i64, kind: MatchKind) -> Role {
    match kind {
        MatchKind::Exact => Role::Exact,
        MatchKind::Prefix => Role::Prefix,
        MatchKind::Fuzzy if score >= 100 => Role::Strong,
        MatchKind::Fuzzy => Role::Weak,
    }
}

/// Right-aligned score, colored by tier; fuzzy scores of 100+ stand out.
pub fn score_value(score: i64, kind: MatchKind) -> String {
    paint(score_role(score, kind), &format!("{:>7}", score))
}

/// Milliseconds, green under 5, yellow under 20, red above.
pub fn timing_ms(value: f64) -> String {
    let role = if value < 5.0 {
        Role::Fast
    } else if value < 20.0 {
        Role::Slow
    } else {
        Role::VerySlow
    };
    paint(role, &format!("{:>10.3}", value))
}
