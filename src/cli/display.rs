// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the vitrine CLI.
//!
//! The results panel, drawn in a box: the intent line, "did you mean", quick
//! category chips, then headers, chip rows and product rows exactly as the
//! windowed view orders them. OneDark for dark terminals, One Light for light
//! ones. Respects `NO_COLOR` and non-TTY detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `VITRINE_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use vitrine::search::query_key;
use vitrine::{CatalogIndex, EntityKind, IndexStats, SearchOutcome, ViewItem};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("VITRINE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);     // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);    // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);     // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);  // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);      // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);    // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, ending in `…` when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

fn labelled_rule(left: &str, right: &str, label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], left),
        label_part,
        themed(GRAY, &[], &format!("{}{}", "─".repeat(remaining), right))
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule("┌", "┐", label);
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule("├", "┤", label);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!(
        "{}",
        themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded similarity (green=confident, yellow=plausible, gray=weak)
pub fn score_value(score: f64) -> String {
    let text = format!("{:>5.3}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 0.9 {
        BRIGHT_GREEN()
    } else if score >= 0.7 {
        GREEN()
    } else if score >= 0.55 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded entity kind badge
pub fn kind_badge(kind: Option<EntityKind>) -> String {
    let label = match kind {
        Some(kind) => kind.to_string(),
        None => "broad".to_string(),
    };
    if !use_colors() {
        return format!("[{}]", label);
    }
    let color = match kind {
        Some(EntityKind::Category) => MAGENTA(),
        Some(EntityKind::Subcategory) => BLUE(),
        Some(EntityKind::Product) => GREEN(),
        None => GRAY(),
    };
    format!("{}[{}]{}", color, label, RESET)
}

/// Numbered chip list: `[1] Notebooks  [2] Pens & Pencils`
pub fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{} {}", themed(GRAY, &[], &format!("[{}]", i + 1)), item))
        .collect::<Vec<_>>()
        .join("  ")
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT PANELS
// ═══════════════════════════════════════════════════════════════════════════

/// What the results section says when it has no product rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing searchable was typed.
    Prompt,
    /// A real query that matched nothing.
    NoMatches,
}

/// Decide the empty-results label from the query itself, not the view.
pub fn empty_state(outcome: &SearchOutcome) -> Option<EmptyState> {
    if query_key(&outcome.query).is_none() {
        Some(EmptyState::Prompt)
    } else if outcome.product_rows() == 0 {
        Some(EmptyState::NoMatches)
    } else {
        None
    }
}

/// Print one query's panel.
///
/// `visible` is the windowed prefix of `outcome.view`; `chips` are the
/// quick categories shown above every panel.
pub fn print_outcome(
    outcome: &SearchOutcome,
    index: &CatalogIndex,
    visible: &[ViewItem],
    chips: &[String],
) {
    section_top(&format!("SEARCH \"{}\"", truncate(&outcome.query, 40)));

    let mut intent_line = format!(" {}", kind_badge(outcome.intent.kind()));
    if let Some(name) = outcome.intent.target_name(index) {
        intent_line.push_str(&format!(" {}", name));
    }
    if let Some(score) = outcome.intent.target_score() {
        intent_line.push_str(&format!("  {}", score_value(score)));
    }
    row(&intent_line);

    let suggestions = outcome.intent.suggestion_names();
    if !suggestions.is_empty() {
        row(&format!(
            " {} {}",
            themed(YELLOW, &[], "did you mean:"),
            numbered(&suggestions)
        ));
    }
    if !chips.is_empty() {
        row(&format!(" {}", numbered(chips)));
    }

    let total = outcome.product_rows();
    match empty_state(outcome) {
        Some(EmptyState::Prompt) => {
            section_mid("RESULTS");
            row(&themed(GRAY, &[], " (type to search)"));
        }
        Some(EmptyState::NoMatches) => {
            section_mid("RESULTS");
            row(&themed(GRAY, &[], " no matching products"));
        }
        None => {}
    }

    let mut shown = 0;
    for item in visible {
        match item {
            ViewItem::Header(name) => section_mid(&name.to_uppercase()),
            ViewItem::Chips(names) => {
                if !names.is_empty() {
                    row(&format!(" {}", themed(GRAY, &[DIM], &names.join(" · "))));
                }
            }
            ViewItem::ProductRow(product) => {
                shown += 1;
                let name = truncate(&product.name, 44);
                let path = themed(
                    GRAY,
                    &[],
                    &truncate(&format!("{} › {}", product.category_name, product.subcategory_name), 30),
                );
                row(&format!(
                    " {} {}  {}",
                    themed(GRAY, &[], &format!("{:>3}.", shown)),
                    pad_right(&themed(BRIGHT_CYAN, &[], &name), 44),
                    path
                ));
            }
        }
    }

    if total > shown {
        section_mid(&format!("{} OF {}", shown, total));
        row(&themed(GRAY, &[], " :more to load the next batch"));
    }
    section_bot();
}

/// Print index statistics for `inspect`.
pub fn print_stats(source: &str, stats: &IndexStats, chips: &[String]) {
    section_top(&format!("CATALOG {}", truncate(source, 50)));
    let line = |label: &str, value: usize| {
        row(&format!(
            " {} {}",
            pad_right(&themed(GRAY, &[], label), 16),
            themed(BRIGHT_GREEN, &[BOLD], &value.to_string())
        ));
    };
    line("categories", stats.categories);
    line("subcategories", stats.subcategories);
    line("products", stats.products);
    line("skipped nodes", stats.skipped);
    if !chips.is_empty() {
        section_mid("QUICK CATEGORIES");
        row(&format!(" {}", numbered(chips)));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
