//! Terminal output utilities.
//!
//! Box drawing, colours and screen control.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::bmi::Category;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;83m";
pub const YELLOW: &str = "\x1b[38;5;220m";
pub const BLUE: &str = "\x1b[38;5;75m";

/// Colour for a category's display class.
pub fn category_color(category: Category) -> &'static str {
    match category.display_class() {
        "normal-weight" => GREEN,
        "overweight" => YELLOW,
        "obese" => RED,
        _ => BLUE,
    }
}

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Status line under a box: the message in yellow, or a blank line.
pub fn print_status(msg: Option<&str>) {
    match msg {
        Some(msg) => println!("{YELLOW}{msg}{RESET}"),
        None => println!(),
    }
}

pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content          │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// │     content      │
pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(console_width(content));
    let left = total / 2;
    println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(total - left));
}

/// Two right-aligned columns centred in the box.
pub fn box_columns(left: &str, right: &str) {
    box_line_center(&format!("{:>12}   {:>12}", left, right));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help entry: flag column, then a description wrapped to the box.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 24;
    let desc_col = INNER_WIDTH - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut lines = lines.into_iter();
    box_line(&format!(
        "{:<flag_col$}{}",
        flag,
        lines.next().unwrap_or_default()
    ));
    for line in lines {
        box_line(&format!("{:<flag_col$}{}", "", line));
    }
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
