use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::settings::clamp_length;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor with cursor movement.
///
/// `accept(current, ch)` decides whether a typed character may be inserted.
/// Returns `None` on Esc or Ctrl+Q, and when the terminal cannot be read;
/// Ctrl+C exits the process.
fn edit_line(prompt: &str, initial: &str, accept: impl Fn(&str, char) -> bool) -> Option<String> {
    let mut input = initial.to_string();
    // 1-based: 1 = before the first character
    let mut cursor = input.chars().count() + 1;
    let mut drawn = cursor;

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    print!("{}: {}", prompt, input);
    flush();

    let cancelled = loop {
        let key = match read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(_) => break true,
        };

        match apply_key(&mut input, &mut cursor, key, &accept) {
            KeyOutcome::Submit => break false,
            KeyOutcome::Cancel => break true,
            KeyOutcome::Exit => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyOutcome::Edited => {}
        }

        print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
        print!("\r{}: {}", prompt, input);
        print!("\x1b[{}G", prompt.chars().count() + 2 + cursor);
        flush();
        drawn = input.chars().count() + 1;
    };

    guard.release();
    println!();
    if cancelled { None } else { Some(input) }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Edited,
    Submit,
    Cancel,
    Exit,
}

fn apply_key(
    input: &mut String,
    cursor: &mut usize,
    key: KeyEvent,
    accept: &impl Fn(&str, char) -> bool,
) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let len = input.chars().count();

    match key.code {
        KeyCode::Char('c') if ctrl => return KeyOutcome::Exit,
        KeyCode::Char('q') if ctrl => return KeyOutcome::Cancel,
        KeyCode::Char('u') if ctrl => {
            input.clear();
            *cursor = 1;
        }
        KeyCode::Esc => return KeyOutcome::Cancel,
        KeyCode::Enter => return KeyOutcome::Submit,
        KeyCode::Backspace if *cursor > 1 => {
            *cursor -= 1;
            remove_char(input, *cursor - 1);
        }
        KeyCode::Delete if *cursor <= len => remove_char(input, *cursor - 1),
        KeyCode::Left if *cursor > 1 => *cursor -= 1,
        KeyCode::Right if *cursor <= len => *cursor += 1,
        KeyCode::Home => *cursor = 1,
        KeyCode::End => *cursor = len + 1,
        KeyCode::Char(c) if !ctrl && accept(input, c) => {
            let at = byte_offset(input, *cursor - 1);
            input.insert(at, c);
            *cursor += 1;
        }
        _ => {}
    }
    KeyOutcome::Edited
}

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

fn remove_char(s: &mut String, char_idx: usize) {
    let at = byte_offset(s, char_idx);
    if at < s.len() {
        s.remove(at);
    }
}

pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, initial, |_, _| true)
}

fn accept_decimal(current: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '.' && !current.contains('.'))
}

/// Blank input reads as 0, which the calculator then rejects.
fn parse_decimal(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(0.0)
}

/// Positive decimal such as a weight or height.
pub fn get_decimal_input(prompt: &str, initial: f64) -> Option<f64> {
    let initial = if initial > 0.0 {
        initial.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &initial, accept_decimal).map(|s| parse_decimal(&s))
}

/// Password length, clamped into the allowed range.
pub fn get_length_input(prompt: &str, initial: usize) -> Option<usize> {
    let text = edit_line(prompt, &initial.to_string(), |cur, c| {
        c.is_ascii_digit() && cur.len() < 3
    })?;
    Some(clamp_length(text.trim().parse().unwrap_or(initial)))
}
