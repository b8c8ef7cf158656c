//! Text formatting shared by the assembler and every renderer.

use jiff::civil::{Date, DateTime};

use crate::blocks::Unit;

/// A measured value as entered.
///
/// Shortest round-trip representation: `13.0` prints as `13`, `27.34`
/// as `27.34`. No rounding is applied.
pub fn number(value: f64) -> String {
    format!("{value}")
}

/// `%` is glued to the value; every other unit is separated by a space.
pub fn with_unit(value: &str, unit: Option<Unit>) -> String {
    match unit {
        None => value.to_string(),
        Some(Unit::Percent) => format!("{value}%"),
        Some(unit) => format!("{value} {}", unit.suffix()),
    }
}

/// `dd/mm/yyyy`.
pub fn date(date: Date) -> String {
    date.strftime("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy às HH:MM:SS`.
pub fn timestamp(at: DateTime) -> String {
    format!(
        "{} às {}",
        at.strftime("%d/%m/%Y"),
        at.strftime("%H:%M:%S")
    )
}

/// Replace characters that cannot appear in a file name on common
/// filesystems. Everything else, accents included, is kept.
pub fn file_name_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Greedy word wrap on character count. Always returns at least one line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
