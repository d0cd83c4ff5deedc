use crate::messages::{NOT_AVAILABLE, NOT_FOUND};
use crate::scraper::ResultRecord;
use crate::transcript::{Bubble, Transcript};
use owo_colors::OwoColorize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Robot emoji prefix for all bot output
const ROBOT: &str = "🤖";

const DEFAULT_WIDTH: usize = 80;
const MIN_WRAP_WIDTH: usize = 20;

/// Strip control characters from untrusted response text before it reaches
/// the terminal, so a hostile field can't smuggle ANSI escapes. Escape
/// sequences are consumed whole (a CSI runs through its final byte in
/// `@..=~`), so their printable remnants don't leak. Newlines and tabs
/// survive.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if matches!(c, '@'..='~') {
                        break;
                    }
                }
            }
            continue;
        }
        if !c.is_control() || c == '\n' || c == '\t' {
            out.push(c);
        }
    }
    out
}

/// Greedy word wrap honoring display width. Words wider than the limit get
/// a line of their own rather than being split mid-word.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

/// Flatten a result record into display lines, substituting the fixed
/// placeholders for missing or empty fields.
pub fn record_lines(record: &ResultRecord) -> Vec<String> {
    let mut lines = vec![sanitize(&record.business_name)];
    lines.push(format!(
        "Coordinates: {}",
        sanitize(field_or(&record.coordinates, NOT_FOUND))
    ));
    lines.push(format!(
        "Phone: {}",
        sanitize(field_or(&record.phone_number, NOT_FOUND))
    ));
    lines.push(format!(
        "Description: {}",
        sanitize(field_or(&record.description, NOT_AVAILABLE))
    ));
    lines.push("Job Suggestions:".to_string());
    for line in sanitize(&record.job_suggestions).lines() {
        lines.push(format!("  {}", line));
    }
    lines
}

/// Print a blocking validation warning (yellow) - the terminal stand-in for
/// the page alert.
pub fn warn(message: &str) {
    println!();
    println!("{} {}", "!".yellow().bold(), message.yellow());
}

/// Print a dimmed status note.
pub fn note(message: &str) {
    println!("{}", message.dimmed());
}

/// Print the input marker and flush so it shows before the read.
pub fn prompt_marker() {
    print!("{} ", "❯".bright_cyan().bold());
    let _ = std::io::stdout().flush();
}

/// Print a startup banner
pub fn banner() {
    println!();
    println!("{}", "═".repeat(50).bright_cyan());
    println!("{}  {}", ROBOT, "JOBSCOUT".bright_cyan().bold());
    println!("{}", "═".repeat(50).bright_cyan());
    println!();
}

/// Prints transcript bubbles to the terminal. The cursor tracks how far the
/// viewport has been drawn; `scroll_to_end` always catches it up to the
/// newest bubble.
pub struct Renderer {
    cursor: usize,
    width: usize,
}

impl Renderer {
    pub fn new() -> Self {
        let width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(DEFAULT_WIDTH);
        Self::with_width(width)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            cursor: 0,
            width: width.saturating_sub(4).max(MIN_WRAP_WIDTH),
        }
    }

    pub fn scroll_to_end(&mut self, transcript: &Transcript) {
        for bubble in &transcript.bubbles()[self.cursor..] {
            self.print_bubble(bubble);
        }
        self.cursor = transcript.len();
    }

    fn print_bubble(&self, bubble: &Bubble) {
        match bubble {
            Bubble::User(text) => {
                println!();
                for line in wrap(&sanitize(text), self.width) {
                    println!("{} {}", "you ❯".cyan().bold(), line.cyan());
                }
            }
            Bubble::Bot(text) => {
                println!();
                for line in wrap(&sanitize(text), self.width) {
                    println!("{} {}", ROBOT, line);
                }
            }
            Bubble::Result(record) => {
                println!();
                let lines = record_lines(record);
                println!("{} {}", ROBOT, lines[0].yellow().bold());
                for line in &lines[1..] {
                    println!("   {}", line.yellow());
                }
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
