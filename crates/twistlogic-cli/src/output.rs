//! Colored output formatting for the TwistLogic CLI

use colored::*;
use twistlogic_ir::SyntaxError;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(title.chars().count()).cyan());
}

/// `✓` when the formula holds, `✗` otherwise.
pub fn verdict_mark(holds: bool) -> ColoredString {
    if holds {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    }
}

/// The syntax error message followed by the formula and a caret under the
/// offending character.
pub fn format_syntax_error(text: &str, error: &SyntaxError) -> String {
    let offset = error.position().min(text.chars().count());
    format!(
        "{}\n  {}\n  {}{}",
        error,
        text,
        " ".repeat(offset),
        "^".red().bold()
    )
}

pub fn enable_colors(enabled: bool) {
    colored::control::set_override(enabled);
}
