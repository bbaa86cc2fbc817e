//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::TreeItem;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One item per line: id, parent (or "-"), label, tab separated.
pub fn item_line(item: &TreeItem) -> String {
    let parent = item
        .parent
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".into());
    format!("{}\t{}\t{}", item.id.to_string().bold(), parent.dimmed(), item.label)
}

/// Print items one per line.
pub fn items<'a>(items: impl IntoIterator<Item = &'a TreeItem>) {
    for item in items {
        info(&item_line(item));
    }
}
