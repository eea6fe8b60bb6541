//! Table and banner rendering.
//!
//! Tables go to stdout; status lines go through tracing onto stderr (see
//! [`super::logging`]). Column geometry is fixed: 89 columns total, data
//! rows of 17/30/40 with the middle column truncated at 29.

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 89;

pub fn banner(quiet: bool) {
    if quiet {
        return;
    }

    let text_content: String = format!("⟦ SGQUERY v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    println!("{}{}{}", sep, text, sep);
}

/// Prints a section banner: a `#` bar, the centered uppercase title, and a
/// closing bar.
pub fn section(title: &str) {
    let bar: ColoredString = "#".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    let centered: String = format!("{:^width$}", title.to_uppercase(), width = TOTAL_WIDTH);

    println!();
    println!("{bar}");
    println!("{}", centered.color(colors::PRIMARY).bold());
    println!("{bar}");
}

pub fn heading(c0: &str, c1: &str, c2: &str) {
    let line: String = format!("{c0:<17} {c1:<30} {c2:<40}");
    println!("{}", line.color(colors::PRIMARY));
}

/// A dash rule under the heading. A zero width leaves that column blank.
pub fn rule(w0: usize, w1: usize, w2: usize) {
    let line: String = format!(
        "{:<17} {:<30} {:<40}",
        "-".repeat(w0),
        "-".repeat(w1),
        "-".repeat(w2)
    );
    println!("{}", line.color(colors::SEPARATOR));
}

/// One data row; the middle column is clipped at 29 characters so long
/// names cannot push the last column out of alignment.
pub fn row(c0: &str, c1: &str, c2: &str) {
    println!("{c0:<17} {c1:<30.29} {c2:<40}");
}

pub fn line(msg: &str) {
    println!("{msg}");
}
