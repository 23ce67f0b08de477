use colored::Colorize;
use std::fmt;

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("[!] {message}").yellow());
}

pub fn error(message: impl fmt::Display) {
    println!("{}", format!("[x] {message}").red());
}

pub fn section(title: impl fmt::Display) {
    println!("{}", title.to_string().bold());
}

/// Signed amount with a color cue: green for credit, red for debit.
pub fn amount(value: f64) -> String {
    let text = format!("{value:+.2}");
    if value > 0.0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}
