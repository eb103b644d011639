use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_YELLOW: &str = "\x1b[33m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}info:{} {}", FG_BLUE, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}warning:{} {}", FG_YELLOW, BOLD, RESET, msg);
}
