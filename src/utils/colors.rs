//! ANSI styling for the report, backed by ansi_term.

use ansi_term::{Colour, Style};

/// Parts of the report that get their own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ProjectName,
    WorkHeader,
    SlackHeader,
    Message,
}

/// Applies report styles, or passes text through when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, role: Role, s: &str) -> String {
        if !self.enabled {
            return s.to_string();
        }
        style_for(role).paint(s).to_string()
    }
}

fn style_for(role: Role) -> Style {
    match role {
        Role::ProjectName => Colour::Green.bold(),
        Role::WorkHeader => Colour::Cyan.bold(),
        Role::SlackHeader => Colour::Yellow.bold(),
        Role::Message => Colour::Yellow.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_colorizer_is_identity() {
        let c = Colorizer::new(false);
        assert_eq!(c.paint(Role::ProjectName, "Django"), "Django");
    }

    #[test]
    fn enabled_colorizer_wraps_in_escape_codes() {
        let c = Colorizer::new(true);
        let out = c.paint(Role::WorkHeader, "WORK");
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("WORK"));
        assert!(out.ends_with("\x1b[0m"));
    }
}
