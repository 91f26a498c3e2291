//! Terminal rendering for advisory output
//!
//! Reports arrive as markdown. Rich output styles them line by line with
//! termimad, keeping heading marks so the panel structure stays visible;
//! plain output prints the markdown unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const GREEN: &str = "\x1b[32m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// How a single line of a report is styled.
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    /// Markdown heading, e.g. `## Current Stage: Sowing Stage`
    Heading,
    /// Hindi subtitle under a heading, e.g. `गेहूं • Rabi (Oct - Apr)`
    Subtitle,
    /// Confirmation line after a selection change
    Status,
    /// Anything else, rendered as inline markdown
    Body,
}

impl LineKind {
    fn of(line: &str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading
        } else if line.starts_with("Success:") {
            LineKind::Status
        } else if line.chars().next().is_some_and(|c| !c.is_ascii()) {
            LineKind::Subtitle
        } else {
            LineKind::Body
        }
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Field greens for structure, amber for quantities and stage names
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.bullet.set_fg(Color::Green);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match LineKind::of(line) {
                LineKind::Heading => println!("{GREEN}{line}{RESET}"),
                LineKind::Status => println!("{BOLD_GREEN}{line}{RESET}"),
                LineKind::Subtitle => {
                    self.skin.print_inline(&format!("*{line}*"));
                    println!();
                }
                LineKind::Body => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_kinds() {
        assert_eq!(LineKind::of("## Wheat Cultivation Progress"), LineKind::Heading);
        assert_eq!(LineKind::of("#### Fertilizer / उर्वरक"), LineKind::Heading);
        assert_eq!(LineKind::of("गेहूं • Rabi (Oct - Apr)"), LineKind::Subtitle);
        assert_eq!(LineKind::of("वर्तमान अवस्था: बुवाई"), LineKind::Subtitle);
        assert_eq!(
            LineKind::of("Success: Rice (rice) is at stage 1 of 1"),
            LineKind::Status
        );
        assert_eq!(LineKind::of("- **Complete**: 50%"), LineKind::Body);
        assert_eq!(LineKind::of(""), LineKind::Body);
    }

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("## Wheat Cultivation Progress\n").is_ok());
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
        assert!(renderer
            .render("## Current Stage: Sowing Stage\n\nवर्तमान अवस्था: बुवाई\n\n- 60 kg Nitrogen\n")
            .is_ok());
    }
}
