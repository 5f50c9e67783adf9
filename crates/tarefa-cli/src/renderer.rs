//! Markdown output for the terminal, via termimad.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print `markdown` to stdout.
    ///
    /// Headers keep their leading hashes and are colored by hand; every other
    /// line goes through the skin so bullets and emphasis are styled.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
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
    fn test_color_flag() {
        assert!(!TerminalRenderer::new(false).rich_enabled);
        assert!(TerminalRenderer::new(true).rich_enabled);
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_plain_render_succeeds() {
        let renderer = TerminalRenderer::new(false);
        assert!(renderer.render("## All Tasks\n\nNo tasks found.\n").is_ok());
    }
}
