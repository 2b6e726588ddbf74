//! Terminal markdown rendering for guide replies.
//!
//! The model answers in markdown (numbered lists, bold names); `termimad`
//! renders it for the terminal.

use termimad::crossterm::style::Color;
use termimad::MadSkin;

/// Markdown renderer with the guide's gold accent.
pub struct GuideRenderer {
    skin: MadSkin,
}

impl GuideRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        let gold = Color::AnsiValue(178);
        skin.bold.set_fg(gold);
        skin.headers[0].set_fg(gold);
        skin.headers[1].set_fg(gold);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render a complete markdown reply.
    pub fn render(&self, markdown: &str) -> String {
        self.skin.term_text(markdown).to_string()
    }
}

impl Default for GuideRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_text() {
        let out = GuideRenderer::new().render("1. Burj Khalifa");
        assert!(out.contains("Burj Khalifa"));
    }
}
