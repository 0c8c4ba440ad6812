//! Terminal rendering of the dashboard's markdown views
//!
//! Views are produced as markdown by the core display types; this module
//! prints them through termimad, or verbatim when colors are disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};
use wanderlust_core::{display::StatusKind, OperationStatus};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else if line.starts_with("![") {
                // Terminals cannot show the flag image; keep the link dimmed
                println!("\x1b[2m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render an operation status line, colored by its kind
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if !self.rich_enabled {
            print!("{status}");
            return Ok(());
        }
        let color = match status.kind {
            StatusKind::Success => "32",
            StatusKind::Info => "33",
            StatusKind::Failure => "31",
        };
        print!("\x1b[{color}m{status}\x1b[0m");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
