use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};
use unicode_width::UnicodeWidthChar;

use storyboard::Rect;

/// Owns the terminal for the lifetime of the demo. Restores it on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn text(&mut self, x: u16, y: u16, text: &str, highlight: bool) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y))?;
        if highlight {
            queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
        }
        queue!(self.stdout, Print(text))?;
        if highlight {
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    /// Draw a bordered card at `rect` (offset by `top`) with `title` inside.
    pub fn card(&mut self, rect: Rect, top: u16, title: &str, highlight: bool) -> io::Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }
        let inner = (rect.width - 2) as usize;
        let y = rect.y + top;

        self.text(rect.x, y, &format!("┌{}┐", "─".repeat(inner)), highlight)?;
        for row in 1..rect.height - 1 {
            let content = if row == 1 {
                pad(&truncate(title, inner), inner)
            } else {
                " ".repeat(inner)
            };
            self.text(rect.x, y + row, &format!("│{content}│"), highlight)?;
        }
        self.text(
            rect.x,
            y + rect.height - 1,
            &format!("└{}┘", "─".repeat(inner)),
            highlight,
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Cut `text` to at most `width` display columns.
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let used: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_display_width() {
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("日本語", 4), "日本");
        assert_eq!(truncate("ok", 10), "ok");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("日", 4), "日  ");
    }
}
