use crate::ui::theme::{FOOTER_BG, PAGE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PAGE_HINTS: &str =
    " ↑↓ PgUp PgDn: Scroll │ 1-3: Sections │ ←→: Slides │ o: Open account │ q: Quit";
const MODAL_HINTS: &str = " Esc: Close │ ←→: Slides │ q: Quit";

pub struct Footer {
    modal_open: bool,
}

impl Footer {
    pub fn new(modal_open: bool) -> Self {
        Self { modal_open }
    }

    pub fn hints(&self) -> &'static str {
        if self.modal_open {
            MODAL_HINTS
        } else {
            PAGE_HINTS
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(PAGE_TEXT)
            .bg(FOOTER_BG)
            .add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_hints_mention_escape() {
        assert!(Footer::new(true).hints().contains("Esc"));
        assert!(!Footer::new(false).hints().contains("Esc"));
    }
}
