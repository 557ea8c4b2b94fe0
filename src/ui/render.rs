use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{layout_regions, modal_close_rect, modal_rect};
use crate::ui::page_view::PageView;
use crate::ui::theme::{BRAND_GREEN, MODAL_BORDER, MUTED_TEXT, OVERLAY_BG, PAGE_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const MODAL_FIELDS: [&str; 3] = ["First Name", "Last Name", "Email Address"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);

    frame.render_widget(Clear, body);
    frame.render_widget(PageView::new(app), body);
    frame.render_widget(Footer::new(app.modal().is_visible()).widget(footer), footer);

    if app.modal().is_visible() {
        draw_modal(frame, app);
    }
}

fn draw_modal(frame: &mut Frame<'_>, app: &App) {
    let body = app.body();
    // Overlay: the page stays visible but dimmed.
    frame
        .buffer_mut()
        .set_style(body, Style::default().bg(OVERLAY_BG).add_modifier(Modifier::DIM));

    let area = modal_rect(body);
    frame.render_widget(Clear, area);

    let label = Style::default().fg(MUTED_TEXT);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Open your bank account in just ", Style::default().fg(PAGE_TEXT)),
            Span::styled(
                "5 minutes",
                Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
    ];
    for field in MODAL_FIELDS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<15}", field), label),
            Span::styled("[", label),
            Span::raw(" ".repeat(20)),
            Span::styled("]", label),
        ]));
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "  Next step →  ",
        Style::default()
            .fg(ratatui::style::Color::Black)
            .bg(BRAND_GREEN)
            .add_modifier(Modifier::BOLD),
    ));

    let modal = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", app.config().content.brand),
                Style::default().fg(BRAND_GREEN),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MODAL_BORDER)),
    );
    frame.render_widget(modal, area);

    let close = modal_close_rect(area);
    frame.render_widget(
        Paragraph::new(" × ").style(Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD)),
        close,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;
    use ratatui::Terminal;

    fn draw_app(app: &App) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(100, 31);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn modal_draws_close_control() {
        let mut app = App::new(Config::default());
        app.on_resize(100, 31);
        app.open_modal();
        let buffer = draw_app(&app);
        let close = modal_close_rect(modal_rect(app.body()));
        let cell = buffer
            .cell(Position::new(close.x + 1, close.y))
            .expect("cell");
        assert_eq!(cell.symbol(), "×");
    }

    #[test]
    fn footer_shows_hints() {
        let mut app = App::new(Config::default());
        app.on_resize(100, 31);
        let buffer = draw_app(&app);
        let footer: String = (0..100)
            .filter_map(|x| buffer.cell(Position::new(x, 30)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(footer.contains("Quit"));
    }
}
