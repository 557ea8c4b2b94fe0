//! Draws the page into a document-sized buffer and shows the scrolled window.

use crate::page::layout::{
    text_width, LEARN_MORE_LABEL, OPEN_ACCOUNT_LABEL, SIGNUP_BUTTON_LABEL, SLIDER_NEXT_LABEL,
    SLIDER_PREV_LABEL,
};
use crate::page::{NavGeometry, PageLayout, SectionId, Thumbnail, NAV_LINKS};
use crate::ui::app::App;
use crate::ui::lazy::{ImagePhase, LazyImage};
use crate::ui::nav::NavFade;
use crate::ui::theme::{
    tab_accent, BLUR, BRAND_GREEN, BRAND_YELLOW, MUTED_TEXT, PAGE_TEXT, SECTION_RULE,
    STICKY_NAV_BG,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

const HALF_BLOCK: &str = "▀";
const BLUR_CELL: &str = "░";
const DOT_ACTIVE: &str = "●";
const DOT_IDLE: &str = "○";

pub struct PageView<'a> {
    app: &'a App,
}

impl<'a> PageView<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = self.app.layout() else {
            return;
        };
        let document = render_document(self.app, layout);
        let scroll = self.app.scroll().offset;

        for row in 0..area.height {
            let doc_y = scroll.saturating_add(row);
            if doc_y >= layout.total_height {
                break;
            }
            for col in 0..area.width.min(layout.width) {
                let Some(cell) = document.cell(Position::new(col, doc_y)) else {
                    continue;
                };
                if let Some(target) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                    *target = cell.clone();
                }
            }
        }

        if self.app.is_stuck() {
            if let Some(nav) = self.app.nav_on_screen() {
                buf.set_style(nav.bar, Style::default().bg(STICKY_NAV_BG));
                render_nav(&nav, self.app, buf);
            }
        }
    }
}

/// Full page at document coordinates.
pub fn render_document(app: &App, layout: &PageLayout) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, layout.width, layout.total_height));
    let content = &app.config().content;

    render_nav(&layout.nav, app, &mut buf);
    render_centered(
        &mut buf,
        layout.hero_title,
        &content.hero_title,
        Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD),
    );
    render_centered(
        &mut buf,
        layout.hero_subtitle,
        &content.hero_subtitle,
        Style::default().fg(MUTED_TEXT),
    );
    render_button(&mut buf, layout.hero_open_account, OPEN_ACCOUNT_LABEL);
    render_centered(
        &mut buf,
        layout.learn_more,
        LEARN_MORE_LABEL,
        Style::default()
            .fg(BRAND_GREEN)
            .add_modifier(Modifier::UNDERLINED),
    );

    if app.is_revealed(SectionId::Features) {
        render_section_title(&mut buf, layout, SectionId::Features);
        for (id, feature) in content.features.iter().enumerate() {
            if let Some(rect) = layout.feature_images.get(id) {
                if let Some(image) = app.images().get(id) {
                    render_image(&mut buf, *rect, image);
                }
            }
            if let Some(rect) = layout.feature_texts.get(id) {
                let lines = vec![
                    Line::styled(
                        feature.title.clone(),
                        Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Line::raw(""),
                    Line::styled(feature.text.clone(), Style::default().fg(MUTED_TEXT)),
                ];
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .render(*rect, &mut buf);
            }
        }
    }

    if app.is_revealed(SectionId::Operations) {
        render_section_title(&mut buf, layout, SectionId::Operations);
        render_tabs(&mut buf, layout, app);
    }

    if app.is_revealed(SectionId::Testimonials) {
        render_section_title(&mut buf, layout, SectionId::Testimonials);
        render_slider(&mut buf, layout, app);
    }

    if app.is_revealed(SectionId::SignUp) {
        Paragraph::new(content.signup_title.clone())
            .style(Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout.signup_title, &mut buf);
        render_button(&mut buf, layout.signup_open_account, SIGNUP_BUTTON_LABEL);
    }

    render_footer(&mut buf, layout, app);
    buf
}

fn fade_style(style: Style, opacity: f32) -> Style {
    if NavFade::is_faded(opacity) {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn render_nav(nav: &NavGeometry, app: &App, buf: &mut Buffer) {
    let fade = app.nav_fade();
    let brand_style = fade_style(
        Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD),
        fade.brand_opacity(),
    );
    set_clipped(buf, nav.brand, &format!("◆ {}", app.config().content.brand), brand_style);

    for (link, (rect, (label, _))) in nav.link_rects.iter().zip(NAV_LINKS.iter()).enumerate() {
        let base = if *label == OPEN_ACCOUNT_LABEL {
            Style::default().fg(BRAND_GREEN).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PAGE_TEXT)
        };
        set_clipped(buf, *rect, label, fade_style(base, fade.link_opacity(link)));
    }
}

fn render_section_title(buf: &mut Buffer, layout: &PageLayout, section: SectionId) {
    let rect = layout.section_title(section);
    let lines = vec![
        Line::styled(section.label(), Style::default().fg(BRAND_GREEN)),
        Line::styled(
            section.heading(),
            Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(rect, buf);

    let rule_y = layout.section(section).top;
    let rule = "─".repeat(layout.width as usize);
    buf.set_string(0, rule_y, rule, Style::default().fg(SECTION_RULE));
}

fn render_image(buf: &mut Buffer, rect: Rect, image: &LazyImage) {
    match image.thumbnail() {
        Some(thumbnail) if !image.blurred => render_thumbnail(buf, rect, thumbnail),
        _ => {
            let blur = Style::default().fg(BLUR);
            for y in rect.top()..rect.bottom() {
                set_clipped(
                    buf,
                    Rect::new(rect.x, y, rect.width, 1),
                    &BLUR_CELL.repeat(rect.width as usize),
                    blur,
                );
            }
            let caption = match &image.phase {
                ImagePhase::Failed(_) => format!("{} (unavailable)", image.alt),
                _ => image.alt.clone(),
            };
            let middle = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1.min(rect.height));
            render_centered(buf, middle, &caption, Style::default().fg(PAGE_TEXT));
        }
    }
}

fn render_thumbnail(buf: &mut Buffer, rect: Rect, thumbnail: &Thumbnail) {
    for row in 0..rect.height {
        for col in 0..rect.width {
            let top = thumbnail.pixel(col, row * 2);
            let bottom = thumbnail.pixel(col, row * 2 + 1);
            let Some(cell) = buf.cell_mut(Position::new(rect.x + col, rect.y + row)) else {
                continue;
            };
            if let Some([r, g, b]) = top {
                cell.set_symbol(HALF_BLOCK).set_fg(Color::Rgb(r, g, b));
            }
            if let Some([r, g, b]) = bottom {
                cell.set_bg(Color::Rgb(r, g, b));
            }
        }
    }
}

fn render_tabs(buf: &mut Buffer, layout: &PageLayout, app: &App) {
    let content = &app.config().content;
    let tabs = app.tabs();
    for (tab, (rect, data)) in layout.tabs.iter().zip(&content.tabs).enumerate() {
        let style = if tabs.is_active(tab) {
            Style::default()
                .fg(Color::Black)
                .bg(tab_accent(tab))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tab_accent(tab))
        };
        // Active tab sits one row higher.
        let y = if tabs.is_active(tab) {
            rect.y
        } else {
            rect.y + 1
        };
        render_centered(buf, Rect::new(rect.x, y, rect.width, 1), &data.label, style);
    }

    if let Some(data) = content.tabs.get(tabs.active) {
        let lines = vec![
            Line::styled(
                data.heading.clone(),
                Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(data.text.clone(), Style::default().fg(MUTED_TEXT)),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inset(layout.tab_panel, 2), buf);
    }
}

fn render_slider(buf: &mut Buffer, layout: &PageLayout, app: &App) {
    let Some(carousel) = app.slider().carousel() else {
        return;
    };
    let content = &app.config().content;
    let slider = layout.slider;

    for (slide, data) in content.slides.iter().enumerate() {
        let Some(offset) = carousel.offset(slide) else {
            continue;
        };
        let shift = offset as i64 * slider.width as i64 / 100;
        if shift.unsigned_abs() >= slider.width as u64 {
            continue;
        }
        let mut lines = vec![Line::styled(
            data.heading.clone(),
            Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD),
        )];
        lines.push(Line::raw(""));
        lines.extend(
            wrap_text(&format!("“{}”", data.quote), slider.width.saturating_sub(4))
                .into_iter()
                .map(|line| Line::styled(line, Style::default().fg(MUTED_TEXT))),
        );
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("{} · {}", data.author, data.location),
            Style::default().fg(BRAND_YELLOW),
        ));

        // Slides to the left show their right part, slides to the right their left part.
        let (area, skip) = if shift < 0 {
            let skip = shift.unsigned_abs() as u16;
            (
                Rect::new(slider.x, slider.y, slider.width - skip, slider.height),
                skip,
            )
        } else {
            let shift = shift as u16;
            (
                Rect::new(slider.x + shift, slider.y, slider.width - shift, slider.height),
                0,
            )
        };
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .scroll((0, skip))
            .render(inset(area, 2), buf);
    }

    let button = Style::default().fg(PAGE_TEXT).add_modifier(Modifier::BOLD);
    render_centered(buf, layout.slider_prev, SLIDER_PREV_LABEL, button);
    render_centered(buf, layout.slider_next, SLIDER_NEXT_LABEL, button);

    for (dot, rect) in carousel.dots().iter().zip(&layout.dots) {
        let (symbol, style) = if dot.active {
            (DOT_ACTIVE, Style::default().fg(PAGE_TEXT))
        } else {
            (DOT_IDLE, Style::default().fg(MUTED_TEXT))
        };
        set_clipped(buf, *rect, symbol, style);
    }
}

fn render_footer(buf: &mut Buffer, layout: &PageLayout, app: &App) {
    let links = app.config().content.footer_links.join("   ");
    let rect = layout.footer;
    let muted = Style::default().fg(MUTED_TEXT);
    render_centered(buf, Rect::new(rect.x, rect.y + 1, rect.width, 1), &links, muted);
    let copyright = format!("© {}", app.config().content.brand);
    render_centered(buf, Rect::new(rect.x, rect.y + 2, rect.width, 1), &copyright, muted);
}

fn render_button(buf: &mut Buffer, rect: Rect, label: &str) {
    let style = Style::default()
        .fg(Color::Black)
        .bg(BRAND_GREEN)
        .add_modifier(Modifier::BOLD);
    buf.set_style(rect, style);
    render_centered(buf, rect, label, style);
}

fn render_centered(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let width = text_width(text).min(rect.width);
    let x = rect.x + (rect.width - width) / 2;
    set_clipped(buf, Rect::new(x, rect.y, width, 1), text, style);
}

/// Writes `text` on the first row of `rect`, never past its right edge.
fn set_clipped(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    let area = rect.intersection(buf.area);
    if area.is_empty() || rect.y != area.y {
        return;
    }
    buf.set_stringn(area.x, area.y, text, area.width as usize, style);
}

fn inset(rect: Rect, columns: u16) -> Rect {
    Rect::new(
        rect.x.saturating_add(columns),
        rect.y,
        rect.width.saturating_sub(columns * 2),
        rect.height,
    )
}

/// Greedy word wrap to `width` columns.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_app() -> App {
        let mut app = App::new(Config::default());
        app.on_resize(100, 31);
        app
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell(Position::new(x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn hidden_sections_render_blank() {
        let app = make_app();
        let layout = app.layout().expect("layout");
        let doc = render_document(&app, layout);
        let title = layout.section_title(SectionId::Operations);
        assert!(row_text(&doc, title.y + 1).trim().is_empty());
    }

    #[test]
    fn revealed_slider_shows_current_slide_and_dots() {
        let mut app = make_app();
        app.jump_to_bottom();
        let layout = app.layout().expect("layout").clone();
        let doc = render_document(&app, &layout);
        let heading = &app.config().content.slides[0].heading;
        assert!(row_text(&doc, layout.slider.y).contains(heading.as_str()));
        let dots = row_text(&doc, layout.dot_strip.y);
        assert_eq!(dots.matches(DOT_ACTIVE).count(), 1);
        assert_eq!(dots.matches(DOT_IDLE).count(), 2);
    }

    #[test]
    fn faded_links_are_dimmed() {
        let mut app = make_app();
        let layout = app.layout().expect("layout").clone();
        let link = layout.nav.link_rects[0];
        app.on_pointer_move(link.x, link.y);
        let doc = render_document(&app, &layout);
        let other = layout.nav.link_rects[1];
        let cell = doc.cell(Position::new(other.x, other.y)).expect("cell");
        assert!(cell.modifier.contains(Modifier::DIM));
        let hovered = doc.cell(Position::new(link.x, link.y)).expect("cell");
        assert!(!hovered.modifier.contains(Modifier::DIM));
    }
}
