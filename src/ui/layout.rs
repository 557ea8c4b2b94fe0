use ratatui::layout::{Constraint, Direction, Layout, Rect};

const FOOTER_HEIGHT: u16 = 1;
const MODAL_MIN_WIDTH: u16 = 40;
const MODAL_MIN_HEIGHT: u16 = 13;

/// Splits the terminal into the page body and the key-hint footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).0
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Modal box: 60% x 60% of the body, grown to a readable minimum.
pub fn modal_rect(body: Rect) -> Rect {
    let rect = centered_rect(60, 60, body);
    let width = rect.width.max(MODAL_MIN_WIDTH).min(body.width);
    let height = rect.height.max(MODAL_MIN_HEIGHT).min(body.height);
    Rect::new(
        body.x + body.width.saturating_sub(width) / 2,
        body.y + body.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// The "×" control on the modal's top border.
pub fn modal_close_rect(modal: Rect) -> Rect {
    Rect::new(
        modal.x + modal.width.saturating_sub(5),
        modal.y,
        3.min(modal.width),
        1.min(modal.height),
    )
}

/// Maps a document rectangle into `body` for the given scroll offset,
/// clipped to the visible rows. `None` when nothing of it is visible.
pub fn to_screen(doc: Rect, scroll: u16, body: Rect) -> Option<Rect> {
    let top = body.y as i32 + doc.y as i32 - scroll as i32;
    let bottom = top + doc.height as i32;
    let visible_top = top.max(body.y as i32);
    let visible_bottom = bottom.min(body.y as i32 + body.height as i32);
    if visible_bottom <= visible_top {
        return None;
    }
    let left = body.x.saturating_add(doc.x);
    let right = left
        .saturating_add(doc.width)
        .min(body.x.saturating_add(body.width));
    if right <= left {
        return None;
    }
    Some(Rect::new(
        left,
        visible_top as u16,
        right - left,
        (visible_bottom - visible_top) as u16,
    ))
}
