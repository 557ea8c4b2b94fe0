use crate::page::SectionId;
use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Rows moved per mouse wheel notch, in units of `scroll_step`.
const WHEEL_ROWS: i32 = 3;

/// Action to take after processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Leave the main loop.
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.request_quit();
            return InputAction::Quit;
        }
        KeyCode::Esc => app.on_escape(),
        // Slider keys are document-wide, the modal does not capture them.
        KeyCode::Left => app.previous_slide(),
        KeyCode::Right => app.next_slide(),
        KeyCode::Up => app.scroll_by(-app.scroll_step()),
        KeyCode::Down => app.scroll_by(app.scroll_step()),
        KeyCode::PageUp => app.scroll_by(-app.page_height()),
        KeyCode::PageDown => app.scroll_by(app.page_height()),
        KeyCode::Home => app.jump_to_top(),
        KeyCode::End => app.jump_to_bottom(),
        KeyCode::Char('o') => app.open_modal(),
        KeyCode::Char('1') => app.scroll_to_section(SectionId::Features),
        KeyCode::Char('2') => app.scroll_to_section(SectionId::Operations),
        KeyCode::Char('3') => app.scroll_to_section(SectionId::Testimonials),
        _ => {}
    }
    InputAction::None
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.on_pointer_move(mouse.column, mouse.row)
        }
        MouseEventKind::ScrollUp => app.scroll_by(-app.scroll_step() * WHEEL_ROWS),
        MouseEventKind::ScrollDown => app.scroll_by(app.scroll_step() * WHEEL_ROWS),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
