//! Click, key and hover handling through `App`.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use landing::page::{SectionId, NAV_LINKS};
use landing::ui::hit::HitTarget;
use landing::ui::input::handle_key;
use landing::ui::nav::{FADED_OPACITY, FULL_OPACITY};

fn press(app: &mut landing::ui::app::App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

// -- Modal --------------------------------------------------------------------

#[test]
fn hero_button_opens_modal_and_close_control_hides_it() {
    let mut app = make_app();
    click_target(&mut app, &HitTarget::OpenAccount);
    assert!(app.modal().is_visible());

    click_target(&mut app, &HitTarget::ModalClose);
    assert!(!app.modal().is_visible());
}

#[test]
fn overlay_click_closes_but_box_click_does_not() {
    let mut app = make_app();
    app.open_modal();

    let modal = screen_rect(&app, &HitTarget::ModalBox);
    app.on_click(modal.x + 2, modal.y + 3);
    assert!(app.modal().is_visible());

    app.on_click(0, 0);
    assert!(!app.modal().is_visible());
}

#[test]
fn escape_closes_open_modal_only() {
    let mut app = make_app();
    press(&mut app, KeyCode::Esc);
    assert!(!app.modal().is_visible());

    press(&mut app, KeyCode::Char('o'));
    assert!(app.modal().is_visible());
    press(&mut app, KeyCode::Esc);
    assert!(!app.modal().is_visible());
}

#[test]
fn nav_open_account_link_opens_modal() {
    let mut app = make_app();
    let last = NAV_LINKS.len() - 1;
    click_target(&mut app, &HitTarget::NavLink(last));
    assert!(app.modal().is_visible());
}

#[test]
fn open_modal_blocks_page_clicks() {
    let mut app = make_app();
    let learn_more = screen_rect(&app, &HitTarget::LearnMore);
    app.open_modal();
    app.on_click(learn_more.x, learn_more.y);
    // The overlay absorbed the click and closed the modal; nothing scrolled.
    assert!(!app.modal().is_visible());
    assert!(!app.scroll().is_animating());
}

#[test]
fn slider_keys_work_while_modal_is_open() {
    let mut app = make_app();
    app.open_modal();
    press(&mut app, KeyCode::Right);
    assert_eq!(app.slider().current(), Some(1));
}

// -- Smooth scroll navigation -------------------------------------------------

#[test]
fn nav_link_scrolls_to_its_section() {
    let mut app = make_app();
    click_target(&mut app, &HitTarget::NavLink(1));
    assert!(app.scroll().is_animating());
    settle(&mut app);
    assert_eq!(app.scroll().offset, layout(&app).scroll_target(SectionId::Operations));
}

#[test]
fn click_between_nav_links_does_nothing() {
    let mut app = make_app();
    let first = screen_rect(&app, &HitTarget::NavLink(0));
    app.on_click(first.x + first.width + 1, first.y);
    assert!(!app.scroll().is_animating());
    assert!(!app.modal().is_visible());
}

#[test]
fn learn_more_scrolls_to_features() {
    let mut app = make_app();
    click_target(&mut app, &HitTarget::LearnMore);
    settle(&mut app);
    assert_eq!(app.scroll().offset, layout(&app).section(SectionId::Features).top);
}

#[test]
fn number_keys_scroll_to_sections() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('3'));
    settle(&mut app);
    assert_eq!(app.scroll().offset, layout(&app).scroll_target(SectionId::Testimonials));
}

#[test]
fn sticky_nav_stays_clickable() {
    let mut app = make_app();
    scroll_into_view(&mut app, SectionId::Testimonials);
    assert!(app.is_stuck());
    click_target(&mut app, &HitTarget::NavLink(0));
    settle(&mut app);
    assert_eq!(app.scroll().offset, layout(&app).scroll_target(SectionId::Features));
}

// -- Tabs ---------------------------------------------------------------------

#[test]
fn clicking_tab_activates_it() {
    let mut app = make_app();
    scroll_into_view(&mut app, SectionId::Operations);
    click_target(&mut app, &HitTarget::Tab(2));
    assert_eq!(app.tabs().active, 2);
    assert!(app.tabs().is_active(2));
    assert!(!app.tabs().is_active(0));
}

#[test]
fn click_in_tab_container_gap_is_noop() {
    let mut app = make_app();
    scroll_into_view(&mut app, SectionId::Operations);
    click_target(&mut app, &HitTarget::Tab(1));
    let container = screen_rect(&app, &HitTarget::TabContainer);
    app.on_click(container.x, container.y);
    assert_eq!(app.tabs().active, 1);
}

// -- Slider -------------------------------------------------------------------

#[test]
fn slider_buttons_move_slides() {
    let mut app = make_app();
    scroll_into_view(&mut app, SectionId::Testimonials);
    click_target(&mut app, &HitTarget::SliderNext);
    assert_eq!(app.slider().current(), Some(1));
    click_target(&mut app, &HitTarget::SliderPrev);
    click_target(&mut app, &HitTarget::SliderPrev);
    assert_eq!(app.slider().current(), Some(2));
}

#[test]
fn dot_click_goes_to_tagged_slide() {
    let mut app = make_app();
    scroll_into_view(&mut app, SectionId::Testimonials);
    click_target(
        &mut app,
        &HitTarget::Dot {
            tag: "2".to_string(),
        },
    );
    assert_eq!(app.slider().current(), Some(2));
    let carousel = app.slider().carousel().expect("carousel");
    assert_eq!(carousel.offsets(), &[-200, -100, 0]);
}

#[test]
fn goto_slide_jumps_and_ignores_out_of_range() {
    let mut app = make_app();
    app.goto_slide(2);
    assert_eq!(app.slider().current(), Some(2));
    let carousel = app.slider().carousel().expect("carousel");
    assert_eq!(carousel.active_dot().map(|dot| dot.slide), Some(2));

    app.goto_slide(7);
    assert_eq!(app.slider().current(), Some(2));
}

#[test]
fn click_between_dots_is_noop() {
    let mut app = make_app();
    scroll_into_view(&mut app, SectionId::Testimonials);
    let first = screen_rect(
        &app,
        &HitTarget::Dot {
            tag: "0".to_string(),
        },
    );
    app.on_click(first.x + 1, first.y);
    assert_eq!(app.slider().current(), Some(0));
}

// -- Hover fade ---------------------------------------------------------------

#[test]
fn hovering_nav_link_fades_siblings() {
    let mut app = make_app();
    let link = screen_rect(&app, &HitTarget::NavLink(2));
    app.on_pointer_move(link.x, link.y);
    let fade = app.nav_fade();
    assert_eq!(fade.hovered(), Some(2));
    assert_eq!(fade.link_opacity(2), FULL_OPACITY);
    assert_eq!(fade.link_opacity(0), FADED_OPACITY);
    assert_eq!(fade.brand_opacity(), FADED_OPACITY);

    app.on_pointer_move(0, 20);
    let fade = app.nav_fade();
    assert_eq!(fade.hovered(), None);
    assert_eq!(fade.link_opacity(0), FULL_OPACITY);
    assert_eq!(fade.brand_opacity(), FULL_OPACITY);
}
