use crate::config::Config;
use crate::page::{
    Extent, IntersectionObserver, NavAction, NavGeometry, ObserverOptions, PageLayout, SectionId,
    Thumbnail, NAV_LINKS,
};
use crate::ui::hit::{HitMap, HitTarget};
use crate::ui::layout::{body_rect, modal_close_rect, modal_rect, to_screen};
use crate::ui::lazy::{LazyImageIntent, LazyImageReducer, LazyImagesState};
use crate::ui::modal::{ModalIntent, ModalReducer, ModalState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::NavFade;
use crate::ui::scroll::{ScrollIntent, ScrollReducer, ScrollState};
use crate::ui::slider::{SliderIntent, SliderReducer, SliderState};
use crate::ui::tabs::{TabsIntent, TabsReducer, TabsState};
use ratatui::layout::Rect;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Work the UI hands off to background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    LoadImage {
        id: usize,
        path: PathBuf,
        columns: u16,
        rows: u16,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: Config,
    /// Screen area the page is drawn into.
    body: Rect,
    layout: Option<PageLayout>,
    scroll: ScrollState,
    modal: ModalState,
    tabs: TabsState,
    /// Testimonial carousel (MVI pattern).
    slider: SliderState,
    images: LazyImagesState,
    nav_fade: NavFade,
    /// Navigation bar pinned to the top of the screen.
    stuck: bool,
    revealed: BTreeSet<SectionId>,
    header_observer: IntersectionObserver<SectionId>,
    section_observer: IntersectionObserver<SectionId>,
    image_observer: IntersectionObserver<usize>,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let nav_height = config.ui.nav_height;
        let mut header_observer = IntersectionObserver::new(ObserverOptions {
            threshold: 0.0,
            root_margin: -(nav_height as i32),
        });
        header_observer.observe(SectionId::Header);

        let mut section_observer = IntersectionObserver::new(ObserverOptions {
            threshold: config.observer.reveal_threshold,
            root_margin: 0,
        });
        for section in SectionId::REVEALABLE {
            section_observer.observe(section);
        }

        let mut image_observer = IntersectionObserver::new(ObserverOptions {
            threshold: 0.0,
            root_margin: config.observer.lazy_margin_rows as i32,
        });
        for id in 0..config.content.features.len() {
            image_observer.observe(id);
        }

        let slide_count = config.content.slides.len();
        let tab_count = config.content.tabs.len();
        let sources = config
            .content
            .features
            .iter()
            .map(|feature| (feature.image.clone(), feature.title.clone()))
            .collect();

        let mut app = Self {
            should_quit: false,
            config,
            body: Rect::default(),
            layout: None,
            scroll: ScrollState::default(),
            modal: ModalState::default(),
            tabs: TabsState::default(),
            slider: SliderState::default(),
            images: LazyImagesState::default(),
            nav_fade: NavFade::new(NAV_LINKS.len()),
            stuck: false,
            revealed: BTreeSet::new(),
            header_observer,
            section_observer,
            image_observer,
            command_sender: None,
            last_command_error: None,
        };
        app.dispatch_slider(SliderIntent::Init { slide_count });
        app.dispatch_tabs(TabsIntent::Init { count: tab_count });
        app.dispatch_images(LazyImageIntent::Init { sources });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn images(&self) -> &LazyImagesState {
        &self.images
    }

    pub fn nav_fade(&self) -> &NavFade {
        &self.nav_fade
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        !SectionId::REVEALABLE.contains(&section) || self.revealed.contains(&section)
    }

    pub fn is_observing_section(&self, section: SectionId) -> bool {
        self.section_observer.is_observing(section)
    }

    pub fn is_observing_image(&self, id: usize) -> bool {
        self.image_observer.is_observing(id)
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Terminal resized to `cols` x `rows`; rebuild the page geometry.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = body_rect(Rect::new(0, 0, cols, rows));
        let layout = PageLayout::compute(
            self.body.width,
            self.body.height,
            &self.config.content,
            self.config.ui.nav_height,
        );
        let max_offset = layout.max_scroll();
        self.layout = Some(layout);
        self.dispatch_scroll(ScrollIntent::SetBounds { max_offset });
        self.sync_viewport();
    }

    pub fn on_tick(&mut self) {
        if self.scroll.is_animating() {
            let divisor = self.config.ui.smooth_divisor;
            self.dispatch_scroll(ScrollIntent::Tick { divisor });
            self.sync_viewport();
        }
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    pub fn scroll_by(&mut self, delta: i32) {
        self.dispatch_scroll(ScrollIntent::ScrollBy { delta });
        self.sync_viewport();
    }

    /// Rows moved per arrow key or wheel notch.
    pub fn scroll_step(&self) -> i32 {
        self.config.ui.scroll_step.max(1) as i32
    }

    pub fn page_height(&self) -> i32 {
        self.body.height.saturating_sub(self.config.ui.nav_height).max(1) as i32
    }

    pub fn jump_to_top(&mut self) {
        self.dispatch_scroll(ScrollIntent::JumpTo { row: 0 });
        self.sync_viewport();
    }

    pub fn jump_to_bottom(&mut self) {
        let row = self.scroll.max_offset;
        self.dispatch_scroll(ScrollIntent::JumpTo { row });
        self.sync_viewport();
    }

    /// Smooth-scroll until `section` reaches the top of the viewport.
    pub fn scroll_to_section(&mut self, section: SectionId) {
        let Some(row) = self.layout.as_ref().map(|layout| layout.scroll_target(section)) else {
            return;
        };
        tracing::debug!(?section, row, "scroll to section");
        self.dispatch_scroll(ScrollIntent::SmoothTo { row });
    }

    // ========================================================================
    // Page controls
    // ========================================================================

    pub fn open_modal(&mut self) {
        tracing::debug!("modal: open");
        self.dispatch_modal(ModalIntent::Open);
        // The overlay now covers the navigation bar.
        self.nav_fade.pointer_moved(None);
    }

    pub fn close_modal(&mut self) {
        tracing::debug!("modal: close");
        self.dispatch_modal(ModalIntent::Close);
    }

    pub fn on_escape(&mut self) {
        self.dispatch_modal(ModalIntent::Escape);
    }

    pub fn next_slide(&mut self) {
        self.dispatch_slider(SliderIntent::Next);
    }

    pub fn previous_slide(&mut self) {
        self.dispatch_slider(SliderIntent::Previous);
    }

    /// Show `slide` directly. Out-of-range indices leave the slider unchanged.
    pub fn goto_slide(&mut self, slide: usize) {
        self.dispatch_slider(SliderIntent::GoTo { slide });
    }

    pub fn activate_tab(&mut self, tab: usize) {
        self.dispatch_tabs(TabsIntent::Activate { tab });
    }

    pub fn activate_nav_link(&mut self, link: usize) {
        match NAV_LINKS.get(link).map(|(_, action)| *action) {
            Some(NavAction::ScrollTo(section)) => self.scroll_to_section(section),
            Some(NavAction::OpenModal) => self.open_modal(),
            None => {}
        }
    }

    /// Left click at screen position (`x`, `y`).
    pub fn on_click(&mut self, x: u16, y: u16) {
        let hits = self.hit_map();

        if self.modal.is_visible() {
            match hits.target_at(x, y) {
                Some(HitTarget::ModalClose) | Some(HitTarget::Overlay) => self.close_modal(),
                _ => {}
            }
            return;
        }

        if hits.within(x, y, &HitTarget::NavLinks) {
            if let Some(HitTarget::NavLink(link)) = hits.closest(x, y, HitTarget::is_nav_link) {
                self.activate_nav_link(*link);
            }
            return;
        }

        if hits.within(x, y, &HitTarget::TabContainer) {
            if let Some(HitTarget::Tab(tab)) = hits.closest(x, y, HitTarget::is_tab) {
                self.activate_tab(*tab);
            }
            return;
        }

        if hits.within(x, y, &HitTarget::DotContainer) {
            if let Some(HitTarget::Dot { tag }) = hits.closest(x, y, HitTarget::is_dot) {
                self.dispatch_slider(SliderIntent::DotClicked { tag: tag.clone() });
            }
            return;
        }

        match hits.target_at(x, y) {
            Some(HitTarget::SliderPrev) => self.previous_slide(),
            Some(HitTarget::SliderNext) => self.next_slide(),
            Some(HitTarget::LearnMore) => self.scroll_to_section(SectionId::Features),
            Some(HitTarget::OpenAccount) => self.open_modal(),
            _ => {}
        }
    }

    /// Pointer moved to screen position (`x`, `y`).
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        let hits = self.hit_map();
        let link = match hits.closest(x, y, HitTarget::is_nav_link) {
            Some(HitTarget::NavLink(link)) => Some(*link),
            _ => None,
        };
        self.nav_fade.pointer_moved(link);
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Navigation bar geometry in screen coordinates, if any of it is visible.
    pub fn nav_on_screen(&self) -> Option<NavGeometry> {
        let layout = self.layout.as_ref()?;
        if self.stuck {
            return Some(NavGeometry::compute(
                self.body.width,
                self.config.ui.nav_height.min(self.body.height),
                &self.config.content.brand,
                self.body.y,
            ));
        }
        let scroll = self.scroll.offset;
        let bar = to_screen(layout.nav.bar, scroll, self.body)?;
        let place = |rect: Rect| to_screen(rect, scroll, self.body).unwrap_or_default();
        Some(NavGeometry {
            bar,
            brand: place(layout.nav.brand),
            links: place(layout.nav.links),
            link_rects: layout.nav.link_rects.iter().map(|rect| place(*rect)).collect(),
        })
    }

    /// Clickable regions for the current frame.
    pub fn hit_map(&self) -> HitMap {
        let mut map = HitMap::new();
        let Some(layout) = self.layout.as_ref() else {
            return map;
        };

        if self.modal.is_visible() {
            let modal = modal_rect(self.body);
            map.push(self.body, HitTarget::Overlay);
            map.push(modal, HitTarget::ModalBox);
            map.push(modal_close_rect(modal), HitTarget::ModalClose);
            return map;
        }

        let scroll = self.scroll.offset;
        let body = self.body;
        let push = |map: &mut HitMap, rect: Rect, target: HitTarget| {
            if let Some(rect) = to_screen(rect, scroll, body) {
                map.push(rect, target);
            }
        };

        push(&mut map, layout.hero_open_account, HitTarget::OpenAccount);
        push(&mut map, layout.learn_more, HitTarget::LearnMore);

        if self.is_revealed(SectionId::Operations) {
            push(&mut map, layout.tab_bar, HitTarget::TabContainer);
            for (tab, rect) in layout.tabs.iter().enumerate() {
                push(&mut map, *rect, HitTarget::Tab(tab));
            }
        }

        if self.is_revealed(SectionId::Testimonials) {
            push(&mut map, layout.slider_prev, HitTarget::SliderPrev);
            push(&mut map, layout.slider_next, HitTarget::SliderNext);
            push(&mut map, layout.dot_strip, HitTarget::DotContainer);
            if let Some(carousel) = self.slider.carousel() {
                for (dot, rect) in carousel.dots().iter().zip(&layout.dots) {
                    push(
                        &mut map,
                        *rect,
                        HitTarget::Dot {
                            tag: dot.tag.clone(),
                        },
                    );
                }
            }
        }

        if self.is_revealed(SectionId::SignUp) {
            push(&mut map, layout.signup_open_account, HitTarget::OpenAccount);
        }

        if let Some(nav) = self.nav_on_screen() {
            map.push(nav.bar, HitTarget::NavBar);
            map.push(nav.brand, HitTarget::NavBrand);
            map.push(nav.links, HitTarget::NavLinks);
            for (link, rect) in nav.link_rects.iter().enumerate() {
                map.push(*rect, HitTarget::NavLink(link));
            }
        }

        map
    }

    // ========================================================================
    // Viewport observers
    // ========================================================================

    /// Run the observers against the current viewport and apply their entries.
    fn sync_viewport(&mut self) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let viewport = Extent::new(self.scroll.offset, self.body.height);
        let header_entries = self
            .header_observer
            .update(viewport, |section| Some(layout.section(section)));
        let section_entries = self
            .section_observer
            .update(viewport, |section| Some(layout.section(section)));
        let image_entries = self
            .image_observer
            .update(viewport, |id| layout.image_extent(id));

        for entry in header_entries {
            let stuck = !entry.is_intersecting;
            if stuck != self.stuck {
                tracing::debug!(stuck, "sticky navigation");
            }
            self.stuck = stuck;
        }

        for entry in section_entries {
            if !entry.is_intersecting {
                continue;
            }
            tracing::debug!(section = ?entry.target, ratio = entry.ratio, "reveal section");
            self.revealed.insert(entry.target);
            self.section_observer.unobserve(entry.target);
        }

        for entry in image_entries {
            if !entry.is_intersecting {
                continue;
            }
            self.image_observer.unobserve(entry.target);
            self.dispatch_images(LazyImageIntent::Intersected { id: entry.target });
            self.request_image(entry.target);
        }
    }

    fn request_image(&mut self, id: usize) {
        let Some(image) = self.images.get(id) else {
            return;
        };
        let (columns, rows) = self
            .layout
            .as_ref()
            .and_then(|layout| layout.feature_images.get(id))
            .map(|rect| (rect.width, rect.height))
            .unwrap_or_default();
        let path = self.config.asset_path(&image.source);
        tracing::debug!(id, path = %path.display(), "lazy image: requesting source");

        let command = UiCommand::LoadImage {
            id,
            path,
            columns,
            rows,
        };
        if !self.send_command(command) {
            self.dispatch_images(LazyImageIntent::Failed {
                id,
                reason: "image loader unavailable".to_string(),
            });
        }
    }

    pub fn on_image_loaded(&mut self, id: usize, thumbnail: Thumbnail) {
        tracing::debug!(id, "lazy image: loaded");
        self.dispatch_images(LazyImageIntent::Loaded { id, thumbnail });
    }

    pub fn on_image_failed(&mut self, id: usize, reason: String) {
        tracing::warn!(id, %reason, "lazy image: failed to load");
        self.dispatch_images(LazyImageIntent::Failed { id, reason });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.last_command_error = Some("no command receiver attached".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("command send failed: {}", err));
                false
            }
        }
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    pub fn dispatch_slider(&mut self, intent: SliderIntent) {
        dispatch_mvi!(self, slider, SliderReducer, intent);
    }

    pub fn dispatch_modal(&mut self, intent: ModalIntent) {
        dispatch_mvi!(self, modal, ModalReducer, intent);
    }

    pub fn dispatch_tabs(&mut self, intent: TabsIntent) {
        dispatch_mvi!(self, tabs, TabsReducer, intent);
    }

    pub fn dispatch_scroll(&mut self, intent: ScrollIntent) {
        dispatch_mvi!(self, scroll, ScrollReducer, intent);
    }

    pub fn dispatch_images(&mut self, intent: LazyImageIntent) {
        dispatch_mvi!(self, images, LazyImageReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let mut app = App::new(Config::default());
        app.on_resize(100, 31);
        app
    }

    #[test]
    fn header_is_visible_and_nav_not_stuck_at_top() {
        let app = make_app();
        assert!(!app.is_stuck());
        assert!(app.nav_on_screen().is_some());
    }

    #[test]
    fn sections_start_hidden() {
        let app = make_app();
        for section in SectionId::REVEALABLE {
            assert!(!app.is_revealed(section), "{:?} revealed too early", section);
        }
        assert!(app.is_revealed(SectionId::Header));
    }

    #[test]
    fn scrolling_past_header_sticks_nav() {
        let mut app = make_app();
        app.scroll_by(30);
        assert!(app.is_stuck());
        app.jump_to_top();
        assert!(!app.is_stuck());
    }

    #[test]
    fn hidden_sections_have_no_click_targets() {
        let app = make_app();
        let map = app.hit_map();
        assert!(map.rect_of(&HitTarget::TabContainer).is_none());
        assert!(map.rect_of(&HitTarget::DotContainer).is_none());
        assert!(map.rect_of(&HitTarget::LearnMore).is_some());
    }

    #[test]
    fn modal_hit_map_only_has_overlay_and_box() {
        let mut app = make_app();
        app.open_modal();
        let map = app.hit_map();
        assert_eq!(map.len(), 3);
        assert!(map.rect_of(&HitTarget::NavBar).is_none());
    }

    #[test]
    fn resize_before_layout_is_required_for_clicks() {
        let mut app = App::new(Config::default());
        app.on_click(0, 0);
        assert!(!app.modal().is_visible());
        assert!(app.hit_map().is_empty());
    }
}
