//! Document geometry.
//!
//! Every interactive block of the page gets a rectangle in *document*
//! coordinates: `x` is a terminal column, `y` is a row of the full page,
//! independent of the current scroll offset. The renderer draws into a
//! document-sized buffer using these rectangles and the hit map translates
//! them into screen space, so both always agree.

use ratatui::layout::Rect;

use crate::config::PageContent;

const MIN_HEADER_ROWS: u16 = 16;
const SECTION_TITLE_ROWS: u16 = 4;
const SECTION_PADDING: u16 = 1;
const FEATURE_ROWS: u16 = 8;
const TAB_BAR_ROWS: u16 = 3;
const TAB_PANEL_ROWS: u16 = 7;
const TAB_GAP: u16 = 2;
const SLIDER_ROWS: u16 = 9;
const SIGNUP_ROWS: u16 = 9;
const FOOTER_ROWS: u16 = 4;
const NAV_LINK_GAP: u16 = 3;

/// Terminal cells used by one feature image.
pub const IMAGE_COLUMNS: u16 = 24;
pub const IMAGE_ROWS: u16 = 6;

pub const OPEN_ACCOUNT_LABEL: &str = "Open account";
pub const LEARN_MORE_LABEL: &str = "Learn more ↓";
pub const SIGNUP_BUTTON_LABEL: &str = "Open your free account today!";
pub const SLIDER_PREV_LABEL: &str = "◀";
pub const SLIDER_NEXT_LABEL: &str = "▶";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum SectionId {
    Header,
    Features,
    Operations,
    Testimonials,
    SignUp,
    Footer,
}

impl SectionId {
    /// Sections that start hidden and are revealed on first sight.
    pub const REVEALABLE: [SectionId; 4] = [
        SectionId::Features,
        SectionId::Operations,
        SectionId::Testimonials,
        SectionId::SignUp,
    ];

    /// Small caps label printed above the section heading.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Header => "",
            SectionId::Features => "FEATURES",
            SectionId::Operations => "OPERATIONS",
            SectionId::Testimonials => "NOT SURE YET?",
            SectionId::SignUp => "",
            SectionId::Footer => "",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SectionId::Features => "Everything you need in a modern bank and more.",
            SectionId::Operations => "Everything as simple as possible, but no simpler.",
            SectionId::Testimonials => "Millions of users are already making their lives simpler.",
            SectionId::Header | SectionId::SignUp | SectionId::Footer => "",
        }
    }
}

/// What a navigation link does when activated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavAction {
    ScrollTo(SectionId),
    OpenModal,
}

pub const NAV_LINKS: [(&str, NavAction); 4] = [
    ("Features", NavAction::ScrollTo(SectionId::Features)),
    ("Operations", NavAction::ScrollTo(SectionId::Operations)),
    ("Testimonials", NavAction::ScrollTo(SectionId::Testimonials)),
    (OPEN_ACCOUNT_LABEL, NavAction::OpenModal),
];

/// Vertical span of a block, in document rows.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Extent {
    pub top: u16,
    pub height: u16,
}

impl Extent {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

impl From<Rect> for Extent {
    fn from(rect: Rect) -> Self {
        Extent::new(rect.y, rect.height)
    }
}

/// Navigation bar geometry, anchored at row `bar.y`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavGeometry {
    pub bar: Rect,
    pub brand: Rect,
    /// Container around all links; clicks between links land here only.
    pub links: Rect,
    pub link_rects: Vec<Rect>,
}

impl NavGeometry {
    pub fn compute(width: u16, height: u16, brand: &str, top: u16) -> Self {
        let bar = Rect::new(0, top, width, height);
        let line = top + height / 2;
        let brand_rect = Rect::new(2.min(width), line, text_width(brand) + 2, 1);

        let widths: Vec<u16> = NAV_LINKS.iter().map(|(label, _)| text_width(label)).collect();
        let total = widths.iter().sum::<u16>()
            + NAV_LINK_GAP * (widths.len().saturating_sub(1) as u16);
        let start = width
            .saturating_sub(total + 2)
            .max(brand_rect.x + brand_rect.width + 2);

        let mut x = start;
        let link_rects = widths
            .iter()
            .map(|w| {
                let rect = Rect::new(x, line, (*w).min(width.saturating_sub(x)), 1);
                x = x.saturating_add(w + NAV_LINK_GAP);
                rect
            })
            .collect();

        let links = Rect::new(
            start.saturating_sub(1),
            top,
            (total + 2).min(width.saturating_sub(start.saturating_sub(1))),
            height,
        );

        Self {
            bar,
            brand: brand_rect,
            links,
            link_rects,
        }
    }
}

/// Positions of every block of the page for one terminal size.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub width: u16,
    pub viewport_height: u16,
    pub nav: NavGeometry,
    pub hero_title: Rect,
    pub hero_subtitle: Rect,
    pub hero_open_account: Rect,
    pub learn_more: Rect,
    pub feature_images: Vec<Rect>,
    pub feature_texts: Vec<Rect>,
    pub tab_bar: Rect,
    pub tabs: Vec<Rect>,
    pub tab_panel: Rect,
    pub slider: Rect,
    pub slider_prev: Rect,
    pub slider_next: Rect,
    pub dot_strip: Rect,
    pub dots: Vec<Rect>,
    pub signup_title: Rect,
    pub signup_open_account: Rect,
    pub footer: Rect,
    pub total_height: u16,
    sections: Vec<(SectionId, Extent)>,
}

impl PageLayout {
    pub fn compute(width: u16, viewport_height: u16, content: &PageContent, nav_height: u16) -> Self {
        let inner_width = width.saturating_sub(4);
        let mut sections = Vec::with_capacity(6);

        // Header: full viewport height, nav on top.
        let header_height = viewport_height.max(MIN_HEADER_ROWS);
        let nav = NavGeometry::compute(width, nav_height, &content.brand, 0);
        let hero_y = (header_height / 2).saturating_sub(3).max(nav_height + 1);
        let hero_title = Rect::new(2, hero_y, inner_width, 1);
        let hero_subtitle = Rect::new(2, hero_y + 2, inner_width, 1);
        let hero_open_account = centered_button(width, OPEN_ACCOUNT_LABEL, hero_y + 4);
        let learn_more = centered_button(width, LEARN_MORE_LABEL, header_height.saturating_sub(2));
        sections.push((SectionId::Header, Extent::new(0, header_height)));
        let mut top = header_height;

        // Features: image and text alternate sides.
        let image_width = IMAGE_COLUMNS.min(width / 2);
        let text_width_cols = width.saturating_sub(image_width + 7);
        let mut feature_images = Vec::with_capacity(content.features.len());
        let mut feature_texts = Vec::with_capacity(content.features.len());
        for i in 0..content.features.len() as u16 {
            let block_top = top + SECTION_TITLE_ROWS + i * FEATURE_ROWS + 1;
            let (image_x, text_x) = if i % 2 == 0 {
                (2, 2 + image_width + 3)
            } else {
                (width.saturating_sub(2 + image_width), 2)
            };
            feature_images.push(Rect::new(image_x, block_top, image_width, IMAGE_ROWS));
            feature_texts.push(Rect::new(text_x, block_top, text_width_cols, IMAGE_ROWS));
        }
        let features_height = SECTION_TITLE_ROWS
            + FEATURE_ROWS * content.features.len() as u16
            + SECTION_PADDING;
        sections.push((SectionId::Features, Extent::new(top, features_height)));
        top += features_height;

        // Operations: tab bar above one content panel.
        let tab_bar = Rect::new(2, top + SECTION_TITLE_ROWS, inner_width, TAB_BAR_ROWS);
        let tab_widths: Vec<u16> = content
            .tabs
            .iter()
            .map(|tab| text_width(&tab.label) + 4)
            .collect();
        let tabs_total = tab_widths.iter().sum::<u16>()
            + TAB_GAP * (tab_widths.len().saturating_sub(1) as u16);
        let mut x = tab_bar.x + tab_bar.width.saturating_sub(tabs_total) / 2;
        let tabs = tab_widths
            .iter()
            .map(|w| {
                let rect = Rect::new(x, tab_bar.y, (*w).min(width.saturating_sub(x)), TAB_BAR_ROWS);
                x = x.saturating_add(w + TAB_GAP);
                rect
            })
            .collect();
        let tab_panel = Rect::new(2, tab_bar.y + TAB_BAR_ROWS, inner_width, TAB_PANEL_ROWS);
        let operations_height = SECTION_TITLE_ROWS + TAB_BAR_ROWS + TAB_PANEL_ROWS + SECTION_PADDING;
        sections.push((SectionId::Operations, Extent::new(top, operations_height)));
        top += operations_height;

        // Testimonials: slider with side buttons, dot strip underneath.
        let slider = Rect::new(6, top + SECTION_TITLE_ROWS, width.saturating_sub(12), SLIDER_ROWS);
        let button_y = slider.y + SLIDER_ROWS / 2;
        let slider_prev = Rect::new(1, button_y, 3, 1);
        let slider_next = Rect::new(width.saturating_sub(4), button_y, 3, 1);
        let dot_count = content.slides.len() as u16;
        let strip_width = dot_count * 2 + 1;
        let dot_strip = Rect::new(
            width.saturating_sub(strip_width) / 2,
            slider.y + SLIDER_ROWS + 1,
            strip_width.min(width),
            1,
        );
        let dots = (0..dot_count)
            .map(|i| Rect::new(dot_strip.x + 1 + 2 * i, dot_strip.y, 1, 1))
            .collect();
        let testimonials_height = SECTION_TITLE_ROWS + SLIDER_ROWS + 2 + SECTION_PADDING;
        sections.push((SectionId::Testimonials, Extent::new(top, testimonials_height)));
        top += testimonials_height;

        // Sign-up call to action.
        let signup_title = Rect::new(2, top + 2, inner_width, 2);
        let signup_open_account = centered_button(width, SIGNUP_BUTTON_LABEL, top + 5);
        sections.push((SectionId::SignUp, Extent::new(top, SIGNUP_ROWS)));
        top += SIGNUP_ROWS;

        let footer = Rect::new(0, top, width, FOOTER_ROWS);
        sections.push((SectionId::Footer, Extent::new(top, FOOTER_ROWS)));
        top += FOOTER_ROWS;

        Self {
            width,
            viewport_height,
            nav,
            hero_title,
            hero_subtitle,
            hero_open_account,
            learn_more,
            feature_images,
            feature_texts,
            tab_bar,
            tabs,
            tab_panel,
            slider,
            slider_prev,
            slider_next,
            dot_strip,
            dots,
            signup_title,
            signup_open_account,
            footer,
            total_height: top,
            sections,
        }
    }

    pub fn section(&self, id: SectionId) -> Extent {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, extent)| *extent)
            .unwrap_or_default()
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, Extent)> + '_ {
        self.sections.iter().copied()
    }

    /// Rectangle for the section's label and heading.
    pub fn section_title(&self, id: SectionId) -> Rect {
        let extent = self.section(id);
        Rect::new(2, extent.top + 1, self.width.saturating_sub(4), 2)
    }

    pub fn image_extent(&self, index: usize) -> Option<Extent> {
        self.feature_images.get(index).map(|rect| Extent::from(*rect))
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    /// Offset that brings the section's top to the top of the viewport.
    pub fn scroll_target(&self, id: SectionId) -> u16 {
        self.section(id).top.min(self.max_scroll())
    }
}

pub fn text_width(text: &str) -> u16 {
    text.chars().count().min(u16::MAX as usize) as u16
}

fn centered_button(width: u16, label: &str, y: u16) -> Rect {
    let button_width = (text_width(label) + 4).min(width);
    Rect::new(width.saturating_sub(button_width) / 2, y, button_width, 1)
}
