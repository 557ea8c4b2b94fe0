use ratatui::style::Color;

pub const BRAND_GREEN: Color = Color::Rgb(0x5e, 0xc5, 0x76);
pub const BRAND_YELLOW: Color = Color::Rgb(0xff, 0xcb, 0x03);
pub const BRAND_RED: Color = Color::Rgb(0xff, 0x58, 0x5f);
pub const PAGE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SECTION_RULE: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STICKY_NAV_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const FOOTER_BG: Color = Color::Rgb(0x1f, 0x1f, 0x1f);
pub const OVERLAY_BG: Color = Color::Rgb(0x10, 0x10, 0x10);
pub const MODAL_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BLUR: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Accent per tab, cycling when there are more tabs than colors.
pub const TAB_ACCENTS: [Color; 3] = [BRAND_YELLOW, BRAND_GREEN, BRAND_RED];

pub fn tab_accent(tab: usize) -> Color {
    TAB_ACCENTS[tab % TAB_ACCENTS.len()]
}
