//! Hover fade for the navigation bar.
//!
//! Hovering a link dims its siblings and the brand mark; leaving restores
//! them. The terminal only reports pointer positions, so `pointer_moved`
//! turns consecutive positions into over/out transitions.

pub const FADED_OPACITY: f32 = 0.5;
pub const FULL_OPACITY: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NavFade {
    link_opacity: Vec<f32>,
    brand_opacity: f32,
    hovered: Option<usize>,
}

impl NavFade {
    pub fn new(link_count: usize) -> Self {
        Self {
            link_opacity: vec![FULL_OPACITY; link_count],
            brand_opacity: FULL_OPACITY,
            hovered: None,
        }
    }

    /// Set every link except `link`, and the brand, to `opacity`.
    pub fn handle_hover(&mut self, link: usize, opacity: f32) {
        if link >= self.link_opacity.len() {
            return;
        }
        for (i, value) in self.link_opacity.iter_mut().enumerate() {
            if i != link {
                *value = opacity;
            }
        }
        self.brand_opacity = opacity;
    }

    pub fn mouse_over(&mut self, link: usize) {
        self.handle_hover(link, FADED_OPACITY);
    }

    pub fn mouse_out(&mut self, link: usize) {
        self.handle_hover(link, FULL_OPACITY);
    }

    /// Pointer is now over `link` (or over no link at all).
    pub fn pointer_moved(&mut self, link: Option<usize>) {
        if link == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.mouse_out(previous);
        }
        if let Some(next) = link {
            self.mouse_over(next);
        }
        self.hovered = link;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn link_opacity(&self, link: usize) -> f32 {
        self.link_opacity.get(link).copied().unwrap_or(FULL_OPACITY)
    }

    pub fn brand_opacity(&self) -> f32 {
        self.brand_opacity
    }

    pub fn is_faded(opacity: f32) -> bool {
        opacity < FULL_OPACITY
    }
}
