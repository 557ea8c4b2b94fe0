//! Screen-space hit testing.
//!
//! Regions are pushed outermost first, so a later region nested inside an
//! earlier one wins. Event delegation works like the DOM: a handler attached
//! to a container asks for the closest matching target under the pointer and
//! does nothing when there is none (e.g. a click in the gap between dots).

use ratatui::layout::{Position, Rect};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    NavBar,
    NavBrand,
    /// Container around the navigation links.
    NavLinks,
    NavLink(usize),
    LearnMore,
    OpenAccount,
    TabContainer,
    Tab(usize),
    SliderPrev,
    SliderNext,
    DotContainer,
    Dot { tag: String },
    Overlay,
    ModalBox,
    ModalClose,
}

impl HitTarget {
    pub fn is_nav_link(&self) -> bool {
        matches!(self, Self::NavLink(_))
    }

    pub fn is_tab(&self) -> bool {
        matches!(self, Self::Tab(_))
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, Self::Dot { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target`; empty rectangles are dropped.
    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Targets under the point, innermost first.
    pub fn targets_at(&self, x: u16, y: u16) -> impl Iterator<Item = &HitTarget> {
        let position = Position::new(x, y);
        self.regions
            .iter()
            .rev()
            .filter(move |(rect, _)| rect.contains(position))
            .map(|(_, target)| target)
    }

    /// Innermost target under the point.
    pub fn target_at(&self, x: u16, y: u16) -> Option<&HitTarget> {
        self.targets_at(x, y).next()
    }

    /// Closest target under the point (self or ancestor) matching `pred`.
    pub fn closest<P>(&self, x: u16, y: u16, pred: P) -> Option<&HitTarget>
    where
        P: Fn(&HitTarget) -> bool,
    {
        self.targets_at(x, y).find(|target| pred(target))
    }

    /// Whether the point lies inside a region equal to `container`.
    pub fn within(&self, x: u16, y: u16, container: &HitTarget) -> bool {
        self.targets_at(x, y).any(|target| target == container)
    }

    pub fn rect_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, candidate)| candidate == target)
            .map(|(rect, _)| *rect)
    }
}
