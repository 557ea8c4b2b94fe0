//! Viewport intersection tracking.
//!
//! A small counterpart of a browser intersection observer: targets are
//! registered by id, and every `update` compares each target's extent with
//! the (margin-adjusted) viewport. Callers get one entry per target the first
//! time it is evaluated and afterwards only when its intersecting state flips.

use crate::page::layout::Extent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction required to count as intersecting. `0.0` means any overlap.
    pub threshold: f32,
    /// Rows added above and below the viewport; negative values shrink it.
    pub root_margin: i32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
    pub ratio: f32,
}

#[derive(Debug)]
pub struct IntersectionObserver<T> {
    options: ObserverOptions,
    /// Observed targets with the last reported state (`None` = not yet reported).
    targets: Vec<(T, Option<bool>)>,
}

impl<T: Copy + PartialEq> IntersectionObserver<T> {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Start observing `target`. Observing twice is a no-op.
    pub fn observe(&mut self, target: T) {
        if !self.is_observing(target) {
            self.targets.push((target, None));
        }
    }

    pub fn unobserve(&mut self, target: T) {
        self.targets.retain(|(observed, _)| *observed != target);
    }

    pub fn is_observing(&self, target: T) -> bool {
        self.targets.iter().any(|(observed, _)| *observed == target)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Evaluate every target against `viewport` and return state changes.
    ///
    /// Targets whose extent is unknown are skipped and keep their state.
    pub fn update<F>(&mut self, viewport: Extent, extent_of: F) -> Vec<IntersectionEntry<T>>
    where
        F: Fn(T) -> Option<Extent>,
    {
        let options = self.options;
        let mut entries = Vec::new();
        for (target, last) in self.targets.iter_mut() {
            let Some(extent) = extent_of(*target) else {
                continue;
            };
            let ratio = intersection_ratio(extent, viewport, options.root_margin);
            let is_intersecting = if options.threshold <= 0.0 {
                overlaps(extent, viewport, options.root_margin)
            } else {
                ratio >= options.threshold
            };
            if *last != Some(is_intersecting) {
                *last = Some(is_intersecting);
                entries.push(IntersectionEntry {
                    target: *target,
                    is_intersecting,
                    ratio,
                });
            }
        }
        entries
    }
}

/// Root bounds after applying the margin, as `[top, bottom)` in signed rows.
fn root_bounds(viewport: Extent, root_margin: i32) -> (i32, i32) {
    let top = viewport.top as i32 - root_margin;
    let bottom = viewport.bottom() as i32 + root_margin;
    (top, bottom)
}

fn overlap_rows(target: Extent, viewport: Extent, root_margin: i32) -> i32 {
    let (root_top, root_bottom) = root_bounds(viewport, root_margin);
    if root_bottom <= root_top {
        return 0;
    }
    let top = (target.top as i32).max(root_top);
    let bottom = (target.bottom() as i32).min(root_bottom);
    (bottom - top).max(0)
}

fn overlaps(target: Extent, viewport: Extent, root_margin: i32) -> bool {
    if target.height == 0 {
        let (root_top, root_bottom) = root_bounds(viewport, root_margin);
        let row = target.top as i32;
        return root_top <= row && row < root_bottom;
    }
    overlap_rows(target, viewport, root_margin) > 0
}

/// Fraction of `target` that lies inside the margin-adjusted viewport.
pub fn intersection_ratio(target: Extent, viewport: Extent, root_margin: i32) -> f32 {
    if target.height == 0 {
        return if overlaps(target, viewport, root_margin) { 1.0 } else { 0.0 };
    }
    overlap_rows(target, viewport, root_margin) as f32 / target.height as f32
}
