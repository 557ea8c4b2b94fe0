//! Carousel controller.
//!
//! Owns the current slide index and the derived presentation state: one
//! horizontal offset per slide (percent of the slider width, relative to the
//! active slide) and one indicator dot per slide, exactly one of them active.

/// Indicator for one slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dot {
    pub slide: usize,
    /// Slide number as carried by the indicator, recovered on click.
    pub tag: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    slide_count: usize,
    offsets: Vec<i32>,
    dots: Vec<Dot>,
}

impl Carousel {
    /// Builds the controller for `slide_count` slides with slide 0 active.
    ///
    /// Returns `None` for an empty slide set.
    pub fn new(slide_count: usize) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        let mut carousel = Self {
            current: 0,
            slide_count,
            offsets: vec![0; slide_count],
            dots: Vec::with_capacity(slide_count),
        };
        carousel.init();
        Some(carousel)
    }

    fn init(&mut self) {
        self.create_dots();
        self.render(0);
    }

    fn create_dots(&mut self) {
        self.dots = (0..self.slide_count)
            .map(|slide| Dot {
                slide,
                tag: slide.to_string(),
                active: false,
            })
            .collect();
    }

    /// Position every slide relative to `index` and mark its dot active.
    ///
    /// `index` is not range-checked: an out-of-range value shifts all slides
    /// off-center and leaves no dot active.
    pub fn render(&mut self, index: usize) {
        for (i, offset) in self.offsets.iter_mut().enumerate() {
            *offset = slide_offset(i, index);
        }
        self.set_active_dot(index);
    }

    pub fn set_active_dot(&mut self, index: usize) {
        for dot in &mut self.dots {
            dot.active = dot.slide == index;
        }
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.current = if self.current == self.slide_count - 1 {
            0
        } else {
            self.current + 1
        };
        self.render(self.current);
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.current = if self.current == 0 {
            self.slide_count - 1
        } else {
            self.current - 1
        };
        self.render(self.current);
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn goto_slide(&mut self, index: usize) -> bool {
        if index >= self.slide_count {
            return false;
        }
        self.current = index;
        self.render(index);
        true
    }

    /// Slide number carried by a dot tag, if it names an existing slide.
    pub fn slide_for_tag(&self, tag: &str) -> Option<usize> {
        tag.trim()
            .parse::<usize>()
            .ok()
            .filter(|slide| *slide < self.slide_count)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn offset(&self, slide: usize) -> Option<i32> {
        self.offsets.get(slide).copied()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn active_dot(&self) -> Option<&Dot> {
        self.dots.iter().find(|dot| dot.active)
    }
}

/// Percent offset of `slide` when `index` is active, saturating at the `i32` range.
fn slide_offset(slide: usize, index: usize) -> i32 {
    let percent = (slide as i128 - index as i128).saturating_mul(100);
    i32::try_from(percent).unwrap_or(if percent < 0 { i32::MIN } else { i32::MAX })
}
