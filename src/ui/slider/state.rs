use crate::ui::mvi::UiState;
use crate::ui::slider::carousel::Carousel;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SliderState {
    /// No slides configured; navigation does nothing.
    #[default]
    Empty,
    Active(Carousel),
}

impl UiState for SliderState {}

impl SliderState {
    pub fn carousel(&self) -> Option<&Carousel> {
        match self {
            Self::Active(carousel) => Some(carousel),
            Self::Empty => None,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.carousel().map(Carousel::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert_eq!(SliderState::default(), SliderState::Empty);
        assert_eq!(SliderState::default().current(), None);
    }
}
