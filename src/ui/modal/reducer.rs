use crate::ui::modal::intent::ModalIntent;
use crate::ui::modal::state::ModalState;
use crate::ui::mvi::Reducer;

pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::Open => ModalState::Shown,
            ModalIntent::Close => ModalState::Hidden,
            ModalIntent::Escape => match state {
                ModalState::Shown => ModalState::Hidden,
                hidden => hidden,
            },
        }
    }
}
