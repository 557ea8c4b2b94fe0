use crate::ui::mvi::Reducer;
use crate::ui::tabs::intent::TabsIntent;
use crate::ui::tabs::state::TabsState;

pub struct TabsReducer;

impl Reducer for TabsReducer {
    type State = TabsState;
    type Intent = TabsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TabsIntent::Init { count } => TabsState { active: 0, count },
            TabsIntent::Activate { tab } if tab < state.count => {
                tracing::debug!(tab, "tabs: activate");
                TabsState { active: tab, ..state }
            }
            TabsIntent::Activate { tab } => {
                tracing::debug!(tab, count = state.count, "tabs: ignoring unknown tab");
                state
            }
        }
    }
}
