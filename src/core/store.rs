use crate::domain::ports::Reducer;
use crate::utils::error::Result;

/// Holds the current state for one reducer and applies actions one at a time.
pub struct Store<R: Reducer> {
    reducer: R,
    state: R::State,
    dispatched: usize,
}

impl<R: Reducer> Store<R> {
    pub fn new(reducer: R) -> Self {
        let state = reducer.default_state();
        Self::with_state(reducer, state)
    }

    pub fn with_state(reducer: R, state: R::State) -> Self {
        Self {
            reducer,
            state,
            dispatched: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn into_state(self) -> R::State {
        self.state
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    pub fn dispatch(&mut self, action: &R::Action) -> &R::State {
        tracing::debug!("Dispatching action #{}: {:?}", self.dispatched, action);
        self.state = self.reducer.reduce(Some(&self.state), action);
        self.dispatched += 1;
        &self.state
    }

    /// Dispatches only if `check` accepts the action against the current state.
    pub fn try_dispatch<F>(&mut self, action: &R::Action, check: F) -> Result<&R::State>
    where
        F: FnOnce(&R::State, &R::Action) -> Result<()>,
    {
        if let Err(e) = check(&self.state, action) {
            tracing::warn!("Refusing action #{}: {}", self.dispatched, e);
            return Err(e);
        }
        Ok(self.dispatch(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project_reducer::ProjectReducer;
    use crate::core::settings_reducer::SettingsReducer;
    use crate::domain::action::{Location, ProjectAction, SettingsAction};
    use crate::domain::model::{PairingBoard, Person, ProjectState};
    use crate::utils::error::PairingError;

    #[test]
    fn test_new_store_starts_from_default_state() {
        let store = Store::new(SettingsReducer);
        assert_eq!(store.state(), &SettingsReducer.default_state());
        assert_eq!(store.dispatched(), 0);
    }

    #[test]
    fn test_dispatch_applies_actions_in_order() {
        let project = ProjectState {
            id: 7,
            people: vec![Person::new("Captain Kirk")],
            pairing_boards: vec![PairingBoard::new("USS Enterprise", vec![])],
            ..Default::default()
        };
        let mut store = Store::new(ProjectReducer);

        store.dispatch(&ProjectAction::LoadProject { project });
        store.dispatch(&ProjectAction::MovePerson {
            from_pairing_board_index: Location::Floating,
            to_pairing_board_index: Location::Board(0),
            person_index: 0,
        });

        assert_eq!(store.dispatched(), 2);
        assert!(store.state().people.is_empty());
        assert_eq!(
            store.state().pairing_boards[0].people,
            vec![Person::new("Captain Kirk")]
        );
    }

    #[test]
    fn test_try_dispatch_refuses_when_check_fails() {
        let mut store = Store::new(SettingsReducer);
        let action = SettingsAction::SetPairingHistoryPanelOpen { is_open: true };

        let result = store.try_dispatch(&action, |_, _| {
            Err(PairingError::InvalidActionError {
                position: 0,
                message: "nope".to_string(),
            })
        });

        assert!(result.is_err());
        assert!(!store.state().pairing_history_panel.is_open);
        assert_eq!(store.dispatched(), 0);
    }
}
