use crate::domain::action::SettingsAction;
use crate::domain::model::SettingsState;
use crate::domain::ports::Reducer;

/// Reducer for transient UI settings. Each action replaces only its own leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Action = SettingsAction;

    fn default_state(&self) -> SettingsState {
        SettingsState::default()
    }

    fn apply(&self, state: &SettingsState, action: &SettingsAction) -> SettingsState {
        let mut next = state.clone();
        match action {
            SettingsAction::SetNewPersonModalOpen { is_open } => {
                next.modal.is_new_person_modal_open = *is_open;
            }
            SettingsAction::SetNewPairingBoardModalOpen { is_open } => {
                next.modal.is_new_pairing_board_modal_open = *is_open;
            }
            SettingsAction::SetNewPersonModalErrorMessage { error_message } => {
                next.modal.new_person_modal_error_message = error_message.clone();
            }
            SettingsAction::SetNewPairingBoardModalErrorMessage { error_message } => {
                next.modal.new_pairing_board_modal_error_message = error_message.clone();
            }
            SettingsAction::SetPairingBoardErrorMessage {
                pairing_board_id,
                error_message,
            } => {
                next.pairing_board_errors
                    .insert(pairing_board_id.clone(), error_message.clone());
            }
            SettingsAction::ClearPairingBoardErrorMessage { pairing_board_id } => {
                next.pairing_board_errors.remove(pairing_board_id);
            }
            SettingsAction::SetPairingHistoryPanelOpen { is_open } => {
                next.pairing_history_panel.is_open = *is_open;
            }
            SettingsAction::Unknown => {}
        }
        next
    }
}
