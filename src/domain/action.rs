use crate::domain::model::ProjectState;
use crate::utils::error::{PairingError, Result};
use serde::{Deserialize, Serialize};

/// Where a person sits: the floating pool (`-1` on the wire) or a pairing board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Location {
    Floating,
    Board(usize),
}

impl TryFrom<i64> for Location {
    type Error = PairingError;

    fn try_from(index: i64) -> Result<Self> {
        match index {
            -1 => Ok(Location::Floating),
            n if n >= 0 => usize::try_from(n)
                .map(Location::Board)
                .map_err(|_| PairingError::InvalidLocation { index }),
            _ => Err(PairingError::InvalidLocation { index }),
        }
    }
}

impl From<Location> for i64 {
    fn from(location: Location) -> Self {
        match location {
            Location::Floating => -1,
            Location::Board(index) => index as i64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ProjectAction {
    LoadProject {
        project: ProjectState,
    },
    MovePerson {
        from_pairing_board_index: Location,
        to_pairing_board_index: Location,
        person_index: usize,
    },
    ResetPairingBoard,
    SmartResetBoard,
    DeletePerson {
        pairing_board_index: Location,
        person_index: usize,
    },
    DeletePairingBoard {
        pairing_board_index: usize,
    },
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum SettingsAction {
    SetNewPersonModalOpen {
        is_open: bool,
    },
    SetNewPairingBoardModalOpen {
        is_open: bool,
    },
    SetNewPersonModalErrorMessage {
        #[serde(default)]
        error_message: Option<String>,
    },
    SetNewPairingBoardModalErrorMessage {
        #[serde(default)]
        error_message: Option<String>,
    },
    SetPairingBoardErrorMessage {
        pairing_board_id: String,
        error_message: String,
    },
    ClearPairingBoardErrorMessage {
        pairing_board_id: String,
    },
    SetPairingHistoryPanelOpen {
        is_open: bool,
    },
    #[default]
    #[serde(other)]
    Unknown,
}

/// Parse one action object. An object without a `type` field is an unknown action.
fn parse_action<A>(value: serde_json::Value) -> Result<A>
where
    A: Default + for<'de> Deserialize<'de>,
{
    let untyped = value
        .as_object()
        .is_some_and(|object| !object.contains_key("type"));
    if untyped {
        return Ok(A::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn parse_actions<A>(value: serde_json::Value) -> Result<Vec<A>>
where
    A: Default + for<'de> Deserialize<'de>,
{
    match value {
        serde_json::Value::Array(items) => items.into_iter().map(parse_action).collect(),
        other => Ok(vec![parse_action(other)?]),
    }
}

/// Parse a project action script: a JSON array of actions or a single action.
pub fn parse_project_actions(value: serde_json::Value) -> Result<Vec<ProjectAction>> {
    parse_actions(value)
}

pub fn parse_settings_actions(value: serde_json::Value) -> Result<Vec<SettingsAction>> {
    parse_actions(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_wire_values() {
        assert_eq!(Location::try_from(-1).unwrap(), Location::Floating);
        assert_eq!(Location::try_from(3).unwrap(), Location::Board(3));
        assert!(Location::try_from(-2).is_err());
        assert_eq!(i64::from(Location::Floating), -1);
    }

    #[test]
    fn test_parse_move_person() {
        let action: ProjectAction = serde_json::from_value(json!({
            "type": "MOVE_PERSON",
            "fromPairingBoardIndex": -1,
            "toPairingBoardIndex": 1,
            "personIndex": 0
        }))
        .unwrap();

        assert_eq!(
            action,
            ProjectAction::MovePerson {
                from_pairing_board_index: Location::Floating,
                to_pairing_board_index: Location::Board(1),
                person_index: 0,
            }
        );
    }

    #[test]
    fn test_unrecognized_type_is_unknown() {
        let actions = parse_project_actions(json!([
            {"type": "RENAME_SPACESHIP", "name": "Defiant"},
            {},
            {"type": "RESET_PAIRING_BOARD"}
        ]))
        .unwrap();

        assert_eq!(
            actions,
            vec![
                ProjectAction::Unknown,
                ProjectAction::Unknown,
                ProjectAction::ResetPairingBoard
            ]
        );
    }

    #[test]
    fn test_rejects_negative_index_below_floating() {
        let result = parse_project_actions(json!({
            "type": "DELETE_PERSON",
            "pairingBoardIndex": -4,
            "personIndex": 0
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_settings_actions() {
        let actions = parse_settings_actions(json!([
            {"type": "SET_NEW_PERSON_MODAL_OPEN", "isOpen": true},
            {"type": "SET_PAIRING_BOARD_ERROR_MESSAGE", "pairingBoardId": "4", "errorMessage": "Name taken"}
        ]))
        .unwrap();

        assert_eq!(
            actions[1],
            SettingsAction::SetPairingBoardErrorMessage {
                pairing_board_id: "4".to_string(),
                error_message: "Name taken".to_string(),
            }
        );
    }
}
