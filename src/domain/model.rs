use crate::domain::action::Location;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A person on the project. Fields other than `name` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingBoard {
    pub name: String,
    #[serde(default)]
    pub people: Vec<Person>,
    /// Exempt boards are skipped by the reset actions.
    #[serde(default, skip_serializing_if = "is_false")]
    pub exempt: bool,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl PairingBoard {
    pub fn new(name: impl Into<String>, people: Vec<Person>) -> Self {
        Self {
            name: name.into(),
            people,
            exempt: false,
            extra: HashMap::new(),
        }
    }

    pub fn exempt(mut self) -> Self {
        self.exempt = true;
        self
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Project data: the floating pool plus every pairing board.
///
/// A person lives in exactly one place, either `people` (floating) or one
/// board's `people`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub pairing_boards: Vec<PairingBoard>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ProjectState {
    pub fn collection(&self, location: Location) -> Option<&Vec<Person>> {
        match location {
            Location::Floating => Some(&self.people),
            Location::Board(index) => self.pairing_boards.get(index).map(|board| &board.people),
        }
    }

    pub(crate) fn collection_mut(&mut self, location: Location) -> Option<&mut Vec<Person>> {
        match location {
            Location::Floating => Some(&mut self.people),
            Location::Board(index) => self
                .pairing_boards
                .get_mut(index)
                .map(|board| &mut board.people),
        }
    }

    pub fn total_people(&self) -> usize {
        self.people.len()
            + self
                .pairing_boards
                .iter()
                .map(|board| board.people.len())
                .sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    #[serde(default)]
    pub is_new_person_modal_open: bool,
    #[serde(default)]
    pub is_new_pairing_board_modal_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_person_modal_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_pairing_board_modal_error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingHistoryPanel {
    #[serde(default)]
    pub is_open: bool,
}

/// Transient UI state. Board errors are keyed by board identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    #[serde(default)]
    pub modal: ModalState,
    #[serde(default)]
    pub pairing_board_errors: BTreeMap<String, String>,
    #[serde(default)]
    pub pairing_history_panel: PairingHistoryPanel,
}
