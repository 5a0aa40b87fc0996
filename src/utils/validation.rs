use crate::domain::action::{Location, ProjectAction};
use crate::domain::model::ProjectState;
use crate::utils::error::{PairingError, Result};

pub const SUPPORTED_OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PairingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PairingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PairingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(PairingError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(PairingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

fn describe(location: Location) -> String {
    match location {
        Location::Floating => "the floating pool".to_string(),
        Location::Board(index) => format!("pairing board {}", index),
    }
}

fn check_location(state: &ProjectState, location: Location) -> std::result::Result<usize, String> {
    state
        .collection(location)
        .map(Vec::len)
        .ok_or_else(|| {
            format!(
                "{} does not exist (project has {} boards)",
                describe(location),
                state.pairing_boards.len()
            )
        })
}

fn check_person(
    state: &ProjectState,
    location: Location,
    person_index: usize,
) -> std::result::Result<(), String> {
    let len = check_location(state, location)?;
    if person_index >= len {
        return Err(format!(
            "person {} is out of range for {} ({} people)",
            person_index,
            describe(location),
            len
        ));
    }
    Ok(())
}

/// Checks that every index in `action` points at something that exists in `state`.
///
/// `position` is the action's place in its script and only feeds the error.
pub fn validate_project_action(
    state: &ProjectState,
    action: &ProjectAction,
    position: usize,
) -> Result<()> {
    let outcome = match action {
        ProjectAction::MovePerson {
            from_pairing_board_index,
            to_pairing_board_index,
            person_index,
        } => check_person(state, *from_pairing_board_index, *person_index)
            .and_then(|_| check_location(state, *to_pairing_board_index).map(|_| ())),
        ProjectAction::DeletePerson {
            pairing_board_index,
            person_index,
        } => check_person(state, *pairing_board_index, *person_index),
        ProjectAction::DeletePairingBoard {
            pairing_board_index,
        } => check_location(state, Location::Board(*pairing_board_index)).map(|_| ()),
        ProjectAction::LoadProject { .. }
        | ProjectAction::ResetPairingBoard
        | ProjectAction::SmartResetBoard
        | ProjectAction::Unknown => Ok(()),
    };

    outcome.map_err(|message| PairingError::InvalidActionError { position, message })
}
