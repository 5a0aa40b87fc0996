use crate::domain::model::ProjectState;
use crate::utils::error::{PairingError, Result};

/// Renders who sits where as CSV: `board,exempt,person`.
///
/// Boards come first in board order; floating people follow with an empty board name.
pub fn pairs_csv(state: &ProjectState) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["board", "exempt", "person"])?;

    for board in &state.pairing_boards {
        let exempt = if board.exempt { "true" } else { "false" };
        for person in &board.people {
            writer.write_record([board.name.as_str(), exempt, person.name.as_str()])?;
        }
    }
    for person in &state.people {
        writer.write_record(["", "false", person.name.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| PairingError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PairingError::ConfigError {
        message: format!("pairs report is not valid UTF-8: {}", e),
    })
}
