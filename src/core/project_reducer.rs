use crate::domain::action::{Location, ProjectAction};
use crate::domain::model::ProjectState;
use crate::domain::ports::Reducer;

/// Reducer for project data: the floating pool, the pairing boards and who sits where.
///
/// Every action works on a fresh copy of the previous state. Indices that do not
/// point at an existing board or person leave the state as it was.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectReducer;

impl Reducer for ProjectReducer {
    type State = ProjectState;
    type Action = ProjectAction;

    fn default_state(&self) -> ProjectState {
        ProjectState::default()
    }

    fn apply(&self, state: &ProjectState, action: &ProjectAction) -> ProjectState {
        match action {
            ProjectAction::LoadProject { project } => project.clone(),
            ProjectAction::MovePerson {
                from_pairing_board_index,
                to_pairing_board_index,
                person_index,
            } => move_person(
                state,
                *from_pairing_board_index,
                *to_pairing_board_index,
                *person_index,
            ),
            ProjectAction::ResetPairingBoard => reset_pairing_boards(state),
            ProjectAction::SmartResetBoard => smart_reset_pairing_boards(state),
            ProjectAction::DeletePerson {
                pairing_board_index,
                person_index,
            } => delete_person(state, *pairing_board_index, *person_index),
            ProjectAction::DeletePairingBoard {
                pairing_board_index,
            } => delete_pairing_board(state, *pairing_board_index),
            ProjectAction::Unknown => state.clone(),
        }
    }
}

fn move_person(
    state: &ProjectState,
    from: Location,
    to: Location,
    person_index: usize,
) -> ProjectState {
    let mut next = state.clone();

    // 目的地不存在時不能先移除，否則人會消失
    if next.collection(to).is_none() {
        return next;
    }

    let Some(person) = next
        .collection_mut(from)
        .filter(|people| person_index < people.len())
        .map(|people| people.remove(person_index))
    else {
        return next;
    };

    if let Some(destination) = next.collection_mut(to) {
        destination.push(person);
    }
    next
}

fn reset_pairing_boards(state: &ProjectState) -> ProjectState {
    let mut next = state.clone();
    for board in next.pairing_boards.iter_mut().filter(|board| !board.exempt) {
        next.people.append(&mut board.people);
    }
    next
}

/// Keeps the first person on every non-exempt board and floats everyone else,
/// taking them off the end of the board first.
fn smart_reset_pairing_boards(state: &ProjectState) -> ProjectState {
    let mut next = state.clone();
    for board in next
        .pairing_boards
        .iter_mut()
        .filter(|board| !board.exempt && board.people.len() > 1)
    {
        next.people.extend(board.people.drain(1..).rev());
    }
    next
}

fn delete_person(state: &ProjectState, location: Location, person_index: usize) -> ProjectState {
    let mut next = state.clone();
    if let Some(people) = next
        .collection_mut(location)
        .filter(|people| person_index < people.len())
    {
        people.remove(person_index);
    }
    next
}

fn delete_pairing_board(state: &ProjectState, pairing_board_index: usize) -> ProjectState {
    let mut next = state.clone();
    if pairing_board_index < next.pairing_boards.len() {
        let board = next.pairing_boards.remove(pairing_board_index);
        next.people.extend(board.people);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PairingBoard, Person};

    fn crew() -> ProjectState {
        ProjectState {
            id: 7,
            people: vec![Person::new("Albert Einstein")],
            pairing_boards: vec![
                PairingBoard::new(
                    "USS Enterprise",
                    vec![Person::new("Captain Kirk"), Person::new("Spock")],
                ),
                PairingBoard::new("Klingon Warbird", vec![]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_state() {
        let state = ProjectReducer.reduce(None, &ProjectAction::Unknown);
        assert_eq!(state, ProjectState::default());
        assert_eq!(state.id, 0);
    }

    #[test]
    fn test_unknown_action_returns_previous_state() {
        let before = crew();
        assert_eq!(ProjectReducer.reduce(Some(&before), &ProjectAction::Unknown), before);
    }

    #[test]
    fn test_move_within_same_collection_moves_to_end() {
        let before = crew();
        let action = ProjectAction::MovePerson {
            from_pairing_board_index: Location::Board(0),
            to_pairing_board_index: Location::Board(0),
            person_index: 0,
        };

        let after = ProjectReducer.reduce(Some(&before), &action);

        assert_eq!(
            after.pairing_boards[0].people,
            vec![Person::new("Spock"), Person::new("Captain Kirk")]
        );
        assert_eq!(after.total_people(), before.total_people());
    }

    #[test]
    fn test_move_to_missing_board_keeps_person() {
        let before = crew();
        let action = ProjectAction::MovePerson {
            from_pairing_board_index: Location::Board(0),
            to_pairing_board_index: Location::Board(9),
            person_index: 0,
        };

        assert_eq!(ProjectReducer.reduce(Some(&before), &action), before);
    }

    #[test]
    fn test_out_of_range_person_is_ignored() {
        let before = crew();
        let delete = ProjectAction::DeletePerson {
            pairing_board_index: Location::Board(1),
            person_index: 0,
        };
        let drop_board = ProjectAction::DeletePairingBoard {
            pairing_board_index: 2,
        };

        assert_eq!(ProjectReducer.reduce(Some(&before), &delete), before);
        assert_eq!(ProjectReducer.reduce(Some(&before), &drop_board), before);
    }

    #[test]
    fn test_smart_reset_floats_excess_from_the_end() {
        let before = ProjectState {
            pairing_boards: vec![PairingBoard::new(
                "BOARD3",
                vec![Person::new("Bob"), Person::new("Jim"), Person::new("Alice")],
            )],
            ..Default::default()
        };

        let after = ProjectReducer.reduce(Some(&before), &ProjectAction::SmartResetBoard);

        assert_eq!(after.pairing_boards[0].people, vec![Person::new("Bob")]);
        assert_eq!(after.people, vec![Person::new("Alice"), Person::new("Jim")]);
    }

    #[test]
    fn test_duplicate_names_are_distinct_people() {
        let mut before = crew();
        before.people = vec![Person::new("Data"), Person::new("Data")];
        let action = ProjectAction::DeletePerson {
            pairing_board_index: Location::Floating,
            person_index: 1,
        };

        let after = ProjectReducer.reduce(Some(&before), &action);

        assert_eq!(after.people, vec![Person::new("Data")]);
        assert_eq!(after.total_people(), before.total_people() - 1);
    }
}
