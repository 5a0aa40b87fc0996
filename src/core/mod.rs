pub mod project_reducer;
pub mod replay;
pub mod report;
pub mod settings_reducer;
pub mod store;

pub use crate::domain::action::{Location, ProjectAction, SettingsAction};
pub use crate::domain::model::{PairingBoard, Person, ProjectState, SettingsState};
pub use crate::domain::ports::{ConfigProvider, Reducer, Storage};
pub use crate::utils::error::Result;
