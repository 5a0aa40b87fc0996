pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, ReplayConfig};

pub use crate::core::{
    project_reducer::ProjectReducer, replay::ReplaySession, settings_reducer::SettingsReducer,
    store::Store,
};
pub use domain::action::{Location, ProjectAction, SettingsAction};
pub use domain::model::{PairingBoard, Person, ProjectState, SettingsState};
pub use domain::ports::Reducer;
pub use utils::error::{PairingError, Result};
