use crate::core::project_reducer::ProjectReducer;
use crate::core::report::pairs_csv;
use crate::core::settings_reducer::SettingsReducer;
use crate::core::store::Store;
use crate::domain::action::{parse_project_actions, parse_settings_actions};
use crate::domain::model::{ProjectState, SettingsState};
use crate::domain::ports::{ConfigProvider, Reducer, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_project_action;

pub const PROJECT_OUTPUT: &str = "project.json";
pub const SETTINGS_OUTPUT: &str = "settings.json";
pub const PAIRS_OUTPUT: &str = "pairs.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub project: ProjectState,
    pub settings: Option<SettingsState>,
    pub project_actions: usize,
    pub settings_actions: usize,
    pub written: Vec<String>,
}

/// Replays action scripts onto a project and writes the resulting state.
///
/// `input` resolves the project and action files, `output` receives the results.
pub struct ReplaySession<S: Storage, C: ConfigProvider> {
    input: S,
    output: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReplaySession<S, C> {
    pub fn new(input: S, output: S, config: C) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub async fn run(&self) -> Result<ReplayOutcome> {
        tracing::info!("🚀 Starting replay");

        let project = self.load_project().await?;
        tracing::info!(
            "📥 Project {} loaded: {} boards, {} people",
            project.id,
            project.pairing_boards.len(),
            project.total_people()
        );

        let mut projects = Store::with_state(ProjectReducer, project);
        if let Some(path) = self.config.actions_file() {
            let actions = parse_project_actions(self.read_json(path).await?)?;
            tracing::info!("🔄 Replaying {} project actions", actions.len());

            for (position, action) in actions.iter().enumerate() {
                if self.config.strict() {
                    projects.try_dispatch(action, |state, action| {
                        validate_project_action(state, action, position)
                    })?;
                } else {
                    projects.dispatch(action);
                }
            }
        }

        let settings = match self.config.settings_actions_file() {
            Some(path) => {
                let actions = parse_settings_actions(self.read_json(path).await?)?;
                tracing::info!("🔄 Replaying {} settings actions", actions.len());

                let mut settings = Store::new(SettingsReducer);
                for action in &actions {
                    settings.dispatch(action);
                }
                Some(settings)
            }
            None => None,
        };

        let project_actions = projects.dispatched();
        let settings_actions = settings.as_ref().map(Store::dispatched).unwrap_or(0);
        let project = projects.into_state();
        let settings = settings.map(Store::into_state);

        let written = self.write_outputs(&project, settings.as_ref()).await?;
        tracing::info!("✅ Replay complete, wrote {} files", written.len());

        Ok(ReplayOutcome {
            project,
            settings,
            project_actions,
            settings_actions,
            written,
        })
    }

    async fn load_project(&self) -> Result<ProjectState> {
        match self.config.project_file() {
            Some(path) => Ok(serde_json::from_value(self.read_json(path).await?)?),
            None => {
                tracing::warn!("No project file configured, starting from an empty project");
                Ok(ProjectReducer.reduce(None, &Default::default()))
            }
        }
    }

    async fn read_json(&self, path: &str) -> Result<serde_json::Value> {
        tracing::debug!("Reading {}", path);
        let data = self.input.read_file(path).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    async fn write_outputs(
        &self,
        project: &ProjectState,
        settings: Option<&SettingsState>,
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            match format.as_str() {
                "json" => {
                    let data = serde_json::to_vec_pretty(project)?;
                    self.output.write_file(PROJECT_OUTPUT, &data).await?;
                    written.push(PROJECT_OUTPUT.to_string());

                    if let Some(settings) = settings {
                        let data = serde_json::to_vec_pretty(settings)?;
                        self.output.write_file(SETTINGS_OUTPUT, &data).await?;
                        written.push(SETTINGS_OUTPUT.to_string());
                    }
                }
                "csv" => {
                    let csv = pairs_csv(project)?;
                    self.output.write_file(PAIRS_OUTPUT, csv.as_bytes()).await?;
                    written.push(PAIRS_OUTPUT.to_string());
                }
                other => tracing::warn!("Skipping unsupported output format: {}", other),
            }
        }

        tracing::debug!("💾 Saved outputs to {}", self.config.output_path());
        Ok(written)
    }
}
