pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pairing-board")]
#[command(about = "Replay pairing board actions onto a project and write the result")]
pub struct CliConfig {
    #[arg(short, long, help = "TOML replay configuration; flags below override it")]
    pub config: Option<String>,

    #[arg(long, help = "Project JSON to start from (default: empty project)")]
    pub project_file: Option<String>,

    #[arg(long, help = "JSON array of project actions")]
    pub actions_file: Option<String>,

    #[arg(long, help = "JSON array of settings actions")]
    pub settings_actions_file: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Output formats: json, csv")]
    pub formats: Option<Vec<String>>,

    #[arg(long, help = "Reject actions whose indices do not exist")]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file when one is given, then applies the command line on top.
    pub fn resolve(&self) -> Result<ReplayConfig> {
        let mut resolved = match &self.config {
            Some(path) => ReplayConfig::from(TomlConfig::from_file(path)?),
            None => ReplayConfig::default(),
        };

        if let Some(file) = &self.project_file {
            resolved.project_file = Some(file.clone());
        }
        if let Some(file) = &self.actions_file {
            resolved.actions_file = Some(file.clone());
        }
        if let Some(file) = &self.settings_actions_file {
            resolved.settings_actions_file = Some(file.clone());
        }
        if let Some(path) = &self.output_path {
            resolved.output_path = path.clone();
        }
        if let Some(formats) = &self.formats {
            resolved.output_formats = formats.clone();
        }
        resolved.strict |= self.strict;

        Ok(resolved)
    }
}

/// Effective settings for one replay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    pub project_file: Option<String>,
    pub actions_file: Option<String>,
    pub settings_actions_file: Option<String>,
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub strict: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            project_file: None,
            actions_file: None,
            settings_actions_file: None,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_formats: vec!["json".to_string(), "csv".to_string()],
            strict: false,
        }
    }
}

impl From<TomlConfig> for ReplayConfig {
    fn from(config: TomlConfig) -> Self {
        Self {
            project_file: config.project_file().map(str::to_string),
            actions_file: config.actions_file().map(str::to_string),
            settings_actions_file: config.settings_actions_file().map(str::to_string),
            strict: config.strict(),
            output_path: config.output.path,
            output_formats: config.output.formats,
        }
    }
}

impl ConfigProvider for ReplayConfig {
    fn project_file(&self) -> Option<&str> {
        self.project_file.as_deref()
    }

    fn actions_file(&self) -> Option<&str> {
        self.actions_file.as_deref()
    }

    fn settings_actions_file(&self) -> Option<&str> {
        self.settings_actions_file.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

impl Validate for ReplayConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.output_formats)?;
        for (field, file) in [
            ("project_file", &self.project_file),
            ("actions_file", &self.actions_file),
            ("settings_actions_file", &self.settings_actions_file),
        ] {
            if let Some(file) = file {
                validation::validate_path(field, file)?;
            }
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_without_config_file_uses_defaults() {
        let cli = CliConfig::parse_from(["pairing-board", "--actions-file", "actions.json"]);
        let resolved = cli.resolve().unwrap();

        assert_eq!(resolved.actions_file.as_deref(), Some("actions.json"));
        assert_eq!(resolved.output_path, DEFAULT_OUTPUT_PATH);
        assert_eq!(resolved.output_formats, ["json", "csv"]);
        assert!(!resolved.strict);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[session]
name = "override"

[actions]
file = "from-toml.json"
strict = true

[output]
path = "./toml-out"
formats = ["json"]
"#,
            )
            .unwrap();

        let cli = CliConfig::parse_from([
            "pairing-board",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--output-path",
            "./cli-out",
            "--formats",
            "csv",
        ]);
        let resolved = cli.resolve().unwrap();

        assert_eq!(resolved.actions_file.as_deref(), Some("from-toml.json"));
        assert_eq!(resolved.output_path, "./cli-out");
        assert_eq!(resolved.output_formats, ["csv"]);
        assert!(resolved.strict);
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = ReplayConfig {
            output_formats: vec!["yaml".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
