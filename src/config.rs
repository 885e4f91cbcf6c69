use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub workspace: WorkspaceConfig,
    pub formatting: FormattingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Workspace metadata file, relative to the workspace root
    pub file_name: String,
    /// Partial module file name used when none is given on the command line
    pub default_module: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingConfig {
    pub date_format: String,
    pub locale: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig {
                file_name: "angular.json".to_string(),
                default_module: "app.module".to_string(),
            },
            formatting: FormattingConfig {
                date_format: "dd.MM.yyyy".to_string(),
                locale: "ru".to_string(),
            },
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            workspace: WorkspaceConfig {
                file_name: env::var("TABLE_SCAFFOLD_WORKSPACE_FILE")
                    .unwrap_or(defaults.workspace.file_name),
                default_module: env::var("TABLE_SCAFFOLD_DEFAULT_MODULE")
                    .unwrap_or(defaults.workspace.default_module),
            },
            formatting: FormattingConfig {
                date_format: env::var("TABLE_SCAFFOLD_DATE_FORMAT")
                    .unwrap_or(defaults.formatting.date_format),
                locale: env::var("TABLE_SCAFFOLD_LOCALE")
                    .unwrap_or(defaults.formatting.locale),
            },
        }
    }
}
