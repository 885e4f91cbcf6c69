use serde::Deserialize;
use std::collections::HashMap;

use super::tree::Tree;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Application,
    Library,
}

impl ProjectType {
    /// Folder under the source root that holds generated code
    pub fn folder(&self) -> &'static str {
        match self {
            ProjectType::Application => "app",
            ProjectType::Library => "lib",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub source_root: String,
    pub project_type: ProjectType,
}

impl ProjectMetadata {
    pub fn default_path(&self) -> String {
        format!("{}/{}", self.source_root, self.project_type.folder())
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceFile {
    #[serde(default)]
    projects: HashMap<String, ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectEntry {
    #[serde(default)]
    root: String,
    source_root: Option<String>,
    project_type: Option<String>,
}

/// Resolve a project by name from the workspace metadata file
pub fn read_project(tree: &Tree, workspace_file: &str, name: &str) -> AppResult<ProjectMetadata> {
    let raw = tree.read(workspace_file).map_err(|e| match e {
        AppError::FileNotFound(path) => {
            AppError::Workspace(format!("workspace file '{}' not found", path))
        }
        other => other,
    })?;

    let workspace: WorkspaceFile = serde_json::from_str(&raw)
        .map_err(|e| AppError::Workspace(format!("Failed to parse {}: {}", workspace_file, e)))?;

    let entry = workspace
        .projects
        .get(name)
        .ok_or_else(|| AppError::ProjectNotFound(name.to_string()))?;

    let source_root = match &entry.source_root {
        Some(source_root) => source_root.trim_end_matches('/').to_string(),
        None if entry.root.is_empty() => "src".to_string(),
        None => format!("{}/src", entry.root.trim_end_matches('/')),
    };

    let project_type = match entry.project_type.as_deref() {
        Some("application") => ProjectType::Application,
        _ => ProjectType::Library,
    };

    Ok(ProjectMetadata {
        source_root,
        project_type,
    })
}
