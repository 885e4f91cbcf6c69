use std::fmt;

use crate::syntax::AnchorKind;

#[derive(Debug)]
pub enum AppError {
    ProjectNotFound(String),
    ModuleNotFound(String),
    FileNotFound(String),
    FileUnreadable(String),
    AnchorNotFound(AnchorKind),
    MalformedInput {
        line: usize,
        text: String,
        reason: String,
    },
    ModelName(String),
    Workspace(String),
    InvalidEdit(String),
    Syntax(String),
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ProjectNotFound(name) => write!(f, "Project not found: {}", name),
            AppError::ModuleNotFound(module) => write!(f, "Could not find module '{}'", module),
            AppError::FileNotFound(path) => write!(f, "File not found: {}", path),
            AppError::FileUnreadable(msg) => write!(f, "File unreadable: {}", msg),
            AppError::AnchorNotFound(kind) => write!(f, "Anchor not found: {}", kind),
            AppError::MalformedInput { line, text, reason } => {
                write!(f, "Malformed input at line {}: {} - '{}'", line, reason, text)
            }
            AppError::ModelName(path) => write!(f, "Could not derive model name from '{}'", path),
            AppError::Workspace(msg) => write!(f, "Workspace error: {}", msg),
            AppError::InvalidEdit(msg) => write!(f, "Invalid edit: {}", msg),
            AppError::Syntax(msg) => write!(f, "Syntax error: {}", msg),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn malformed(line: usize, text: &str, reason: &str) -> Self {
        AppError::MalformedInput {
            line,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
