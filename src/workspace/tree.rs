use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::edit::EditSession;
use crate::error::{AppError, AppResult};

/// Files and subdirectories of one directory, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

/// Project tree rooted at the workspace directory.
///
/// Paths are workspace-relative and use forward slashes; a leading `/`
/// is accepted and means the workspace root.
#[derive(Debug, Clone)]
pub struct Tree {
    root: PathBuf,
}

impl Tree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    pub fn read(&self, path: &str) -> AppResult<String> {
        let full = self.resolve(path);
        if !full.is_file() {
            return Err(AppError::FileNotFound(path.to_string()));
        }
        fs::read_to_string(&full).map_err(|e| AppError::FileUnreadable(format!("{}: {}", path, e)))
    }

    /// Write a file, creating parent directories and replacing existing content
    pub fn overwrite(&self, path: &str, content: &str) -> AppResult<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Io(format!("Failed to create directory for {}: {}", path, e)))?;
        }
        fs::write(&full, content).map_err(|e| AppError::Io(format!("Failed to write {}: {}", path, e)))
    }

    pub fn create(&self, path: &str, content: &str) -> AppResult<()> {
        if self.exists(path) {
            return Err(AppError::Io(format!("File already exists: {}", path)));
        }
        self.overwrite(path, content)
    }

    pub fn delete(&self, path: &str) -> AppResult<()> {
        fs::remove_file(self.resolve(path))
            .map_err(|e| AppError::Io(format!("Failed to delete {}: {}", path, e)))
    }

    pub fn list_dir(&self, path: &str) -> AppResult<DirListing> {
        let full = self.resolve(path);
        let entries = fs::read_dir(&full)
            .map_err(|e| AppError::Io(format!("Failed to read directory {}: {}", path, e)))?;

        let mut listing = DirListing::default();
        for entry in entries {
            let entry = entry
                .map_err(|e| AppError::Io(format!("Failed to read entry in {}: {}", path, e)))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if entry.path().is_dir() {
                listing.dirs.push(name);
            } else {
                listing.files.push(name);
            }
        }
        listing.files.sort();
        listing.dirs.sort();

        Ok(listing)
    }

    /// Snapshot a file for a batch of insertions
    pub fn begin_update(&self, path: &str) -> AppResult<EditSession> {
        let snapshot = self.read(path)?;
        Ok(EditSession::new(path, snapshot))
    }

    /// Write the spliced content back in one step
    pub fn commit_update(&self, session: EditSession) -> AppResult<()> {
        let full = self.resolve(session.path());
        let content = session.apply();

        let mut temp_name = full.as_os_str().to_os_string();
        temp_name.push(".table-scaffold.tmp");
        let temp = PathBuf::from(temp_name);

        fs::write(&temp, &content)
            .map_err(|e| AppError::Io(format!("Failed to write {}: {}", session.path(), e)))?;
        if let Err(e) = fs::rename(&temp, &full) {
            let _ = fs::remove_file(&temp);
            return Err(AppError::Io(format!("Failed to replace {}: {}", session.path(), e)));
        }

        debug!(
            "Committed {} insertions to {}",
            session.insertions().len(),
            session.path()
        );
        Ok(())
    }
}
