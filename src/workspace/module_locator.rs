use tracing::debug;

use super::tree::Tree;
use crate::error::AppResult;

/// Find the first file under `root` whose name contains `module`.
///
/// Files of a directory are checked before its subdirectories, and only the
/// first subdirectory (by name) is ever descended into.
pub fn find_module(tree: &Tree, root: &str, module: &str) -> AppResult<Option<String>> {
    let root = root.trim_end_matches('/');
    if !tree.root().join(root.trim_start_matches('/')).is_dir() {
        debug!("Module search root {} does not exist", root);
        return Ok(None);
    }

    let listing = tree.list_dir(root)?;

    if let Some(file) = listing.files.iter().find(|file| file.contains(module)) {
        return Ok(Some(format!("{}/{}", root, file)));
    }

    match listing.dirs.first() {
        Some(dir) => find_module(tree, &format!("{}/{}", root, dir), module),
        None => Ok(None),
    }
}
