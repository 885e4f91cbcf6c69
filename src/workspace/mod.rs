// Project tree access, workspace metadata and file splicing

pub mod edit;
pub mod module_locator;
pub mod ng_module;
pub mod project;
pub mod tree;

pub use edit::{EditSession, InsertSide, Insertion};
pub use module_locator::find_module;
pub use ng_module::{add_declaration_to_module, relative_import_path, Change};
pub use project::{read_project, ProjectMetadata, ProjectType};
pub use tree::{DirListing, Tree};
