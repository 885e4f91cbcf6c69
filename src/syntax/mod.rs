// TypeScript syntax support for locating insertion anchors, backed by tree-sitter

pub mod anchor;
pub mod source_file;

pub use anchor::{locate, AnchorKind};
pub use source_file::{named_children, SourceFile};
