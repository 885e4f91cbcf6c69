// Table scaffold generator - C# model to Angular table component

// Property schema extraction from C# model classes
pub mod schema;

// tree-sitter view of TypeScript files and anchor lookup
pub mod syntax;

// Project tree, workspace metadata, module editing and splicing
pub mod workspace;

// Fragments, skeleton templates and the generation pipeline
pub mod codegen;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use codegen::{CodeGenerator, GenerateOptions, GenerationContext, GenerationReport};
pub use error::{AppError, AppResult};
