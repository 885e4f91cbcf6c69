// Table scaffold generation pipeline
// Parses a C# model, stamps the skeleton files and splices generated code into them

pub mod context;
pub mod fragments;
pub mod splices;
pub mod templates;
pub mod utils;

use std::path::PathBuf;
use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::{AppError, AppResult};
use crate::schema::{model_name_from_path, parse_cs_file, PropertyDescriptor};
use crate::workspace::{find_module, read_project, Tree};

pub use context::GenerationContext;

/// One generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Component name, e.g. `user-list`
    pub name: String,
    /// Project name in the workspace metadata file
    pub project: String,
    /// C# model file on the real filesystem
    pub csfile: PathBuf,
    /// Partial module file name; defaults to the configured module
    pub module: Option<String>,
    /// Folder that receives the component folder; defaults to `<sourceRoot>/app|lib`
    pub path: Option<String>,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub context: GenerationContext,
    pub properties: Vec<PropertyDescriptor>,
    pub skeleton_files: Vec<String>,
}

/// Main code generator orchestrator
pub struct CodeGenerator {
    tree: Tree,
    config: GeneratorConfig,
}

impl CodeGenerator {
    pub fn new(tree: Tree, config: GeneratorConfig) -> Self {
        Self { tree, config }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Resolve names and paths for a request without touching any file
    pub fn resolve_context(&self, options: &GenerateOptions) -> AppResult<GenerationContext> {
        let csfile = options.csfile.to_string_lossy();
        let model_name = model_name_from_path(&csfile)?;
        info!("Project {}, model {}", options.project, model_name);

        let project = read_project(&self.tree, &self.config.workspace.file_name, &options.project)?;

        let path = options
            .path
            .clone()
            .unwrap_or_else(|| project.default_path());
        let target_folder_path = format!(
            "{}/{}",
            path.trim_end_matches('/'),
            utils::dasherize(&options.name)
        );

        let module = options
            .module
            .clone()
            .unwrap_or_else(|| self.config.workspace.default_module.clone());
        let module_file_path = find_module(&self.tree, &project.source_root, &module)?
            .ok_or_else(|| AppError::ModuleNotFound(module.clone()))?;
        info!("Module file {}, target folder {}", module_file_path, target_folder_path);

        Ok(GenerationContext {
            model_name,
            component_name: options.name.clone(),
            target_folder_path,
            module_file_path,
        })
    }

    /// Run the whole pipeline; the first failure stops it and earlier commits stay on disk
    pub fn generate(&self, options: &GenerateOptions) -> AppResult<GenerationReport> {
        // Step 1: Resolve names and paths
        let context = self.resolve_context(options)?;

        // Step 2: Extract the property schema
        let properties = parse_cs_file(&options.csfile)?;

        // Step 3: Stamp the skeleton files
        let skeleton_files =
            templates::materialize(&self.tree, &context.target_folder_path, &context.placeholders())?;

        // Step 4: Splice generated fragments
        self.apply_splices(&context, &properties)?;

        info!("Generation of {} completed", context.component_class_name());
        Ok(GenerationReport {
            context,
            properties,
            skeleton_files,
        })
    }

    /// The four splice operations, in their fixed order
    pub fn apply_splices(
        &self,
        context: &GenerationContext,
        properties: &[PropertyDescriptor],
    ) -> AppResult<()> {
        splices::update_data_service(&self.tree, context, properties)?;
        splices::update_component_constants(
            &self.tree,
            context,
            properties,
            &self.config.formatting,
        )?;
        splices::update_ng_module(&self.tree, context)?;
        splices::create_dto(&self.tree, context, properties)?;
        Ok(())
    }
}
