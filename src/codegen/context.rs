use super::templates::Placeholders;
use super::utils::{component_class_name, dasherize};

/// Names and paths resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    pub model_name: String,
    pub component_name: String,
    pub target_folder_path: String,
    pub module_file_path: String,
}

impl GenerationContext {
    pub fn dasherized_name(&self) -> String {
        dasherize(&self.component_name)
    }

    pub fn component_class_name(&self) -> String {
        component_class_name(&self.component_name)
    }

    pub fn data_service_path(&self) -> String {
        format!("{}/{}-data.service.ts", self.target_folder_path, self.dasherized_name())
    }

    pub fn constants_path(&self) -> String {
        format!("{}/{}.component.constants.ts", self.target_folder_path, self.dasherized_name())
    }

    /// Component module path without extension, as used in imports
    pub fn component_path(&self) -> String {
        format!("{}/{}.component", self.target_folder_path, self.dasherized_name())
    }

    pub fn dto_path(&self) -> String {
        format!("{}/{}.ts", self.target_folder_path, dasherize(&self.model_name))
    }

    pub fn placeholders(&self) -> Placeholders {
        Placeholders::new(&self.component_name, &self.model_name)
    }
}
