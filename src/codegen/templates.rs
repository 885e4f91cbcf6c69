// Skeleton files stamped out before splicing
use tracing::info;

use super::utils::{classify, dasherize};
use crate::error::AppResult;
use crate::workspace::Tree;

const COMPONENT_TS: &str = include_str!("../../templates/component.ts.tpl");
const COMPONENT_HTML: &str = include_str!("../../templates/component.html.tpl");
const DATA_SERVICE_TS: &str = include_str!("../../templates/data-service.ts.tpl");
const CONSTANTS_TS: &str = include_str!("../../templates/constants.ts.tpl");

/// Values substituted for `{{placeholder}}` markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub name: String,
    pub dasherized_name: String,
    pub class_name: String,
    pub model_name: String,
    pub model_file_name: String,
}

impl Placeholders {
    pub fn new(name: &str, model_name: &str) -> Self {
        Self {
            name: name.to_string(),
            dasherized_name: dasherize(name),
            class_name: classify(name),
            model_name: model_name.to_string(),
            model_file_name: dasherize(model_name),
        }
    }

    pub fn render(&self, template: &str) -> String {
        [
            ("{{name}}", &self.name),
            ("{{dasherizedName}}", &self.dasherized_name),
            ("{{className}}", &self.class_name),
            ("{{modelName}}", &self.model_name),
            ("{{modelFileName}}", &self.model_file_name),
        ]
        .iter()
        .fold(template.to_string(), |text, (marker, value)| text.replace(*marker, value.as_str()))
    }

    /// Skeleton file names paired with their templates
    fn files(&self) -> [(String, &'static str); 4] {
        let base = &self.dasherized_name;
        [
            (format!("{}.component.ts", base), COMPONENT_TS),
            (format!("{}.component.html", base), COMPONENT_HTML),
            (format!("{}-data.service.ts", base), DATA_SERVICE_TS),
            (format!("{}.component.constants.ts", base), CONSTANTS_TS),
        ]
    }
}

/// Write every skeleton into `folder`, replacing files that already exist
pub fn materialize(tree: &Tree, folder: &str, placeholders: &Placeholders) -> AppResult<Vec<String>> {
    let mut written = Vec::new();
    for (file_name, template) in placeholders.files() {
        let path = format!("{}/{}", folder, file_name);
        tree.overwrite(&path, &placeholders.render(template))?;
        written.push(path);
    }
    info!("Materialized {} skeleton files in {}", written.len(), folder);
    Ok(written)
}
