// Property schema inferred from a C# model class

pub mod extractor;

use std::fmt;

pub use extractor::{extract, model_name_from_path, parse_cs_file};

/// Title used when an attribute line carries no `Column("...")` payload
pub const TITLE_NOT_FOUND: &str = "__not_found_";

/// Target type of a model property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Number,
    Boolean,
    DateTime,
}

impl DataType {
    /// Map a declared C# type; unknown types fall back to `String`
    pub fn from_cs_type(cs_type: &str) -> Self {
        match cs_type.trim() {
            "long" | "long?" | "int" | "int?" => DataType::Number,
            "string" | "string?" => DataType::String,
            "bool" | "bool?" => DataType::Boolean,
            "DateTime" | "DateTime?" => DataType::DateTime,
            _ => DataType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::DateTime => "DateTime",
        }
    }

    /// Type used in the DTO interface; dates travel as strings
    pub fn wire_type(&self) -> &'static str {
        match self {
            DataType::DateTime => "string",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property of the source model, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub title: String,
}

impl PropertyDescriptor {
    pub fn new(name: &str, data_type: DataType, title: &str) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            title: title.to_string(),
        }
    }
}

/// Pending display title waiting for the next property line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMarker {
    pub title: String,
}
