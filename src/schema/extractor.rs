use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

use super::{AttributeMarker, DataType, PropertyDescriptor, TITLE_NOT_FOUND};
use crate::error::{AppError, AppResult};

static COLUMN_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"Column\("(.*)"\)"#).unwrap());
static MODEL_FILE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z0-9_]+)\.cs$").unwrap());

/// Auto-property accessor suffixes stripped before classification
const ACCESSOR_SUFFIXES: [&str; 2] = ["{ get; set; }", "{get; set;}"];

/// Markers of lines that carry no schema information
const IGNORED_KEYWORDS: [&str; 3] = ["using", "namespace", "public class"];

/// Classification of one input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    Attribute(AttributeMarker),
    Property { name: String, data_type: DataType },
    Ignorable,
    Invalid(&'static str),
}

/// Scanner state threaded through the fold over lines
#[derive(Debug, Default)]
struct ScanState {
    pending: Option<AttributeMarker>,
    properties: Vec<PropertyDescriptor>,
}

/// Derive the model name from the path of a `.cs` file (`/x/UserDto.cs` -> `UserDto`)
pub fn model_name_from_path(csfile: &str) -> AppResult<String> {
    let file_name = Path::new(csfile)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::ModelName(csfile.to_string()))?;

    MODEL_FILE_NAME
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::ModelName(csfile.to_string()))
}

/// Read a model class from the real filesystem and extract its properties
pub fn parse_cs_file(path: &Path) -> AppResult<Vec<PropertyDescriptor>> {
    info!("Parsing model file {}", path.display());

    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let source = std::fs::read_to_string(path)
        .map_err(|e| AppError::FileUnreadable(format!("{}: {}", path.display(), e)))?;

    let properties = extract(&source)?;
    info!("Model file parsed, {} properties found", properties.len());

    Ok(properties)
}

/// Extract the ordered property schema from C# class source text
pub fn extract(source: &str) -> AppResult<Vec<PropertyDescriptor>> {
    let state = source
        .split('\n')
        .enumerate()
        .try_fold(ScanState::default(), |mut state, (index, raw)| {
            let line = normalize_line(raw);

            match classify_line(&line) {
                ParseState::Ignorable => {}
                ParseState::Attribute(marker) => {
                    state.pending = Some(marker);
                }
                ParseState::Property { name, data_type } => {
                    // The marker stays pending: consecutive property lines share a title
                    let marker = state.pending.as_ref().ok_or_else(|| {
                        AppError::malformed(index + 1, &line, "no attribute found for property line")
                    })?;
                    debug!("Property {}: {} ({})", name, data_type, marker.title);
                    state
                        .properties
                        .push(PropertyDescriptor::new(&name, data_type, &marker.title));
                }
                ParseState::Invalid(reason) => {
                    return Err(AppError::malformed(index + 1, &line, reason));
                }
            }

            Ok(state)
        })?;

    Ok(state.properties)
}

fn normalize_line(raw: &str) -> String {
    let mut line = raw.to_string();
    for suffix in ACCESSOR_SUFFIXES {
        line = line.replacen(suffix, "", 1);
    }
    line.trim().to_string()
}

fn is_ignorable(line: &str) -> bool {
    line.is_empty()
        || line == "{"
        || line == "}"
        || IGNORED_KEYWORDS.iter().any(|keyword| line.contains(keyword))
}

fn classify_line(line: &str) -> ParseState {
    if is_ignorable(line) {
        ParseState::Ignorable
    } else if line.starts_with('[') {
        ParseState::Attribute(map_attribute(line))
    } else if line.starts_with("public") {
        map_property(line)
    } else {
        ParseState::Invalid("unrecognized construct")
    }
}

fn map_attribute(line: &str) -> AttributeMarker {
    let title = COLUMN_ATTRIBUTE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(TITLE_NOT_FOUND);

    AttributeMarker {
        title: title.to_string(),
    }
}

fn map_property(line: &str) -> ParseState {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (cs_type, identifier) = match (tokens.get(1), tokens.get(2)) {
        (Some(cs_type), Some(identifier)) => (*cs_type, *identifier),
        _ => return ParseState::Invalid("property line needs a type and a name"),
    };

    let name = lower_first(identifier);
    if !name.chars().next().is_some_and(|c| c.is_lowercase()) {
        return ParseState::Invalid("property name must start with a letter");
    }

    ParseState::Property {
        name,
        data_type: DataType::from_cs_type(cs_type),
    }
}

fn lower_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
