// Text fragments spliced into the skeleton files
use crate::config::FormattingConfig;
use crate::schema::{DataType, PropertyDescriptor};

/// One `addColumnItem` call registering a table column
pub fn column_registration(property: &PropertyDescriptor) -> String {
    format!(
        "stringIndexerHelper.addColumnItem(new ColumnItemStrict('{}', '{}', null, '{}', null, null));",
        property.title, property.name, property.name
    )
}

/// Column registrations placed ahead of the data service `return`
pub fn column_registrations(properties: &[PropertyDescriptor]) -> String {
    let mut block = String::from("\n");
    for property in properties {
        block.push_str("\n\t\t");
        block.push_str(&column_registration(property));
    }
    block
}

/// One `field: value,` entry of the row mapping; dates are formatted for display
pub fn field_mapping(property: &PropertyDescriptor, formatting: &FormattingConfig) -> String {
    let name = &property.name;
    match property.data_type {
        DataType::DateTime => format!(
            "{name}: dto.{name} ? formatDate(dto.{name}, '{}', '{}') : '',",
            formatting.date_format, formatting.locale
        ),
        _ => format!("{name}: dto.{name},"),
    }
}

/// Object-literal return statement placed at the top of the mapping function body
pub fn field_mappings(properties: &[PropertyDescriptor], formatting: &FormattingConfig) -> String {
    let mut block = String::from("\n\treturn {");
    for property in properties {
        block.push_str("\n\t\t");
        block.push_str(&field_mapping(property, formatting));
    }
    block.push_str("\n\t}");
    block
}

pub fn dto_field(property: &PropertyDescriptor) -> String {
    format!("{}: {}", property.name, property.data_type.wire_type())
}

/// Full DTO interface declaration
pub fn dto_interface(model_name: &str, properties: &[PropertyDescriptor]) -> String {
    let mut block = format!("export interface {} {{", model_name);
    for property in properties {
        block.push_str("\n\t");
        block.push_str(&dto_field(property));
    }
    block.push_str("\n}");
    block
}
