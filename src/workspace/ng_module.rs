// Registration of a component class in an NgModule file

use tree_sitter::Node;

use crate::syntax::{named_children, SourceFile};

/// Indentation used for a freshly created metadata array entry
const ENTRY_INDENT: &str = "    ";

/// A text insertion proposed for a module file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub pos: usize,
    pub text: String,
}

#[derive(Debug)]
struct ImportDecl<'t> {
    source: Node<'t>,
    named_imports: Option<Node<'t>>,
    module: String,
}

/// Plan the import statement and `declarations` entry for `class_name`.
///
/// Returns no changes when the module has no `@NgModule({...})` decorator,
/// when the class is already declared, or when `declarations` is not an
/// array literal.
pub fn add_declaration_to_module(
    file: &SourceFile,
    class_name: &str,
    import_path: &str,
) -> Vec<Change> {
    let Some(metadata) = find_ng_module_metadata(file) else {
        return Vec::new();
    };

    let Some(declaration) = declaration_change(file, metadata, class_name) else {
        return Vec::new();
    };

    let mut changes = vec![declaration];
    if let Some(import) = import_change(file, class_name, import_path) {
        changes.push(import);
    }
    changes
}

/// Object literal passed to the first `@NgModule(...)` decorator
fn find_ng_module_metadata(file: &SourceFile) -> Option<Node<'_>> {
    file.preorder().into_iter().find_map(|node| {
        if node.kind() != "decorator" {
            return None;
        }
        let call = named_children(node)
            .into_iter()
            .find(|child| child.kind() == "call_expression")?;
        let function = call.child_by_field_name("function")?;
        if file.node_text(function) != "NgModule" {
            return None;
        }
        let arguments = call.child_by_field_name("arguments")?;
        named_children(arguments)
            .into_iter()
            .next()
            .filter(|argument| argument.kind() == "object")
    })
}

fn unquote(text: &str) -> &str {
    text.trim_matches(|c| c == '\'' || c == '"' || c == '`')
}

fn property_key<'a>(file: &'a SourceFile, property: Node<'_>) -> Option<&'a str> {
    if property.kind() != "pair" {
        return None;
    }
    let key = property.child_by_field_name("key")?;
    match key.kind() {
        "property_identifier" => Some(file.node_text(key)),
        "string" => Some(unquote(file.node_text(key))),
        _ => None,
    }
}

/// Leading newline plus indentation before a node, if the node starts a line
fn line_break_indent<'a>(file: &'a SourceFile, node: Node<'_>) -> Option<&'a str> {
    let trivia = &file.text()[file.full_start(node)..node.start_byte()];
    let newline = if trivia.starts_with("\r\n") {
        2
    } else if trivia.starts_with('\n') {
        1
    } else {
        return None;
    };
    let indent = trivia[newline..]
        .find(|c: char| !c.is_whitespace())
        .map(|offset| newline + offset)
        .unwrap_or(trivia.len());
    Some(&trivia[..indent])
}

fn declaration_change(file: &SourceFile, metadata: Node<'_>, class_name: &str) -> Option<Change> {
    let properties = named_children(metadata);
    let declarations = properties
        .iter()
        .find(|property| property_key(file, **property) == Some("declarations"));

    let Some(property) = declarations else {
        return Some(new_declarations_property(file, metadata, &properties, class_name));
    };

    let array = property
        .child_by_field_name("value")
        .filter(|value| value.kind() == "array")?;

    let elements = named_children(array);
    if elements
        .iter()
        .any(|element| element.kind() == "identifier" && file.node_text(*element) == class_name)
    {
        return None;
    }

    let change = match elements.last() {
        None => Change {
            pos: array.end_byte() - 1,
            text: class_name.to_string(),
        },
        Some(last) => {
            let text = match line_break_indent(file, *last) {
                Some(separator) => format!(",{}{}", separator, class_name),
                None => format!(", {}", class_name),
            };
            Change {
                pos: last.end_byte(),
                text,
            }
        }
    };
    Some(change)
}

fn new_declarations_property(
    file: &SourceFile,
    metadata: Node<'_>,
    properties: &[Node<'_>],
    class_name: &str,
) -> Change {
    let Some(last) = properties.last() else {
        return Change {
            pos: metadata.end_byte() - 1,
            text: format!("\n  declarations: [\n{}{}\n  ]\n", ENTRY_INDENT, class_name),
        };
    };

    let text = match line_break_indent(file, *last) {
        Some(separator) => {
            let newline = if separator.starts_with("\r\n") { "\r\n" } else { "\n" };
            format!(
                ",{}declarations: [{}{}{}{}]",
                separator, newline, ENTRY_INDENT, class_name, separator
            )
        }
        None => format!(", declarations: [{}]", class_name),
    };
    Change {
        pos: last.end_byte(),
        text,
    }
}

/// Top-level `import ... from '...'` statements in document order
fn collect_imports(file: &SourceFile) -> Vec<ImportDecl<'_>> {
    named_children(file.root())
        .into_iter()
        .filter(|statement| statement.kind() == "import_statement")
        .filter_map(|statement| {
            let source = statement.child_by_field_name("source")?;
            let named_imports = named_children(statement)
                .into_iter()
                .find(|child| child.kind() == "import_clause")
                .and_then(|clause| {
                    named_children(clause)
                        .into_iter()
                        .find(|child| child.kind() == "named_imports")
                });
            Some(ImportDecl {
                source,
                named_imports,
                module: unquote(file.node_text(source)).to_string(),
            })
        })
        .collect()
}

fn import_change(file: &SourceFile, symbol: &str, import_path: &str) -> Option<Change> {
    let imports = collect_imports(file);

    if let Some(existing) = imports.iter().find(|decl| decl.module == import_path) {
        let group = existing.named_imports?;
        let specifiers = named_children(group);
        let imported = specifiers.iter().any(|specifier| {
            specifier
                .child_by_field_name("name")
                .map(|name| file.node_text(name))
                == Some(symbol)
        });
        if imported {
            return None;
        }
        let change = match specifiers.last() {
            Some(last) => Change {
                pos: last.end_byte(),
                text: format!(", {}", symbol),
            },
            None => Change {
                pos: group.start_byte() + 1,
                text: format!(" {} ", symbol),
            },
        };
        return Some(change);
    }

    let change = match imports.last() {
        Some(last) => Change {
            pos: last.source.end_byte(),
            text: format!(";\nimport {{ {} }} from '{}'", symbol, import_path),
        },
        None => Change {
            pos: 0,
            text: format!("import {{ {} }} from '{}';\n", symbol, import_path),
        },
    };
    Some(change)
}

/// Import path from the module file to `target`, relative to the module's folder
pub fn relative_import_path(module_path: &str, target: &str) -> String {
    let from: Vec<&str> = module_path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    let from_dir = &from[..from.len().saturating_sub(1)];
    let to: Vec<&str> = target
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let common = from_dir
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = vec![".."; from_dir.len() - common];
    segments.extend_from_slice(&to[common..]);
    let joined = segments.join("/");

    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}
