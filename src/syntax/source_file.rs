use tree_sitter::{Node, Parser, Tree};

use crate::error::{AppError, AppResult};

/// Parsed TypeScript file backed by a tree-sitter syntax tree
pub struct SourceFile {
    text: String,
    tree: Tree,
}

impl SourceFile {
    pub fn parse(text: &str) -> AppResult<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT;
        parser
            .set_language(&language.into())
            .map_err(|e| AppError::Syntax(format!("Error loading TypeScript grammar: {}", e)))?;

        let tree = parser
            .parse(text, None)
            .ok_or_else(|| AppError::Syntax("TypeScript parser returned no tree".to_string()))?;

        Ok(Self {
            text: text.to_string(),
            tree,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.text[node.start_byte()..node.end_byte()]
    }

    /// Every node in depth-first pre-order, which is document order for starts
    pub fn preorder(&self) -> Vec<Node<'_>> {
        let mut nodes = Vec::new();
        let mut cursor = self.tree.walk();
        loop {
            nodes.push(cursor.node());
            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return nodes;
                }
            }
        }
    }

    pub fn find_first(&self, predicate: impl Fn(&Node<'_>) -> bool) -> Option<Node<'_>> {
        self.preorder().into_iter().find(|node| predicate(node))
    }

    /// Start of the whitespace and comments leading up to `node`, i.e. the end
    /// of the closest preceding token
    pub fn full_start(&self, node: Node<'_>) -> usize {
        let mut current = node;
        loop {
            match current.prev_sibling() {
                Some(prev) if prev.is_extra() => current = prev,
                Some(prev) => return last_token(prev).end_byte(),
                None => match current.parent() {
                    Some(parent) => current = parent,
                    None => return 0,
                },
            }
        }
    }
}

/// Named children of a node, without comments
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    children
}

fn last_token(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    while let Some(last) = (0..current.child_count())
        .rev()
        .filter_map(move |index| current.child(index))
        .find(|child| !child.is_extra())
    {
        current = last;
    }
    current
}
