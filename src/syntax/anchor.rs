use std::fmt;

use super::source_file::SourceFile;
use crate::error::{AppError, AppResult};

/// Structural insertion points searched for in skeleton files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// Before the first `return` keyword, ahead of its leading trivia
    FirstReturnKeyword,
    /// After the `{` opening the body block of the first arrow function
    FirstArrowFunctionBlockOpenBrace,
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnchorKind::FirstReturnKeyword => f.write_str("ReturnKeyword"),
            AnchorKind::FirstArrowFunctionBlockOpenBrace => {
                f.write_str("ArrowFunction block OpenBraceToken")
            }
        }
    }
}

/// Resolve an anchor to a byte offset in the file text
pub fn locate(file: &SourceFile, kind: AnchorKind) -> AppResult<usize> {
    let offset = match kind {
        AnchorKind::FirstReturnKeyword => first_return_keyword(file),
        AnchorKind::FirstArrowFunctionBlockOpenBrace => first_arrow_block_open_brace(file),
    };
    offset.ok_or(AppError::AnchorNotFound(kind))
}

fn first_return_keyword(file: &SourceFile) -> Option<usize> {
    // Keyword tokens are anonymous nodes; `x.return` is a property_identifier
    let keyword = file.find_first(|node| {
        node.kind() == "return"
            && !node.is_named()
            && node.parent().map(|parent| parent.kind()) == Some("return_statement")
    })?;
    Some(file.full_start(keyword))
}

fn first_arrow_block_open_brace(file: &SourceFile) -> Option<usize> {
    let arrow = file.find_first(|node| node.kind() == "arrow_function")?;
    let body = arrow
        .child_by_field_name("body")
        .filter(|body| body.kind() == "statement_block")?;
    let brace = body.child(0).filter(|token| token.kind() == "{")?;
    Some(brace.end_byte())
}
