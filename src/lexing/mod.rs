//! Lexical layer for the Modl language: classified tokens and the
//! tokenizer that produces them from source text.

use std::path::Path;
use tracing::debug;

pub mod tokenizer;

pub use tokenizer::{tokenize, LexingError};

/// The closed set of lexical categories a token can carry. Keywords and
/// delimiters are classified into purpose-specific categories up front so
/// that statement shapes can be described purely in terms of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Identifier,

    // keyword-derived
    TypeDef,
    AssignDef,
    IfDef,
    ThenSection,
    EndIf,
    ForLoopDef,
    WhileLoopDef,
    EndWhileLoop,
    InputDef,
    OutputDef,
    AddOp,
    BooleanLit,
    EndProgram,

    // delimiter-derived
    EndStatement,
    Delimiter,
    Listing,
    StartArgs,
    EndArgs,
    AssignOp,
    CompareOp,
    MultiplyOp,

    // numeric, one per sub-tokenizer
    BinaryNum,
    OctalNum,
    HexNum,
    DecimalNum,
    FloatNum,

    CommentBody,
}

/// A classified, positioned unit of source text. Immutable once produced;
/// the matching and interpreting layers only ever read these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'i> {
    pub category: Category,
    pub text: &'i str,
    pub offset: usize,
}

impl<'i> Token<'i> {
    pub fn new(category: Category, text: &'i str, offset: usize) -> Token<'i> {
        Token {
            category,
            text,
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

/// Read a file and return an owned String. Ownership passes back to the
/// caller so the tokens borrowed from it can live as long as needed.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
