// Program wide top-level error handling

mod format;

pub use format::*;

use crate::interpret::InterpretError;
use crate::lexing::LexingError;

/// Trait for error families that can point at a position in the source
/// text and explain themselves. Both the lexical and the evaluation
/// errors implement this, so the rendering code has a single seam.
pub trait Diagnostic {
    fn offset(&self) -> usize;
    fn problem(&self) -> String;
    fn details(&self) -> String;
}

impl Diagnostic for LexingError {
    fn offset(&self) -> usize {
        LexingError::offset(self)
    }

    fn problem(&self) -> String {
        LexingError::problem(self)
    }

    fn details(&self) -> String {
        LexingError::details(self)
    }
}

impl Diagnostic for InterpretError {
    fn offset(&self) -> usize {
        InterpretError::offset(self)
    }

    fn problem(&self) -> String {
        InterpretError::problem(self)
    }

    fn details(&self) -> String {
        InterpretError::details(self)
    }
}
