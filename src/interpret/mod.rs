//! Execution of a matched token stream: the statement-window loop, the
//! runtime context it mutates, and the fatal error taxonomy. Window
//! boundaries are not pre-segmented — each `match_best` call discovers
//! how much of the stream its statement consumes.

use std::collections::HashMap;

use tracing::debug;

use crate::lexing::Token;
use crate::matching::{match_best, FormationKind};

pub mod actions;
pub mod container;

pub use container::{Container, ValueError, ValueType};

/// Every fatal condition the evaluator can hit. All carry the byte
/// offset of the offending token; none is recoverable — the run aborts at
/// the point of detection.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretError {
    UnknownStatement(usize),
    Expected(usize, &'static str),
    AlreadyDeclared(usize, String),
    NotDeclared(usize, String),
    InvalidType(usize, String),
    MalformedLiteral(usize, String, ValueType),
    UnsupportedOperation(usize, String, ValueType),
    DivisionByZero(usize),
}

impl InterpretError {
    pub fn offset(&self) -> usize {
        match self {
            InterpretError::UnknownStatement(offset) => *offset,
            InterpretError::Expected(offset, _) => *offset,
            InterpretError::AlreadyDeclared(offset, _) => *offset,
            InterpretError::NotDeclared(offset, _) => *offset,
            InterpretError::InvalidType(offset, _) => *offset,
            InterpretError::MalformedLiteral(offset, _, _) => *offset,
            InterpretError::UnsupportedOperation(offset, _, _) => *offset,
            InterpretError::DivisionByZero(offset) => *offset,
        }
    }

    pub fn problem(&self) -> String {
        match self {
            InterpretError::UnknownStatement(_) => "Unknown statement".to_string(),
            InterpretError::Expected(_, value) => format!("Expected {}", value),
            InterpretError::AlreadyDeclared(_, name) => {
                format!("Variable '{}' already declared", name)
            }
            InterpretError::NotDeclared(_, name) => {
                format!("Variable '{}' not declared", name)
            }
            InterpretError::InvalidType(_, name) => format!("Invalid variable type '{}'", name),
            InterpretError::MalformedLiteral(_, text, value_type) => {
                format!("Malformed {} literal '{}'", value_type, text)
            }
            InterpretError::UnsupportedOperation(_, name, value_type) => {
                format!("Unsupported operation '{}' for type {}", name, value_type)
            }
            InterpretError::DivisionByZero(_) => "Division by zero".to_string(),
        }
    }

    pub fn details(&self) -> String {
        match self {
            InterpretError::UnknownStatement(_) => {
                "No known statement shape applies to the tokens starting here.".to_string()
            }
            InterpretError::Expected(_, value) => {
                format!("The matched statement does not contain {}.", value)
            }
            InterpretError::AlreadyDeclared(_, _) => {
                "A name may be declared at most once per program.".to_string()
            }
            InterpretError::NotDeclared(_, _) => {
                "Variables must be declared before they are assigned or referenced.".to_string()
            }
            InterpretError::InvalidType(_, _) => {
                "Declarations accept the types integer, real, and boolean.".to_string()
            }
            InterpretError::MalformedLiteral(_, _, value_type) => {
                format!("This text cannot be parsed as a {} value.", value_type)
            }
            InterpretError::UnsupportedOperation(_, _, value_type) => {
                format!("The {} type does not support this computation.", value_type)
            }
            InterpretError::DivisionByZero(_) => {
                "Integer division requires a non-zero divisor.".to_string()
            }
        }
    }
}

pub(crate) fn value_error(error: ValueError, offset: usize) -> InterpretError {
    match error {
        ValueError::MalformedLiteral { text, value_type } => {
            InterpretError::MalformedLiteral(offset, text, value_type)
        }
        ValueError::UnsupportedOperation { name, value_type } => {
            InterpretError::UnsupportedOperation(offset, name, value_type)
        }
        ValueError::DivisionByZero => InterpretError::DivisionByZero(offset),
    }
}

/// The mutable evaluation state for one program run: the symbol table and
/// the program-visible output lines. Passed by reference into every
/// action; never a hidden global.
#[derive(Debug, Default)]
pub struct RuntimeContext {
    variables: HashMap<String, Container>,
    lines: Vec<String>,
}

impl RuntimeContext {
    pub fn new() -> RuntimeContext {
        RuntimeContext::default()
    }

    pub fn variables(&self) -> &HashMap<String, Container> {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut HashMap<String, Container> {
        &mut self.variables
    }

    pub fn emit(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Interpret the token stream to completion or the first fatal error.
/// Each iteration matches the best statement shape at the current
/// position, runs its action, and advances past the consumed tokens; an
/// end-of-program formation stops the loop.
pub fn run(tokens: &[Token], context: &mut RuntimeContext) -> Result<(), InterpretError> {
    let mut position = 0;

    while position < tokens.len() {
        let window = &tokens[position..];
        let formation = match_best(window)
            .ok_or_else(|| InterpretError::UnknownStatement(tokens[position].offset))?;

        position += formation.len();
        let kind = formation.kind();
        actions::apply(&formation, context)?;

        if kind == FormationKind::End {
            debug!("end of program");
            break;
        }
    }

    Ok(())
}

/// Match statement shapes over the whole stream without executing any
/// action. Reports the recognized kinds in order, or the position where
/// no shape applies.
pub fn check(tokens: &[Token]) -> Result<Vec<FormationKind>, InterpretError> {
    let mut kinds = Vec::new();
    let mut position = 0;

    while position < tokens.len() {
        let window = &tokens[position..];
        let formation = match_best(window)
            .ok_or_else(|| InterpretError::UnknownStatement(tokens[position].offset))?;

        position += formation.len();
        kinds.push(formation.kind());

        if formation.kind() == FormationKind::End {
            break;
        }
    }

    Ok(kinds)
}
