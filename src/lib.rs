//! Front end and evaluator for the Modl language: source text is
//! tokenized into a classified stream, contiguous token runs are matched
//! against a catalog of statement shapes, and the best-matching shape's
//! action is executed against a mutable runtime context.

pub mod interpret;
pub mod lexing;
pub mod matching;
pub mod problem;
