//! The fixed, ordered catalog of statement shapes. This table is data
//! only; the semantic behavior bound to each kind lives in
//! `interpret::actions`. Catalog order matters: when two shapes consume
//! the same number of tokens, the earlier entry wins.

use std::sync::OnceLock;

use crate::lexing::Category;
use crate::matching::{operand, operand_or_arithmetic, Expression, Set};

/// Every statement shape the language knows, plus the `Incorrect`
/// sentinel, which never matches anything and exists only as a typed
/// null-object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationKind {
    Incorrect,
    Comment,
    End,
    VarDef,
    VarAssign,
    Comparison,
    ComparisonExtraOp,
    Addition,
    AdditionExtraOp,
    Multiplication,
    MultiplicationExtraOp,
    IfThenElse,
    ForLoop,
    WhileLoop,
    Input,
    Output,
}

/// One catalog entry: a shape and its pattern. The sentinel carries no
/// pattern and is skipped by the match engine.
#[derive(Debug)]
pub struct Entry {
    pub kind: FormationKind,
    pub expression: Option<Expression>,
}

/// The process-wide catalog, built once and read-only afterwards.
pub fn catalog() -> &'static [Entry] {
    static CATALOG: OnceLock<Vec<Entry>> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Vec<Entry> {
    const INSIDE_BRANCH: Set =
        Set::Excluding(&[Category::IfDef, Category::ThenSection, Category::EndIf]);

    vec![
        Entry {
            kind: FormationKind::Incorrect,
            expression: None,
        },
        Entry {
            kind: FormationKind::Comment,
            expression: Some(
                Expression::start()
                    .one(Category::CommentBody)
                    .many(Category::CommentBody),
            ),
        },
        Entry {
            kind: FormationKind::End,
            expression: Some(Expression::start().one(Category::EndProgram)),
        },
        Entry {
            kind: FormationKind::VarDef,
            expression: Some(
                Expression::start()
                    .carousel(Category::Listing, Category::Identifier)
                    .one(Category::Delimiter)
                    .one(Category::TypeDef)
                    .one(Category::EndStatement),
            ),
        },
        Entry {
            kind: FormationKind::VarAssign,
            expression: Some(
                Expression::start()
                    .maybe_one(Category::AssignDef)
                    .one(Category::Identifier)
                    .one(Category::AssignOp)
                    .one(operand()),
            ),
        },
        Entry {
            kind: FormationKind::Comparison,
            expression: Some(
                Expression::start()
                    .maybe_one(Category::StartArgs)
                    .one(operand())
                    .one(Category::CompareOp)
                    .one(operand())
                    .maybe_one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::ComparisonExtraOp,
            expression: Some(
                Expression::start()
                    .one(Category::AddOp)
                    .maybe_one(Category::StartArgs)
                    .one(operand())
                    .maybe_one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::Addition,
            expression: Some(
                Expression::start()
                    .maybe_one(Category::StartArgs)
                    .one(operand())
                    .one(Category::AddOp)
                    .one(operand())
                    .maybe_one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::AdditionExtraOp,
            expression: Some(
                Expression::start()
                    .one(Category::AddOp)
                    .maybe_one(Category::StartArgs)
                    .one(operand())
                    .maybe_one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::Multiplication,
            expression: Some(
                Expression::start()
                    .maybe_one(Category::StartArgs)
                    .one(operand())
                    .one(Category::MultiplyOp)
                    .one(operand())
                    .maybe_one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::MultiplicationExtraOp,
            expression: Some(
                Expression::start()
                    .one(Category::MultiplyOp)
                    .maybe_one(Category::StartArgs)
                    .one(operand())
                    .maybe_one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::IfThenElse,
            expression: Some(
                Expression::start()
                    .one(Category::IfDef)
                    .many(INSIDE_BRANCH)
                    .one(Category::ThenSection)
                    .many(INSIDE_BRANCH)
                    .one(Category::EndIf),
            ),
        },
        Entry {
            kind: FormationKind::ForLoop,
            expression: Some(
                Expression::start()
                    .one(Category::ForLoopDef)
                    .one(Category::StartArgs)
                    .maybe_one(Category::Identifier)
                    .maybe_one(Category::AssignOp)
                    .many(operand_or_arithmetic())
                    .one(Category::EndStatement)
                    .maybe_one(Category::Identifier)
                    .maybe_one(Category::CompareOp)
                    .many(operand_or_arithmetic())
                    .one(Category::EndStatement)
                    .maybe_one(Category::Identifier)
                    .maybe_one(Category::AssignOp)
                    .many(operand_or_arithmetic())
                    .one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::WhileLoop,
            expression: Some(
                Expression::start()
                    .one(Category::WhileLoopDef)
                    .many(Set::Excluding(&[Category::EndWhileLoop]))
                    .one(Category::EndWhileLoop),
            ),
        },
        Entry {
            kind: FormationKind::Input,
            expression: Some(
                Expression::start()
                    .one(Category::InputDef)
                    .one(Category::StartArgs)
                    .one(Category::Identifier)
                    .many(Category::Identifier)
                    .one(Category::EndArgs),
            ),
        },
        Entry {
            kind: FormationKind::Output,
            expression: Some(
                Expression::start()
                    .one(Category::OutputDef)
                    .one(Category::StartArgs)
                    .many(Set::Excluding(&[Category::EndArgs]))
                    .one(Category::EndArgs),
            ),
        },
    ]
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn sentinel_is_first_and_patternless() {
        let entries = catalog();
        assert_eq!(entries[0].kind, FormationKind::Incorrect);
        assert!(entries[0].expression.is_none());
        assert!(entries[1..]
            .iter()
            .all(|entry| entry.expression.is_some()));
    }

    #[test]
    fn catalog_is_stable_across_calls() {
        assert_eq!(catalog().len(), catalog().len());
        assert_eq!(catalog().len(), 16);
    }
}
