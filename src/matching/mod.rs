//! Declarative pattern expressions over token categories. An Expression
//! is an ordered list of steps, each a category-set with a quantifier; it
//! is stateless and reusable, and evaluating it against a token window
//! mutates neither.

use crate::lexing::{Category, Token};

pub mod catalog;
pub mod formation;

pub use catalog::{catalog, FormationKind};
pub use formation::{match_best, Formation};

/// A set of categories a single token may be drawn from. Derived sets are
/// built with `Excluding` (wildcard minus the named categories) and
/// `AnyOf` (union of the named categories).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Set {
    Only(Category),
    AnyOf(&'static [Category]),
    Anything,
    Excluding(&'static [Category]),
}

impl Set {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Set::Only(only) => *only == category,
            Set::AnyOf(list) => list.contains(&category),
            Set::Anything => true,
            Set::Excluding(list) => !list.contains(&category),
        }
    }
}

impl From<Category> for Set {
    fn from(category: Category) -> Set {
        Set::Only(category)
    }
}

const OPERAND: &[Category] = &[
    Category::Identifier,
    Category::BinaryNum,
    Category::OctalNum,
    Category::HexNum,
    Category::DecimalNum,
    Category::FloatNum,
    Category::BooleanLit,
];

const RIGHT_VALUE: &[Category] = &[
    Category::BinaryNum,
    Category::OctalNum,
    Category::HexNum,
    Category::DecimalNum,
    Category::FloatNum,
    Category::BooleanLit,
];

const OPERAND_OR_ARITHMETIC: &[Category] = &[
    Category::Identifier,
    Category::BinaryNum,
    Category::OctalNum,
    Category::HexNum,
    Category::DecimalNum,
    Category::FloatNum,
    Category::BooleanLit,
    Category::AddOp,
    Category::MultiplyOp,
];

/// Anything that can sit on either side of an operator: an identifier or
/// a literal.
pub fn operand() -> Set {
    Set::AnyOf(OPERAND)
}

/// Literal values only; what an assignment stores.
pub fn right_value() -> Set {
    Set::AnyOf(RIGHT_VALUE)
}

/// Operands merged with the arithmetic operators, for loop clauses.
pub fn operand_or_arithmetic() -> Set {
    Set::AnyOf(OPERAND_OR_ARITHMETIC)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Quantifier {
    /// The next token must be in the set.
    One,
    /// Consume one token if it is in the set, else consume none.
    MaybeOne,
    /// Greedily consume tokens in the set; zero is fine.
    Many,
    /// An item, then repeated (separator, item) pairs. A separator not
    /// followed by an item is left unconsumed. Fails only when the
    /// initial item is absent.
    Carousel { separator: Set },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    set: Set,
    quantifier: Quantifier,
}

/// The result of a successful evaluation: how much of the window the
/// expression consumed. Candidates are ranked on this alone; the catalog
/// order breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub consumed: usize,
}

/// An expected sequence of category-sets with per-step quantifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    steps: Vec<Step>,
}

impl Expression {
    pub fn start() -> Expression {
        Expression { steps: Vec::new() }
    }

    pub fn one(mut self, set: impl Into<Set>) -> Expression {
        self.steps.push(Step {
            set: set.into(),
            quantifier: Quantifier::One,
        });
        self
    }

    pub fn maybe_one(mut self, set: impl Into<Set>) -> Expression {
        self.steps.push(Step {
            set: set.into(),
            quantifier: Quantifier::MaybeOne,
        });
        self
    }

    pub fn many(mut self, set: impl Into<Set>) -> Expression {
        self.steps.push(Step {
            set: set.into(),
            quantifier: Quantifier::Many,
        });
        self
    }

    pub fn carousel(mut self, separator: impl Into<Set>, item: impl Into<Set>) -> Expression {
        self.steps.push(Step {
            set: item.into(),
            quantifier: Quantifier::Carousel {
                separator: separator.into(),
            },
        });
        self
    }

    /// Evaluate against the window, starting at its first token. Returns
    /// `None` when the window does not fit the expression; this is not an
    /// error, just "this shape does not apply here".
    pub fn matches(&self, window: &[Token]) -> Option<Match> {
        let mut consumed = 0;

        for step in &self.steps {
            match &step.quantifier {
                Quantifier::One => {
                    if !admits(&step.set, window, consumed) {
                        return None;
                    }
                    consumed += 1;
                }
                Quantifier::MaybeOne => {
                    if admits(&step.set, window, consumed) {
                        consumed += 1;
                    }
                }
                Quantifier::Many => {
                    while admits(&step.set, window, consumed) {
                        consumed += 1;
                    }
                }
                Quantifier::Carousel { separator } => {
                    if !admits(&step.set, window, consumed) {
                        return None;
                    }
                    consumed += 1;
                    while admits(separator, window, consumed)
                        && admits(&step.set, window, consumed + 1)
                    {
                        consumed += 2;
                    }
                }
            }
        }

        Some(Match { consumed })
    }
}

fn admits(set: &Set, window: &[Token], position: usize) -> bool {
    window
        .get(position)
        .is_some_and(|token| set.admits(token.category))
}
