//! Semantic actions, one per statement shape. This is the only layer
//! with side effects: actions read the matched formation and mutate the
//! runtime context. Shapes without a binding here are recognition-only.

use crate::interpret::{value_error, Container, InterpretError, RuntimeContext, ValueType};
use crate::lexing::Category;
use crate::matching::{right_value, Formation, FormationKind, Set};

/// Dispatch a formation's action against the context.
pub fn apply(formation: &Formation, context: &mut RuntimeContext) -> Result<(), InterpretError> {
    match formation.kind() {
        FormationKind::VarDef => declare(formation, context),
        FormationKind::VarAssign => assign(formation, context),
        FormationKind::Output => output(formation, context),

        // Recognized but carrying no behavior: comments and the program
        // end are inert; comparison, addition and multiplication shapes
        // delimit operands for a reducer that is an extension point, not
        // part of this evaluator; branch and loop bodies are delimited
        // but not re-entered; input is a stub.
        FormationKind::Incorrect
        | FormationKind::Comment
        | FormationKind::End
        | FormationKind::Comparison
        | FormationKind::ComparisonExtraOp
        | FormationKind::Addition
        | FormationKind::AdditionExtraOp
        | FormationKind::Multiplication
        | FormationKind::MultiplicationExtraOp
        | FormationKind::IfThenElse
        | FormationKind::ForLoop
        | FormationKind::WhileLoop
        | FormationKind::Input => Ok(()),
    }
}

/// Insert a fresh empty container for every declared identifier.
fn declare(formation: &Formation, context: &mut RuntimeContext) -> Result<(), InterpretError> {
    let type_token = formation
        .first_of(&Set::Only(Category::TypeDef))
        .ok_or(InterpretError::Expected(formation.offset(), "a type name"))?;

    let value_type = match type_token.text {
        "integer" => ValueType::Integer,
        "real" => ValueType::Real,
        "boolean" => ValueType::Boolean,
        other => {
            return Err(InterpretError::InvalidType(
                type_token.offset,
                other.to_string(),
            ))
        }
    };

    let identifier = Set::Only(Category::Identifier);
    for token in formation.all_of(&identifier) {
        if context
            .variables()
            .contains_key(token.text)
        {
            return Err(InterpretError::AlreadyDeclared(
                token.offset,
                token.text.to_string(),
            ));
        }
        context
            .variables_mut()
            .insert(token.text.to_string(), Container::empty(value_type));
    }

    Ok(())
}

/// Parse the literal operand into the named variable's container.
fn assign(formation: &Formation, context: &mut RuntimeContext) -> Result<(), InterpretError> {
    let id = formation
        .first_of(&Set::Only(Category::Identifier))
        .ok_or(InterpretError::Expected(formation.offset(), "an identifier"))?;
    let literal = formation
        .first_of(&right_value())
        .ok_or(InterpretError::Expected(
            formation.offset(),
            "a literal value",
        ))?;

    let container = context
        .variables_mut()
        .get_mut(id.text)
        .ok_or_else(|| InterpretError::NotDeclared(id.offset, id.text.to_string()))?;

    container
        .store(literal.text)
        .map_err(|error| value_error(error, literal.offset))
}

/// Resolve every token between the argument markers — declared variables
/// substitute their rendered value, everything else its literal text —
/// and join the pieces with the `\s` separator into one output line.
fn output(formation: &Formation, context: &mut RuntimeContext) -> Result<(), InterpretError> {
    let body = formation.range_between(
        &Set::Only(Category::StartArgs),
        &Set::Only(Category::EndArgs),
    );

    let pieces: Vec<String> = body
        .iter()
        .map(|token| {
            context
                .variables()
                .get(token.text)
                .and_then(|container| container.render())
                .unwrap_or_else(|| token.text.to_string())
        })
        .collect();

    context.emit(pieces.join("\\s"));
    Ok(())
}
