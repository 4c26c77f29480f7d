//! Typed runtime value cells. A container is created empty at
//! declaration time with its type fixed forever; assignment parses text
//! into it, compute mutates it in place, compare answers a predicate, and
//! render produces the sign-and-magnitude binary form.

use std::fmt;

/// The three legal variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Real,
    Boolean,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Integer => write!(f, "integer"),
            ValueType::Real => write!(f, "real"),
            ValueType::Boolean => write!(f, "boolean"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    MalformedLiteral {
        text: String,
        value_type: ValueType,
    },
    UnsupportedOperation {
        name: String,
        value_type: ValueType,
    },
    DivisionByZero,
}

/// A typed value cell. The variant is selected once, at declaration time;
/// after that no dispatch on type names happens anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    Integer(Option<i64>),
    Real(Option<f64>),
    Boolean(Option<bool>),
}

impl Container {
    pub fn empty(value_type: ValueType) -> Container {
        match value_type {
            ValueType::Integer => Container::Integer(None),
            ValueType::Real => Container::Real(None),
            ValueType::Boolean => Container::Boolean(None),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Container::Integer(_) => ValueType::Integer,
            Container::Real(_) => ValueType::Real,
            Container::Boolean(_) => ValueType::Boolean,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Container::Integer(value) => value.is_none(),
            Container::Real(value) => value.is_none(),
            Container::Boolean(value) => value.is_none(),
        }
    }

    /// Parse text into this container's type and store it, replacing any
    /// previous value.
    pub fn store(&mut self, text: &str) -> Result<(), ValueError> {
        match self {
            Container::Integer(value) => {
                *value = Some(parse_integer(text).ok_or_else(|| malformed(text, ValueType::Integer))?);
            }
            Container::Real(value) => {
                *value = Some(
                    text.parse::<f64>()
                        .map_err(|_| malformed(text, ValueType::Real))?,
                );
            }
            Container::Boolean(value) => {
                *value = Some(match text {
                    "true" => true,
                    "false" => false,
                    _ => return Err(malformed(text, ValueType::Boolean)),
                });
            }
        }
        Ok(())
    }

    /// In-place arithmetic. Ops are named `plus`, `minus`, `*`, `/`.
    /// Real keeps IEEE-754 semantics; integer arithmetic wraps, except
    /// division by zero which is reported. An unknown op name or a
    /// mixed-type operand is an error — unlike `compare`, this side
    /// propagates.
    pub fn compute(&mut self, name: &str, operand: &Container) -> Result<(), ValueError> {
        match (&mut *self, operand) {
            (Container::Integer(Some(value)), Container::Integer(Some(operand))) => {
                *value = match name {
                    "plus" => value.wrapping_add(*operand),
                    "minus" => value.wrapping_sub(*operand),
                    "*" => value.wrapping_mul(*operand),
                    "/" => value
                        .checked_div(*operand)
                        .ok_or(ValueError::DivisionByZero)?,
                    _ => return Err(unsupported(name, ValueType::Integer)),
                };
                Ok(())
            }
            (Container::Real(Some(value)), Container::Real(Some(operand))) => {
                *value = match name {
                    "plus" => *value + operand,
                    "minus" => *value - operand,
                    "*" => *value * operand,
                    "/" => *value / operand,
                    _ => return Err(unsupported(name, ValueType::Real)),
                };
                Ok(())
            }
            _ => Err(unsupported(name, self.value_type())),
        }
    }

    /// Boolean predicate over this value and an operand. Fails closed: an
    /// unknown op name, a mixed-type operand, or an empty value on either
    /// side answers `false` rather than erroring.
    pub fn compare(&self, name: &str, operand: &Container) -> bool {
        match (self, operand) {
            (Container::Integer(Some(value)), Container::Integer(Some(operand))) => {
                compare_ordered(name, value, operand)
            }
            (Container::Real(Some(value)), Container::Real(Some(operand))) => {
                compare_ordered(name, value, operand)
            }
            (Container::Boolean(Some(value)), Container::Boolean(Some(operand))) => match name {
                "==" => value == operand,
                "!=" => value != operand,
                _ => false,
            },
            _ => false,
        }
    }

    /// The textual form of a stored value. Integer and real values render
    /// as a sign-and-magnitude binary string of the truncated integer
    /// part: `1_` for negative, `0_` otherwise, then the binary
    /// magnitude. The sign comes from the stored value itself, so -0.5
    /// renders as `1_0`. An empty container renders nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            Container::Integer(Some(value)) => {
                Some(sign_and_magnitude(*value < 0, value.unsigned_abs()))
            }
            Container::Real(Some(value)) => {
                let magnitude = value.trunc().abs() as u64;
                Some(sign_and_magnitude(*value < 0.0, magnitude))
            }
            Container::Boolean(Some(value)) => Some(value.to_string()),
            _ => None,
        }
    }
}

fn sign_and_magnitude(negative: bool, magnitude: u64) -> String {
    format!("{}{:b}", if negative { "1_" } else { "0_" }, magnitude)
}

fn compare_ordered<T: PartialOrd>(name: &str, value: &T, operand: &T) -> bool {
    match name {
        "==" => value == operand,
        "!=" => value != operand,
        ">=" => value >= operand,
        "<=" => value <= operand,
        ">" => value > operand,
        "<" => value < operand,
        _ => false,
    }
}

/// Integer literals come in the radix-suffixed forms the tokenizer
/// recognizes: binary `b`, octal `o`, hexadecimal `h`, and decimal with
/// an optional `d` suffix.
fn parse_integer(text: &str) -> Option<i64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => (-1, digits),
        None => (1, text),
    };
    let magnitude = if let Some(digits) = digits.strip_suffix('b') {
        i64::from_str_radix(digits, 2).ok()?
    } else if let Some(digits) = digits.strip_suffix('o') {
        i64::from_str_radix(digits, 8).ok()?
    } else if let Some(digits) = digits.strip_suffix('h') {
        i64::from_str_radix(digits, 16).ok()?
    } else if let Some(digits) = digits.strip_suffix('d') {
        digits.parse::<i64>().ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(sign * magnitude)
}

fn malformed(text: &str, value_type: ValueType) -> ValueError {
    ValueError::MalformedLiteral {
        text: text.to_string(),
        value_type,
    }
}

fn unsupported(name: &str, value_type: ValueType) -> ValueError {
    ValueError::UnsupportedOperation {
        name: name.to_string(),
        value_type,
    }
}

#[cfg(test)]
mod check {
    use super::*;

    fn real(text: &str) -> Container {
        let mut container = Container::empty(ValueType::Real);
        container.store(text).unwrap();
        container
    }

    fn integer(text: &str) -> Container {
        let mut container = Container::empty(ValueType::Integer);
        container.store(text).unwrap();
        container
    }

    #[test]
    fn rendering_truncates_not_rounds() {
        assert_eq!(real("3.5").render(), Some("0_11".to_string()));
        assert_eq!(real("-3.5").render(), Some("1_11".to_string()));
        assert_eq!(real("3.999").render(), Some("0_11".to_string()));
    }

    #[test]
    fn rendering_near_zero() {
        assert_eq!(real("0.0").render(), Some("0_0".to_string()));
        assert_eq!(real("-0.5").render(), Some("1_0".to_string()));
        assert_eq!(integer("0").render(), Some("0_0".to_string()));
    }

    #[test]
    fn rendering_integers() {
        assert_eq!(integer("5").render(), Some("0_101".to_string()));
        assert_eq!(integer("-6").render(), Some("1_110".to_string()));
    }

    #[test]
    fn empty_containers_render_nothing() {
        assert_eq!(Container::empty(ValueType::Real).render(), None);
        assert_eq!(Container::empty(ValueType::Boolean).render(), None);
    }

    #[test]
    fn radix_suffixed_literals() {
        assert_eq!(integer("1011b"), Container::Integer(Some(11)));
        assert_eq!(integer("17o"), Container::Integer(Some(15)));
        assert_eq!(integer("1Fh"), Container::Integer(Some(31)));
        assert_eq!(integer("42d"), Container::Integer(Some(42)));
        assert_eq!(integer("-42"), Container::Integer(Some(-42)));
    }

    #[test]
    fn malformed_literals_are_reported() {
        let mut container = Container::empty(ValueType::Integer);
        assert_eq!(
            container.store("3.5"),
            Err(ValueError::MalformedLiteral {
                text: "3.5".to_string(),
                value_type: ValueType::Integer,
            })
        );

        let mut container = Container::empty(ValueType::Boolean);
        assert!(container.store("yes").is_err());
    }

    #[test]
    fn unknown_comparison_fails_closed_for_every_type() {
        assert!(!integer("5").compare("^", &integer("5")));
        assert!(!real("5.0").compare("^", &real("5.0")));

        let mut yes = Container::empty(ValueType::Boolean);
        yes.store("true").unwrap();
        assert!(!yes.compare("^", &yes));
        assert!(!yes.compare(">=", &yes));
    }

    #[test]
    fn known_comparisons() {
        assert!(integer("5").compare("==", &integer("5")));
        assert!(integer("5").compare("<=", &integer("6")));
        assert!(!integer("5").compare(">", &integer("6")));
        assert!(real("1.5").compare("!=", &real("2.5")));
    }

    #[test]
    fn comparing_across_types_fails_closed() {
        assert!(!integer("5").compare("==", &real("5.0")));
        assert!(!integer("5").compare("==", &Container::empty(ValueType::Integer)));
    }

    #[test]
    fn unknown_computation_propagates() {
        let mut container = integer("5");
        let operand = integer("2");
        assert_eq!(
            container.compute("^", &operand),
            Err(ValueError::UnsupportedOperation {
                name: "^".to_string(),
                value_type: ValueType::Integer,
            })
        );
    }

    #[test]
    fn arithmetic_mirrors_between_types() {
        let mut container = integer("7");
        container.compute("plus", &integer("3")).unwrap();
        container.compute("minus", &integer("2")).unwrap();
        container.compute("*", &integer("4")).unwrap();
        container.compute("/", &integer("8")).unwrap();
        assert_eq!(container, Container::Integer(Some(4)));

        let mut container = real("7.0");
        container.compute("/", &real("2.0")).unwrap();
        assert_eq!(container, Container::Real(Some(3.5)));
    }

    #[test]
    fn integer_division_by_zero_is_reported() {
        let mut container = integer("7");
        assert_eq!(
            container.compute("/", &integer("0")),
            Err(ValueError::DivisionByZero)
        );
    }

    #[test]
    fn real_division_by_zero_follows_ieee() {
        let mut container = real("7.0");
        container.compute("/", &real("0.0")).unwrap();
        assert_eq!(container, Container::Real(Some(f64::INFINITY)));
    }
}
