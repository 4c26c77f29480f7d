//! Classifies raw source text into a flat token stream. Keywords and
//! delimiters are recognized against fixed lookup tables, words against
//! the identifier rule, and numeric literals against one sub-tokenizer
//! per radix, tried in table order.

use tracing::debug;

use crate::lexing::{Category, Token};

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexingError {
    UnknownLexeme(usize, String),
    UnterminatedComment(usize),
}

impl LexingError {
    pub fn offset(&self) -> usize {
        match self {
            LexingError::UnknownLexeme(offset, _) => *offset,
            LexingError::UnterminatedComment(offset) => *offset,
        }
    }

    pub fn problem(&self) -> String {
        match self {
            LexingError::UnknownLexeme(_, text) => format!("Unknown lexeme '{}'", text),
            LexingError::UnterminatedComment(_) => "Unterminated comment".to_string(),
        }
    }

    pub fn details(&self) -> String {
        match self {
            LexingError::UnknownLexeme(_, _) => {
                "This run of characters is not a keyword, delimiter, identifier, or \
                 numeric literal of the language."
                    .to_string()
            }
            LexingError::UnterminatedComment(_) => {
                "Every comment opened with '{' must be closed with a matching '}'."
                    .to_string()
            }
        }
    }
}

/// Tokenize an entire source text. The stream is finite and strictly
/// ordered; every token carries the byte offset it was recognized at.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexingError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < source.len() {
        let rest = &source[offset..];
        let c = match rest.chars().next() {
            Some(c) => c,
            None => break,
        };

        if c.is_whitespace() {
            offset += c.len_utf8();
            continue;
        }

        if c == '{' {
            match rest.find('}') {
                Some(end) => {
                    tokens.push(Token::new(Category::CommentBody, &rest[1..end], offset));
                    offset += end + 1;
                }
                None => return Err(LexingError::UnterminatedComment(offset)),
            }
            continue;
        }

        if let Some((category, width)) = take_delimiter(rest) {
            tokens.push(Token::new(category, &rest[..width], offset));
            offset += width;
            continue;
        }

        if is_word_start(rest) {
            let width = word_width(rest);
            let word = &rest[..width];
            match classify_word(word) {
                Some(category) => tokens.push(Token::new(category, word, offset)),
                None => return Err(LexingError::UnknownLexeme(offset, word.to_string())),
            }
            offset += width;
            continue;
        }

        return Err(LexingError::UnknownLexeme(offset, c.to_string()));
    }

    debug!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}

/// Delimiter table. Two-character delimiters are tried before their
/// one-character prefixes.
fn take_delimiter(rest: &str) -> Option<(Category, usize)> {
    for (sample, category) in [
        (":=", Category::AssignOp),
        ("==", Category::CompareOp),
        ("!=", Category::CompareOp),
        (">=", Category::CompareOp),
        ("<=", Category::CompareOp),
    ] {
        if rest.starts_with(sample) {
            return Some((category, 2));
        }
    }
    for (sample, category) in [
        (";", Category::EndStatement),
        (":", Category::Delimiter),
        (",", Category::Listing),
        ("(", Category::StartArgs),
        (")", Category::EndArgs),
        ("*", Category::MultiplyOp),
        ("/", Category::MultiplyOp),
        (">", Category::CompareOp),
        ("<", Category::CompareOp),
    ] {
        if rest.starts_with(sample) {
            return Some((category, 1));
        }
    }
    None
}

fn is_word_start(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => true,
        Some('-') => chars
            .next()
            .is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Width of the word starting at the front of `rest`. A word runs over
/// alphanumerics, underscores and dots; a sign directly after an exponent
/// marker stays inside the word so that forms like `1e-5` stay whole.
fn word_width(rest: &str) -> usize {
    let mut width = 0;
    let mut previous = '\0';
    for c in rest.chars() {
        let inside = c.is_ascii_alphanumeric()
            || c == '_'
            || c == '.'
            || (width == 0 && c == '-')
            || ((c == '+' || c == '-') && matches!(previous, 'e' | 'E'));
        if !inside {
            break;
        }
        width += c.len_utf8();
        previous = c;
    }
    width
}

/// Classification chain: keywords, then the identifier rule, then the
/// numeric sub-tokenizers in radix order.
fn classify_word(word: &str) -> Option<Category> {
    if let Some(category) = keyword(word) {
        return Some(category);
    }
    if regex!(r"^[A-Za-z_][A-Za-z0-9_]*$").is_match(word) {
        return Some(Category::Identifier);
    }
    if regex!(r"^-?[01]+b$").is_match(word) {
        return Some(Category::BinaryNum);
    }
    if regex!(r"^-?[0-7]+o$").is_match(word) {
        return Some(Category::OctalNum);
    }
    if regex!(r"^-?[0-9A-Fa-f]+h$").is_match(word) {
        return Some(Category::HexNum);
    }
    if regex!(r"^-?[0-9]+d?$").is_match(word) {
        return Some(Category::DecimalNum);
    }
    if regex!(r"^-?[0-9]+(\.[0-9]+([eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)$").is_match(word) {
        return Some(Category::FloatNum);
    }
    None
}

fn keyword(word: &str) -> Option<Category> {
    let category = match word {
        "integer" | "real" | "boolean" => Category::TypeDef,
        "let" => Category::AssignDef,
        "if" => Category::IfDef,
        "then" => Category::ThenSection,
        "end_if" => Category::EndIf,
        "for" => Category::ForLoopDef,
        "while" => Category::WhileLoopDef,
        "end_while" => Category::EndWhileLoop,
        "input" => Category::InputDef,
        "output" => Category::OutputDef,
        "plus" | "minus" => Category::AddOp,
        "true" | "false" => Category::BooleanLit,
        "end" => Category::EndProgram,
        _ => return None,
    };
    Some(category)
}
