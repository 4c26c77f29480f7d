use super::Diagnostic;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::lexing::LoadingError;

/// Format a fatal error with full details including source code context
pub fn full_error<'i>(error: &dyn Diagnostic, filename: &'i Path, source: &'i str) -> String {
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error.problem().bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        error.details()
    )
    .trim_ascii()
    .to_string()
}

/// Format a fatal error with concise single-line output
pub fn concise_error<'i>(error: &dyn Diagnostic, filename: &'i Path, source: &'i str) -> String {
    let offset = error.offset();
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error.problem().bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}:{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

// Helper functions for line/column calculation
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn counting_lines_and_columns() {
        let content = "x : integer;\nx := 5;\nx := 6;";

        let offset = content
            .rfind("x :=")
            .unwrap();
        assert_eq!(calculate_line_number(content, offset), 2);
        assert_eq!(calculate_column_number(content, offset), 0);

        assert_eq!(calculate_line_number(content, 4), 0);
        assert_eq!(calculate_column_number(content, 4), 4);
    }
}
