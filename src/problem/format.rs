use owo_colors::OwoColorize;
use std::path::Path;

use crate::deck::{DeckError, ErrorKind};
use crate::reading::LoadingError;

/// Format a deck error with full details: the offending line quoted,
/// a caret under the offending token, and the failure context spelled
/// out.
pub fn full_deck_error(error: &DeckError, filename: &Path, source: &str) -> String {
    let line = error.line;
    let code = source
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("?");
    let column = locate(error, code);
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        error
            .message()
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        context(error)
    )
    .trim_ascii()
    .to_string()
}

/// Format a deck error with concise single-line output.
pub fn concise_deck_error(error: &DeckError, filename: &Path) -> String {
    format!(
        "{}: {}:{} {}{}",
        "error".bright_red(),
        filename.to_string_lossy(),
        error.line,
        error
            .message()
            .bold(),
        match context(error) {
            context if context.is_empty() => String::new(),
            context => format!(" ({})", context),
        }
    )
}

/// Format a LoadingError with concise single-line output.
pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

// Point at the offending token if it can still be found on its line;
// failing that, at the end of whatever content the line has.
fn locate(error: &DeckError, code: &str) -> usize {
    let token = match &error.kind {
        ErrorKind::MalformedValue { token } => Some(*token),
        ErrorKind::InvalidValue { token, .. } => Some(*token),
        _ => None,
    };

    match token.and_then(|token| code.find(token)) {
        Some(i) => i + 1,
        None => code
            .trim_end()
            .chars()
            .count()
            .max(1),
    }
}

fn context(error: &DeckError) -> String {
    match (error.card, error.field) {
        (Some(card), Some(field)) => {
            format!("while reading field {} of the {} card", field, card)
        }
        (Some(card), None) => format!("while reading the {} card", card),
        (None, Some(field)) => format!("while reading field {}", field),
        (None, None) => String::new(),
    }
}
