mod flags;
mod question_op;
mod quiz_op;

use std::sync::LazyLock;

use regex::Regex;

pub use flags::{FlagInterpreter, FlagValue, Flags, DEFAULT_SCOPE, INTEGER_FLAGS};
pub use question_op::{QuestionOperation, OPERATOR_SCOPE};
pub use quiz_op::QuizOperation;

static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^(?P<name>[A-Za-z]+)=(?P<value>".*"|\S+)$"#).expect("Invalid regex")
});

static FREE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("Invalid regex"));

/// Splits a line on whitespace, except inside double quotes: a quote opens a
/// span that runs to the next quote (or the end of the line).
pub(crate) fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut quoted = false;

    for (i, c) in line.char_indices() {
        if c == '"' {
            quoted = !quoted;
        }
        if c.is_whitespace() && !quoted {
            if let Some(s) = start.take() {
                tokens.push(&line[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&line[s..]);
    }
    tokens
}

/// `name=value` with the surrounding quotes of the value stripped.
pub(crate) fn keyword(token: &str) -> Option<(&str, &str)> {
    let caps = KEYWORD.captures(token)?;
    let name = caps.name("name")?.as_str();
    let value = caps.name("value")?.as_str().trim_matches('"');
    Some((name, value))
}

pub(crate) fn free(token: &str) -> Option<&str> {
    FREE.is_match(token).then_some(token)
}
