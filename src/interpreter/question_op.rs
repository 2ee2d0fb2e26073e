use std::sync::LazyLock;

use regex::Regex;

/// Operators question edit lines are expected to use.
pub const OPERATOR_SCOPE: &[&str] = &["add", "delete", "edit", "move"];

static QUESTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^(?P<index>[0-9]+)\.(?P<subindex>[0-9]*)\s\$(?P<operator>[A-Za-z]+)\s(?P<param>[A-Za-z]+)(?:\s(?P<value>.*))?$",
    )
    .expect("Invalid regex")
});

/// An edit addressed to one question, and optionally one of its options or
/// answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOperation {
    pub index: usize,
    pub subindex: Option<usize>,
    pub operator: String,
    pub param: String,
    /// Rest of the line, verbatim. Empty when absent.
    pub value: String,
}

impl QuestionOperation {
    /// Reads lines such as `2.1 $move option 3` or `1. $edit text Burgerville`.
    pub fn read(line: &str) -> Option<QuestionOperation> {
        let caps = QUESTION_LINE.captures(line)?;
        let index = caps.name("index")?.as_str().parse().ok()?;
        let subindex = match caps.name("subindex").map(|m| m.as_str()) {
            Some(s) if !s.is_empty() => Some(s.parse().ok()?),
            _ => None,
        };

        Some(QuestionOperation {
            index,
            subindex,
            operator: caps.name("operator")?.as_str().to_string(),
            param: caps.name("param")?.as_str().to_string(),
            value: caps.name("value").map_or("", |m| m.as_str()).to_string(),
        })
    }

    pub fn has_known_operator(&self) -> bool {
        OPERATOR_SCOPE.contains(&self.operator.as_str())
    }
}
