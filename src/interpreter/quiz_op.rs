use super::{keyword, tokenize};

/// One `param=value` pair of a `$operator ...` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOperation {
    pub operator: String,
    pub param: String,
    pub value: String,
}

impl QuizOperation {
    /// Reads `$edit name="Big Brain Trivia" size=10` into one operation per
    /// pair, all sharing the operator. Lines without the `$operator` prefix,
    /// or without pairs, yield nothing.
    pub fn read(line: &str) -> Vec<QuizOperation> {
        let mut tokens = tokenize(line.trim_start()).into_iter();
        let operator = match tokens.next().and_then(|t| t.strip_prefix('$')) {
            Some(op) if !op.is_empty() && op.chars().all(|c| c.is_ascii_alphabetic()) => op,
            _ => return Vec::new(),
        };

        tokens
            .filter_map(keyword)
            .map(|(param, value)| QuizOperation {
                operator: operator.to_string(),
                param: param.to_string(),
                value: value.to_string(),
            })
            .collect()
    }
}
