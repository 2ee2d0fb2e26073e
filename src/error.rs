use std::path::PathBuf;

use thiserror::Error;

/// Failures that are not user-input problems. Edits report those as `false`.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A question was constructed from a tag that has no registered variant.
    #[error("unknown question type: {0}")]
    UnknownType(String),

    #[error("invalid quiz: {0}")]
    InvalidQuiz(String),

    #[error("cannot {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed quiz file {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot encode quiz: {0}")]
    Encode(#[from] serde_yaml::Error),
}
