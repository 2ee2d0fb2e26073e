use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::QuizError;
use crate::model::QuizRecord;
use crate::quiz::Quiz;

const DEFAULT_FILE: &str = "quiz.yaml";

/// `quiz.yaml` in the platform data directory, or the working directory when
/// no home directory can be determined.
pub fn default_quiz_path() -> PathBuf {
    ProjectDirs::from("", "", "professor")
        .map(|dirs| dirs.data_dir().join(DEFAULT_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE))
}

pub fn parse_quiz(content: &str, path: &Path) -> Result<Quiz, QuizError> {
    let record: QuizRecord = serde_yaml::from_str(content).map_err(|source| QuizError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Quiz::from_record(&record)
}

pub fn load_quiz(path: &Path) -> Result<Quiz, QuizError> {
    let content = fs::read_to_string(path).map_err(|source| QuizError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    parse_quiz(&content, path)
}

pub fn render_quiz(quiz: &Quiz) -> Result<String, QuizError> {
    Ok(serde_yaml::to_string(&quiz.to_record())?)
}

pub fn save_quiz(quiz: &Quiz, path: &Path) -> Result<(), QuizError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| QuizError::Io {
            action: "create",
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let yaml = render_quiz(quiz)?;
    atomic_write(path, &yaml)?;
    tracing::info!("saved quiz {:?} to {}", quiz.name, path.display());
    Ok(())
}

fn atomic_write(path: &Path, content: &str) -> Result<(), QuizError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|source| QuizError::Io {
        action: "write",
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| QuizError::Io {
        action: "rename",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
