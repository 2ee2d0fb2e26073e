use std::fs;
use std::path::Path;

use professor::model::{AnswerValue, QuizMode};
use professor::persist;
use professor::{QuestionType, QuizError};

#[test]
fn test_load_sample_quiz() {
    let quiz = persist::load_quiz(Path::new("fixtures/sample_quiz.yaml")).unwrap();

    assert_eq!(quiz.name, "Big Brain Trivia");
    assert_eq!(quiz.id, 7);
    assert!(!quiz.shuffle);
    assert_eq!(quiz.mode, QuizMode::Sync);
    assert_eq!(quiz.size(), 4);
    assert_eq!(quiz.limit(), chrono::Duration::minutes(10));
    assert_eq!(quiz.period(), chrono::Duration::seconds(30));

    let kinds: Vec<_> = quiz.questions.iter().map(|q| q.kind()).collect();
    assert_eq!(kinds, QuestionType::ALL.to_vec());

    // Numeric answers are stored rounded
    assert_eq!(quiz.questions[1].answer(), Some(AnswerValue::Float(0.67)));

    // Multiple-response answers are stored sorted
    assert_eq!(
        quiz.questions[3].answer(),
        Some(AnswerValue::Set(vec![
            "Enhancer blocking".to_string(),
            "Transcription silencing".to_string(),
        ]))
    );
}

#[test]
fn test_unknown_fields_are_dropped() {
    let quiz = persist::load_quiz(Path::new("fixtures/sample_quiz.yaml")).unwrap();
    let yaml = persist::render_quiz(&quiz).unwrap();
    assert!(!yaml.contains("difficulty"));
    assert!(yaml.contains("type: multiple-response"));
}

#[test]
fn test_save_and_reload() {
    let quiz = persist::load_quiz(Path::new("fixtures/sample_quiz.yaml")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("quiz.yaml");

    persist::save_quiz(&quiz, &path).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());

    let reloaded = persist::load_quiz(&path).unwrap();
    assert_eq!(reloaded, quiz);
}

#[test]
fn test_new_quiz_round_trips() {
    let mut quiz = professor::Quiz::new("Film Night").unwrap();
    assert!(quiz.questions.is_empty());
    assert!(quiz.add_question("free-response"));
    assert!(quiz.questions[0].edit_answer("Casablanca"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("film.yaml");
    persist::save_quiz(&quiz, &path).unwrap();
    assert_eq!(persist::load_quiz(&path).unwrap(), quiz);
}

#[test]
fn test_numbers_in_lists_read_as_text() {
    let quiz = persist::load_quiz(Path::new("fixtures/numeric_lists.yaml")).unwrap();
    assert_eq!(quiz.questions.len(), 3);

    let years = &quiz.questions[0];
    assert_eq!(
        years.choices().unwrap().options(),
        ["1979", "1984", "1989"].map(String::from)
    );
    assert_eq!(years.answer(), Some(AnswerValue::Set(vec!["1984".to_string()])));
    assert!(years.check("b"));

    let published = &quiz.questions[1];
    assert_eq!(
        published.choices().unwrap().options(),
        ["1948", "1949", "1950.5"].map(String::from)
    );
    assert!(published.check("b"));

    let truths = &quiz.questions[2];
    assert!(truths.check("a"));
    assert!(!truths.check("b"));
}

#[test]
fn test_loaded_timing_and_size_are_checked() {
    let long_period = "name: Trivia\nlimit: \"1:0\"\nperiod: \"2:0\"\n";
    let err = persist::parse_quiz(long_period, Path::new("period.yaml")).unwrap_err();
    assert!(matches!(err, QuizError::InvalidQuiz(_)));

    let zero_size = "name: Trivia\nsize: 0\n";
    let err = persist::parse_quiz(zero_size, Path::new("size.yaml")).unwrap_err();
    assert!(matches!(err, QuizError::InvalidQuiz(_)));
}

#[test]
fn test_unknown_question_type_fails() {
    let content = "name: Broken\nquestions:\n  - id: 1\n    type: essay\n";
    let err = persist::parse_quiz(content, Path::new("broken.yaml")).unwrap_err();
    assert!(matches!(err, QuizError::UnknownType(ref tag) if tag == "essay"));
}

#[test]
fn test_invalid_quiz_settings_fail() {
    let long_name = format!("name: {}\n", "x".repeat(51));
    let err = persist::parse_quiz(&long_name, Path::new("long.yaml")).unwrap_err();
    assert!(matches!(err, QuizError::InvalidQuiz(_)));

    let bad_limit = "name: Trivia\nlimit: soon\n";
    let err = persist::parse_quiz(bad_limit, Path::new("limit.yaml")).unwrap_err();
    assert!(matches!(err, QuizError::InvalidQuiz(_)));
}

#[test]
fn test_malformed_and_missing_files_fail() {
    let err = persist::parse_quiz("name: [unclosed", Path::new("bad.yaml")).unwrap_err();
    assert!(matches!(err, QuizError::Yaml { .. }));
    assert!(err.to_string().contains("bad.yaml"));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.yaml");
    let err = persist::load_quiz(&missing).unwrap_err();
    assert!(matches!(err, QuizError::Io { action: "read", .. }));

    fs::write(dir.path().join("empty.yaml"), "").unwrap();
    assert!(persist::load_quiz(&dir.path().join("empty.yaml")).is_err());
}
