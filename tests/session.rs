use std::fs;
use std::path::Path;

use professor::model::{AnswerValue, QuizMode};
use professor::session::{Command, Refresh};
use professor::{EditSession, QuestionType};

fn session() -> EditSession {
    let content = fs::read_to_string("fixtures/sample_quiz.yaml").expect("Cannot read fixture");
    let quiz = professor::persist::parse_quiz(&content, Path::new("sample_quiz.yaml")).unwrap();
    EditSession::new(quiz)
}

fn question_number(refreshes: &[Refresh]) -> Option<usize> {
    match refreshes {
        [Refresh::Question { number, .. }] => Some(*number),
        _ => None,
    }
}

#[test]
fn test_command_routing() {
    assert!(matches!(Command::parse("$edit name=Film"), Command::Quiz(ops) if ops.len() == 1));
    assert!(matches!(Command::parse("2.1 $delete option"), Command::Question(_)));
    assert!(matches!(Command::parse("/set async"), Command::Settings(flags) if flags.is_set("async")));
    assert_eq!(Command::parse("/settings async"), Command::Ignored);
    assert_eq!(Command::parse("$edit"), Command::Ignored);
    assert_eq!(Command::parse("what is this"), Command::Ignored);
    assert_eq!(Command::parse(""), Command::Ignored);
}

#[test]
fn test_quiz_edit_refreshes_quiz_card() {
    let mut s = session();
    let refreshes = s.apply_line(r#"$edit name="Film Night" size=2"#);
    assert_eq!(refreshes.len(), 1);
    match &refreshes[0] {
        Refresh::Quiz(card) => assert_eq!(card.title, "Film Night"),
        other => panic!("Expected a quiz card, got {:?}", other),
    }
    assert_eq!(s.quiz.name, "Film Night");
    assert_eq!(s.quiz.size(), 2);
    assert!(s.is_modified());
}

#[test]
fn test_rejected_lines_change_nothing() {
    let mut s = session();
    let before = s.quiz.clone();
    assert!(s.apply_line("hello there").is_empty());
    assert!(s.apply_line("$edit size=0").is_empty());
    assert!(s.apply_line("$edit name=").is_empty());
    assert!(s.apply_line("1. $frobnicate text x").is_empty());
    assert_eq!(s.quiz, before);
    assert!(!s.is_modified());
}

#[test]
fn test_question_indices_are_one_based() {
    let mut s = session();
    let refreshes = s.apply_line("1. $edit text What is Norway's capital city?");
    assert_eq!(question_number(&refreshes), Some(1));
    assert_eq!(
        s.quiz.questions[0].text.as_deref(),
        Some("What is Norway's capital city?")
    );

    assert!(s.apply_line("0. $edit text nope").is_empty());
    assert!(s.apply_line("5. $edit text nope").is_empty());
    assert!(s.apply_line("3.0 $delete option").is_empty());
}

#[test]
fn test_option_commands() {
    let mut s = session();
    // Option 1 is the answer.
    assert!(s.apply_line("3.1 $delete option").is_empty());

    assert_eq!(question_number(&s.apply_line("3.2 $delete option")), Some(3));
    assert_eq!(
        s.quiz.questions[2].choices().unwrap().options(),
        ["Paris".to_string(), "Berlin".to_string()]
    );

    assert_eq!(question_number(&s.apply_line("3.1 $move option 2")), Some(3));
    assert_eq!(s.grade(3, "b"), Some(true));

    assert!(!s.apply_line("3. $add option Madrid").is_empty());
    assert!(!s.apply_line("3.3 $edit option Rome").is_empty());
    assert_eq!(s.grade(3, "Paris"), Some(true));
    assert_eq!(s.grade(3, "c"), Some(false));
}

#[test]
fn test_answer_commands() {
    let mut s = session();
    // Answers are sorted: Enhancer blocking comes first.
    assert!(!s.apply_line("4.1 $edit answer Protein synthesis").is_empty());
    assert_eq!(
        s.quiz.questions[3].answer(),
        Some(AnswerValue::Set(vec![
            "Protein synthesis".to_string(),
            "Transcription silencing".to_string(),
        ]))
    );
    assert_eq!(s.grade(4, "b c"), Some(true));

    assert!(!s.apply_line("4. $add answer RNA splicing").is_empty());
    assert_eq!(s.grade(4, "b c d"), Some(true));
    assert!(!s.apply_line("4.3 $delete answer").is_empty());
    assert_eq!(s.grade(4, "b d"), Some(true));

    assert!(!s.apply_line("2. $edit answer 0.5").is_empty());
    assert_eq!(s.grade(2, "0.50"), Some(true));
    assert!(s.apply_line("2. $edit answer half").is_empty());
}

#[test]
fn test_type_command_morphs() {
    let mut s = session();
    assert!(!s.apply_line("1. $edit type multiple-response").is_empty());
    assert_eq!(s.quiz.questions[0].kind(), QuestionType::MultipleResponse);
    assert_eq!(s.grade(1, "a"), Some(true));
    assert!(s.apply_line("1. $edit type essay").is_empty());
}

#[test]
fn test_question_management() {
    let mut s = session();
    assert!(!s.apply_line("$add question=numeric").is_empty());
    assert_eq!(s.quiz.questions.len(), 5);
    assert_eq!(s.quiz.questions[4].id, 5);
    assert!(s.apply_line("$add question=essay").is_empty());

    let refreshes = s.apply_line("2. $move question 1");
    assert!(matches!(refreshes.as_slice(), [Refresh::Quiz(_)]));
    assert_eq!(s.quiz.questions[0].id, 2);
    assert_eq!(s.quiz.questions[1].id, 1);

    assert!(!s.apply_line("$delete question=5").is_empty());
    assert_eq!(s.quiz.questions.len(), 4);
    assert!(!s.apply_line("1. $delete question").is_empty());
    assert_eq!(s.quiz.questions[0].id, 1);
    assert!(s.apply_line("$delete question=0").is_empty());
}

#[test]
fn test_settings() {
    let mut s = session();
    assert!(!s.apply_line("/set async shuffle period=0:45").is_empty());
    assert_eq!(s.quiz.mode, QuizMode::Async);
    assert!(s.quiz.shuffle);
    assert_eq!(s.quiz.period(), chrono::Duration::seconds(45));

    assert!(!s.apply_line(r#"/set sync quiz="Weekly Trivia" size=all"#).is_empty());
    assert_eq!(s.quiz.mode, QuizMode::Sync);
    assert_eq!(s.quiz.name, "Weekly Trivia");
    assert_eq!(s.quiz.size(), 4);
}

#[test]
fn test_settings_change_limit_and_period_together() {
    let mut s = session();
    assert!(!s.apply_line("/set limit=0:20 period=0:10").is_empty());
    assert_eq!(s.quiz.limit(), chrono::Duration::seconds(20));
    assert_eq!(s.quiz.period(), chrono::Duration::seconds(10));

    assert!(!s.apply_line("/set limit=1:0:0 period=30:0").is_empty());
    assert_eq!(s.quiz.limit(), chrono::Duration::hours(1));
    assert_eq!(s.quiz.period(), chrono::Duration::minutes(30));

    assert!(s.apply_line("/set limit=0:10 period=0:20").is_empty());
    assert!(s.apply_line("/set limit").is_empty());
    assert_eq!(s.quiz.limit(), chrono::Duration::hours(1));
}

#[test]
fn test_quiz_line_applies_all_or_nothing() {
    let mut s = session();
    let before = s.quiz.clone();
    assert!(s.apply_line("$edit name=Renamed size=0").is_empty());
    assert_eq!(s.quiz, before);
    assert!(!s.is_modified());

    assert!(!s.apply_line("$edit name=Renamed size=2").is_empty());
    assert_eq!(s.quiz.name, "Renamed");
    assert_eq!(s.quiz.size(), 2);
}

#[test]
fn test_help_lines() {
    let mut s = session();
    let refreshes = s.apply_line("/help numeric");
    match refreshes.as_slice() {
        [Refresh::Help(card)] => {
            assert_eq!(card.title, "Numeric");
            assert!(card.description.is_some());
        }
        other => panic!("Expected one help card, got {:?}", other),
    }
    assert_eq!(s.apply_line("/help").len(), 4);
    assert!(s.apply_line("/help essay").is_empty());
    assert_eq!(Command::parse("/helpme"), Command::Ignored);
    assert!(!s.is_modified());
}

#[test]
fn test_settings_apply_all_or_nothing() {
    let mut s = session();
    let before = s.quiz.clone();
    // The period cannot exceed the ten minute limit.
    assert!(s.apply_line("/set shuffle period=1:0:0").is_empty());
    assert_eq!(s.quiz, before);
    assert!(s.apply_line("/set").is_empty());
    assert!(s.apply_line("/set public").is_empty());
}

#[test]
fn test_grade() {
    let s = session();
    assert_eq!(s.grade(1, "Oslo"), Some(true));
    assert_eq!(s.grade(1, "Osloo"), Some(true));
    assert_eq!(s.grade(1, "Bergen"), Some(false));
    assert_eq!(s.grade(2, "0.67"), Some(true));
    assert_eq!(s.grade(3, "A"), Some(true));
    assert_eq!(s.grade(4, "c e"), Some(true));
    assert_eq!(s.grade(0, "Oslo"), None);
    assert_eq!(s.grade(5, "Oslo"), None);
}
