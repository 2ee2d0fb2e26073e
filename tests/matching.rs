use professor::factory;
use professor::model::{AnswerValue, QuestionRecord, QuestionType};
use professor::Question;

fn build(record: QuestionRecord) -> Question {
    factory::create(&record).unwrap()
}

fn non_coding_dna() -> Question {
    let mut record = QuestionRecord::new(QuestionType::MultipleResponse, 4).with_options(&[
        "Transcription",
        "Protein synthesis",
        "Transcription silencing",
        "RNA splicing",
        "Enhancer blocking",
    ]);
    record.answer = Some(AnswerValue::Set(vec![
        "Transcription silencing".to_string(),
        "Enhancer blocking".to_string(),
    ]));
    build(record)
}

#[test]
fn test_free_response_accepts_its_own_answer() {
    for exact in [false, true] {
        let mut record = QuestionRecord::new(QuestionType::FreeResponse, 1).with_answer("Oslo");
        record.exact = Some(exact);
        let q = build(record);
        assert!(q.check("Oslo"), "exact={}", exact);
    }
}

#[test]
fn test_free_response_tolerates_typos_unless_exact() {
    let answer = "Otto von Bismarck";
    let q = build(QuestionRecord::new(QuestionType::FreeResponse, 1).with_answer(answer));
    assert!(q.check("Otto von Bismark"));
    assert!(!q.check("Wilhelm II"));

    let mut record = QuestionRecord::new(QuestionType::FreeResponse, 1).with_answer(answer);
    record.exact = Some(true);
    let q = build(record);
    assert!(!q.check("Otto von Bismark"));
    assert!(!q.check("otto von bismarck"));
}

#[test]
fn test_free_response_threshold_grows_with_length() {
    let q = build(QuestionRecord::new(QuestionType::FreeResponse, 1).with_answer("Oslo"));
    match &q.variant {
        professor::Variant::FreeResponse(fr) => assert_eq!(fr.threshold(), 70.0),
        other => panic!("Expected FreeResponse, got {:?}", other),
    }

    let long = "a".repeat(400);
    let q = build(QuestionRecord::new(QuestionType::FreeResponse, 1).with_answer(long.as_str()));
    match &q.variant {
        // 100 - 100/20
        professor::Variant::FreeResponse(fr) => assert!((fr.threshold() - 95.0).abs() < 1e-9),
        other => panic!("Expected FreeResponse, got {:?}", other),
    }
}

#[test]
fn test_numeric_rounds_both_sides() {
    let mut record = QuestionRecord::new(QuestionType::Numeric, 2);
    record.answer = Some(AnswerValue::Float(0.667));
    record.decimal = Some(2);
    let q = build(record);

    assert!(q.check("0.67"));
    assert!(q.check("0.670"));
    assert!(q.check(" 0.67 "));
    assert!(q.check("0.66667"));
    assert!(!q.check("0.66"));
    assert!(!q.check("two thirds"));
    assert!(!q.check("6.7e-1"));
    assert_eq!(q.answer(), Some(AnswerValue::Float(0.67)));
}

#[test]
fn test_numeric_without_rounding() {
    let mut record = QuestionRecord::new(QuestionType::Numeric, 2);
    record.answer = Some(AnswerValue::Int(42));
    let q = build(record);
    assert!(q.check("42"));
    assert!(q.check("42.0"));
    assert!(!q.check("42.1"));
    assert!(!q.check(""));
}

#[test]
fn test_numeric_accepts_integers_wider_than_i64() {
    let mut record = QuestionRecord::new(QuestionType::Numeric, 2);
    record.answer = Some(AnswerValue::Float(1e20));
    let q = build(record);
    assert!(q.check("100000000000000000000"));
    assert!(!q.check("100000000000000000001000"));
}

#[test]
fn test_numeric_zero_decimals_compares_integers() {
    let mut record = QuestionRecord::new(QuestionType::Numeric, 2);
    record.answer = Some(AnswerValue::Float(3.4));
    record.decimal = Some(0);
    let q = build(record);
    assert_eq!(q.answer(), Some(AnswerValue::Int(3)));
    assert!(q.check("3"));
    assert!(q.check("2.6"));
    assert!(!q.check("3.5"));
}

#[test]
fn test_multiple_choice_by_label_or_text() {
    let q = build(
        QuestionRecord::new(QuestionType::MultipleChoice, 3)
            .with_options(&["Paris", "London", "Berlin"])
            .with_answer("Paris"),
    );
    assert!(q.check("a"));
    assert!(q.check("Paris"));
    assert!(!q.check("b"));
    assert!(!q.check("London"));
    assert!(!q.check("z"));
}

#[test]
fn test_multiple_response_needs_every_answer_and_nothing_else() {
    let q = non_coding_dna();
    assert!(q.check("c e"));
    assert!(q.check("c,e"));
    assert!(q.check("E C"));
    assert!(q.check("c, e"));
    assert!(!q.check("c"));
    assert!(!q.check("c e a"));
    assert!(!q.check("c c"));
    assert!(!q.check("c e e"));
    assert!(!q.check(""));
}

#[test]
fn test_answerless_questions_never_match() {
    for kind in QuestionType::ALL {
        let q = factory::blank(kind, 1);
        assert!(!q.has_answer());
        assert!(!q.check(""), "{}", kind);
        assert!(!q.check("a"), "{}", kind);
    }
}
