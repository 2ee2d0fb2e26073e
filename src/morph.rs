use crate::factory;
use crate::model::QuestionType;
use crate::question::Question;

pub fn morph(question: &Question, target: QuestionType) -> Question {
    let record = question.to_record();
    let next = factory::entry(target).construct(&record);
    if !next.has_answer() && question.has_answer() {
        tracing::debug!(
            id = question.id,
            from = %question.kind(),
            to = %target,
            "answer did not survive the conversion"
        );
    }
    next
}

/// Same as [`morph`], but from a type tag; `None` when the tag is not
/// registered.
pub fn morph_tag(question: &Question, tag: &str) -> Option<Question> {
    factory::lookup(tag).map(|entry| morph(question, entry.kind))
}
