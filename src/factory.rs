use crate::error::QuizError;
use crate::model::{QuestionRecord, QuestionType};
use crate::question::{
    FreeResponse, MultipleChoice, MultipleResponse, Numeric, Question, Variant,
};

type Constructor = fn(&QuestionRecord) -> Variant;

pub struct Entry {
    pub kind: QuestionType,
    build: Constructor,
}

fn free_response(record: &QuestionRecord) -> Variant {
    Variant::FreeResponse(FreeResponse::build(record))
}

fn numeric(record: &QuestionRecord) -> Variant {
    Variant::Numeric(Numeric::build(record))
}

fn multiple_choice(record: &QuestionRecord) -> Variant {
    Variant::MultipleChoice(MultipleChoice::build(record))
}

fn multiple_response(record: &QuestionRecord) -> Variant {
    Variant::MultipleResponse(MultipleResponse::build(record))
}

// Same order as the `QuestionType` declaration.
static REGISTRY: [Entry; 4] = [
    Entry { kind: QuestionType::FreeResponse, build: free_response },
    Entry { kind: QuestionType::Numeric, build: numeric },
    Entry { kind: QuestionType::MultipleChoice, build: multiple_choice },
    Entry { kind: QuestionType::MultipleResponse, build: multiple_response },
];

impl Entry {
    /// Builds a question from the shared fields of `record`. The tag carried
    /// by the record is ignored; fields the variant does not use are dropped.
    pub fn construct(&self, record: &QuestionRecord) -> Question {
        Question {
            id: record.id,
            version: record.version,
            text: record.text.clone(),
            image: record.image.clone(),
            variant: (self.build)(record),
        }
    }
}

pub fn lookup(tag: &str) -> Option<&'static Entry> {
    REGISTRY.iter().find(|entry| entry.kind.tag() == tag.trim())
}

pub fn entry(kind: QuestionType) -> &'static Entry {
    &REGISTRY[kind as usize]
}

pub fn registered() -> impl Iterator<Item = QuestionType> {
    REGISTRY.iter().map(|entry| entry.kind)
}

/// Builds a question from a serialized record, dispatching on its tag.
pub fn create(record: &QuestionRecord) -> Result<Question, QuizError> {
    let entry = lookup(&record.kind).ok_or_else(|| QuizError::UnknownType(record.kind.clone()))?;
    Ok(entry.construct(record))
}

/// An empty question of `kind`, as added by `$add question=<type>`.
pub fn blank(kind: QuestionType, id: i64) -> Question {
    entry(kind).construct(&QuestionRecord::new(kind, id))
}
