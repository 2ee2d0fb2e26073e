mod choice;
mod free_response;
mod numeric;

use rand::seq::SliceRandom;
use rand::Rng;

pub use choice::{Choices, MultipleChoice, MultipleResponse};
pub use free_response::FreeResponse;
pub use numeric::Numeric;

use crate::guard;
use crate::limits::card;
use crate::model::{AnswerValue, QuestionRecord, QuestionType};
use crate::morph;

#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    FreeResponse(FreeResponse),
    Numeric(Numeric),
    MultipleChoice(MultipleChoice),
    MultipleResponse(MultipleResponse),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub version: u32,
    pub text: Option<String>,
    pub image: Option<Vec<u8>>,
    pub variant: Variant,
}

/// Uniformly random element, or `None` for an empty collection.
pub(crate) fn pick(values: &[String]) -> Option<String> {
    values.choose(&mut rand::thread_rng()).cloned()
}

/// Collapses any raw answer into a single string.
pub(crate) fn single_text(answer: &AnswerValue) -> Option<String> {
    match answer {
        AnswerValue::Text(s) => Some(s.clone()),
        AnswerValue::Int(n) => Some(n.to_string()),
        AnswerValue::Float(x) => Some(x.to_string()),
        AnswerValue::Set(values) => pick(values),
    }
}

impl Question {
    pub fn kind(&self) -> QuestionType {
        match self.variant {
            Variant::FreeResponse(_) => QuestionType::FreeResponse,
            Variant::Numeric(_) => QuestionType::Numeric,
            Variant::MultipleChoice(_) => QuestionType::MultipleChoice,
            Variant::MultipleResponse(_) => QuestionType::MultipleResponse,
        }
    }

    /// Answer in its serialized shape.
    pub fn answer(&self) -> Option<AnswerValue> {
        self.to_record().answer
    }

    pub fn has_answer(&self) -> bool {
        match &self.variant {
            Variant::FreeResponse(q) => q.answer.is_some(),
            Variant::Numeric(q) => q.answer.is_some(),
            Variant::MultipleChoice(q) => q.answer.is_some(),
            Variant::MultipleResponse(q) => !q.answers.is_empty(),
        }
    }

    /// Answer formatted for display, one line per answer.
    pub fn answer_lines(&self) -> Vec<String> {
        match &self.variant {
            Variant::FreeResponse(q) => q.answer.iter().cloned().collect(),
            Variant::Numeric(q) => q.answer.iter().map(|n| n.to_string()).collect(),
            Variant::MultipleChoice(q) => q.answer.iter().cloned().collect(),
            Variant::MultipleResponse(q) => q.answers.clone(),
        }
    }

    pub fn to_record(&self) -> QuestionRecord {
        let mut record = QuestionRecord::new(self.kind(), self.id);
        record.version = self.version;
        record.text = self.text.clone();
        record.image = self.image.clone();
        match &self.variant {
            Variant::FreeResponse(q) => q.write_fields(&mut record),
            Variant::Numeric(q) => q.write_fields(&mut record),
            Variant::MultipleChoice(q) => q.write_fields(&mut record),
            Variant::MultipleResponse(q) => q.write_fields(&mut record),
        }
        record
    }

    /// Copy laid out for a respondent, with options shuffled when the
    /// question asks for it. Labels in responses refer to this copy.
    pub fn presented_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let mut copy = self.clone();
        match &mut copy.variant {
            Variant::MultipleChoice(q) => q.choices.shuffle_with(rng),
            Variant::MultipleResponse(q) => q.choices.shuffle_with(rng),
            _ => {}
        }
        copy
    }

    pub fn check(&self, candidate: &str) -> bool {
        match &self.variant {
            Variant::FreeResponse(q) => q.check(candidate),
            Variant::Numeric(q) => q.check(candidate),
            Variant::MultipleChoice(q) => q.check(candidate),
            Variant::MultipleResponse(q) => q.check(candidate),
        }
    }

    pub fn edit_text(&mut self, change: &str) -> bool {
        if change.is_empty() || !guard::fits(change, card::DESCRIPTION) {
            return false;
        }
        self.text = Some(change.to_string());
        true
    }

    pub fn edit_answer(&mut self, change: &str) -> bool {
        match &mut self.variant {
            Variant::FreeResponse(q) => q.edit_answer(change),
            Variant::Numeric(q) => q.edit_answer(change),
            Variant::MultipleChoice(q) => q.edit_answer(change),
            Variant::MultipleResponse(q) => q.edit_answer(change),
        }
    }

    /// Morphs this question into another variant, keeping what the target
    /// can absorb. Returns `false` for an unregistered tag.
    pub fn edit_type(&mut self, change: &str) -> bool {
        match morph::morph_tag(self, change.trim()) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    pub fn edit_exact(&mut self, change: &str) -> bool {
        match &mut self.variant {
            Variant::FreeResponse(q) => q.edit_exact(change),
            _ => false,
        }
    }

    pub fn edit_decimal(&mut self, change: &str) -> bool {
        match &mut self.variant {
            Variant::Numeric(q) => q.edit_decimal(change),
            _ => false,
        }
    }

    pub fn add_option(&mut self, change: &str) -> bool {
        match &mut self.variant {
            Variant::MultipleChoice(q) => q.add_option(change),
            Variant::MultipleResponse(q) => q.add_option(change),
            _ => false,
        }
    }

    pub fn edit_option(&mut self, i: i64, change: &str) -> bool {
        match &mut self.variant {
            Variant::MultipleChoice(q) => q.edit_option(i, change),
            Variant::MultipleResponse(q) => q.edit_option(i, change),
            _ => false,
        }
    }

    pub fn delete_option(&mut self, i: i64) -> bool {
        match &mut self.variant {
            Variant::MultipleChoice(q) => q.delete_option(i),
            Variant::MultipleResponse(q) => q.delete_option(i),
            _ => false,
        }
    }

    pub fn move_option(&mut self, from: i64, to: i64) -> bool {
        match &mut self.variant {
            Variant::MultipleChoice(q) => q.move_option(from, to),
            Variant::MultipleResponse(q) => q.move_option(from, to),
            _ => false,
        }
    }

    pub fn edit_shuffle(&mut self, change: &str) -> bool {
        match &mut self.variant {
            Variant::MultipleChoice(q) => q.edit_shuffle(change),
            Variant::MultipleResponse(q) => q.edit_shuffle(change),
            _ => false,
        }
    }

    pub fn add_answer(&mut self, change: &str) -> bool {
        match &mut self.variant {
            Variant::MultipleResponse(q) => q.add_answer(change),
            _ => false,
        }
    }

    pub fn edit_answer_at(&mut self, i: i64, change: &str) -> bool {
        match &mut self.variant {
            Variant::MultipleResponse(q) => q.edit_answer_at(i, change),
            _ => false,
        }
    }

    pub fn delete_answer(&mut self, i: i64) -> bool {
        match &mut self.variant {
            Variant::MultipleResponse(q) => q.delete_answer(i),
            _ => false,
        }
    }

    pub fn choices(&self) -> Option<&Choices> {
        match &self.variant {
            Variant::MultipleChoice(q) => Some(q.choices()),
            Variant::MultipleResponse(q) => Some(q.choices()),
            _ => None,
        }
    }
}
