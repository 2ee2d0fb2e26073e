use crate::guard;
use crate::matcher;
use crate::model::{AnswerValue, QuestionRecord};

use super::single_text;

#[derive(Debug, Clone, PartialEq)]
pub struct FreeResponse {
    pub(crate) answer: Option<String>,
    pub(crate) exact: bool,
    pub(crate) threshold: f64,
}

impl FreeResponse {
    pub fn build(record: &QuestionRecord) -> Self {
        let mut q = Self {
            answer: record.answer.as_ref().and_then(single_text),
            exact: record.exact.unwrap_or(false),
            threshold: 100.0,
        };
        q.recompute_threshold();
        q
    }

    fn recompute_threshold(&mut self) {
        self.threshold = matcher::match_threshold(self.answer.as_deref().unwrap_or(""), self.exact);
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn exact(&self) -> bool {
        self.exact
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn check(&self, candidate: &str) -> bool {
        match &self.answer {
            Some(answer) => matcher::free_response(answer, self.threshold, candidate),
            None => false,
        }
    }

    pub fn edit_answer(&mut self, change: &str) -> bool {
        if change.is_empty() {
            return false;
        }
        self.answer = Some(change.to_string());
        self.recompute_threshold();
        true
    }

    pub fn edit_exact(&mut self, change: &str) -> bool {
        match guard::parse_bool(change) {
            Some(exact) => {
                self.exact = exact;
                self.recompute_threshold();
                true
            }
            None => false,
        }
    }

    pub(crate) fn write_fields(&self, record: &mut QuestionRecord) {
        record.answer = self.answer.as_deref().map(AnswerValue::from);
        record.exact = Some(self.exact);
    }
}
