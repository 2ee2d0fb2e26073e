use crate::limits::MAX_DECIMAL;
use crate::matcher;
use crate::model::{AnswerValue, Number, QuestionRecord};

use super::pick;

#[derive(Debug, Clone, PartialEq)]
pub struct Numeric {
    pub(crate) answer: Option<Number>,
    pub(crate) decimal: Option<u32>,
}

fn coerce(answer: &AnswerValue) -> Option<Number> {
    match answer {
        AnswerValue::Int(n) => Some(Number::Int(*n)),
        AnswerValue::Float(x) => Some(Number::Float(*x)),
        AnswerValue::Text(s) => matcher::parse_number(s),
        AnswerValue::Set(values) => pick(values).and_then(|s| matcher::parse_number(&s)),
    }
}

impl Numeric {
    pub fn build(record: &QuestionRecord) -> Self {
        let decimal = record.decimal.filter(|d| *d <= MAX_DECIMAL);
        let answer = record.answer.as_ref().and_then(|raw| {
            let coerced = coerce(raw);
            if coerced.is_none() {
                tracing::warn!(id = record.id, "answer {:?} is not a number, dropped", raw);
            }
            coerced
        });
        Self {
            answer: answer.map(|n| matcher::round_number(n, decimal)),
            decimal,
        }
    }

    pub fn answer(&self) -> Option<Number> {
        self.answer
    }

    pub fn decimal(&self) -> Option<u32> {
        self.decimal
    }

    pub fn check(&self, candidate: &str) -> bool {
        match self.answer {
            Some(answer) => matcher::numeric(answer, self.decimal, candidate),
            None => false,
        }
    }

    pub fn edit_answer(&mut self, change: &str) -> bool {
        match matcher::parse_number(change) {
            Some(n) => {
                self.answer = Some(matcher::round_number(n, self.decimal));
                true
            }
            None => false,
        }
    }

    /// Accepts a number of places, or `none` to stop rounding.
    pub fn edit_decimal(&mut self, change: &str) -> bool {
        let change = change.trim();
        let decimal = if change.eq_ignore_ascii_case("none") {
            None
        } else {
            match change.parse::<u32>() {
                Ok(d) if d <= MAX_DECIMAL => Some(d),
                _ => return false,
            }
        };
        self.decimal = decimal;
        self.answer = self.answer.map(|n| matcher::round_number(n, decimal));
        true
    }

    pub(crate) fn write_fields(&self, record: &mut QuestionRecord) {
        record.answer = self.answer.map(AnswerValue::from);
        record.decimal = self.decimal;
    }
}
