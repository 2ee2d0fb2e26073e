use rand::seq::SliceRandom;
use rand::Rng;

use crate::guard;
use crate::limits::{card, MAX_OPTIONS};
use crate::matcher;
use crate::model::{AnswerValue, QuestionRecord};

use super::{pick, single_text};

/// Option list shared by both choice variants. Options are labelled `a`, `b`,
/// ... by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Choices {
    pub(crate) options: Vec<String>,
    pub(crate) shuffle: bool,
}

impl Choices {
    fn build(record: &QuestionRecord) -> Self {
        Self {
            options: record.options.clone().unwrap_or_default(),
            shuffle: record.shuffle.unwrap_or(false),
        }
    }

    pub(crate) fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.shuffle {
            self.options.shuffle(rng);
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// The listing respondents see, one `a) option` per line.
    pub fn listing(&self) -> String {
        self.options
            .iter()
            .enumerate()
            .map(|(i, opt)| format!("{}) {}", matcher::label(i).unwrap_or('?'), opt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn within_limits(&self) -> bool {
        self.options.len() <= MAX_OPTIONS && guard::fits(&self.listing(), card::FIELD_VALUE)
    }

    /// Drops options from the end, sparing those in `keep`, until the
    /// listing fits. `false` when the spared options alone are too large.
    fn fit(&mut self, keep: &[String]) -> bool {
        while !self.within_limits() {
            let Some(idx) = self.options.iter().rposition(|o| !keep.contains(o)) else {
                return false;
            };
            let dropped = self.options.remove(idx);
            tracing::warn!("option {:?} does not fit the listing, dropped", dropped);
        }
        true
    }

    fn contains(&self, text: &str) -> bool {
        self.options.iter().any(|o| o == text)
    }

    fn push(&mut self, text: &str) -> bool {
        if text.is_empty() || self.contains(text) {
            return false;
        }
        self.options.push(text.to_string());
        true
    }

    fn rename(&mut self, i: i64, text: &str) -> Option<String> {
        let idx = guard::resolve_index(self.options.len(), i)?;
        if text.is_empty() {
            return None;
        }
        if self.options[idx] != text && self.contains(text) {
            return None;
        }
        Some(std::mem::replace(&mut self.options[idx], text.to_string()))
    }

    fn move_option(&mut self, from: i64, to: i64) -> bool {
        let len = self.options.len();
        match (guard::resolve_index(len, from), guard::resolve_index(len, to)) {
            (Some(from), Some(to)) => {
                let option = self.options.remove(from);
                self.options.insert(to, option);
                true
            }
            _ => false,
        }
    }

    fn edit_shuffle(&mut self, change: &str) -> bool {
        match guard::parse_bool(change) {
            Some(shuffle) => {
                self.shuffle = shuffle;
                true
            }
            None => false,
        }
    }

    fn write_fields(&self, record: &mut QuestionRecord) {
        record.options = Some(self.options.clone());
        record.shuffle = Some(self.shuffle);
    }
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}) {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleChoice {
    pub(crate) choices: Choices,
    pub(crate) answer: Option<String>,
}

impl MultipleChoice {
    pub fn build(record: &QuestionRecord) -> Self {
        let mut choices = Choices::build(record);
        let mut answer = match &record.answer {
            // Collapsing a set keeps one answer; the others would linger as
            // distractors, so they leave the option list.
            Some(AnswerValue::Set(values)) => {
                let chosen = pick(values);
                choices
                    .options
                    .retain(|o| chosen.as_ref() == Some(o) || !values.contains(o));
                chosen
            }
            Some(raw) => single_text(raw),
            None => None,
        };
        if let Some(answer) = &answer {
            if !choices.contains(answer) {
                choices.options.push(answer.clone());
            }
        }
        if !choices.fit(answer.as_slice()) {
            if let Some(dropped) = answer.take() {
                tracing::warn!(id = record.id, "answer {:?} does not fit the option listing, dropped", dropped);
                choices.options.retain(|o| *o != dropped);
            }
            choices.fit(&[]);
        }
        Self { choices, answer }
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn check(&self, candidate: &str) -> bool {
        match &self.answer {
            Some(answer) => matcher::multiple_choice(&self.choices.options, answer, candidate),
            None => false,
        }
    }

    pub fn add_option(&mut self, change: &str) -> bool {
        guard::transactional(&mut self.choices, |c| c.push(change), Choices::within_limits)
    }

    pub fn edit_option(&mut self, i: i64, change: &str) -> bool {
        guard::transactional(
            self,
            |q| match q.choices.rename(i, change) {
                Some(old) => {
                    if q.answer.as_deref() == Some(old.as_str()) {
                        q.answer = Some(change.to_string());
                    }
                    true
                }
                None => false,
            },
            |q| q.choices.within_limits(),
        )
    }

    /// The option holding the answer cannot be deleted.
    pub fn delete_option(&mut self, i: i64) -> bool {
        match guard::resolve_index(self.choices.options.len(), i) {
            Some(idx) if self.answer.as_deref() != Some(self.choices.options[idx].as_str()) => {
                self.choices.options.remove(idx);
                true
            }
            _ => false,
        }
    }

    pub fn move_option(&mut self, from: i64, to: i64) -> bool {
        self.choices.move_option(from, to)
    }

    pub fn edit_shuffle(&mut self, change: &str) -> bool {
        self.choices.edit_shuffle(change)
    }

    /// Points the answer at an option, adding the text as a new option when
    /// it is not one already.
    pub fn edit_answer(&mut self, change: &str) -> bool {
        if change.is_empty() {
            return false;
        }
        if !self.choices.contains(change) && !self.add_option(change) {
            return false;
        }
        self.answer = Some(change.to_string());
        true
    }

    pub fn options_field(&self) -> String {
        numbered(&self.choices.options)
    }

    pub(crate) fn write_fields(&self, record: &mut QuestionRecord) {
        record.answer = self.answer.as_deref().map(AnswerValue::from);
        self.choices.write_fields(record);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleResponse {
    pub(crate) choices: Choices,
    pub(crate) answers: Vec<String>,
}

impl MultipleResponse {
    pub fn build(record: &QuestionRecord) -> Self {
        let mut choices = Choices::build(record);
        let mut answers = match &record.answer {
            Some(AnswerValue::Set(values)) => values.clone(),
            Some(raw) => single_text(raw).into_iter().collect(),
            None => Vec::new(),
        };
        answers.sort();
        answers.dedup();
        for answer in &answers {
            if !choices.contains(answer) {
                choices.options.push(answer.clone());
            }
        }
        let mut q = Self { choices, answers };
        while !q.fit() {
            let Some(dropped) = q.answers.pop() else {
                break;
            };
            tracing::warn!(id = record.id, "answer {:?} does not fit the option listing, dropped", dropped);
            q.choices.options.retain(|o| *o != dropped);
        }
        q
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn check(&self, candidate: &str) -> bool {
        matcher::multiple_response(&self.choices.options, &self.answers, candidate)
    }

    fn within_limits(&self) -> bool {
        self.choices.within_limits() && guard::fits(&numbered(&self.answers), card::FIELD_VALUE)
    }

    fn fit(&mut self) -> bool {
        self.choices.fit(&self.answers) && guard::fits(&numbered(&self.answers), card::FIELD_VALUE)
    }

    fn normalize(&mut self) {
        self.answers.sort();
    }

    fn ensure_option(&mut self, text: &str) -> bool {
        self.choices.contains(text) || self.choices.push(text)
    }

    pub fn add_option(&mut self, change: &str) -> bool {
        guard::transactional(&mut self.choices, |c| c.push(change), Choices::within_limits)
    }

    pub fn edit_option(&mut self, i: i64, change: &str) -> bool {
        guard::transactional(
            self,
            |q| match q.choices.rename(i, change) {
                Some(old) => {
                    for answer in q.answers.iter_mut().filter(|a| **a == old) {
                        *answer = change.to_string();
                    }
                    q.normalize();
                    true
                }
                None => false,
            },
            MultipleResponse::within_limits,
        )
    }

    /// Options that are answers cannot be deleted.
    pub fn delete_option(&mut self, i: i64) -> bool {
        match guard::resolve_index(self.choices.options.len(), i) {
            Some(idx) if !self.answers.contains(&self.choices.options[idx]) => {
                self.choices.options.remove(idx);
                true
            }
            _ => false,
        }
    }

    pub fn move_option(&mut self, from: i64, to: i64) -> bool {
        self.choices.move_option(from, to)
    }

    pub fn edit_shuffle(&mut self, change: &str) -> bool {
        self.choices.edit_shuffle(change)
    }

    pub fn add_answer(&mut self, change: &str) -> bool {
        if change.is_empty() || self.answers.iter().any(|a| a == change) {
            return false;
        }
        guard::transactional(
            self,
            |q| {
                if !q.ensure_option(change) {
                    return false;
                }
                q.answers.push(change.to_string());
                q.normalize();
                true
            },
            MultipleResponse::within_limits,
        )
    }

    /// Replaces the whole answer set with a single answer.
    pub fn edit_answer(&mut self, change: &str) -> bool {
        if change.is_empty() {
            return false;
        }
        guard::transactional(
            self,
            |q| {
                if !q.ensure_option(change) {
                    return false;
                }
                q.answers = vec![change.to_string()];
                true
            },
            MultipleResponse::within_limits,
        )
    }

    pub fn edit_answer_at(&mut self, i: i64, change: &str) -> bool {
        let Some(idx) = guard::resolve_index(self.answers.len(), i) else {
            return false;
        };
        if change.is_empty() {
            return false;
        }
        if self.answers[idx] == change {
            return true;
        }
        if self.answers.iter().any(|a| a == change) {
            return false;
        }
        guard::transactional(
            self,
            |q| {
                if !q.ensure_option(change) {
                    return false;
                }
                q.answers[idx] = change.to_string();
                q.normalize();
                true
            },
            MultipleResponse::within_limits,
        )
    }

    pub fn delete_answer(&mut self, i: i64) -> bool {
        match guard::resolve_index(self.answers.len(), i) {
            Some(idx) => {
                self.answers.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn options_field(&self) -> String {
        numbered(&self.choices.options)
    }

    pub fn answers_field(&self) -> String {
        numbered(&self.answers)
    }

    pub(crate) fn write_fields(&self, record: &mut QuestionRecord) {
        record.answer = (!self.answers.is_empty()).then(|| AnswerValue::Set(self.answers.clone()));
        self.choices.write_fields(record);
    }
}
