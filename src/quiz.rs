use chrono::Duration;
use rand::seq::index;
use rand::Rng;

use crate::error::QuizError;
use crate::factory;
use crate::guard;
use crate::limits::QUIZ_NAME_MAX;
use crate::model::{QuizMode, QuizRecord, SizeSpec};
use crate::question::Question;
use crate::timer;

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub name: String,
    pub id: i64,
    pub shuffle: bool,
    pub mode: QuizMode,
    pub questions: Vec<Question>,
    size: usize,
    limit: Duration,
    period: Duration,
}

fn valid_name(name: &str) -> bool {
    !name.trim().is_empty() && guard::fits(name, QUIZ_NAME_MAX)
}

/// `0 < period <= limit <= 1 week`
fn valid_timing(limit: Duration, period: Duration) -> bool {
    period > Duration::zero() && period <= limit && limit <= timer::one_week()
}

impl Quiz {
    pub fn new(name: &str) -> Result<Self, QuizError> {
        Self::from_record(&QuizRecord::new(name))
    }

    pub fn from_record(record: &QuizRecord) -> Result<Self, QuizError> {
        if !valid_name(&record.name) {
            return Err(QuizError::InvalidQuiz(format!(
                "name must be 1 to {} characters, got {:?}",
                QUIZ_NAME_MAX, record.name
            )));
        }

        let clock = |field: &str, value: &Option<String>, default: Duration| match value {
            Some(text) => timer::parse_clock(text).ok_or_else(|| {
                QuizError::InvalidQuiz(format!("{} is not a clock string: {:?}", field, text))
            }),
            None => Ok(default),
        };
        let limit = clock("limit", &record.limit, Duration::minutes(10))?;
        let period = clock("period", &record.period, Duration::minutes(1))?;
        if !valid_timing(limit, period) {
            return Err(QuizError::InvalidQuiz(format!(
                "period ({}) must be positive and within the limit ({}), at most one week",
                timer::format_duration(period),
                timer::format_duration(limit)
            )));
        }

        let questions = record
            .questions
            .iter()
            .map(factory::create)
            .collect::<Result<Vec<_>, _>>()?;
        let size = match record.size {
            SizeSpec::All => questions.len(),
            SizeSpec::Count(0) => {
                return Err(QuizError::InvalidQuiz("size must be positive".to_string()));
            }
            SizeSpec::Count(n) => n,
        };

        Ok(Self {
            name: record.name.clone(),
            id: record.id,
            shuffle: record.shuffle,
            mode: record.mode,
            questions,
            size,
            limit,
            period,
        })
    }

    pub fn to_record(&self) -> QuizRecord {
        QuizRecord {
            name: self.name.clone(),
            id: self.id,
            shuffle: self.shuffle,
            mode: self.mode,
            size: SizeSpec::Count(self.size),
            limit: Some(timer::to_clock(self.limit)),
            period: Some(timer::to_clock(self.period)),
            questions: self.questions.iter().map(Question::to_record).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn question(&self, i: i64) -> Option<&Question> {
        guard::resolve_index(self.questions.len(), i).map(|idx| &self.questions[idx])
    }

    pub fn question_mut(&mut self, i: i64) -> Option<&mut Question> {
        guard::resolve_index(self.questions.len(), i).map(move |idx| &mut self.questions[idx])
    }

    /// Draws `size` distinct questions (fewer if the quiz is smaller). The
    /// authored order is kept unless the quiz shuffles.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Question> {
        let amount = self.size.min(self.questions.len());
        let mut picked = index::sample(rng, self.questions.len(), amount).into_vec();
        if !self.shuffle {
            picked.sort_unstable();
        }
        picked.into_iter().map(|i| &self.questions[i]).collect()
    }

    pub fn sample(&self) -> Vec<&Question> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// A sample as respondents get it: each question laid out with
    /// [`Question::presented_with`].
    pub fn deal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        let picked = self.sample_with(rng);
        picked.into_iter().map(|q| q.presented_with(rng)).collect()
    }

    pub fn deal(&self) -> Vec<Question> {
        self.deal_with(&mut rand::thread_rng())
    }

    pub fn edit_name(&mut self, change: &str) -> bool {
        if !valid_name(change) {
            return false;
        }
        self.name = change.to_string();
        true
    }

    pub fn edit_shuffle(&mut self, change: &str) -> bool {
        match guard::parse_bool(change) {
            Some(shuffle) => {
                self.shuffle = shuffle;
                true
            }
            None => false,
        }
    }

    /// A positive count, or `all` for every current question.
    pub fn edit_size(&mut self, change: &str) -> bool {
        let change = change.trim();
        let size = if change.eq_ignore_ascii_case("all") || change == "*" {
            self.questions.len()
        } else {
            match change.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return false,
            }
        };
        self.size = size;
        true
    }

    pub fn edit_limit(&mut self, change: &str) -> bool {
        self.edit_timing(Some(change), None)
    }

    pub fn edit_period(&mut self, change: &str) -> bool {
        self.edit_timing(None, Some(change))
    }

    /// Changes limit and period together; only the combined result has to
    /// satisfy `0 < period <= limit <= 1 week`.
    pub fn edit_timing(&mut self, limit: Option<&str>, period: Option<&str>) -> bool {
        let read = |change: Option<&str>, current: Duration| match change {
            Some(text) => timer::parse_clock(text),
            None => Some(current),
        };
        match (read(limit, self.limit), read(period, self.period)) {
            (Some(limit), Some(period)) if valid_timing(limit, period) => {
                self.limit = limit;
                self.period = period;
                true
            }
            _ => false,
        }
    }

    pub fn edit_mode(&mut self, change: &str) -> bool {
        self.mode = match change.trim().to_lowercase().as_str() {
            "sync" => QuizMode::Sync,
            "async" => QuizMode::Async,
            _ => return false,
        };
        true
    }

    /// Appends an empty question of the given type with a fresh id.
    pub fn add_question(&mut self, tag: &str) -> bool {
        let Some(entry) = factory::lookup(tag) else {
            return false;
        };
        let id = self.questions.iter().map(|q| q.id).max().map_or(1, |id| id + 1);
        self.questions.push(factory::blank(entry.kind, id));
        true
    }

    pub fn delete_question(&mut self, i: i64) -> bool {
        match guard::resolve_index(self.questions.len(), i) {
            Some(idx) => {
                self.questions.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn move_question(&mut self, from: i64, to: i64) -> bool {
        let len = self.questions.len();
        match (guard::resolve_index(len, from), guard::resolve_index(len, to)) {
            (Some(from), Some(to)) => {
                let question = self.questions.remove(from);
                self.questions.insert(to, question);
                true
            }
            _ => false,
        }
    }
}
