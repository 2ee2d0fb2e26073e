use crate::guard;
use crate::interpreter::{FlagInterpreter, FlagValue, Flags, QuestionOperation, QuizOperation};
use crate::model::QuestionType;
use crate::quiz::Quiz;
use crate::view::{self, Card};

/// Flags accepted by `/set`.
pub const SETTINGS_SCOPE: &[&str] = &["sync", "async", "period", "limit", "shuffle", "size", "quiz"];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quiz(Vec<QuizOperation>),
    Question(QuestionOperation),
    Settings(Flags),
    /// `/help` or `/help <type>`
    Help(Option<QuestionType>),
    Ignored,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let trimmed = line.trim();
        if trimmed.starts_with('$') {
            let ops = QuizOperation::read(trimmed);
            if ops.is_empty() {
                return Command::Ignored;
            }
            return Command::Quiz(ops);
        }
        if let Some(rest) = trimmed.strip_prefix("/set") {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return Command::Settings(FlagInterpreter::new(SETTINGS_SCOPE).read(rest));
            }
        }
        if let Some(rest) = trimmed.strip_prefix("/help") {
            if rest.is_empty() {
                return Command::Help(None);
            }
            if rest.starts_with(char::is_whitespace) {
                return match rest.trim().parse() {
                    Ok(kind) => Command::Help(Some(kind)),
                    Err(_) => Command::Ignored,
                };
            }
        }
        match QuestionOperation::read(trimmed) {
            Some(op) => Command::Question(op),
            None => Command::Ignored,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Refresh {
    Quiz(Card),
    Question { number: usize, card: Card },
    Help(Card),
}

impl Refresh {
    pub fn card(&self) -> &Card {
        match self {
            Refresh::Quiz(card) => card,
            Refresh::Question { card, .. } => card,
            Refresh::Help(card) => card,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Touched {
    Quiz,
    Question(usize),
}

/// Converts a 1-based position from command text; `0` is rejected.
fn position(n: usize) -> Option<i64> {
    n.checked_sub(1).and_then(|i| i64::try_from(i).ok())
}

fn position_text(value: &str) -> Option<i64> {
    value.trim().parse().ok().and_then(position)
}

#[derive(Debug, Clone)]
pub struct EditSession {
    pub quiz: Quiz,
    icon: Option<String>,
    modified: bool,
}

impl EditSession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            icon: None,
            modified: false,
        }
    }

    /// Owner icon shown on refreshed cards.
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = icon;
        self
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn into_quiz(self) -> Quiz {
        self.quiz
    }

    pub fn apply_line(&mut self, line: &str) -> Vec<Refresh> {
        match Command::parse(line) {
            Command::Quiz(ops) => {
                let ok = self.apply_quiz_ops(&ops);
                self.refresh(ok.then_some(Touched::Quiz))
            }
            Command::Question(op) => {
                let touched = self.apply_question_op(&op);
                self.refresh(touched)
            }
            Command::Settings(flags) => {
                let ok = self.apply_settings(&flags);
                self.refresh(ok.then_some(Touched::Quiz))
            }
            Command::Help(Some(kind)) => vec![Refresh::Help(view::help_card(kind))],
            Command::Help(None) => QuestionType::ALL
                .into_iter()
                .map(|kind| Refresh::Help(view::help_card(kind)))
                .collect(),
            Command::Ignored => {
                if !line.trim().is_empty() {
                    tracing::debug!("ignoring unrecognized line: {:?}", line);
                }
                Vec::new()
            }
        }
    }

    fn refresh(&mut self, touched: Option<Touched>) -> Vec<Refresh> {
        let Some(touched) = touched else {
            return Vec::new();
        };
        self.modified = true;
        let icon = self.icon.as_deref();
        let refresh = match touched {
            Touched::Quiz => Refresh::Quiz(view::quiz_card(&self.quiz, icon)),
            Touched::Question(idx) => Refresh::Question {
                number: idx + 1,
                card: view::editor_card(&self.quiz.questions[idx], icon),
            },
        };
        vec![refresh]
    }

    /// Applies every pair of a `$operator` line, or none of them.
    pub fn apply_quiz_ops(&mut self, ops: &[QuizOperation]) -> bool {
        !ops.is_empty()
            && guard::transactional(
                &mut self.quiz,
                |quiz| ops.iter().all(|op| apply_quiz_op(quiz, op)),
                |_| true,
            )
    }

    pub fn apply_quiz_op(&mut self, op: &QuizOperation) -> bool {
        apply_quiz_op(&mut self.quiz, op)
    }

    fn apply_question_op(&mut self, op: &QuestionOperation) -> Option<Touched> {
        let touched = self.try_question_op(op);
        if touched.is_none() {
            tracing::debug!(
                index = op.index,
                subindex = ?op.subindex,
                operator = %op.operator,
                param = %op.param,
                "question edit rejected: {:?}",
                op.value
            );
        }
        touched
    }

    fn try_question_op(&mut self, op: &QuestionOperation) -> Option<Touched> {
        let index = position(op.index)?;
        let sub = match op.subindex {
            Some(n) => Some(position(n)?),
            None => None,
        };
        let value = op.value.as_str();

        match (op.operator.as_str(), op.param.as_str()) {
            ("delete", "question") => {
                return self.quiz.delete_question(index).then_some(Touched::Quiz);
            }
            ("move", "question") => {
                let to = position_text(value)?;
                return self.quiz.move_question(index, to).then_some(Touched::Quiz);
            }
            _ => {}
        }

        let idx = guard::resolve_index(self.quiz.questions.len(), index)?;
        let question = &mut self.quiz.questions[idx];
        let ok = match (op.operator.as_str(), op.param.as_str(), sub) {
            ("edit", "text", None) => question.edit_text(value),
            ("edit", "answer", None) => question.edit_answer(value),
            ("edit", "answer", Some(i)) => question.edit_answer_at(i, value),
            ("edit", "exact", None) => question.edit_exact(value),
            ("edit", "decimal", None) => question.edit_decimal(value),
            ("edit", "shuffle", None) => question.edit_shuffle(value),
            ("edit", "type", None) => question.edit_type(value),
            ("edit", "option", Some(i)) => question.edit_option(i, value),
            ("add", "option", None) => question.add_option(value),
            ("add", "answer", None) => question.add_answer(value),
            ("delete", "option", Some(i)) => question.delete_option(i),
            ("delete", "answer", Some(i)) => question.delete_answer(i),
            ("move", "option", Some(i)) => {
                position_text(value).is_some_and(|to| question.move_option(i, to))
            }
            _ => false,
        };
        ok.then_some(Touched::Question(idx))
    }

    /// Applies `/set` flags. Every flag present must apply, otherwise the
    /// quiz is left as it was. `limit` and `period` are checked against each
    /// other only once both are in place.
    pub fn apply_settings(&mut self, flags: &Flags) -> bool {
        if flags.is_empty() {
            return false;
        }
        guard::transactional(
            &mut self.quiz,
            |quiz| {
                let timing = match (timing_text(flags.get("limit")), timing_text(flags.get("period"))) {
                    (Some(None), Some(None)) => true,
                    (Some(limit), Some(period)) => quiz.edit_timing(limit, period),
                    _ => false,
                };
                timing && flags.iter().all(|(name, value)| match (name, value) {
                    ("quiz", FlagValue::Text(name)) => quiz.edit_name(name),
                    ("sync", v) => flag_bool(v).is_some_and(|on| {
                        quiz.edit_mode(if on { "sync" } else { "async" })
                    }),
                    ("async", v) => flag_bool(v).is_some_and(|on| {
                        quiz.edit_mode(if on { "async" } else { "sync" })
                    }),
                    ("period" | "limit", _) => true,
                    ("shuffle", v) => flag_bool(v).is_some_and(|on| {
                        quiz.edit_shuffle(if on { "true" } else { "false" })
                    }),
                    ("size", FlagValue::Int(n)) => quiz.edit_size(&n.to_string()),
                    ("size", FlagValue::Text(t)) => quiz.edit_size(t),
                    _ => false,
                })
            },
            |_| true,
        )
    }

    /// Grades a response to question `number` (1-based). `None` when there
    /// is no such question.
    pub fn grade(&self, number: usize, response: &str) -> Option<bool> {
        let question = self.quiz.question(position(number)?)?;
        Some(question.check(response))
    }
}

fn flag_bool(value: &FlagValue) -> Option<bool> {
    match value {
        FlagValue::Bool(b) => Some(*b),
        FlagValue::Text(t) => guard::parse_bool(t),
        FlagValue::Int(_) => None,
    }
}

/// `Some(None)` when the flag is absent, `None` when it is not a clock value.
fn timing_text(value: Option<&FlagValue>) -> Option<Option<&str>> {
    match value {
        None => Some(None),
        Some(FlagValue::Text(t)) => Some(Some(t.as_str())),
        Some(_) => None,
    }
}

fn apply_quiz_op(quiz: &mut Quiz, op: &QuizOperation) -> bool {
    let value = op.value.as_str();
    let ok = match (op.operator.as_str(), op.param.as_str()) {
        ("edit", "name") => quiz.edit_name(value),
        ("edit", "size") => quiz.edit_size(value),
        ("edit", "shuffle") => quiz.edit_shuffle(value),
        ("edit", "limit") => quiz.edit_limit(value),
        ("edit", "period") => quiz.edit_period(value),
        ("edit", "mode") => quiz.edit_mode(value),
        ("add", "question") => quiz.add_question(value),
        ("delete", "question") => position_text(value).is_some_and(|i| quiz.delete_question(i)),
        _ => false,
    };
    if !ok {
        tracing::debug!(operator = %op.operator, param = %op.param, "quiz edit rejected: {:?}", op.value);
    }
    ok
}
