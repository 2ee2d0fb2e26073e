use std::fmt;

use crate::limits::card;
use crate::model::{QuestionType, QuizMode};
use crate::question::{Question, Variant};
use crate::quiz::Quiz;
use crate::timer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// A titled block of fields, shaped after a chat-platform embed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub footer: Option<String>,
    /// Owner icon reference; presentation only.
    pub thumbnail: Option<String>,
}

fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(limit.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

fn or_none(text: &str) -> &str {
    if text.is_empty() {
        "(none)"
    } else {
        text
    }
}

impl Card {
    pub fn new(title: &str) -> Self {
        Self {
            title: clip(title, card::TITLE),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: Option<&str>) -> Self {
        self.description = text.map(|t| clip(t, card::DESCRIPTION));
        self
    }

    /// Adds a field; past the platform's field count the field is dropped.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        if self.fields.len() < card::FIELDS {
            self.fields.push(Field {
                name: clip(name, card::FIELD_NAME),
                value: clip(or_none(value), card::FIELD_VALUE),
            });
        }
        self
    }

    pub fn footer(mut self, text: &str) -> Self {
        self.footer = Some(clip(text, card::FOOTER));
        self
    }

    pub fn thumbnail(mut self, icon: Option<&str>) -> Self {
        self.thumbnail = icon.map(str::to_string);
        self
    }

    /// Characters counted against the platform's per-card total.
    pub fn size(&self) -> usize {
        let fields: usize = self
            .fields
            .iter()
            .map(|f| f.name.chars().count() + f.value.chars().count())
            .sum();
        self.title.chars().count()
            + self.description.as_deref().map_or(0, |d| d.chars().count())
            + self.footer.as_deref().map_or(0, |f| f.chars().count())
            + fields
    }

    pub fn within_limits(&self) -> bool {
        self.size() <= card::TOTAL
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        for field in &self.fields {
            writeln!(f, "[{}]", field.name)?;
            for line in field.value.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "-- {}", footer)?;
        }
        Ok(())
    }
}

/// What an author sees after editing a question: type, text, answer and
/// the variant's own settings.
pub fn editor_card(question: &Question, icon: Option<&str>) -> Card {
    let kind = question.kind();
    let text = question.text.as_deref().unwrap_or("");
    let card = Card::new(&kind.title())
        .description(question.text.as_deref())
        .thumbnail(icon);

    match &question.variant {
        Variant::FreeResponse(q) => card
            .field("Exact", &q.exact().to_string())
            .field("Question Description", text)
            .field("Answer", q.answer().unwrap_or("")),
        Variant::Numeric(q) => card
            .field(
                "Decimal",
                &q.decimal().map_or("none".to_string(), |d| d.to_string()),
            )
            .field("Question Description", text)
            .field("Answer", &question.answer_lines().join("\n")),
        Variant::MultipleChoice(q) => card
            .field("Shuffle", &q.choices().shuffle().to_string())
            .field("Options", &q.options_field())
            .field("Question Description", text)
            .field("Answer", q.answer().unwrap_or("")),
        Variant::MultipleResponse(q) => card
            .field("Shuffle", &q.choices().shuffle().to_string())
            .field("Question Description", text)
            .field("Options", &q.options_field())
            .field("Answers", &q.answers_field()),
    }
}

/// What a respondent sees for question `number`.
pub fn question_card(question: &Question, number: usize, icon: Option<&str>) -> Card {
    let mut card = Card::new(&format!("Question {}", number))
        .description(question.text.as_deref())
        .footer(&question.kind().title())
        .thumbnail(icon);
    if let Some(choices) = question.choices() {
        card = card.field("Options", &choices.listing());
    }
    card
}

pub fn help_card(kind: QuestionType) -> Card {
    Card::new(&kind.title()).description(Some(kind.help()))
}

pub fn quiz_card(quiz: &Quiz, icon: Option<&str>) -> Card {
    let mode = match quiz.mode {
        QuizMode::Sync => format!("sync, {} per question", timer::format_duration(quiz.period())),
        QuizMode::Async => "async".to_string(),
    };
    let listing = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let text = q.text.as_deref().unwrap_or("(no text)");
            format!("{}. [{}] {}", i + 1, q.kind(), clip(text, 60))
        })
        .collect::<Vec<_>>()
        .join("\n");

    Card::new(&quiz.name)
        .thumbnail(icon)
        .field("Mode", &mode)
        .field("Shuffle", &quiz.shuffle.to_string())
        .field(
            "Size",
            &format!("{} of {}", quiz.size().min(quiz.questions.len()), quiz.questions.len()),
        )
        .field("Limit", &timer::format_duration(quiz.limit()))
        .field("Questions", &listing)
        .footer(&format!("id {}", quiz.id))
}
