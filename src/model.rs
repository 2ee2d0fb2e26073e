use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::limits::SCHEMA_VERSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    FreeResponse,
    Numeric,
    MultipleChoice,
    MultipleResponse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::FreeResponse,
        QuestionType::Numeric,
        QuestionType::MultipleChoice,
        QuestionType::MultipleResponse,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            QuestionType::FreeResponse => "free-response",
            QuestionType::Numeric => "numeric",
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::MultipleResponse => "multiple-response",
        }
    }

    /// Presentable name, e.g. `Free Response`.
    pub fn title(self) -> String {
        self.tag()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Instructions shown to respondents.
    pub fn help(self) -> &'static str {
        match self {
            QuestionType::FreeResponse => {
                "To answer a free response question, enter your response in precise words. \
                 Not every quiz is lenient on punctuation, capitalization and spelling.\n\
                 e.g. What is the capital of Norway?\n`Oslo`"
            }
            QuestionType::Numeric => {
                "To answer a numeric question, enter the number in digits, not words. \
                 Some questions round to a set number of decimal places; extra precision \
                 is rounded for you.\n\
                 e.g. What is 2/3 (round to the hundredths place)?\n`0.67` or `0.66667`"
            }
            QuestionType::MultipleChoice => {
                "To answer a multiple choice question, enter the letter paired with the \
                 option you choose. The option's text also works, but is not advised if it \
                 contains formatting.\n\
                 e.g. Who united Germany?\na) Otto von Bismarck\nb) Wilhelm II\n`a`"
            }
            QuestionType::MultipleResponse => {
                "To answer a multiple response question, enter the letters paired with every \
                 option you choose, separated by spaces or commas.\n\
                 e.g. Which of these are performed by non-coding DNA?\n\
                 a) Transcription\nb) Protein synthesis\nc) Transcription silencing\n\
                 d) RNA splicing\ne) Enhancer blocking\n`c e` or `c,e`"
            }
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|kind| kind.tag() == s.trim())
            .ok_or_else(|| format!("unknown question type '{}'", s))
    }
}

/// A parsed number, kept as an integer when it was written as one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

/// The raw `answer` field of a serialized question, before a variant
/// coerces it into its own shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Int(i64),
    Float(f64),
    Text(String),
    Set(Vec<String>),
}

/// A list element as written by hand: `[1979, 1984]` reads the same as
/// `["1979", "1984"]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

fn strings(values: Vec<Scalar>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
            Set(Vec<Scalar>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => AnswerValue::Int(n),
            Raw::Float(x) => AnswerValue::Float(x),
            Raw::Text(s) => AnswerValue::Text(s),
            Raw::Set(values) => AnswerValue::Set(strings(values)),
        })
    }
}

fn lenient_options<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Scalar>>::deserialize(deserializer)?.map(strings))
}

impl From<Number> for AnswerValue {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(n) => AnswerValue::Int(n),
            Number::Float(x) => AnswerValue::Float(x),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

/// Serialized question form, shared by storage and type morphing.
///
/// Only the listed fields survive deserialization; anything else in the
/// source mapping is dropped. Variant-specific fields are optional and each
/// variant reads only the ones it understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    #[serde(default)]
    pub answer: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_options",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

impl QuestionRecord {
    pub fn new(kind: QuestionType, id: i64) -> Self {
        Self {
            id,
            kind: kind.tag().to_string(),
            version: SCHEMA_VERSION,
            text: None,
            image: None,
            answer: None,
            exact: None,
            decimal: None,
            options: None,
            shuffle: None,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<AnswerValue>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }
}

/// `size` as written in a quiz file: a count, or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSpec {
    #[default]
    All,
    Count(usize),
}

impl Serialize for SizeSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SizeSpec::All => serializer.serialize_str("all"),
            SizeSpec::Count(n) => serializer.serialize_u64(*n as u64),
        }
    }
}

impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(usize),
            Word(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(SizeSpec::Count(n)),
            Raw::Word(w) if w == "all" || w == "*" => Ok(SizeSpec::All),
            Raw::Word(w) => w
                .parse()
                .map(SizeSpec::Count)
                .map_err(|_| serde::de::Error::custom(format!("invalid size '{}'", w))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    #[default]
    Sync,
    Async,
}

/// Serialized quiz form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub name: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default = "default_true")]
    pub shuffle: bool,
    #[serde(default)]
    pub mode: QuizMode,
    #[serde(default)]
    pub size: SizeSpec,
    /// Clock string, `w:d:h:m:s` read from the right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

fn default_true() -> bool {
    true
}

impl QuizRecord {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: 0,
            shuffle: true,
            mode: QuizMode::Sync,
            size: SizeSpec::All,
            limit: None,
            period: None,
            questions: Vec::new(),
        }
    }
}
