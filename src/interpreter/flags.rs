use std::collections::BTreeMap;

use super::{free, keyword, tokenize};

/// Flags a command accepts when the caller does not narrow the scope.
pub const DEFAULT_SCOPE: &[&str] = &[
    "sync", "async", "period", "limit", "shuffle", "size", "id", "public", "new", "global",
    "plot", "history", "quiz",
];

/// Flags whose purely numeric values are read as integers.
pub const INTEGER_FLAGS: &[&str] = &["id", "size"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
    Int(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeMap<String, FlagValue>);

impl Flags {
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether a bare flag was given, or `name=true`.
    pub fn is_set(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(FlagValue::Bool(b)) => *b,
            Some(FlagValue::Text(t)) => t.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FlagValue::Text(t)) => Some(t),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.0.get(name) {
            Some(FlagValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Reads keyword (`name=value`) and free (`name`) flags out of a command
/// line, keeping only names in scope.
///
/// Each whitespace-separated token (quotes group) is classified once, so a
/// word inside a keyword value is never mistaken for a free flag. When a
/// name appears more than once, the rightmost token wins.
#[derive(Debug, Clone)]
pub struct FlagInterpreter<'a> {
    scope: &'a [&'a str],
    integers: &'a [&'a str],
}

impl Default for FlagInterpreter<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_SCOPE)
    }
}

impl<'a> FlagInterpreter<'a> {
    pub fn new(scope: &'a [&'a str]) -> Self {
        Self {
            scope,
            integers: INTEGER_FLAGS,
        }
    }

    pub fn with_integers(mut self, integers: &'a [&'a str]) -> Self {
        self.integers = integers;
        self
    }

    fn in_scope(&self, name: &str) -> bool {
        self.scope.contains(&name)
    }

    pub fn read(&self, line: &str) -> Flags {
        let mut flags = BTreeMap::new();
        for token in tokenize(line) {
            if let Some((name, value)) = keyword(token) {
                if self.in_scope(name) {
                    flags.insert(name.to_string(), self.coerce(name, value));
                }
            } else if let Some(name) = free(token) {
                if self.in_scope(name) {
                    flags.insert(name.to_string(), FlagValue::Bool(true));
                }
            }
        }
        Flags(flags)
    }

    fn coerce(&self, name: &str, value: &str) -> FlagValue {
        let numeric = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
        if numeric && self.integers.contains(&name) {
            if let Ok(n) = value.parse() {
                return FlagValue::Int(n);
            }
        }
        FlagValue::Text(value.to_string())
    }
}
