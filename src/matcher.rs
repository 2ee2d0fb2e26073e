use crate::model::Number;

const MIN_RATIO: f64 = 70.0;

/// Edit distance between two strings, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            row[j + 1] = (prev[j + 1] + 1).min(row[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

/// Similarity on a 0-100 scale. Exactly 100 only for identical strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 100.0;
    }
    100.0 * (1.0 - levenshtein(a, b) as f64 / longest as f64)
}

/// Minimum similarity a free response needs to be accepted.
///
/// Short answers get the floor of 70; longer ones demand more, approaching
/// 100 as the answer grows.
pub fn match_threshold(answer: &str, exact: bool) -> f64 {
    if exact {
        return 100.0;
    }
    let len = answer.chars().count();
    if len == 0 {
        return MIN_RATIO;
    }
    MIN_RATIO.max(100.0 - 100.0 / (len as f64).sqrt())
}

pub fn free_response(answer: &str, threshold: f64, candidate: &str) -> bool {
    similarity(candidate, answer) >= threshold
}

/// Parses an integer or a decimal with a single point. Anything else,
/// including exponents, is rejected.
pub fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match unsigned.split_once('.') {
        None if all_digits(unsigned) => match text.parse() {
            Ok(n) => Some(Number::Int(n)),
            // Too wide for i64
            Err(_) => text.parse().ok().map(Number::Float),
        },
        Some((whole, frac)) if all_digits(whole) && all_digits(frac) => {
            text.parse().ok().map(Number::Float)
        }
        _ => None,
    }
}

fn round_f64(x: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (x * scale).round() / scale
}

/// Rounds to `decimal` places; `None` leaves the number untouched and
/// zero places produces an integer.
pub fn round_number(n: Number, decimal: Option<u32>) -> Number {
    match (n, decimal) {
        (n, None) => n,
        (Number::Int(i), Some(_)) => Number::Int(i),
        (Number::Float(x), Some(0)) => Number::Int(x.round() as i64),
        (Number::Float(x), Some(places)) => Number::Float(round_f64(x, places)),
    }
}

pub fn numeric(answer: Number, decimal: Option<u32>, candidate: &str) -> bool {
    match parse_number(candidate) {
        Some(given) => {
            round_number(given, decimal).as_f64() == round_number(answer, decimal).as_f64()
        }
        None => false,
    }
}

/// Label of the option at `index`: `a`, `b`, ...
pub fn label(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| (b'a' + i) as char)
}

/// Position addressed by a single-letter label.
pub fn label_index(token: &str) -> Option<usize> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
        }
        _ => None,
    }
}

pub fn multiple_choice(options: &[String], answer: &str, candidate: &str) -> bool {
    if candidate == answer {
        return true;
    }
    label_index(candidate.trim())
        .and_then(|i| options.get(i))
        .is_some_and(|option| option == answer)
}

/// Every token must claim a distinct remaining answer, and every answer must
/// be claimed.
pub fn multiple_response(options: &[String], answers: &[String], candidate: &str) -> bool {
    if answers.is_empty() {
        return false;
    }
    let mut remaining: Vec<&String> = answers.iter().collect();
    let lowered = candidate.to_lowercase();

    for token in lowered
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let chosen = match label_index(token).and_then(|i| options.get(i)) {
            Some(option) => option,
            None => return false,
        };
        match remaining.iter().position(|a| *a == chosen) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }

    remaining.is_empty()
}
