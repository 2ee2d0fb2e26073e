/// Resolves a signed index against a collection of `len` elements.
/// Negative values count from the end; valid range is `[-len, len)`.
pub fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len + index } else { index };
    (0..len).contains(&resolved).then_some(resolved as usize)
}

/// `true`/`false`, case-insensitive.
pub fn parse_bool(change: &str) -> Option<bool> {
    match change.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn fits(text: &str, limit: usize) -> bool {
    text.chars().count() <= limit
}

/// Runs `edit` against `target` and keeps the result only if the edit
/// reports success and the new state passes `valid`. Otherwise `target` is
/// restored to its state before the call.
pub fn transactional<T, E, V>(target: &mut T, edit: E, valid: V) -> bool
where
    T: Clone,
    E: FnOnce(&mut T) -> bool,
    V: FnOnce(&T) -> bool,
{
    let before = target.clone();
    if edit(target) && valid(target) {
        true
    } else {
        *target = before;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index_bounds() {
        assert_eq!(resolve_index(3, 0), Some(0));
        assert_eq!(resolve_index(3, 2), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(3, -1), Some(2));
        assert_eq!(resolve_index(3, -3), Some(0));
        assert_eq!(resolve_index(3, -4), None);
        assert_eq!(resolve_index(0, 0), None);
    }

    #[test]
    fn test_transactional_rolls_back() {
        let mut items = vec![1, 2, 3];
        let ok = transactional(&mut items, |v| {
            v.push(4);
            true
        }, |v| v.len() <= 3);
        assert!(!ok);
        assert_eq!(items, vec![1, 2, 3]);

        let ok = transactional(&mut items, |v| {
            v.pop();
            true
        }, |v| v.len() <= 3);
        assert!(ok);
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }
}
