//! Natural string ordering: case-insensitive, with embedded digit runs
//! compared as numbers, so `Episode 2` sorts before `Episode 10`.

use std::cmp::Ordering;

/// Compare two strings case-insensitively, treating digit runs numerically.
///
/// Strings that differ only by letter case or by leading zeros inside a digit
/// run compare equal; callers break such ties themselves.
#[must_use]
pub fn natural_cmp(lhs: &str, rhs: &str) -> Ordering {
    let mut left = lhs;
    let mut right = rhs;

    loop {
        match (left.chars().next(), right.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let (left_run, left_rest) = split_digit_run(left);
                let (right_run, right_rest) = split_digit_run(right);
                let by_value = cmp_digit_runs(left_run, right_run);
                if by_value != Ordering::Equal {
                    return by_value;
                }
                left = left_rest;
                right = right_rest;
            }
            (Some(l), Some(r)) => {
                let folded = l.to_lowercase().cmp(r.to_lowercase());
                if folded != Ordering::Equal {
                    return folded;
                }
                left = &left[l.len_utf8()..];
                right = &right[r.len_utf8()..];
            }
        }
    }
}

/// Split `text` at the end of its leading ASCII digit run.
fn split_digit_run(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Compare digit runs numerically without overflowing on absurd lengths:
/// strip leading zeros, then shorter-is-smaller, then lexical.
fn cmp_digit_runs(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}
