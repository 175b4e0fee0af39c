// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable labels from property names.

/// Title-case a property name: `firstName`, `first_name` and `first-name`
/// all become `First Name`.
///
/// Apostrophes are dropped first (`don't` is one word). Words then split at
/// non-alphanumeric characters, at lower→upper transitions, before the last
/// capital of an acronym followed by a lower-case letter (`XMLHttp` → `XML
/// Http`), and between letters and digits. An ordinal suffix stays with its
/// number (`2nd`, `21ST`) when the suffix matches the last digit. The first
/// letter of every word is upper-cased; the rest is kept as written.
///
/// ```
/// use formgrid_core::text::start_case;
///
/// assert_eq!(start_case("firstName"), "First Name");
/// assert_eq!(start_case("street_address2"), "Street Address 2");
/// assert_eq!(start_case("2ndPlace"), "2nd Place");
/// ```
pub fn start_case(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();
    words(&cleaned)
        .into_iter()
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn words(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for chunk in s.split(|c: char| !c.is_alphanumeric()).filter(|c| !c.is_empty()) {
        let chars: Vec<(usize, char)> = chunk.char_indices().collect();
        let mut start = 0;
        let mut i = 1;
        while i < chars.len() {
            let (pos, c) = chars[i];
            let prev = chars[i - 1].1;
            if prev.is_ascii_digit()
                && let Some(len) = ordinal_suffix(prev, &chars[i..])
            {
                i += len;
                if let Some(&(end, _)) = chars.get(i) {
                    out.push(&chunk[start..end]);
                    start = end;
                    i += 1;
                }
                continue;
            }
            let next = chars.get(i + 1).map(|&(_, n)| n);
            let acronym_end =
                prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || prev.is_alphabetic() != c.is_alphabetic()
                || acronym_end;
            if boundary {
                out.push(&chunk[start..pos]);
                start = pos;
            }
            i += 1;
        }
        out.push(&chunk[start..]);
    }
    out
}

/// Length in chars of the ordinal suffix for `digit` at the start of `rest`.
///
/// The suffix is all lower- or all upper-case, and must end the chunk or be
/// followed by a letter of the other case.
fn ordinal_suffix(digit: char, rest: &[(usize, char)]) -> Option<usize> {
    let expected = match digit {
        '1' => ['s', 't'],
        '2' => ['n', 'd'],
        '3' => ['r', 'd'],
        _ => ['t', 'h'],
    };
    let [(_, a), (_, b), tail @ ..] = rest else {
        return None;
    };
    let upper = a.is_uppercase();
    let matches = a.to_ascii_lowercase() == expected[0]
        && b.to_ascii_lowercase() == expected[1]
        && b.is_uppercase() == upper;
    let ends = tail
        .first()
        .is_none_or(|&(_, n)| if upper { n.is_lowercase() } else { n.is_uppercase() });
    (matches && ends).then_some(2)
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
