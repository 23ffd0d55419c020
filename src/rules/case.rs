// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter case detection for the `*-case` rules.

/// Check whether `input` is already written in `case`.
///
/// The input is converted to the target case and compared with itself.
/// Unknown case names never match.
pub fn ensure_case(input: &str, case: &str) -> bool {
    let converted = match to_case(input, case) {
        Some(converted) => converted,
        None => return false,
    };

    converted.is_empty() || converted == input
}

/// Convert `input` to the named case.
pub fn to_case(input: &str, case: &str) -> Option<String> {
    let converted = match case {
        "lower-case" | "lowercase" => input.to_lowercase(),
        "upper-case" | "uppercase" => input.to_uppercase(),
        "sentence-case" | "sentencecase" => capitalize(&input.to_lowercase()),
        "start-case" => input
            .split(' ')
            .map(|word| capitalize(&word.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" "),
        "camel-case" => {
            let mut out = String::new();
            for (i, word) in words(input).iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_lowercase());
                } else {
                    out.push_str(&capitalize(&word.to_lowercase()));
                }
            }
            out
        }
        "pascal-case" => words(input)
            .iter()
            .map(|word| capitalize(&word.to_lowercase()))
            .collect(),
        "kebab-case" => join_lower(input, "-"),
        "snake-case" => join_lower(input, "_"),
        _ => return None,
    };

    Some(converted)
}

/// All case names understood by [`ensure_case`].
pub fn known_cases() -> &'static [&'static str] {
    &[
        "lower-case",
        "upper-case",
        "camel-case",
        "kebab-case",
        "pascal-case",
        "sentence-case",
        "snake-case",
        "start-case",
    ]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_lower(input: &str, separator: &str) -> String {
    words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Split on non-alphanumeric characters and on lower-to-upper transitions.
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_cases() {
        assert!(ensure_case("add widget", "lower-case"));
        assert!(!ensure_case("Add widget", "lower-case"));
        assert!(ensure_case("ADD WIDGET", "upper-case"));
        assert!(ensure_case("Add widget", "sentence-case"));
        assert!(!ensure_case("add widget", "sentence-case"));
        assert!(ensure_case("Add Widget", "start-case"));
        assert!(!ensure_case("Add widget", "start-case"));
    }

    #[test]
    fn test_compound_cases() {
        assert!(ensure_case("addWidget", "camel-case"));
        assert!(ensure_case("AddWidget", "pascal-case"));
        assert!(!ensure_case("addWidget", "pascal-case"));
        assert!(ensure_case("add-widget", "kebab-case"));
        assert!(ensure_case("add_widget", "snake-case"));
        assert!(!ensure_case("add widget", "snake-case"));
    }

    #[test]
    fn test_unknown_case() {
        assert!(!ensure_case("anything", "spongebob-case"));
        assert!(to_case("anything", "spongebob-case").is_none());
    }

    #[test]
    fn test_known_cases_all_convert() {
        for case in known_cases() {
            assert!(to_case("some input", case).is_some(), "{}", case);
        }
    }
}
