//! Text helpers for descriptive fields.

use regex::{Captures, Regex};

/// Title-case a string: the first letter of every alphabetic run is
/// uppercased and the rest lowercased. Digits and punctuation start a new run,
/// so `3-pack` becomes `3-Pack`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_alpha = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(ch);
            previous_alpha = false;
        }
    }
    out
}

const DEFAULT_SET_WORDS: [(&str, &str); 10] = [
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
];

/// Rewrites spelled-out set sizes (`set of three`) to digits (`set of 3`).
#[derive(Debug, Clone)]
pub struct SetSizeWords {
    words: Vec<(String, String)>,
    pattern: Regex,
}

impl Default for SetSizeWords {
    fn default() -> Self {
        Self::new(DEFAULT_SET_WORDS)
    }
}

impl SetSizeWords {
    /// Build from `(word, digits)` pairs.
    pub fn new<W, D>(pairs: impl IntoIterator<Item = (W, D)>) -> Self
    where
        W: Into<String>,
        D: Into<String>,
    {
        let words: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(word, digits)| (word.into().to_lowercase(), digits.into()))
            .collect();
        let alternation = words
            .iter()
            .map(|(word, _)| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(set of )({alternation})\b"))
            .expect("escaped set-size words form a valid regex");
        Self { words, pattern }
    }

    /// Replace every `set of <word>` with `set of <digits>`.
    pub fn normalize(&self, value: &str) -> String {
        self.pattern
            .replace_all(value, |caps: &Captures<'_>| {
                let word = caps[2].to_lowercase();
                let digits = self
                    .words
                    .iter()
                    .find(|(candidate, _)| *candidate == word)
                    .map_or(&caps[2], |(_, digits)| digits.as_str());
                format!("{}{}", &caps[1], digits)
            })
            .into_owned()
    }
}
