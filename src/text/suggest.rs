// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! "Did you mean" suggestions based on normalized Levenshtein similarity.

/// Minimum similarity (0.0 to 1.0) a candidate needs to be suggested.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Find the candidate most similar to `word`.
///
/// Comparison is case-sensitive. Ties go to the lexicographically smallest
/// candidate so results do not depend on vocabulary order.
pub fn best_match<'a, S: AsRef<str>>(word: &str, candidates: &'a [S]) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = strsim::normalized_levenshtein(word, candidate);
        if score < SIMILARITY_THRESHOLD {
            continue;
        }

        best = match best {
            Some((current, current_score))
                if current_score > score || (current_score == score && current <= candidate) =>
            {
                Some((current, current_score))
            }
            _ => Some((candidate, score)),
        };
    }

    best.map(|(candidate, _)| candidate)
}

/// Suggest a replacement for a single unknown word.
///
/// Returns `Did you mean "best"? ` (with a trailing space) or an empty string
/// when the vocabulary is missing or nothing is close enough.
pub fn suggest_word<S: AsRef<str>>(word: &str, candidates: Option<&[S]>) -> String {
    let Some(candidates) = candidates.filter(|c| !c.is_empty()) else {
        return String::new();
    };

    match best_match(word, candidates) {
        Some(best) => format!("Did you mean \"{}\"? ", best),
        None => String::new(),
    }
}

/// Suggest replacements for several unknown words at once.
///
/// Each word is matched on its own; distinct matches are listed in the order
/// of the words that produced them.
pub fn suggest_words<S: AsRef<str>>(words: &[&str], candidates: Option<&[S]>) -> String {
    if let [word] = words {
        return suggest_word(word, candidates);
    }

    let Some(candidates) = candidates.filter(|c| !c.is_empty()) else {
        return String::new();
    };

    let mut matches: Vec<&str> = Vec::new();
    for word in words {
        if let Some(best) = best_match(word, candidates) {
            if !matches.contains(&best) {
                matches.push(best);
            }
        }
    }

    if matches.is_empty() {
        return String::new();
    }

    let quoted: Vec<String> = matches.iter().map(|m| format!("\"{}\"", m)).collect();
    format!("Did you mean {}? ", quoted.join(", "))
}
