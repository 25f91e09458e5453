//! Normalized string similarity measures on a 0–100 scale.
//!
//! All measures work on Unicode scalar values and are case-sensitive; callers
//! lower-case both sides first.

/// Indel similarity: `200 * LCS / (len(a) + len(b))`.
///
/// Two empty strings are identical (100).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best [`ratio`] of the shorter string against every same-length window of
/// the longer one, including the partial windows hanging off either end.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() == b.len() {
        return best_window_ratio(&a, &b).max(best_window_ratio(&b, &a));
    }
    if a.len() < b.len() {
        best_window_ratio(&a, &b)
    } else {
        best_window_ratio(&b, &a)
    }
}

/// [`ratio`] after sorting the whitespace-separated tokens of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Maximum of [`ratio`], [`partial_ratio`] and [`token_sort_ratio`].
pub fn best_ratio(a: &str, b: &str) -> f64 {
    let full = ratio(a, b);
    if full >= 100.0 {
        return full;
    }
    full.max(partial_ratio(a, b)).max(token_sort_ratio(a, b))
}

pub(crate) fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let len_sum = a.len() + b.len();
    if len_sum == 0 {
        return 100.0;
    }
    200.0 * lcs_len(a, b) as f64 / len_sum as f64
}

fn best_window_ratio(needle: &[char], haystack: &[char]) -> f64 {
    if needle.is_empty() {
        return if haystack.is_empty() { 100.0 } else { 0.0 };
    }

    let m = needle.len();
    let n = haystack.len();
    let mut best = 0.0f64;

    for end in 1..m.min(n + 1) {
        best = best.max(ratio_chars(needle, &haystack[..end]));
    }
    for start in 0..=n.saturating_sub(m) {
        let end = (start + m).min(n);
        best = best.max(ratio_chars(needle, &haystack[start..end]));
        if best >= 100.0 {
            return best;
        }
    }
    for start in (n.saturating_sub(m) + 1)..n {
        best = best.max(ratio_chars(needle, &haystack[start..]));
    }

    best
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
