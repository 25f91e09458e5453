use super::phrase::suppress_near_duplicates;
use super::{
    find_phrase_occurrences, find_phrase_occurrences_scored, find_text_segment,
    find_text_segment_scored,
};
use crate::types::{Occurrence, Word};

fn timeline(spec: &[(&str, u64, u64)]) -> Vec<Word> {
    spec.iter()
        .map(|&(text, start, end)| Word::new(text, start, end))
        .collect()
}

fn hello_world_today() -> Vec<Word> {
    timeline(&[("hello", 0, 500), ("world", 500, 1000), ("today", 1000, 1500)])
}

fn occ(start_s: f64, score: f64) -> Occurrence {
    Occurrence {
        start_s,
        end_s: start_s + 0.4,
        text: String::new(),
        score,
        first_word: 0,
        last_word: 0,
    }
}

#[test]
fn exact_two_word_phrase_is_found_once() {
    let found = find_phrase_occurrences(&hello_world_today(), "hello world", 80.0).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].start_s, 0.0);
    assert_eq!(found[0].end_s, 1.0);
    assert_eq!(found[0].text, "hello world");
    assert!(found[0].score >= 80.0);
    assert_eq!((found[0].first_word, found[0].last_word), (0, 1));
}

#[test]
fn unrelated_query_yields_empty_result() {
    let found = find_phrase_occurrences(&hello_world_today(), "xylophone", 80.0).unwrap();
    assert!(found.is_empty());
}

#[test]
fn matching_is_case_insensitive_but_text_keeps_casing() {
    let words = timeline(&[("Hello", 0, 400), ("World", 400, 900)]);
    let found = find_phrase_occurrences(&words, "HELLO world", 90.0).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "Hello World");
    assert_eq!(found[0].score, 100.0);
}

#[test]
fn tolerates_transcription_typo() {
    let words = timeline(&[("the", 0, 200), ("quick", 200, 500), ("brwn", 500, 800), ("fox", 800, 1100)]);
    let found = find_phrase_occurrences(&words, "quick brown fox", 80.0).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].start_s, 0.2);
    assert_eq!(found[0].end_s, 1.1);
}

#[test]
fn tolerates_reordered_words() {
    let words = timeline(&[("york", 0, 300), ("new", 300, 600), ("city", 600, 900)]);
    let found = find_phrase_occurrences(&words, "new york", 95.0).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "york new");
    assert_eq!(found[0].score, 100.0);
}

#[test]
fn query_longer_than_timeline_is_empty_not_error() {
    let words = timeline(&[("hello", 0, 500)]);
    let found = find_phrase_occurrences(&words, "hello there world", 50.0).unwrap();
    assert!(found.is_empty());
}

#[test]
fn empty_timeline_is_invalid_input() {
    let err = find_phrase_occurrences(&[], "hello", 80.0).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn blank_query_is_invalid_input() {
    let err = find_phrase_occurrences(&hello_world_today(), "   ", 80.0).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn threshold_out_of_range_is_invalid_input() {
    for threshold in [-1.0, 100.1, f64::NAN] {
        let err = find_phrase_occurrences(&hello_world_today(), "hello", threshold).unwrap_err();
        assert!(err.is_invalid_input(), "threshold {threshold} accepted");
    }
}

#[test]
fn results_are_sorted_by_score_descending() {
    let words = timeline(&[
        ("hallo", 0, 400),
        ("there", 400, 800),
        ("and", 5000, 5200),
        ("hello", 5200, 5600),
        ("again", 5600, 6000),
    ]);
    let found = find_phrase_occurrences(&words, "hello", 70.0).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].start_s, 5.2);
    assert_eq!(found[0].score, 100.0);
    assert_eq!(found[1].start_s, 0.0);
    assert!(found[1].score < found[0].score);
}

#[test]
fn near_duplicate_starts_keep_best_scoring_hit() {
    // Repeated word in quick succession: both windows start within 0.5s.
    let words = timeline(&[("no", 0, 200), ("no", 200, 400), ("no", 3000, 3200)]);
    let found = find_phrase_occurrences(&words, "no", 80.0).unwrap();
    let starts: Vec<f64> = found.iter().map(|o| o.start_s).collect();
    assert_eq!(starts, vec![0.0, 3.0]);
}

#[test]
fn suppression_keeps_higher_score_inside_radius() {
    let kept = suppress_near_duplicates(vec![occ(1.0, 95.0), occ(1.3, 90.0), occ(1.6, 85.0)], 0.5);
    let starts: Vec<f64> = kept.iter().map(|o| o.start_s).collect();
    // 1.3 is dominated by 1.0; 1.6 is 0.6s from 1.0 and survives.
    assert_eq!(starts, vec![1.0, 1.6]);
}

#[test]
fn suppression_with_zero_radius_keeps_everything() {
    let kept = suppress_near_duplicates(vec![occ(1.0, 95.0), occ(1.0, 90.0)], 0.0);
    assert_eq!(kept.len(), 2);
}

#[test]
fn custom_scorer_is_used() {
    let exact = |q: &str, c: &str| if q == c { 100.0 } else { 0.0 };
    let found =
        find_phrase_occurrences_scored(&hello_world_today(), "world", 100.0, 0.5, exact).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].start_s, 0.5);
}

#[test]
fn segment_spans_from_start_anchor_to_end_anchor() {
    let segment = find_text_segment(&hello_world_today(), "hello", "today", 80.0)
        .unwrap()
        .expect("segment");
    assert_eq!(segment.start_s, 0.0);
    assert_eq!(segment.end_s, 1.5);
    assert_eq!(segment.text, "hello world today");
    assert_eq!(segment.score, 100.0);
}

#[test]
fn segment_missing_anchor_is_none() {
    let segment = find_text_segment(&hello_world_today(), "hello", "xylophone", 80.0).unwrap();
    assert!(segment.is_none());
}

#[test]
fn segment_rejects_end_anchor_before_start() {
    let words = timeline(&[("goodbye", 0, 500), ("friends", 500, 1000), ("hello", 1000, 1500)]);
    let segment = find_text_segment(&words, "hello", "goodbye", 90.0).unwrap();
    assert!(segment.is_none());
}

#[test]
fn segment_pairing_is_greedy_on_best_start() {
    // Start anchor appears twice; the exact hit at 10s outranks the fuzzy one at 0s,
    // so the segment begins at 10s even though 0s would give a longer span.
    let words = timeline(&[
        ("helo", 0, 300),
        ("filler", 300, 600),
        ("hello", 10_000, 10_300),
        ("middle", 10_300, 10_600),
        ("bye", 10_600, 10_900),
    ]);
    let segment = find_text_segment(&words, "hello", "bye", 80.0)
        .unwrap()
        .expect("segment");
    assert_eq!(segment.start_s, 10.0);
    assert_eq!(segment.end_s, 10.9);
    assert_eq!(segment.text, "hello middle bye");
}

#[test]
fn segment_score_is_mean_of_anchor_scores() {
    let half = |q: &str, c: &str| {
        if q != c {
            0.0
        } else if q == "hello" {
            100.0
        } else {
            80.0
        }
    };
    let segment = find_text_segment_scored(&hello_world_today(), "hello", "today", 50.0, 0.5, half)
        .unwrap()
        .expect("segment");
    assert_eq!(segment.score, 90.0);
    assert!(segment.end_s > segment.start_s);
}

#[test]
fn segment_on_empty_timeline_is_invalid_input() {
    let err = find_text_segment(&[], "a", "b", 80.0).unwrap_err();
    assert!(err.is_invalid_input());
}
