//! Metric and matching properties checked over a fixed corpus

use fuzzbench_core::{best_matches, distance, score, Backend, BatchMatcher, Match, MatcherConfig};
use pretty_assertions::assert_eq;

/// Helper corpus mixing empties, near-duplicates and non-ASCII text
fn corpus() -> Vec<&'static str> {
    vec![
        "",
        "a",
        "aa",
        "ab",
        "ba",
        "abc",
        "kitten",
        "sitting",
        "kitchen",
        "bitten",
        "flaw",
        "flaws",
        "law",
        "lawn",
        "intention",
        "execution",
        "café",
        "cafe",
        "日本語",
        "日本",
        "rocket_🚀_launch",
    ]
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[test]
fn test_identity() {
    for s in corpus() {
        assert_eq!(distance(s, s), 0, "{:?}", s);
        assert_eq!(score(s, s), 100.0, "{:?}", s);
    }
}

#[test]
fn test_symmetry() {
    let words = corpus();
    for a in &words {
        for b in &words {
            assert_eq!(distance(a, b), distance(b, a), "({:?}, {:?})", a, b);
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let words = corpus();
    for a in &words {
        for b in &words {
            for c in &words {
                assert!(
                    distance(a, c) <= distance(a, b) + distance(b, c),
                    "({:?}, {:?}, {:?})",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn test_bounds() {
    let words = corpus();
    for a in &words {
        for b in &words {
            let d = distance(a, b);
            assert!(d <= char_len(a).max(char_len(b)), "({:?}, {:?})", a, b);
            assert!(d >= char_len(a).abs_diff(char_len(b)), "({:?}, {:?})", a, b);
        }
    }
    assert_eq!(distance("", ""), 0);
}

#[test]
fn test_score_range() {
    let words = corpus();
    for a in &words {
        for b in &words {
            let s = score(a, b);
            assert!((0.0..=100.0).contains(&s), "score({:?}, {:?}) = {}", a, b, s);
        }
    }
}

#[test]
fn test_kitten_sitting() {
    assert_eq!(distance("kitten", "sitting"), 3);
    assert!((score("kitten", "sitting") - (1.0 - 3.0 / 7.0) * 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_candidates_policy() {
    let none: Vec<&str> = Vec::new();
    let queries = corpus();
    let matches = best_matches(&queries, &none);
    assert_eq!(matches.len(), queries.len());
    assert!(matches.iter().all(|m| *m == Match::none()));
    assert!(matches.iter().all(|m| m.choice.is_empty() && m.score == -1.0));
}

#[test]
fn test_order_preservation() {
    let queries = corpus();
    let choices = ["kitchen", "flaws", "日本", "cafe", "execution"];
    let matches = best_matches(&queries, &choices);
    assert_eq!(matches.len(), queries.len());

    let matcher = BatchMatcher::new();
    for (query, m) in queries.iter().zip(&matches) {
        assert_eq!(*m, matcher.best_match(query, &choices));
    }
}

#[test]
fn test_choice_comes_from_candidates() {
    let queries = corpus();
    let choices = corpus();
    for m in best_matches(&queries, &choices) {
        let idx = m.index.expect("non-empty candidates always match");
        assert_eq!(m.choice, choices[idx]);
    }
}

#[test]
fn test_tie_break_is_positional() {
    let matches = best_matches(&["aa"], &["aa", "aa"]);
    assert_eq!(matches[0].choice, "aa");
    assert_eq!(matches[0].index, Some(0));

    // Equal scores at indices 1 and 2, nothing better elsewhere
    let matches = best_matches(&["abcd"], &["wxyz", "abcx", "abcy"]);
    assert_eq!(matches[0].index, Some(1));
    assert_eq!(matches[0].score, 75.0);
}

#[test]
fn test_flaw_scenario() {
    let matches = best_matches(&["flaw"], &["flaws", "law"]);
    assert_eq!(
        matches,
        vec![Match {
            choice: "flaws".to_string(),
            score: 80.0,
            index: Some(0),
        }]
    );
}

#[test]
fn test_single_query_empty_candidates() {
    let none: [&str; 0] = [];
    assert_eq!(best_matches(&["x"], &none), vec![Match::none()]);
}

#[test]
fn test_reference_and_configured_matchers_agree() {
    let queries = ["kitten", "flaw"];
    let choices = ["kitchen", "bitten", "flaws"];
    let reference = best_matches(&queries, &choices);

    for backend in Backend::ALL.into_iter().filter(Backend::is_available) {
        let matcher = BatchMatcher::with_config(MatcherConfig {
            backend,
            workers: if cfg!(feature = "parallel") { 0 } else { 1 },
            ..MatcherConfig::default()
        })
        .unwrap();
        let optimized = matcher.best_matches(&queries, &choices);

        let ref_choices: Vec<&str> = reference.iter().map(|m| m.choice.as_str()).collect();
        let opt_choices: Vec<&str> = optimized.iter().map(|m| m.choice.as_str()).collect();
        assert_eq!(opt_choices, ref_choices, "backend {}", backend);
        for (r, o) in reference.iter().zip(&optimized) {
            assert!((r.score - o.score).abs() < 1e-6, "backend {}", backend);
        }
    }
}

#[test]
fn test_match_serializes() {
    let m = Match {
        choice: "flaws".to_string(),
        score: 80.0,
        index: Some(0),
    };
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "choice": "flaws", "score": 80.0, "index": 0 })
    );
}
