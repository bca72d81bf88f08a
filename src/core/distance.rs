use strsim::levenshtein;

/// Normalized Levenshtein similarity between two strings.
///
/// `1.0` means identical, `0.0` means nothing in common. Lengths are counted in
/// `char`s. Two empty strings are a perfect match.
pub fn distance(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}

/// Edit distance in chars (insertions, deletions, substitutions).
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "paypal",
        "paypa1",
        "pay-pal",
        "paypal-secure-login",
        "login",
        "verify",
        "kitten",
        "sitting",
        "ámazon",
        "amazon",
    ];

    #[test]
    fn identical_strings_score_one() {
        for s in SAMPLES {
            assert_eq!(distance(s, s), 1.0, "{s:?}");
        }
    }

    #[test]
    fn both_empty_is_perfect_match() {
        assert_eq!(distance("", ""), 1.0);
    }

    #[test]
    fn empty_against_non_empty_scores_zero() {
        assert_eq!(distance("", "paypal"), 0.0);
        assert_eq!(distance("paypal", ""), 0.0);
    }

    #[test]
    fn distinct_equal_length_strings_score_below_one() {
        for a in SAMPLES {
            for b in SAMPLES {
                if a != b && a.chars().count() == b.chars().count() {
                    assert!(distance(a, b) < 1.0, "{a:?} vs {b:?}");
                }
            }
        }
    }

    #[test]
    fn symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(distance(a, b), distance(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn classic_edit_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("ámazon", "amazon"), 1);
    }

    #[test]
    fn single_substitution_over_six_chars() {
        let score = distance("paypa1", "paypal");
        assert!((score - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // one substitution, six chars even though "á" is two bytes
        let score = distance("ámazon", "amazon");
        assert!((score - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn matches_normalized_levenshtein() {
        for a in SAMPLES {
            for b in SAMPLES {
                let ours = distance(a, b);
                let theirs = strsim::normalized_levenshtein(a, b);
                assert!((ours - theirs).abs() < 1e-12, "{a:?} vs {b:?}");
            }
        }
    }
}
