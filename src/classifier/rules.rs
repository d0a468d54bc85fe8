//! The individual name heuristics.
//!
//! Each rule is a plain predicate over [`NormalizedLetters`] so it can be
//! tested on its own. The thresholds are empirically tuned; changing any of
//! them changes which real registrations get rejected.

use std::collections::HashSet;
use std::fmt;

use super::normalize::{is_vowel, NormalizedLetters};
use super::Classification;

/// Names with fewer letters than this are never flagged.
pub const MIN_LETTERS: usize = 4;

const ALTERNATION_LONG_LEN: usize = 8;
const ALTERNATION_LONG_MIN: usize = 4;

const UPPERCASE_MIN_LEN: usize = 6;
const UPPERCASE_MAX_RATIO: f64 = 0.50;

const VOWEL_MIN_LEN: usize = 10;
const VOWEL_MIN_RATIO: f64 = 0.15;

const CLUSTER_RUN_LEN: usize = 4;
const CLUSTER_LONG_LEN: usize = 12;

const BIGRAM_MIN_LEN: usize = 14;
const BIGRAM_FLAG_LEN: usize = 16;
const BIGRAM_MAX_UNIQUE_RATIO: f64 = 0.85;

/// One heuristic and the verdict it produces when it fires.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub verdict: Classification,
    pub check: fn(&NormalizedLetters) -> bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("verdict", &self.verdict)
            .finish_non_exhaustive()
    }
}

/// Rules in evaluation order. The first match decides the verdict, so the
/// order determines which message a user sees when several would fire.
pub static RULES: [Rule; 5] = [
    Rule {
        name: "case_alternation",
        verdict: Classification::Suspicious,
        check: has_case_alternation,
    },
    Rule {
        name: "uppercase_ratio",
        verdict: Classification::Suspicious,
        check: is_mostly_uppercase,
    },
    Rule {
        name: "vowel_ratio",
        verdict: Classification::Gibberish,
        check: lacks_vowels,
    },
    Rule {
        name: "consonant_clusters",
        verdict: Classification::Unreadable,
        check: has_consonant_clusters,
    },
    Rule {
        name: "bigram_uniqueness",
        verdict: Classification::Gibberish,
        check: has_diverse_bigrams,
    },
];

/// Count adjacent letter pairs whose case differs.
///
/// Pairs are matched left to right without overlap: after `Ab` matches,
/// scanning resumes at the letter following `b`. `"MaryJane"` therefore has
/// two alternations (`Ma`, `yJ`), not three.
pub fn count_case_alternations(letters: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + 1 < letters.len() {
        if letters[i].is_ascii_uppercase() != letters[i + 1].is_ascii_uppercase() {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

/// Mixed case that flips at nearly every boundary, e.g. `xKjLpQrS`.
pub fn has_case_alternation(letters: &NormalizedLetters) -> bool {
    if letters.uppercase_count() < 2 || letters.lowercase_count() < 2 {
        return false;
    }
    let len = letters.len();
    let alternations = count_case_alternations(letters.as_bytes());
    // alternations > len / 3, kept exact in integers
    alternations * 3 > len
        || (len >= ALTERNATION_LONG_LEN && alternations >= ALTERNATION_LONG_MIN)
}

/// Mixed-case names where capitals outnumber lowercase letters.
pub fn is_mostly_uppercase(letters: &NormalizedLetters) -> bool {
    let len = letters.len();
    if len < UPPERCASE_MIN_LEN {
        return false;
    }
    let upper = letters.uppercase_count();
    if upper == 0 || letters.lowercase_count() == 0 {
        return false;
    }
    upper as f64 / len as f64 > UPPERCASE_MAX_RATIO
}

/// Long names with too few vowels to be pronounceable.
pub fn lacks_vowels(letters: &NormalizedLetters) -> bool {
    let len = letters.len();
    len >= VOWEL_MIN_LEN && (letters.vowel_count() as f64) < len as f64 * VOWEL_MIN_RATIO
}

/// Count maximal runs of at least four consecutive non-vowels.
pub fn count_consonant_clusters(letters: &[u8]) -> usize {
    let mut clusters = 0;
    let mut run = 0;
    for &b in letters {
        if is_vowel(b) {
            if run >= CLUSTER_RUN_LEN {
                clusters += 1;
            }
            run = 0;
        } else {
            run += 1;
        }
    }
    if run >= CLUSTER_RUN_LEN {
        clusters += 1;
    }
    clusters
}

/// Two or more consonant clusters, or any cluster in a long name.
pub fn has_consonant_clusters(letters: &NormalizedLetters) -> bool {
    let clusters = count_consonant_clusters(letters.as_bytes());
    clusters >= 2 || (clusters >= 1 && letters.len() >= CLUSTER_LONG_LEN)
}

/// Fraction of distinct adjacent pairs among all adjacent pairs, ignoring case.
///
/// Returns 0.0 when there are fewer than two letters.
pub fn bigram_uniqueness(letters: &[u8]) -> f64 {
    if letters.len() < 2 {
        return 0.0;
    }
    let total = letters.len() - 1;
    let distinct: HashSet<(u8, u8)> = letters
        .windows(2)
        .map(|w| (w[0].to_ascii_lowercase(), w[1].to_ascii_lowercase()))
        .collect();
    distinct.len() as f64 / total as f64
}

/// Long, letters-only names that almost never repeat a letter pair.
///
/// Any non-letter anywhere in the raw input disables this rule.
pub fn has_diverse_bigrams(letters: &NormalizedLetters) -> bool {
    let len = letters.len();
    if len < BIGRAM_MIN_LEN || !letters.is_pure() {
        return false;
    }
    len >= BIGRAM_FLAG_LEN && bigram_uniqueness(letters.as_bytes()) > BIGRAM_MAX_UNIQUE_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: &str) -> NormalizedLetters {
        NormalizedLetters::from_raw(raw)
    }

    #[test]
    fn test_count_case_alternations() {
        assert_eq!(count_case_alternations(b"xKjLpQrS"), 4);
        assert_eq!(count_case_alternations(b"MaryJane"), 2);
        // Non-overlapping: counting bC as well would flag "Mary Jane".
        assert_eq!(count_case_alternations(b"AbC"), 1);
        assert_eq!(count_case_alternations(b"abcdef"), 0);
        assert_eq!(count_case_alternations(b""), 0);
        assert_eq!(count_case_alternations(b"A"), 0);
    }

    #[test]
    fn test_case_alternation() {
        assert!(has_case_alternation(&n("xKjLpQrS")));
        assert!(has_case_alternation(&n("aBcD")));
        assert!(!has_case_alternation(&n("Mary Jane")));
        assert!(!has_case_alternation(&n("McDonald")));
        // Needs at least two of each case.
        assert!(!has_case_alternation(&n("aBcdef")));
        assert!(!has_case_alternation(&n("ABCDEf")));
    }

    #[test]
    fn test_case_alternation_long_name_floor() {
        // Four alternations in twelve letters is not above a third,
        // but long names with four flips are still flagged.
        let letters = n("AbcDefGhiJkl");
        assert_eq!(count_case_alternations(letters.as_bytes()), 4);
        assert!(!is_mostly_uppercase(&letters));
        assert!(has_case_alternation(&letters));

        // Three flips is below the floor and below a third of thirteen.
        assert!(!has_case_alternation(&n("AbcDefGhijklm")));
    }

    #[test]
    fn test_mostly_uppercase() {
        assert!(is_mostly_uppercase(&n("ABCDef")));
        assert!(!is_mostly_uppercase(&n("ABCdef")));
        // All-caps and all-lowercase are left alone.
        assert!(!is_mostly_uppercase(&n("JOHNSMITH")));
        assert!(!is_mostly_uppercase(&n("johnsmith")));
        // Too short to judge.
        assert!(!is_mostly_uppercase(&n("ABCde")));
    }

    #[test]
    fn test_lacks_vowels() {
        assert!(lacks_vowels(&n("bcdfghjklm")));
        // One vowel in ten letters is below 15%.
        assert!(lacks_vowels(&n("bcdfghjkla")));
        // Two vowels in ten letters is enough.
        assert!(!lacks_vowels(&n("bcdfghjkae")));
        assert!(!lacks_vowels(&n("bcdfghjkl")));
    }

    #[test]
    fn test_count_consonant_clusters() {
        assert_eq!(count_consonant_clusters(b"strchaxyzwqe"), 2);
        assert_eq!(count_consonant_clusters(b"bcdfghjklm"), 1);
        assert_eq!(count_consonant_clusters(b"schwarz"), 1);
        assert_eq!(count_consonant_clusters(b"banana"), 0);
        assert_eq!(count_consonant_clusters(b"abcd"), 0);
        // A and E are vowels, leaving a three-letter run.
        assert_eq!(count_consonant_clusters(b"ABCDE"), 0);
        assert_eq!(count_consonant_clusters(b"ABCDF"), 1);
    }

    #[test]
    fn test_consonant_clusters() {
        assert!(has_consonant_clusters(&n("bcdfabcdf")));
        assert!(has_consonant_clusters(&n("aschwarzenegg")));
        // A single cluster in a short name is tolerated.
        assert!(!has_consonant_clusters(&n("schwarz")));
        assert!(!has_consonant_clusters(&n("elizabeth")));
    }

    #[test]
    fn test_bigram_uniqueness() {
        assert_eq!(bigram_uniqueness(b"a"), 0.0);
        assert_eq!(bigram_uniqueness(b"abab"), 2.0 / 3.0);
        assert_eq!(bigram_uniqueness(b"AbaB"), 2.0 / 3.0);
        assert_eq!(bigram_uniqueness(b"abcd"), 1.0);
    }

    #[test]
    fn test_diverse_bigrams() {
        assert!(has_diverse_bigrams(&n("jovakimerutalopex")));
        assert!(!has_diverse_bigrams(&n("jovakime7rutalopex")));
        assert!(!has_diverse_bigrams(&n("jovakime rutalopex")));
        // Fifteen letters is inside the gate but below the flag length.
        assert!(!has_diverse_bigrams(&n("jovakimerutalop")));
        assert!(!has_diverse_bigrams(&n("lalalalalalalalala")));
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "case_alternation",
                "uppercase_ratio",
                "vowel_ratio",
                "consonant_clusters",
                "bigram_uniqueness"
            ]
        );
    }
}
