//! Letter normalization.
//!
//! Every heuristic looks only at the ASCII letters of a candidate name, in
//! their original order and case. Digits, separators, punctuation and
//! non-ASCII characters are dropped before any rule runs.

/// The ASCII letters of a raw name, plus the facts the rules need about the
/// raw input they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLetters {
    letters: Vec<u8>,
    pure: bool,
}

impl NormalizedLetters {
    /// Strip everything that isn't `A-Z` or `a-z`. Never fails.
    pub fn from_raw(raw: &str) -> Self {
        let letters: Vec<u8> = raw
            .bytes()
            .filter(|b| b.is_ascii_alphabetic())
            .collect();
        // A multi-byte char contributes no letters, so the byte counts differ.
        let pure = letters.len() == raw.len();
        Self { letters, pure }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }

    /// The retained letters as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are retained, which is always valid UTF-8.
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// True when the raw input consisted of ASCII letters and nothing else.
    pub fn is_pure(&self) -> bool {
        self.pure
    }

    pub fn uppercase_count(&self) -> usize {
        self.letters.iter().filter(|b| b.is_ascii_uppercase()).count()
    }

    pub fn lowercase_count(&self) -> usize {
        self.letters.iter().filter(|b| b.is_ascii_lowercase()).count()
    }

    pub fn vowel_count(&self) -> usize {
        self.letters.iter().filter(|&&b| is_vowel(b)).count()
    }
}

/// Case-insensitive `a e i o u`. `y` counts as a consonant.
pub fn is_vowel(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u')
}
