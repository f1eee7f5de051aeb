//! Porter stemming algorithm implementation.
//!
//! Reduces English words to their stems by applying the rewrite rules of
//! Martin Porter's algorithm:
//! 1. Plurals and -ed/-ing suffixes, then terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! Within each step the first rule whose suffix matches decides the outcome:
//! when its measure condition fails, the word is left unchanged for that step.
//!
//! The variant implemented here carries the refinements of the NLTK stemmer
//! that the emotion models were fitted with:
//! - a small table of irregular forms is looked up first (`dying` → `die`,
//!   `skies` → `sky`)
//! - short `-ies`/`-ied` words keep their `ie` (`dies` → `die`)
//! - `y` only becomes `i` after a consonant (`today` stays `today`)
//! - a few extra step 2 suffixes are recognised, and `-alli` → `-al` runs
//!   step 2 again on the result
//!
//! # Examples
//!
//! ```
//! use emotion_classifier::analysis::token_filter::stem::Stemmer;
//! use emotion_classifier::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("happy"), "happi");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
    ("lessli", "less"),
    ("logi", "log"),
];

/// Words stemmed by lookup instead of by rule.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("skies", "sky"),
    ("sky", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Words of two characters or fewer, and words containing non-ASCII
/// characters, are only lowercased.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` is a consonant in the Porter sense.
    fn is_consonant(&self, word: &str, pos: usize) -> bool {
        match word.as_bytes()[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !self.is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a stem (number of VC sequences).
    fn measure(&self, stem: &str) -> usize {
        let n = stem.len();
        let mut i = 0;
        let mut m = 0;

        while i < n && self.is_consonant(stem, i) {
            i += 1;
        }

        while i < n {
            while i < n && !self.is_consonant(stem, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            while i < n && self.is_consonant(stem, i) {
                i += 1;
            }
            m += 1;
        }

        m
    }

    /// Check if the stem contains a vowel.
    fn contains_vowel(&self, stem: &str) -> bool {
        (0..stem.len()).any(|i| !self.is_consonant(stem, i))
    }

    /// Check if the word ends with a double consonant.
    fn ends_double_consonant(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let n = bytes.len();
        n >= 2 && bytes[n - 1] == bytes[n - 2] && self.is_consonant(word, n - 1)
    }

    /// Check if the word ends consonant-vowel-consonant, the last not w, x or y.
    fn ends_cvc(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let n = bytes.len();
        if n >= 3 {
            self.is_consonant(word, n - 3)
                && !self.is_consonant(word, n - 2)
                && self.is_consonant(word, n - 1)
                && !matches!(bytes[n - 1], b'w' | b'x' | b'y')
        } else {
            n == 2 && !self.is_consonant(word, 0) && self.is_consonant(word, 1)
        }
    }

    /// Apply the first matching rule if its stem has at least `min_measure`.
    fn apply_rules(&self, word: String, rules: &[(&str, &str)], min_measure: usize) -> String {
        for (suffix, replacement) in rules {
            if let Some(stem) = word.strip_suffix(suffix) {
                if self.measure(stem) >= min_measure {
                    return format!("{stem}{replacement}");
                }
                return word;
            }
        }
        word
    }

    /// Step 1a: plurals.
    fn step1a(&self, word: String) -> String {
        if let Some(stem) = word.strip_suffix("sses") {
            format!("{stem}ss")
        } else if word.len() == 4 && word.ends_with("ies") {
            word[..3].to_string()
        } else if let Some(stem) = word.strip_suffix("ies") {
            format!("{stem}i")
        } else if word.ends_with("ss") {
            word
        } else if let Some(stem) = word.strip_suffix('s') {
            stem.to_string()
        } else {
            word
        }
    }

    /// Step 1b: -eed, -ed, -ing.
    fn step1b(&self, word: String) -> String {
        if word.ends_with("ied") {
            return if word.len() == 4 {
                word[..3].to_string()
            } else {
                format!("{}i", &word[..word.len() - 3])
            };
        }

        if let Some(stem) = word.strip_suffix("eed") {
            if self.measure(stem) > 0 {
                return format!("{stem}ee");
            }
            return word;
        }

        for suffix in ["ed", "ing"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if self.contains_vowel(stem) {
                    return self.step1b_cleanup(stem.to_string());
                }
                return word;
            }
        }

        word
    }

    /// Restore or trim the stem left behind by removing -ed or -ing.
    fn step1b_cleanup(&self, mut word: String) -> String {
        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            word.push('e');
        } else if self.ends_double_consonant(&word)
            && !(word.ends_with('l') || word.ends_with('s') || word.ends_with('z'))
        {
            word.pop();
        } else if self.measure(&word) == 1 && self.ends_cvc(&word) {
            word.push('e');
        }
        word
    }

    /// Step 1c: terminal y after a consonant becomes i.
    fn step1c(&self, word: String) -> String {
        if let Some(stem) = word.strip_suffix('y')
            && stem.len() > 1
            && self.is_consonant(stem, stem.len() - 1)
        {
            return format!("{stem}i");
        }
        word
    }

    /// Step 2: map double suffixes to single ones.
    fn step2(&self, word: String) -> String {
        if let Some(stem) = word.strip_suffix("alli")
            && self.measure(stem) > 0
        {
            return self.step2(format!("{stem}al"));
        }
        self.apply_rules(word, STEP2_RULES, 1)
    }

    /// Step 4: remove suffixes from stems with measure above one.
    fn step4(&self, word: String) -> String {
        for suffix in STEP4_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let applies = self.measure(stem) > 1
                    && (*suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'));
                if applies {
                    return stem.to_string();
                }
                return word;
            }
        }
        word
    }

    /// Step 5: remove a final -e and reduce -ll.
    fn step5(&self, word: String) -> String {
        let mut word = match word.strip_suffix('e') {
            Some(stem) => {
                let m = self.measure(stem);
                if m > 1 || (m == 1 && !self.ends_cvc(stem)) {
                    stem.to_string()
                } else {
                    word
                }
            }
            None => word,
        };

        if word.ends_with("ll") && self.measure(&word[..word.len() - 1]) > 1 {
            word.pop();
        }

        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if let Some((_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return stem.to_string();
        }
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let word = self.step1a(word);
        let word = self.step1b(word);
        let word = self.step1c(word);
        let word = self.step2(word);
        let word = self.apply_rules(word, STEP3_RULES, 1);
        let word = self.step4(word);
        self.step5(word)
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
