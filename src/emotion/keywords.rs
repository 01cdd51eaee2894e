//! Keyword categories used to override the sentiment score.
//!
//! Matching is plain substring containment on lower-cased text, so
//! "overwhelm" also matches "overwhelmed" and "overwhelming". Each keyword
//! counts at most once per message.

use serde::Serialize;

/// Stress vocabulary.
pub const STRESS_KEYWORDS: &[&str] = &[
    "stress", "pressure", "overwhelm", "anxious", "anxiety", "worried", "tense", "panic",
    "burden", "exhausted",
];

/// Depression / crisis vocabulary, including multi-word phrases.
pub const DEPRESSION_KEYWORDS: &[&str] = &[
    "depressed", "sad", "lonely", "hopeless", "worthless", "empty", "tired", "suicide", "die",
    "harm", "hate myself", "give up", "no point",
];

/// Positive vocabulary.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy", "joy", "excited", "grateful", "blessed", "love", "great", "wonderful", "amazing",
    "fantastic", "good",
];

/// An ordered, de-duplicated list of lower-case keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set, lower-casing entries and dropping blanks and duplicates
    /// while keeping first-seen order.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !unique.contains(&keyword) {
                unique.push(keyword);
            }
        }
        KeywordSet { keywords: unique }
    }

    /// Number of distinct keywords contained in `lowered`.
    ///
    /// `lowered` must already be lower-case.
    pub fn count_matches(&self, lowered: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| lowered.contains(keyword.as_str()))
            .count()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Per-category keyword hits for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeywordCounts {
    pub stress: usize,
    pub depression: usize,
    pub positive: usize,
}

/// The three keyword categories the classifier consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSets {
    pub stress: KeywordSet,
    pub depression: KeywordSet,
    pub positive: KeywordSet,
}

impl KeywordSets {
    pub fn new(stress: KeywordSet, depression: KeywordSet, positive: KeywordSet) -> Self {
        KeywordSets {
            stress,
            depression,
            positive,
        }
    }

    /// Count hits in every category. `text` may be in any case.
    pub fn count(&self, text: &str) -> KeywordCounts {
        let lowered = text.to_lowercase();
        KeywordCounts {
            stress: self.stress.count_matches(&lowered),
            depression: self.depression.count_matches(&lowered),
            positive: self.positive.count_matches(&lowered),
        }
    }
}

impl Default for KeywordSets {
    fn default() -> Self {
        KeywordSets {
            stress: KeywordSet::new(STRESS_KEYWORDS),
            depression: KeywordSet::new(DEPRESSION_KEYWORDS),
            positive: KeywordSet::new(POSITIVE_KEYWORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_counts_once() {
        let set = KeywordSet::new(["sad"]);
        assert_eq!(set.count_matches("sad sad sad"), 1);
    }

    #[test]
    fn test_substring_matching() {
        let sets = KeywordSets::default();
        // "overwhelm" inside "Overwhelmed", "stress" inside "stressed"
        let counts = sets.count("Stressed and Overwhelmed");
        assert_eq!(counts.stress, 2);
        // Substring matching is deliberately naive: "die" hits inside "studied"
        assert_eq!(sets.count("I studied all night").depression, 1);
    }

    #[test]
    fn test_multi_word_phrases() {
        let sets = KeywordSets::default();
        let counts = sets.count("I want to give up, there is no point");
        assert_eq!(counts.depression, 2);
    }

    #[test]
    fn test_new_normalizes_entries() {
        let set = KeywordSet::new(["  Calm ", "calm", "", "PEACE"]);
        assert_eq!(set.keywords(), &["calm".to_string(), "peace".to_string()]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_text_has_no_hits() {
        let counts = KeywordSets::default().count("");
        assert_eq!(counts, KeywordCounts::default());
    }
}
