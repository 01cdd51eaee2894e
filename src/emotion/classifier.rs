//! The emotion decision cascade.
//!
//! Keyword counts act as an explainable override on top of a noisy
//! general-purpose sentiment score. Branches are evaluated top to bottom and
//! the first match wins:
//!
//! | # | Condition | Label |
//! |---|-----------|-------|
//! | 1 | `depression ≥ 2` or (`depression ≥ 1` and `polarity < -0.3`) | depression / critical |
//! | 2 | `depression ≥ 1` or (`stress ≥ 2` and `polarity < -0.1`) | depression / high |
//! | 3 | `stress ≥ 2` or (`polarity < -0.2` and `subjectivity > 0.5`) | stress / moderate |
//! | 4 | `stress ≥ 1` or `-0.3 < polarity < 0` | stress / low |
//! | 5 | `positive ≥ 2` or `polarity > 0.3` | positive / good |
//! | 6 | `polarity ≥ 0` | neutral / normal |
//! | 7 | otherwise | stress / low |
//!
//! Crisis language is favoured for recall: a single depression keyword is
//! enough to land in the depression tiers whatever the polarity.
//!
//! Branch 7 is only reachable with no stress or depression keywords,
//! `polarity ≤ -0.3` and `subjectivity ≤ 0.5`.

use log::{debug, warn};

use super::keywords::{KeywordCounts, KeywordSets};
use super::{ClassificationResult, Emotion, Severity};
use crate::sentiment::{LexiconScorer, SentimentScore, SentimentScorer};

/// Rule-based classifier, generic over the sentiment backend.
///
/// # Example
///
/// ```
/// use psywell::emotion::{Emotion, EmotionClassifier, Severity};
///
/// let classifier = EmotionClassifier::default();
/// let result = classifier.classify("I feel worthless and hopeless");
/// assert_eq!(result.emotion(), Emotion::Depression);
/// assert_eq!(result.severity(), Severity::Critical);
/// ```
pub struct EmotionClassifier<S = LexiconScorer> {
    keywords: KeywordSets,
    scorer: S,
}

impl EmotionClassifier<LexiconScorer> {
    /// Classifier with the built-in keyword lists and lexicon scorer.
    pub fn new() -> Self {
        Self::with_parts(KeywordSets::default(), LexiconScorer::new())
    }
}

impl Default for EmotionClassifier<LexiconScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentScorer> EmotionClassifier<S> {
    pub fn with_parts(keywords: KeywordSets, scorer: S) -> Self {
        EmotionClassifier { keywords, scorer }
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Classify a message. Never fails: if the scorer errors, the neutral
    /// score `(0.0, 0.0)` is used instead.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let counts = self.keywords.count(text);
        let score = match self.scorer.score(text) {
            Ok(score) => score,
            Err(e) => {
                warn!("sentiment scoring failed, using neutral score: {}", e);
                SentimentScore::NEUTRAL
            }
        };

        let (emotion, severity) = decide(counts, score);
        debug!(
            "classified as {}/{} (keywords {:?}, polarity {:.3}, subjectivity {:.3})",
            emotion, severity, counts, score.polarity, score.subjectivity
        );

        ClassificationResult::new(emotion, severity, score)
    }
}

/// The cascade itself, kept free of I/O so each branch can be tested directly.
pub fn decide(counts: KeywordCounts, score: SentimentScore) -> (Emotion, Severity) {
    let KeywordCounts {
        stress,
        depression,
        positive,
    } = counts;
    let polarity = score.polarity;
    let subjectivity = score.subjectivity;

    if depression >= 2 || (depression >= 1 && polarity < -0.3) {
        (Emotion::Depression, Severity::Critical)
    } else if depression >= 1 || (stress >= 2 && polarity < -0.1) {
        (Emotion::Depression, Severity::High)
    } else if stress >= 2 || (polarity < -0.2 && subjectivity > 0.5) {
        (Emotion::Stress, Severity::Moderate)
    } else if stress >= 1 || (polarity < 0.0 && polarity > -0.3) {
        (Emotion::Stress, Severity::Low)
    } else if positive >= 2 || polarity > 0.3 {
        (Emotion::Positive, Severity::Good)
    } else if polarity >= 0.0 {
        (Emotion::Neutral, Severity::Normal)
    } else {
        (Emotion::Stress, Severity::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, WellnessError};
    use crate::samples::TEXT_SAMPLES;

    struct FixedScorer(SentimentScore);

    impl SentimentScorer for FixedScorer {
        fn score(&self, _text: &str) -> Result<SentimentScore> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn score(&self, _text: &str) -> Result<SentimentScore> {
            Err(WellnessError::Scoring("malformed input".to_string()))
        }
    }

    fn fixed(polarity: f64, subjectivity: f64) -> EmotionClassifier<FixedScorer> {
        EmotionClassifier::with_parts(
            KeywordSets::default(),
            FixedScorer(SentimentScore::new(polarity, subjectivity)),
        )
    }

    fn label(result: ClassificationResult) -> (Emotion, Severity) {
        (result.emotion(), result.severity())
    }

    #[test]
    fn test_empty_string_is_neutral() {
        let result = EmotionClassifier::new().classify("");
        assert_eq!(label(result), (Emotion::Neutral, Severity::Normal));
        assert_eq!(result.polarity(), 0.0);
        assert_eq!(result.subjectivity(), 0.0);
    }

    #[test]
    fn test_two_depression_keywords_are_critical_regardless_of_polarity() {
        let text = "I feel worthless and hopeless";
        assert_eq!(
            label(EmotionClassifier::new().classify(text)),
            (Emotion::Depression, Severity::Critical)
        );
        assert_eq!(
            label(fixed(0.9, 0.1).classify(text)),
            (Emotion::Depression, Severity::Critical)
        );
    }

    #[test]
    fn test_one_depression_keyword_with_strong_negative_polarity_is_critical() {
        let result = EmotionClassifier::new().classify("I am so sad right now");
        assert_eq!(label(result), (Emotion::Depression, Severity::Critical));
        assert!(result.polarity() < -0.3);
    }

    #[test]
    fn test_one_depression_keyword_with_mild_polarity_is_high() {
        let result = EmotionClassifier::new().classify("Feeling a bit lonely tonight");
        assert_eq!(label(result), (Emotion::Depression, Severity::High));
    }

    #[test]
    fn test_stress_keywords_with_negative_polarity_escalate_to_depression() {
        let result =
            EmotionClassifier::new().classify("I'm stressed and overwhelmed by all this pressure");
        assert_eq!(label(result), (Emotion::Depression, Severity::High));
    }

    #[test]
    fn test_two_stress_keywords_without_negative_polarity_are_moderate() {
        let result = EmotionClassifier::new().classify("The pressure and stress at work");
        assert_eq!(label(result), (Emotion::Stress, Severity::Moderate));
    }

    #[test]
    fn test_negative_subjective_text_is_moderate_stress() {
        assert_eq!(
            label(fixed(-0.25, 0.8).classify("the meeting ran long")),
            (Emotion::Stress, Severity::Moderate)
        );
    }

    #[test]
    fn test_single_stress_keyword_with_mild_negativity_is_low() {
        let result = EmotionClassifier::new().classify("Worried about the meeting tomorrow");
        assert_eq!(label(result), (Emotion::Stress, Severity::Low));
        assert!(result.polarity() < 0.0 && result.polarity() > -0.3);
    }

    #[test]
    fn test_mild_negativity_without_keywords_is_low_stress() {
        assert_eq!(
            label(fixed(-0.1, 0.9).classify("the meeting ran long")),
            (Emotion::Stress, Severity::Low)
        );
    }

    #[test]
    fn test_positive_keywords() {
        let result =
            EmotionClassifier::new().classify("I'm so happy and grateful, what a wonderful amazing day");
        assert_eq!(label(result), (Emotion::Positive, Severity::Good));
        // Keywords alone are enough even with a flat score
        assert_eq!(
            label(fixed(0.0, 0.0).classify("happy and grateful")),
            (Emotion::Positive, Severity::Good)
        );
    }

    #[test]
    fn test_neutral_text() {
        let result = EmotionClassifier::new().classify("Just a normal day at the office");
        assert_eq!(label(result), (Emotion::Neutral, Severity::Normal));
    }

    #[test]
    fn test_fallback_branch() {
        // Strongly negative, objective, no keywords: only the last branch matches
        assert_eq!(
            label(fixed(-0.5, 0.2).classify("the meeting ran long")),
            (Emotion::Stress, Severity::Low)
        );
    }

    #[test]
    fn test_boundaries_are_strict() {
        // polarity exactly -0.3 is outside (-0.3, 0) and fails the subjectivity test
        assert_eq!(
            label(fixed(-0.3, 0.5).classify("the meeting ran long")),
            (Emotion::Stress, Severity::Low)
        );
        // polarity exactly 0.3 is not > 0.3
        assert_eq!(
            label(fixed(0.3, 0.5).classify("the meeting ran long")),
            (Emotion::Neutral, Severity::Normal)
        );
    }

    #[test]
    fn test_scorer_failure_falls_back_to_neutral() {
        let classifier = EmotionClassifier::with_parts(KeywordSets::default(), FailingScorer);
        let result = classifier.classify("Just another day");
        assert_eq!(label(result), (Emotion::Neutral, Severity::Normal));
        assert_eq!(result.polarity(), 0.0);
    }

    #[test]
    fn test_labels_always_respect_severity_table() {
        let classifier = EmotionClassifier::new();
        let extra = [
            "",
            "ok",
            "!!!",
            "not bad at all",
            "extremely terrible horrible day",
            "I hate myself and want to give up",
            "Work is tense but fine",
        ];
        for text in TEXT_SAMPLES.iter().copied().chain(extra) {
            let result = classifier.classify(text);
            assert!(
                result.emotion().severities().contains(&result.severity()),
                "invalid label for {:?}: {:?}",
                text,
                result
            );
        }

        for polarity in [-1.0, -0.5, -0.3, -0.2, -0.1, 0.0, 0.1, 0.3, 0.5, 1.0] {
            for subjectivity in [0.0, 0.5, 0.51, 1.0] {
                let result = fixed(polarity, subjectivity).classify("the meeting ran long");
                assert!(result.emotion().severities().contains(&result.severity()));
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = EmotionClassifier::new();
        for text in TEXT_SAMPLES {
            assert_eq!(classifier.classify(text), classifier.classify(text));
        }
    }
}
