//! Emotion labels and the rule-based classifier.
//!
//! A message is labelled with one of four coarse [`Emotion`]s and a
//! [`Severity`] tier nested under it. Only these combinations exist:
//!
//! | Emotion | Severities |
//! |---------|------------|
//! | depression | critical, high |
//! | stress | moderate, low |
//! | positive | good |
//! | neutral | normal |
//!
//! The labels are heuristics for routing recommendations, not a diagnosis.
//!
//! ## Module Structure
//!
//! - [`keywords`] - Keyword categories and substring counting
//! - [`classifier`] - The decision cascade

pub mod classifier;
pub mod keywords;

pub use classifier::EmotionClassifier;
pub use keywords::{KeywordCounts, KeywordSet, KeywordSets};

use serde::Serialize;
use std::fmt;

use crate::sentiment::SentimentScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Depression,
    Stress,
    Positive,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [
        Emotion::Depression,
        Emotion::Stress,
        Emotion::Positive,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Depression => "depression",
            Emotion::Stress => "stress",
            Emotion::Positive => "positive",
            Emotion::Neutral => "neutral",
        }
    }

    /// Severities that may accompany this emotion.
    pub fn severities(&self) -> &'static [Severity] {
        match self {
            Emotion::Depression => &[Severity::Critical, Severity::High],
            Emotion::Stress => &[Severity::Moderate, Severity::Low],
            Emotion::Positive => &[Severity::Good],
            Emotion::Neutral => &[Severity::Normal],
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Emotion::Depression => "😢",
            Emotion::Stress => "😰",
            Emotion::Positive => "😊",
            Emotion::Neutral => "😐",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Moderate,
    Low,
    Good,
    Normal,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::High,
        Severity::Moderate,
        Severity::Low,
        Severity::Good,
        Severity::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Moderate => "moderate",
            Severity::Low => "low",
            Severity::Good => "good",
            Severity::Normal => "normal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one message.
///
/// Fields are private so that only the classifier can pair an emotion with a
/// severity; use the accessors to read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    emotion: Emotion,
    severity: Severity,
    polarity: f64,
    subjectivity: f64,
}

impl ClassificationResult {
    pub(crate) fn new(emotion: Emotion, severity: Severity, score: SentimentScore) -> Self {
        debug_assert!(
            emotion.severities().contains(&severity),
            "{emotion}/{severity} is not a valid label"
        );
        ClassificationResult {
            emotion,
            severity,
            polarity: score.polarity,
            subjectivity: score.subjectivity,
        }
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }

    /// Whether crisis resources should be surfaced alongside this result.
    pub fn needs_crisis_support(&self) -> bool {
        self.emotion == Emotion::Depression
            && matches!(self.severity, Severity::Critical | Severity::High)
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} (polarity {:.2}, subjectivity {:.2})",
            self.emotion.icon(),
            self.emotion.as_str().to_uppercase(),
            self.severity.as_str().to_uppercase(),
            self.polarity,
            self.subjectivity
        )
    }
}
