//! Polarity / subjectivity scoring.
//!
//! The classifier treats sentiment as an opaque function
//! `score(text) -> (polarity, subjectivity)`. [`SentimentScorer`] is that
//! seam; [`LexiconScorer`] is the built-in implementation.
//!
//! ## Lexicon scoring
//!
//! Each token found in the lexicon yields one assessment:
//!
//! - a directly preceding intensifier ("very", "extremely", "slightly", ...)
//!   multiplies both polarity and subjectivity by its factor
//! - a negation before that ("not", "never", "don't", ...) multiplies the
//!   polarity by `-0.5`
//!
//! The final score is the mean over all assessments, clamped to
//! `[-1, 1]` × `[0, 1]`. Text without lexicon hits scores `(0.0, 0.0)`.
//!
//! ```
//! use psywell::sentiment::{LexiconScorer, SentimentScorer};
//!
//! let scorer = LexiconScorer::new();
//! let score = scorer.score("What a wonderful day").unwrap();
//! assert!(score.polarity > 0.0);
//! ```

pub mod lexicon;

use crate::error::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

use lexicon::{INTENSIFIERS, NEGATIONS, NEGATION_FACTOR, SENTIMENT_WORDS};

/// Polarity in `[-1, 1]`, subjectivity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    /// Neutral score used for empty text and as a substitute on scorer failure.
    pub const NEUTRAL: SentimentScore = SentimentScore {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Build a score, clamping both components into range.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        SentimentScore {
            polarity: clamp_or_zero(polarity, -1.0, 1.0),
            subjectivity: clamp_or_zero(subjectivity, 0.0, 1.0),
        }
    }
}

fn clamp_or_zero(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(min, max)
    }
}

/// Anything that can turn text into a [`SentimentScore`].
///
/// Implementations must be deterministic for identical input and must return
/// [`SentimentScore::NEUTRAL`] for empty or whitespace-only text.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentScore>;
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for &S {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        (**self).score(text)
    }
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for Box<S> {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        (**self).score(text)
    }
}

/// Lexicon-based scorer with intensifier and negation handling.
pub struct LexiconScorer {
    word_regex: Regex,
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        LexiconScorer {
            word_regex: Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("token pattern is valid"),
            words: SENTIMENT_WORDS
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn tokenize<'a>(&self, lowered: &'a str) -> Vec<&'a str> {
        self.word_regex
            .find_iter(lowered)
            .map(|m| m.as_str())
            .collect()
    }

    /// Score a single lexicon hit at `idx`, applying the modifiers before it.
    fn assess(&self, tokens: &[&str], idx: usize, polarity: f64, subjectivity: f64) -> (f64, f64) {
        let mut polarity = polarity;
        let mut subjectivity = subjectivity;
        let mut cursor = idx;

        if cursor > 0 {
            if let Some(&factor) = self.intensifiers.get(tokens[cursor - 1]) {
                polarity *= factor;
                subjectivity *= factor;
                cursor -= 1;
            }
        }

        if cursor > 0 && NEGATIONS.iter().any(|n| *n == tokens[cursor - 1]) {
            polarity *= NEGATION_FACTOR;
        }

        (polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        let tokens = self.tokenize(&lowered);

        let assessments: Vec<(f64, f64)> = tokens
            .iter()
            .enumerate()
            .filter_map(|(idx, token)| {
                self.words
                    .get(*token)
                    .map(|&(polarity, subjectivity)| self.assess(&tokens, idx, polarity, subjectivity))
            })
            .collect();

        if assessments.is_empty() {
            return Ok(SentimentScore::NEUTRAL);
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.0).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.1).sum::<f64>() / n;

        Ok(SentimentScore::new(polarity, subjectivity))
    }
}
