//! High-level API for emotion detection
//!
//! This module bundles the classifier, batch limits and recommendation
//! tables behind one [`Detector`].
//!
//! # Quick Start
//!
//! ```
//! use psywell::api::Detector;
//!
//! let detector = Detector::new();
//! let analysis = detector.analyze("I feel stressed about my exams");
//! println!("{}", analysis);
//! ```
//!
//! # Examples
//!
//! ## Batch Analysis
//!
//! ```
//! # use psywell::api::Detector;
//! let detector = Detector::new();
//! let texts = vec!["I'm having a great day!", "Everything is overwhelming me"];
//! let batch = detector.analyze_batch(&texts);
//!
//! for record in &batch.records {
//!     println!("{}: {} / {}", record.preview, record.emotion, record.severity);
//! }
//! ```
//!
//! ## Files
//!
//! ```no_run
//! # use psywell::api::Detector;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = Detector::new();
//! let batch = detector.analyze_file("messages.csv")?;
//! batch.write_csv(std::fs::File::create("results.csv")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Configuration
//!
//! ```no_run
//! use psywell::api::Detector;
//! use psywell::config::Config;
//!
//! let config = Config::load("psywell.toml")?;
//! let detector = Detector::with_config(config);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::path::Path;

use crate::batch::{BatchResult, BatchRunner, TextSource};
use crate::config::Config;
use crate::emotion::{ClassificationResult, EmotionClassifier};
use crate::error::Result;
use crate::recommend::{Advice, Recommendations};
use crate::sentiment::{LexiconScorer, SentimentScorer};

/// Main interface: classification plus recommendations.
pub struct Detector<S = LexiconScorer> {
    classifier: EmotionClassifier<S>,
    recommendations: Recommendations,
    config: Config,
    rng: RefCell<StdRng>,
}

/// A single-message result with the advice to show alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub text: String,
    pub result: ClassificationResult,
    pub advice: Advice,
}

impl Detector<LexiconScorer> {
    /// Detector with built-in keywords, lexicon scorer and default limits.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Detector using keyword lists, limits and quote seed from `config`.
    pub fn with_config(config: Config) -> Self {
        Self::with_scorer(config, LexiconScorer::new())
    }
}

impl Default for Detector<LexiconScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentScorer> Detector<S> {
    /// Detector with a custom sentiment backend.
    pub fn with_scorer(config: Config, scorer: S) -> Self {
        let classifier = EmotionClassifier::with_parts(config.keywords.to_keyword_sets(), scorer);
        let rng = match config.recommendations.quote_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Detector {
            classifier,
            recommendations: Recommendations::default(),
            config,
            rng: RefCell::new(rng),
        }
    }

    pub fn classifier(&self) -> &EmotionClassifier<S> {
        &self.classifier
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify one message without recommendations.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    /// Classify one message and resolve its recommendations.
    pub fn analyze(&self, text: &str) -> Analysis {
        let result = self.classifier.classify(text);
        let advice = self
            .recommendations
            .advice_for(&result, &mut *self.rng.borrow_mut());
        Analysis {
            text: text.to_string(),
            result,
            advice,
        }
    }

    /// Classify a batch using the configured limits.
    pub fn analyze_batch<M: AsRef<str>>(&self, messages: &[M]) -> BatchResult {
        BatchRunner::with_config(&self.classifier, self.config.batch.clone()).run(messages)
    }

    /// Load a CSV, Excel or TXT file and classify its messages.
    ///
    /// # Errors
    ///
    /// Returns [`WellnessError::UnsupportedFormat`](crate::error::WellnessError::UnsupportedFormat)
    /// for other file types, and I/O or CSV errors for unreadable files.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<BatchResult> {
        let source = TextSource::from_path(path)?;
        self.analyze_source(&source)
    }

    pub fn analyze_source(&self, source: &TextSource) -> Result<BatchResult> {
        let messages = source.extract()?;
        Ok(self.analyze_batch(&messages))
    }
}

impl Analysis {
    /// Pretty-printed JSON of the analysis.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.result)?;
        writeln!(f, "{}", self.advice.headline)?;

        if !self.advice.crisis.is_empty() {
            writeln!(f, "\n🚨 Emergency Contacts:")?;
            for resource in &self.advice.crisis {
                writeln!(f, "  - {}: {}", resource.name, resource.contact)?;
            }
        }

        writeln!(f, "\nMusic:")?;
        for song in &self.advice.music {
            writeln!(f, "  - {}", song)?;
        }
        if let Some(quote) = &self.advice.quote {
            writeln!(f, "\nQuote:\n  \"{}\"", quote)?;
        }
        writeln!(f, "\nActivities:")?;
        for activity in &self.advice.activities {
            writeln!(f, "  - {}", activity)?;
        }
        Ok(())
    }
}
