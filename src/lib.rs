//! # Psywell - Mental Wellness Detector
//!
//! Heuristic emotion detection for short free-text messages, in pure Rust.
//! Each message is labelled `depression`, `stress`, `positive` or `neutral`
//! with a severity tier, and paired with canned recommendations (music,
//! quotes, activities) and crisis-line information for severe cases.
//!
//! The labels are heuristics meant to route support content. They are not a
//! diagnosis.
//!
//! ## Features
//!
//! - **Rule Cascade**: Keyword hits override a general-purpose sentiment score
//! - **Lexicon Sentiment**: Polarity/subjectivity with intensifiers and negation
//! - **Batch Processing**: CSV, Excel or plain-text files, up to 50 messages
//! - **Recommendations**: Per-emotion tables with a seedable quote picker
//!
//! ## Quick Start
//!
//! ```
//! use psywell::api::Detector;
//!
//! let detector = Detector::new();
//! let analysis = detector.analyze("I feel worthless and hopeless");
//!
//! println!("Emotion: {}", analysis.result.emotion());   // depression
//! println!("Severity: {}", analysis.result.severity()); // critical
//! for line in &analysis.advice.crisis {
//!     println!("{}: {}", line.name, line.contact);
//! }
//! ```
//!
//! ### Batch Analysis
//!
//! ```no_run
//! use psywell::load_messages;
//! use psywell::api::Detector;
//!
//! let messages = load_messages("data/messages.csv")?;
//! let batch = Detector::new().analyze_batch(&messages);
//!
//! println!("Depression: {}", batch.counts.depression);
//! println!("Stress: {}", batch.counts.stress);
//! # Ok::<(), psywell::error::WellnessError>(())
//! ```
//!
//! ## Decision Rules
//!
//! | Condition (first match wins) | Label |
//! |------------------------------|-------|
//! | ≥2 depression keywords, or ≥1 and polarity < -0.3 | depression / critical |
//! | ≥1 depression keyword, or ≥2 stress keywords and polarity < -0.1 | depression / high |
//! | ≥2 stress keywords, or polarity < -0.2 and subjectivity > 0.5 | stress / moderate |
//! | ≥1 stress keyword, or -0.3 < polarity < 0 | stress / low |
//! | ≥2 positive keywords, or polarity > 0.3 | positive / good |
//! | polarity ≥ 0 | neutral / normal |
//! | otherwise | stress / low |
//!
//! ## Available Cargo Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `cli` | Include CLI binary | ✓ |
//!
//! ## Configuration
//!
//! See [`config`] for the `psywell.toml` format.
//!
//! ## License
//!
//! GNU General Public License v3.0 (GPLv3)

// Public API modules
pub mod api;
pub mod config;
pub mod error;

// Core modules
pub mod batch;
pub mod emotion;
pub mod recommend;
pub mod sentiment;

pub mod samples;

#[cfg(feature = "cli")]
pub mod cli;

pub use api::{Analysis, Detector};
pub use batch::{BatchResult, Message, TextSource};
pub use emotion::{ClassificationResult, Emotion, EmotionClassifier, Severity};
pub use error::{Result, WellnessError};
pub use sentiment::{LexiconScorer, SentimentScore, SentimentScorer};

use std::path::Path;

/// Load messages from a CSV, Excel or TXT file.
///
/// # Example
/// ```no_run
/// use psywell::load_messages;
///
/// let messages = load_messages("data/messages.csv")?;
/// println!("Loaded {} messages", messages.len());
/// # Ok::<(), psywell::error::WellnessError>(())
/// ```
pub fn load_messages<P: AsRef<Path>>(path: P) -> Result<Vec<Message>> {
    TextSource::from_path(path)?.messages()
}
