//! Applying the classifier to many messages at once.

use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::config::BatchConfig;
use crate::emotion::{ClassificationResult, Emotion, EmotionClassifier, Severity};
use crate::error::Result;
use crate::sentiment::SentimentScorer;

/// One classified message in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    /// Position of the message in the batch input.
    #[serde(skip)]
    pub index: usize,
    #[serde(rename = "Message")]
    pub preview: String,
    #[serde(rename = "Emotion")]
    pub emotion: Emotion,
    #[serde(rename = "Severity")]
    pub severity: Severity,
    /// Rounded to two decimals.
    #[serde(rename = "Polarity")]
    pub polarity: f64,
    /// Rounded to two decimals.
    #[serde(rename = "Subjectivity")]
    pub subjectivity: f64,
}

/// Per-emotion totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EmotionCounts {
    pub depression: usize,
    pub stress: usize,
    pub positive: usize,
    pub neutral: usize,
}

impl EmotionCounts {
    pub fn add(&mut self, emotion: Emotion) {
        *self.slot(emotion) += 1;
    }

    pub fn get(&self, emotion: Emotion) -> usize {
        match emotion {
            Emotion::Depression => self.depression,
            Emotion::Stress => self.stress,
            Emotion::Positive => self.positive,
            Emotion::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.depression + self.stress + self.positive + self.neutral
    }

    /// Combine two partial tallies.
    pub fn merge(&mut self, other: &EmotionCounts) {
        self.depression += other.depression;
        self.stress += other.stress;
        self.positive += other.positive;
        self.neutral += other.neutral;
    }

    fn slot(&mut self, emotion: Emotion) -> &mut usize {
        match emotion {
            Emotion::Depression => &mut self.depression,
            Emotion::Stress => &mut self.stress,
            Emotion::Positive => &mut self.positive,
            Emotion::Neutral => &mut self.neutral,
        }
    }
}

/// Output of one batch run.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchResult {
    pub records: Vec<BatchRecord>,
    pub counts: EmotionCounts,
    pub severity_counts: BTreeMap<Severity, usize>,
    /// Messages looked at, after the batch limit was applied.
    pub considered: usize,
    /// Messages skipped as too short.
    pub skipped: usize,
    /// Messages dropped by the batch limit.
    pub truncated: usize,
}

impl BatchResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Pretty-printed JSON of the whole result.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the records as CSV with the header
    /// `Message,Emotion,Severity,Polarity,Subjectivity`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Runs the classifier over a bounded batch of messages.
pub struct BatchRunner<'a, S> {
    classifier: &'a EmotionClassifier<S>,
    config: BatchConfig,
}

impl<'a, S: SentimentScorer> BatchRunner<'a, S> {
    pub fn new(classifier: &'a EmotionClassifier<S>) -> Self {
        Self::with_config(classifier, BatchConfig::default())
    }

    pub fn with_config(classifier: &'a EmotionClassifier<S>, config: BatchConfig) -> Self {
        BatchRunner { classifier, config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Classify up to `max_messages` messages in input order.
    ///
    /// Messages whose trimmed length is `min_message_chars` characters or
    /// fewer are skipped; messages past the limit are ignored.
    pub fn run<M: AsRef<str>>(&self, messages: &[M]) -> BatchResult {
        let limit = self.config.max_messages.min(messages.len());
        let mut result = BatchResult {
            considered: limit,
            truncated: messages.len() - limit,
            ..BatchResult::default()
        };

        for (index, message) in messages[..limit].iter().enumerate() {
            let text = message.as_ref();
            if text.trim().chars().count() <= self.config.min_message_chars {
                warn!("skipping message {}: too short", index);
                result.skipped += 1;
                continue;
            }

            let classification = self.classifier.classify(text);
            result.counts.add(classification.emotion());
            *result
                .severity_counts
                .entry(classification.severity())
                .or_insert(0) += 1;
            result
                .records
                .push(self.record(index, text, &classification));
        }

        info!(
            "batch done: {} classified, {} skipped, {} over limit",
            result.records.len(),
            result.skipped,
            result.truncated
        );
        result
    }

    fn record(&self, index: usize, text: &str, classification: &ClassificationResult) -> BatchRecord {
        BatchRecord {
            index,
            preview: preview(text, self.config.preview_chars),
            emotion: classification.emotion(),
            severity: classification.severity(),
            polarity: round2(classification.polarity()),
            subjectivity: round2(classification.subjectivity()),
        }
    }
}

/// First `max_chars` characters, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
