//! Batch processing: pull messages out of uploaded data and classify them.
//!
//! ```
//! use psywell::batch::{BatchRunner, Table, TextSource};
//! use psywell::emotion::EmotionClassifier;
//!
//! let table = Table::from_csv_str("id,message\n1,I feel so stressed about work\n2,ok\n")?;
//! let messages = TextSource::Table(table).extract()?;
//!
//! let classifier = EmotionClassifier::new();
//! let result = BatchRunner::new(&classifier).run(&messages);
//! assert_eq!(result.len(), 1); // "ok" is too short
//! # Ok::<(), psywell::error::WellnessError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`extractor`] - Text column detection and file loading
//! - [`runner`] - Bounded batch classification and CSV export

pub mod extractor;
pub mod runner;

pub use extractor::{extract, Message, Table, TextSource, TEXT_COLUMN_HINTS};
pub use runner::{preview, BatchRecord, BatchResult, BatchRunner, EmotionCounts};
