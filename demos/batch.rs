/// Batch analysis example
///
/// Run with:
/// ```
/// cargo run --example batch
/// ```
use psywell::api::Detector;
use psywell::batch::{Table, TextSource};
use psywell::samples::SAMPLE_CSV;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Psywell Mental Wellness Detector - Batch Example\n");

    let detector = Detector::new();
    let source = TextSource::Table(Table::from_csv_str(SAMPLE_CSV)?);

    let start = Instant::now();
    let batch = detector.analyze_source(&source)?;
    let elapsed = start.elapsed();

    println!("{}", "=".repeat(90));
    println!("{:<50} | {:^12} | {:^10}", "Text (truncated)", "Emotion", "Severity");
    println!("{}", "=".repeat(90));

    for record in &batch.records {
        println!(
            "{:<50} | {:^12} | {:^10}",
            psywell::batch::preview(&record.preview, 47),
            record.emotion,
            record.severity
        );
    }

    println!("{}", "=".repeat(90));
    println!(
        "\nDepression: {}  Stress: {}  Positive: {}  Neutral: {}",
        batch.counts.depression, batch.counts.stress, batch.counts.positive, batch.counts.neutral
    );
    println!(
        "✓ {} messages in {:.2}ms",
        batch.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
