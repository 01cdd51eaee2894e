/// Simple example of using the Psywell library
///
/// Run with:
/// ```
/// cargo run --example simple
/// ```
use psywell::api::Detector;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Psywell Mental Wellness Detector - Simple Example\n");

    let detector = Detector::new();

    // One message per emotion
    let examples = vec![
        "I feel worthless and alone. Nothing seems to matter anymore.",
        "Feeling anxious about the presentation tomorrow. Hope it goes well.",
        "Had an amazing day with friends! Feeling grateful and loved.",
        "Just a normal day at the office.",
    ];

    println!("{}", "=".repeat(70));

    for text in examples {
        let analysis = detector.analyze(text);

        println!("\nText: \"{}\"", text);
        println!(
            "Emotion: {} ({})",
            analysis.result.emotion(),
            analysis.result.severity()
        );
        println!(
            "Polarity: {:.2}, Subjectivity: {:.2}",
            analysis.result.polarity(),
            analysis.result.subjectivity()
        );
        if let Some(quote) = &analysis.advice.quote {
            println!("Quote: \"{}\"", quote);
        }
        for resource in &analysis.advice.crisis {
            println!("  🚨 {}: {}", resource.name, resource.contact);
        }
        println!("{}", "-".repeat(70));
    }

    println!("\n✓ Done!");

    Ok(())
}
