//! Canned recommendations keyed by emotion.
//!
//! Tables exist for `stress`, `depression` and `positive`. Any emotion without
//! its own entry (currently `neutral`) gets the `stress` lists.
//!
//! Quote selection takes the random source as an argument so callers can seed
//! it:
//!
//! ```
//! use psywell::emotion::Emotion;
//! use psywell::recommend::Recommendations;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let recs = Recommendations::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let quote = recs.pick_quote(Emotion::Positive, &mut rng);
//! assert!(quote.is_some());
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;

use crate::emotion::{ClassificationResult, Emotion};

/// Key used when an emotion has no table of its own.
pub const FALLBACK_EMOTION: Emotion = Emotion::Stress;

const MUSIC: &[(Emotion, &[&str])] = &[
    (
        Emotion::Stress,
        &[
            "🎵 Weightless - Marconi Union",
            "🎵 Piano Concerto No. 23 - Mozart",
            "🎵 Clair de Lune - Debussy",
            "🎵 Ambient Music for Stress Relief",
            "🎵 Nature Sounds - Ocean Waves",
        ],
    ),
    (
        Emotion::Depression,
        &[
            "🎵 Here Comes The Sun - The Beatles",
            "🎵 Three Little Birds - Bob Marley",
            "🎵 Beautiful Day - U2",
            "🎵 Don't Stop Me Now - Queen",
            "🎵 Uplifting Classical Music",
        ],
    ),
    (
        Emotion::Positive,
        &[
            "🎵 Happy - Pharrell Williams",
            "🎵 Good Vibrations - The Beach Boys",
            "🎵 Walking on Sunshine - Katrina",
            "🎵 I Got You (I Feel Good) - James Brown",
            "🎵 Best Day of My Life - American Authors",
        ],
    ),
];

const QUOTES: &[(Emotion, &[&str])] = &[
    (
        Emotion::Stress,
        &[
            "You don't have to control your thoughts. You just have to stop letting them control you.",
            "Take a deep breath. It's just a bad day, not a bad life.",
            "You are braver than you believe, stronger than you seem, and smarter than you think.",
        ],
    ),
    (
        Emotion::Depression,
        &[
            "This too shall pass. You are stronger than you think.",
            "Every day may not be good, but there is something good in every day.",
            "You are not alone. Reach out, someone cares.",
            "The darkest nights produce the brightest stars.",
            "Your life is valuable. You matter.",
        ],
    ),
    (
        Emotion::Positive,
        &[
            "Keep shining! Your positive energy is contagious.",
            "Happiness looks gorgeous on you!",
            "Your positive attitude is your superpower!",
        ],
    ),
];

const ACTIVITIES: &[(Emotion, &[&str])] = &[
    (
        Emotion::Depression,
        &[
            "🚶 Take a 10-minute walk outside",
            "📞 Call a friend or family member",
            "🧘 Practice deep breathing exercises",
            "📝 Write down 3 things you're grateful for",
            "💬 Consider speaking with a mental health professional",
        ],
    ),
    (
        Emotion::Stress,
        &[
            "🧘 Try a 5-minute meditation",
            "🤸 Do some light stretching",
            "🎵 Listen to calming music",
            "☕ Take a short break",
            "💆 Practice progressive muscle relaxation",
        ],
    ),
    (
        Emotion::Positive,
        &[
            "😊 Share your happiness with someone",
            "📔 Journal your feelings",
            "🎨 Do something creative",
            "🤝 Help someone else today",
            "🎉 Celebrate your wins!",
        ],
    ),
];

/// A crisis line or organisation to show with severe results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
}

pub const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "National Suicide Prevention Lifeline",
        contact: "988",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
    },
    CrisisResource {
        name: "SAMHSA Helpline",
        contact: "1-800-662-4357",
    },
    CrisisResource {
        name: "International Association for Suicide Prevention",
        contact: "iasp.info",
    },
];

/// Crisis resources to display for `result`, empty unless it needs them.
pub fn crisis_resources_for(result: &ClassificationResult) -> &'static [CrisisResource] {
    if result.needs_crisis_support() {
        CRISIS_RESOURCES
    } else {
        &[]
    }
}

/// One-line message shown above a result.
pub fn headline(result: &ClassificationResult) -> &'static str {
    match result.emotion() {
        Emotion::Depression => {
            "We detected signs of severe distress. Please reach out to someone right away."
        }
        Emotion::Stress => "We noticed some stress. Take a moment to breathe and relax.",
        Emotion::Positive => "Great! You're feeling positive. Keep up the good vibes!",
        Emotion::Neutral => "Your emotional state seems stable.",
    }
}

type Table = HashMap<Emotion, Vec<String>>;

fn build(rows: &[(Emotion, &[&str])]) -> Table {
    rows.iter()
        .map(|(emotion, items)| (*emotion, items.iter().map(|s| s.to_string()).collect()))
        .collect()
}

/// Music, quote and activity tables with a fallback key.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    music: Table,
    quotes: Table,
    activities: Table,
    fallback: Emotion,
}

impl Default for Recommendations {
    fn default() -> Self {
        Recommendations {
            music: build(MUSIC),
            quotes: build(QUOTES),
            activities: build(ACTIVITIES),
            fallback: FALLBACK_EMOTION,
        }
    }
}

impl Recommendations {
    fn lookup<'a>(&self, table: &'a Table, emotion: Emotion) -> &'a [String] {
        table
            .get(&emotion)
            .or_else(|| table.get(&self.fallback))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn music(&self, emotion: Emotion) -> &[String] {
        self.lookup(&self.music, emotion)
    }

    pub fn quotes(&self, emotion: Emotion) -> &[String] {
        self.lookup(&self.quotes, emotion)
    }

    pub fn activities(&self, emotion: Emotion) -> &[String] {
        self.lookup(&self.activities, emotion)
    }

    /// Pick one quote for `emotion` using the caller's random source.
    pub fn pick_quote<R: Rng + ?Sized>(&self, emotion: Emotion, rng: &mut R) -> Option<&str> {
        self.quotes(emotion).choose(rng).map(String::as_str)
    }

    /// Everything to show for one result.
    pub fn advice_for<R: Rng + ?Sized>(&self, result: &ClassificationResult, rng: &mut R) -> Advice {
        let emotion = result.emotion();
        Advice {
            headline: headline(result).to_string(),
            music: self.music(emotion).to_vec(),
            quote: self.pick_quote(emotion, rng).map(str::to_string),
            activities: self.activities(emotion).to_vec(),
            crisis: crisis_resources_for(result).to_vec(),
        }
    }
}

/// Recommendations resolved for one result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub headline: String,
    pub music: Vec<String>,
    pub quote: Option<String>,
    pub activities: Vec<String>,
    pub crisis: Vec<CrisisResource>,
}
