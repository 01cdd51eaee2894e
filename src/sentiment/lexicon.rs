//! Sentiment lexicon: per-word polarity and subjectivity, plus the modifier
//! words that scale or flip the word that follows them.
//!
//! Values follow the conventions of general-purpose subjectivity lexicons:
//! polarity in [-1, 1], subjectivity in [0, 1].

/// (word, polarity, subjectivity)
pub const SENTIMENT_WORDS: &[(&str, f64, f64)] = &[
    // Positive affect
    ("happy", 0.8, 1.0),
    ("happiness", 0.7, 0.9),
    ("joy", 0.8, 0.9),
    ("joyful", 0.8, 0.9),
    ("glad", 0.5, 1.0),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("grateful", 0.6, 0.8),
    ("thankful", 0.6, 0.8),
    ("blessed", 0.5, 0.8),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("great", 0.8, 0.75),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("fantastic", 0.4, 0.9),
    ("awesome", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("perfect", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("good", 0.7, 0.6),
    ("better", 0.5, 0.5),
    ("best", 1.0, 0.3),
    ("nice", 0.6, 1.0),
    ("pleasant", 0.73, 1.0),
    ("fun", 0.3, 0.2),
    ("proud", 0.8, 1.0),
    ("hopeful", 0.4, 0.7),
    ("lucky", 0.33, 1.0),
    ("energized", 0.4, 0.6),
    ("calm", 0.3, 0.75),
    ("relaxed", 0.3, 0.6),
    ("peaceful", 0.5, 0.8),
    ("okay", 0.5, 0.5),
    ("fine", 0.4, 0.5),
    ("positive", 0.23, 0.55),
    ("special", 0.36, 0.57),
    ("normal", 0.15, 0.65),
    ("new", 0.14, 0.45),
    // Negative affect
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("depressed", -0.6, 0.9),
    ("lonely", -0.25, 0.75),
    ("alone", -0.2, 0.6),
    ("hopeless", -0.7, 0.9),
    ("worthless", -0.8, 0.9),
    ("empty", -0.1, 0.5),
    ("meaningless", -0.5, 0.7),
    ("tired", -0.4, 0.7),
    ("exhausted", -0.4, 0.75),
    ("miserable", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("stressed", -0.4, 0.7),
    ("stressful", -0.5, 0.8),
    ("overwhelming", -0.3, 0.7),
    ("overwhelmed", -0.4, 0.75),
    ("anxious", -0.25, 0.75),
    ("worried", -0.15, 0.4),
    ("nervous", -0.3, 0.8),
    ("scared", -0.5, 0.8),
    ("afraid", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("upset", -0.5, 0.8),
    ("hate", -0.8, 0.9),
    ("tense", -0.3, 0.6),
    ("difficult", -0.5, 1.0),
    ("hard", -0.3, 0.54),
    ("painful", -0.7, 0.9),
    ("broken", -0.4, 0.6),
    ("desperate", -0.6, 0.9),
    ("useless", -0.5, 0.2),
];

/// Words that scale the next sentiment word: (word, factor).
pub const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("so", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
];

/// Words that flip (and dampen) the polarity of the next sentiment word.
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "cannot", "can't", "don't", "doesn't", "didn't",
    "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't", "couldn't", "shouldn't",
];

/// Polarity multiplier applied under negation.
pub const NEGATION_FACTOR: f64 = -0.5;
