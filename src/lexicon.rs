//! Keyword-based sentiment scoring used by the development stub.
//!
//! Classifies text as POSITIVE, NEGATIVE or NEUTRAL by counting hits against
//! two word lists. Good enough to exercise the app end to end without a model.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "good", "great", "excellent", "amazing", "wonderful", "fantastic", "superb",
        "outstanding", "brilliant", "love", "loved", "loving", "best", "better",
        "positive", "happy", "joy", "joyful", "beautiful", "perfect", "awesome",
        "incredible", "delightful", "pleasant", "satisfying", "satisfied", "nice",
        "recommend", "recommended", "impressive", "exceptional", "helpful", "like",
        "liked", "enjoy", "enjoyed", "thanks", "fun", "fast", "clean", "friendly",
    ]
    .into_iter()
    .collect()
});

static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "bad", "terrible", "awful", "horrible", "poor", "worst", "worse", "hate",
        "hated", "hating", "dislike", "disappointing", "disappointed", "failure",
        "failed", "fail", "negative", "sad", "unhappy", "angry", "annoyed",
        "frustrated", "frustrating", "problem", "problems", "broken", "useless",
        "waste", "scam", "fake", "unreliable", "slow", "difficult", "confusing",
        "expensive", "overpriced", "worthless", "garbage", "rubbish", "boring",
        "rude", "dirty", "ugly",
    ]
    .into_iter()
    .collect()
});

pub const POSITIVE: &str = "POSITIVE";
pub const NEGATIVE: &str = "NEGATIVE";
pub const NEUTRAL: &str = "NEUTRAL";

#[derive(Debug, Clone, PartialEq)]
pub struct LexiconScore {
    pub label: &'static str,
    pub score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
}

pub fn score_text(text: &str) -> LexiconScore {
    let lowercase_text = text.to_lowercase();
    let words = lowercase_text
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty());

    let (mut positive_count, mut negative_count) = (0, 0);
    for word in words {
        if POSITIVE_WORDS.contains(word) {
            positive_count += 1;
        } else if NEGATIVE_WORDS.contains(word) {
            negative_count += 1;
        }
    }

    let total = positive_count + negative_count;
    if total == 0 {
        return LexiconScore {
            label: NEUTRAL,
            score: 0.5,
            positive_count,
            negative_count,
        };
    }

    let positive_ratio = positive_count as f64 / total as f64;
    let (label, score) = if positive_ratio > 0.6 {
        (POSITIVE, positive_ratio)
    } else if positive_ratio < 0.4 {
        (NEGATIVE, 1.0 - positive_ratio)
    } else {
        (NEUTRAL, 0.5 + (positive_ratio - 0.5).abs())
    };

    LexiconScore {
        label,
        score,
        positive_count,
        negative_count,
    }
}
