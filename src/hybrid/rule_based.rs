//! 어휘 기반 규칙 채점기
//!
//! 정규화된 텍스트의 감성 어휘 가중치를 더하고, 직전 부정어와 강조어,
//! 이모지 감성, 멘션 문맥을 반영합니다. 학습이 필요 없으므로 분류기가
//! 없을 때도 항상 의견을 냅니다.

use crate::core::{Prediction, Sentiment, SentimentScores};
use crate::lexicon::words::{is_negation, INTENSIFIERS, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::normalize::{words, FeatureBundle, MentionContext};

/// 감성어 앞에서 부정어를 찾는 토큰 수
pub const NEGATION_WINDOW: usize = 2;
/// 부정된 감성어의 반전 후 가중치 배율
pub const NEGATION_DAMPING: f64 = 0.8;
/// 직전 강조어 배율
pub const INTENSIFIER_MULTIPLIER: f64 = 1.5;
pub const EMOJI_BONUS: f64 = 1.0;
pub const MENTION_BONUS: f64 = 0.5;

/// 양 극성에 더하는 기본값 (0 점수 방지)
const POLARITY_PRIOR: f64 = 0.1;
/// 중립 기준 점수
const NEUTRAL_BASELINE: f64 = 0.5;

/// 규칙 기반 감성 판정
pub fn score(normalized_text: &str, features: &FeatureBundle) -> Prediction {
    let tokens: Vec<&str> = words(normalized_text).collect();
    let mut positive = 0.0;
    let mut negative = 0.0;

    for (i, token) in tokens.iter().enumerate() {
        let (polarity, weight) = if let Some(w) = POSITIVE_WORDS.get(token) {
            (Sentiment::Positive, *w)
        } else if let Some(w) = NEGATIVE_WORDS.get(token) {
            (Sentiment::Negative, *w)
        } else {
            continue;
        };

        let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
        let negated = window.iter().any(|t| is_negation(t));
        let intensified = i > 0 && INTENSIFIERS.contains(tokens[i - 1]);

        let mut weight = weight;
        if intensified {
            weight *= INTENSIFIER_MULTIPLIER;
        }
        let polarity = if negated {
            weight *= NEGATION_DAMPING;
            polarity.inverted()
        } else {
            polarity
        };

        match polarity {
            Sentiment::Positive => positive += weight,
            _ => negative += weight,
        }
    }

    match features.emoji_sentiment {
        Some(Sentiment::Positive) => positive += EMOJI_BONUS,
        Some(Sentiment::Negative) => negative += EMOJI_BONUS,
        _ => {}
    }

    match features.mention_context {
        Some(MentionContext::Complaint) => negative += MENTION_BONUS,
        Some(MentionContext::Praise) => positive += MENTION_BONUS,
        _ => {}
    }

    Prediction::from_scores(SentimentScores::new(
        positive + POLARITY_PRIOR,
        negative + POLARITY_PRIOR,
        NEUTRAL_BASELINE,
    ))
}
