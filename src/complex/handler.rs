//! 복합 사례 보정
//!
//! 탐지된 특징에 따라 기존 판정(레이블, 신뢰도)을 정해진 우선순위로 고칩니다.
//! 보정 후에도 레이블이 점수 최댓값이고 점수 합이 1이 되도록 분포를 재구성합니다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::{ClassifierError, NaiveBayesClassifier};
use crate::core::{Prediction, Sentiment, SentimentResult};
use crate::normalize::{has_content, preprocess};

use super::features::{detect_features, ComplexFeatures};

/// 강한 풍자 반전 시 기본 신뢰도
pub const STRONG_SARCASM_BASE: f64 = 0.6;
/// 풍자 점수 1점당 추가 신뢰도
pub const STRONG_SARCASM_STEP: f64 = 0.05;
pub const STRONG_SARCASM_CAP: f64 = 0.85;
pub const MILD_SARCASM_PENALTY: f64 = 0.2;
/// 약한 풍자 감점 후 이 값 미만이면 중립
pub const MILD_SARCASM_NEUTRAL_BELOW: f64 = 0.6;
pub const DOUBLE_NEGATION_BOOST: f64 = 0.15;
pub const DOUBLE_NEGATION_CAP: f64 = 0.75;
pub const SLANG_TYPO_PENALTY: f64 = 0.1;
pub const CONTRADICTORY_NEUTRAL_BELOW: f64 = 0.6;
pub const CONTRADICTORY_CONFIDENCE: f64 = 0.5;
pub const CULTURAL_BOOST: f64 = 0.1;
pub const CULTURAL_CAP: f64 = 0.9;

const COMPLEXITY_STRONG_SARCASM: f64 = 0.3;
const COMPLEXITY_MILD_SARCASM: f64 = 0.15;
const COMPLEXITY_DOUBLE_NEGATION: f64 = 0.25;
const COMPLEXITY_PAST_CONTRADICTION: f64 = 0.2;
const COMPLEXITY_SLANG_TYPO: f64 = 0.1;
const COMPLEXITY_CONTRADICTORY: f64 = 0.2;
const COMPLEXITY_CULTURAL: f64 = 0.1;
const COMPLEXITY_MIXED_LANGUAGE: f64 = 0.1;
/// 특징이 하나라도 있으면 적용되는 최소 복잡도
const COMPLEXITY_FLOOR: f64 = 0.1;
/// 대체 경로 결과의 복잡도
const FALLBACK_COMPLEXITY: f64 = 1.0;

/// 복합 사례 처리 내부 오류 (외부로는 대체 결과로 바뀜)
#[derive(Debug, Error)]
pub enum ComplexCaseError {
    #[error("분류기 오류: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("점수가 유한하지 않습니다")]
    NonFiniteScores,
}

/// 복합 사례 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedPrediction {
    #[serde(flatten)]
    pub sentiment: SentimentResult,
    /// 0..=1, 특징이 하나라도 있으면 0.1 이상
    pub complexity_score: f64,
    pub features: ComplexFeatures,
    /// 내부 오류로 원문 분류 결과를 대신 썼는지
    pub fallback_used: bool,
}

/// 특징별 고정 가산치 합 (0..=1로 자름)
pub fn complexity_score(features: &ComplexFeatures) -> f64 {
    let mut score = 0.0;
    if features.strong_sarcasm() {
        score += COMPLEXITY_STRONG_SARCASM;
    } else if features.mild_sarcasm() {
        score += COMPLEXITY_MILD_SARCASM;
    }
    if features.double_negation {
        score += COMPLEXITY_DOUBLE_NEGATION;
    }
    if features.past_contradiction() {
        score += COMPLEXITY_PAST_CONTRADICTION;
    }
    if features.has_slang || features.has_typos {
        score += COMPLEXITY_SLANG_TYPO;
    }
    if features.contradictory_signals {
        score += COMPLEXITY_CONTRADICTORY;
    }
    if features.cultural_context.is_some() {
        score += COMPLEXITY_CULTURAL;
    }
    if features.mixed_language {
        score += COMPLEXITY_MIXED_LANGUAGE;
    }

    let score: f64 = score.clamp(0.0, 1.0);
    if features.any() {
        score.max(COMPLEXITY_FLOOR)
    } else {
        score
    }
}

/// 탐지된 특징으로 판정 보정
///
/// 우선순위: 풍자 → 이중 부정 → 과거 시제 역접 → 슬랭/오타 →
/// 신호 충돌 → 문화권 슬랭. 보정이 없으면 점수 분포를 그대로 둡니다.
pub fn apply_corrections(
    prediction: Prediction,
    features: &ComplexFeatures,
) -> Result<EnhancedPrediction, ComplexCaseError> {
    if !prediction.scores.is_finite() || !prediction.confidence.is_finite() {
        return Err(ComplexCaseError::NonFiniteScores);
    }

    let mut label = prediction.label;
    let mut confidence = prediction.confidence;
    let mut reasoning = Vec::new();

    if features.strong_sarcasm() {
        if label == Sentiment::Positive {
            label = Sentiment::Negative;
            confidence = (STRONG_SARCASM_BASE
                + STRONG_SARCASM_STEP * features.sarcasm_score as f64)
                .min(STRONG_SARCASM_CAP);
            reasoning.push(format!(
                "풍자 감지 (점수 {}): 긍정 → 부정",
                features.sarcasm_score
            ));
        }
    } else if features.mild_sarcasm() {
        confidence -= MILD_SARCASM_PENALTY;
        reasoning.push(format!(
            "약한 풍자 신호 (점수 {}): 신뢰도 감소",
            features.sarcasm_score
        ));
        if confidence < MILD_SARCASM_NEUTRAL_BELOW && label != Sentiment::Neutral {
            label = Sentiment::Neutral;
            reasoning.push("약한 풍자로 신뢰도가 낮아 중립 처리".into());
        }
    }

    if features.double_negation && label == Sentiment::Negative {
        label = Sentiment::Positive;
        confidence = (confidence + DOUBLE_NEGATION_BOOST).min(DOUBLE_NEGATION_CAP);
        reasoning.push("이중 부정: 부정 → 긍정".into());
    }

    if features.past_contradiction() && label == Sentiment::Positive {
        label = Sentiment::Negative;
        reasoning.push("과거 시제 뒤 역접: 긍정 → 부정".into());
    }

    if features.has_slang || features.has_typos {
        confidence -= SLANG_TYPO_PENALTY;
        reasoning.push("슬랭/오타로 신뢰도 감소".into());
    }

    if features.contradictory_signals && confidence < CONTRADICTORY_NEUTRAL_BELOW {
        label = Sentiment::Neutral;
        confidence = CONTRADICTORY_CONFIDENCE;
        reasoning.push("이모지와 어휘 극성 충돌: 중립 처리".into());
    }

    if features.cultural_context.is_some() && !features.has_typos && confidence < CULTURAL_CAP {
        confidence = (confidence + CULTURAL_BOOST).min(CULTURAL_CAP);
        reasoning.push("문화권 슬랭 인식: 신뢰도 증가".into());
    }

    let confidence = confidence.clamp(0.0, 1.0);
    let changed = label != prediction.label || confidence != prediction.confidence;
    let scores = if changed {
        prediction.scores.reshaped(label, confidence)
    } else {
        prediction.scores
    };
    if !scores.is_finite() {
        return Err(ComplexCaseError::NonFiniteScores);
    }
    let label = scores.argmax();

    Ok(EnhancedPrediction {
        sentiment: SentimentResult {
            label,
            confidence: scores.get(label),
            scores,
            reasoning,
        },
        complexity_score: complexity_score(features),
        features: features.clone(),
        fallback_used: false,
    })
}

/// 분류기만으로 복합 사례 분석
///
/// 실패하지 않습니다. 내부 오류가 나면 원문을 그대로 분류한 결과를
/// 복잡도 1.0으로 돌려주고, 그마저 안 되면 중립/신뢰도 0을 돌려줍니다.
pub fn analyze_complex_case(text: &str, classifier: &NaiveBayesClassifier) -> EnhancedPrediction {
    match try_analyze(text, classifier) {
        Ok(prediction) => prediction,
        Err(err) => {
            log::warn!("복합 사례 분석 실패, 원문 분류로 대체: {}", err);
            fallback(text, classifier)
        }
    }
}

fn try_analyze(
    text: &str,
    classifier: &NaiveBayesClassifier,
) -> Result<EnhancedPrediction, ComplexCaseError> {
    if !has_content(text) {
        return Ok(EnhancedPrediction {
            sentiment: SentimentResult::from_prediction(Prediction::empty(), Vec::new()),
            complexity_score: 0.0,
            features: ComplexFeatures::default(),
            fallback_used: false,
        });
    }
    let preprocessed = preprocess(text);
    let features = detect_features(text, &preprocessed.features);
    let base = classifier.predict(&preprocessed.normalized_text)?;
    apply_corrections(base, &features)
}

fn fallback(text: &str, classifier: &NaiveBayesClassifier) -> EnhancedPrediction {
    let prediction = match classifier.predict(text) {
        Ok(prediction) if prediction.scores.is_finite() => prediction,
        Ok(_) => Prediction::empty(),
        Err(err) => {
            log::warn!("원문 분류도 실패, 중립으로 처리: {}", err);
            Prediction::empty()
        }
    };
    EnhancedPrediction {
        sentiment: SentimentResult::from_prediction(
            prediction,
            vec!["복합 사례 분석 실패: 원문 분류 결과 사용".into()],
        ),
        complexity_score: FALLBACK_COMPLEXITY,
        features: ComplexFeatures::default(),
        fallback_used: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ModelParameters, TrainingExample};
    use crate::complex::TemporalContext;
    use crate::core::SentimentScores;

    fn prediction(pos: f64, neg: f64, neu: f64) -> Prediction {
        Prediction::from_scores(SentimentScores::new(pos, neg, neu))
    }

    fn assert_invariant(result: &EnhancedPrediction) {
        assert!(result.sentiment.is_consistent(), "{:?}", result.sentiment);
    }

    #[test]
    fn test_strong_sarcasm_flips_positive() {
        let features = ComplexFeatures {
            sarcasm_score: 7,
            quoted_positive: true,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.6, 0.3, 0.1), &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Negative);
        assert!((result.sentiment.confidence - 0.85).abs() < 1e-9);
        assert!(!result.sentiment.reasoning.is_empty());
        assert_invariant(&result);
    }

    #[test]
    fn test_strong_sarcasm_keeps_negative() {
        let features = ComplexFeatures {
            sarcasm_score: 4,
            ..Default::default()
        };
        let base = prediction(0.2, 0.7, 0.1);
        let result = apply_corrections(base, &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Negative);
        assert_eq!(result.sentiment.scores, base.scores);
    }

    #[test]
    fn test_mild_sarcasm_neutralizes() {
        let features = ComplexFeatures {
            sarcasm_score: 2,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.7, 0.2, 0.1), &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Neutral);
        assert_invariant(&result);
    }

    #[test]
    fn test_mild_sarcasm_keeps_label_above_threshold() {
        let features = ComplexFeatures {
            sarcasm_score: 1,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.85, 0.1, 0.05), &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Positive);
        assert!((result.sentiment.confidence - 0.65).abs() < 1e-9);
        assert!((result.sentiment.scores.negative - 0.35 * 2.0 / 3.0).abs() < 1e-9);
        assert!((result.sentiment.scores.neutral - 0.35 / 3.0).abs() < 1e-9);
        assert_eq!(result.sentiment.reasoning.len(), 1);
        assert_invariant(&result);
    }

    #[test]
    fn test_past_contradiction_flips_positive() {
        let features = ComplexFeatures {
            temporal_displacement: true,
            temporal_context: Some(TemporalContext::Past),
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.7, 0.2, 0.1), &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Negative);
        assert!((result.sentiment.confidence - 0.7).abs() < 1e-9);
        assert!((result.sentiment.scores.positive - 0.2625).abs() < 1e-9);
        assert!((result.sentiment.scores.neutral - 0.0375).abs() < 1e-9);
        assert!((result.complexity_score - 0.2).abs() < 1e-9);
        assert_invariant(&result);

        // 현재 시제면 그대로
        let present = ComplexFeatures {
            temporal_context: Some(TemporalContext::Present),
            ..features
        };
        let base = prediction(0.7, 0.2, 0.1);
        let result = apply_corrections(base, &present).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Positive);
        assert_eq!(result.sentiment.scores, base.scores);
    }

    #[test]
    fn test_slang_and_typo_penalty() {
        let slang = ComplexFeatures {
            has_slang: true,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.8, 0.1, 0.1), &slang).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Positive);
        assert!((result.sentiment.confidence - 0.7).abs() < 1e-9);
        assert!((result.sentiment.scores.negative - 0.15).abs() < 1e-9);
        assert!((result.sentiment.scores.neutral - 0.15).abs() < 1e-9);
        assert_invariant(&result);

        let typos = ComplexFeatures {
            has_typos: true,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.1, 0.6, 0.3), &typos).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Negative);
        assert!((result.sentiment.confidence - 0.5).abs() < 1e-9);
        assert!((result.sentiment.scores.positive - 0.125).abs() < 1e-9);
        assert!((result.sentiment.scores.neutral - 0.375).abs() < 1e-9);
        assert_invariant(&result);
    }

    #[test]
    fn test_symbols_only_is_blank() {
        let clf = NaiveBayesClassifier::new(ModelParameters::default());
        let result = analyze_complex_case("?!...", &clf);
        assert!(!result.fallback_used);
        assert_eq!(result.sentiment.confidence, 0.0);
    }

    #[test]
    fn test_double_negation_flips_negative() {
        let features = ComplexFeatures {
            double_negation: true,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.2, 0.64, 0.16), &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Positive);
        assert!((result.sentiment.confidence - 0.75).abs() < 1e-9);
        assert_invariant(&result);
    }

    #[test]
    fn test_contradictory_signals_neutral() {
        let features = ComplexFeatures {
            contradictory_signals: true,
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.5, 0.4, 0.1), &features).unwrap();
        assert_eq!(result.sentiment.label, Sentiment::Neutral);
        assert!((result.sentiment.confidence - CONTRADICTORY_CONFIDENCE).abs() < 1e-9);
        assert_invariant(&result);
    }

    #[test]
    fn test_cultural_boost_capped() {
        let features = ComplexFeatures {
            cultural_context: Some(crate::lexicon::CulturalContext::British),
            ..Default::default()
        };
        let result = apply_corrections(prediction(0.85, 0.1, 0.05), &features).unwrap();
        assert!((result.sentiment.confidence - CULTURAL_CAP).abs() < 1e-9);
        assert_invariant(&result);
    }

    #[test]
    fn test_no_features_untouched() {
        let base = prediction(0.5, 0.3, 0.2);
        let result = apply_corrections(base, &ComplexFeatures::default()).unwrap();
        assert_eq!(result.sentiment.scores, base.scores);
        assert_eq!(result.complexity_score, 0.0);
        assert!(result.sentiment.reasoning.is_empty());
    }

    #[test]
    fn test_non_finite_rejected() {
        let bad = Prediction {
            label: Sentiment::Positive,
            confidence: f64::NAN,
            scores: SentimentScores::new(f64::NAN, 0.0, 0.0),
        };
        assert!(matches!(
            apply_corrections(bad, &ComplexFeatures::default()),
            Err(ComplexCaseError::NonFiniteScores)
        ));
    }

    #[test]
    fn test_complexity_floor_and_clamp() {
        let slang_only = ComplexFeatures {
            has_slang: true,
            ..Default::default()
        };
        assert!((complexity_score(&slang_only) - 0.1).abs() < 1e-9);

        let everything = ComplexFeatures {
            sarcasm_score: 10,
            double_negation: true,
            has_typos: true,
            contradictory_signals: true,
            mixed_language: true,
            cultural_context: Some(crate::lexicon::CulturalContext::GenZ),
            ..Default::default()
        };
        assert_eq!(complexity_score(&everything), 1.0);
    }

    #[test]
    fn test_untrained_classifier_falls_back_to_neutral() {
        let clf = NaiveBayesClassifier::new(ModelParameters::default());
        let result = analyze_complex_case("love it", &clf);
        assert!(result.fallback_used);
        assert_eq!(result.complexity_score, 1.0);
        assert_eq!(result.sentiment.label, Sentiment::Neutral);
        assert_eq!(result.sentiment.confidence, 0.0);
    }

    #[test]
    fn test_analyze_with_trained_classifier() {
        let mut clf = NaiveBayesClassifier::new(ModelParameters::default());
        clf.train(&[
            TrainingExample::new("great update love it", Sentiment::Positive),
            TrainingExample::new("great phone great camera", Sentiment::Positive),
            TrainingExample::new("slow and broken", Sentiment::Negative),
        ])
        .unwrap();
        let result = analyze_complex_case("Oh great, 'great' update...", &clf);
        assert!(!result.fallback_used);
        assert!(result.features.strong_sarcasm());
        assert_eq!(result.sentiment.label, Sentiment::Negative);
        assert!(result.complexity_score >= 0.3);
        assert_invariant(&result);
    }

    #[test]
    fn test_blank_text() {
        let clf = NaiveBayesClassifier::new(ModelParameters::default());
        let result = analyze_complex_case("  ", &clf);
        assert!(!result.fallback_used);
        assert_eq!(result.sentiment.label, Sentiment::Neutral);
        assert_eq!(result.sentiment.confidence, 0.0);
    }
}
