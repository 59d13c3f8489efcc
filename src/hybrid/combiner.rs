//! 규칙 기반 의견과 나이브 베이즈 의견 병합

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::complex::ComplexFeatures;
use crate::core::{Prediction, Sentiment, SentimentResult, SentimentScores};
use crate::normalize::FeatureBundle;

/// 최종 판정을 만든 경로
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "rule-based")]
    RuleBased,
    #[serde(rename = "naive-bayes")]
    NaiveBayes,
    #[serde(rename = "hybrid")]
    Hybrid,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::RuleBased => "rule-based",
            Method::NaiveBayes => "naive-bayes",
            Method::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 병합 정책 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinerConfig {
    /// 의견이 다를 때 나이브 베이즈가 단독으로 이기는 최소 신뢰도
    #[serde(default = "default_nb_override_confidence")]
    pub nb_override_confidence: f64,

    /// 의견이 다를 때 규칙 기반이 단독으로 이기는 최소 신뢰도
    #[serde(default = "default_rule_override_confidence")]
    pub rule_override_confidence: f64,

    /// 단독 승리에 필요한 상대 우위 (0.2 = 상대보다 20% 이상 높음)
    #[serde(default = "default_dominance_margin")]
    pub dominance_margin: f64,

    /// 혼합 시 규칙 기반 가중치
    #[serde(default = "default_rule_weight")]
    pub rule_weight: f64,

    /// 혼합 시 나이브 베이즈 가중치
    #[serde(default = "default_nb_weight")]
    pub nb_weight: f64,
}

fn default_nb_override_confidence() -> f64 {
    0.7
}

fn default_rule_override_confidence() -> f64 {
    0.8
}

fn default_dominance_margin() -> f64 {
    0.2
}

fn default_rule_weight() -> f64 {
    0.4
}

fn default_nb_weight() -> f64 {
    0.6
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            nb_override_confidence: default_nb_override_confidence(),
            rule_override_confidence: default_rule_override_confidence(),
            dominance_margin: default_dominance_margin(),
            rule_weight: default_rule_weight(),
            nb_weight: default_nb_weight(),
        }
    }
}

/// 병합된 의견
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedOpinion {
    pub prediction: Prediction,
    pub method: Method,
    /// 두 의견을 섞었을 때의 혼합 신뢰도
    pub hybrid_score: Option<f64>,
}

/// 하이브리드 분석 최종 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridSentimentResult {
    #[serde(flatten)]
    pub sentiment: SentimentResult,
    pub method: Method,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_score: Option<f64>,
    pub complexity_score: f64,
    pub features: FeatureBundle,
    pub complex_features: ComplexFeatures,
}

impl HybridSentimentResult {
    /// 빈 입력 결과: 중립, 신뢰도 0
    pub fn empty() -> Self {
        Self {
            sentiment: SentimentResult::from_prediction(Prediction::empty(), Vec::new()),
            method: Method::RuleBased,
            hybrid_score: None,
            complexity_score: 0.0,
            features: FeatureBundle::default(),
            complex_features: ComplexFeatures::default(),
        }
    }
}

/// 두 의견 병합
///
/// - 일치: 높은 신뢰도, 평균 신뢰도를 `hybrid_score`로
/// - 불일치: 한쪽이 충분히 확실하고 상대보다 우세하면 그쪽, 아니면 가중 혼합
/// - 나이브 베이즈 없음: 규칙 기반 단독
pub fn merge(rule: Prediction, nb: Option<Prediction>, config: &CombinerConfig) -> MergedOpinion {
    let Some(nb) = nb else {
        return MergedOpinion {
            prediction: rule,
            method: Method::RuleBased,
            hybrid_score: None,
        };
    };

    if rule.label == nb.label {
        let confidence = rule.confidence.max(nb.confidence);
        let mean = SentimentScores::weighted_mean(&rule.scores, 0.5, &nb.scores, 0.5);
        return MergedOpinion {
            prediction: reshape(mean, rule.label, confidence),
            method: Method::Hybrid,
            hybrid_score: Some((rule.confidence + nb.confidence) / 2.0),
        };
    }

    let dominance = 1.0 + config.dominance_margin;
    if nb.confidence > config.nb_override_confidence && nb.confidence >= dominance * rule.confidence {
        return MergedOpinion {
            prediction: nb,
            method: Method::NaiveBayes,
            hybrid_score: None,
        };
    }
    if rule.confidence > config.rule_override_confidence
        && rule.confidence >= dominance * nb.confidence
    {
        return MergedOpinion {
            prediction: rule,
            method: Method::RuleBased,
            hybrid_score: None,
        };
    }

    let total = config.rule_weight + config.nb_weight;
    let blend = if total > 0.0 {
        (config.rule_weight * rule.confidence + config.nb_weight * nb.confidence) / total
    } else {
        (rule.confidence + nb.confidence) / 2.0
    };
    let label = if rule.confidence > nb.confidence {
        rule.label
    } else {
        nb.label
    };
    let mixed = SentimentScores::weighted_mean(
        &rule.scores,
        config.rule_weight,
        &nb.scores,
        config.nb_weight,
    );
    MergedOpinion {
        prediction: reshape(mixed, label, blend),
        method: Method::Hybrid,
        hybrid_score: Some(blend),
    }
}

/// `label`이 최댓값이 되도록 재구성한 예측
fn reshape(scores: SentimentScores, label: Sentiment, confidence: f64) -> Prediction {
    let scores = scores.reshaped(label, confidence);
    let label = scores.argmax();
    Prediction {
        label,
        confidence: scores.get(label),
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(pos: f64, neg: f64, neu: f64) -> Prediction {
        Prediction::from_scores(SentimentScores::new(pos, neg, neu))
    }

    #[test]
    fn test_method_serialization() {
        assert_eq!(serde_json::to_string(&Method::RuleBased).unwrap(), "\"rule-based\"");
        assert_eq!(serde_json::to_string(&Method::NaiveBayes).unwrap(), "\"naive-bayes\"");
        assert_eq!(Method::Hybrid.to_string(), "hybrid");
    }

    #[test]
    fn test_agreement() {
        let merged = merge(pred(0.6, 0.3, 0.1), Some(pred(0.8, 0.1, 0.1)), &CombinerConfig::default());
        assert_eq!(merged.method, Method::Hybrid);
        assert_eq!(merged.prediction.label, Sentiment::Positive);
        assert!((merged.prediction.confidence - 0.8).abs() < 1e-9);
        assert!((merged.hybrid_score.unwrap() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_naive_bayes_dominates() {
        let merged = merge(pred(0.5, 0.3, 0.2), Some(pred(0.1, 0.8, 0.1)), &CombinerConfig::default());
        assert_eq!(merged.method, Method::NaiveBayes);
        assert_eq!(merged.prediction.label, Sentiment::Negative);
        assert!(merged.hybrid_score.is_none());
    }

    #[test]
    fn test_rule_dominates() {
        let merged = merge(pred(0.9, 0.05, 0.05), Some(pred(0.3, 0.6, 0.1)), &CombinerConfig::default());
        assert_eq!(merged.method, Method::RuleBased);
        assert_eq!(merged.prediction.label, Sentiment::Positive);
    }

    #[test]
    fn test_blend_uses_higher_confidence_label() {
        // 규칙 0.55 긍정, 베이즈 0.65 부정 → 어느 쪽도 단독 승리 못함
        let merged = merge(pred(0.55, 0.25, 0.2), Some(pred(0.2, 0.65, 0.15)), &CombinerConfig::default());
        assert_eq!(merged.method, Method::Hybrid);
        assert_eq!(merged.prediction.label, Sentiment::Negative);
        let blend = 0.4 * 0.55 + 0.6 * 0.65;
        assert!((merged.hybrid_score.unwrap() - blend).abs() < 1e-9);
        assert!((merged.prediction.confidence - blend).abs() < 1e-9);
        assert!((merged.prediction.scores.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rule_only_when_classifier_missing() {
        let rule = pred(0.2, 0.7, 0.1);
        let merged = merge(rule, None, &CombinerConfig::default());
        assert_eq!(merged.method, Method::RuleBased);
        assert_eq!(merged.prediction, rule);
    }
}
