//! 예측/분석 결과 타입

use serde::{Deserialize, Serialize};

use super::sentiment::{Sentiment, SentimentScores};

/// 단일 판정기(분류기, 규칙 기반 등)의 예측
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: Sentiment,
    pub confidence: f64,
    pub scores: SentimentScores,
}

impl Prediction {
    /// 점수 분포에서 예측 생성 (label = argmax, confidence = 해당 확률)
    pub fn from_scores(scores: SentimentScores) -> Self {
        let scores = scores.normalized();
        let label = scores.argmax();
        Self {
            label,
            confidence: scores.get(label),
            scores,
        }
    }

    /// 빈 입력에 대한 예측: 중립, 균등 분포, 신뢰도 0
    pub fn empty() -> Self {
        Self {
            label: Sentiment::Neutral,
            confidence: 0.0,
            scores: SentimentScores::uniform(),
        }
    }
}

/// 외부로 노출되는 최종 감성 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub confidence: f64,
    pub scores: SentimentScores,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasoning: Vec<String>,
}

impl SentimentResult {
    pub fn from_prediction(prediction: Prediction, reasoning: Vec<String>) -> Self {
        Self {
            label: prediction.label,
            confidence: prediction.confidence,
            scores: prediction.scores,
            reasoning,
        }
    }

    /// 점수 합 = 1, label = argmax 불변식 확인
    pub fn is_consistent(&self) -> bool {
        (self.scores.sum() - 1.0).abs() < super::sentiment::SCORE_TOLERANCE
            && self.scores.argmax() == self.label
            && (0.0..=1.0).contains(&self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores() {
        let p = Prediction::from_scores(SentimentScores::new(3.0, 1.0, 0.0));
        assert_eq!(p.label, Sentiment::Positive);
        assert!((p.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_prediction_is_consistent() {
        let r = SentimentResult::from_prediction(Prediction::empty(), Vec::new());
        assert_eq!(r.label, Sentiment::Neutral);
        assert_eq!(r.confidence, 0.0);
        assert!(r.is_consistent());
    }

    #[test]
    fn test_serialize_lowercase_label() {
        let r = SentimentResult::from_prediction(Prediction::empty(), vec!["empty".into()]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"label\":\"neutral\""));
        let parsed: SentimentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.reasoning, vec!["empty".to_string()]);
    }
}
