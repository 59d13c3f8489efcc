//! 휴리스틱 판정 계층
//!
//! 최종 세 점수에 부정어, 이모지, 느낌표, 다국어 어휘 신호를 반영하고
//! 애매한 중립을 더 큰 극성 쪽으로 넘깁니다.

use serde::{Deserialize, Serialize};

use crate::core::{Prediction, Sentiment, SentimentResult, SentimentScores};
use crate::lexicon::patterns::NEGATION;
use crate::lexicon::tally_emoji;
use crate::lexicon::words::{MULTILINGUAL_NEGATIVE, MULTILINGUAL_POSITIVE};
use crate::normalize::words;

/// 부정어 보정을 적용하는 최대 |긍정 − 부정| 차이
pub const NEGATION_NUDGE_GAP: f64 = 0.25;
/// 부정어 보정으로 긍정에서 부정으로 옮기는 양
pub const NEGATION_SHIFT: f64 = 0.08;
/// 부정이 이미 앞설 때의 중립 보정량
pub const NEGATION_NEUTRAL_BUMP: f64 = 0.04;
/// 느낌표 집계 상한
pub const MAX_EXCLAMATIONS: usize = 3;
/// 다국어 어휘 보정량
pub const MULTILINGUAL_NUDGE: f64 = 0.12;
/// 중립 대체에 필요한 최소 |긍정 − 부정| 차이
pub const POLARITY_SPLIT_MIN: f64 = 0.03;

/// 휴리스틱 판정 설정 (환경 변수로 덮어쓸 수 있음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// 중립이 이 차이보다 적게 앞서면 극성 쪽으로 넘김 (`NEUTRAL_DELTA`)
    #[serde(default = "default_neutral_delta")]
    pub neutral_delta: f64,

    /// 중립이 앞설 때 긍정으로 옮기는 양의 두 배 (`POS_BIAS`)
    #[serde(default = "default_polarity_bias")]
    pub pos_bias: f64,

    /// 중립이 앞설 때 부정으로 옮기는 양의 두 배 (`NEG_BIAS`)
    #[serde(default = "default_polarity_bias")]
    pub neg_bias: f64,

    /// 이모지 극성별 가산치, 중립 이모지는 절반 (`EMOJI_WEIGHT`)
    #[serde(default = "default_emoji_weight")]
    pub emoji_weight: f64,

    /// 느낌표 하나당 가산치 (`EXCLAMATION_WEIGHT`)
    #[serde(default = "default_exclamation_weight")]
    pub exclamation_weight: f64,

    /// 부정어 보정 사용 여부 (`NEGATION_INVERT`)
    #[serde(default = "default_negation_invert")]
    pub negation_invert: bool,
}

fn default_neutral_delta() -> f64 {
    0.07
}

fn default_polarity_bias() -> f64 {
    0.1
}

fn default_emoji_weight() -> f64 {
    0.2
}

fn default_exclamation_weight() -> f64 {
    0.05
}

fn default_negation_invert() -> bool {
    true
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            neutral_delta: default_neutral_delta(),
            pos_bias: default_polarity_bias(),
            neg_bias: default_polarity_bias(),
            emoji_weight: default_emoji_weight(),
            exclamation_weight: default_exclamation_weight(),
            negation_invert: default_negation_invert(),
        }
    }
}

impl HeuristicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기본값에 환경 변수를 덮어쓴 설정
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 프로세스 환경 변수로 덮어쓰기
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// 조회 함수로 덮어쓰기 (해석할 수 없는 값은 경고 후 무시)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        override_f64(&lookup, "NEUTRAL_DELTA", &mut self.neutral_delta);
        override_f64(&lookup, "POS_BIAS", &mut self.pos_bias);
        override_f64(&lookup, "NEG_BIAS", &mut self.neg_bias);
        override_f64(&lookup, "EMOJI_WEIGHT", &mut self.emoji_weight);
        override_f64(&lookup, "EXCLAMATION_WEIGHT", &mut self.exclamation_weight);

        if let Some(raw) = lookup("NEGATION_INVERT") {
            match parse_bool(&raw) {
                Some(v) => self.negation_invert = v,
                None => log::warn!("NEGATION_INVERT 값을 해석할 수 없어 무시: {:?}", raw),
            }
        }
        self
    }

    pub fn with_neutral_delta(mut self, delta: f64) -> Self {
        self.neutral_delta = delta;
        self
    }

    pub fn with_biases(mut self, pos_bias: f64, neg_bias: f64) -> Self {
        self.pos_bias = pos_bias;
        self.neg_bias = neg_bias;
        self
    }

    pub fn with_emoji_weight(mut self, weight: f64) -> Self {
        self.emoji_weight = weight;
        self
    }

    pub fn with_exclamation_weight(mut self, weight: f64) -> Self {
        self.exclamation_weight = weight;
        self
    }

    pub fn with_negation_invert(mut self, enabled: bool) -> Self {
        self.negation_invert = enabled;
        self
    }
}

fn override_f64<F>(lookup: &F, key: &str, target: &mut f64)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => *target = v,
        _ => log::warn!("{} 값을 해석할 수 없어 기본값 유지: {:?}", key, raw),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// 세 점수에 휴리스틱을 적용해 최종 판정
///
/// 1. 부정어 보정
/// 2. 이모지 보정
/// 3. 느낌표 보정
/// 4. 다국어 어휘 보정
/// 5. 중립 완화
/// 6. 정규화
/// 7. 근소한 중립 → 더 큰 극성으로 대체 (극성이 중립 점수를 가져감)
pub fn decide_with_heuristics(
    text: &str,
    scores: SentimentScores,
    config: &HeuristicConfig,
) -> SentimentResult {
    let mut s = scores.normalized();
    let mut reasoning = Vec::new();

    if config.negation_invert
        && NEGATION.is_match(text)
        && (s.positive - s.negative).abs() <= NEGATION_NUDGE_GAP
    {
        if s.positive >= s.negative {
            let shift = NEGATION_SHIFT.min(s.positive);
            s.positive -= shift;
            s.negative += shift;
            reasoning.push("부정어: 긍정 일부를 부정으로 이동".into());
        } else {
            s.neutral += NEGATION_NEUTRAL_BUMP;
            reasoning.push("부정어: 중립 소폭 증가".into());
        }
    }

    let emoji = tally_emoji(text);
    if emoji.hits > 0 {
        if emoji.has(Sentiment::Positive) {
            s.positive += config.emoji_weight;
        }
        if emoji.has(Sentiment::Negative) {
            s.negative += config.emoji_weight;
        }
        if emoji.has(Sentiment::Neutral) {
            s.neutral += config.emoji_weight / 2.0;
        }
        reasoning.push("이모지 신호 반영".into());
    }

    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    if exclamations > 0 {
        let boost = config.exclamation_weight * exclamations as f64;
        if s.positive > s.negative {
            s.positive += boost;
        } else if s.negative > s.positive {
            s.negative += boost;
        } else {
            s.positive += boost;
            s.negative += boost;
        }
        reasoning.push(format!("느낌표 {}개: 우세 극성 강화", exclamations));
    }

    let (multi_pos, multi_neg) = words(text).fold((false, false), |(p, n), w| {
        (
            p || MULTILINGUAL_POSITIVE.contains(&w),
            n || MULTILINGUAL_NEGATIVE.contains(&w),
        )
    });
    if multi_pos {
        s.positive += MULTILINGUAL_NUDGE;
        reasoning.push("다국어 긍정 어휘".into());
    }
    if multi_neg {
        s.negative += MULTILINGUAL_NUDGE;
        reasoning.push("다국어 부정 어휘".into());
    }

    if s.argmax() == Sentiment::Neutral {
        let pos_shift = config.pos_bias / 2.0;
        let neg_shift = config.neg_bias / 2.0;
        s.positive += pos_shift;
        s.negative += neg_shift;
        s.neutral = (s.neutral - pos_shift - neg_shift).max(0.0);
        reasoning.push("중립 완화".into());
    }

    let mut s = s.normalized();

    if s.argmax() == Sentiment::Neutral {
        let leader = s
            .ranked()
            .into_iter()
            .map(|(label, _)| label)
            .find(|label| *label != Sentiment::Neutral)
            .unwrap_or(Sentiment::Positive);
        let margin = s.neutral - s.get(leader);
        if margin < config.neutral_delta && (s.positive - s.negative).abs() > POLARITY_SPLIT_MIN {
            // 동점이어도 leader가 중립보다 앞서도록 재구성
            s = s.reshaped(leader, s.neutral);
            reasoning.push(format!("근소한 중립을 {}(으)로 대체", leader));
        }
    }

    log::debug!("휴리스틱 판정: {:?}", s);
    SentimentResult::from_prediction(Prediction::from_scores(s), reasoning)
}
