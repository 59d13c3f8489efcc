//! 감성 레이블 및 클래스별 점수 분포

use serde::{Deserialize, Serialize};
use std::fmt;

/// 점수 합 허용 오차
pub const SCORE_TOLERANCE: f64 = 1e-6;

/// reshape 시 선택된 레이블이 나머지보다 앞서도록 두는 최소 간격
const RESHAPE_MARGIN: f64 = 1e-3;

/// 3분류 감성 레이블
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// 모든 레이블 (표시 순서)
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// 동점일 때 우선순위: 중립 → 긍정 → 부정
    pub const TIE_ORDER: [Sentiment; 3] = [Sentiment::Neutral, Sentiment::Positive, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// 긍정 ↔ 부정 반전 (중립은 그대로)
    pub fn inverted(self) -> Self {
        match self {
            Sentiment::Positive => Sentiment::Negative,
            Sentiment::Negative => Sentiment::Positive,
            Sentiment::Neutral => Sentiment::Neutral,
        }
    }

    /// 문자열 레이블 파싱 (대소문자 무시)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" => Some(Sentiment::Positive),
            "negative" | "neg" => Some(Sentiment::Negative),
            "neutral" | "neu" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 긍정/부정/중립 점수 분포
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl Default for SentimentScores {
    fn default() -> Self {
        Self::uniform()
    }
}

impl SentimentScores {
    pub fn new(positive: f64, negative: f64, neutral: f64) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// 균등 분포
    pub fn uniform() -> Self {
        let third = 1.0 / 3.0;
        Self::new(third, third, third)
    }

    pub fn get(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn set(&mut self, label: Sentiment, value: f64) {
        match label {
            Sentiment::Positive => self.positive = value,
            Sentiment::Negative => self.negative = value,
            Sentiment::Neutral => self.neutral = value,
        }
    }

    pub fn add(&mut self, label: Sentiment, delta: f64) {
        let v = self.get(label) + delta;
        self.set(label, v);
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }

    pub fn is_finite(&self) -> bool {
        self.positive.is_finite() && self.negative.is_finite() && self.neutral.is_finite()
    }

    /// 합이 1이 되도록 정규화
    ///
    /// 음수는 0으로 자르고, 합이 0이거나 유한하지 않으면 균등 분포 반환
    pub fn normalized(&self) -> Self {
        let clip = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let (p, n, u) = (clip(self.positive), clip(self.negative), clip(self.neutral));
        let total = p + n + u;
        if total <= 0.0 {
            return Self::uniform();
        }
        Self::new(p / total, n / total, u / total)
    }

    /// 최댓값 레이블 (동점이면 `Sentiment::TIE_ORDER` 순)
    pub fn argmax(&self) -> Sentiment {
        let mut best = Sentiment::TIE_ORDER[0];
        for label in Sentiment::TIE_ORDER.iter().skip(1) {
            if self.get(*label) > self.get(best) {
                best = *label;
            }
        }
        best
    }

    /// 내림차순 정렬된 (레이블, 점수) 목록
    pub fn ranked(&self) -> [(Sentiment, f64); 3] {
        let mut ranked = Sentiment::TIE_ORDER.map(|l| (l, self.get(l)));
        // 안정 정렬이므로 동점은 TIE_ORDER 순서 유지
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// 가중 평균 (가중치 합으로 나눔)
    pub fn weighted_mean(a: &Self, wa: f64, b: &Self, wb: f64) -> Self {
        let total = wa + wb;
        if total <= 0.0 {
            return Self::uniform();
        }
        Self::new(
            (a.positive * wa + b.positive * wb) / total,
            (a.negative * wa + b.negative * wb) / total,
            (a.neutral * wa + b.neutral * wb) / total,
        )
    }

    /// `label`이 `confidence` 점수로 최댓값이 되도록 분포 재구성
    ///
    /// 나머지 확률은 기존 두 레이블의 비율대로 나누되, 어느 쪽도
    /// `label`을 넘지 않도록 잘라냄. `confidence`가 너무 낮아 불가능하면
    /// `label`이 간신히 앞서는 거의 균등한 분포를 반환.
    pub fn reshaped(&self, label: Sentiment, confidence: f64) -> Self {
        let base = self.normalized();
        let c = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let others: Vec<Sentiment> = Sentiment::ALL.iter().copied().filter(|l| *l != label).collect();
        let (a, b) = (others[0], others[1]);
        let rest = 1.0 - c;
        let (wa, wb) = (base.get(a), base.get(b));
        let (mut va, mut vb) = if wa + wb > 0.0 {
            (rest * wa / (wa + wb), rest * wb / (wa + wb))
        } else {
            (rest / 2.0, rest / 2.0)
        };

        let cap = c - RESHAPE_MARGIN;
        if va > cap {
            va = cap;
            vb = rest - va;
        }
        if vb > cap {
            vb = cap;
            va = rest - vb;
        }

        if va < 0.0 || vb < 0.0 || va > cap || vb > cap {
            let m = RESHAPE_MARGIN * 3.0;
            let mut out = Self::new((1.0 - m) / 3.0, (1.0 - m) / 3.0, (1.0 - m) / 3.0);
            out.set(label, (1.0 + 2.0 * m) / 3.0);
            return out;
        }

        let mut out = Self::new(0.0, 0.0, 0.0);
        out.set(label, c);
        out.set(a, va);
        out.set(b, vb);
        out
    }
}
