//! 이모지 감성 가중치 테이블

use crate::core::Sentiment;

/// (이모지, 감성, 가중치)
///
/// 변형 선택자(U+FE0F)가 붙은 형태도 잡히도록 기본 코드포인트만 등록
pub const EMOJI: &[(&str, Sentiment, f64)] = &[
    ("😀", Sentiment::Positive, 1.0),
    ("😁", Sentiment::Positive, 1.0),
    ("😂", Sentiment::Positive, 0.8),
    ("😊", Sentiment::Positive, 1.0),
    ("😍", Sentiment::Positive, 1.5),
    ("🥰", Sentiment::Positive, 1.4),
    ("❤", Sentiment::Positive, 1.5),
    ("💯", Sentiment::Positive, 1.2),
    ("🔥", Sentiment::Positive, 1.2),
    ("👍", Sentiment::Positive, 1.0),
    ("🎉", Sentiment::Positive, 1.2),
    ("🙌", Sentiment::Positive, 1.0),
    ("✨", Sentiment::Positive, 0.8),
    ("😡", Sentiment::Negative, 1.5),
    ("😠", Sentiment::Negative, 1.3),
    ("🤬", Sentiment::Negative, 1.5),
    ("😢", Sentiment::Negative, 1.2),
    ("😭", Sentiment::Negative, 1.0),
    ("😞", Sentiment::Negative, 1.1),
    ("😤", Sentiment::Negative, 1.0),
    ("👎", Sentiment::Negative, 1.2),
    ("💔", Sentiment::Negative, 1.4),
    ("🤮", Sentiment::Negative, 1.5),
    ("🙄", Sentiment::Negative, 1.0),
    ("😒", Sentiment::Negative, 1.0),
    ("🤔", Sentiment::Neutral, 1.0),
    ("😐", Sentiment::Neutral, 1.0),
    ("😶", Sentiment::Neutral, 1.0),
    ("🤷", Sentiment::Neutral, 1.0),
];

/// 텍스트에 등장한 이모지의 극성별 가중 합
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmojiTally {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    /// 알려진 이모지 등장 횟수
    pub hits: usize,
}

impl EmojiTally {
    pub fn has(&self, sentiment: Sentiment) -> bool {
        match sentiment {
            Sentiment::Positive => self.positive > 0.0,
            Sentiment::Negative => self.negative > 0.0,
            Sentiment::Neutral => self.neutral > 0.0,
        }
    }
}

/// 알려진 이모지 등장 횟수 × 가중치 집계
pub fn tally_emoji(text: &str) -> EmojiTally {
    let mut tally = EmojiTally::default();
    for (emoji, sentiment, weight) in EMOJI {
        let count = text.matches(emoji).count();
        if count == 0 {
            continue;
        }
        tally.hits += count;
        let weighted = count as f64 * weight;
        match sentiment {
            Sentiment::Positive => tally.positive += weighted,
            Sentiment::Negative => tally.negative += weighted,
            Sentiment::Neutral => tally.neutral += weighted,
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_repeats() {
        let tally = tally_emoji("love it 😍😍 👎");
        assert_eq!(tally.hits, 3);
        assert!((tally.positive - 3.0).abs() < 1e-9);
        assert!((tally.negative - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_variation_selector() {
        let tally = tally_emoji("❤️");
        assert!(tally.has(Sentiment::Positive));
    }

    #[test]
    fn test_no_emoji() {
        let tally = tally_emoji("plain text :)");
        assert_eq!(tally.hits, 0);
        assert!(!tally.has(Sentiment::Neutral));
    }
}
