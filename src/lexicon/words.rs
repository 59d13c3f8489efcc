//! 단어 목록: 감성 어휘, 부정어, 강조어, 멘션 문맥어, 다국어 어휘
//!
//! 가중치는 규칙 기반 채점기에서 쓰는 상대 강도입니다.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// 긍정 어휘 (단어, 가중치)
pub const POSITIVE_WORD_LIST: &[(&str, f64)] = &[
    ("good", 1.0), ("great", 1.0), ("excellent", 1.5), ("amazing", 1.5),
    ("awesome", 1.5), ("love", 1.5), ("loved", 1.5), ("loves", 1.5),
    ("lovely", 1.0), ("wonderful", 1.5), ("fantastic", 1.5), ("perfect", 1.2),
    ("best", 1.2), ("happy", 1.0), ("nice", 0.8), ("brilliant", 1.3),
    ("impressive", 1.2), ("impressed", 1.2), ("beautiful", 1.2), ("glad", 1.0),
    ("enjoy", 1.0), ("enjoyed", 1.0), ("fun", 0.8), ("helpful", 1.0),
    ("recommend", 1.0), ("thanks", 0.8), ("thank", 0.8), ("positive", 1.0),
    ("blessed", 1.0), ("winning", 1.0), ("incredible", 1.3), ("superb", 1.5),
    ("smooth", 0.8), ("favorite", 1.0), ("favourite", 1.0), ("cool", 0.8),
    ("delighted", 1.3), ("satisfied", 1.0), ("pleased", 1.0), ("outstanding", 1.5),
    ("chuffed", 1.2), ("stoked", 1.2), ("works", 0.6), ("fast", 0.6),
];

/// 부정 어휘 (단어, 가중치)
pub const NEGATIVE_WORD_LIST: &[(&str, f64)] = &[
    ("bad", 1.0), ("terrible", 1.5), ("awful", 1.5), ("horrible", 1.5),
    ("hate", 1.5), ("hated", 1.5), ("worst", 1.5), ("sad", 1.0),
    ("angry", 1.2), ("disappointed", 1.3), ("disappointing", 1.3), ("poor", 1.0),
    ("broken", 1.2), ("breaks", 1.0), ("broke", 1.0), ("crash", 1.0),
    ("crashes", 1.0), ("crashed", 1.0), ("fail", 1.2), ("fails", 1.2),
    ("failed", 1.2), ("failure", 1.2), ("bug", 0.8), ("buggy", 1.0),
    ("slow", 0.8), ("useless", 1.3), ("annoying", 1.2), ("annoyed", 1.2),
    ("frustrating", 1.3), ("frustrated", 1.3), ("ugly", 1.0), ("boring", 1.0),
    ("waste", 1.2), ("negative", 1.0), ("problem", 0.8), ("rubbish", 1.2),
    ("gutted", 1.2), ("laggy", 1.0), ("scam", 1.5), ("disgusting", 1.5),
    ("worse", 1.2), ("wrong", 0.8), ("error", 0.8), ("stuck", 0.8),
    ("delayed", 0.8), ("unacceptable", 1.4), ("dissatisfied", 1.2),
];

/// 풍자 패턴에 쓰는 긍정 형용사
pub const POSITIVE_ADJECTIVES: &[&str] = &[
    "great", "perfect", "amazing", "wonderful", "fantastic", "excellent", "brilliant",
    "awesome", "lovely", "nice", "good", "best", "love", "helpful", "fun", "superb",
    "incredible",
];

pub static POSITIVE_WORDS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| POSITIVE_WORD_LIST.iter().copied().collect());

pub static NEGATIVE_WORDS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| NEGATIVE_WORD_LIST.iter().copied().collect());

/// 부정어 (축약형 포함)
pub const NEGATION_WORD_LIST: &[&str] = &[
    "not", "no", "never", "cannot", "can't", "cant", "don't", "dont", "doesn't",
    "didn't", "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't",
    "shouldn't", "couldn't", "ain't", "nothing", "nobody", "none", "neither",
    "nor", "without", "hardly", "barely",
];

pub static NEGATION_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATION_WORD_LIST.iter().copied().collect());

/// 강조어 (중복 집계)
pub const INTENSIFIER_LIST: &[&str] = &[
    "absolutely", "extremely", "fantastic", "horrible", "totally", "completely",
    "incredibly", "really", "so", "very", "super", "literally", "insanely",
    "utterly", "seriously", "highly", "truly",
];

pub static INTENSIFIERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INTENSIFIER_LIST.iter().copied().collect());

/// 멘션 문맥: 불만을 나타내는 단어
pub const COMPLAINT_WORD_LIST: &[&str] = &[
    "help", "issue", "problem", "broken", "worst", "terrible", "fix", "refund",
    "cancel", "disappointed", "waiting", "outage", "bug", "error", "support",
    "complaint", "hate", "awful",
];

/// 멘션 문맥: 칭찬을 나타내는 단어
pub const PRAISE_WORD_LIST: &[&str] = &[
    "love", "thanks", "thank", "amazing", "great", "awesome", "best", "excellent",
    "kudos", "shoutout", "appreciate", "perfect", "fantastic",
];

/// 휴리스틱 판정의 다국어 긍정 어휘
pub const MULTILINGUAL_POSITIVE: &[&str] = &[
    "bueno", "buena", "excelente", "genial", "encanta", "gracias", "feliz",
    "increíble", "génial", "magnifique", "merci", "heureux", "ótimo", "ótima",
    "incrível", "obrigado", "obrigada", "toll", "wunderbar",
];

/// 휴리스틱 판정의 다국어 부정 어휘
pub const MULTILINGUAL_NEGATIVE: &[&str] = &[
    "malo", "mala", "odio", "pésimo", "triste", "nul", "nulle", "déteste",
    "ruim", "péssimo", "odeio", "schlecht", "schrecklich",
];

/// 언어 판별용 고유 기능어 (언어 코드, 단어 목록)
pub const LANGUAGE_MARKERS: &[(&str, &[&str])] = &[
    ("en", &["the", "and", "is", "this", "that", "with", "for", "you", "was", "are", "have", "my"]),
    ("es", &["el", "los", "las", "muy", "pero", "que", "está", "esto", "para", "una", "gracias", "qué", "del"]),
    ("fr", &["le", "les", "est", "très", "mais", "avec", "je", "pas", "pour", "merci", "des", "c'est"]),
    ("pt", &["muito", "não", "você", "obrigado", "obrigada", "uma", "isso", "tão", "também", "ótimo"]),
];

/// 긍정 어휘 여부
pub fn is_positive_word(word: &str) -> bool {
    POSITIVE_WORDS.contains_key(word)
}

/// 부정 어휘 여부
pub fn is_negative_word(word: &str) -> bool {
    NEGATIVE_WORDS.contains_key(word)
}

/// 부정어 여부
pub fn is_negation(word: &str) -> bool {
    NEGATION_WORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_lists_disjoint() {
        for (word, _) in POSITIVE_WORD_LIST {
            assert!(!is_negative_word(word), "'{}'가 양쪽 목록에 있음", word);
        }
    }

    #[test]
    fn test_lookup() {
        assert!(is_positive_word("amazing"));
        assert!(is_negative_word("breaks"));
        assert!(is_negation("can't"));
        assert!(!is_negation("can"));
        assert!(INTENSIFIERS.contains("absolutely"));
    }

    #[test]
    fn test_adjectives_are_positive() {
        for adj in POSITIVE_ADJECTIVES {
            assert!(is_positive_word(adj), "'{}'가 긍정 어휘에 없음", adj);
        }
    }
}
