//! 슬랭/관용구/해시태그/축약형 사전
//!
//! 구(phrase) 패턴은 단일 슬랭보다 먼저 적용되어야 합니다.
//! (예: "dumpster fire"가 "fire"보다 먼저 치환)

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::Sentiment;

/// 강한 슬랭으로 취급하는 가중치 기준 (초과 시 강한 치환어 사용)
pub const STRONG_SLANG_WEIGHT: f64 = 1.3;

/// 단일 슬랭 (단어, 감성, 가중치)
pub const SLANG_TERMS: &[(&str, Sentiment, f64)] = &[
    ("fire", Sentiment::Positive, 1.5),
    ("lit", Sentiment::Positive, 1.4),
    ("slaps", Sentiment::Positive, 1.5),
    ("bussin", Sentiment::Positive, 1.5),
    ("goat", Sentiment::Positive, 1.6),
    ("banger", Sentiment::Positive, 1.5),
    ("iconic", Sentiment::Positive, 1.4),
    ("slay", Sentiment::Positive, 1.5),
    ("slayed", Sentiment::Positive, 1.5),
    ("elite", Sentiment::Positive, 1.3),
    ("dope", Sentiment::Positive, 1.2),
    ("snatched", Sentiment::Positive, 1.2),
    ("poggers", Sentiment::Positive, 1.2),
    ("yass", Sentiment::Positive, 1.2),
    ("based", Sentiment::Positive, 1.1),
    ("valid", Sentiment::Positive, 1.0),
    ("vibes", Sentiment::Positive, 1.0),
    ("vibe", Sentiment::Positive, 1.0),
    ("garbage", Sentiment::Negative, 1.5),
    ("trash", Sentiment::Negative, 1.4),
    ("cringe", Sentiment::Negative, 1.3),
    ("flop", Sentiment::Negative, 1.3),
    ("flopped", Sentiment::Negative, 1.3),
    ("fml", Sentiment::Negative, 1.3),
    ("mid", Sentiment::Negative, 1.2),
    ("wack", Sentiment::Negative, 1.2),
    ("yikes", Sentiment::Negative, 1.2),
    ("ick", Sentiment::Negative, 1.1),
    ("sus", Sentiment::Negative, 1.0),
    ("meh", Sentiment::Negative, 1.0),
    ("salty", Sentiment::Negative, 1.0),
    ("ratio", Sentiment::Negative, 1.0),
    ("smh", Sentiment::Negative, 1.0),
    ("ugh", Sentiment::Negative, 1.0),
    ("bruh", Sentiment::Negative, 0.8),
];

/// 여러 단어로 된 슬랭 관용구 (정규식, 감성)
const SLANG_PHRASE_SOURCES: &[(&str, Sentiment)] = &[
    (r"\b(?:dumpster|trash)\s+fire\b", Sentiment::Negative),
    (r"\bnot\s+the\s+vibe\b", Sentiment::Negative),
    (r"\bbig\s+yikes\b", Sentiment::Negative),
    (r"\bhard\s+pass\b", Sentiment::Negative),
    (r"\bmid\s+af\b", Sentiment::Negative),
    (r"\b(?:ain'?t|this\s+is\s+not)\s+it\b", Sentiment::Negative),
    (r"\bfell\s+off\b", Sentiment::Negative),
    (r"\bcaught\s+in\s+4k\b", Sentiment::Negative),
    (r"\bthe\s+audacity\b", Sentiment::Negative),
    (r"\bno\s+cap\b", Sentiment::Positive),
    (r"\bhits\s+different\b", Sentiment::Positive),
    (r"\bate\s+(?:it|that|this)\s+up\b", Sentiment::Positive),
    (r"\bliving\s+(?:my|our|their)\s+best\s+life\b", Sentiment::Positive),
    (r"\b(?:that'?s|it'?s)\s+a\s+vibe\b", Sentiment::Positive),
    (r"\bchef'?s\s+kiss\b", Sentiment::Positive),
    (r"\bgo(?:es)?\s+hard\b", Sentiment::Positive),
    (r"\bmain\s+character\s+energy\b", Sentiment::Positive),
    (r"\b(?:lowkey|highkey)\s+(?:fire|amazing|obsessed|love)\b", Sentiment::Positive),
];

/// 컴파일된 관용구 패턴 (선언 순서 유지)
pub static SLANG_PHRASES: LazyLock<Vec<(Regex, Sentiment)>> = LazyLock::new(|| {
    SLANG_PHRASE_SOURCES
        .iter()
        .map(|(src, sentiment)| (Regex::new(src).expect("slang phrase pattern"), *sentiment))
        .collect()
});

/// 단일 슬랭 조회 테이블
pub static SLANG_LOOKUP: LazyLock<HashMap<&'static str, (Sentiment, f64)>> = LazyLock::new(|| {
    SLANG_TERMS
        .iter()
        .map(|(term, sentiment, weight)| (*term, (*sentiment, *weight)))
        .collect()
});

/// 모든 단일 슬랭을 한 번에 찾는 정규식
pub static SLANG_TERM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = SLANG_TERMS
        .iter()
        .map(|(term, _, _)| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("slang term pattern")
});

/// 해시태그 → 구문 사전 ('#' 제외)
pub const HASHTAGS: &[(&str, &str)] = &[
    ("fail", "fail terrible"),
    ("epicfail", "terrible failure"),
    ("blessed", "blessed happy"),
    ("love", "love"),
    ("winning", "winning great"),
    ("smh", "disappointed"),
    ("goals", "amazing goals"),
    ("grateful", "grateful happy"),
    ("fml", "terrible awful"),
    ("tbt", "throwback"),
    ("lol", "funny"),
    ("yay", "happy great"),
    ("ugh", "annoyed"),
    ("rant", "complaint angry"),
    ("customerservice", "customer service"),
    ("badservice", "bad service"),
    ("greatservice", "great service"),
    ("neveragain", "never again terrible"),
];

pub static HASHTAG_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HASHTAGS.iter().copied().collect());

/// 축약형 → 풀어쓴 형태
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "is not"),
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("i'm", "i am"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("you're", "you are"),
    ("they're", "they are"),
    ("we're", "we are"),
    ("i've", "i have"),
    ("i'll", "i will"),
    ("let's", "let us"),
    ("y'all", "you all"),
    ("gonna", "going to"),
    ("wanna", "want to"),
    ("gotta", "got to"),
];

/// 컴파일된 축약형 패턴 (대소문자 무시, 곧은/굽은 아포스트로피 모두 허용)
pub static CONTRACTION_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    CONTRACTIONS
        .iter()
        .map(|(from, to)| {
            let body = regex::escape(from).replace('\'', "['’]");
            let re = Regex::new(&format!(r"(?i)\b{}\b", body)).expect("contraction pattern");
            (re, *to)
        })
        .collect()
});
