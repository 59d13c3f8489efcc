//! 원문 → 정규화 텍스트 변환
//!
//! 단계 순서가 중요합니다. 뒤 단계는 앞 단계의 출력 위에서 동작합니다:
//!
//! 1. 소문자화
//! 2. `@mention` → 문맥별 정규 토큰
//! 3. `#hashtag` → 사전 구문 (없으면 '#' 제거)
//! 4. 슬랭 관용구 치환
//! 5. 단일 슬랭 치환
//! 6. 이모지 감성 집계
//! 7. 강조어 집계
//! 8. 3회 이상 반복 문자 축약
//! 9. 축약형 전개

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::core::Sentiment;
use crate::lexicon::slang::{
    CONTRACTION_PATTERNS, HASHTAG_LOOKUP, SLANG_LOOKUP, SLANG_PHRASES, SLANG_TERM_REGEX,
    STRONG_SLANG_WEIGHT,
};
use crate::lexicon::tally_emoji;
use crate::lexicon::words::{COMPLAINT_WORD_LIST, INTENSIFIERS, PRAISE_WORD_LIST};

use super::features::{FeatureBundle, MentionContext, Preprocessed};

static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").expect("mention pattern"));
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern"));

const PHRASE_POSITIVE: &str = "excellent amazing";
const PHRASE_NEGATIVE: &str = "terrible disappointing";
const STRONG_POSITIVE: &str = "excellent amazing";
const STRONG_NEGATIVE: &str = "terrible awful";
const MILD_POSITIVE: &str = "good positive";
const MILD_NEGATIVE: &str = "bad negative";

/// 원문을 정규화하고 특징 묶음을 함께 반환
///
/// 순수 함수이며 실패하지 않습니다. 깨진 입력도 일반 텍스트로 취급합니다.
pub fn preprocess(text: &str) -> Preprocessed {
    let mut features = FeatureBundle::default();

    let lowered = text.to_lowercase();

    let (text, mention_context) = replace_mentions(&lowered);
    features.mention_context = mention_context;

    let text = replace_hashtags(&text);

    let (text, phrase_hit) = replace_slang_phrases(&text);
    let (text, term_hit) = replace_slang_terms(&text);
    features.has_slang = phrase_hit || term_hit;

    features.emoji_sentiment = emoji_sentiment(&text);
    features.intensifier_count = count_intensifiers(&text);

    let text = collapse_repeats(&text);
    let normalized_text = expand_contractions(&text);

    Preprocessed {
        normalized_text,
        features,
    }
}

/// 단어 단위 분리 (영숫자/아포스트로피 외 문자로 분리, 감싸는 따옴표 제거)
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '_'))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
}

/// 분석할 내용이 있는지 (영숫자 또는 알려진 이모지)
///
/// 공백, 문장부호, 제어 문자만 있는 입력은 빈 입력과 같이 취급합니다.
pub fn has_content(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric) || tally_emoji(text).hits > 0
}

/// 전체 텍스트의 불만/칭찬 단어로 멘션 문맥 판정
fn mention_context(lowered: &str) -> MentionContext {
    let mut complaint = false;
    let mut praise = false;
    for word in words(lowered) {
        complaint |= COMPLAINT_WORD_LIST.contains(&word);
        praise |= PRAISE_WORD_LIST.contains(&word);
    }
    match (complaint, praise) {
        (true, false) => MentionContext::Complaint,
        (false, true) => MentionContext::Praise,
        _ => MentionContext::Neutral,
    }
}

fn replace_mentions(lowered: &str) -> (String, Option<MentionContext>) {
    if !MENTION.is_match(lowered) {
        return (lowered.to_string(), None);
    }
    let context = mention_context(lowered);
    let replaced = MENTION.replace_all(lowered, context.canonical_token());
    (replaced.into_owned(), Some(context))
}

fn replace_hashtags(text: &str) -> String {
    HASHTAG
        .replace_all(text, |caps: &Captures| {
            let tag = &caps[1];
            HASHTAG_LOOKUP
                .get(tag)
                .map(|phrase| phrase.to_string())
                .unwrap_or_else(|| tag.to_string())
        })
        .into_owned()
}

fn replace_slang_phrases(text: &str) -> (String, bool) {
    let mut out = text.to_string();
    let mut hit = false;
    for (re, sentiment) in SLANG_PHRASES.iter() {
        if !re.is_match(&out) {
            continue;
        }
        hit = true;
        let replacement = match sentiment {
            Sentiment::Negative => PHRASE_NEGATIVE,
            _ => PHRASE_POSITIVE,
        };
        out = re.replace_all(&out, replacement).into_owned();
    }
    (out, hit)
}

fn replace_slang_terms(text: &str) -> (String, bool) {
    if !SLANG_TERM_REGEX.is_match(text) {
        return (text.to_string(), false);
    }
    let replaced = SLANG_TERM_REGEX.replace_all(text, |caps: &Captures| {
        let term = &caps[0];
        match SLANG_LOOKUP.get(term) {
            Some((Sentiment::Positive, w)) if *w > STRONG_SLANG_WEIGHT => STRONG_POSITIVE,
            Some((Sentiment::Positive, _)) => MILD_POSITIVE,
            Some((Sentiment::Negative, w)) if *w > STRONG_SLANG_WEIGHT => STRONG_NEGATIVE,
            Some((Sentiment::Negative, _)) => MILD_NEGATIVE,
            _ => term,
        }
        .to_string()
    });
    (replaced.into_owned(), true)
}

/// 이모지 감성: 가중 합이 큰 쪽, 같으면 중립, 알려진 이모지가 없으면 None
fn emoji_sentiment(text: &str) -> Option<Sentiment> {
    let tally = tally_emoji(text);
    if tally.hits == 0 {
        return None;
    }
    if tally.positive > tally.negative {
        Some(Sentiment::Positive)
    } else if tally.negative > tally.positive {
        Some(Sentiment::Negative)
    } else {
        Some(Sentiment::Neutral)
    }
}

fn count_intensifiers(text: &str) -> usize {
    words(text).filter(|w| INTENSIFIERS.contains(w)).count()
}

/// 같은 문자가 3회 이상 연속되면 1회로 축약 ("sooooo" → "so")
pub(crate) fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        let keep = if run >= 3 { 1 } else { run };
        for _ in 0..keep {
            out.push(c);
        }
    }
    out
}

fn expand_contractions(text: &str) -> String {
    let mut out = text.to_string();
    for (re, expansion) in CONTRACTION_PATTERNS.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *expansion).into_owned();
        }
    }
    out
}
