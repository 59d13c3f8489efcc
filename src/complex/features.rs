//! 복합 사례 특징 탐지
//!
//! 원문(소문자화, 아포스트로피 통일)에서 풍자, 이중 부정, 시제,
//! 문화권 슬랭, 오타, 신호 충돌, 언어를 찾아냅니다.

use serde::{Deserialize, Serialize};

use crate::core::Sentiment;
use crate::lexicon::patterns::{
    CulturalContext, CULTURAL_SLANG, DOUBLE_NEGATION, EXCLAIMED_THEN_CRITICAL,
    EXPLICIT_CONTRADICTION, FAKE_ENTHUSIASM, IRONIC_OPENER, POSITIVE_ELLIPSIS, QUOTED_POSITIVE,
    TEMPORAL_DISPLACEMENT, TEMPORAL_FUTURE, TEMPORAL_PAST, TEMPORAL_PRESENT, UN_PREFIX_EXCEPTIONS,
};
use crate::lexicon::words::{is_negative_word, is_positive_word, LANGUAGE_MARKERS};
use crate::normalize::{words, FeatureBundle};

/// 풍자 점수 상한
pub const MAX_SARCASM_SCORE: u32 = 10;

const SARCASM_QUOTED: u32 = 4;
const SARCASM_CONTRADICTION: u32 = 5;
const SARCASM_TEMPORAL: u32 = 3;
const SARCASM_IRONIC_OPENER: u32 = 4;
const SARCASM_ELLIPSIS: u32 = 3;
const SARCASM_FAKE_ENTHUSIASM: u32 = 3;
const SARCASM_ELONGATION: u32 = 2;
const SARCASM_EXCLAIMED_CRITICAL: u32 = 4;

/// 모음 없는 단어를 오타로 보는 최소 길이
const VOWELLESS_MIN_LEN: usize = 4;
/// 오타로 보는 연속 자음 수
const CONSONANT_RUN_LIMIT: usize = 6;

/// 문장의 주된 시제
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalContext {
    Past,
    Present,
    Future,
}

/// 복합 사례 특징 (호출마다 새로 계산)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexFeatures {
    /// 풍자 점수 (0..=10)
    pub sarcasm_score: u32,
    pub quoted_positive: bool,
    pub explicit_contradiction: bool,
    pub temporal_displacement: bool,
    pub double_negation: bool,
    pub temporal_context: Option<TemporalContext>,
    pub cultural_context: Option<CulturalContext>,
    /// 정규화 단계에서 슬랭이 치환되었는지
    pub has_slang: bool,
    pub has_typos: bool,
    /// 이모지 극성과 어휘 극성의 충돌
    pub contradictory_signals: bool,
    pub detected_language: Option<String>,
    pub mixed_language: bool,
}

impl ComplexFeatures {
    /// 강한 풍자 (점수 3 이상 또는 따옴표 긍정어)
    pub fn strong_sarcasm(&self) -> bool {
        self.sarcasm_score >= 3 || self.quoted_positive
    }

    /// 약한 풍자 (점수 1~2)
    pub fn mild_sarcasm(&self) -> bool {
        !self.strong_sarcasm() && self.sarcasm_score > 0
    }

    /// 과거 시제 + 역접/시간적 전환
    pub fn past_contradiction(&self) -> bool {
        self.temporal_context == Some(TemporalContext::Past)
            && (self.explicit_contradiction || self.temporal_displacement)
    }

    /// 복합 특징이 하나라도 발견되었는지
    pub fn any(&self) -> bool {
        self.sarcasm_score > 0
            || self.quoted_positive
            || self.explicit_contradiction
            || self.temporal_displacement
            || self.double_negation
            || self.cultural_context.is_some()
            || self.has_slang
            || self.has_typos
            || self.contradictory_signals
            || self.mixed_language
    }
}

/// 탐지 전 원문 정리: 소문자화, 둥근 아포스트로피 통일
fn canonical(text: &str) -> String {
    text.to_lowercase().replace('’', "'")
}

/// 원문과 정규화 특징 묶음에서 복합 특징 탐지
pub fn detect_features(raw_text: &str, bundle: &FeatureBundle) -> ComplexFeatures {
    let text = canonical(raw_text);

    let quoted_positive = QUOTED_POSITIVE.is_match(&text);
    let explicit_contradiction = EXPLICIT_CONTRADICTION.is_match(&text);
    let temporal_displacement = TEMPORAL_DISPLACEMENT.is_match(&text);
    let (detected_language, mixed_language) = detect_language(&text);

    ComplexFeatures {
        sarcasm_score: sarcasm_score(&text),
        quoted_positive,
        explicit_contradiction,
        temporal_displacement,
        double_negation: has_double_negation(&text),
        temporal_context: temporal_context(&text),
        cultural_context: CULTURAL_SLANG
            .iter()
            .find(|(_, re)| re.is_match(&text))
            .map(|(ctx, _)| *ctx),
        has_slang: bundle.has_slang,
        has_typos: has_typos(&text),
        contradictory_signals: contradictory_signals(&text, bundle.emoji_sentiment),
        detected_language,
        mixed_language,
    }
}

/// 풍자 점수 (패턴별 가산, 상한 10)
pub fn sarcasm_score(raw_text: &str) -> u32 {
    let text = canonical(raw_text);
    let checks = [
        (QUOTED_POSITIVE.is_match(&text), SARCASM_QUOTED),
        (EXPLICIT_CONTRADICTION.is_match(&text), SARCASM_CONTRADICTION),
        (TEMPORAL_DISPLACEMENT.is_match(&text), SARCASM_TEMPORAL),
        (IRONIC_OPENER.is_match(&text), SARCASM_IRONIC_OPENER),
        (POSITIVE_ELLIPSIS.is_match(&text), SARCASM_ELLIPSIS),
        (FAKE_ENTHUSIASM.is_match(&text), SARCASM_FAKE_ENTHUSIASM),
        (has_elongation(&text), SARCASM_ELONGATION),
        (EXCLAIMED_THEN_CRITICAL.is_match(&text), SARCASM_EXCLAIMED_CRITICAL),
    ];
    let score: u32 = checks
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, points)| points)
        .sum();
    score.min(MAX_SARCASM_SCORE)
}

fn has_double_negation(text: &str) -> bool {
    DOUBLE_NEGATION.iter().any(|re| {
        re.captures_iter(text).any(|caps| match caps.get(1) {
            // "not un-" 계열: under/until 같은 일반 단어는 제외
            Some(word) => !UN_PREFIX_EXCEPTIONS
                .iter()
                .any(|ex| word.as_str().starts_with(ex)),
            None => true,
        })
    })
}

/// 과거 → 미래 → 현재 순으로 먼저 잡힌 시제
fn temporal_context(text: &str) -> Option<TemporalContext> {
    if TEMPORAL_PAST.is_match(text) {
        Some(TemporalContext::Past)
    } else if TEMPORAL_FUTURE.is_match(text) {
        Some(TemporalContext::Future)
    } else if TEMPORAL_PRESENT.is_match(text) {
        Some(TemporalContext::Present)
    } else {
        None
    }
}

/// 같은 알파벳이 3회 이상 연속 ("sooo")
fn has_elongation(text: &str) -> bool {
    let mut prev = None;
    let mut run = 0;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= 3 && c.is_alphabetic() {
            return true;
        }
    }
    false
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// 오타 휴리스틱: 문자 늘이기, 모음 없는 긴 단어, 긴 자음 연속
fn has_typos(text: &str) -> bool {
    if has_elongation(text) {
        return true;
    }
    words(text)
        .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
        .any(|w| {
            let vowelless = w.len() >= VOWELLESS_MIN_LEN && !w.chars().any(is_vowel);
            let mut run = 0;
            let mut max_run = 0;
            for c in w.chars() {
                run = if is_vowel(c) { 0 } else { run + 1 };
                max_run = max_run.max(run);
            }
            vowelless || max_run >= CONSONANT_RUN_LIMIT
        })
}

/// 이모지 극성과 반대 극성의 어휘가 함께 등장
fn contradictory_signals(text: &str, emoji: Option<Sentiment>) -> bool {
    match emoji {
        Some(Sentiment::Positive) => words(text).any(is_negative_word),
        Some(Sentiment::Negative) => words(text).any(is_positive_word),
        _ => false,
    }
}

/// 고유 기능어 적중 수로 언어 판별
///
/// 적중 수가 가장 많은 언어 (동률이면 목록 순서), 두 언어 이상 적중하면 혼용
fn detect_language(text: &str) -> (Option<String>, bool) {
    let tokens: Vec<&str> = words(text).collect();
    let hits: Vec<(&str, usize)> = LANGUAGE_MARKERS
        .iter()
        .map(|(lang, markers)| {
            let count = tokens.iter().filter(|t| markers.contains(*t)).count();
            (*lang, count)
        })
        .collect();

    let mut best: Option<(&str, usize)> = None;
    for (lang, count) in &hits {
        if *count > 0 && best.map_or(true, |(_, c)| *count > c) {
            best = Some((lang, *count));
        }
    }
    let languages_hit = hits.iter().filter(|(_, c)| *c > 0).count();
    (best.map(|(lang, _)| lang.to_string()), languages_hit >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::preprocess;

    fn detect(text: &str) -> ComplexFeatures {
        detect_features(text, &preprocess(text).features)
    }

    #[test]
    fn test_sarcasm_quoted_with_ellipsis() {
        let f = detect("This is 'great'... another update that breaks everything");
        assert!(f.quoted_positive);
        assert_eq!(f.sarcasm_score, SARCASM_QUOTED + SARCASM_ELLIPSIS);
        assert!(f.strong_sarcasm());
    }

    #[test]
    fn test_sarcasm_capped() {
        let text = "Oh great, it was 'perfect'... but now it is terrible but I loooove it";
        assert_eq!(sarcasm_score(text), MAX_SARCASM_SCORE);
    }

    #[test]
    fn test_mild_sarcasm_from_elongation() {
        let f = detect("sooo tired");
        assert_eq!(f.sarcasm_score, SARCASM_ELONGATION);
        assert!(f.mild_sarcasm());
        assert!(f.has_typos);
    }

    #[test]
    fn test_plain_text_has_no_features() {
        let f = detect("The package arrived on Tuesday");
        assert_eq!(f.sarcasm_score, 0);
        assert!(!f.any());
        assert_eq!(f.detected_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_double_negation() {
        assert!(detect("I can't say I'm not impressed").double_negation);
        assert!(detect("I can’t say I’m not impressed").double_negation);
        assert!(detect("honestly not unhappy with it").double_negation);
        assert!(!detect("not under any circumstances").double_negation);
        assert!(!detect("I am not impressed").double_negation);
    }

    #[test]
    fn test_temporal_priority() {
        assert_eq!(
            detect("it was good, will be better tomorrow").temporal_context,
            Some(TemporalContext::Past)
        );
        assert_eq!(
            detect("it will ship soon").temporal_context,
            Some(TemporalContext::Future)
        );
        assert_eq!(detect("fine today").temporal_context, Some(TemporalContext::Present));
        assert_eq!(detect("fine").temporal_context, None);
    }

    #[test]
    fn test_past_contradiction() {
        let f = detect("the app was amazing but now it crashes");
        assert!(f.temporal_displacement);
        assert!(f.past_contradiction());
    }

    #[test]
    fn test_typos() {
        assert!(detect("this is grrrreat").has_typos);
        assert!(detect("wtf hppnd").has_typos);
        assert!(!detect("strengths and rhythm").has_typos);
    }

    #[test]
    fn test_contradictory_signals() {
        assert!(detect("terrible service 😍").contradictory_signals);
        assert!(detect("love it 😡").contradictory_signals);
        assert!(!detect("love it 😍").contradictory_signals);
    }

    #[test]
    fn test_cultural_context() {
        assert_eq!(
            detect("chuffed with the new kit").cultural_context,
            Some(CulturalContext::British)
        );
        assert_eq!(
            detect("heaps good arvo").cultural_context,
            Some(CulturalContext::Australian)
        );
    }

    #[test]
    fn test_language_detection() {
        let f = detect("el servicio es muy malo pero gracias");
        assert_eq!(f.detected_language.as_deref(), Some("es"));
        assert!(!f.mixed_language);

        let f = detect("the service est très bien, muy bueno");
        assert!(f.mixed_language);
    }
}
