//! 복합 사례 탐지용 정규식 계열
//!
//! 풍자, 이중 부정, 시제, 문화권 슬랭 패턴을 정의합니다.
//! 모든 패턴은 소문자화된 텍스트(아포스트로피는 `'`로 통일)에 적용합니다.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::words::{NEGATIVE_WORD_LIST, POSITIVE_ADJECTIVES, POSITIVE_WORD_LIST};

fn compile(src: &str) -> Regex {
    Regex::new(src).expect("static pattern")
}

fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.map(regex::escape).collect::<Vec<_>>().join("|")
}

static POSITIVE_ADJ_ALT: LazyLock<String> =
    LazyLock::new(|| alternation(POSITIVE_ADJECTIVES.iter().copied()));

/// 따옴표 안의 긍정 형용사: `'great'`, `"perfect"`
pub static QUOTED_POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r#"["'“‘]\s*(?:{})\s*[!.]*\s*["'”’]"#,
        *POSITIVE_ADJ_ALT
    ))
});

/// 한 문장 안에서 긍정어 … 역접 … 부정어
pub static EXPLICIT_CONTRADICTION: LazyLock<Regex> = LazyLock::new(|| {
    let pos = alternation(POSITIVE_WORD_LIST.iter().map(|(w, _)| *w));
    let neg = alternation(NEGATIVE_WORD_LIST.iter().map(|(w, _)| *w));
    compile(&format!(
        r"\b(?:{})\b[^.!?]*\b(?:but|however|though|although|yet)\b[^.!?]*\b(?:{})\b",
        pos, neg
    ))
});

/// "was X but now Y" 형태의 시간적 전환
pub static TEMPORAL_DISPLACEMENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:was|were|used\s+to\s+be)\b[^.!?]*\b(?:but|and)\s+now\b")
});

/// 상투적인 반어 도입부
pub static IRONIC_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:oh\s+(?:great|wonderful|perfect|joy|fantastic|lovely|sure)|just\s+(?:perfect|great|wonderful|what\s+i\s+needed)|thanks\s+a\s+lot|yeah\s+right|wow\s+thanks|nice\s+going|how\s+lovely|what\s+a\s+surprise)\b",
    )
});

/// 긍정어 바로 뒤의 말줄임표
pub static POSITIVE_ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r#"\b(?:{})\b["'”’]?\s*(?:\.{{3,}}|…)"#,
        *POSITIVE_ADJ_ALT
    ))
});

/// 가짜 열광: 기대 표현 뒤에 불만 요소
pub static FAKE_ENTHUSIASM: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:can'?t\s+wait|so\s+excited|love\s+(?:it\s+)?(?:when|how)|nothing\s+like|my\s+favou?rite\s+thing|thrilled)\b[^.!?]*\b(?:again|another|broken|breaks|crash(?:es|ed)?|delay(?:ed|s)?|fail(?:s|ed)?|stuck|lost|cancel+ed|waiting|hours)\b",
    )
});

/// 느낌표로 강조한 긍정 뒤 곧바로 비판 접속사
pub static EXCLAIMED_THEN_CRITICAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(?:{})\s*!+\s*(?:but|except|however|although|not)\b",
        *POSITIVE_ADJ_ALT
    ))
});

/// 이중 부정 패턴 계열
///
/// 캡처 그룹 1이 있으면 부정 접두어가 붙은 단어 (예외 목록 검사용)
pub static DOUBLE_NEGATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:can'?t|cannot|can\s+not|couldn'?t)\s+say\s+(?:that\s+)?(?:i'?m|i\s+am|it'?s|it\s+is|that'?s|this\s+is|it\s+was|i\s+was)\s+not\b",
        r"\bnot\s+(un-?[a-z]{3,})",
        r"\b(?:don'?t|do\s+not|didn'?t|did\s+not|never)\s+(?:dislike|hate|regret)\b",
        r"\b(?:not|never)\s+(?:unhappy|unimpressed|disappointed|dissatisfied)\b",
    ]
    .iter()
    .map(|src| compile(src))
    .collect()
});

/// "not un-" 패턴에서 제외할 단어 접두 (부정 접두어가 아닌 un-)
pub const UN_PREFIX_EXCEPTIONS: &[&str] = &["under", "until", "unless", "uni", "unit"];

pub static TEMPORAL_PAST: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:was|were|used\s+to|had\s+been|previously|back\s+then|last\s+(?:year|month|week|time)|yesterday|before)\b",
    )
});

pub static TEMPORAL_FUTURE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:will|going\s+to|gonna|tomorrow|next\s+(?:week|month|year|time)|soon|someday)\b")
});

pub static TEMPORAL_PRESENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:now|today|currently|these\s+days|anymore|nowadays)\b")
});

/// 문화권 슬랭 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulturalContext {
    GenZ,
    British,
    Australian,
}

/// 문화권별 슬랭 패턴 (우선순위 순)
pub static CULTURAL_SLANG: LazyLock<Vec<(CulturalContext, Regex)>> = LazyLock::new(|| {
    vec![
        (
            CulturalContext::GenZ,
            compile(
                r"\b(?:no\s+cap|fr\s+fr|bussin|slay(?:ed|ing)?|periodt?|it'?s\s+giving|rizz|lowkey|highkey|deadass|fire|lit|goat|mid|based|vibes?|sus)\b",
            ),
        ),
        (
            CulturalContext::British,
            compile(r"\b(?:brilliant|cheers|gutted|chuffed|bloody|rubbish|innit|mate|proper|knackered|gobsmacked)\b"),
        ),
        (
            CulturalContext::Australian,
            compile(r"\b(?:heaps\s+good|arvo|reckon|stoked|ripper|bonza|no\s+worries)\b"),
        ),
    ]
});

/// 부정어 탐지 (휴리스틱 판정용, 축약형 포함)
pub static NEGATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(?:not|no|never|cannot|can'?t|don'?t|doesn'?t|didn'?t|isn'?t|wasn'?t|aren'?t|weren'?t|won'?t|wouldn'?t|shouldn'?t|couldn'?t|ain'?t|nothing|nobody|neither|nor)\b",
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_positive() {
        assert!(QUOTED_POSITIVE.is_match("this is 'great'... another update"));
        assert!(QUOTED_POSITIVE.is_match("such a \"perfect\" day"));
        assert!(!QUOTED_POSITIVE.is_match("this is great"));
    }

    #[test]
    fn test_contradiction_stays_in_sentence() {
        assert!(EXPLICIT_CONTRADICTION.is_match("the screen is great but the battery is terrible"));
        assert!(!EXPLICIT_CONTRADICTION.is_match("the screen is great. but the battery is terrible"));
    }

    #[test]
    fn test_temporal_displacement() {
        assert!(TEMPORAL_DISPLACEMENT.is_match("it was amazing but now it lags"));
        assert!(!TEMPORAL_DISPLACEMENT.is_match("it is amazing now"));
    }

    #[test]
    fn test_positive_ellipsis() {
        assert!(POSITIVE_ELLIPSIS.is_match("'great'... another"));
        assert!(POSITIVE_ELLIPSIS.is_match("perfect…"));
        assert!(!POSITIVE_ELLIPSIS.is_match("perfect."));
    }

    #[test]
    fn test_double_negation_family() {
        let hit = |s: &str| DOUBLE_NEGATION.iter().any(|re| re.is_match(s));
        assert!(hit("i can't say i'm not impressed"));
        assert!(hit("honestly not un-impressive"));
        assert!(hit("i don't hate it"));
        assert!(!hit("i am not impressed"));
    }

    #[test]
    fn test_cultural_priority() {
        let first = CULTURAL_SLANG
            .iter()
            .find(|(_, re)| re.is_match("proper fire, no cap"))
            .map(|(ctx, _)| *ctx);
        assert_eq!(first, Some(CulturalContext::GenZ));
    }

    #[test]
    fn test_negation() {
        assert!(NEGATION.is_match("i can't believe it"));
        assert!(NEGATION.is_match("this is not fine"));
        assert!(!NEGATION.is_match("nothingness knows"));
    }
}
