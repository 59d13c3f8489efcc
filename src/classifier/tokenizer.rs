//! 분류기 토크나이저
//!
//! 학습과 예측에 동일하게 적용됩니다.

use super::config::ModelParameters;

/// 텍스트를 토큰 목록으로 분리
///
/// 소문자화 → 아포스트로피 제거, 나머지 구두점은 공백 처리 → 공백 분리 →
/// `min_word_length`보다 짧은 토큰 제거 → (설정 시) 인접 바이그램 추가
pub fn tokenize(text: &str, params: &ModelParameters) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                Some(c)
            } else if c == '\'' || c == '’' {
                None
            } else {
                Some(' ')
            }
        })
        .collect();

    let mut tokens: Vec<String> = cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= params.min_word_length)
        .map(str::to_string)
        .collect();

    if params.enable_bigrams && tokens.len() > 1 {
        let bigrams: Vec<String> = tokens
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect();
        tokens.extend(bigrams);
    }

    tokens
}
