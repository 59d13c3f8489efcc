//! 나이브 베이즈 모델 파라미터
//!
//! 학습과 예측에 쓰이는 설정값 정의

use serde::{Deserialize, Serialize};

/// 나이브 베이즈 학습/예측 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Laplace/Lidstone 스무딩 상수
    /// 모든 토큰 빈도에 더해 0 확률을 막음 (0보다 커야 함)
    #[serde(default = "default_smoothing_factor")]
    pub smoothing_factor: f64,

    /// 이보다 짧은 토큰은 버림 (문자 수 기준)
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// 어휘 최대 크기
    /// 빈도 순으로 잘라내며, 잘린 토큰은 예측 시 미등록 토큰으로 취급
    #[serde(default = "default_max_vocabulary_size")]
    pub max_vocabulary_size: usize,

    /// 인접 토큰 쌍(바이그램) 특징 추가 여부
    #[serde(default)]
    pub enable_bigrams: bool,

    /// 어휘에 포함될 최소 전체 빈도
    #[serde(default = "default_min_word_frequency")]
    pub min_word_frequency: u64,
}

fn default_smoothing_factor() -> f64 {
    1.0
}

fn default_min_word_length() -> usize {
    2
}

fn default_max_vocabulary_size() -> usize {
    10_000
}

fn default_min_word_frequency() -> u64 {
    1
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            smoothing_factor: default_smoothing_factor(),
            min_word_length: default_min_word_length(),
            max_vocabulary_size: default_max_vocabulary_size(),
            enable_bigrams: false,
            min_word_frequency: default_min_word_frequency(),
        }
    }
}

impl ModelParameters {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 스무딩 상수 설정
    pub fn with_smoothing(mut self, factor: f64) -> Self {
        self.smoothing_factor = factor;
        self
    }

    /// 최소 토큰 길이 설정
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// 어휘 최대 크기 설정
    pub fn with_max_vocabulary_size(mut self, size: usize) -> Self {
        self.max_vocabulary_size = size;
        self
    }

    /// 바이그램 사용 여부 설정
    pub fn with_bigrams(mut self, enabled: bool) -> Self {
        self.enable_bigrams = enabled;
        self
    }

    /// 최소 빈도 설정
    pub fn with_min_word_frequency(mut self, freq: u64) -> Self {
        self.min_word_frequency = freq;
        self
    }

    /// 설정값 검증 (문제가 있으면 설명 문자열)
    pub fn validate(&self) -> Result<(), String> {
        if !self.smoothing_factor.is_finite() || self.smoothing_factor <= 0.0 {
            return Err(format!(
                "smoothing_factor는 0보다 큰 유한값이어야 합니다: {}",
                self.smoothing_factor
            ));
        }
        if self.max_vocabulary_size == 0 {
            return Err("max_vocabulary_size는 1 이상이어야 합니다".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = ModelParameters::default();
        assert!((params.smoothing_factor - 1.0).abs() < f64::EPSILON);
        assert_eq!(params.min_word_length, 2);
        assert_eq!(params.max_vocabulary_size, 10_000);
        assert!(!params.enable_bigrams);
        assert_eq!(params.min_word_frequency, 1);
    }

    #[test]
    fn test_builder_pattern() {
        let params = ModelParameters::new()
            .with_smoothing(0.5)
            .with_min_word_length(3)
            .with_max_vocabulary_size(100)
            .with_bigrams(true)
            .with_min_word_frequency(2);

        assert!((params.smoothing_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.min_word_length, 3);
        assert_eq!(params.max_vocabulary_size, 100);
        assert!(params.enable_bigrams);
        assert_eq!(params.min_word_frequency, 2);
    }

    #[test]
    fn test_validate() {
        assert!(ModelParameters::default().validate().is_ok());
        assert!(ModelParameters::new().with_smoothing(0.0).validate().is_err());
        assert!(ModelParameters::new().with_smoothing(f64::NAN).validate().is_err());
        assert!(ModelParameters::new().with_max_vocabulary_size(0).validate().is_err());
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"smoothing_factor": 0.5}"#;
        let params: ModelParameters = serde_json::from_str(json).unwrap();
        assert!((params.smoothing_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.max_vocabulary_size, 10_000);
    }
}
