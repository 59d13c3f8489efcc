//! 엔진 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::classifier::ModelParameters;
use crate::hybrid::{CombinerConfig, HeuristicConfig};

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_PATH_ENV: &str = "SENTIMENT_CONFIG";

/// 설정 저장/로드 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 직렬화 실패: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 감성 분석 엔진 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    /// 나이브 베이즈 파라미터
    #[serde(default)]
    pub model: ModelParameters,
    /// 휴리스틱 판정 튜닝값
    #[serde(default)]
    pub heuristics: HeuristicConfig,
    /// 의견 병합 정책
    #[serde(default)]
    pub combiner: CombinerConfig,
}

impl EngineConfig {
    /// 휴리스틱 설정에 환경 변수 덮어쓰기 적용
    pub fn with_env_overrides(mut self) -> Self {
        self.heuristics = self.heuristics.with_env_overrides();
        self
    }
}

/// 설정 파일 경로: `$SENTIMENT_CONFIG` 또는 ~/.config/tweet-sentiment/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("tweet-sentiment").join("config.json")
}

/// 설정 파일 읽기 (에러 그대로 반환)
pub fn try_load_config(path: impl AsRef<Path>) -> Result<EngineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: impl AsRef<Path>) -> EngineConfig {
    let path = path.as_ref();
    match try_load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            EngineConfig::default()
        }
        Err(e) => {
            log::warn!("설정 파일 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            EngineConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(path: impl AsRef<Path>, config: &EngineConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tweet-sentiment-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.model.max_vocabulary_size, 10_000);
        assert!((config.heuristics.neutral_delta - 0.07).abs() < f64::EPSILON);
        assert!((config.combiner.nb_override_confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_backward_compat_missing_section() {
        // 이전 설정 파일에 heuristics/combiner가 없는 경우 기본값 사용
        let json = r#"{"model": {"enable_bigrams": true}}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert!(config.model.enable_bigrams);
        assert_eq!(config.model.min_word_length, 2);
        assert_eq!(config.heuristics, HeuristicConfig::default());
        assert_eq!(config.combiner, CombinerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("saved/config.json");
        let mut config = EngineConfig::default();
        config.heuristics.neutral_delta = 0.12;
        config.model.smoothing_factor = 0.5;
        save_config(&path, &config).unwrap();

        let loaded = load_config(&path);
        assert_eq!(loaded, config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_uses_default() {
        let config = load_config(temp_path("does-not-exist.json"));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_broken_file_uses_default() {
        let path = temp_path("broken.json");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path), EngineConfig::default());
        assert!(matches!(try_load_config(&path), Err(ConfigError::Serialization(_))));
        let _ = fs::remove_file(&path);
    }
}
