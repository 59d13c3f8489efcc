//! 학습된 모델 스냅샷 (웜 스타트용)
//!
//! 어휘와 클래스 통계를 정수 그대로 담은 버전 있는 JSON 형식입니다.
//!
//! # 파일 형식
//! ```json
//! {
//!   "schema_version": 1,
//!   "parameters": { "smoothing_factor": 1.0, "min_word_length": 2, ... },
//!   "vocabulary": { "love": 0, "terrible": 1 },
//!   "class_statistics": {
//!     "positive": { "document_count": 3, "total_token_count": 5, "token_counts": { "love": 5 } },
//!     ...
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::core::Sentiment;

use super::config::ModelParameters;
use super::model::{ClassStatistics, ClassifierError};

/// 현재 스냅샷 스키마 버전
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// 직렬화 가능한 모델 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub schema_version: u32,
    pub parameters: ModelParameters,
    pub vocabulary: BTreeMap<String, usize>,
    pub class_statistics: BTreeMap<Sentiment, ClassStatistics>,
}

impl ModelSnapshot {
    /// JSON 문자열로 직렬화
    pub fn to_json(&self) -> Result<String, ClassifierError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON 문자열에서 로드 (버전/내용 검증 포함)
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let snapshot: ModelSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// 파일로 저장 (상위 디렉토리 생성)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ClassifierError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let snapshot: ModelSnapshot = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// 스키마 버전과 통계 일관성 검사
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.schema_version != SNAPSHOT_SCHEMA_VERSION {
            return Err(ClassifierError::UnsupportedSnapshotVersion {
                found: self.schema_version,
                expected: SNAPSHOT_SCHEMA_VERSION,
            });
        }

        let indices: HashSet<usize> = self.vocabulary.values().copied().collect();
        if indices.len() != self.vocabulary.len()
            || indices.iter().any(|&idx| idx >= self.vocabulary.len())
        {
            return Err(ClassifierError::InvalidSnapshot(
                "어휘 인덱스가 0..N 범위의 고유값이 아닙니다".into(),
            ));
        }

        let mut total_documents = 0u64;
        for (label, stats) in &self.class_statistics {
            total_documents += stats.document_count;
            if let Some(token) = stats
                .token_counts
                .keys()
                .find(|t| !self.vocabulary.contains_key(*t))
            {
                return Err(ClassifierError::InvalidSnapshot(format!(
                    "{} 클래스에 어휘 밖 토큰이 있습니다: {}",
                    label, token
                )));
            }
            let sum: u64 = stats.token_counts.values().sum();
            if sum != stats.total_token_count {
                return Err(ClassifierError::InvalidSnapshot(format!(
                    "{} 클래스 토큰 합계 불일치: {} != {}",
                    label, sum, stats.total_token_count
                )));
            }
        }

        if total_documents == 0 {
            return Err(ClassifierError::InvalidSnapshot("문서 수가 0입니다".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{NaiveBayesClassifier, TrainingExample};

    fn trained() -> NaiveBayesClassifier {
        let mut clf = NaiveBayesClassifier::new(ModelParameters::default());
        clf.train(&[
            TrainingExample::new("love this amazing phone", Sentiment::Positive),
            TrainingExample::new("terrible awful battery", Sentiment::Negative),
            TrainingExample::new("store opens at nine", Sentiment::Neutral),
        ])
        .unwrap();
        clf
    }

    #[test]
    fn test_snapshot_restores_identical_predictions() {
        let clf = trained();
        let snapshot = clf.snapshot().unwrap();
        let json = snapshot.to_json().unwrap();
        let restored_snapshot = ModelSnapshot::from_json(&json).unwrap();
        assert_eq!(restored_snapshot, snapshot);

        let restored = NaiveBayesClassifier::from_snapshot(restored_snapshot).unwrap();
        for text in ["love it", "awful battery", "opens nine", "unknown words"] {
            assert_eq!(clf.predict(text).unwrap(), restored.predict(text).unwrap());
        }
    }

    #[test]
    fn test_untrained_has_no_snapshot() {
        let clf = NaiveBayesClassifier::new(ModelParameters::default());
        assert!(clf.snapshot().is_none());
    }

    #[test]
    fn test_version_mismatch() {
        let mut snapshot = trained().snapshot().unwrap();
        snapshot.schema_version = 99;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(matches!(
            ModelSnapshot::from_json(&json),
            Err(ClassifierError::UnsupportedSnapshotVersion { found: 99, expected: 1 })
        ));
    }

    #[test]
    fn test_inconsistent_totals() {
        let mut snapshot = trained().snapshot().unwrap();
        if let Some(stats) = snapshot.class_statistics.get_mut(&Sentiment::Positive) {
            stats.total_token_count += 1;
        }
        assert!(matches!(
            snapshot.validate(),
            Err(ClassifierError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_class_keys_are_labels() {
        let json = trained().snapshot().unwrap().to_json().unwrap();
        assert!(json.contains("\"positive\""));
        assert!(json.contains("\"schema_version\": 1"));
    }
}
