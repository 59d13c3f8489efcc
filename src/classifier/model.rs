//! 나이브 베이즈 학습 및 예측
//!
//! 클래스별 토큰 빈도를 세어 어휘를 만들고,
//! Lidstone 스무딩을 적용한 로그 확률로 감성 분포를 계산합니다.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::core::{Prediction, Sentiment, SentimentScores};

use super::config::ModelParameters;
use super::dataset::TrainingExample;
use super::snapshot::{ModelSnapshot, SNAPSHOT_SCHEMA_VERSION};
use super::tokenizer::tokenize;

/// 분류기 학습/예측/스냅샷 에러
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// 학습 데이터 없음 (부트스트랩 중단 사유)
    #[error("학습 데이터가 비어 있습니다")]
    EmptyDataset,
    /// 학습 전에 예측 요청
    #[error("모델이 아직 학습되지 않았습니다")]
    UntrainedModel,
    /// 잘못된 모델 파라미터
    #[error("잘못된 모델 파라미터: {0}")]
    InvalidParameters(String),
    /// 지원하지 않는 스냅샷 버전
    #[error("지원하지 않는 스냅샷 버전: {found} (expected {expected})")]
    UnsupportedSnapshotVersion { found: u32, expected: u32 },
    /// 스냅샷 내용 불일치
    #[error("스냅샷 형식 오류: {0}")]
    InvalidSnapshot(String),
    /// 파일 읽기/쓰기 실패
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 직렬화 실패
    #[error("JSON 직렬화 오류: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 클래스별 학습 통계
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStatistics {
    /// 해당 클래스 문서 수
    pub document_count: u64,
    /// 해당 클래스의 어휘 내 토큰 총 수
    pub total_token_count: u64,
    /// 토큰별 빈도 (어휘 내 토큰만)
    pub token_counts: BTreeMap<String, u64>,
}

/// 학습이 끝난 불변 모델
#[derive(Debug, Clone)]
struct TrainedModel {
    vocabulary: HashMap<String, usize>,
    stats: BTreeMap<Sentiment, ClassStatistics>,
    total_documents: u64,
}

/// 나이브 베이즈 감성 분류기
///
/// `train()`은 모든 통계를 통째로 다시 만듭니다 (증분 학습 없음).
/// 학습이 끝난 뒤의 `predict()`는 `&self`만 필요하므로 여러 스레드에서
/// 동시에 호출할 수 있습니다.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesClassifier {
    params: ModelParameters,
    model: Option<TrainedModel>,
}

impl NaiveBayesClassifier {
    /// 학습되지 않은 분류기 생성
    pub fn new(params: ModelParameters) -> Self {
        Self {
            params,
            model: None,
        }
    }

    /// 레이블이 붙은 예제로 학습
    ///
    /// 실패하면 기존 모델은 그대로 유지됩니다.
    pub fn train(&mut self, examples: &[TrainingExample]) -> Result<(), ClassifierError> {
        if examples.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }
        self.params
            .validate()
            .map_err(ClassifierError::InvalidParameters)?;

        let mut doc_counts: BTreeMap<Sentiment, u64> = BTreeMap::new();
        let mut class_tokens: BTreeMap<Sentiment, HashMap<String, u64>> = BTreeMap::new();
        let mut total_freq: HashMap<String, u64> = HashMap::new();

        for example in examples {
            *doc_counts.entry(example.label).or_insert(0) += 1;
            let counts = class_tokens.entry(example.label).or_default();
            for token in tokenize(&example.text, &self.params) {
                *total_freq.entry(token.clone()).or_insert(0) += 1;
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let vocabulary = build_vocabulary(total_freq, &self.params);

        let mut stats = BTreeMap::new();
        for label in Sentiment::ALL {
            let document_count = doc_counts.get(&label).copied().unwrap_or(0);
            let token_counts: BTreeMap<String, u64> = class_tokens
                .remove(&label)
                .unwrap_or_default()
                .into_iter()
                .filter(|(token, _)| vocabulary.contains_key(token))
                .collect();
            let total_token_count = token_counts.values().sum();
            stats.insert(
                label,
                ClassStatistics {
                    document_count,
                    total_token_count,
                    token_counts,
                },
            );
        }

        log::info!(
            "나이브 베이즈 학습 완료: 문서 {}개, 어휘 {}개 (긍정 {}, 부정 {}, 중립 {})",
            examples.len(),
            vocabulary.len(),
            doc_counts.get(&Sentiment::Positive).copied().unwrap_or(0),
            doc_counts.get(&Sentiment::Negative).copied().unwrap_or(0),
            doc_counts.get(&Sentiment::Neutral).copied().unwrap_or(0),
        );

        self.model = Some(TrainedModel {
            vocabulary,
            stats,
            total_documents: examples.len() as u64,
        });
        Ok(())
    }

    /// 텍스트의 감성 분포 예측
    ///
    /// - 공백뿐인 텍스트: 중립, 균등 분포, 신뢰도 0
    /// - 어휘 내 토큰이 하나도 없는 텍스트: 클래스 사전확률 그대로
    /// - 미등록 토큰은 건너뜀 (패널티 없음)
    pub fn predict(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let model = self.model.as_ref().ok_or(ClassifierError::UntrainedModel)?;

        if text.trim().is_empty() {
            return Ok(Prediction::empty());
        }

        let tokens = tokenize(text, &self.params);
        let alpha = self.params.smoothing_factor;
        let vocab_size = model.vocabulary.len() as f64;

        let log_probs = Sentiment::ALL.map(|label| {
            let stats = match model.stats.get(&label) {
                Some(s) if s.document_count > 0 => s,
                _ => return f64::NEG_INFINITY,
            };
            let prior = stats.document_count as f64 / model.total_documents as f64;
            let denominator = stats.total_token_count as f64 + alpha * vocab_size;

            let mut log_prob = prior.ln();
            for token in tokens.iter().filter(|t| model.vocabulary.contains_key(*t)) {
                let count = stats.token_counts.get(token).copied().unwrap_or(0) as f64;
                log_prob += ((count + alpha) / denominator).ln();
            }
            log_prob
        });

        Ok(Prediction::from_scores(softmax(log_probs)))
    }

    /// 여러 텍스트를 병렬 예측 (출력 순서 = 입력 순서)
    pub fn predict_batch<S>(&self, texts: &[S]) -> Vec<Result<Prediction, ClassifierError>>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.predict(t.as_ref())).collect()
    }

    /// 학습 여부
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// 모델 파라미터
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// 어휘 크기 (학습 전이면 0)
    pub fn vocabulary_size(&self) -> usize {
        self.model.as_ref().map(|m| m.vocabulary.len()).unwrap_or(0)
    }

    /// 어휘에 포함된 토큰인지
    pub fn contains_token(&self, token: &str) -> bool {
        self.model
            .as_ref()
            .map(|m| m.vocabulary.contains_key(token))
            .unwrap_or(false)
    }

    /// 클래스별 문서 수
    pub fn document_count(&self, label: Sentiment) -> u64 {
        self.class_statistics(label)
            .map(|s| s.document_count)
            .unwrap_or(0)
    }

    /// 클래스 사전확률 (학습 전이면 None)
    pub fn prior(&self, label: Sentiment) -> Option<f64> {
        let model = self.model.as_ref()?;
        let count = model.stats.get(&label).map(|s| s.document_count).unwrap_or(0);
        Some(count as f64 / model.total_documents as f64)
    }

    /// 클래스별 통계
    pub fn class_statistics(&self, label: Sentiment) -> Option<&ClassStatistics> {
        self.model.as_ref().and_then(|m| m.stats.get(&label))
    }

    /// 웜 스타트용 스냅샷 (학습 전이면 None)
    pub fn snapshot(&self) -> Option<ModelSnapshot> {
        let model = self.model.as_ref()?;
        Some(ModelSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            parameters: self.params.clone(),
            vocabulary: model
                .vocabulary
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
            class_statistics: model.stats.clone(),
        })
    }

    /// 스냅샷에서 학습된 분류기 복원
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self, ClassifierError> {
        snapshot.validate()?;
        snapshot
            .parameters
            .validate()
            .map_err(ClassifierError::InvalidParameters)?;

        let total_documents = snapshot
            .class_statistics
            .values()
            .map(|s| s.document_count)
            .sum();

        let mut stats = snapshot.class_statistics;
        for label in Sentiment::ALL {
            stats.entry(label).or_default();
        }

        Ok(Self {
            params: snapshot.parameters,
            model: Some(TrainedModel {
                vocabulary: snapshot.vocabulary.into_iter().collect(),
                stats,
                total_documents,
            }),
        })
    }
}

/// 빈도 순 어휘 구성 (동률은 토큰 사전순)
fn build_vocabulary(total_freq: HashMap<String, u64>, params: &ModelParameters) -> HashMap<String, usize> {
    let mut ranked: Vec<(String, u64)> = total_freq
        .into_iter()
        .filter(|(_, freq)| *freq >= params.min_word_frequency)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(params.max_vocabulary_size);
    ranked
        .into_iter()
        .enumerate()
        .map(|(idx, (token, _))| (token, idx))
        .collect()
}

/// 로그 확률 → 정규화된 분포 (최댓값을 빼서 수치 안정화)
fn softmax(log_probs: [f64; 3]) -> SentimentScores {
    let max = log_probs
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return SentimentScores::uniform();
    }
    let exps = log_probs.map(|lp| if lp.is_finite() { (lp - max).exp() } else { 0.0 });
    let total: f64 = exps.iter().sum();
    SentimentScores::new(exps[0] / total, exps[1] / total, exps[2] / total)
}
