//! 하이브리드 감성 분석 엔진
//!
//! 학습된 분류기와 설정을 소유하는 유일한 상태 객체입니다.
//! 전역 상태 없이 호출자가 직접 생성해 주입합니다.
//!
//! 분석 흐름:
//! 1. 정규화 (특징 묶음 수집)
//! 2. 규칙 기반 채점 + 나이브 베이즈 예측
//! 3. 의견 병합
//! 4. 복합 사례 보정 (원문 기준)
//! 5. 휴리스틱 판정

use rayon::prelude::*;
use std::sync::{Arc, Mutex, RwLock};

use crate::classifier::{ClassifierError, ModelSnapshot, NaiveBayesClassifier, TrainingExample};
use crate::complex::{self, apply_corrections, complexity_score, detect_features, EnhancedPrediction};
use crate::config::EngineConfig;
use crate::core::SentimentResult;
use crate::hybrid::{decide_with_heuristics, merge, rule_based, HybridSentimentResult};
use crate::normalize::{has_content, preprocess};

/// 감성 분석 엔진
///
/// `train()`/`restore()`는 한 번에 하나만 실행되며, 새 모델을 따로 만든 뒤
/// 쓰기 잠금 아래에서 교체합니다. 동시에 실행 중인 `analyze()`는 이전 모델이나
/// 새 모델 중 하나만 보게 됩니다.
#[derive(Debug)]
pub struct SentimentEngine {
    config: EngineConfig,
    classifier: RwLock<Arc<NaiveBayesClassifier>>,
    train_lock: Mutex<()>,
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SentimentEngine {
    /// 학습되지 않은 엔진 생성
    pub fn new(config: EngineConfig) -> Self {
        let classifier = NaiveBayesClassifier::new(config.model.clone());
        Self {
            config,
            classifier: RwLock::new(Arc::new(classifier)),
            train_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 현재 분류기 (학습 중에도 이전 모델을 그대로 반환)
    pub fn classifier(&self) -> Arc<NaiveBayesClassifier> {
        let guard = self.classifier.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn is_trained(&self) -> bool {
        self.classifier().is_trained()
    }

    /// 예제로 새 모델을 학습해 교체 (실패 시 기존 모델 유지)
    pub fn train(&self, examples: &[TrainingExample]) -> Result<(), ClassifierError> {
        let _training = self.train_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut next = NaiveBayesClassifier::new(self.config.model.clone());
        next.train(examples)?;
        self.swap(next);
        Ok(())
    }

    /// 스냅샷에서 모델 복원 (웜 스타트)
    pub fn restore(&self, snapshot: ModelSnapshot) -> Result<(), ClassifierError> {
        let _training = self.train_lock.lock().unwrap_or_else(|e| e.into_inner());
        let next = NaiveBayesClassifier::from_snapshot(snapshot)?;
        log::info!("스냅샷에서 모델 복원: 어휘 {}개", next.vocabulary_size());
        self.swap(next);
        Ok(())
    }

    /// 현재 모델 스냅샷 (학습 전이면 None)
    pub fn snapshot(&self) -> Option<ModelSnapshot> {
        self.classifier().snapshot()
    }

    fn swap(&self, next: NaiveBayesClassifier) {
        let mut guard = self.classifier.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(next);
    }

    /// 텍스트 하나 분석
    ///
    /// 실패하지 않습니다. 영숫자나 알려진 이모지가 없는 입력은 중립/신뢰도 0,
    /// 분류기가 학습 전이면 규칙 기반 의견만으로 판정합니다.
    pub fn analyze(&self, text: &str) -> HybridSentimentResult {
        if !has_content(text) {
            return HybridSentimentResult::empty();
        }

        let classifier = self.classifier();
        let preprocessed = preprocess(text);

        let rule = rule_based::score(&preprocessed.normalized_text, &preprocessed.features);
        let nb = match classifier.predict(&preprocessed.normalized_text) {
            Ok(prediction) => Some(prediction),
            Err(err) => {
                log::warn!("나이브 베이즈 사용 불가, 규칙 기반으로 판정: {}", err);
                None
            }
        };

        let merged = merge(rule, nb, &self.config.combiner);
        let mut reasoning = vec![format!("병합 방식: {}", merged.method)];

        let complex_features = detect_features(text, &preprocessed.features);
        let corrected = match apply_corrections(merged.prediction, &complex_features) {
            Ok(corrected) => corrected,
            Err(err) => {
                log::warn!("복합 사례 보정 실패, 병합 결과 사용: {}", err);
                EnhancedPrediction {
                    sentiment: SentimentResult::from_prediction(merged.prediction, Vec::new()),
                    complexity_score: complexity_score(&complex_features),
                    features: complex_features.clone(),
                    fallback_used: true,
                }
            }
        };
        reasoning.extend(corrected.sentiment.reasoning);

        let decided = decide_with_heuristics(
            &preprocessed.normalized_text,
            corrected.sentiment.scores,
            &self.config.heuristics,
        );
        reasoning.extend(decided.reasoning);

        log::debug!(
            "분석 완료: {} ({:.3}, {})",
            decided.label,
            decided.confidence,
            merged.method
        );

        HybridSentimentResult {
            sentiment: SentimentResult {
                label: decided.label,
                confidence: decided.confidence,
                scores: decided.scores,
                reasoning,
            },
            method: merged.method,
            hybrid_score: merged.hybrid_score,
            complexity_score: corrected.complexity_score,
            features: preprocessed.features,
            complex_features,
        }
    }

    /// 여러 텍스트를 병렬 분석 (출력 순서 = 입력 순서)
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<HybridSentimentResult>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// 분류기와 복합 사례 처리기만으로 분석
    pub fn analyze_complex_case(&self, text: &str) -> EnhancedPrediction {
        complex::analyze_complex_case(text, &self.classifier())
    }
}
