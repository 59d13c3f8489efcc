//! 복합 사례 처리기
//!
//! 풍자, 이중 부정, 시제 전환, 슬랭/오타, 신호 충돌처럼 단순 분류가
//! 틀리기 쉬운 입력을 찾아내 판정을 보정합니다.
//!
//! - [`detect_features`]: 원문에서 특징 탐지 (순수 함수)
//! - [`apply_corrections`]: 특징에 따른 레이블/신뢰도 보정
//! - [`analyze_complex_case`]: 분류기와 묶은 단독 분석 (실패하지 않음)

pub mod features;
pub mod handler;

pub use features::{detect_features, sarcasm_score, ComplexFeatures, TemporalContext};
pub use handler::{
    analyze_complex_case, apply_corrections, complexity_score, ComplexCaseError,
    EnhancedPrediction,
};
