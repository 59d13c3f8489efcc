//! 하이브리드 판정
//!
//! 규칙 기반 채점기와 나이브 베이즈의 의견을 병합하고,
//! 마지막으로 휴리스틱 판정 계층을 적용합니다.

pub mod combiner;
pub mod heuristics;
pub mod rule_based;

pub use combiner::{merge, CombinerConfig, HybridSentimentResult, MergedOpinion, Method};
pub use heuristics::{decide_with_heuristics, HeuristicConfig};
