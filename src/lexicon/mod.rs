//! 어휘/패턴 저장소
//!
//! 정규화기, 규칙 기반 채점기, 복합 사례 처리기가 공유하는 정적 테이블입니다.
//! 로직 없이 데이터만 담습니다.

pub mod emoji;
pub mod patterns;
pub mod slang;
pub mod words;

pub use emoji::{tally_emoji, EmojiTally};
pub use patterns::CulturalContext;
