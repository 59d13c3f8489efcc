//! 공통 타입: 감성 레이블, 점수 분포, 결과

pub mod result;
pub mod sentiment;

pub use result::{Prediction, SentimentResult};
pub use sentiment::{Sentiment, SentimentScores, SCORE_TOLERANCE};
