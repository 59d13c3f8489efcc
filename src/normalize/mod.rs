//! 트윗 텍스트 정규화
//!
//! 슬랭/이모지/축약형을 감성 토큰으로 풀어 분류기와 규칙 기반 채점기가
//! 다루기 쉬운 형태로 바꿉니다.
//!
//! ```
//! use tweet_sentiment::normalize::preprocess;
//!
//! let result = preprocess("This product is fire, no cap");
//! assert!(result.features.has_slang);
//! assert!(result.normalized_text.contains("excellent amazing"));
//! ```

mod features;
mod preprocess;

pub use features::{FeatureBundle, MentionContext, Preprocessed};
pub use preprocess::{has_content, preprocess};
pub(crate) use preprocess::words;
