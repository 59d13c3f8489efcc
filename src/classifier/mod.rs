//! 나이브 베이즈 감성 분류기
//!
//! 정규화된 텍스트를 토큰으로 나누고, 레이블이 붙은 예제에서 세어둔
//! 클래스별 토큰 빈도로 긍정/부정/중립 분포를 계산합니다.
//!
//! # 사용 예시
//! ```
//! use tweet_sentiment::classifier::{ModelParameters, NaiveBayesClassifier, TrainingExample};
//! use tweet_sentiment::Sentiment;
//!
//! let mut clf = NaiveBayesClassifier::new(ModelParameters::default());
//! clf.train(&[
//!     TrainingExample::new("love this", Sentiment::Positive),
//!     TrainingExample::new("hate this", Sentiment::Negative),
//! ]).unwrap();
//! assert_eq!(clf.predict("love").unwrap().label, Sentiment::Positive);
//! ```

pub mod config;
pub mod dataset;
pub mod model;
pub mod snapshot;
pub mod tokenizer;

pub use config::ModelParameters;
pub use dataset::{load_training_examples, parse_training_examples, TrainingExample};
pub use model::{ClassStatistics, ClassifierError, NaiveBayesClassifier};
pub use snapshot::{ModelSnapshot, SNAPSHOT_SCHEMA_VERSION};
pub use tokenizer::tokenize;
