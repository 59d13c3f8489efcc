//! 학습 예제 및 JSON 로드

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::Sentiment;

use super::model::ClassifierError;

/// 레이블이 붙은 학습 예제 (불변)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: Sentiment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: Sentiment) -> Self {
        Self {
            text: text.into(),
            label,
            language: None,
        }
    }

    /// 언어 코드 지정
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// JSON 배열 파일에서 학습 예제 로드
///
/// # 파일 형식
/// ```json
/// [
///   { "text": "love it", "label": "positive" },
///   { "text": "odio esto", "label": "negative", "language": "es" }
/// ]
/// ```
pub fn load_training_examples(path: impl AsRef<Path>) -> Result<Vec<TrainingExample>, ClassifierError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let examples = serde_json::from_reader(reader)?;
    Ok(examples)
}

/// JSON 문자열에서 학습 예제 파싱
pub fn parse_training_examples(json: &str) -> Result<Vec<TrainingExample>, ClassifierError> {
    Ok(serde_json::from_str(json)?)
}
