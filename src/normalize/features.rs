//! 정규화 과정에서 수집되는 특징 묶음

use serde::{Deserialize, Serialize};

use crate::core::Sentiment;

/// `@mention`이 놓인 문맥
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionContext {
    Complaint,
    Praise,
    Neutral,
}

impl MentionContext {
    /// 멘션을 치환할 정규 토큰
    pub fn canonical_token(&self) -> &'static str {
        match self {
            MentionContext::Complaint => "customer_service_complaint",
            MentionContext::Praise => "brand_mention_positive",
            MentionContext::Neutral => "brand_mention",
        }
    }
}

/// 정규화 특징 (호출마다 새로 계산, 저장하지 않음)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureBundle {
    /// 슬랭 관용구/단어가 하나라도 치환되었는지
    pub has_slang: bool,
    /// 이모지 감성 (알려진 이모지가 없으면 None)
    pub emoji_sentiment: Option<Sentiment>,
    /// 강조어 등장 횟수 (중복 포함)
    pub intensifier_count: usize,
    /// 멘션 문맥 (멘션이 없으면 None)
    pub mention_context: Option<MentionContext>,
}

/// 정규화 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessed {
    pub normalized_text: String,
    pub features: FeatureBundle,
}
