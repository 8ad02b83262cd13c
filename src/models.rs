//! Frontend Models
//!
//! Serde mirrors of the backend wire types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub content_id: Option<i32>,
    pub content_title: String,
    pub content_text: String,
    pub content_language: String,
    #[serde(default)]
    pub content_metadata: serde_json::Value,
    #[serde(default)]
    pub content_tags: Vec<i32>,
    #[serde(default)]
    pub positive_votes: i64,
    #[serde(default)]
    pub negative_votes: i64,
    #[serde(default)]
    pub created_datetime_utc: String,
    #[serde(default)]
    pub updated_datetime_utc: String,
}

/// Request body for content create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBody {
    pub content_title: String,
    pub content_text: String,
    pub content_language: String,
    pub content_metadata: serde_json::Value,
}

impl Content {
    pub fn body(&self) -> ContentBody {
        ContentBody {
            content_title: self.content_title.clone(),
            content_text: self.content_text.clone(),
            content_language: self.content_language.clone(),
            content_metadata: self.content_metadata.clone(),
        }
    }
}

/// Urgency rule record; `urgency_rule_id == None` is an unsaved draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyRule {
    pub urgency_rule_id: Option<i32>,
    pub urgency_rule_text: String,
    #[serde(default)]
    pub created_datetime_utc: String,
    #[serde(default)]
    pub updated_datetime_utc: String,
}

impl UrgencyRule {
    /// Locally-created draft, not yet persisted
    pub fn draft() -> Self {
        Self {
            urgency_rule_id: None,
            urgency_rule_text: String::new(),
            created_datetime_utc: String::new(),
            updated_datetime_utc: String::new(),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.urgency_rule_id.is_none()
    }
}

/// Tag (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub tag_id: i32,
    pub tag_name: String,
}

/// Response from POST /login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default = "default_access_level")]
    pub access_level: String,
}

fn default_access_level() -> String {
    "readonly".to_string()
}

/// One retrieved match from the embeddings search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub retrieved_title: String,
    pub retrieved_text: String,
}

/// Response from POST /embeddings-search, keyed by result rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub content_response: BTreeMap<String, SearchResult>,
    #[serde(default)]
    pub debug_info: serde_json::Value,
}

/// Response from POST /llm-response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub llm_response: Option<String>,
    #[serde(default)]
    pub debug_info: serde_json::Value,
}

/// Response from POST /urgency-detect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyDetection {
    pub is_urgent: Option<bool>,
    #[serde(default)]
    pub matched_rules: Vec<String>,
}

/// Dashboard reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Last 24 hours",
            Period::Week => "Last week",
            Period::Month => "Last month",
            Period::Year => "Last year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryStats {
    pub n_questions: i64,
    pub percentage_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseFeedbackStats {
    pub n_positive: i64,
    pub n_negative: i64,
    pub percentage_positive_increase: f64,
    pub percentage_negative_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentFeedbackStats {
    pub n_positive: i64,
    pub n_negative: i64,
    pub percentage_positive_increase: f64,
    pub percentage_negative_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UrgencyStats {
    pub n_urgent: i64,
    pub percentage_increase: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsCards {
    pub query_stats: QueryStats,
    pub response_feedback_stats: ResponseFeedbackStats,
    pub content_feedback_stats: ContentFeedbackStats,
    pub urgency_stats: UrgencyStats,
}

/// Query volume split by urgency over the period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub urgent: BTreeMap<String, f64>,
    pub not_urgent_escalated: BTreeMap<String, f64>,
    pub not_urgent_not_escalated: BTreeMap<String, f64>,
}

/// Response from GET /dashboard/overview/{period}
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub stats_cards: StatsCards,
    /// hour -> day -> query count
    pub heatmap: BTreeMap<String, BTreeMap<String, f64>>,
    pub time_series: TimeSeries,
}
