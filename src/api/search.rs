//! Playground Commands
//!
//! Search, LLM, and urgency-detection queries used by the playground page.

use serde::Serialize;

use crate::models::{LlmResponse, SearchResponse, UrgencyDetection};

#[derive(Serialize)]
struct QueryBody<'a> {
    query_text: &'a str,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message_text: &'a str,
}

pub async fn embeddings_search(query: &str, token: &str) -> Result<SearchResponse, String> {
    let body = QueryBody { query_text: query };
    super::send_json("POST", "/embeddings-search", token, &body)
        .await
        .map_err(|e| format!("Error fetching embeddings response: {e}"))
}

pub async fn llm_response(query: &str, token: &str) -> Result<LlmResponse, String> {
    let body = QueryBody { query_text: query };
    super::send_json("POST", "/llm-response", token, &body)
        .await
        .map_err(|e| format!("Error fetching llm response: {e}"))
}

pub async fn urgency_detect(message: &str, token: &str) -> Result<UrgencyDetection, String> {
    let body = MessageBody {
        message_text: message,
    };
    super::send_json("POST", "/urgency-detect", token, &body)
        .await
        .map_err(|e| format!("Error fetching urgency detection response: {e}"))
}
