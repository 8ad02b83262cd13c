//! Urgency Rule Commands

use serde::Serialize;

use crate::models::UrgencyRule;

#[derive(Serialize)]
struct UrgencyRuleBody<'a> {
    urgency_rule_text: &'a str,
}

pub async fn get_urgency_rule_list(token: &str) -> Result<Vec<UrgencyRule>, String> {
    super::get_json("/urgency-rules/", token)
        .await
        .map_err(|e| format!("Error fetching urgency rule list: {e}"))
}

pub async fn add_urgency_rule(rule_text: &str, token: &str) -> Result<UrgencyRule, String> {
    let body = UrgencyRuleBody {
        urgency_rule_text: rule_text,
    };
    super::send_json("POST", "/urgency-rules/", token, &body)
        .await
        .map_err(|e| format!("Error adding urgency rule: {e}"))
}

pub async fn update_urgency_rule(
    rule_id: i32,
    rule_text: &str,
    token: &str,
) -> Result<UrgencyRule, String> {
    let body = UrgencyRuleBody {
        urgency_rule_text: rule_text,
    };
    super::send_json("PUT", &format!("/urgency-rules/{rule_id}"), token, &body)
        .await
        .map_err(|e| format!("Error updating urgency rule: {e}"))
}

pub async fn delete_urgency_rule(rule_id: i32, token: &str) -> Result<(), String> {
    super::send(
        "DELETE",
        &format!("/urgency-rules/{rule_id}"),
        Some(token),
        None,
    )
    .await
    .map(|_| ())
    .map_err(|e| format!("Error deleting urgency rule: {e}"))
}
