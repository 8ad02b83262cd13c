//! Content Commands
//!
//! CRUD bindings for the content collection.

use crate::models::{Content, ContentBody};

pub async fn get_content_list(token: &str, skip: usize, limit: usize) -> Result<Vec<Content>, String> {
    super::get_json(&format!("/content/?skip={skip}&limit={limit}"), token)
        .await
        .map_err(|e| format!("Error fetching content list: {e}"))
}

pub async fn get_content(content_id: i32, token: &str) -> Result<Content, String> {
    super::get_json(&format!("/content/{content_id}"), token)
        .await
        .map_err(|e| format!("Error fetching content: {e}"))
}

pub async fn create_content(body: &ContentBody, token: &str) -> Result<Content, String> {
    super::send_json("POST", "/content/", token, body)
        .await
        .map_err(|e| format!("Error creating content: {e}"))
}

pub async fn edit_content(content_id: i32, body: &ContentBody, token: &str) -> Result<Content, String> {
    super::send_json("PUT", &format!("/content/{content_id}"), token, body)
        .await
        .map_err(|e| format!("Error editing content: {e}"))
}

pub async fn delete_content(content_id: i32, token: &str) -> Result<(), String> {
    super::send("DELETE", &format!("/content/{content_id}"), Some(token), None)
        .await
        .map(|_| ())
        .map_err(|e| format!("Error deleting content: {e}"))
}
