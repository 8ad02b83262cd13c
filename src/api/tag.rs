//! Tag Commands

use crate::models::Tag;

pub async fn get_tag_list(token: &str) -> Result<Vec<Tag>, String> {
    super::get_json("/tag/", token)
        .await
        .map_err(|e| format!("Error fetching tag list: {e}"))
}
