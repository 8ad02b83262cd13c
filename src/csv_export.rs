//! CSV Export
//!
//! Flattens the full content collection into a CSV snapshot: `content_id`
//! first, metadata JSON-stringified, and a trailing column of tag names
//! resolved from tag ids.

use crate::models::{Content, Tag};
use chrono::NaiveDateTime;
use std::collections::HashMap;

const HEADER: [&str; 11] = [
    "content_id",
    "content_tags",
    "content_title",
    "content_text",
    "content_language",
    "content_metadata",
    "positive_votes",
    "negative_votes",
    "created_datetime_utc",
    "updated_datetime_utc",
    "content_tag_names",
];

/// Quote a field per RFC 4180 when it contains a delimiter, quote, or newline
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn join_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the CSV document for all contents. Tag ids are substituted with
/// their names in the final column; ids with no matching tag are skipped.
pub fn build_csv(cards: &[Content], tags: &[Tag]) -> String {
    let tag_names: HashMap<i32, &str> = tags
        .iter()
        .map(|t| (t.tag_id, t.tag_name.as_str()))
        .collect();

    let mut lines = Vec::with_capacity(cards.len() + 1);
    lines.push(join_row(
        &HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));

    for card in cards {
        let ids = card
            .content_tags
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let names = card
            .content_tags
            .iter()
            .filter_map(|id| tag_names.get(id).copied())
            .collect::<Vec<_>>()
            .join(",");
        let metadata =
            serde_json::to_string(&card.content_metadata).unwrap_or_else(|_| "{}".to_string());

        lines.push(join_row(&[
            card.content_id.map(|id| id.to_string()).unwrap_or_default(),
            ids,
            card.content_title.clone(),
            card.content_text.clone(),
            card.content_language.clone(),
            metadata,
            card.positive_votes.to_string(),
            card.negative_votes.to_string(),
            card.created_datetime_utc.clone(),
            card.updated_datetime_utc.clone(),
            names,
        ]));
    }

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// `content_<YYYY_MM_DD_HHMMSS>.csv`
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("content_{}.csv", now.format("%Y_%m_%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tag(id: i32, name: &str) -> Tag {
        Tag {
            tag_id: id,
            tag_name: name.to_string(),
        }
    }

    fn card() -> Content {
        Content {
            content_id: Some(7),
            content_title: "Safe water".to_string(),
            content_text: "Boil water, then cool it".to_string(),
            content_language: "ENGLISH".to_string(),
            content_metadata: serde_json::json!({"source": "who"}),
            content_tags: vec![1, 2],
            positive_votes: 3,
            negative_votes: 1,
            created_datetime_utc: "2024-05-01T10:00:00Z".to_string(),
            updated_datetime_utc: "2024-05-02T11:30:00Z".to_string(),
        }
    }

    #[test]
    fn header_puts_content_id_first() {
        let csv = build_csv(&[], &[]);
        assert!(csv.starts_with("content_id,content_tags,"));
        assert!(!csv.contains("user_id"));
    }

    #[test]
    fn metadata_is_json_stringified_and_tag_names_substituted() {
        let csv = build_csv(&[card()], &[tag(1, "water"), tag(2, "hygiene")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("7,"));
        // JSON metadata carries quotes, so the field itself must be quoted
        assert!(row.contains("\"{\"\"source\"\":\"\"who\"\"}\""));
        assert!(row.ends_with("\"water,hygiene\""));
    }

    #[test]
    fn unknown_tag_ids_are_skipped() {
        let csv = build_csv(&[card()], &[tag(2, "hygiene")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",hygiene"));
    }

    #[test]
    fn fields_with_commas_and_quotes_are_escaped() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn filename_format() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap();
        assert_eq!(export_filename(now), "content_2024_03_09_070542.csv");
    }
}
