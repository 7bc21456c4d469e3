//! Persisted record codec for the diary slot

use crate::domain::diary::{sort_newest_first, Diary};
use crate::error::Result;
use serde_json::Value;
use std::collections::HashSet;

/// Encode the whole collection as an ordered array of flat records
pub fn encode_records(diaries: &[Diary]) -> Result<Value> {
    Ok(serde_json::to_value(diaries)?)
}

/// Decode a slot value into entries, newest first.
///
/// Records that are missing a field, have a wrongly typed field, or repeat an
/// id already seen are dropped. A value that is not an array decodes to an
/// empty collection.
pub fn decode_records(value: Value) -> Vec<Diary> {
    let records = match value {
        Value::Array(records) => records,
        other => {
            log::warn!(
                "diary slot does not hold a list (found {}), starting empty",
                json_kind(&other)
            );
            return Vec::new();
        }
    };

    let total = records.len();
    let mut seen = HashSet::new();
    let mut diaries: Vec<Diary> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Diary>(record) {
            Ok(diary) => Some(diary),
            Err(e) => {
                log::warn!("dropping malformed diary record #{}: {}", index, e);
                None
            }
        })
        .filter(|diary| {
            let fresh = seen.insert(diary.id.clone());
            if !fresh {
                log::warn!("dropping diary record with duplicate id {}", diary.id);
            }
            fresh
        })
        .collect();

    log::debug!("decoded {} of {} diary records", diaries.len(), total);

    sort_newest_first(&mut diaries);
    diaries
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_drops_record_missing_title() {
        let value = json!([
            {
                "id": "a",
                "title": "Kept",
                "contents": "hello",
                "date": "2024-01-10T00:00:00Z",
                "isStar": false
            },
            {
                "id": "b",
                "contents": "no title here",
                "date": "2024-01-11T00:00:00Z",
                "isStar": true
            }
        ]);

        let diaries = decode_records(value);
        assert_eq!(diaries.len(), 1);
        assert_eq!(diaries[0].title, "Kept");
    }

    #[test]
    fn test_decode_drops_wrongly_typed_fields() {
        let value = json!([
            { "id": "a", "title": "T", "contents": "C", "date": "not a date", "isStar": false },
            { "id": "b", "title": "T", "contents": "C", "date": "2024-01-10T00:00:00Z", "isStar": "yes" },
            { "id": 7, "title": "T", "contents": "C", "date": "2024-01-10T00:00:00Z", "isStar": false },
            "just a string",
            { "id": "c", "title": "T", "contents": "C", "date": "2024-01-10T00:00:00Z", "isStar": true }
        ]);

        let diaries = decode_records(value);
        assert_eq!(diaries.len(), 1);
        assert_eq!(diaries[0].id.as_str(), "c");
        assert!(diaries[0].is_star);
    }

    #[test]
    fn test_decode_sorts_newest_first() {
        let value = json!([
            { "id": "old", "title": "Old", "contents": "C", "date": "2024-01-10T00:00:00Z", "isStar": false },
            { "id": "new", "title": "New", "contents": "C", "date": "2024-01-12T00:00:00Z", "isStar": false }
        ]);

        let diaries = decode_records(value);
        assert_eq!(diaries[0].id.as_str(), "new");
        assert_eq!(diaries[1].id.as_str(), "old");
    }

    #[test]
    fn test_decode_accepts_offset_timestamps() {
        let value = json!([
            { "id": "a", "title": "T", "contents": "C", "date": "2024-01-10T09:00:00+09:00", "isStar": false }
        ]);

        let diaries = decode_records(value);
        assert_eq!(diaries[0].date.to_rfc3339(), "2024-01-10T00:00:00+00:00");
    }

    #[test]
    fn test_decode_drops_duplicate_ids() {
        let value = json!([
            { "id": "a", "title": "First", "contents": "C", "date": "2024-01-10T00:00:00Z", "isStar": false },
            { "id": "a", "title": "Second", "contents": "C", "date": "2024-01-11T00:00:00Z", "isStar": false }
        ]);

        let diaries = decode_records(value);
        assert_eq!(diaries.len(), 1);
        assert_eq!(diaries[0].title, "First");
    }

    #[test]
    fn test_decode_non_array_is_empty() {
        assert!(decode_records(json!({"id": "a"})).is_empty());
        assert!(decode_records(json!("diaryList")).is_empty());
        assert!(decode_records(Value::Null).is_empty());
    }

    #[test]
    fn test_encode_preserves_order() {
        let value = json!([
            { "id": "new", "title": "New", "contents": "C", "date": "2024-01-12T00:00:00Z", "isStar": true },
            { "id": "old", "title": "Old", "contents": "C", "date": "2024-01-10T00:00:00Z", "isStar": false }
        ]);
        let diaries = decode_records(value.clone());

        assert_eq!(encode_records(&diaries).unwrap(), value);
    }
}
