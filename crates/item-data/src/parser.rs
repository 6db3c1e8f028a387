//! Parser for item exports.
//!
//! Two layouts are accepted:
//! - a bare JSON array of items (what `ItemData.get_items` resolves to)
//! - an object with a top-level `data` array (API collection responses)

use crate::error::{ItemDataError, Result};
use crate::types::{BURNED_STAGE, Item};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse an item export from a JSON string
pub fn parse_items(json: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(json)?;

    let items = match value {
        Value::Array(_) => serde_json::from_value::<Vec<Item>>(value)?,
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Array(_)) => serde_json::from_value::<Vec<Item>>(data)?,
            _ => {
                return Err(ItemDataError::UnsupportedLayout(
                    "object without a `data` array".to_string(),
                ));
            }
        },
        other => {
            return Err(ItemDataError::UnsupportedLayout(format!(
                "top-level {}",
                json_kind(&other)
            )));
        }
    };

    for item in &items {
        validate_item(item)?;
    }

    Ok(items)
}

/// Parse an item export from a file on disk
pub fn parse_items_file(path: &Path) -> Result<Vec<Item>> {
    if !path.exists() {
        return Err(ItemDataError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_items(&content)
}

fn validate_item(item: &Item) -> Result<()> {
    if let Some(assignment) = &item.assignments {
        if assignment.srs_stage > BURNED_STAGE {
            return Err(ItemDataError::InvalidValue {
                item_id: item.id,
                field: "srs_stage".to_string(),
                value: assignment.srs_stage.to_string(),
            });
        }
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            { "id": 1, "data": { "characters": "一" } },
            { "id": 2, "data": { "characters": "二" } }
        ]"#;

        let items = parse_items(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].characters(), Some("二"));
    }

    #[test]
    fn test_parse_data_envelope() {
        let json = r#"{ "object": "collection", "data": [ { "id": 7, "data": { "characters": "金" } } ] }"#;

        let items = parse_items(json).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
    }

    #[test]
    fn test_parse_rejects_unsupported_layout() {
        assert!(matches!(
            parse_items("42"),
            Err(ItemDataError::UnsupportedLayout(_))
        ));
        assert!(matches!(
            parse_items(r#"{ "items": [] }"#),
            Err(ItemDataError::UnsupportedLayout(_))
        ));
    }

    #[test]
    fn test_parse_rejects_stage_out_of_range() {
        let json = r#"[ { "id": 3, "assignments": { "srs_stage": 12, "level": 4 } } ]"#;

        let err = parse_items(json).unwrap_err();
        assert!(matches!(
            err,
            ItemDataError::InvalidValue { item_id: 3, .. }
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            parse_items("[ { \"id\": "),
            Err(ItemDataError::JsonError(_))
        ));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_items_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ItemDataError::FileNotFound { .. }));
    }
}
