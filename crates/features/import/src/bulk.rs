//! Files that carry several option documents at once.
//!
//! Accepted shapes, either as the items of a top-level array or as a single value:
//! a JSON string holding an option document, an object whose `json` field holds one,
//! or a plain option object.

use crate::error::{ImportError, ImportErrorExt};
use crate::loader::reconstruct_options;
use crafter_domain::Options;
use serde_json::Value;
use tracing::{debug, warn};

/// Outcome of a bulk import. Rejected items keep their position in the payload.
#[derive(Debug, Default)]
pub struct BulkImport {
    pub imported: Vec<Options>,
    pub rejected: Vec<(usize, ImportError)>,
}

/// Splits a bulk payload into one JSON document per item.
///
/// # Errors
/// [`ImportError::Parse`] when the payload itself is not JSON.
pub fn split_bulk_payload(text: &str) -> Result<Vec<String>, ImportError> {
    let parsed = serde_json::from_str::<Value>(text).context("Reading bulk payload")?;
    let items = match parsed {
        Value::Array(items) => items,
        single => vec![single],
    };
    Ok(items.iter().map(document_text).collect())
}

/// Imports every document of a bulk payload independently.
///
/// # Errors
/// Only when the payload itself cannot be parsed; invalid items are collected in
/// [`BulkImport::rejected`].
pub fn import_bulk(text: &str) -> Result<BulkImport, ImportError> {
    let mut report = BulkImport::default();
    for (index, document) in split_bulk_payload(text)?.iter().enumerate() {
        match reconstruct_options(document) {
            Ok(options) => report.imported.push(options),
            Err(err) => {
                warn!(index, error = %err, "Skipping invalid bulk item");
                report.rejected.push((index, err));
            },
        }
    }
    debug!(imported = report.imported.len(), rejected = report.rejected.len(), "Bulk import done");
    Ok(report)
}

fn document_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("json") {
            Some(Value::String(text)) => text.clone(),
            _ => item.to_string(),
        },
        _ => item.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_item_shape() {
        let docs = split_bulk_payload(
            r#"["{\"prompt\":\"a\"}", {"json": "{\"prompt\":\"b\"}"}, {"prompt": "c"}]"#,
        )
        .unwrap();
        assert_eq!(docs, [r#"{"prompt":"a"}"#, r#"{"prompt":"b"}"#, r#"{"prompt":"c"}"#]);
    }

    #[test]
    fn single_values_are_one_item() {
        assert_eq!(split_bulk_payload(r#"{"prompt":"solo"}"#).unwrap().len(), 1);
        assert_eq!(split_bulk_payload(r#""{\"prompt\":\"solo\"}""#).unwrap().len(), 1);
    }

    #[test]
    fn invalid_items_are_reported_and_skipped() {
        let report =
            import_bulk(r#"[{"prompt":"ok"}, {"steps":"ten"}, "not json", {"width": 640}]"#)
                .unwrap();
        assert_eq!(report.imported.len(), 2);
        assert_eq!(report.imported[1].width, 640);
        let indices: Vec<usize> = report.rejected.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, [1, 2]);
    }

    #[test]
    fn unparsable_payload_is_an_error() {
        let err = import_bulk("[").unwrap_err();
        assert_eq!(err.kind(), "Parse");
        assert!(err.to_string().contains("Reading bulk payload"));
    }
}
