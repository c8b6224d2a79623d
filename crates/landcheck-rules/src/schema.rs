//! Structural intake check for records that arrive as JSON.
//!
//! Runs in two phases, like the output checks in the rest of the stack:
//!
//! 1. **Structural**: the JSON value is validated against `record_schema()`
//!    and every violation is collected, so a caller sees the full list at once.
//! 2. **Typed**: the value is deserialized into a `DocumentRecord`, which
//!    catches what the schema does not (unparseable dates).
//!
//! Either failure is `LandcheckError::MalformedRecord`. A well-shaped record
//! with bad *content* passes here and is judged by the validators.

use serde_json::{json, Value};
use tracing::warn;

use landcheck_contracts::{
    error::{LandcheckError, LandcheckResult},
    record::DocumentRecord,
};

/// JSON Schema describing the wire form of a `DocumentRecord`.
pub fn record_schema() -> Value {
    let optional_string = json!({ "type": ["string", "null"] });

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "DocumentRecord",
        "type": "object",
        "required": ["basicInfo", "ownerDetails", "landDetails", "encumbrance", "dates", "metadata"],
        "properties": {
            "basicInfo": {
                "type": "object",
                "required": ["surveyNumber", "khataNumber"],
                "properties": {
                    "surveyNumber": { "type": "string" },
                    "khataNumber": { "type": "string" }
                }
            },
            "ownerDetails": {
                "type": "object",
                "required": ["name", "address"],
                "properties": {
                    "name": { "type": "string" },
                    "address": {
                        "type": "object",
                        "properties": {
                            "street": optional_string,
                            "city": optional_string,
                            "district": optional_string,
                            "zipCode": optional_string
                        }
                    }
                }
            },
            "landDetails": {
                "type": "object",
                "required": ["type", "area", "unit"],
                "properties": {
                    "type": { "type": "string" },
                    "area": { "type": "number" },
                    "unit": { "type": "string" }
                }
            },
            "encumbrance": {
                "type": "object",
                "required": ["status"],
                "properties": {
                    "status": { "enum": ["clear", "under_dispute", "lien_exists"] },
                    "details": optional_string
                }
            },
            "dates": {
                "type": "object",
                "required": ["creationDate", "lastUpdated"],
                "properties": {
                    "creationDate": { "type": "string" },
                    "lastUpdated": { "type": "string" }
                }
            },
            "metadata": {
                "type": "object",
                "required": ["hasRequiredAttachments", "hasValidSignatures"],
                "properties": {
                    "hasRequiredAttachments": { "type": "boolean" },
                    "hasValidSignatures": { "type": "boolean" }
                }
            }
        }
    })
}

/// Validate `value` against the record schema and deserialize it.
pub fn parse_record(value: &Value) -> LandcheckResult<DocumentRecord> {
    let schema = record_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| {
        LandcheckError::ConfigError {
            reason: format!("record schema does not compile: {e}"),
        }
    })?;

    let violations: Vec<String> = validator
        .iter_errors(value)
        .map(|error| format!("at '{}': {}", error.instance_path, error))
        .collect();

    if !violations.is_empty() {
        warn!(count = violations.len(), "record failed structural validation");
        return Err(LandcheckError::MalformedRecord {
            reason: violations.join("; "),
        });
    }

    serde_json::from_value(value.clone()).map_err(|e| LandcheckError::MalformedRecord {
        reason: e.to_string(),
    })
}

/// Parse JSON text and run `parse_record` on it.
pub fn parse_record_str(text: &str) -> LandcheckResult<DocumentRecord> {
    let value: Value = serde_json::from_str(text).map_err(|e| LandcheckError::MalformedRecord {
        reason: format!("not valid JSON: {e}"),
    })?;
    parse_record(&value)
}
