//! Structured-output schemas for the query containers

use crate::query::VariantType;
use serde_json::{json, Value};

/// Named JSON schema sent as a strict `response_format`
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: Value,
}

impl ResponseSchema {
    /// Schema of a `QuerySet` document
    pub fn query_set() -> Self {
        Self {
            name: "QuerySet".to_string(),
            schema: object(json!({
                "queries": { "type": "array", "items": query_object() }
            })),
        }
    }

    /// Schema of a `QueryVariantSet` document
    pub fn query_variant_set() -> Self {
        let kinds: Vec<&str> = VariantType::ALL.iter().map(|k| k.name()).collect();
        let element = object(json!({
            "text": { "type": "string" },
            "lang": { "type": "string" },
            "variant_type": { "type": "string", "enum": kinds },
        }));
        let variant = object(json!({
            "original": { "type": "string" },
            "lang": { "type": "string" },
            "variants": { "type": "array", "items": element },
        }));

        Self {
            name: "QueryVariantSet".to_string(),
            schema: object(json!({
                "queries": { "type": "array", "items": variant }
            })),
        }
    }

    pub(crate) fn response_format(&self) -> Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.name,
                "schema": self.schema,
                "strict": true,
            }
        })
    }
}

fn query_object() -> Value {
    object(json!({
        "original": { "type": "string" },
        "lang": { "type": "string" },
    }))
}

// Strict mode requires every property listed and no extras.
fn object(properties: Value) -> Value {
    let required: Vec<String> = properties
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}
