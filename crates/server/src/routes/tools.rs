//! Tool descriptors for agent integrations

use axum::Json;
use physician_core::{DEFAULT_LIMIT, MAX_LIMIT};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};

/// Tool definition in the shape agent frameworks expect
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: JsonValue,
}

fn search_physicians() -> ToolDescriptor {
    ToolDescriptor {
        name: "search_physicians".to_string(),
        description: format!(
            "Search for healthcare providers (doctors) in the physician database. \
             Use this when the user asks to find doctors, specialists, or medical providers. \
             Matching is partial and case-insensitive. Returns at most {} results per call; \
             larger limits are capped. POST the arguments to /search.",
            MAX_LIMIT
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "specialty": {
                    "type": "string",
                    "description": "Medical specialty (e.g. \"Cardiologist\")"
                },
                "city": {
                    "type": "string",
                    "description": "City name"
                },
                "state": {
                    "type": "string",
                    "description": "State abbreviation (e.g. \"IL\")"
                },
                "procedure": {
                    "type": "string",
                    "description": "Medical procedure or service"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": MAX_LIMIT,
                    "default": DEFAULT_LIMIT,
                    "description": format!(
                        "Max number of results (default {}, capped at {})",
                        DEFAULT_LIMIT, MAX_LIMIT
                    )
                }
            },
            "additionalProperties": false
        }),
    }
}

/// GET /tools - Describe the tools this server exposes
pub async fn list() -> Json<Vec<ToolDescriptor>> {
    Json(vec![search_physicians()])
}
