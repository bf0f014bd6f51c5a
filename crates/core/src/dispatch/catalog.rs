//! Assistant tool catalog
//!
//! Function-tool definitions in the shape the assistant API expects:
//! `{"type": "function", "function": {name, description, parameters}}`.

use msfchat_domain::Endpoint;
use serde_json::{json, Value};

/// Tool definitions for every dispatchable function, in catalog order
pub fn tool_definitions() -> Vec<Value> {
    Endpoint::ALL.into_iter().map(tool_definition).collect()
}

/// Tool definition for one endpoint
pub fn tool_definition(endpoint: Endpoint) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": endpoint.function_name(),
            "description": description(endpoint),
            "parameters": parameters(endpoint),
        }
    })
}

fn description(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Roster => "Retrieves the Marvel Strike Force roster of the user.",
        Endpoint::Inventory => {
            "Retrieves the Marvel Strike Force inventory of the user (gear, shards, currencies)."
        }
        Endpoint::Squads => "Retrieves the squads the user has saved in Marvel Strike Force.",
        Endpoint::PlayerCard => {
            "Retrieves the Marvel Strike Force player card of the user (name, level, power, alliance)."
        }
    }
}

fn pagination_properties() -> serde_json::Map<String, Value> {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "page".into(),
        json!({ "type": "integer", "description": "The page number for pagination.", "minimum": 1 }),
    );
    properties.insert(
        "perPage".into(),
        json!({
            "type": "integer",
            "description": "The number of items to display per page.",
            "minimum": 1
        }),
    );
    properties
}

fn parameters(endpoint: Endpoint) -> Value {
    match endpoint {
        Endpoint::Roster => json!({
            "type": "object",
            "properties": pagination_properties(),
        }),
        Endpoint::Squads => json!({
            "type": "object",
            "properties": {
                "since": {
                    "type": "string",
                    "description": "Only return squads changed after this cursor (epoch seconds)."
                }
            },
        }),
        Endpoint::Inventory => {
            let mut properties = pagination_properties();
            properties.insert(
                "itemFormat".into(),
                json!({ "type": "string", "description": "Item representation.", "default": "id" }),
            );
            properties.insert(
                "statsFormat".into(),
                json!({ "type": "string", "description": "Stats representation.", "default": "object" }),
            );
            properties.insert(
                "pieceInfo".into(),
                json!({ "type": "string", "description": "Level of piece detail.", "default": "full" }),
            );
            properties.insert(
                "lang".into(),
                json!({ "type": "string", "description": "Language for item names.", "default": "en" }),
            );
            properties.insert(
                "itemType".into(),
                json!({ "type": "string", "description": "Optional filter by item type." }),
            );
            json!({ "type": "object", "properties": properties })
        }
        Endpoint::PlayerCard => json!({ "type": "object", "properties": {} }),
    }
}
