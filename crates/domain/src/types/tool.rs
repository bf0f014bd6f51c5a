//! Assistant tool-call wire types

use serde::{Deserialize, Serialize};

/// Function invocation requested by the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument object; may be empty
    #[serde(default)]
    pub arguments: String,
}

/// One tool call from an assistant run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub function: FunctionCall,
}

/// Output submitted back for a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub tool_call_id: String,
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assistant_tool_call_shape() {
        let raw = r#"{
            "id": "call_abc",
            "type": "function",
            "function": { "name": "get_roster", "arguments": "{\"page\":1,\"perPage\":20}" }
        }"#;

        let call: ToolCall = serde_json::from_str(raw).unwrap();
        assert_eq!(call.id, "call_abc");
        assert_eq!(call.function.name, "get_roster");
        assert_eq!(call.function.arguments, r#"{"page":1,"perPage":20}"#);
    }

    #[test]
    fn missing_arguments_default_to_empty() {
        let raw = r#"{ "id": "call_1", "function": { "name": "get_player_card" } }"#;
        let call: ToolCall = serde_json::from_str(raw).unwrap();
        assert!(call.function.arguments.is_empty());
    }
}
