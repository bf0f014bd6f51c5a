//! Assistant argument parsing
//!
//! Arguments arrive as a JSON string. Keys follow the wire names (`perPage`,
//! `itemType`, ...) with snake_case aliases accepted. Missing and `null`
//! values fall back to the fetcher defaults; unknown keys are ignored.

use msfchat_domain::{Endpoint, FetchQuery, InventoryQuery, RosterQuery, SquadsQuery};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::error::DispatchError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RosterArgs {
    #[serde(deserialize_with = "lenient_u32")]
    page: Option<u32>,
    #[serde(rename = "perPage", alias = "per_page", deserialize_with = "lenient_u32")]
    per_page: Option<u32>,
}

impl From<RosterArgs> for RosterQuery {
    fn from(args: RosterArgs) -> Self {
        let defaults = RosterQuery::default();
        Self {
            page: args.page.unwrap_or(defaults.page),
            per_page: args.per_page.unwrap_or(defaults.per_page),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SquadsArgs {
    #[serde(deserialize_with = "lenient_cursor")]
    since: Option<String>,
}

impl From<SquadsArgs> for SquadsQuery {
    fn from(args: SquadsArgs) -> Self {
        Self { since: args.since }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InventoryArgs {
    #[serde(deserialize_with = "lenient_u32")]
    page: Option<u32>,
    #[serde(rename = "perPage", alias = "per_page", deserialize_with = "lenient_u32")]
    per_page: Option<u32>,
    #[serde(rename = "itemFormat", alias = "item_format")]
    item_format: Option<String>,
    #[serde(rename = "statsFormat", alias = "stats_format")]
    stats_format: Option<String>,
    #[serde(rename = "pieceInfo", alias = "piece_info")]
    piece_info: Option<String>,
    lang: Option<String>,
    #[serde(rename = "itemType", alias = "item_type")]
    item_type: Option<String>,
}

impl From<InventoryArgs> for InventoryQuery {
    fn from(args: InventoryArgs) -> Self {
        let defaults = InventoryQuery::default();
        Self {
            page: args.page.unwrap_or(defaults.page),
            per_page: args.per_page.unwrap_or(defaults.per_page),
            item_format: non_blank(args.item_format).unwrap_or(defaults.item_format),
            stats_format: non_blank(args.stats_format).unwrap_or(defaults.stats_format),
            piece_info: non_blank(args.piece_info).unwrap_or(defaults.piece_info),
            lang: non_blank(args.lang).unwrap_or(defaults.lang),
            item_type: non_blank(args.item_type),
        }
    }
}

/// Parse an assistant argument string into the query for `endpoint`
///
/// An empty or blank string and a bare `null` are treated as `{}`.
///
/// # Errors
/// Returns [`DispatchError::InvalidArguments`] when the string is not JSON,
/// is not an object, or a known key has the wrong type.
pub fn parse_query(endpoint: Endpoint, arguments: &str) -> Result<FetchQuery, DispatchError> {
    let function = endpoint.function_name();
    let object = parse_object(function, arguments)?;

    let query = match endpoint {
        Endpoint::Roster => FetchQuery::Roster(from_object::<RosterArgs>(function, object)?.into()),
        Endpoint::Squads => FetchQuery::Squads(from_object::<SquadsArgs>(function, object)?.into()),
        Endpoint::Inventory => {
            FetchQuery::Inventory(from_object::<InventoryArgs>(function, object)?.into())
        }
        Endpoint::PlayerCard => FetchQuery::PlayerCard,
    };
    Ok(query)
}

fn parse_object(function: &str, arguments: &str) -> Result<Value, DispatchError> {
    let trimmed = arguments.trim();
    if trimmed.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null) => Ok(Value::Object(Map::new())),
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(other) => Err(DispatchError::invalid_arguments(
            function,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
        Err(e) => Err(DispatchError::invalid_arguments(function, e.to_string())),
    }
}

fn from_object<T: for<'de> Deserialize<'de>>(
    function: &str,
    object: Value,
) -> Result<T, DispatchError> {
    serde_json::from_value(object).map_err(|e| DispatchError::invalid_arguments(function, e.to_string()))
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

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Float(f64),
    Text(String),
}

/// Accepts `2`, `2.0`, `"2"` or `null`
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => u32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("{n} is out of range"))),
        Some(NumberOrString::Float(f)) => {
            if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) {
                Ok(Some(f as u32))
            } else {
                Err(D::Error::custom(format!("expected a non-negative integer, got {f}")))
            }
        }
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a non-negative integer, got \"{s}\""))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cursor {
    Text(String),
    Number(serde_json::Number),
}

/// Accepts a string or numeric cursor; blank strings count as absent
fn lenient_cursor<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Cursor>::deserialize(deserializer)? {
        None => None,
        Some(Cursor::Text(s)) => non_blank(Some(s)),
        Some(Cursor::Number(n)) => Some(n.to_string()),
    })
}
