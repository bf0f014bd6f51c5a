//! Per-endpoint query parameters
//!
//! Each query knows its wire parameter names. Optional parameters that are
//! absent are left out of the query string entirely.

use crate::constants::{
    DEFAULT_FETCH_RETRIES, DEFAULT_ITEM_FORMAT, DEFAULT_LANG, DEFAULT_PAGE, DEFAULT_PER_PAGE,
    DEFAULT_PIECE_INFO, DEFAULT_STATS_FORMAT,
};

use super::endpoint::Endpoint;

/// Roster pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, per_page: DEFAULT_PER_PAGE }
    }
}

/// Squads query with an optional `since` cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquadsQuery {
    pub since: Option<String>,
}

/// Inventory pagination and formatting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryQuery {
    pub page: u32,
    pub per_page: u32,
    pub item_format: String,
    pub stats_format: String,
    pub piece_info: String,
    pub lang: String,
    pub item_type: Option<String>,
}

impl Default for InventoryQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            item_format: DEFAULT_ITEM_FORMAT.to_string(),
            stats_format: DEFAULT_STATS_FORMAT.to_string(),
            piece_info: DEFAULT_PIECE_INFO.to_string(),
            lang: DEFAULT_LANG.to_string(),
            item_type: None,
        }
    }
}

/// Endpoint plus its query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchQuery {
    Roster(RosterQuery),
    Squads(SquadsQuery),
    Inventory(InventoryQuery),
    PlayerCard,
}

impl FetchQuery {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Roster(_) => Endpoint::Roster,
            Self::Squads(_) => Endpoint::Squads,
            Self::Inventory(_) => Endpoint::Inventory,
            Self::PlayerCard => Endpoint::PlayerCard,
        }
    }

    /// Query string pairs in wire form
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Roster(q) => {
                vec![("page", q.page.to_string()), ("perPage", q.per_page.to_string())]
            }
            Self::Squads(q) => {
                q.since.iter().map(|since| ("since", since.clone())).collect()
            }
            Self::Inventory(q) => {
                let mut pairs = vec![
                    ("page", q.page.to_string()),
                    ("perPage", q.per_page.to_string()),
                    ("itemFormat", q.item_format.clone()),
                    ("statsFormat", q.stats_format.clone()),
                    ("pieceInfo", q.piece_info.clone()),
                    ("lang", q.lang.clone()),
                ];
                if let Some(item_type) = &q.item_type {
                    pairs.push(("itemType", item_type.clone()));
                }
                pairs
            }
            Self::PlayerCard => Vec::new(),
        }
    }
}

/// One fetcher invocation: what to fetch and how many auth retries to allow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: FetchQuery,
    pub retries: u32,
}

impl FetchRequest {
    pub fn new(query: FetchQuery) -> Self {
        Self { query, retries: DEFAULT_FETCH_RETRIES }
    }

    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.query.endpoint()
    }
}
