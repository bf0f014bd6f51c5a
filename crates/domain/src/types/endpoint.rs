//! Game API endpoints reachable through the assistant

use std::fmt;

use serde::{Deserialize, Serialize};

/// Read-only game API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Roster,
    Squads,
    Inventory,
    PlayerCard,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] =
        [Endpoint::Roster, Endpoint::Inventory, Endpoint::Squads, Endpoint::PlayerCard];

    /// Path appended to the game API base URL
    pub fn path_suffix(&self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Squads => "squads",
            Self::Inventory => "inventory",
            Self::PlayerCard => "card",
        }
    }

    /// Assistant function name bound to this endpoint
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::Roster => "get_roster",
            Self::Squads => "get_squads",
            Self::Inventory => "get_inventory",
            Self::PlayerCard => "get_player_card",
        }
    }

    /// Look up the endpoint for an assistant function name
    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|endpoint| endpoint.function_name() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roster => "roster",
            Self::Squads => "squads",
            Self::Inventory => "inventory",
            Self::PlayerCard => "player_card",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
