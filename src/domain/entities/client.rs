//! Client records and the classification derived from their name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commercial status of a client.
///
/// Stored as an integer; not consulted by the admission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Regular = 0,
    Gold = 1,
    Platinum = 2,
}

impl ClientStatus {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ClientStatus {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Regular),
            1 => Ok(Self::Gold),
            2 => Ok(Self::Platinum),
            other => Err(other),
        }
    }
}

impl FromStr for ClientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            other => Err(format!("unknown client status '{}'", other)),
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Regular => "regular",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        };
        f.write_str(name)
    }
}

/// Classification that selects the credit-limit strategy for a client.
///
/// [`Classification::Unclassified`] is the fallback for every client name
/// that does not match a known label exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Unclassified,
    ImportantClient,
    VeryImportantClient,
}

impl Classification {
    /// Label a client name must carry to get this classification.
    ///
    /// `None` for the fallback.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Unclassified => None,
            Self::ImportantClient => Some("ImportantClient"),
            Self::VeryImportantClient => Some("VeryImportantClient"),
        }
    }

    /// Derives the classification from a client name (exact, case-sensitive).
    pub fn from_client_name(name: &str) -> Self {
        [Self::ImportantClient, Self::VeryImportantClient]
            .into_iter()
            .find(|c| c.label() == Some(name))
            .unwrap_or(Self::Unclassified)
    }
}

/// A client record as supplied by a [`crate::domain::repositories::ClientRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub status: ClientStatus,
}

impl Client {
    pub fn new(id: i32, name: String, status: ClientStatus) -> Self {
        Self { id, name, status }
    }

    /// Classification derived from the client name.
    pub fn classification(&self) -> Classification {
        Classification::from_client_name(&self.name)
    }
}

/// Input data for registering a new client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub status: ClientStatus,
}
