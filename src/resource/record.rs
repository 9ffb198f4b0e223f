//! Records as returned by the upstream API.

use serde::{Deserialize, Serialize};

/// One user as decoded from the upstream listing.
///
/// Identity is assigned by the upstream service. Fields the upstream omits
/// decode as empty strings so rendering never deals with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub status: String,
}
