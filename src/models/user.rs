use serde::{Deserialize, Serialize};

/// Registered shop user. Only the number of users is shown, so every field is lenient.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<u32>,
    pub email: Option<String>,
    pub username: Option<String>,
}
