use serde::{Deserialize, Serialize};

/// A prospective institution evaluated against a user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub location: String,
    pub fee: String, // e.g. "₱80,000/year"
    pub programs: Vec<String>,
    pub acceptance_rate: String,
    pub ranking: String,
}
