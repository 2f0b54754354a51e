use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardSet {
    pub id: u32,
    pub slug: String,
    pub name: String,
    /// Set grouping as reported by the API, e.g. `"expansion"`. Empty if absent.
    #[serde(rename = "type", default)]
    pub set_type: String,
}
