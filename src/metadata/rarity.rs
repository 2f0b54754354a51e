use serde::{Deserialize, Serialize};

/// How rare a card is.
///
/// Crafting costs and dust values are passed through as the API sends them
/// (pairs of regular and golden values, `null` when not craftable).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rarity {
    pub id: u32,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub crafting_cost: Vec<serde_json::Value>,
    #[serde(default)]
    pub dust_value: Vec<serde_json::Value>,
}
