use serde::{Deserialize, Serialize};

/// Minion, spell, weapon, hero, location...
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardType {
    pub id: u32,
    pub slug: String,
    pub name: String,
}
