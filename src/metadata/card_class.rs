use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardClass {
    pub id: u32,
    pub slug: String,
    pub name: String,
}
