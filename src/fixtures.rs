//! Trimmed responses of the game-data API for tests.

use crate::{
    api::decode,
    metadata::{CardClass, CardSet, CardType, MetadataStore, Rarity},
    transport::canned::Canned,
};

pub const RARITIES: &str = r#"[
    {"slug":"common","id":1,"craftingCost":[40,400],"dustValue":[5,50],"name":"Common"},
    {"slug":"free","id":2,"craftingCost":[null,null],"dustValue":[null,null],"name":"Free"},
    {"slug":"rare","id":3,"craftingCost":[100,800],"dustValue":[20,100],"name":"Rare"},
    {"slug":"epic","id":4,"craftingCost":[400,1600],"dustValue":[100,400],"name":"Epic"},
    {"slug":"legendary","id":5,"craftingCost":[1600,3200],"dustValue":[400,1600],"name":"Legendary"}
]"#;

pub const SETS: &str = r#"[
    {"id":1635,"name":"Legacy","slug":"legacy","type":"base"},
    {"id":1637,"name":"Core","slug":"core","type":"base"},
    {"id":1897,"name":"Festival of Legends","slug":"festival-of-legends","type":"expansion"}
]"#;

pub const CLASSES: &str = r#"[
    {"slug":"druid","id":2,"name":"Druid","cardId":274,"heroPowerCardId":1123},
    {"slug":"mage","id":4,"name":"Mage","cardId":637,"heroPowerCardId":807},
    {"slug":"warrior","id":10,"name":"Warrior","cardId":7,"heroPowerCardId":725},
    {"slug":"neutral","id":12,"name":"Neutral"}
]"#;

pub const TYPES: &str = r#"[
    {"slug":"hero","id":3,"name":"Hero"},
    {"slug":"minion","id":4,"name":"Minion"},
    {"slug":"spell","id":5,"name":"Spell"},
    {"slug":"weapon","id":7,"name":"Weapon"}
]"#;

pub const MAGE_PAGE: &str = r#"{
    "cards":[
        {"id":315,"collectible":1,"slug":"315-arcane-explosion","classId":4,"multiClassIds":[],
         "cardTypeId":5,"cardSetId":1635,"rarityId":1,"manaCost":2,"name":"Arcane Explosion",
         "image":"https://example.test/315.png"},
        {"id":555,"collectible":1,"slug":"555-arcane-intellect","classId":4,"multiClassIds":[],
         "cardTypeId":5,"cardSetId":1637,"rarityId":1,"manaCost":3,"name":"Arcane Intellect",
         "image":"https://example.test/555.png"}
    ],
    "cardCount":2,
    "pageCount":1,
    "page":1
}"#;

pub const WARRIOR_PAGE: &str = r#"{
    "cards":[
        {"id":1023,"classId":10,"cardTypeId":4,"cardSetId":1897,"rarityId":1,"manaCost":1,
         "name":"Frothing Fan","image":"https://example.test/1023.png"}
    ],
    "cardCount":1,
    "pageCount":1,
    "page":1
}"#;

pub const EMPTY_PAGE: &str = r#"{"cards":[],"cardCount":0,"pageCount":0,"page":1}"#;

pub const UNKNOWN_SET_PAGE: &str = r#"{
    "cards":[
        {"id":1,"classId":4,"cardTypeId":5,"cardSetId":1635,"rarityId":1,"manaCost":1,
         "name":"Known","image":"https://example.test/1.png"},
        {"id":2,"classId":4,"cardTypeId":5,"cardSetId":9999,"rarityId":1,"manaCost":1,
         "name":"Unknown Set","image":"https://example.test/2.png"}
    ],
    "cardCount":2,
    "pageCount":1,
    "page":1
}"#;

pub fn rarities() -> Vec<Rarity> {
    decode(RARITIES.as_bytes()).unwrap()
}

pub fn sets() -> Vec<CardSet> {
    decode(SETS.as_bytes()).unwrap()
}

pub fn classes() -> Vec<CardClass> {
    decode(CLASSES.as_bytes()).unwrap()
}

pub fn types() -> Vec<CardType> {
    decode(TYPES.as_bytes()).unwrap()
}

pub fn store() -> MetadataStore {
    let mut store = MetadataStore::default();
    store.insert(rarities());
    store.insert(sets());
    store.insert(classes());
    store.insert(types());
    store
}

pub fn metadata_routes(canned: Canned) -> Canned {
    canned
        .route("/metadata/rarities", RARITIES)
        .route("/metadata/sets", SETS)
        .route("/metadata/classes", CLASSES)
        .route("/metadata/types", TYPES)
}
