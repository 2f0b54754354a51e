pub mod card_class;
pub mod card_set;
pub mod card_type;
pub mod rarity;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::{api::Api, transport::Transport, Error, Result};

pub use card_class::CardClass;
pub use card_set::CardSet;
pub use card_type::CardType;
pub use rarity::Rarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    Rarity,
    Set,
    Class,
    Type,
}

impl MetadataKind {
    /// Endpoint serving every record of this kind.
    pub fn path(self) -> &'static str {
        match self {
            Self::Rarity => "metadata/rarities",
            Self::Set => "metadata/sets",
            Self::Class => "metadata/classes",
            Self::Type => "metadata/types",
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rarity => "rarity",
            Self::Set => "card set",
            Self::Class => "card class",
            Self::Type => "card type",
        })
    }
}

/// A record of one of the four reference tables.
pub trait Reference: DeserializeOwned + Send + Sync + sealed::Stored + 'static {
    const KIND: MetadataKind;

    fn id(&self) -> u32;
}

mod sealed {
    use super::{MetadataStore, Table};

    pub trait Stored: Sized {
        fn table(store: &MetadataStore) -> &Table<Self>;
        fn table_mut(store: &mut MetadataStore) -> &mut Table<Self>;
    }
}

macro_rules! reference {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl Reference for $ty {
            const KIND: MetadataKind = MetadataKind::$kind;

            fn id(&self) -> u32 {
                self.id
            }
        }

        impl sealed::Stored for $ty {
            fn table(store: &MetadataStore) -> &Table<Self> {
                &store.$field
            }

            fn table_mut(store: &mut MetadataStore) -> &mut Table<Self> {
                &mut store.$field
            }
        }
    };
}

reference!(Rarity, Rarity, rarities);
reference!(CardSet, Set, sets);
reference!(CardClass, Class, classes);
reference!(CardType, Type, types);

/// One reference table. Small enough that lookups are a linear scan.
#[derive(Debug, Clone)]
pub struct Table<R> {
    records: Vec<R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Reference> Table<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// An empty table counts as never loaded.
    pub fn lookup(&self, id: u32) -> Result<&R> {
        if self.records.is_empty() {
            return Err(Error::NotInitialized(R::KIND));
        }
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or(Error::NotFound { kind: R::KIND, id })
    }
}

impl<R> From<Vec<R>> for Table<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

/// The four reference tables cards point into.
///
/// Filled once when the client is built and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    rarities: Table<Rarity>,
    sets: Table<CardSet>,
    classes: Table<CardClass>,
    types: Table<CardType>,
}

impl MetadataStore {
    /// Fetches every record of kind `R` and replaces that table.
    pub async fn load<R: Reference, T: Transport>(&mut self, api: &Api<T>) -> Result<&[R]> {
        let url = api.url(R::KIND.path())?;
        let records: Vec<R> = api.get(url).await?;
        tracing::debug!(kind = %R::KIND, count = records.len(), "loaded metadata");
        let table = R::table_mut(self);
        *table = Table::from(records);
        Ok(table.records())
    }

    /// Loads rarities, sets, classes and types, in that order.
    pub async fn load_all<T: Transport>(&mut self, api: &Api<T>) -> Result<()> {
        self.load::<Rarity, _>(api).await?;
        self.load::<CardSet, _>(api).await?;
        self.load::<CardClass, _>(api).await?;
        self.load::<CardType, _>(api).await?;
        Ok(())
    }

    pub fn lookup<R: Reference>(&self, id: u32) -> Result<&R> {
        R::table(self).lookup(id)
    }

    pub fn records<R: Reference>(&self) -> &[R] {
        R::table(self).records()
    }

    pub fn insert<R: Reference>(&mut self, records: Vec<R>) {
        *R::table_mut(self) = Table::from(records);
    }

    pub fn is_ready(&self) -> bool {
        self.ensure_ready().is_ok()
    }

    /// Fails with the first table, in load order, that is still empty.
    pub fn ensure_ready(&self) -> Result<()> {
        let missing = [
            (self.rarities.is_empty(), MetadataKind::Rarity),
            (self.sets.is_empty(), MetadataKind::Set),
            (self.classes.is_empty(), MetadataKind::Class),
            (self.types.is_empty(), MetadataKind::Type),
        ]
        .into_iter()
        .find_map(|(empty, kind)| empty.then_some(kind));
        match missing {
            Some(kind) => Err(Error::NotInitialized(kind)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::Config, fixtures, transport::canned::Canned};

    #[test]
    fn lookup_returns_record_with_that_id() {
        let store = fixtures::store();
        for rarity in fixtures::rarities() {
            assert_eq!(store.lookup::<Rarity>(rarity.id).unwrap(), &rarity);
        }
        for class in fixtures::classes() {
            assert_eq!(store.lookup::<CardClass>(class.id).unwrap().id, class.id);
        }
        assert_eq!(store.lookup::<CardSet>(1635).unwrap().slug, "legacy");
        assert_eq!(store.lookup::<CardType>(4).unwrap().name, "Minion");
    }

    #[test]
    fn empty_table_is_not_initialized() {
        let store = MetadataStore::default();
        assert!(!store.is_ready());
        for id in [0, 1, 5] {
            assert!(matches!(
                store.lookup::<Rarity>(id),
                Err(Error::NotInitialized(MetadataKind::Rarity))
            ));
            assert!(matches!(
                store.lookup::<CardType>(id),
                Err(Error::NotInitialized(MetadataKind::Type))
            ));
        }
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = fixtures::store();
        assert!(store.is_ready());
        assert!(matches!(
            store.lookup::<CardSet>(999),
            Err(Error::NotFound {
                kind: MetadataKind::Set,
                id: 999
            })
        ));
    }

    #[test]
    fn only_loaded_tables_answer() {
        let mut store = MetadataStore::default();
        store.insert(fixtures::rarities());
        assert!(store.lookup::<Rarity>(1).is_ok());
        assert!(matches!(
            store.lookup::<CardClass>(4),
            Err(Error::NotInitialized(MetadataKind::Class))
        ));
        assert!(matches!(
            store.ensure_ready(),
            Err(Error::NotInitialized(MetadataKind::Set))
        ));
    }

    #[tokio::test]
    async fn load_replaces_table() {
        let api = Api::new(
            Canned::new().route("/metadata/rarities", fixtures::RARITIES),
            &Config::default(),
        );
        let mut store = MetadataStore::default();
        store.insert(vec![Rarity {
            id: 42,
            slug: "stale".into(),
            name: "Stale".into(),
            crafting_cost: vec![],
            dust_value: vec![],
        }]);

        let loaded = store.load::<Rarity, _>(&api).await.unwrap();
        assert_eq!(loaded.len(), 5);
        assert!(matches!(
            store.lookup::<Rarity>(42),
            Err(Error::NotFound { .. })
        ));
        assert_eq!(store.lookup::<Rarity>(5).unwrap().slug, "legendary");
    }

    #[tokio::test]
    async fn load_all_follows_fixed_order() {
        let api = Api::new(fixtures::metadata_routes(Canned::new()), &Config::default());
        let mut store = MetadataStore::default();
        store.load_all(&api).await.unwrap();
        assert!(store.is_ready());

        let paths = api
            .transport()
            .requests()
            .into_iter()
            .map(|u| u.path().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            paths,
            [
                "/hearthstone/metadata/rarities",
                "/hearthstone/metadata/sets",
                "/hearthstone/metadata/classes",
                "/hearthstone/metadata/types",
            ]
        );
        assert!(api
            .transport()
            .requests()
            .iter()
            .all(|u| u.query() == Some("locale=en_US")));
    }

    #[tokio::test]
    async fn load_all_stops_at_first_failure() {
        let api = Api::new(
            Canned::new()
                .route("/metadata/rarities", fixtures::RARITIES)
                .route("/metadata/classes", fixtures::CLASSES)
                .route("/metadata/types", fixtures::TYPES),
            &Config::default(),
        );
        let mut store = MetadataStore::default();
        let err = store.load_all(&api).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api {
                status_code: 404,
                ..
            }
        ));
        assert_eq!(api.transport().requests().len(), 2);
        assert!(!store.is_ready());
    }
}
