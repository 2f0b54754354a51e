use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    api::Api,
    metadata::{CardClass, CardSet, CardType, MetadataStore, Rarity},
    transport::Transport,
    Error, Result,
};

pub const FIRST_PAGE: u32 = 1;
/// Page size used per class by [`fetch_for_classes`].
pub const CLASS_PAGE_SIZE: u32 = 10;
/// Highest cost a [`ManaRange`] may reach.
pub const MAX_MANA_COST: u32 = 100;

/// A card as the API sends it, with its metadata as bare ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub mana_cost: u32,
    pub class_id: u32,
    pub rarity_id: u32,
    #[serde(rename = "cardSetId")]
    pub set_id: u32,
    #[serde(rename = "cardTypeId")]
    pub type_id: u32,
}

/// A card with every metadata id resolved against the [`MetadataStore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub mana_cost: u32,
    pub class_id: u32,
    pub class: CardClass,
    pub rarity_id: u32,
    pub rarity: Rarity,
    pub set_id: u32,
    pub set: CardSet,
    pub type_id: u32,
    pub card_type: CardType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsPage<T> {
    pub cards: Vec<T>,
    #[serde(default)]
    pub card_count: u32,
    pub page: u32,
    pub page_count: u32,
}

/// Inclusive range of mana costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManaRange {
    min: u32,
    max: u32,
}

impl ManaRange {
    /// Fails unless `min <= max <= MAX_MANA_COST`.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max || max > MAX_MANA_COST {
            return Err(Error::InvalidManaRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn exactly(cost: u32) -> Self {
        Self {
            min: cost,
            max: cost,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// The `manaCost` filter value: every cost in the range, comma separated.
    ///
    /// The API only filters on a set of costs, not on a range.
    pub fn to_filter(&self) -> String {
        (self.min..=self.max)
            .map(|cost| cost.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    pub class: String,
    pub mana: ManaRange,
    pub rarity: String,
}

impl CardQuery {
    pub fn new(class: impl Into<String>, mana: ManaRange, rarity: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            mana,
            rarity: rarity.into(),
        }
    }
}

/// Points `url` at `page`, dropping any `page` or `pageLimit` it already had.
pub fn set_page(url: &mut Url, page: u32, page_size: u32) {
    let kept = url
        .query_pairs()
        .filter(|(k, _)| k != "page" && k != "pageLimit")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("page", &page.to_string())
        .append_pair("pageLimit", &page_size.to_string());
}

pub fn page_url<T: Transport>(
    api: &Api<T>,
    query: &CardQuery,
    page: u32,
    page_size: u32,
) -> Result<Url> {
    let mut url = api.url("cards")?;
    url.query_pairs_mut()
        .append_pair("class", &query.class)
        .append_pair("manaCost", &query.mana.to_filter())
        .append_pair("rarity", &query.rarity);
    set_page(&mut url, page, page_size);
    Ok(url)
}

/// Resolves the four metadata ids of `card`. Fails on the first id that
/// doesn't resolve.
pub fn enrich(card: RawCard, metadata: &MetadataStore) -> Result<Card> {
    let rarity = metadata.lookup::<Rarity>(card.rarity_id)?.clone();
    let set = metadata.lookup::<CardSet>(card.set_id)?.clone();
    let class = metadata.lookup::<CardClass>(card.class_id)?.clone();
    let card_type = metadata.lookup::<CardType>(card.type_id)?.clone();
    Ok(Card {
        id: card.id,
        name: card.name,
        image: card.image,
        mana_cost: card.mana_cost,
        class_id: card.class_id,
        class,
        rarity_id: card.rarity_id,
        rarity,
        set_id: card.set_id,
        set,
        type_id: card.type_id,
        card_type,
    })
}

/// Fetches one page of cards matching `query` and enriches all of them.
///
/// A page without cards is an [`Error::EmptyResult`], whether the filter
/// matches nothing or `page` is past the last one.
pub async fn fetch_cards_page<T: Transport>(
    api: &Api<T>,
    metadata: &MetadataStore,
    query: &CardQuery,
    page: u32,
    page_size: u32,
) -> Result<CardsPage<Card>> {
    metadata.ensure_ready()?;
    let url = page_url(api, query, page, page_size)?;
    let raw: CardsPage<RawCard> = api.get(url).await?;
    if raw.cards.is_empty() {
        return Err(Error::EmptyResult {
            class: query.class.clone(),
            page,
        });
    }
    tracing::debug!(
        class = %query.class,
        page,
        page_count = raw.page_count,
        cards = raw.cards.len(),
        "fetched cards"
    );
    let cards = raw
        .cards
        .into_iter()
        .map(|card| enrich(card, metadata))
        .collect::<Result<Vec<_>>>()?;
    Ok(CardsPage {
        cards,
        card_count: raw.card_count,
        page: raw.page,
        page_count: raw.page_count,
    })
}

pub async fn fetch_page<T: Transport>(
    api: &Api<T>,
    metadata: &MetadataStore,
    query: &CardQuery,
    page: u32,
    page_size: u32,
) -> Result<Vec<Card>> {
    Ok(fetch_cards_page(api, metadata, query, page, page_size)
        .await?
        .cards)
}

/// First page of cards for each class, concatenated in the order given.
///
/// Classes are fetched one after the other; the first failure is returned
/// and the cards gathered so far are dropped.
pub async fn fetch_for_classes<T, S>(
    api: &Api<T>,
    metadata: &MetadataStore,
    classes: &[S],
    mana: ManaRange,
    rarity: &str,
) -> Result<Vec<Card>>
where
    T: Transport,
    S: AsRef<str> + Sync,
{
    let mut cards = Vec::new();
    for class in classes {
        let query = CardQuery::new(class.as_ref(), mana, rarity);
        cards.extend(fetch_page(api, metadata, &query, FIRST_PAGE, CLASS_PAGE_SIZE).await?);
    }
    Ok(cards)
}

#[allow(dead_code)]
fn _assert() {
    fn is_send<T: Send>(_: T) {}
    let api = Api::new(
        crate::transport::canned::Canned::new(),
        &crate::Config::default(),
    );
    let metadata = MetadataStore::default();
    is_send(fetch_for_classes(
        &api,
        &metadata,
        &["mage"],
        ManaRange::exactly(1),
        "common",
    ));
}
