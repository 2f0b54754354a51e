use crate::{
    api::Api,
    cards::{self, Card, CardQuery, CardsPage, ManaRange},
    config::Config,
    metadata::{CardClass, CardSet, CardType, MetadataStore, Rarity},
    transport::{bearer::Bearer, Transport},
    Result,
};

/// Ready-to-query client for the Hearthstone game-data API.
///
/// Building one authenticates and then loads every metadata table, so a
/// `HearthstoneClient` value is always fully initialized. If building fails
/// there is nothing to retry; build a new one.
#[derive(Debug)]
pub struct HearthstoneClient<T = Bearer> {
    api: Api<T>,
    metadata: MetadataStore,
}

impl HearthstoneClient<Bearer> {
    pub async fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        Self::with_config(Config::default(), client_id, client_secret).await
    }

    pub async fn with_config(config: Config, client_id: &str, client_secret: &str) -> Result<Self> {
        tracing::info!(token_url = %config.token_url, "authenticating");
        let transport = Bearer::authenticate(
            config.http_client()?,
            &config.token_url,
            client_id,
            client_secret,
        )
        .await?;
        Self::with_transport(config, transport).await
    }
}

impl<T: Transport> HearthstoneClient<T> {
    /// Builds a client over an already authorized transport.
    pub async fn with_transport(config: Config, transport: T) -> Result<Self> {
        let api = Api::new(transport, &config);
        let mut metadata = MetadataStore::default();
        tracing::info!(api_url = %config.api_url, locale = %config.locale, "loading metadata");
        metadata.load_all(&api).await?;
        tracing::info!("client ready");
        Ok(Self { api, metadata })
    }

    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    pub fn metadata(&self) -> &MetadataStore {
        &self.metadata
    }

    pub fn rarities(&self) -> &[Rarity] {
        self.metadata.records()
    }

    pub fn sets(&self) -> &[CardSet] {
        self.metadata.records()
    }

    pub fn classes(&self) -> &[CardClass] {
        self.metadata.records()
    }

    pub fn types(&self) -> &[CardType] {
        self.metadata.records()
    }

    pub fn rarity(&self, id: u32) -> Result<&Rarity> {
        self.metadata.lookup(id)
    }

    pub fn set(&self, id: u32) -> Result<&CardSet> {
        self.metadata.lookup(id)
    }

    pub fn class(&self, id: u32) -> Result<&CardClass> {
        self.metadata.lookup(id)
    }

    pub fn card_type(&self, id: u32) -> Result<&CardType> {
        self.metadata.lookup(id)
    }

    /// One page of `class` cards of the given rarity costing `mana_min` to
    /// `mana_max`. Loop over `page` to walk further pages.
    pub async fn fetch_page(
        &self,
        class: &str,
        mana_min: u32,
        mana_max: u32,
        rarity: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Card>> {
        let query = CardQuery::new(class, ManaRange::new(mana_min, mana_max)?, rarity);
        cards::fetch_page(&self.api, &self.metadata, &query, page, page_size).await
    }

    pub async fn fetch_cards_page(
        &self,
        query: &CardQuery,
        page: u32,
        page_size: u32,
    ) -> Result<CardsPage<Card>> {
        cards::fetch_cards_page(&self.api, &self.metadata, query, page, page_size).await
    }

    pub async fn fetch_for_classes<S: AsRef<str> + Sync>(
        &self,
        classes: &[S],
        mana_min: u32,
        mana_max: u32,
        rarity: &str,
    ) -> Result<Vec<Card>> {
        let mana = ManaRange::new(mana_min, mana_max)?;
        cards::fetch_for_classes(&self.api, &self.metadata, classes, mana, rarity).await
    }
}
