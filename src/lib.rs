use std::sync::OnceLock;

pub mod api;
pub mod auth;
pub mod cards;
pub mod client;
pub mod config;
pub mod metadata;
pub mod transport;

#[cfg(test)]
mod fixtures;

pub use api::Api;
pub use auth::AccessToken;
pub use cards::{Card, CardQuery, CardsPage, ManaRange, RawCard};
pub use client::HearthstoneClient;
pub use config::Config;
pub use metadata::{CardClass, CardSet, CardType, MetadataKind, MetadataStore, Rarity};
pub use transport::Transport;

static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
fn http() -> &'static reqwest::Client {
    CLIENT.get_or_init(Default::default)
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest({0})")]
    Reqwest(#[from] reqwest::Error),
    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },
    #[error("failed to decode response at `{path}`: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("{0} metadata not populated")]
    NotInitialized(MetadataKind),
    #[error("no {kind} with id {id}")]
    NotFound { kind: MetadataKind, id: u32 },
    #[error("no cards found for class {class:?} on page {page}")]
    EmptyResult { class: String, page: u32 },
    #[error("invalid mana range {min}..={max}")]
    InvalidManaRange { min: u32, max: u32 },
    #[error("Url({0})")]
    Url(#[from] url::ParseError),
}
