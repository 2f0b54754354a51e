use hearthstone_cards::{Config, HearthstoneClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client_id = std::env::var("HEARTHSTONE_CLIENT_ID").unwrap();
    let client_secret = std::env::var("HEARTHSTONE_CLIENT_SECRET").unwrap();
    let mut config = Config::default();
    if let Ok(locale) = std::env::var("HEARTHSTONE_LOCALE") {
        config = config.with_locale(locale);
    }

    let client = HearthstoneClient::with_config(config, &client_id, &client_secret)
        .await
        .unwrap();
    let cards = client
        .fetch_for_classes(&["mage", "warrior"], 1, 3, "common")
        .await
        .unwrap();
    for c in cards {
        println!(
            "{:>3} {:<30} {:<10} {:<8} {:<10} {}",
            c.mana_cost, c.name, c.class.name, c.rarity.name, c.card_type.name, c.set.name
        );
    }
}
