use std::time::Duration;

pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_API_URL: &str = "https://us.api.blizzard.com/hearthstone";
pub const DEFAULT_TOKEN_URL: &str = "https://us.battle.net/oauth/token";

/// Where and how the client talks to the game-data API.
///
/// The defaults target the US region in `en_US`. No timeout is applied unless
/// one is set, so a hung request waits forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub api_url: String,
    pub token_url: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The HTTP client requests should go through.
    ///
    /// Without a timeout this is the process-wide shared client.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        match self.timeout {
            Some(timeout) => reqwest::Client::builder().timeout(timeout).build(),
            None => Ok(crate::http().clone()),
        }
    }
}
