use std::sync::{Mutex, PoisonError};

use url::Url;

use crate::{Error, Result};

/// Offline transport answering from a fixed set of responses.
///
/// A route matches when the request path ends with the route path and every
/// query pair of the route is present in the request. The first registered
/// match wins; requests without a match get a 404. Every request is recorded.
#[derive(Debug, Default)]
pub struct Canned {
    routes: Vec<Route>,
    requests: Mutex<Vec<Url>>,
}

#[derive(Debug)]
struct Route {
    path: String,
    query: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Route {
    fn matches(&self, url: &Url) -> bool {
        url.path().ends_with(&self.path)
            && self
                .query
                .iter()
                .all(|(k, v)| url.query_pairs().any(|(qk, qv)| qk == *k && qv == *v))
    }
}

impl Canned {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, path: &str, body: impl Into<Vec<u8>>) -> Self {
        self.route_query(path, &[], body)
    }

    pub fn route_query(
        mut self,
        path: &str,
        query: &[(&str, &str)],
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.routes.push(Route {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.into(),
        });
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait::async_trait]
impl super::Transport for Canned {
    async fn get(&self, url: Url) -> Result<Vec<u8>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.clone());
        match self.routes.iter().find(|r| r.matches(&url)) {
            Some(route) => Ok(route.body.clone()),
            None => Err(Error::Api {
                status_code: 404,
                message: format!("no canned response for {url}"),
            }),
        }
    }
}
