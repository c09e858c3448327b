//! Client for the public game platform endpoints the site reads from.
//!
//! Only two read-only lookups are supported: resolving a place to its universe and reading the
//! live player count of a universe.
pub mod games;
pub mod http;
pub mod id;
pub mod universes;

use std::borrow::Cow;

pub use ::http::StatusCode;

use self::games::GamesClient;
use self::http::{Request, RequestBuilder, Response};
use self::id::PlaceId;
use self::universes::UniversesClient;

use thiserror::Error;

/// Default base url of the universe lookup endpoint.
pub const UNIVERSES_BASE: &str = "https://apis.roblox.com";

/// Default base url of the games endpoint.
pub const GAMES_BASE: &str = "https://games.roblox.com";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] http::Error),
    #[error("unexpected status code: {0}")]
    Status(StatusCode),
    #[error("place {0} has no universe")]
    NoUniverse(PlaceId),
}

#[derive(Clone, Debug)]
pub struct Client {
    universes_base: Cow<'static, str>,
    games_base: Cow<'static, str>,
    http: http::Client,
}

impl Client {
    /// Creates a new `Client` talking to the public platform endpoints.
    pub fn new() -> Self {
        Self::with_base_urls(UNIVERSES_BASE, GAMES_BASE)
    }

    pub fn with_base_urls<T, U>(universes_base: T, games_base: U) -> Self
    where
        T: Into<Cow<'static, str>>,
        U: Into<Cow<'static, str>>,
    {
        Self {
            universes_base: universes_base.into(),
            games_base: games_base.into(),
            http: http::Client::new(),
        }
    }

    pub fn universes(&self) -> UniversesClient<'_> {
        UniversesClient::new(self)
    }

    pub fn games(&self) -> GamesClient<'_> {
        GamesClient::new(self)
    }

    pub(crate) fn universes_request(&self) -> RequestBuilder {
        RequestBuilder::new(&self.universes_base)
            .get()
            .header("Accept", "application/json")
    }

    pub(crate) fn games_request(&self) -> RequestBuilder {
        RequestBuilder::new(&self.games_base)
            .get()
            .header("Accept", "application/json")
    }

    /// Sends the request, rejecting any response without a 2xx status code.
    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        log::debug!("GET {}", request.uri());

        let resp = self.http.send(request).await?;
        if !resp.is_success() {
            return Err(Error::Status(resp.status()));
        }

        Ok(resp)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
