use crate::http::Request;
use crate::id::UniverseId;
use crate::{Client, Result};

use serde::Deserialize;
use serde_json::Value;

/// The body returned by the games endpoint.
///
/// Only the fields the site reads are modeled, and all of them are optional. `data` is kept as
/// a raw [`Value`] so a malformed list still decodes. Use [`GamesResponse::playing`] to read the
/// player count with its fallback rules applied.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub data: Option<Value>,
}

impl GamesResponse {
    /// Returns the first game in the response. An entry that is not a game object decodes as
    /// an empty [`GameDetails`].
    pub fn first(&self) -> Option<GameDetails> {
        let first = self.data.as_ref()?.as_array()?.first()?;

        Some(GameDetails::deserialize(first).unwrap_or_default())
    }

    /// Returns the player count of the first game in the response, or `0` if there is none.
    pub fn playing(&self) -> u64 {
        self.first().map_or(0, |game| game.playing())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameDetails {
    #[serde(default)]
    pub playing: Option<Value>,
}

impl GameDetails {
    /// Returns the number of players currently in the game.
    ///
    /// A missing, non-numeric or negative value counts as `0`. Fractions are truncated.
    pub fn playing(&self) -> u64 {
        match self.playing.as_ref().and_then(Value::as_f64) {
            Some(n) if n.is_finite() && n > 0.0 => n as u64,
            _ => 0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct GamesClient<'a> {
    client: &'a Client,
}

impl<'a> GamesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the number of players currently playing in the universe with the given `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server does not respond with a 2xx status
    /// code.
    pub async fn playing(&self, id: UniverseId) -> Result<u64> {
        let resp: GamesResponse = self.client.send(self.request(id)).await?.json().await?;

        Ok(resp.playing())
    }

    fn request(&self, id: UniverseId) -> Request {
        self.client
            .games_request()
            .uri(&format!("/v1/games?universeIds={}", id))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::GamesResponse;
    use crate::id::UniverseId;
    use crate::Client;

    fn parse(s: &str) -> GamesResponse {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_games_request() {
        let client = Client::with_base_urls("http://localhost:8080", "http://localhost:8081/");
        let req = client.games().request(UniverseId(383310974));

        assert_eq!(
            req.uri(),
            "http://localhost:8081/v1/games?universeIds=383310974"
        );
    }

    #[test]
    fn test_games_response_playing() {
        assert_eq!(parse(r#"{"data":[{"id":1,"playing":842}]}"#).playing(), 842);
        assert_eq!(parse(r#"{"data":[{"playing":1234567}]}"#).playing(), 1234567);
        assert_eq!(parse(r#"{"data":[{"playing":12.9}]}"#).playing(), 12);
    }

    #[test]
    fn test_games_response_fallback() {
        assert_eq!(parse(r#"{"data":[{"id":1}]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":[{"playing":null}]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":[{"playing":"842"}]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":[{"playing":-5}]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":[]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":null}"#).playing(), 0);
        assert_eq!(parse("{}").playing(), 0);

        // Malformed lists and entries.
        assert_eq!(parse(r#"{"data":[null]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":{}}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":["x"]}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":"games"}"#).playing(), 0);
        assert_eq!(parse(r#"{"data":[[1],{"playing":7}]}"#).playing(), 0);
    }
}
