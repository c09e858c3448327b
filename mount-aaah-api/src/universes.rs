use crate::http::Request;
use crate::id::{PlaceId, UniverseId};
use crate::{Client, Error, Result};

use serde::Deserialize;

/// The body returned by the place-to-universe lookup.
///
/// Every field is optional; a body without a `universeId` is treated as a failed lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniverseLookup {
    #[serde(default)]
    pub universe_id: Option<UniverseId>,
}

#[derive(Copy, Clone, Debug)]
pub struct UniversesClient<'a> {
    client: &'a Client,
}

impl<'a> UniversesClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Resolves the [`UniverseId`] the place with the given `id` belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server does not respond with a 2xx status
    /// code or the response does not contain a universe.
    pub async fn get_by_place(&self, id: PlaceId) -> Result<UniverseId> {
        let lookup: UniverseLookup = self.client.send(self.request(id)).await?.json().await?;

        lookup.universe_id.ok_or(Error::NoUniverse(id))
    }

    fn request(&self, id: PlaceId) -> Request {
        self.client
            .universes_request()
            .uri(&format!("/universes/v1/places/{}/universe", id))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::UniverseLookup;
    use crate::id::{PlaceId, UniverseId};
    use crate::Client;

    #[test]
    fn test_universe_request() {
        let client = Client::new();
        let req = client.universes().request(PlaceId(920587237));

        assert_eq!(
            req.uri(),
            "https://apis.roblox.com/universes/v1/places/920587237/universe"
        );
    }

    #[test]
    fn test_universe_lookup() {
        let lookup: UniverseLookup = serde_json::from_str(r#"{"universeId":383310974}"#).unwrap();
        assert_eq!(lookup.universe_id, Some(UniverseId(383310974)));

        let lookup: UniverseLookup = serde_json::from_str(r#"{"universeId":null}"#).unwrap();
        assert_eq!(lookup.universe_id, None);

        let lookup: UniverseLookup = serde_json::from_str("{}").unwrap();
        assert_eq!(lookup.universe_id, None);
    }
}
