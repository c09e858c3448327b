use std::collections::BTreeMap;

use log::LevelFilter;
use mount_aaah_api::id::PlaceId;
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::JsValue;

/// Link keys every page can rely on, all pointing nowhere until configured.
const DEFAULT_LINKS: [&str; 4] = ["roblox", "discord", "donate", "trailer"];
const DEFAULT_URL: &str = "#";

/// The resolved site configuration.
///
/// Built once at startup from the object the hosting page passes in and then only handed out
/// by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    links: BTreeMap<String, String>,
    place_id: Option<PlaceId>,
    log_level: LevelFilter,
}

impl SiteConfig {
    /// Resolves the config from the object supplied by the host page. `undefined` and `null`
    /// resolve to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not shaped like a site config.
    pub fn from_js(value: JsValue) -> Result<Self, serde_wasm_bindgen::Error> {
        let partial: Option<PartialConfig> = serde_wasm_bindgen::from_value(value)?;

        Ok(Self::from_partial(partial.unwrap_or_default()))
    }

    /// Merges `partial` over the defaults field by field. A malformed field is logged and
    /// ignored without affecting the others.
    fn from_partial(partial: PartialConfig) -> Self {
        let mut config = Self::default();

        match partial.links {
            Some(Value::Object(links)) => {
                for (key, url) in links {
                    match url {
                        Value::String(url) => {
                            config.links.insert(key, url);
                        }
                        Value::Null => (),
                        url => log::warn!("Ignoring invalid url for link {:?}: {}", key, url),
                    }
                }
            }
            Some(Value::Null) | None => (),
            Some(links) => log::warn!("Ignoring invalid links: {}", links),
        }

        config.place_id = partial.roblox_place_id.and_then(|id| place_id(&id));

        match partial.log_level {
            Some(Value::String(level)) => match level.parse() {
                Ok(level) => config.log_level = level,
                Err(err) => log::warn!("Ignoring invalid log level {:?}: {}", level, err),
            },
            Some(Value::Null) | None => (),
            Some(level) => log::warn!("Ignoring invalid log level {}", level),
        }

        config
    }

    /// Returns the url configured for `key`. Empty urls count as not configured.
    pub fn link(&self, key: &str) -> Option<&str> {
        self.links
            .get(key)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    #[inline]
    pub fn place_id(&self) -> Option<PlaceId> {
        self.place_id
    }

    #[inline]
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            links: DEFAULT_LINKS
                .iter()
                .map(|key| (key.to_string(), DEFAULT_URL.to_owned()))
                .collect(),
            place_id: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// Reads a place id given as a positive integer or as its decimal text. Blank text means not
/// configured.
fn place_id(value: &Value) -> Option<PlaceId> {
    let id = match value {
        Value::Null => return None,
        // JavaScript numbers may arrive as floats.
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
                    .map(|n| n as u64)
            })
            .map(PlaceId),
        Value::String(text) if text.trim().is_empty() => return None,
        Value::String(text) => text.parse().ok(),
        _ => None,
    };

    if id.is_none() {
        log::warn!("Ignoring invalid place id {}", value);
    }

    id
}

/// The config object as supplied by the host. Every field may be missing and is validated
/// separately.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PartialConfig {
    links: Option<Value>,
    roblox_place_id: Option<Value>,
    log_level: Option<Value>,
}
