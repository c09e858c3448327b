//! The admin roster: normalization of the host supplied list and the searchable card grid.
mod grid;

use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::AppHandle;

pub use grid::{AdminGrid, Props};

use crate::consts::{
    ADMIN_DATA_MISSING, ADMIN_EMPTY_DESC_SELECTOR, ADMIN_EMPTY_ID, ADMIN_GRID_ID,
    ADMIN_SEARCH_ID, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_ROLE,
};
use crate::utils::{element_by_id, query_in, set_display};
use crate::Error;

/// A fully defaulted admin entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminRecord {
    pub name: String,
    pub role: String,
    /// Path or url of the avatar image. Empty if there is none.
    pub avatar: String,
    /// Explicit profile url. Empty if there is none.
    pub url: String,
    /// Provider name to profile url.
    pub socials: BTreeMap<String, String>,
}

impl AdminRecord {
    /// Builds a record from an arbitrary JSON value, substituting placeholders for anything
    /// missing or malformed.
    pub fn from_value(value: &Value) -> Self {
        let socials = value
            .get("socials")
            .and_then(Value::as_object)
            .map(|socials| {
                socials
                    .iter()
                    .filter_map(|(provider, url)| Some((provider.clone(), text(Some(url))?)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: text(value.get("name")).unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_owned()),
            role: text(value.get("role")).unwrap_or_else(|| DEFAULT_ADMIN_ROLE.to_owned()),
            avatar: text(value.get("avatar")).unwrap_or_default(),
            url: text(value.get("url")).unwrap_or_default(),
            socials,
        }
    }

    /// Returns the single outbound link of this admin.
    ///
    /// The explicit url wins, then the discord profile, then the roblox profile.
    pub fn primary_link(&self) -> Option<&str> {
        if !self.url.is_empty() {
            return Some(&self.url);
        }

        ["discord", "roblox"]
            .iter()
            .find_map(|provider| self.socials.get(*provider))
            .map(String::as_str)
    }

    /// Returns the uppercased first letter of the name, or `?` for an empty name.
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// Returns `true` if the lowercase `query` is part of the name or role.
    fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self.name.to_lowercase().contains(query)
            || self.role.to_lowercase().contains(query)
    }
}

/// Reads a scalar as trimmed text. Blank strings, objects and arrays count as missing.
fn text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Normalizes the admin list supplied by the host. Anything that is not an array yields an
/// empty list.
pub fn normalize(value: &Value) -> Vec<AdminRecord> {
    match value.as_array() {
        Some(list) => list.iter().map(AdminRecord::from_value).collect(),
        None => Vec::new(),
    }
}

/// Returns the records whose name or role contains `query`, ignoring case.
pub fn filter<'a>(records: &'a [AdminRecord], query: &str) -> Vec<&'a AdminRecord> {
    let query = query.trim().to_lowercase();

    records
        .iter()
        .filter(|record| record.matches(&query))
        .collect()
}

/// The mounted admin grid.
pub struct AdminDirectory {
    _app: AppHandle<AdminGrid>,
}

impl AdminDirectory {
    /// Normalizes `admins` and mounts the grid into the page.
    pub fn mount(admins: &Value) -> Result<Self, Error> {
        let grid = element_by_id(ADMIN_GRID_ID)?;
        let empty = element_by_id(ADMIN_EMPTY_ID).ok();
        let search = element_by_id(ADMIN_SEARCH_ID)
            .ok()
            .and_then(|search| search.dyn_into::<HtmlInputElement>().ok());

        if !admins.is_array() {
            log::warn!("Admin data is missing or not a list");
        }

        let records = normalize(admins);
        log::debug!("Loaded {} admins", records.len());

        if records.is_empty() {
            if let Some(empty) = &empty {
                set_display(empty, "block");

                if let Ok(desc) = query_in(empty, ADMIN_EMPTY_DESC_SELECTOR) {
                    desc.set_text_content(Some(ADMIN_DATA_MISSING));
                }
            }
        }

        grid.set_inner_html("");
        let app = yew::start_app_with_props_in_element::<AdminGrid>(
            grid,
            Props {
                records: Rc::new(records),
                search,
                empty,
            },
        );

        Ok(Self { _app: app })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{filter, normalize, AdminRecord};

    fn record(value: serde_json::Value) -> AdminRecord {
        AdminRecord::from_value(&value)
    }

    #[test]
    fn test_normalize_not_a_list() {
        for value in [
            json!(null),
            json!({}),
            json!("admins"),
            json!(3),
            json!({"name": "Abby"}),
        ] {
            assert!(normalize(&value).is_empty(), "{} produced records", value);
        }
    }

    #[test]
    fn test_normalize_defaults() {
        let records = normalize(&json!([
            null,
            7,
            "abby",
            [],
            {},
            {"name": null, "role": null, "socials": null},
            {"name": "   ", "role": "", "avatar": {}, "url": ["x"], "socials": "discord"},
            {"name": {"first": "Abby"}, "role": true}
        ]));

        assert_eq!(records.len(), 8);
        for record in &records[..7] {
            assert_eq!(record.name, "Unknown");
            assert_eq!(record.role, "Staff");
            assert_eq!(record.avatar, "");
            assert_eq!(record.url, "");
            assert!(record.socials.is_empty());
        }

        assert_eq!(records[7].name, "Unknown");
        assert_eq!(records[7].role, "true");
    }

    #[test]
    fn test_normalize_full() {
        let admin = record(json!({
            "name": "Abby",
            "role": "Owner",
            "avatar": "assets/img/admin-abby.jpg",
            "url": "https://example.com/abby",
            "socials": {
                "discord": "https://discord.com/users/1",
                "roblox": "https://www.roblox.com/users/2/profile",
                "youtube": 5,
                "x": null
            }
        }));

        assert_eq!(admin.name, "Abby");
        assert_eq!(admin.role, "Owner");
        assert_eq!(admin.avatar, "assets/img/admin-abby.jpg");
        assert_eq!(admin.url, "https://example.com/abby");
        assert_eq!(admin.socials.len(), 3);
        assert_eq!(admin.socials["youtube"], "5");
        assert!(!admin.socials.contains_key("x"));
    }

    #[test]
    fn test_primary_link() {
        let discord = "https://discord.com/users/1";
        let roblox = "https://www.roblox.com/users/2/profile";

        let admin = record(json!({
            "url": "https://example.com",
            "socials": {"discord": discord, "roblox": roblox}
        }));
        assert_eq!(admin.primary_link(), Some("https://example.com"));

        let admin = record(json!({"socials": {"discord": discord, "roblox": roblox}}));
        assert_eq!(admin.primary_link(), Some(discord));

        let admin = record(json!({"url": "", "socials": {"roblox": roblox}}));
        assert_eq!(admin.primary_link(), Some(roblox));

        let admin = record(json!({"socials": {"discord": "", "roblox": roblox}}));
        assert_eq!(admin.primary_link(), Some(roblox));

        let admin = record(json!({"socials": {"youtube": "https://youtube.com"}}));
        assert_eq!(admin.primary_link(), None);

        assert_eq!(AdminRecord::default().primary_link(), None);
    }

    #[test]
    fn test_initial() {
        assert_eq!(record(json!({"name": "abby"})).initial(), 'A');
        assert_eq!(record(json!({"name": "  zed"})).initial(), 'Z');
        assert_eq!(record(json!({})).initial(), 'U');
        assert_eq!(AdminRecord::default().initial(), '?');
    }

    #[test]
    fn test_filter() {
        let records = normalize(&json!([
            {"name": "Abby", "role": "Owner"},
            {"name": "Bolt", "role": "Moderator"},
            {"name": "Cora", "role": "Builder"}
        ]));

        let names = |query: &str| -> Vec<String> {
            filter(&records, query)
                .into_iter()
                .map(|record| record.name.clone())
                .collect()
        };

        assert_eq!(names(""), ["Abby", "Bolt", "Cora"]);
        assert_eq!(names("   "), ["Abby", "Bolt", "Cora"]);
        assert_eq!(names("ab"), ["Abby"]);
        assert_eq!(names("MOD"), ["Bolt"]);
        assert_eq!(names(" o "), ["Abby", "Bolt", "Cora"]);
        assert_eq!(names("er"), ["Abby", "Bolt", "Cora"]);
        assert_eq!(names("nobody"), Vec::<String>::new());
    }
}
