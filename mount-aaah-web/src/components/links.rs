//! Points every `[data-link]` element at the url configured for its key.
use crate::consts::{LINK_EXTERNAL_ATTR, LINK_KEY_ATTR, LINK_SELECTOR};
use crate::utils::{query_all, set_attribute};
use crate::SiteConfig;

/// Returns the attributes an element linking to `key` receives, or `None` if `key` has no
/// configured url.
pub fn attributes<'a>(
    config: &'a SiteConfig,
    key: &str,
    external: bool,
) -> Option<Vec<(&'static str, &'a str)>> {
    let url = config.link(key)?;

    let mut attrs = vec![("href", url)];
    if external {
        attrs.push(("target", "_blank"));
        attrs.push(("rel", "noreferrer"));
    }

    Some(attrs)
}

/// Hydrates all link elements in the document and returns how many were updated.
pub fn hydrate(config: &SiteConfig) -> usize {
    let mut hydrated = 0;

    for element in query_all(LINK_SELECTOR) {
        let key = match element.get_attribute(LINK_KEY_ATTR) {
            Some(key) => key,
            None => continue,
        };

        let external = element.has_attribute(LINK_EXTERNAL_ATTR);
        match attributes(config, &key, external) {
            Some(attrs) => {
                for (name, value) in attrs {
                    set_attribute(&element, name, value);
                }

                hydrated += 1;
            }
            None => log::debug!("No url configured for link {:?}", key),
        }
    }

    hydrated
}

#[cfg(test)]
mod tests {
    use super::attributes;
    use crate::SiteConfig;

    #[test]
    fn test_link_attributes() {
        let config = SiteConfig::default();

        assert_eq!(attributes(&config, "discord", false), Some(vec![("href", "#")]));
        assert_eq!(
            attributes(&config, "roblox", true),
            Some(vec![
                ("href", "#"),
                ("target", "_blank"),
                ("rel", "noreferrer")
            ])
        );
        assert_eq!(attributes(&config, "unknown", true), None);
    }
}
