#![deny(unused_crate_dependencies)]
// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

pub mod components;
mod config;
mod consts;
mod error;
mod logger;
mod utils;

use log::LevelFilter;
use serde_json::Value;
use wasm_bindgen::prelude::*;

pub use config::SiteConfig;
pub use error::Error;

use components::admin::AdminDirectory;
use components::asset_gallery::AssetGallery;
use components::nav_drawer::NavDrawer;
use components::player_counter::{CounterHandle, CounterState};
use components::{links, year};

/// Starts all widgets on the current page.
///
/// `config` is the site config object and `admins` the admin list. Either may be `undefined`,
/// in which case the defaults are used. Call this once the document has been parsed.
#[wasm_bindgen]
pub fn run(config: JsValue, admins: JsValue) -> Site {
    // SAFETY: Called from a single threaded context. No race conditions can occur.
    unsafe {
        logger::init(LevelFilter::Trace);
    }

    let config = match SiteConfig::from_js(config) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Invalid site config, falling back to defaults: {}", err);
            SiteConfig::default()
        }
    };

    let admins = match serde_wasm_bindgen::from_value::<Value>(admins) {
        Ok(admins) => admins,
        Err(err) => {
            log::warn!("Failed to read admin data: {}", err);
            Value::Null
        }
    };

    run_with_config(&config, &admins)
}

/// Starts all widgets with an already resolved config.
pub fn run_with_config(config: &SiteConfig, admins: &Value) -> Site {
    log::set_max_level(config.log_level());

    let hydrated = links::hydrate(config);
    log::debug!("Hydrated {} links", hydrated);

    if let Err(err) = year::set_year() {
        log::debug!("Skipping footer year: {}", err);
    }

    Site {
        nav_drawer: init("nav drawer", NavDrawer::new()),
        asset_gallery: init("asset gallery", AssetGallery::new()),
        admins: init("admin directory", AdminDirectory::mount(admins)),
        players: init("player counter", CounterHandle::start(config)),
    }
}

fn init<T>(name: &str, res: Result<T, Error>) -> Option<T> {
    match res {
        Ok(widget) => {
            log::debug!("Started {}", name);
            Some(widget)
        }
        Err(err) => {
            log::debug!("Skipping {}: {}", name, err);
            None
        }
    }
}

/// The running widgets of a page.
///
/// Dropping the `Site` (or calling `free()` from JavaScript) removes all event listeners and
/// stops the player counter.
#[wasm_bindgen]
pub struct Site {
    nav_drawer: Option<NavDrawer>,
    asset_gallery: Option<AssetGallery>,
    admins: Option<AdminDirectory>,
    players: Option<CounterHandle>,
}

#[wasm_bindgen]
impl Site {
    #[wasm_bindgen(js_name = openNav)]
    pub fn open_nav(&self) {
        if let Some(nav) = &self.nav_drawer {
            nav.open();
        }
    }

    #[wasm_bindgen(js_name = closeNav)]
    pub fn close_nav(&self) {
        if let Some(nav) = &self.nav_drawer {
            nav.close();
        }
    }

    #[wasm_bindgen(js_name = toggleNav)]
    pub fn toggle_nav(&self) {
        if let Some(nav) = &self.nav_drawer {
            nav.toggle();
        }
    }

    #[wasm_bindgen(js_name = isNavOpen)]
    pub fn is_nav_open(&self) -> bool {
        self.nav_drawer.as_ref().map_or(false, NavDrawer::is_open)
    }

    /// Re-applies the asset filter, e.g. after cards were changed by other scripts. Returns the
    /// number of visible cards.
    #[wasm_bindgen(js_name = refreshAssets)]
    pub fn refresh_assets(&self) -> usize {
        self.asset_gallery
            .as_ref()
            .map_or(0, AssetGallery::refresh)
    }

    #[wasm_bindgen(js_name = hasAdmins)]
    pub fn has_admins(&self) -> bool {
        self.admins.is_some()
    }

    /// Returns `true` once the player counter resolved its universe and polls the count.
    #[wasm_bindgen(js_name = isPolling)]
    pub fn is_polling(&self) -> bool {
        self.players
            .as_ref()
            .map_or(false, |players| players.state() == CounterState::Polling)
    }
}
