//! Compile-time constants: the page contract and the fixed display strings.

/// Elements carrying `data-link="<key>"` get their `href` from the site config.
pub const LINK_SELECTOR: &str = "[data-link]";
pub const LINK_KEY_ATTR: &str = "data-link";
/// Marks a hydrated link that should open in a new browsing context.
pub const LINK_EXTERNAL_ATTR: &str = "data-external";

pub const YEAR_ID: &str = "year";

pub const NAV_SELECTOR: &str = "header.nav";
pub const NAV_TOGGLE_SELECTOR: &str = "[data-nav-toggle]";
pub const NAV_DRAWER_SELECTOR: &str = "[data-nav-drawer]";
pub const NAV_OVERLAY_SELECTOR: &str = "[data-nav-overlay]";
pub const NAV_LINKS_SELECTOR: &str = ".nav__links";
pub const NAV_OPEN_CLASS: &str = "is-open";

/// Viewport width above which the mobile drawer is always closed.
pub const NAV_BREAKPOINT: f64 = 900.0;

pub const TAB_SELECTOR: &str = ".tab";
pub const TAB_FILTER_ATTR: &str = "data-filter";
pub const TAB_ACTIVE_CLASS: &str = "is-active";
pub const ASSET_CARD_SELECTOR: &str = "#assetGrid .product";
pub const ASSET_CATEGORY_ATTR: &str = "data-cat";
pub const ASSET_NAME_ATTR: &str = "data-name";
pub const ASSET_SEARCH_ID: &str = "assetSearch";
pub const ASSET_EMPTY_ID: &str = "assetEmpty";
pub const ASSET_NOTE_SELECTOR: &str = ".assetsNote";

/// The tab filter matching every category.
pub const ALL_CATEGORIES: &str = "all";

pub const ADMIN_GRID_ID: &str = "adminGrid";
pub const ADMIN_EMPTY_ID: &str = "adminEmpty";
pub const ADMIN_SEARCH_ID: &str = "adminSearch";
pub const ADMIN_EMPTY_DESC_SELECTOR: &str = ".assetEmpty__desc";
pub const ADMIN_DATA_MISSING: &str =
    "Admin data not loaded. Check that the admin list is passed to the site script.";

pub const DEFAULT_ADMIN_NAME: &str = "Unknown";
pub const DEFAULT_ADMIN_ROLE: &str = "Staff";

pub const PLAYERS_ID: &str = "livePlayers";
pub const PLAYERS_LABEL_ID: &str = "livePlayersLabel";
pub const PLAYERS_ONLINE_CLASS: &str = "is-online";

/// Delay between two player count polls, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 30_000;

pub const TEXT_LOADING: &str = "…";
pub const TEXT_UNAVAILABLE: &str = "—";
pub const LABEL_ONLINE: &str = "Players Online";
pub const LABEL_UNAVAILABLE: &str = "Unavailable";
