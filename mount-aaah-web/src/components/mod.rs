pub mod admin;
pub mod asset_gallery;
pub mod links;
pub mod nav_drawer;
pub mod player_counter;
pub mod year;
