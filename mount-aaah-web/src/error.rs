use thiserror::Error;

/// Reasons a widget could not be set up or updated.
///
/// None of these are fatal: the affected widget is skipped or degraded and the rest of the page
/// keeps working.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("`{0}` is not configured")]
    NotConfigured(&'static str),
    #[error("no {0} found")]
    Empty(&'static str),
    #[error(transparent)]
    Api(#[from] mount_aaah_api::Error),
}
