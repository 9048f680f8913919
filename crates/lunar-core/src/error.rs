use thiserror::Error;

/// Configuration errors raised while building view tables or parsing routes.
///
/// Event handling itself never fails; missing coordinates are `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LunarError {
    #[error("overlay key `{0}` is listed more than once")]
    DuplicateOverlayKey(String),
    #[error("overlay resource `{0}` is shared by more than one key")]
    DuplicateOverlayResource(String),
    #[error("overlay table has an empty default resource")]
    EmptyDefaultResource,
    #[error("no view is mounted at route `{0}`")]
    UnknownRoute(String),
}

pub type Result<T> = std::result::Result<T, LunarError>;
