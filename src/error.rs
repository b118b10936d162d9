use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("`{0}` is not a 6 digit hex color (expected #RRGGBB)")]
    InvalidHex(String),
    #[error("unknown color format `{0}` (expected rgba, hex or hsla)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    #[error("picker thread has stopped")]
    Disconnected,
    #[error("picker thread panicked")]
    Panicked,
}
