use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while reading icon properties from configuration input.
///
/// Rendering itself never fails; only parsing a property bag can.
pub enum IconPropertiesError {
    /// A size token was neither a known size name nor a positive pixel count.
    #[error("invalid icon size `{0}`: expected xs, sm, md, lg, or a pixel count")]
    InvalidSize(String),
    /// The serialized property bag could not be decoded.
    #[error("malformed icon properties: {0}")]
    Json(#[from] serde_json::Error),
}
