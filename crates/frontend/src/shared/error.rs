use thiserror::Error;

/// Failures the panel absorbs at its reactive boundary.
///
/// None of these tear the panel down: a failed config fetch keeps the panel gated,
/// a malformed location signal is dropped, an undecodable host property leaves
/// the previous value in place.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("configuration fetch failed: {0}")]
    ConfigurationFetch(String),

    #[error("no config entry found for domain '{0}'")]
    NoConfigEntry(String),

    #[error("malformed location signal: {0}")]
    MalformedLocationSignal(String),

    #[error("invalid host property: {0}")]
    HostProperty(String),
}
