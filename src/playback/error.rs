use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The current source could not be opened or decoded.
    #[error("audio unavailable: {0}")]
    MediaLoad(String),
    /// A seek was requested before the track length was known.
    #[error("track length not known yet")]
    MediaPositionUnknown,
    #[error("no track at position {0}")]
    UnknownTrack(usize),
}
