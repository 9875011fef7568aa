use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GlobeError {
    #[error("unknown data layer `{0}` (expected birds, radio or both)")]
    UnknownLayer(String),
    #[error("unknown region `{0}`")]
    UnknownRegion(String),
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("no handler registered for {0:?} events")]
    MissingHandler(crate::dispatch::EventKind),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
