use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FolioError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
    #[error("viewport {width}x{height} is not a drawable size")]
    InvalidViewport { width: f32, height: f32 },
}
