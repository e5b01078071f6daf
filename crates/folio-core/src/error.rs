use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("failed to start frame loop: {0}")]
    FrameLoop(String),
    #[error("render surface error: {0}")]
    Surface(String),
}
