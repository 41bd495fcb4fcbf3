use thiserror::Error;

/// Reasons the driver degrades to Idle. None of these reach the host page;
/// they are logged and the background simply stops rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("drawing surfaces are not attached")]
    MissingSurface,
    #[error("frame request rejected: {0}")]
    ScheduleRejected(String),
}
