use crate::error::EngineError;

/// Handle for one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub i32);

/// "Run the frame callback once, soon" primitive, typically tied to the
/// display refresh. Each request yields exactly one callback unless cancelled.
pub trait FrameScheduler {
    fn request(&mut self) -> Result<FrameToken, EngineError>;

    /// Cancel a pending request. Cancelling a token that already fired or was
    /// already cancelled must be harmless.
    fn cancel(&mut self, token: FrameToken);
}
