//! Inbound commands to the session controller.
//!
//! These represent actions requested by the outside world (the HTTP routes
//! today) that the [`SessionController`](super::service::SessionController)
//! interprets and acts upon.  Commands never fail: repeating one converges
//! to the same state, so duplicate or out-of-order requests from a flaky
//! client need no special handling.

/// Commands that external adapters can send into the session core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Begin a new session at stage 0, discarding any session in progress.
    Start,

    /// End the current session without forcing completion state.  A session
    /// stopped this way reads back as idle, not finished.
    Stop,
}
