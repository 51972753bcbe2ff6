//! Outbound application events.
//!
//! The [`SessionController`](super::service::SessionController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on the
//! other side decide what to do with them — the firmware logs them to serial.

/// Structured events emitted by the session core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A session began (or restarted) at stage 0.
    SessionStarted,

    /// A session was stopped by explicit command before completing.
    SessionStopped,

    /// A status query detected a stage-boundary crossing.
    StageChanged {
        from: usize,
        to: usize,
        name: &'static str,
    },

    /// The session ran through its full timeline and latched terminal state.
    SessionFinished,
}
