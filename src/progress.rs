// src/progress.rs
/// Where a run currently is. A run only ever moves forward; a new report
/// starts again from `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Parsed,
    Extracted,
    Aggregated,
    /// Terminal: summary is non-empty and ready to show/export.
    Presented,
    /// Terminal: nothing failed (informational, not an error).
    NoFailures,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Presented | Stage::NoFailures)
    }
}

/// Lightweight progress reporting for a run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called on every stage transition.
    fn stage(&mut self, _stage: Stage) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every stage and status line it sees. Handy for tests and logging.
#[derive(Debug, Default)]
pub struct StageLog {
    pub stages: Vec<Stage>,
    pub messages: Vec<String>,
}

impl Progress for StageLog {
    fn stage(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
    fn log(&mut self, msg: &str) {
        self.messages.push(s!(msg));
    }
}
