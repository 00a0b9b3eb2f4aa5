use std::collections::HashMap;

use crate::engine::{EngineStatus, GeometryEngine};
use crate::error::{EngineError, Result};
use crate::hooks::EngineHooks;

enum Script {
    FailWith(String),
    NoticeWith(String),
}

/// In-process stand-in for the native geometry engine.
///
/// Used by embedders and tests to exercise the capture path without linking
/// the real engine: requests are matched against a script, and scripted
/// failures report their message through the error hook exactly the way the
/// native engine would, pre-formatted, before returning `Failed`.
#[derive(Default)]
pub struct StubEngine {
    hooks: Option<EngineHooks>,
    script: HashMap<String, Script>,
    init_refusal: Option<String>,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `request` to report `message` through the error hook and fail.
    pub fn fail_with(mut self, request: impl Into<String>, message: impl Into<String>) -> Self {
        self.script
            .insert(request.into(), Script::FailWith(message.into()));
        self
    }

    /// Script `request` to emit `message` through the notice hook and succeed.
    pub fn notice_with(mut self, request: impl Into<String>, message: impl Into<String>) -> Self {
        self.script
            .insert(request.into(), Script::NoticeWith(message.into()));
        self
    }

    /// Script initialization itself to fail, reporting `message` through the
    /// error hook first (the native engine does the same on e.g. resource
    /// exhaustion).
    pub fn refuse_initialize(mut self, message: impl Into<String>) -> Self {
        self.init_refusal = Some(message.into());
        self
    }
}

impl GeometryEngine for StubEngine {
    fn initialize(&mut self, hooks: &EngineHooks) -> Result<()> {
        if let Some(message) = &self.init_refusal {
            hooks.emit_error(message);
            return Err(EngineError::Init(message.clone()));
        }
        self.hooks = Some(*hooks);
        Ok(())
    }

    fn operate(&mut self, request: &str) -> EngineStatus {
        // Not initialized (or already destroyed): no hooks to report through,
        // the status alone carries the failure.
        let Some(hooks) = self.hooks else {
            return EngineStatus::Failed;
        };
        match self.script.get(request) {
            Some(Script::FailWith(message)) => {
                hooks.emit_error(message);
                EngineStatus::Failed
            }
            Some(Script::NoticeWith(message)) => {
                hooks.emit_notice(message);
                EngineStatus::Ok
            }
            None => EngineStatus::Ok,
        }
    }

    fn destroy(&mut self) {
        self.hooks = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::Reporter;
    use std::sync::Arc;

    #[test]
    fn test_operate_before_initialize_fails() {
        let mut engine = StubEngine::new();
        assert_eq!(engine.operate("anything"), EngineStatus::Failed);
    }

    #[test]
    fn test_operate_after_destroy_fails() {
        let reporter = Arc::new(Reporter::with_stderr_notices());
        let mut engine = StubEngine::new();
        engine.initialize(&reporter.hooks()).unwrap();
        engine.destroy();
        assert_eq!(engine.operate("anything"), EngineStatus::Failed);
    }

    #[test]
    fn test_scripted_failure_reports_before_returning() {
        let reporter = Arc::new(Reporter::with_stderr_notices());
        let mut engine = StubEngine::new().fail_with("intersect", "TopologyException: side location conflict");
        engine.initialize(&reporter.hooks()).unwrap();

        assert_eq!(engine.operate("intersect"), EngineStatus::Failed);
        assert_eq!(
            reporter.store().last_error(),
            "TopologyException: side location conflict"
        );
    }

    #[test]
    fn test_unscripted_request_succeeds_silently() {
        let reporter = Arc::new(Reporter::with_stderr_notices());
        let mut engine = StubEngine::new();
        engine.initialize(&reporter.hooks()).unwrap();

        assert_eq!(engine.operate("union"), EngineStatus::Ok);
        assert!(reporter.store().is_empty());
    }

    #[test]
    fn test_notice_script_does_not_touch_store() {
        let reporter = Arc::new(Reporter::with_stderr_notices());
        let mut engine = StubEngine::new().notice_with("validate", "ring not closed, repaired");
        engine.initialize(&reporter.hooks()).unwrap();

        assert_eq!(engine.operate("validate"), EngineStatus::Ok);
        assert!(reporter.store().is_empty());
    }
}
