use std::sync::Arc;

use gb_report::NoticeSink;

use crate::engine::{EngineStatus, GeometryEngine};
use crate::error::{EngineError, Result};
use crate::hooks::EngineHooks;
use crate::reporter::Reporter;

/// One configured engine instance bound to one isolated reporter.
///
/// The context owns both halves of the binding: the engine handle and the
/// reporter its handlers write into. Because every context carries its own
/// store, concurrent use across threads needs one context per thread and
/// nothing else; there is no process-wide error state to clobber.
///
/// The application owns the context; dropping it tears the engine binding
/// down via [`GeometryEngine::destroy`].
pub struct EngineContext {
    engine: Box<dyn GeometryEngine>,
    reporter: Arc<Reporter>,
}

impl EngineContext {
    /// Initialize `engine` with the default stderr notice sink.
    pub fn initialize(engine: Box<dyn GeometryEngine>) -> Result<Self> {
        Self::bind(engine, Arc::new(Reporter::with_stderr_notices()))
    }

    /// Initialize `engine` routing notices to a caller-supplied sink.
    pub fn initialize_with(
        engine: Box<dyn GeometryEngine>,
        sink: Box<dyn NoticeSink>,
    ) -> Result<Self> {
        Self::bind(engine, Arc::new(Reporter::new(sink)))
    }

    fn bind(mut engine: Box<dyn GeometryEngine>, reporter: Arc<Reporter>) -> Result<Self> {
        let hooks = reporter.hooks();
        if let Err(e) = engine.initialize(&hooks) {
            // Prefer whatever the engine managed to report before failing.
            let recorded = reporter.store().last_error();
            let message = if recorded.is_empty() { e.to_string() } else { recorded };
            engine.destroy();
            return Err(EngineError::Init(message));
        }
        tracing::debug!(target: "geobridge", "engine context initialized");
        Ok(EngineContext { engine, reporter })
    }

    /// Run one engine operation.
    ///
    /// On failure the last-error text is snapshotted into the returned
    /// [`EngineError::Operation`] immediately, before any further operation
    /// can overwrite the store.
    pub fn operate(&mut self, request: &str) -> Result<()> {
        match self.engine.operate(request) {
            EngineStatus::Ok => Ok(()),
            EngineStatus::Failed => Err(EngineError::Operation {
                request: request.to_string(),
                message: self.reporter.store().last_error(),
            }),
        }
    }

    /// Most recent error text reported by the engine; empty string if none.
    ///
    /// The store holds only the latest message, so read it right after a
    /// failed operation. Text from an earlier, unrelated operation may
    /// otherwise be returned.
    pub fn last_error(&self) -> String {
        self.reporter.store().last_error()
    }

    /// Read and clear the last-error text in one step.
    pub fn take_error(&self) -> Option<String> {
        self.reporter.store().take_error()
    }

    /// The handler triple this context registered, for engines that need to
    /// re-register them (e.g. after an internal reset).
    pub fn hooks(&self) -> EngineHooks {
        self.reporter.hooks()
    }
}

impl Drop for EngineContext {
    fn drop(&mut self) {
        self.engine.destroy();
        tracing::debug!(target: "geobridge", "engine context destroyed");
    }
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext")
            .field("reporter", &self.reporter)
            .finish()
    }
}
