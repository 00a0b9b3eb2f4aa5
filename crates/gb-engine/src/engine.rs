use crate::error::Result;
use crate::hooks::EngineHooks;

/// Outcome of a single engine operation.
///
/// This status is the authoritative failure signal; whatever text the engine
/// pushed through its error handler is diagnostic context only and never
/// drives control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Ok,
    Failed,
}

/// The external geometry engine, treated as an opaque capability.
///
/// Implementations wrap whatever native library actually performs spatial
/// operations; this crate never looks inside. The contract mirrors the
/// engine's C lifecycle: `initialize` registers the notice/error handlers for
/// the lifetime of the binding, `operate` runs one request against the
/// engine, and `destroy` tears the binding down, after which the engine must
/// not invoke the hooks again.
pub trait GeometryEngine {
    /// Bind the engine to the given handlers. Called exactly once per
    /// context, before any `operate`.
    fn initialize(&mut self, hooks: &EngineHooks) -> Result<()>;

    /// Run one operation. The request text is opaque to this crate. On
    /// `Failed` the engine is expected to have reported details through the
    /// error handler first.
    fn operate(&mut self, request: &str) -> EngineStatus;

    /// Release engine resources and unregister the handlers.
    fn destroy(&mut self);
}
