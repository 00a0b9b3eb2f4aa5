//! `gb-engine` - Engine capability trait, message handlers, and context
//! lifecycle for geobridge.
//!
//! The external geometry engine is modeled as a capability, not
//! reimplemented: this crate defines the `GeometryEngine` trait, the
//! C-compatible notice/error handler surface the engine invokes, and the
//! `EngineContext` that binds one engine instance to one isolated
//! error store.

pub mod context;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod reporter;
pub mod stub;

pub use context::EngineContext;
pub use engine::{EngineStatus, GeometryEngine};
pub use error::{EngineError, Result};
pub use hooks::{EngineHooks, MessageHandler};
pub use reporter::Reporter;
pub use stub::StubEngine;
