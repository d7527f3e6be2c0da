//! irisd serving process
//!
//! Loads the trained classifier artifact once at startup and serves
//! synchronous inference (`POST /predict`) plus a health probe
//! (`GET /health`). The load outcome is held as process-wide read-only
//! state: a missing or corrupt artifact degrades `/predict` to 503 while
//! the process itself stays up and reachable.

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppState, LoadState};
