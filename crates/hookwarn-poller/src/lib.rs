//! hookwarn-poller: the adaptive poll engine.
//! Fetch and surface IO seams plus the per-banner poller instance that
//! ties them to the core schedule. No process-wide state — every banner
//! mount gets its own `Poller`.

pub mod engine;
pub mod fetch;
pub mod surface;

pub use engine::Poller;
pub use fetch::{DEFAULT_TIMEOUT_SECS, Fetch, FetchError, HttpFetcher};
pub use surface::{FileSurface, MemorySurface, Surface, SurfaceError};
