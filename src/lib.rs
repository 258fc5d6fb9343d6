// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod analysis;
pub mod api;
pub mod config;
pub mod runtime;
pub mod score;
pub mod summary;
pub mod wod;
