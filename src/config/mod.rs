//! Configuration module for the pulse engine.

// Can all be private because we have a public re-export.
mod api;
mod debug;
mod demo;

// Public
pub mod constants;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use debug::DF;
pub use demo::{DEMO, DemoInfluencer};
