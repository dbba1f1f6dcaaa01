// Library surface for integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod console;
pub mod input;
pub mod menu;
pub mod report;
pub mod session;
pub mod stats;
pub mod store;
