//! Unified source abstraction for vault items.
//!
//! This module provides the `ItemSource` trait along with the real `op` CLI
//! implementation and a configurable mock for tests.

pub mod mock;
pub mod op;
pub mod traits;

// Re-export key types
pub use mock::{MockSource, MockSourceConfig};
pub use op::OpCli;
pub use traits::ItemSource;
