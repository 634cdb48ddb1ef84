//! Bible catalog
//!
//! Dataset types, the books index cache and the resolution pipeline.

mod cache;
mod error;
mod resolver;
mod types;

pub use cache::*;
pub use error::*;
pub use resolver::*;
pub use types::*;
