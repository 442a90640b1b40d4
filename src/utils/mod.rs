// Utility functions
pub mod error;
pub mod pretty;

pub use error::*;
pub use pretty::*;
