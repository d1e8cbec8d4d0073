//! ps-core: shared foundation for the psychrometric workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for flow and power)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PsError, PsResult};
pub use numeric::*;
pub use units::*;
