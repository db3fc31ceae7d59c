//! `navkit-core` — routing primitives shared by every navkit crate.
//!
//! This crate contains **pure** values (no IO, no HTML, no authorization).

pub mod error;
pub mod route;
pub mod value_object;

pub use error::{ConfigError, ConfigResult, RouteError};
pub use route::{Route, areas_equal, names_equal, normalize_segment};
pub use value_object::ValueObject;
