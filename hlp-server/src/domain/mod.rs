//! Domain types for the HLP itinerary server.
//!
//! This module contains the value types that represent authored empty-run
//! routes. Structural validation (non-empty endpoints, non-empty itinerary)
//! happens when the catalog is loaded, so code that receives a catalog can
//! trust every `Route` in it.

mod category;
mod route;

pub use category::Category;
pub use route::{Route, Step};
