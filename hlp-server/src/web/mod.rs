//! Web layer for the HLP itinerary server.
//!
//! Exposes the catalog/index query surface and the direction engine over
//! HTTP. Handlers answer with HTML fragments or JSON depending on the
//! Accept header. The core never produces markup: templates build their
//! highlighting from the annotator's span lists.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
