//! HLP itinerary server.
//!
//! A web application that answers: "my bus is running empty between this
//! depot and this line: what is the documented itinerary?"

pub mod catalog;
pub mod directions;
pub mod domain;
pub mod index;
pub mod web;
